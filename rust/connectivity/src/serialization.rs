// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON serialization for models.
//!
//! The snapshot format is name-keyed and portable: adjacency is written as
//! sorted neighbor-name lists, and numeric fields deserialize from either
//! JSON numbers or strings, because spreadsheet-originated project data
//! routinely arrives with coordinates and angles quoted. Strings pass
//! through the core coercion layer; malformed values are rejected, never
//! defaulted.

use serde::{Deserialize, Serialize};

use nalgebra::Point3;
use openframe_core::{coerce_f64, Orientation};

use crate::element::{ElementKind, StructuralElement};
use crate::error::{Error, Result};
use crate::model::Model;

/// A numeric field that may arrive as a JSON number or a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    /// Resolves to a finite `f64`, coercing strings through the normalizer.
    pub fn resolve(&self) -> Result<f64> {
        match self {
            NumberOrString::Number(v) if v.is_finite() => Ok(*v),
            NumberOrString::Number(v) => Err(Error::Core(
                openframe_core::Error::InvalidNumber(v.to_string()),
            )),
            NumberOrString::Text(s) => Ok(coerce_f64(s)?),
        }
    }
}

impl From<f64> for NumberOrString {
    fn from(v: f64) -> Self {
        NumberOrString::Number(v)
    }
}

/// Serializable representation of a full model.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub name: String,
    pub elements: Vec<ElementSnapshot>,
}

/// Serializable representation of one element, keyed by name.
#[derive(Debug, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub profile: String,
    /// Cross-section rotation in degrees; absent means 0°.
    #[serde(default)]
    pub orientation: Option<NumberOrString>,
    pub start: [NumberOrString; 3],
    pub end: [NumberOrString; 3],
    #[serde(default)]
    pub start_connected: Vec<String>,
    #[serde(default)]
    pub connected: Vec<String>,
    #[serde(default)]
    pub end_connected: Vec<String>,
}

impl Model {
    /// Serializes the model to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_snapshot())
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Creates a portable snapshot of the model.
    pub fn to_snapshot(&self) -> ModelSnapshot {
        let elements = self
            .iter()
            .map(|(_, e)| ElementSnapshot {
                name: e.name.clone(),
                kind: e.kind.as_str().to_string(),
                profile: e.profile.clone(),
                orientation: Some(e.orientation.degrees().into()),
                start: [e.start().x.into(), e.start().y.into(), e.start().z.into()],
                end: [e.end().x.into(), e.end().y.into(), e.end().z.into()],
                start_connected: self.sorted_names(e.start_connected()),
                connected: self.sorted_names(e.connected()),
                end_connected: self.sorted_names(e.end_connected()),
            })
            .collect();

        ModelSnapshot {
            name: self.name.clone(),
            elements,
        }
    }

    /// Deserializes a model from a JSON string.
    pub fn from_json(json: &str) -> Result<Model> {
        let snapshot: ModelSnapshot =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        Model::from_snapshot(&snapshot)
    }

    /// Reconstructs a model from a snapshot.
    ///
    /// Every element is validated (kind and orientation in domain, finite
    /// coordinates, unique names) before adjacency is restored; a snapshot
    /// referencing a neighbor that does not exist is rejected. If the
    /// restored adjacency turns out asymmetric (hand-edited or stale files),
    /// the graph is re-derived by a full rescan instead of failing the load.
    pub fn from_snapshot(snapshot: &ModelSnapshot) -> Result<Model> {
        let mut model = Model::new(snapshot.name.clone());

        for es in &snapshot.elements {
            let kind: ElementKind = es.kind.parse()?;
            let orientation = match &es.orientation {
                Some(v) => Orientation::from_degrees(v.resolve()?).map_err(Error::Core)?,
                None => Orientation::default(),
            };

            let start = resolve_point(&es.start)?;
            let end = resolve_point(&es.end)?;

            let element = StructuralElement::new(es.name.clone(), kind, start, end)
                .with_profile(es.profile.clone())
                .with_orientation(orientation);
            model.insert(element)?;
        }

        // Restore adjacency from the name lists, now that all keys exist.
        for es in &snapshot.elements {
            let key = model.require_key(&es.name)?;

            for (list, pick) in [
                (&es.start_connected, Pick::Start),
                (&es.connected, Pick::Mid),
                (&es.end_connected, Pick::End),
            ] {
                for neighbor_name in list {
                    let neighbor = model.key_of(neighbor_name).ok_or_else(|| {
                        Error::Serialization(format!(
                            "element {:?} references unknown neighbor {:?}",
                            es.name, neighbor_name
                        ))
                    })?;
                    if let Some(e) = model.elements.get_mut(key) {
                        match pick {
                            Pick::Start => e.start_connected.insert(neighbor),
                            Pick::Mid => e.connected.insert(neighbor),
                            Pick::End => e.end_connected.insert(neighbor),
                        };
                    }
                }
            }
        }

        if model.verify_adjacency().is_err() {
            tracing::warn!(
                model = %model.name,
                "snapshot adjacency inconsistent, re-deriving from geometry"
            );
            model.rebuild_adjacency();
        }

        Ok(model)
    }
}

#[derive(Clone, Copy)]
enum Pick {
    Start,
    Mid,
    End,
}

fn resolve_point(coords: &[NumberOrString; 3]) -> Result<Point3<f64>> {
    Ok(Point3::new(
        coords[0].resolve()?,
        coords[1].resolve()?,
        coords[2].resolve()?,
    ))
}

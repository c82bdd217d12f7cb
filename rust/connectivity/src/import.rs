// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Application of bulk-edit table rows.
//!
//! Bulk edits arrive as rows keyed by the human-readable column headers of
//! the editing tables ("Direction", "Elevation (m)", "Length (m)", ...).
//! Tokenizing CSV/XLSX is the importer's job; this module takes the
//! already-parsed values, validates them strictly against their closed
//! domains, and dispatches to the placement operation for the row's kind.
//! The only defaulting is the documented one: a missing orientation is 0°.
//! Everything else out of domain is rejected before any mutation.

use serde::Deserialize;

use nalgebra::Point3;
use openframe_core::{Direction2, Orientation};

use crate::element::{ElementKey, ElementKind};
use crate::error::{Error, Result};
use crate::graph::Warning;
use crate::model::Model;
use crate::placement::CantileverSpec;
use crate::serialization::NumberOrString;

/// One row of a member editing table.
///
/// Which columns are required depends on the kind: columns need a base point
/// and height; beams a start point, direction, and length; cantilevers an
/// anchor, direction, length, and elevation; bracings two anchors with
/// elevations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Kind")]
    pub kind: String,
    #[serde(rename = "Profile", default)]
    pub profile: String,
    #[serde(rename = "Orientation (deg)", default)]
    pub orientation: Option<NumberOrString>,
    #[serde(rename = "Direction", default)]
    pub direction: Option<String>,
    #[serde(rename = "X (m)", default)]
    pub x: Option<NumberOrString>,
    #[serde(rename = "Y (m)", default)]
    pub y: Option<NumberOrString>,
    #[serde(rename = "Z (m)", default)]
    pub z: Option<NumberOrString>,
    #[serde(rename = "Height (m)", default)]
    pub height: Option<NumberOrString>,
    #[serde(rename = "Length (m)", default)]
    pub length: Option<NumberOrString>,
    #[serde(rename = "Anchor", default)]
    pub anchor: Option<String>,
    #[serde(rename = "Elevation (m)", default)]
    pub elevation: Option<NumberOrString>,
    #[serde(rename = "Second anchor", default)]
    pub to_anchor: Option<String>,
    #[serde(rename = "Second elevation (m)", default)]
    pub to_elevation: Option<NumberOrString>,
}

impl MemberRow {
    /// Validates the row and places the element it describes.
    pub fn apply(&self, model: &mut Model) -> Result<(ElementKey, Vec<Warning>)> {
        let kind: ElementKind = self.kind.parse()?;

        // Missing orientation defaults to 0°; an invalid one is rejected.
        let orientation = match &self.orientation {
            Some(v) => Orientation::from_degrees(v.resolve()?).map_err(Error::Core)?,
            None => Orientation::default(),
        };

        match kind {
            ElementKind::Column => {
                let base = self.point()?;
                let height = self.require_number(&self.height, "Height (m)")?;
                model.place_column(self.name.clone(), base, height, &self.profile, orientation)
            }
            ElementKind::Beam => {
                let start = self.point()?;
                let direction = self.require_direction()?;
                let length = self.require_number(&self.length, "Length (m)")?;
                model.place_beam(
                    self.name.clone(),
                    start,
                    direction,
                    length,
                    &self.profile,
                    orientation,
                )
            }
            ElementKind::Cantilever => {
                let anchor = self.require_text(&self.anchor, "Anchor")?;
                let direction = self.require_direction()?;
                let length = self.require_number(&self.length, "Length (m)")?;
                let elevation = self.require_number(&self.elevation, "Elevation (m)")?;
                model.place_cantilever(CantileverSpec {
                    name: self.name.clone(),
                    anchor,
                    direction,
                    length,
                    elevation,
                    profile: self.profile.clone(),
                    orientation,
                })
            }
            ElementKind::Bracing => {
                let anchor = self.require_text(&self.anchor, "Anchor")?;
                let elevation = self.require_number(&self.elevation, "Elevation (m)")?;
                let to_anchor = self.require_text(&self.to_anchor, "Second anchor")?;
                let to_elevation =
                    self.require_number(&self.to_elevation, "Second elevation (m)")?;
                model.place_bracing(
                    self.name.clone(),
                    &anchor,
                    elevation,
                    &to_anchor,
                    to_elevation,
                    &self.profile,
                )
            }
        }
    }

    fn point(&self) -> Result<Point3<f64>> {
        Ok(Point3::new(
            self.require_number(&self.x, "X (m)")?,
            self.require_number(&self.y, "Y (m)")?,
            self.require_number(&self.z, "Z (m)")?,
        ))
    }

    fn require_direction(&self) -> Result<Direction2> {
        let raw = self.require_text(&self.direction, "Direction")?;
        Ok(raw.parse::<Direction2>()?)
    }

    fn require_number(&self, field: &Option<NumberOrString>, column: &'static str) -> Result<f64> {
        field
            .as_ref()
            .ok_or(Error::MissingField(column))?
            .resolve()
    }

    fn require_text(&self, field: &Option<String>, column: &'static str) -> Result<String> {
        field
            .as_ref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_string())
            .ok_or(Error::MissingField(column))
    }
}

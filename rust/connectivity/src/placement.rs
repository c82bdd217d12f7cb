// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authoring operations: from editing parameters to placed elements.
//!
//! A user-facing edit supplies an anchor, a symbolic direction, and numeric
//! lengths/elevations; this module resolves them into concrete endpoints
//! through the geometry crate and hands the element to the graph manager.
//! All parameter validation happens before any mutation, so a rejected edit
//! leaves the model untouched.

use nalgebra::Point3;

use openframe_core::{Direction2, Orientation, COORD_TOLERANCE};
use openframe_geometry::local_to_global;

use crate::element::{round_point, ElementKey, ElementKind, StructuralElement};
use crate::error::{Error, Result};
use crate::graph::Warning;
use crate::model::Model;

/// Parameters for placing a cantilever off an anchor element.
#[derive(Debug, Clone)]
pub struct CantileverSpec {
    /// Name of the new element.
    pub name: String,
    /// Name of the element the cantilever springs from.
    pub anchor: String,
    /// Horizontal direction the cantilever extends along.
    pub direction: Direction2,
    /// Length of the cantilever, meters.
    pub length: f64,
    /// Elevation of the attachment point on the anchor's axis, meters.
    pub elevation: f64,
    /// Cross-section reference.
    pub profile: String,
    /// Cross-section rotation.
    pub orientation: Orientation,
}

impl Model {
    /// Places a vertical column from `base` extending `height` upward.
    pub fn place_column(
        &mut self,
        name: impl Into<String>,
        base: Point3<f64>,
        height: f64,
        profile: impl Into<String>,
        orientation: Orientation,
    ) -> Result<(ElementKey, Vec<Warning>)> {
        ensure_finite(height, "height")?;

        let top = Point3::new(base.x, base.y + height, base.z);
        let element = StructuralElement::new(name, ElementKind::Column, base, top)
            .with_profile(profile)
            .with_orientation(orientation);
        self.add_element(element)
    }

    /// Places a horizontal beam from `start` along `direction`.
    pub fn place_beam(
        &mut self,
        name: impl Into<String>,
        start: Point3<f64>,
        direction: Direction2,
        length: f64,
        profile: impl Into<String>,
        orientation: Orientation,
    ) -> Result<(ElementKey, Vec<Warning>)> {
        ensure_finite(length, "length")?;

        let end = local_to_global(&start, &Point3::new(length, 0.0, 0.0), direction);
        let element = StructuralElement::new(name, ElementKind::Beam, start, end)
            .with_profile(profile)
            .with_orientation(orientation);
        self.add_element(element)
    }

    /// Places a cantilever anchored on another element's axis.
    ///
    /// The start point sits on the anchor at `spec.elevation`; the end point
    /// is `spec.length` along `spec.direction` in the local frame at that
    /// point. The anchor must exist and span the elevation.
    pub fn place_cantilever(&mut self, spec: CantileverSpec) -> Result<(ElementKey, Vec<Warning>)> {
        ensure_finite(spec.length, "length")?;
        ensure_finite(spec.elevation, "elevation")?;

        let origin = self.axis_point_at_elevation(&spec.anchor, spec.elevation)?;
        let end = local_to_global(&origin, &Point3::new(spec.length, 0.0, 0.0), spec.direction);

        let element = StructuralElement::new(spec.name, ElementKind::Cantilever, origin, end)
            .with_profile(spec.profile)
            .with_orientation(spec.orientation);
        self.add_element(element)
    }

    /// Places a diagonal bracing between two anchor elements.
    ///
    /// Each end sits on its anchor's axis at the given elevation.
    pub fn place_bracing(
        &mut self,
        name: impl Into<String>,
        from_anchor: &str,
        from_elevation: f64,
        to_anchor: &str,
        to_elevation: f64,
        profile: impl Into<String>,
    ) -> Result<(ElementKey, Vec<Warning>)> {
        ensure_finite(from_elevation, "elevation")?;
        ensure_finite(to_elevation, "elevation")?;

        let start = self.axis_point_at_elevation(from_anchor, from_elevation)?;
        let end = self.axis_point_at_elevation(to_anchor, to_elevation)?;

        let element = StructuralElement::new(name, ElementKind::Bracing, start, end)
            .with_profile(profile);
        self.add_element(element)
    }

    /// The point on an element's axis at a given elevation.
    ///
    /// For a member with vertical extent the axis is interpolated; the
    /// elevation must fall within the member's span. A horizontal member
    /// only matches its own elevation, at its start point.
    pub fn axis_point_at_elevation(&self, name: &str, elevation: f64) -> Result<Point3<f64>> {
        let element = self.require(name)?;
        let start = element.start();
        let end = element.end();
        let dy = end.y - start.y;

        if dy.abs() <= COORD_TOLERANCE {
            if (start.y - elevation).abs() <= COORD_TOLERANCE {
                return Ok(start);
            }
            return Err(Error::ElevationOutOfSpan {
                element: name.to_string(),
                elevation,
            });
        }

        let t = (elevation - start.y) / dy;
        if !(-1e-9..=1.0 + 1e-9).contains(&t) {
            return Err(Error::ElevationOutOfSpan {
                element: name.to_string(),
                elevation,
            });
        }

        Ok(round_point(&Point3::from(
            start.coords + (end.coords - start.coords) * t,
        )))
    }
}

fn ensure_finite(value: f64, what: &'static str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteValue(what))
    }
}

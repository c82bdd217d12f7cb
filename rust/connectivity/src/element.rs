// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural elements: columns, beams, cantilevers, and bracings.
//!
//! An element is a straight member between two rounded 3D endpoints, plus
//! its cross-section reference and orientation. Its three adjacency sets are
//! crate-private: only the graph manager ([`crate::graph`]) may mutate them,
//! which is what keeps the symmetry invariant enforceable in one place.

use std::fmt;
use std::str::FromStr;

use nalgebra::Point3;
use rustc_hash::FxHashSet;
use slotmap::new_key_type;

use openframe_core::{round_coordinate, Orientation};
use openframe_geometry::midpoint;

use crate::error::Error;

new_key_type! {
    /// Stable generational key for an element in a [`crate::Model`].
    pub struct ElementKey;
}

/// The structural role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Column,
    Beam,
    Cantilever,
    Bracing,
}

impl ElementKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Column => "column",
            ElementKind::Beam => "beam",
            ElementKind::Cantilever => "cantilever",
            ElementKind::Bracing => "bracing",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "column" => Ok(ElementKind::Column),
            "beam" => Ok(ElementKind::Beam),
            "cantilever" => Ok(ElementKind::Cantilever),
            "bracing" => Ok(ElementKind::Bracing),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

/// A structural member between two endpoints in the global frame.
#[derive(Debug, Clone)]
pub struct StructuralElement {
    /// Model-unique name; the key used in adjacency queries and files.
    pub name: String,
    /// Structural role.
    pub kind: ElementKind,
    /// Cross-section reference; opaque to the kernel.
    pub profile: String,
    /// Discrete cross-section rotation about the member's own axis.
    pub orientation: Orientation,

    pub(crate) start: Point3<f64>,
    pub(crate) end: Point3<f64>,

    // Adjacency, maintained exclusively by the graph manager.
    pub(crate) start_connected: FxHashSet<ElementKey>,
    pub(crate) connected: FxHashSet<ElementKey>,
    pub(crate) end_connected: FxHashSet<ElementKey>,
}

impl StructuralElement {
    /// Creates an element with rounded endpoints and empty adjacency.
    pub fn new(
        name: impl Into<String>,
        kind: ElementKind,
        start: Point3<f64>,
        end: Point3<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            profile: String::new(),
            orientation: Orientation::default(),
            start: round_point(&start),
            end: round_point(&end),
            start_connected: FxHashSet::default(),
            connected: FxHashSet::default(),
            end_connected: FxHashSet::default(),
        }
    }

    /// Builder-style profile assignment.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Builder-style orientation assignment.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Start position in the global frame.
    pub fn start(&self) -> Point3<f64> {
        self.start
    }

    /// End position in the global frame.
    pub fn end(&self) -> Point3<f64> {
        self.end
    }

    /// Euclidean length of the member.
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Geometric midpoint of the member.
    pub fn midpoint(&self) -> Point3<f64> {
        midpoint(&self.start, &self.end)
    }

    /// `true` when both rounded endpoints coincide.
    ///
    /// A modeling warning, not a hard error: transient zero-length states
    /// occur during interactive editing.
    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }

    /// Keys of neighbors touching this element's start point.
    pub fn start_connected(&self) -> impl Iterator<Item = ElementKey> + '_ {
        self.start_connected.iter().copied()
    }

    /// Keys of neighbors touching this element mid-span.
    pub fn connected(&self) -> impl Iterator<Item = ElementKey> + '_ {
        self.connected.iter().copied()
    }

    /// Keys of neighbors touching this element's end point.
    pub fn end_connected(&self) -> impl Iterator<Item = ElementKey> + '_ {
        self.end_connected.iter().copied()
    }

    /// Total number of adjacency references on this element.
    pub fn neighbor_count(&self) -> usize {
        self.start_connected.len() + self.connected.len() + self.end_connected.len()
    }

    /// `true` if any adjacency set references `key`.
    pub fn touches(&self, key: ElementKey) -> bool {
        self.start_connected.contains(&key)
            || self.connected.contains(&key)
            || self.end_connected.contains(&key)
    }

    /// Clears all three adjacency sets.
    pub(crate) fn clear_adjacency(&mut self) {
        self.start_connected.clear();
        self.connected.clear();
        self.end_connected.clear();
    }

    /// Removes `key` from all three adjacency sets.
    pub(crate) fn forget(&mut self, key: ElementKey) {
        self.start_connected.remove(&key);
        self.connected.remove(&key);
        self.end_connected.remove(&key);
    }

    /// Replaces both endpoints, rounding to coordinate precision.
    pub(crate) fn set_endpoints(&mut self, start: &Point3<f64>, end: &Point3<f64>) {
        self.start = round_point(start);
        self.end = round_point(end);
    }
}

/// Rounds all three coordinates of a point to millimeter precision.
pub(crate) fn round_point(p: &Point3<f64>) -> Point3<f64> {
    Point3::new(
        round_coordinate(p.x),
        round_coordinate(p.y),
        round_coordinate(p.z),
    )
}

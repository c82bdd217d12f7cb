// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The connectivity graph manager.
//!
//! Sole owner of adjacency mutation. Integrating an element scans the model
//! for touches: an endpoint of one element lying on the other element
//! (within coordinate tolerance) links both sides symmetrically, classified
//! by where the touch point sits on each element: `start_connected`,
//! `end_connected`, or `connected` for mid-span. Segments that merely cross
//! at interior points of both get one advisory [`Warning::Crossing`] and no
//! adjacency.
//!
//! Moving an element is strictly two-phase: sever everything, then
//! reintegrate at the new endpoints. Incremental adjacency adjustment under
//! arbitrary moves cannot guarantee the symmetry invariant, so it is not
//! offered.

use std::fmt;

use nalgebra::Point3;
use rustc_hash::FxHashSet;

use openframe_geometry::{point_on_segment, points_coincide, segments_cross};

use crate::element::{ElementKey, StructuralElement};
use crate::error::{Error, Result};
use crate::model::Model;

/// Advisory report produced by an editing operation.
///
/// Warnings accompany successful results and never block an edit; the model
/// remains valid and queryable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// An element's rounded endpoints coincide.
    ZeroLength { element: String },
    /// Two unconnected elements occupy overlapping space.
    Crossing { first: String, second: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::ZeroLength { element } => {
                write!(f, "element has zero length: {element}")
            }
            Warning::Crossing { first, second } => {
                write!(f, "elements cross without a connection: {first} / {second}")
            }
        }
    }
}

/// Where a touch point sits on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Site {
    Start,
    Mid,
    End,
}

fn classify(point: &Point3<f64>, element_start: &Point3<f64>, element_end: &Point3<f64>) -> Site {
    if points_coincide(point, element_start) {
        Site::Start
    } else if points_coincide(point, element_end) {
        Site::End
    } else {
        Site::Mid
    }
}

fn site_set(element: &mut StructuralElement, site: Site) -> &mut FxHashSet<ElementKey> {
    match site {
        Site::Start => &mut element.start_connected,
        Site::Mid => &mut element.connected,
        Site::End => &mut element.end_connected,
    }
}

fn ensure_finite(point: &Point3<f64>) -> Result<()> {
    if point.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(Error::NonFiniteValue("coordinate"))
    }
}

impl Model {
    /// Places a new element into the model: Unplaced → Placed.
    ///
    /// Validation (unique name, finite endpoints) happens before any
    /// mutation. On success the element is integrated into the connectivity
    /// graph and any advisories (zero length, crossings against existing
    /// members) are returned alongside the new key.
    pub fn add_element(
        &mut self,
        element: StructuralElement,
    ) -> Result<(ElementKey, Vec<Warning>)> {
        ensure_finite(&element.start())?;
        ensure_finite(&element.end())?;

        let zero_length = element.is_zero_length();
        let name = element.name.clone();
        let key = self.insert(element)?;

        let mut warnings = Vec::new();
        if zero_length {
            warnings.push(Warning::ZeroLength { element: name });
        }
        warnings.extend(self.integrate(key));

        debug_assert!(self.verify_adjacency().is_ok());
        Ok((key, warnings))
    }

    /// Moves an element's endpoints: Placed → Placed.
    ///
    /// The element's old adjacency is fully severed before reintegration at
    /// the new endpoints; the two-phase sequence lives here so a caller
    /// cannot perform it partially.
    pub fn move_element(
        &mut self,
        name: &str,
        start: Point3<f64>,
        end: Point3<f64>,
    ) -> Result<Vec<Warning>> {
        ensure_finite(&start)?;
        ensure_finite(&end)?;
        let key = self.require_key(name)?;

        self.sever(key);
        if let Some(e) = self.elements.get_mut(key) {
            e.set_endpoints(&start, &end);
        }

        let mut warnings = Vec::new();
        if self.elements.get(key).is_some_and(|e| e.is_zero_length()) {
            warnings.push(Warning::ZeroLength {
                element: name.to_string(),
            });
        }
        warnings.extend(self.integrate(key));

        debug_assert!(self.verify_adjacency().is_ok());
        Ok(warnings)
    }

    /// Removes an element: Placed → Removed.
    ///
    /// Every neighbor's reverse reference is dropped before the element
    /// leaves the arena; the returned element carries empty adjacency.
    pub fn remove_element(&mut self, name: &str) -> Result<StructuralElement> {
        let key = self.require_key(name)?;

        self.sever(key);
        let element = self
            .take(key)
            .ok_or_else(|| Error::UnknownElement(name.to_string()))?;

        debug_assert!(self.verify_adjacency().is_ok());
        Ok(element)
    }

    /// Audits the adjacency invariants: symmetry, no dangling keys, and a
    /// consistent name index.
    ///
    /// A failure here is a kernel bug, not user error; mutating operations
    /// assert it in debug builds. Production callers that hit a failure can
    /// recover with [`Model::rebuild_adjacency`].
    pub fn verify_adjacency(&self) -> Result<()> {
        if self.names.len() != self.elements.len() {
            return Err(Error::AdjacencyAsymmetry(format!(
                "name index holds {} entries for {} elements",
                self.names.len(),
                self.elements.len()
            )));
        }

        for (key, element) in &self.elements {
            let all = element
                .start_connected
                .iter()
                .chain(element.connected.iter())
                .chain(element.end_connected.iter());

            for &neighbor_key in all {
                match self.elements.get(neighbor_key) {
                    None => {
                        return Err(Error::DanglingReference(element.name.clone()));
                    }
                    Some(neighbor) => {
                        if !neighbor.touches(key) {
                            return Err(Error::AdjacencyAsymmetry(format!(
                                "{} references {} without a reverse reference",
                                element.name, neighbor.name
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Re-derives the whole connectivity graph by a full pairwise rescan.
    ///
    /// Recovery path for an invariant breach: clears every adjacency set and
    /// reintegrates all pairs, returning the full set of advisories the
    /// rescan surfaces.
    pub fn rebuild_adjacency(&mut self) -> Vec<Warning> {
        tracing::error!(model = %self.name, "re-deriving element adjacency by full rescan");

        let keys = self.order.clone();
        for &k in &keys {
            if let Some(e) = self.elements.get_mut(k) {
                e.clear_adjacency();
            }
        }

        let mut warnings = Vec::new();
        for &k in &keys {
            if let Some(e) = self.elements.get(k) {
                if e.is_zero_length() {
                    warnings.push(Warning::ZeroLength {
                        element: e.name.clone(),
                    });
                }
            }
        }
        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                if let Some(w) = self.integrate_pair(keys[i], keys[j]) {
                    warnings.push(w);
                }
            }
        }

        debug_assert!(self.verify_adjacency().is_ok());
        warnings
    }

    /// Integrates one element against every other element in the model.
    fn integrate(&mut self, key: ElementKey) -> Vec<Warning> {
        let others: Vec<ElementKey> = self.order.iter().copied().filter(|&k| k != key).collect();

        let mut warnings = Vec::new();
        for other in others {
            if let Some(w) = self.integrate_pair(key, other) {
                warnings.push(w);
            }
        }
        warnings
    }

    /// Connects one pair of elements, symmetrically, or reports a crossing.
    ///
    /// Endpoint touches update both sides' adjacency sets (classified by
    /// where the point sits on each element). A pair with no touch that
    /// still intersects yields a single crossing advisory and no adjacency.
    fn integrate_pair(&mut self, a: ElementKey, b: ElementKey) -> Option<Warning> {
        let (a_start, a_end) = {
            let e = self.elements.get(a)?;
            (e.start(), e.end())
        };
        let (b_start, b_end) = {
            let e = self.elements.get(b)?;
            (e.start(), e.end())
        };

        let mut links: Vec<(Site, Site)> = Vec::new();

        if point_on_segment(&a_start, &b_start, &b_end) {
            links.push((Site::Start, classify(&a_start, &b_start, &b_end)));
        }
        if point_on_segment(&a_end, &b_start, &b_end) {
            links.push((Site::End, classify(&a_end, &b_start, &b_end)));
        }
        if point_on_segment(&b_start, &a_start, &a_end) {
            links.push((classify(&b_start, &a_start, &a_end), Site::Start));
        }
        if point_on_segment(&b_end, &a_start, &a_end) {
            links.push((classify(&b_end, &a_start, &a_end), Site::End));
        }

        if links.is_empty() {
            if segments_cross(&a_start, &a_end, &b_start, &b_end) {
                return Some(Warning::Crossing {
                    first: self.elements.get(a)?.name.clone(),
                    second: self.elements.get(b)?.name.clone(),
                });
            }
            return None;
        }

        for (site_a, site_b) in links {
            if let Some(e) = self.elements.get_mut(a) {
                site_set(e, site_a).insert(b);
            }
            if let Some(e) = self.elements.get_mut(b) {
                site_set(e, site_b).insert(a);
            }
        }
        None
    }

    /// Removes every adjacency reference to and from an element.
    fn sever(&mut self, key: ElementKey) {
        let neighbors: Vec<ElementKey> = match self.elements.get(key) {
            Some(e) => e
                .start_connected
                .iter()
                .chain(e.connected.iter())
                .chain(e.end_connected.iter())
                .copied()
                .collect(),
            None => return,
        };

        for nk in neighbors {
            if let Some(n) = self.elements.get_mut(nk) {
                n.forget(key);
            }
        }
        if let Some(e) = self.elements.get_mut(key) {
            e.clear_adjacency();
        }
    }
}

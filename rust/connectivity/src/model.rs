// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for one structural system.
//!
//! A [`Model`] owns its elements in a slot map with stable, generational
//! keys, an insertion-order list, and a name index. Element names are unique
//! within a model; every adjacency reference points at a live element.
//! The model is exclusively owned by its edit session: the kernel keeps no
//! global state, and callers commit a finished model back into whatever
//! state container the surrounding application uses.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::element::{ElementKey, StructuralElement};
use crate::error::{Error, Result};

/// An ordered collection of structural elements plus their connectivity.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Human-readable model name (one pipe rack, one open frame, ...).
    pub name: String,

    pub(crate) elements: SlotMap<ElementKey, StructuralElement>,
    /// Insertion order of live element keys.
    pub(crate) order: Vec<ElementKey>,
    /// Name → key index; kept in lockstep with `elements`.
    pub(crate) names: FxHashMap<String, ElementKey>,
}

impl Model {
    /// Creates an empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: SlotMap::with_key(),
            order: Vec::new(),
            names: FxHashMap::default(),
        }
    }

    /// Number of elements in the model.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// `true` when the model has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element behind a key, or `None` if it was removed.
    pub fn get(&self, key: ElementKey) -> Option<&StructuralElement> {
        self.elements.get(key)
    }

    /// Returns the key for an element name.
    pub fn key_of(&self, name: &str) -> Option<ElementKey> {
        self.names.get(name).copied()
    }

    /// Returns the element with the given name.
    pub fn get_by_name(&self, name: &str) -> Option<&StructuralElement> {
        self.key_of(name).and_then(|k| self.elements.get(k))
    }

    /// `true` when an element with this name exists.
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Iterates elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementKey, &StructuralElement)> + '_ {
        self.order
            .iter()
            .filter_map(move |&k| self.elements.get(k).map(|e| (k, e)))
    }

    /// Element names in insertion order.
    pub fn element_names(&self) -> Vec<&str> {
        self.iter().map(|(_, e)| e.name.as_str()).collect()
    }

    // --- Adjacency queries (by name, sorted for stable output) ---

    /// Names of neighbors touching the element's start point.
    pub fn start_connected_names(&self, name: &str) -> Result<Vec<String>> {
        let e = self.require(name)?;
        Ok(self.sorted_names(e.start_connected.iter().copied()))
    }

    /// Names of neighbors touching the element mid-span.
    pub fn connected_names(&self, name: &str) -> Result<Vec<String>> {
        let e = self.require(name)?;
        Ok(self.sorted_names(e.connected.iter().copied()))
    }

    /// Names of neighbors touching the element's end point.
    pub fn end_connected_names(&self, name: &str) -> Result<Vec<String>> {
        let e = self.require(name)?;
        Ok(self.sorted_names(e.end_connected.iter().copied()))
    }

    /// Names of all neighbors of the element, deduplicated and sorted.
    pub fn neighbor_names(&self, name: &str) -> Result<Vec<String>> {
        let e = self.require(name)?;
        let mut names = self.sorted_names(
            e.start_connected
                .iter()
                .chain(e.connected.iter())
                .chain(e.end_connected.iter())
                .copied(),
        );
        names.dedup();
        Ok(names)
    }

    // --- Crate-internal mutation (used by the graph manager) ---

    /// Inserts a fresh element, rejecting duplicate names before mutation.
    pub(crate) fn insert(&mut self, element: StructuralElement) -> Result<ElementKey> {
        if self.names.contains_key(&element.name) {
            return Err(Error::DuplicateName(element.name));
        }

        let name = element.name.clone();
        let key = self.elements.insert(element);
        self.order.push(key);
        self.names.insert(name, key);
        Ok(key)
    }

    /// Removes an element from storage, order, and the name index.
    ///
    /// The caller (graph manager) must have severed its adjacency first.
    pub(crate) fn take(&mut self, key: ElementKey) -> Option<StructuralElement> {
        let element = self.elements.remove(key)?;
        self.order.retain(|&k| k != key);
        self.names.remove(&element.name);
        Some(element)
    }

    pub(crate) fn require(&self, name: &str) -> Result<&StructuralElement> {
        self.get_by_name(name)
            .ok_or_else(|| Error::UnknownElement(name.to_string()))
    }

    pub(crate) fn require_key(&self, name: &str) -> Result<ElementKey> {
        self.key_of(name)
            .ok_or_else(|| Error::UnknownElement(name.to_string()))
    }

    pub(crate) fn sorted_names(&self, keys: impl Iterator<Item = ElementKey>) -> Vec<String> {
        let mut names: Vec<String> = keys
            .filter_map(|k| self.elements.get(k).map(|e| e.name.clone()))
            .collect();
        names.sort();
        names
    }
}

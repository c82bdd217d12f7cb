// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # OpenFrame Connectivity
//!
//! Live connectivity graph between the structural elements of a 3D model.
//!
//! A [`Model`] owns its elements in an arena with stable keys and keeps,
//! per element, three adjacency sets: neighbors touching at the start, at
//! the end, and mid-span. The graph manager is the only code that mutates
//! those sets, and it does so symmetrically: if A records B at a point,
//! B records A at the same point. Editing operations are two-phase.
//! Moving an element severs its old adjacency completely before
//! reintegrating at the new endpoints, so a partially-updated graph is
//! never observable after an operation returns.
//!
//! Geometrically suspect configurations (zero-length members, members
//! crossing without a declared connection) are reported as advisory
//! [`Warning`]s alongside successful results; they never block an edit.

pub mod element;
pub mod error;
pub mod graph;
pub mod import;
pub mod model;
pub mod placement;
pub mod serialization;

pub use element::{ElementKey, ElementKind, StructuralElement};
pub use error::{Error, Result};
pub use graph::Warning;
pub use import::MemberRow;
pub use model::Model;
pub use placement::CantileverSpec;
pub use serialization::{ElementSnapshot, ModelSnapshot, NumberOrString};

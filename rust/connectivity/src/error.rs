// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for model and connectivity operations.

/// Result type alias for connectivity operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing or loading a model.
///
/// Domain violations (`UnknownElement`, `DuplicateName`,
/// `ElevationOutOfSpan`, anything from the core codec) are rejected before
/// any mutation is applied. The invariant-breach variants
/// (`AdjacencyAsymmetry`, `DanglingReference`) indicate a bug in the graph
/// manager itself: they surface through [`crate::Model::verify_adjacency`]
/// and are asserted after every mutating operation in debug builds.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A referenced element name does not exist in the model.
    #[error("unknown element: {0:?}")]
    UnknownElement(String),

    /// An element with this name already exists in the model.
    #[error("duplicate element name: {0:?}")]
    DuplicateName(String),

    /// An anchor element does not span the requested elevation.
    #[error("element {element:?} does not reach elevation {elevation}")]
    ElevationOutOfSpan { element: String, elevation: f64 },

    /// A non-finite length, elevation, or coordinate.
    #[error("non-finite value for {0}")]
    NonFiniteValue(&'static str),

    /// An element kind string outside the closed set.
    #[error("unknown element kind: {0:?}")]
    UnknownKind(String),

    /// A tabular row is missing a column its element kind requires.
    #[error("missing required field {0:?}")]
    MissingField(&'static str),

    /// Element A references B at a point where B does not reference A.
    #[error("adjacency asymmetry: {0}")]
    AdjacencyAsymmetry(String),

    /// An adjacency set contains a key with no element behind it.
    #[error("dangling adjacency reference in {0:?}")]
    DanglingReference(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A domain violation from the codec/normalization layer.
    #[error(transparent)]
    Core(#[from] openframe_core::Error),
}

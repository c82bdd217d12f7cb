// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the codec and normalization layer.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when an input value falls outside its closed domain.
///
/// These are rejected-input errors: the caller surfaces them to the user and
/// no state has been mutated. Documented default-on-invalid conversions
/// (orientation → direction, unmapped angle → +X) never raise them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A direction string outside the `+X/-X/+Z/-Z` set (or `±Y` for 3D).
    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),

    /// An orientation angle outside the eight-value 45° grid.
    #[error("incorrect orientation value: {0}")]
    InvalidOrientation(f64),

    /// An axis name outside `{x, y, z}`.
    #[error("unknown axis: {0:?}")]
    UnknownAxis(String),

    /// A numeric field that could not be coerced to a finite float.
    #[error("invalid numeric value: {0:?}")]
    InvalidNumber(String),
}

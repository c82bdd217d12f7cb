// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coercion of spreadsheet-originated numeric strings.
//!
//! Bulk edits and project files carry coordinates and lengths that arrive as
//! strings (CSV/XLSX cells, loosely-typed JSON). They pass through here once,
//! before being accepted as model data; malformed input is rejected rather
//! than defaulted.

use crate::error::{Error, Result};

/// Parses a numeric string into a finite `f64`.
///
/// Accepts the usual float forms (`"1.5"`, `"-0.25"`, `"1e3"`) with
/// surrounding whitespace. Rejects empty input, trailing garbage, and
/// non-finite results.
pub fn coerce_f64(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidNumber(raw.to_string()));
    }

    let value: f64 = lexical_core::parse(trimmed.as_bytes())
        .map_err(|_| Error::InvalidNumber(raw.to_string()))?;

    if !value.is_finite() {
        return Err(Error::InvalidNumber(raw.to_string()));
    }

    Ok(value)
}

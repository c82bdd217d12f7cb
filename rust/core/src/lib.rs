// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # OpenFrame Core
//!
//! Numeric normalization and the direction/orientation codec shared by the
//! OpenFrame structural modeling kernel.
//!
//! Coordinates in OpenFrame models are meter-valued and pass through
//! millimeter-step rounding ([`round_coordinate`]) after every geometric
//! transform, so two coordinates computed through different paths but
//! representing the same physical point compare equal. Structural members
//! are placed along symbolic horizontal directions ([`Direction2`]) and
//! carry a discrete cross-section rotation ([`Orientation`]); this crate
//! owns those closed domains and their strict parse functions.

pub mod direction;
pub mod error;
pub mod numbers;
pub mod units;

pub use direction::{Axis, Direction2, Direction3, Orientation};
pub use error::{Error, Result};
pub use numbers::coerce_f64;
pub use units::{
    deg_to_rad, rad_to_deg, round_coordinate, round_to, to_meters, to_millimeters,
    COORD_PRECISION, COORD_TOLERANCE,
};

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # OpenFrame Geometry
//!
//! Coordinate frame conversion and segment geometry for the OpenFrame
//! structural modeling kernel.
//!
//! Members are authored in a local frame anchored at a parent's position and
//! aligned to a cardinal horizontal direction; this crate converts between
//! that frame and the global model frame ([`frame`]), rotates points in-plane
//! and about coordinate axes ([`rotation`]), classifies the dominant axis
//! between two points ([`classify`]), and detects members occupying
//! overlapping space ([`crossing`]).
//!
//! Every function is pure; results pass through millimeter rounding
//! (`openframe_core::round_coordinate`) so that coordinates computed through
//! different transform chains compare equal.

pub mod classify;
pub mod crossing;
pub mod frame;
pub mod rotation;

pub use classify::{dominant_axis, dominant_axis_simple, segment_direction, SegmentDirection};
pub use crossing::{distance_to_segment, point_on_segment, points_coincide, segments_cross};
pub use frame::{
    global_to_local, global_to_local_oriented, local_to_global, local_to_global_oriented,
};
pub use rotation::{midpoint, point_at_distance, rotate_about_axis, rotate_point_2d};

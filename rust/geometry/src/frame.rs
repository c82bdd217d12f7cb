// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion between a member's local frame and the global model frame.
//!
//! A local frame is anchored at an origin in the global frame and rotated
//! about the vertical (Y) axis so that local `+X` points along the frame's
//! assigned horizontal direction. For the four cardinal directions the
//! rotation is a component swap/negate, implemented case by case rather than
//! through a rotation matrix so that axis-aligned frames convert exactly:
//! the round trip `global_to_local(local_to_global(p))` reproduces `p`
//! without trigonometric residue.

use nalgebra::Point3;
use openframe_core::{round_coordinate, Direction2, Orientation};

/// Maps a point authored in a local frame into the global frame.
///
/// Rotates `local` about the vertical axis by the angle implied by `frame`
/// (`+X → 0°`, `+Z → 90°`, `-X → 180°`, `-Z → 270°`), translates by
/// `origin`, and rounds to coordinate precision.
pub fn local_to_global(
    origin: &Point3<f64>,
    local: &Point3<f64>,
    frame: Direction2,
) -> Point3<f64> {
    let (x, z) = match frame {
        Direction2::PlusX => (local.x, local.z),
        Direction2::PlusZ => (-local.z, local.x),
        Direction2::MinusX => (-local.x, -local.z),
        Direction2::MinusZ => (local.z, -local.x),
    };

    Point3::new(
        round_coordinate(origin.x + x),
        round_coordinate(origin.y + local.y),
        round_coordinate(origin.z + z),
    )
}

/// Maps a global-frame point into the local frame at `origin` / `frame`.
///
/// Exact inverse of [`local_to_global`], implemented directly per the four
/// cardinal cases.
pub fn global_to_local(
    origin: &Point3<f64>,
    point: &Point3<f64>,
    frame: Direction2,
) -> Point3<f64> {
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;
    let dz = point.z - origin.z;

    let (x, z) = match frame {
        Direction2::PlusX => (dx, dz),
        Direction2::PlusZ => (dz, -dx),
        Direction2::MinusX => (-dx, -dz),
        Direction2::MinusZ => (-dz, dx),
    };

    Point3::new(round_coordinate(x), round_coordinate(dy), round_coordinate(z))
}

/// [`local_to_global`] keyed by a discrete orientation angle.
///
/// The four cardinal orientations delegate to the exact cardinal cases. A
/// diagonal orientation has no cardinal frame; the point is returned
/// unchanged (identity fallback) and the event is logged, since members are
/// only ever framed along cardinal directions in practice.
pub fn local_to_global_oriented(
    origin: &Point3<f64>,
    local: &Point3<f64>,
    orientation: Orientation,
) -> Point3<f64> {
    match orientation.direction2() {
        Some(frame) => local_to_global(origin, local, frame),
        None => {
            tracing::debug!(%orientation, "local_to_global: non-cardinal frame, identity fallback");
            *local
        }
    }
}

/// [`global_to_local`] keyed by a discrete orientation angle.
///
/// Diagonal orientations hit the identity fallback: the point is returned
/// unchanged and the event is logged rather than guessing a general inverse.
pub fn global_to_local_oriented(
    origin: &Point3<f64>,
    point: &Point3<f64>,
    orientation: Orientation,
) -> Point3<f64> {
    match orientation.direction2() {
        Some(frame) => global_to_local(origin, point, frame),
        None => {
            tracing::debug!(%orientation, "global_to_local: non-cardinal frame, identity fallback");
            *point
        }
    }
}

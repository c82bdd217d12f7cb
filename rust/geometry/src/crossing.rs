// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Detection of members occupying overlapping space.
//!
//! Two segments "cross" when they come within coordinate tolerance of each
//! other at a point that is not a shared declared endpoint. The test is a
//! pure predicate; the connectivity layer decides what to do with a positive
//! result (emit an advisory warning, never block the edit).
//!
//! The implementation is the clamped closest-point distance between two
//! segments, compared squared against the millimeter tolerance. It is
//! symmetric in its arguments and deliberately conservative: degenerate
//! segments never cross, and separations beyond tolerance never cross.

use nalgebra::Point3;
use openframe_core::COORD_TOLERANCE;

/// `true` when two points are the same within coordinate tolerance.
pub fn points_coincide(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    (a - b).norm_squared() <= COORD_TOLERANCE * COORD_TOLERANCE
}

/// Distance from `point` to the segment `start → end`.
pub fn distance_to_segment(
    point: &Point3<f64>,
    start: &Point3<f64>,
    end: &Point3<f64>,
) -> f64 {
    let dir = end - start;
    let len_sq = dir.norm_squared();
    if len_sq <= f64::EPSILON {
        return (point - start).norm();
    }

    let t = ((point - start).dot(&dir) / len_sq).clamp(0.0, 1.0);
    let closest = start + dir * t;
    (point - closest).norm()
}

/// `true` when `point` lies on the segment within coordinate tolerance.
pub fn point_on_segment(point: &Point3<f64>, start: &Point3<f64>, end: &Point3<f64>) -> bool {
    distance_to_segment(point, start, end) <= COORD_TOLERANCE
}

/// Tests whether two 3D segments intersect away from a shared endpoint.
///
/// Returns `true` when the segments come within coordinate tolerance of
/// each other and no endpoint of one coincides with an endpoint of the
/// other. Shared endpoints are a declared connection, not a crossing; a
/// zero-length segment never crosses anything; collinear overlapping
/// segments do cross (they occupy overlapping space). Symmetric:
/// `segments_cross(a, b) == segments_cross(b, a)`.
pub fn segments_cross(
    a_start: &Point3<f64>,
    a_end: &Point3<f64>,
    b_start: &Point3<f64>,
    b_end: &Point3<f64>,
) -> bool {
    // A shared declared endpoint is a connection, never a crossing.
    if points_coincide(a_start, b_start)
        || points_coincide(a_start, b_end)
        || points_coincide(a_end, b_start)
        || points_coincide(a_end, b_end)
    {
        return false;
    }

    // Degenerate members are flagged elsewhere (zero-length warning).
    if points_coincide(a_start, a_end) || points_coincide(b_start, b_end) {
        return false;
    }

    let dist_sq = segment_distance_squared(a_start, a_end, b_start, b_end);
    dist_sq <= COORD_TOLERANCE * COORD_TOLERANCE
}

/// Squared minimal distance between two segments (clamped closest points).
fn segment_distance_squared(
    p1: &Point3<f64>,
    q1: &Point3<f64>,
    p2: &Point3<f64>,
    q2: &Point3<f64>,
) -> f64 {
    const EPS: f64 = 1e-12;

    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let (s, t);
    if a <= EPS && e <= EPS {
        return r.norm_squared();
    }
    if a <= EPS {
        s = 0.0;
        t = (f / e).clamp(0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= EPS {
            t = 0.0;
            s = (-c / a).clamp(0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let denom = a * e - b * b;

            // Parallel segments leave s free; pick one end and let the
            // clamping below settle on the true closest pair.
            let mut s_cand = if denom > EPS {
                ((b * f - c * e) / denom).clamp(0.0, 1.0)
            } else {
                0.0
            };

            let t_cand = (b * s_cand + f) / e;
            let t_clamped = t_cand.clamp(0.0, 1.0);
            if t_clamped != t_cand {
                s_cand = ((t_clamped * b - c) / a).clamp(0.0, 1.0);
            }

            s = s_cand;
            t = t_clamped;
        }
    }

    let c1 = p1 + d1 * s;
    let c2 = p2 + d2 * t;
    (c1 - c2).norm_squared()
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dominant-axis classification of point pairs.
//!
//! Given a member's two endpoints, these functions decide which coordinate
//! axis the member "mostly" runs along. An axis-aligned segment classifies
//! exactly; anything else is a heuristic, and the result is flagged as
//! approximate so that connectivity code never treats it as authoritative.

use nalgebra::Point3;
use openframe_core::{round_coordinate, Axis, Direction3};

/// Direction classification of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentDirection {
    /// The axis the segment runs along.
    pub axis: Axis,
    /// `true` when the segment points toward the positive half of the axis,
    /// as seen from `end` toward `start`.
    pub toward_positive: bool,
    /// `true` when the classification came from the dominant-axis heuristic
    /// rather than an exactly axis-aligned segment.
    pub approximate: bool,
}

/// Selects the dominant signed axis between two points.
///
/// Computes `Δ = start − end` componentwise and picks the axis with the
/// greatest `|Δ|`; ties resolve in evaluation order X, then Y, else Z. The
/// returned direction points from `end` toward `start` along that axis.
pub fn dominant_axis(start: &Point3<f64>, end: &Point3<f64>) -> Direction3 {
    let dx = start.x - end.x;
    let dy = start.y - end.y;
    let dz = start.z - end.z;

    if dx.abs() >= dy.abs() && dx.abs() >= dz.abs() {
        if dx >= 0.0 {
            Direction3::PlusX
        } else {
            Direction3::MinusX
        }
    } else if dy.abs() >= dz.abs() {
        if dy >= 0.0 {
            Direction3::PlusY
        } else {
            Direction3::MinusY
        }
    } else if dz >= 0.0 {
        Direction3::PlusZ
    } else {
        Direction3::MinusZ
    }
}

/// Selects the dominant axis between two points, direction-agnostic.
pub fn dominant_axis_simple(start: &Point3<f64>, end: &Point3<f64>) -> Axis {
    dominant_axis(start, end).axis()
}

/// Classifies a segment's direction, exactly where possible.
///
/// When exactly one coordinate differs between `start` and `end` (after
/// coordinate rounding) the segment is axis-aligned and the classification
/// is exact. Otherwise the dominant-axis heuristic decides and the result is
/// marked `approximate`; downstream connectivity code must not treat an
/// approximate classification as authoritative.
pub fn segment_direction(start: &Point3<f64>, end: &Point3<f64>) -> SegmentDirection {
    let differs = [
        round_coordinate(start.x) != round_coordinate(end.x),
        round_coordinate(start.y) != round_coordinate(end.y),
        round_coordinate(start.z) != round_coordinate(end.z),
    ];

    if differs.iter().filter(|&&d| d).count() == 1 {
        let (axis, delta) = if differs[0] {
            (Axis::X, start.x - end.x)
        } else if differs[1] {
            (Axis::Y, start.y - end.y)
        } else {
            (Axis::Z, start.z - end.z)
        };
        return SegmentDirection {
            axis,
            toward_positive: delta >= 0.0,
            approximate: false,
        };
    }

    let dominant = dominant_axis(start, end);
    SegmentDirection {
        axis: dominant.axis(),
        toward_positive: dominant.toward_positive(),
        approximate: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_axis_points_from_end_toward_start() {
        let start = Point3::new(10.0, 0.0, 0.0);
        let end = Point3::new(0.0, 0.0, 0.0);
        assert_eq!(dominant_axis(&start, &end), Direction3::PlusX);
        assert_eq!(dominant_axis(&end, &start), Direction3::MinusX);
    }

    #[test]
    fn dominant_axis_vertical() {
        let top = Point3::new(0.0, 5.0, 0.0);
        let base = Point3::new(0.0, 0.0, 0.0);
        assert_eq!(dominant_axis(&top, &base), Direction3::PlusY);
        assert_eq!(dominant_axis(&base, &top), Direction3::MinusY);
    }

    #[test]
    fn dominant_axis_picks_largest_component() {
        let start = Point3::new(1.0, 2.0, -7.0);
        let end = Point3::new(0.0, 0.0, 0.0);
        assert_eq!(dominant_axis(&start, &end), Direction3::MinusZ);
    }

    #[test]
    fn ties_resolve_x_then_y() {
        let o = Point3::new(0.0, 0.0, 0.0);
        assert_eq!(
            dominant_axis(&Point3::new(3.0, 3.0, 3.0), &o),
            Direction3::PlusX
        );
        assert_eq!(
            dominant_axis(&Point3::new(0.0, 3.0, 3.0), &o),
            Direction3::PlusY
        );
    }

    #[test]
    fn coincident_points_default_to_plus_x() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(dominant_axis(&p, &p), Direction3::PlusX);
    }

    #[test]
    fn simple_variant_drops_the_sign() {
        let start = Point3::new(0.0, 0.0, -9.0);
        let end = Point3::new(0.0, 0.0, 0.0);
        assert_eq!(dominant_axis_simple(&start, &end), Axis::Z);
    }

    #[test]
    fn axis_aligned_segment_is_exact() {
        let d = segment_direction(&Point3::new(4.0, 1.0, 2.0), &Point3::new(0.0, 1.0, 2.0));
        assert_eq!(d.axis, Axis::X);
        assert!(d.toward_positive);
        assert!(!d.approximate);
    }

    #[test]
    fn negative_axis_aligned_segment() {
        let d = segment_direction(&Point3::new(0.0, 0.0, 0.0), &Point3::new(0.0, 6.0, 0.0));
        assert_eq!(d.axis, Axis::Y);
        assert!(!d.toward_positive);
        assert!(!d.approximate);
    }

    #[test]
    fn skewed_segment_is_approximate() {
        let d = segment_direction(&Point3::new(5.0, 1.0, 0.0), &Point3::new(0.0, 0.0, 0.0));
        assert_eq!(d.axis, Axis::X);
        assert!(d.toward_positive);
        assert!(d.approximate);
    }

    #[test]
    fn sub_millimeter_skew_still_counts_as_aligned() {
        // 0.0004 m rounds away; only x genuinely differs
        let d = segment_direction(
            &Point3::new(3.0, 0.0004, 0.0),
            &Point3::new(0.0, 0.0, 0.0),
        );
        assert_eq!(d.axis, Axis::X);
        assert!(!d.approximate);
    }

    #[test]
    fn degenerate_segment_is_approximate() {
        let p = Point3::new(2.0, 2.0, 2.0);
        let d = segment_direction(&p, &p);
        assert!(d.approximate);
        assert_eq!(d.axis, Axis::X);
    }
}

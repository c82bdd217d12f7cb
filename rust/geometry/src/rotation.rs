// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-plane rotation and line parameterization.
//!
//! Cantilevers, bracings, and rotated cross-sections are placed by rotating
//! points about a center in one of the coordinate planes. 3D rotation about
//! a coordinate axis projects onto the perpendicular plane, rotates there,
//! and reassembles with the axis coordinate untouched.

use nalgebra::{Point, Point2, Point3};
use openframe_core::{deg_to_rad, round_coordinate, Axis};

/// Rotates a 2D point about `center` by `radians` (counterclockwise).
pub fn rotate_point_2d(point: &Point2<f64>, center: &Point2<f64>, radians: f64) -> Point2<f64> {
    let (sin, cos) = radians.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;

    Point2::new(
        dx * cos - dy * sin + center.x,
        dx * sin + dy * cos + center.y,
    )
}

/// Rotates `point` about the line through `center` parallel to `axis`.
///
/// The rotation happens in the plane perpendicular to `axis`; the two
/// rotated components are rounded to coordinate precision and the axis
/// component is preserved exactly. `Axis::Y` (vertical) is the common case:
/// rotating a cross-section about a standing member's own longitudinal axis.
pub fn rotate_about_axis(
    center: &Point3<f64>,
    point: &Point3<f64>,
    degrees: f64,
    axis: Axis,
) -> Point3<f64> {
    let radians = deg_to_rad(degrees);

    match axis {
        Axis::Y => {
            let rotated = rotate_point_2d(
                &Point2::new(point.x, point.z),
                &Point2::new(center.x, center.z),
                radians,
            );
            Point3::new(
                round_coordinate(rotated.x),
                point.y,
                round_coordinate(rotated.y),
            )
        }
        Axis::X => {
            let rotated = rotate_point_2d(
                &Point2::new(point.y, point.z),
                &Point2::new(center.y, center.z),
                radians,
            );
            Point3::new(
                point.x,
                round_coordinate(rotated.x),
                round_coordinate(rotated.y),
            )
        }
        Axis::Z => {
            let rotated = rotate_point_2d(
                &Point2::new(point.x, point.y),
                &Point2::new(center.x, center.y),
                radians,
            );
            Point3::new(
                round_coordinate(rotated.x),
                round_coordinate(rotated.y),
                point.z,
            )
        }
    }
}

/// Componentwise midpoint of two points, rounded to coordinate precision.
///
/// Works for both 2D and 3D points.
pub fn midpoint<const D: usize>(a: &Point<f64, D>, b: &Point<f64, D>) -> Point<f64, D> {
    Point::from(((a.coords + b.coords) / 2.0).map(round_coordinate))
}

/// The point on the line `start → end` offset by `distance` from `end`.
///
/// The parameterization is anchored at `end`: `distance = 0` yields `end`,
/// and growing distances walk back toward (and past) `start`. Callers rely
/// on this directionality to place supports a fixed distance from a pipe's
/// terminus. The section ratio `distance / (len - distance)` is undefined
/// when `distance` equals the full segment length; that case returns `end`
/// unchanged instead of dividing by zero.
pub fn point_at_distance(
    distance: f64,
    start: &Point3<f64>,
    end: &Point3<f64>,
) -> Point3<f64> {
    let len = (start - end).norm();
    let denom = len - distance;
    if denom.abs() < f64::EPSILON {
        return *end;
    }

    let k = distance / denom;
    let p = (end.coords + start.coords * k) / (1.0 + k);
    Point3::new(
        round_coordinate(p.x),
        round_coordinate(p.y),
        round_coordinate(p.z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn rotate_identity_angle_is_noop() {
        let p = Point2::new(3.7, -1.2);
        let c = Point2::new(0.5, 0.5);

        let r = rotate_point_2d(&p, &c, 0.0);
        assert_relative_eq!(r.x, p.x);
        assert_relative_eq!(r.y, p.y);
    }

    #[test]
    fn rotate_quarter_turn_about_origin() {
        let r = rotate_point_2d(&Point2::new(1.0, 0.0), &Point2::new(0.0, 0.0), FRAC_PI_2);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_about_offset_center() {
        let r = rotate_point_2d(&Point2::new(2.0, 0.0), &Point2::new(1.0, 0.0), PI);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_composes_additively() {
        let p = Point2::new(4.2, -2.4);
        let c = Point2::new(1.0, 1.0);
        let (t1, t2) = (0.7, 1.9);

        let twice = rotate_point_2d(&rotate_point_2d(&p, &c, t1), &c, t2);
        let once = rotate_point_2d(&p, &c, t1 + t2);
        assert_relative_eq!(twice.x, once.x, epsilon = 1e-10);
        assert_relative_eq!(twice.y, once.y, epsilon = 1e-10);
    }

    #[test]
    fn rotate_about_y_preserves_elevation() {
        let center = Point3::new(0.0, 0.0, 0.0);
        let point = Point3::new(2.0, 7.5, 0.0);

        let r = rotate_about_axis(&center, &point, 90.0, Axis::Y);
        assert_eq!(r.y, 7.5);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(r.z, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn rotate_about_x_preserves_x() {
        let center = Point3::new(5.0, 0.0, 0.0);
        let point = Point3::new(5.0, 1.0, 0.0);

        let r = rotate_about_axis(&center, &point, 90.0, Axis::X);
        assert_eq!(r.x, 5.0);
        assert_relative_eq!(r.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(r.z, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn rotate_about_z_preserves_z() {
        let center = Point3::new(0.0, 0.0, -2.0);
        let point = Point3::new(1.0, 0.0, -2.0);

        let r = rotate_about_axis(&center, &point, 180.0, Axis::Z);
        assert_eq!(r.z, -2.0);
        assert_relative_eq!(r.x, -1.0, epsilon = 1e-9);
        assert_relative_eq!(r.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn rotated_components_are_rounded() {
        let center = Point3::new(0.0, 0.0, 0.0);
        let point = Point3::new(1.0, 0.0, 0.0);

        // 45° about Y: x and z become ±√2/2, rounded to mm
        let r = rotate_about_axis(&center, &point, 45.0, Axis::Y);
        assert_eq!(r.x, 0.707);
        assert_eq!(r.z, 0.707);
    }

    #[test]
    fn midpoint_3d() {
        let m = midpoint(&Point3::new(0.0, 2.0, -4.0), &Point3::new(2.0, 4.0, 4.0));
        assert_eq!(m, Point3::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn midpoint_2d() {
        let m = midpoint(&Point2::new(1.0, 1.0), &Point2::new(2.0, 3.0));
        assert_eq!(m, Point2::new(1.5, 2.0));
    }

    #[test]
    fn point_at_distance_is_anchored_at_end() {
        let start = Point3::new(0.0, 0.0, 0.0);
        let end = Point3::new(10.0, 0.0, 0.0);

        assert_eq!(point_at_distance(0.0, &start, &end), end);
        assert_eq!(
            point_at_distance(4.0, &start, &end),
            Point3::new(6.0, 0.0, 0.0)
        );
    }

    #[test]
    fn point_at_distance_walks_toward_start() {
        let start = Point3::new(0.0, 3.0, 0.0);
        let end = Point3::new(0.0, 0.0, 0.0);

        let p = point_at_distance(1.0, &start, &end);
        assert_eq!(p, Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn point_at_full_length_returns_end_unchanged() {
        let start = Point3::new(0.0, 0.0, 0.0);
        let end = Point3::new(5.0, 0.0, 0.0);

        // Section ratio denominator is zero here; documented degenerate case.
        assert_eq!(point_at_distance(5.0, &start, &end), end);
    }

    #[test]
    fn point_at_distance_on_diagonal_segment() {
        let start = Point3::new(0.0, 0.0, 0.0);
        let end = Point3::new(3.0, 4.0, 0.0);

        // 5-unit segment; 2.5 from the end is the midpoint
        let p = point_at_distance(2.5, &start, &end);
        assert_eq!(p, Point3::new(1.5, 2.0, 0.0));
    }
}

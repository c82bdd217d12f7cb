// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit scaling and fixed-step rounding.
//!
//! Model coordinates are meter-valued. Rounding to the millimeter step after
//! every transform keeps floating-point drift out of equality comparisons:
//! endpoints computed through different chains of rotations and translations
//! land on the same grid point.

use std::f64::consts::PI;

/// Inverse rounding step for coordinates: 1000 → nearest 0.001 m (1 mm).
pub const COORD_PRECISION: f64 = 1000.0;

/// Distance below which two coordinates are the same point (one grid step).
pub const COORD_TOLERANCE: f64 = 1.0 / COORD_PRECISION;

/// Converts meters to millimeters.
#[inline]
pub fn to_millimeters(meters: f64) -> f64 {
    meters * 1000.0
}

/// Converts millimeters to meters.
#[inline]
pub fn to_meters(millimeters: f64) -> f64 {
    millimeters / 1000.0
}

/// Rounds `value` to the nearest multiple of `1/precision`.
///
/// `precision` is an inverse step: 1000 rounds to the nearest 0.001. A zero
/// or non-finite precision rounds to the nearest integer. Idempotent
/// (`round_to(round_to(x, p), p) == round_to(x, p)`) and monotonic.
#[inline]
pub fn round_to(value: f64, precision: f64) -> f64 {
    if precision == 0.0 || !precision.is_finite() {
        return value.round();
    }
    (value * precision).round() / precision
}

/// Rounds a meter-valued coordinate to millimeter precision.
///
/// Applied after every geometric transform (frame conversion, rotation) so
/// that coordinates compare equal when they denote the same point.
#[inline]
pub fn round_coordinate(value: f64) -> f64 {
    round_to(value, COORD_PRECISION)
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_millimeter_scaling() {
        assert_eq!(to_millimeters(1.5), 1500.0);
        assert_eq!(to_meters(1500.0), 1.5);
        assert_eq!(to_meters(to_millimeters(0.123)), 0.123);
    }

    #[test]
    fn round_to_step() {
        assert_eq!(round_to(1.2345, 1000.0), 1.234);
        assert_eq!(round_to(1.2345001, 1000.0), 1.235);
        assert_eq!(round_to(-1.2345001, 1000.0), -1.235);
        assert_eq!(round_to(2.5001, 10.0), 2.5);
    }

    #[test]
    fn round_to_zero_precision_is_integer_rounding() {
        assert_eq!(round_to(1.4, 0.0), 1.0);
        assert_eq!(round_to(1.6, 0.0), 2.0);
        assert_eq!(round_to(-0.4, 0.0), -0.0);
        assert_eq!(round_to(7.7, f64::NAN), 8.0);
    }

    #[test]
    fn round_is_idempotent() {
        for &v in &[0.0, 1.23456, -9.87654, 1e6 + 0.0005] {
            let once = round_to(v, 1000.0);
            assert_eq!(round_to(once, 1000.0), once);
        }
    }

    #[test]
    fn round_is_monotonic() {
        let samples: Vec<f64> = (0..200).map(|i| -1.0 + i as f64 * 0.01).collect();
        for w in samples.windows(2) {
            assert!(round_to(w[0], 1000.0) <= round_to(w[1], 1000.0));
        }
    }

    #[test]
    fn coordinate_rounding_is_millimeter() {
        assert_eq!(round_coordinate(3.0004), 3.0);
        assert_eq!(round_coordinate(3.0006), 3.001);
    }

    #[test]
    fn degree_radian_conversion() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-15);
        assert!((rad_to_deg(PI / 2.0) - 90.0).abs() < 1e-12);
        assert!((rad_to_deg(deg_to_rad(45.0)) - 45.0).abs() < 1e-12);
    }
}

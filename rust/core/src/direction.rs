// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Symbolic directions and discrete cross-section orientations.
//!
//! A member's local frame is aligned to one of the four cardinal horizontal
//! directions ([`Direction2`]); classifying the dominant axis between two 3D
//! points additionally needs the vertical pair ([`Direction3`]). Cross
//! sections rotate about the member axis on a 45° grid ([`Orientation`]),
//! which is bijective with `Direction2` at the four cardinal angles.
//!
//! Parsing from strings is strict: out-of-domain input is rejected with a
//! typed error. The two documented default-on-invalid conversions
//! (unmapped angle to `+X`, missing direction to 0°) are separate,
//! explicitly named constructors rather than blanket leniency.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::units::deg_to_rad;

/// A coordinate axis, direction-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the axis name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(Error::UnknownAxis(s.to_string())),
        }
    }
}

/// One of the four cardinal horizontal directions a member's local frame
/// can be aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction2 {
    PlusX,
    MinusX,
    PlusZ,
    MinusZ,
}

impl Direction2 {
    /// All four cardinal directions, in orientation order (0°, 90°, 180°, 270°).
    pub const ALL: [Direction2; 4] = [
        Direction2::PlusX,
        Direction2::PlusZ,
        Direction2::MinusX,
        Direction2::MinusZ,
    ];

    /// Returns the direction as its symbolic string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction2::PlusX => "+X",
            Direction2::MinusX => "-X",
            Direction2::PlusZ => "+Z",
            Direction2::MinusZ => "-Z",
        }
    }

    /// The orientation angle this frame direction implies.
    ///
    /// `+X → 0°`, `+Z → 90°`, `-X → 180°`, `-Z → 270°`.
    pub fn orientation(&self) -> Orientation {
        match self {
            Direction2::PlusX => Orientation::Deg0,
            Direction2::PlusZ => Orientation::Deg90,
            Direction2::MinusX => Orientation::Deg180,
            Direction2::MinusZ => Orientation::Deg270,
        }
    }

    /// The orientation angle in degrees.
    pub fn degrees(&self) -> f64 {
        self.orientation().degrees()
    }

    /// Maps an orientation angle back to a cardinal direction.
    ///
    /// Accepts negative equivalents (`-90 ≡ 270`, `-180 ≡ 180`, `-270 ≡ 90`).
    /// Any unmapped angle defaults to `+X`; this leniency is deliberate and
    /// callers that need rejection should go through
    /// [`Orientation::from_degrees`] first.
    pub fn from_orientation_degrees(degrees: f64) -> Direction2 {
        let normalized = degrees.rem_euclid(360.0);
        if normalized.fract() != 0.0 {
            return Direction2::PlusX;
        }
        match normalized as u32 {
            90 => Direction2::PlusZ,
            180 => Direction2::MinusX,
            270 => Direction2::MinusZ,
            _ => Direction2::PlusX,
        }
    }

    /// The axis this direction runs along.
    pub fn axis(&self) -> Axis {
        match self {
            Direction2::PlusX | Direction2::MinusX => Axis::X,
            Direction2::PlusZ | Direction2::MinusZ => Axis::Z,
        }
    }

    /// `true` for `+X` / `+Z`.
    pub fn toward_positive(&self) -> bool {
        matches!(self, Direction2::PlusX | Direction2::PlusZ)
    }

    /// The opposite direction along the same axis.
    pub fn opposite(&self) -> Direction2 {
        match self {
            Direction2::PlusX => Direction2::MinusX,
            Direction2::MinusX => Direction2::PlusX,
            Direction2::PlusZ => Direction2::MinusZ,
            Direction2::MinusZ => Direction2::PlusZ,
        }
    }
}

impl fmt::Display for Direction2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction2 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_uppercase().as_str() {
            "+X" => Ok(Direction2::PlusX),
            "-X" => Ok(Direction2::MinusX),
            "+Z" => Ok(Direction2::PlusZ),
            "-Z" => Ok(Direction2::MinusZ),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}

/// The six signed axis directions, used when classifying the dominant axis
/// between two 3D points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction3 {
    PlusX,
    MinusX,
    PlusY,
    MinusY,
    PlusZ,
    MinusZ,
}

impl Direction3 {
    /// Returns the direction as its symbolic string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction3::PlusX => "+X",
            Direction3::MinusX => "-X",
            Direction3::PlusY => "+Y",
            Direction3::MinusY => "-Y",
            Direction3::PlusZ => "+Z",
            Direction3::MinusZ => "-Z",
        }
    }

    /// The axis this direction runs along.
    pub fn axis(&self) -> Axis {
        match self {
            Direction3::PlusX | Direction3::MinusX => Axis::X,
            Direction3::PlusY | Direction3::MinusY => Axis::Y,
            Direction3::PlusZ | Direction3::MinusZ => Axis::Z,
        }
    }

    /// `true` for the positive half of the axis.
    pub fn toward_positive(&self) -> bool {
        matches!(
            self,
            Direction3::PlusX | Direction3::PlusY | Direction3::PlusZ
        )
    }

    /// The horizontal subset, when this direction is not vertical.
    pub fn horizontal(&self) -> Option<Direction2> {
        match self {
            Direction3::PlusX => Some(Direction2::PlusX),
            Direction3::MinusX => Some(Direction2::MinusX),
            Direction3::PlusZ => Some(Direction2::PlusZ),
            Direction3::MinusZ => Some(Direction2::MinusZ),
            Direction3::PlusY | Direction3::MinusY => None,
        }
    }
}

impl From<Direction2> for Direction3 {
    fn from(d: Direction2) -> Self {
        match d {
            Direction2::PlusX => Direction3::PlusX,
            Direction2::MinusX => Direction3::MinusX,
            Direction2::PlusZ => Direction3::PlusZ,
            Direction2::MinusZ => Direction3::MinusZ,
        }
    }
}

impl fmt::Display for Direction3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_uppercase().as_str() {
            "+X" => Ok(Direction3::PlusX),
            "-X" => Ok(Direction3::MinusX),
            "+Y" => Ok(Direction3::PlusY),
            "-Y" => Ok(Direction3::MinusY),
            "+Z" => Ok(Direction3::PlusZ),
            "-Z" => Ok(Direction3::MinusZ),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}

/// Discrete rotation of a member's cross-section about its own axis, on the
/// 45° grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Deg0,
    Deg45,
    Deg90,
    Deg135,
    Deg180,
    Deg225,
    Deg270,
    Deg315,
}

impl Orientation {
    /// All eight orientations in ascending angle order.
    pub const ALL: [Orientation; 8] = [
        Orientation::Deg0,
        Orientation::Deg45,
        Orientation::Deg90,
        Orientation::Deg135,
        Orientation::Deg180,
        Orientation::Deg225,
        Orientation::Deg270,
        Orientation::Deg315,
    ];

    /// Parses an angle in degrees, strictly.
    ///
    /// Negative equivalents are normalized (`-90 ≡ 270`); anything off the
    /// 45° grid is rejected.
    pub fn from_degrees(degrees: f64) -> crate::Result<Orientation> {
        if !degrees.is_finite() {
            return Err(Error::InvalidOrientation(degrees));
        }
        let normalized = degrees.rem_euclid(360.0);
        if normalized.fract() != 0.0 {
            return Err(Error::InvalidOrientation(degrees));
        }
        match normalized as u32 {
            0 => Ok(Orientation::Deg0),
            45 => Ok(Orientation::Deg45),
            90 => Ok(Orientation::Deg90),
            135 => Ok(Orientation::Deg135),
            180 => Ok(Orientation::Deg180),
            225 => Ok(Orientation::Deg225),
            270 => Ok(Orientation::Deg270),
            315 => Ok(Orientation::Deg315),
            _ => Err(Error::InvalidOrientation(degrees)),
        }
    }

    /// The angle in degrees.
    pub fn degrees(&self) -> f64 {
        match self {
            Orientation::Deg0 => 0.0,
            Orientation::Deg45 => 45.0,
            Orientation::Deg90 => 90.0,
            Orientation::Deg135 => 135.0,
            Orientation::Deg180 => 180.0,
            Orientation::Deg225 => 225.0,
            Orientation::Deg270 => 270.0,
            Orientation::Deg315 => 315.0,
        }
    }

    /// The angle in radians.
    pub fn radians(&self) -> f64 {
        deg_to_rad(self.degrees())
    }

    /// The cardinal frame direction for 0/90/180/270; `None` for diagonals.
    pub fn direction2(&self) -> Option<Direction2> {
        match self {
            Orientation::Deg0 => Some(Direction2::PlusX),
            Orientation::Deg90 => Some(Direction2::PlusZ),
            Orientation::Deg180 => Some(Direction2::MinusX),
            Orientation::Deg270 => Some(Direction2::MinusZ),
            _ => None,
        }
    }

    /// `true` for the four diagonal (45° off-grid) orientations.
    pub fn is_diagonal(&self) -> bool {
        self.direction2().is_none()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

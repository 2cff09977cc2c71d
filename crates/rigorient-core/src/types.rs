use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// World-space position of a joint.
pub type Point3 = nalgebra::Point3<f64>;

/// Direction or displacement in world space.
pub type Vec3 = nalgebra::Vector3<f64>;

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// Unsigned cardinal axis of a joint's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Column index of this axis in a 3x3 basis.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// The axis that is neither `a` nor `b`. Returns `None` when `a == b`.
    pub const fn remaining(a: Self, b: Self) -> Option<Self> {
        match (a, b) {
            (Self::X, Self::Y) | (Self::Y, Self::X) => Some(Self::Z),
            (Self::X, Self::Z) | (Self::Z, Self::X) => Some(Self::Y),
            (Self::Y, Self::Z) | (Self::Z, Self::Y) => Some(Self::X),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Self::X),
            "y" | "Y" => Ok(Self::Y),
            "z" | "Z" => Ok(Self::Z),
            other => Err(ParseError::new("axis", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// AxisChoice
// ---------------------------------------------------------------------------

/// One of the six signed cardinal directions of a joint's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisChoice {
    #[serde(rename = "+X", alias = "X", alias = "x", alias = "+x")]
    PosX,
    #[serde(rename = "-X", alias = "-x")]
    NegX,
    #[serde(rename = "+Y", alias = "Y", alias = "y", alias = "+y")]
    PosY,
    #[serde(rename = "-Y", alias = "-y")]
    NegY,
    #[serde(rename = "+Z", alias = "Z", alias = "z", alias = "+z")]
    PosZ,
    #[serde(rename = "-Z", alias = "-z")]
    NegZ,
}

impl AxisChoice {
    pub const ALL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    pub const fn new(axis: Axis, negative: bool) -> Self {
        match (axis, negative) {
            (Axis::X, false) => Self::PosX,
            (Axis::X, true) => Self::NegX,
            (Axis::Y, false) => Self::PosY,
            (Axis::Y, true) => Self::NegY,
            (Axis::Z, false) => Self::PosZ,
            (Axis::Z, true) => Self::NegZ,
        }
    }

    /// Cardinal axis, ignoring sign.
    pub const fn axis(self) -> Axis {
        match self {
            Self::PosX | Self::NegX => Axis::X,
            Self::PosY | Self::NegY => Axis::Y,
            Self::PosZ | Self::NegZ => Axis::Z,
        }
    }

    pub const fn is_negative(self) -> bool {
        matches!(self, Self::NegX | Self::NegY | Self::NegZ)
    }

    /// `-1.0` for negative choices, `1.0` otherwise.
    pub const fn sign(self) -> f64 {
        if self.is_negative() { -1.0 } else { 1.0 }
    }

    /// Same cardinal axis with the opposite sign.
    pub const fn flipped(self) -> Self {
        Self::new(self.axis(), !self.is_negative())
    }

    /// True when both choices name the same cardinal axis (`+X` and `-X` included).
    pub const fn shares_axis(self, other: Self) -> bool {
        self.axis().index() == other.axis().index()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PosX => "+X",
            Self::NegX => "-X",
            Self::PosY => "+Y",
            Self::NegY => "-Y",
            Self::PosZ => "+Z",
            Self::NegZ => "-Z",
        }
    }
}

impl fmt::Display for AxisChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisChoice {
    type Err = ParseError;

    /// Accepts `+X`, `-x`, or a bare letter (`y`, meaning positive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, letter) = match trimmed.as_bytes() {
            [b'+', rest @ ..] => (false, rest),
            [b'-', rest @ ..] => (true, rest),
            rest => (false, rest),
        };
        let axis = match letter {
            [b'x' | b'X'] => Axis::X,
            [b'y' | b'Y'] => Axis::Y,
            [b'z' | b'Z'] => Axis::Z,
            _ => return Err(ParseError::new("axis choice", trimmed)),
        };
        Ok(Self::new(axis, negative))
    }
}

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// Body side of a limb. Mirrored limbs aim their helpers along opposite X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// Local axis a twist helper aims back along: `-X` on the left, `+X` on the right.
    pub const fn aim_axis(self) -> AxisChoice {
        match self {
            Self::Left => AxisChoice::NegX,
            Self::Right => AxisChoice::PosX,
        }
    }
}

impl FromStr for Side {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            other => Err(ParseError::new("side", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_index_matches_column() {
        let indices: Vec<usize> = Axis::ALL.iter().map(|a| a.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn parse_axis() {
        assert_eq!("y".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!(" Z ".parse::<Axis>().unwrap(), Axis::Z);
        assert!("w".parse::<Axis>().is_err());
    }

    #[test]
    fn remaining_axis() {
        assert_eq!(Axis::remaining(Axis::X, Axis::Y), Some(Axis::Z));
        assert_eq!(Axis::remaining(Axis::Z, Axis::X), Some(Axis::Y));
        assert_eq!(Axis::remaining(Axis::Z, Axis::Y), Some(Axis::X));
        assert_eq!(Axis::remaining(Axis::Y, Axis::Y), None);
    }

    #[test]
    fn axis_choice_sign() {
        assert_eq!(AxisChoice::NegY.axis(), Axis::Y);
        assert!(AxisChoice::NegY.is_negative());
        assert!((AxisChoice::NegX.sign() + 1.0).abs() < f64::EPSILON);
        assert!((AxisChoice::PosX.sign() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn axis_choice_flipped() {
        for choice in AxisChoice::ALL {
            let flipped = choice.flipped();
            assert_eq!(flipped.axis(), choice.axis());
            assert_ne!(flipped.is_negative(), choice.is_negative());
            assert_eq!(flipped.flipped(), choice);
        }
    }

    #[test]
    fn shares_axis_ignores_sign() {
        assert!(AxisChoice::PosX.shares_axis(AxisChoice::NegX));
        assert!(AxisChoice::PosZ.shares_axis(AxisChoice::PosZ));
        assert!(!AxisChoice::PosX.shares_axis(AxisChoice::PosY));
    }

    #[test]
    fn parse_axis_choice() {
        assert_eq!("+X".parse::<AxisChoice>().unwrap(), AxisChoice::PosX);
        assert_eq!("-z".parse::<AxisChoice>().unwrap(), AxisChoice::NegZ);
        assert_eq!(" y ".parse::<AxisChoice>().unwrap(), AxisChoice::PosY);
        assert!("w".parse::<AxisChoice>().is_err());
        assert!("+XY".parse::<AxisChoice>().is_err());
        assert!("".parse::<AxisChoice>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for choice in AxisChoice::ALL {
            assert_eq!(choice.to_string().parse::<AxisChoice>().unwrap(), choice);
        }
    }

    #[test]
    fn side_aim_axis_mirrors() {
        assert_eq!(Side::Left.aim_axis(), AxisChoice::NegX);
        assert_eq!(Side::Right.aim_axis(), AxisChoice::PosX);
        assert_eq!("Right".parse::<Side>().unwrap(), Side::Right);
        assert!("up".parse::<Side>().is_err());
    }
}

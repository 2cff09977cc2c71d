//! Quick edits to a single rotation channel (degrees).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rigorient_core::{Axis, ParseError};

/// A one-step change to an Euler rotation channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationEdit {
    /// Negate the angle.
    Invert,
    /// Turn half way round toward zero: `+180` when negative, `-180` otherwise.
    Flip180,
    Plus90,
    Minus90,
}

impl RotationEdit {
    pub const ALL: [Self; 4] = [Self::Invert, Self::Flip180, Self::Plus90, Self::Minus90];

    /// Apply to `angle` (degrees).
    ///
    /// With `keep_minimal`, quarter turns wrap into `[0, 360)`. Invert and
    /// half turns never wrap.
    pub fn apply(self, angle: f64, keep_minimal: bool) -> f64 {
        match self {
            Self::Invert => -angle,
            Self::Flip180 => {
                if angle < 0.0 {
                    angle + 180.0
                } else {
                    angle - 180.0
                }
            }
            Self::Plus90 => wrap_if(angle + 90.0, keep_minimal),
            Self::Minus90 => wrap_if(angle - 90.0, keep_minimal),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invert => "invert",
            Self::Flip180 => "flip180",
            Self::Plus90 => "plus90",
            Self::Minus90 => "minus90",
        }
    }
}

impl fmt::Display for RotationEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationEdit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "invert" => Ok(Self::Invert),
            "flip180" | "180" => Ok(Self::Flip180),
            "plus90" | "+90" => Ok(Self::Plus90),
            "minus90" | "-90" => Ok(Self::Minus90),
            other => Err(ParseError::new("rotation edit", other)),
        }
    }
}

fn wrap_if(angle: f64, keep_minimal: bool) -> f64 {
    if keep_minimal { angle.rem_euclid(360.0) } else { angle }
}

/// Apply `edit` to one channel of an XYZ Euler triple.
pub fn apply_to_axis(
    rotation: [f64; 3],
    axis: Axis,
    edit: RotationEdit,
    keep_minimal: bool,
) -> [f64; 3] {
    let mut out = rotation;
    let i = axis.index();
    out[i] = edit.apply(out[i], keep_minimal);
    out
}

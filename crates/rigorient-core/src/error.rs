use thiserror::Error;

use crate::types::AxisChoice;

/// Top-level error type for rigorient.
#[derive(Debug, Error)]
pub enum RigError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Orientation error: {0}")]
    Orient(#[from] OrientError),

    #[error("Basis error: {0}")]
    Basis(#[from] BasisError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Failures of a three-joint orientation.
///
/// Copy + static messages; joint indices are 1-based (1 = parent, 3 = grandchild).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrientError {
    #[error("Primary axis {primary} and secondary axis {secondary} name the same cardinal axis")]
    InvalidAxisPair {
        primary: AxisChoice,
        secondary: AxisChoice,
    },

    #[error("Joint positions are collinear or coincident, no stable plane normal")]
    CollinearPoints,

    #[error("Position of joint {joint} is not finite, or too far from its neighbour to measure")]
    NonFinite { joint: usize },

    #[error("Aim direction of joint {joint} has near-zero length")]
    DegenerateAim { joint: usize },

    #[error("Up reference is parallel to the aim direction of joint {joint}")]
    DegenerateUp { joint: usize },

    #[error("Expected {expected} joint positions, got {got}")]
    JointCount { expected: usize, got: usize },
}

/// Failures of a single basis construction, before a joint index is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BasisError {
    #[error("Aim direction has near-zero length")]
    DegenerateAim,

    #[error("Up reference is parallel to the aim direction")]
    DegenerateUp,

    #[error("Primary axis {primary} and secondary axis {secondary} name the same cardinal axis")]
    InvalidAxisPair {
        primary: AxisChoice,
        secondary: AxisChoice,
    },
}

impl BasisError {
    /// Attach the 1-based index of the joint whose basis failed.
    pub const fn at_joint(self, joint: usize) -> OrientError {
        match self {
            Self::DegenerateAim => OrientError::DegenerateAim { joint },
            Self::DegenerateUp => OrientError::DegenerateUp { joint },
            Self::InvalidAxisPair { primary, secondary } => {
                OrientError::InvalidAxisPair { primary, secondary }
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid tolerance {field}: {value} (must be finite and > 0)")]
    InvalidTolerance { field: &'static str, value: f64 },

    #[error("Tolerance {field} ({value}) must exceed zero_length ({zero_length})")]
    ToleranceOrder {
        field: &'static str,
        value: f64,
        zero_length: f64,
    },

    #[error("Invalid axis pair: {primary} and {secondary} share a cardinal axis")]
    InvalidAxisPair {
        primary: AxisChoice,
        secondary: AxisChoice,
    },

    #[error("Twist joint count {count} out of range {min}..={max}")]
    TwistCount { count: u32, min: u32, max: u32 },
}

/// Textual input that does not name a known value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {what}: {input:?}")]
pub struct ParseError {
    pub what: &'static str,
    pub input: String,
}

impl ParseError {
    pub fn new(what: &'static str, input: impl Into<String>) -> Self {
        Self {
            what,
            input: input.into(),
        }
    }
}

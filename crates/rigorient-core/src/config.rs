use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{AxisChoice, Side};

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_primary_axis() -> AxisChoice {
    AxisChoice::PosX
}
const fn default_secondary_axis() -> AxisChoice {
    AxisChoice::PosZ
}
const fn default_zero_length() -> f64 {
    1e-12
}
const fn default_plane() -> f64 {
    1e-6
}
const fn default_aim() -> f64 {
    1e-9
}
const fn default_up() -> f64 {
    1e-9
}
const fn default_twist_count() -> u32 {
    3
}

/// Smallest number of twist joints a limb segment can carry.
pub const MIN_TWIST_JOINTS: u32 = 1;
/// Largest number of twist joints a limb segment can carry.
pub const MAX_TWIST_JOINTS: u32 = 20;

// ---------------------------------------------------------------------------
// Tolerances
// ---------------------------------------------------------------------------

/// Numerical thresholds for degeneracy checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Vectors at or below this length normalize to zero (default: 1e-12).
    #[serde(default = "default_zero_length")]
    pub zero_length: f64,

    /// Minimum plane cross-product magnitude before points count as collinear (default: 1e-6).
    #[serde(default = "default_plane")]
    pub plane: f64,

    /// Minimum aim direction length (default: 1e-9).
    #[serde(default = "default_aim")]
    pub aim: f64,

    /// Minimum `|up x forward|` before the up reference counts as parallel (default: 1e-9).
    #[serde(default = "default_up")]
    pub up: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            zero_length: default_zero_length(),
            plane: default_plane(),
            aim: default_aim(),
            up: default_up(),
        }
    }
}

impl Tolerances {
    /// Every threshold must be finite and strictly positive, and the aim and
    /// up thresholds must exceed `zero_length`: a vector that passes either
    /// check has to survive normalization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("zero_length", self.zero_length),
            ("plane", self.plane),
            ("aim", self.aim),
            ("up", self.up),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidTolerance { field, value });
            }
        }
        for (field, value) in [("aim", self.aim), ("up", self.up)] {
            if value <= self.zero_length {
                return Err(ConfigError::ToleranceOrder {
                    field,
                    value,
                    zero_length: self.zero_length,
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// OrientConfig
// ---------------------------------------------------------------------------

/// Caller-owned settings for orienting a joint chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientConfig {
    /// Local axis that aims down the chain (default: +X).
    #[serde(default = "default_primary_axis")]
    pub primary_axis: AxisChoice,

    /// Local axis aligned with the chain's plane normal (default: +Z).
    #[serde(default = "default_secondary_axis")]
    pub secondary_axis: AxisChoice,

    #[serde(default)]
    pub tolerances: Tolerances,
}

impl Default for OrientConfig {
    fn default() -> Self {
        Self {
            primary_axis: default_primary_axis(),
            secondary_axis: default_secondary_axis(),
            tolerances: Tolerances::default(),
        }
    }
}

impl OrientConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.primary_axis.shares_axis(self.secondary_axis) {
            return Err(ConfigError::InvalidAxisPair {
                primary: self.primary_axis,
                secondary: self.secondary_axis,
            });
        }
        self.tolerances.validate()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// TwistConfig
// ---------------------------------------------------------------------------

/// Settings for distributing twist joints along a lower limb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwistConfig {
    /// Number of twist joints between the start and end joint (default: 3).
    #[serde(default = "default_twist_count")]
    pub count: u32,

    #[serde(default)]
    pub side: Side,
}

impl Default for TwistConfig {
    fn default() -> Self {
        Self {
            count: default_twist_count(),
            side: Side::default(),
        }
    }
}

impl TwistConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TWIST_JOINTS..=MAX_TWIST_JOINTS).contains(&self.count) {
            return Err(ConfigError::TwistCount {
                count: self.count,
                min: MIN_TWIST_JOINTS,
                max: MAX_TWIST_JOINTS,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

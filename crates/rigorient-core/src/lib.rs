// rigorient-core: Value types, errors and configuration shared by rigorient crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::{OrientConfig, Tolerances, TwistConfig};
pub use error::{BasisError, ConfigError, OrientError, ParseError, RigError};
pub use types::{Axis, AxisChoice, Point3, Side, Vec3};

pub mod prelude {
    pub use crate::config::{OrientConfig, Tolerances, TwistConfig};
    pub use crate::error::{BasisError, ConfigError, OrientError, RigError};
    pub use crate::types::{Axis, AxisChoice, Point3, Side, Vec3};
}

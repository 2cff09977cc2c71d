//! Plane-based joint orientation for rigging three-joint limbs.
//!
//! Given the world positions of a parent, child and grandchild joint, builds
//! an orthonormal basis per joint that aims a chosen local axis down the
//! chain and aligns a second local axis with the normal of the plane the
//! joints span. All joints share that normal, so the chain bends in one plane
//! with consistent twist, ready for an IK solver.
//!
//! # Architecture
//!
//! ```text
//! vector ──► plane ──► basis ──► planner ──► OrientationResult
//!                        │
//!                        └──► twist (end helper + twist joints)
//! ```
//!
//! Everything is a pure function of its inputs. Applying the result to scene
//! nodes is left to the caller.

pub mod basis;
pub mod planner;
pub mod plane;
pub mod rotate;
pub mod twist;
pub mod vector;

pub use basis::{Basis, build_basis, build_basis_with};
pub use plane::{Degenerate, compute_plane_normal};
pub use planner::{ChainInput, ChainOrienter, OrientationResult, orient_chain};
pub use rotate::{RotationEdit, apply_to_axis};
pub use twist::{JointPose, TwistJoint, TwistPlan, distribute_twist};

pub mod prelude {
    pub use crate::basis::Basis;
    pub use crate::planner::{ChainInput, ChainOrienter, OrientationResult, orient_chain};
    pub use crate::twist::{JointPose, TwistPlan, distribute_twist};
    pub use rigorient_core::prelude::*;
}

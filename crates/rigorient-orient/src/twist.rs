//! Twist joints distributed between a limb's start and end joint.
//!
//! An end helper sits on the end joint (wrist/ankle) and aims back at the
//! start joint (elbow/knee), keeping its up axis on the end joint's local +Y.
//! Twist joint `i` of `n` blends start and helper with weights
//! `(n - i + 1, i)`, so the forearm roll spreads evenly along the segment.

use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};
use tracing::debug;

use rigorient_core::{AxisChoice, Point3, RigError, TwistConfig, Vec3};

use crate::basis::build_basis;

/// Position and world rotation of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointPose {
    pub position: Point3,
    pub rotation: UnitQuaternion<f64>,
}

impl JointPose {
    pub const fn new(position: Point3, rotation: UnitQuaternion<f64>) -> Self {
        Self { position, rotation }
    }

    /// Pose with identity rotation.
    pub fn at(position: Point3) -> Self {
        Self::new(position, UnitQuaternion::identity())
    }

    /// Pose from XYZ Euler angles in degrees (`R = Rz * Ry * Rx`).
    pub fn from_euler_degrees(position: Point3, [rx, ry, rz]: [f64; 3]) -> Self {
        Self::new(
            position,
            UnitQuaternion::from_euler_angles(rx.to_radians(), ry.to_radians(), rz.to_radians()),
        )
    }

    pub fn euler_xyz_degrees(&self) -> [f64; 3] {
        let (rx, ry, rz) = self.rotation.euler_angles();
        [rx.to_degrees(), ry.to_degrees(), rz.to_degrees()]
    }
}

/// One generated twist joint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwistJoint {
    /// 1-based index, counted from the start joint.
    pub index: u32,
    /// Constraint weight toward the start joint.
    pub start_weight: f64,
    /// Constraint weight toward the end helper.
    pub end_weight: f64,
    pub pose: JointPose,
}

impl TwistJoint {
    /// Normalized blend parameter, `end_weight / (start_weight + end_weight)`.
    pub fn blend(&self) -> f64 {
        self.end_weight / (self.start_weight + self.end_weight)
    }
}

/// Twist joints plus the end helper they blend toward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwistPlan {
    pub end_helper: JointPose,
    /// Local helper axis aimed at the start joint.
    pub aim_axis: AxisChoice,
    pub joints: Vec<TwistJoint>,
}

/// Lay out `config.count` twist joints between `start` and `end`.
///
/// # Errors
///
/// - [`RigError::Config`] if the twist count is out of range.
/// - [`RigError::Basis`] if the joints coincide or the end joint's +Y
///   lies along the limb.
pub fn distribute_twist(
    start: &JointPose,
    end: &JointPose,
    config: &TwistConfig,
) -> Result<TwistPlan, RigError> {
    config.validate()?;

    let aim_axis = config.side.aim_axis();
    let toward_start = start.position - end.position;
    let end_up: Vec3 = end.rotation * Vec3::y();
    let helper_basis = build_basis(&toward_start, &end_up, aim_axis, AxisChoice::PosY)?;
    let end_helper = JointPose::new(end.position, helper_basis.to_quaternion());

    let n = config.count;
    let joints = (1..=n)
        .map(|i| {
            let start_weight = f64::from(n - i + 1);
            let end_weight = f64::from(i);
            let t = end_weight / (start_weight + end_weight);
            let position = start.position + (end.position - start.position) * t;
            let rotation = start
                .rotation
                .try_slerp(&end_helper.rotation, t, 1e-9)
                .unwrap_or_else(|| start.rotation.nlerp(&end_helper.rotation, t));
            TwistJoint {
                index: i,
                start_weight,
                end_weight,
                pose: JointPose::new(position, rotation),
            }
        })
        .collect();

    debug!(
        "rigorient-orient: {n} twist joints, helper aims {aim_axis} for {:?} side",
        config.side
    );

    Ok(TwistPlan {
        end_helper,
        aim_axis,
        joints,
    })
}

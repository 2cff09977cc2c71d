//! Plane-based orientation of a parent -> child -> grandchild joint chain.
//!
//! All three joints share one up-reference, the normal of the plane the
//! joints span, so the chain twists consistently and bends in a single plane
//! (what an IK solver expects of a limb). Joints 1 and 2 aim at the next
//! joint; joint 3 continues the direction of the last segment.

use serde::{Deserialize, Serialize};
use tracing::debug;

use rigorient_core::{Axis, AxisChoice, OrientConfig, OrientError, Point3, Tolerances, Vec3};

use crate::basis::{Basis, build_basis_with};
use crate::plane::compute_plane_normal_with;
use crate::vector::{length, scale, subtract};

/// Number of joints in an oriented chain.
pub const CHAIN_LEN: usize = 3;

// ---------------------------------------------------------------------------
// ChainInput
// ---------------------------------------------------------------------------

/// Three joint positions in hierarchy order plus the axis assignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainInput {
    pub positions: [Point3; CHAIN_LEN],
    /// Local axis aimed down the chain.
    pub primary_axis: AxisChoice,
    /// Local axis aligned with the plane normal.
    pub secondary_axis: AxisChoice,
}

impl ChainInput {
    pub const fn new(
        p1: Point3,
        p2: Point3,
        p3: Point3,
        primary_axis: AxisChoice,
        secondary_axis: AxisChoice,
    ) -> Self {
        Self {
            positions: [p1, p2, p3],
            primary_axis,
            secondary_axis,
        }
    }

    /// Build from a selection of positions, which must hold exactly three.
    pub fn from_slice(
        positions: &[Point3],
        primary_axis: AxisChoice,
        secondary_axis: AxisChoice,
    ) -> Result<Self, OrientError> {
        let positions: [Point3; CHAIN_LEN] =
            positions.try_into().map_err(|_| OrientError::JointCount {
                expected: CHAIN_LEN,
                got: positions.len(),
            })?;
        Ok(Self {
            positions,
            primary_axis,
            secondary_axis,
        })
    }

    /// Take the axis assignment from a config.
    pub const fn with_config(p1: Point3, p2: Point3, p3: Point3, config: &OrientConfig) -> Self {
        Self::new(p1, p2, p3, config.primary_axis, config.secondary_axis)
    }
}

// ---------------------------------------------------------------------------
// OrientationResult
// ---------------------------------------------------------------------------

/// World-space bases for the three joints of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationResult {
    /// Per-joint bases, parent first.
    pub bases: [Basis; CHAIN_LEN],
    /// Unit normal of the joint plane, `(p2 - p1) x (p3 - p1)` normalized.
    pub plane_normal: Vec3,
    /// Plane normal with the secondary axis' sign applied.
    pub up_reference: Vec3,
    pub primary_axis: AxisChoice,
    pub secondary_axis: AxisChoice,
}

impl OrientationResult {
    /// Basis of joint `index` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 3`.
    pub fn basis(&self, index: usize) -> &Basis {
        &self.bases[index]
    }

    /// Direction the primary axis of joint `index` aims along.
    pub fn forward(&self, index: usize) -> Vec3 {
        self.bases[index].signed_axis(self.primary_axis)
    }

    /// World direction of the secondary local axis of joint `index`.
    pub fn up(&self, index: usize) -> Vec3 {
        self.bases[index].axis(self.secondary_axis.axis())
    }

    /// World direction of the remaining local axis of joint `index`.
    ///
    /// `None` only for a hand-built result whose two axes share a cardinal axis.
    pub fn side(&self, index: usize) -> Option<Vec3> {
        Axis::remaining(self.primary_axis.axis(), self.secondary_axis.axis())
            .map(|third| self.bases[index].axis(third))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Basis> {
        self.bases.iter()
    }

    /// Joint-orient Euler angles (XYZ, degrees) with the hierarchy restored.
    ///
    /// Joint 1 is expressed in world space; joints 2 and 3 relative to their
    /// chain parent.
    pub fn joint_orients(&self) -> [[f64; 3]; CHAIN_LEN] {
        self.joint_orients_under(&Basis::identity())
    }

    /// [`joint_orients`](Self::joint_orients) with joint 1 expressed relative
    /// to `root_parent`, the world-space basis of the chain's original parent.
    pub fn joint_orients_under(&self, root_parent: &Basis) -> [[f64; 3]; CHAIN_LEN] {
        let [b1, b2, b3] = self.bases;
        [
            b1.relative_to(root_parent).euler_xyz_degrees(),
            b2.relative_to(&b1).euler_xyz_degrees(),
            b3.relative_to(&b2).euler_xyz_degrees(),
        ]
    }
}

// ---------------------------------------------------------------------------
// ChainOrienter
// ---------------------------------------------------------------------------

/// Computes [`OrientationResult`]s with a fixed set of [`Tolerances`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainOrienter {
    tolerances: Tolerances,
}

impl ChainOrienter {
    /// Create an orienter with the given tolerances.
    ///
    /// The tolerances are used as given; run [`Tolerances::validate`] on
    /// anything user supplied.
    pub const fn new(tolerances: Tolerances) -> Self {
        Self { tolerances }
    }

    /// Create an orienter with default tolerances.
    pub fn with_defaults() -> Self {
        Self::new(Tolerances::default())
    }

    pub const fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// Orient the chain.
    ///
    /// # Errors
    ///
    /// Stops at the first failure, in this order:
    /// 1. [`OrientError::InvalidAxisPair`]
    /// 2. [`OrientError::NonFinite`] for NaN/infinite positions, or offsets
    ///    that overflow `f64`
    /// 3. [`OrientError::DegenerateAim`] for coincident consecutive joints
    /// 4. [`OrientError::CollinearPoints`]
    /// 5. [`OrientError::DegenerateAim`] / [`OrientError::DegenerateUp`] from
    ///    a joint's basis, tagged with its 1-based index
    pub fn orient(&self, input: &ChainInput) -> Result<OrientationResult, OrientError> {
        let tol = &self.tolerances;
        let primary = input.primary_axis;
        let secondary = input.secondary_axis;

        if primary.shares_axis(secondary) {
            return Err(OrientError::InvalidAxisPair { primary, secondary });
        }

        for (i, p) in input.positions.iter().enumerate() {
            if !p.coords.iter().all(|c| c.is_finite()) {
                return Err(OrientError::NonFinite { joint: i + 1 });
            }
        }

        let [p1, p2, p3] = &input.positions;
        let upper = subtract(p2, p1);
        let lower = subtract(p3, p2);

        // Coincident joints would also fail the plane check; report the joint instead.
        for (joint, segment) in [(1, &upper), (2, &lower)] {
            let len = length(segment);
            if !len.is_finite() {
                return Err(OrientError::NonFinite { joint });
            }
            if len < tol.aim {
                return Err(OrientError::DegenerateAim { joint });
            }
        }

        let plane_normal = compute_plane_normal_with(p1, p2, p3, tol.plane, tol.zero_length)
            .map_err(|_| OrientError::CollinearPoints)?;
        let up_reference = scale(&plane_normal, secondary.sign());

        let aims = [upper, lower, lower];
        let mut bases = [Basis::identity(); CHAIN_LEN];
        for (i, aim) in aims.iter().enumerate() {
            let joint = i + 1;
            bases[i] = build_basis_with(aim, &up_reference, primary, secondary, tol)
                .map_err(|e| e.at_joint(joint))?;
            debug!(
                "rigorient-orient: joint {joint} {primary}={:?} {secondary}={:?}",
                bases[i].signed_axis(primary).as_slice(),
                bases[i].axis(secondary.axis()).as_slice()
            );
        }

        Ok(OrientationResult {
            bases,
            plane_normal,
            up_reference,
            primary_axis: primary,
            secondary_axis: secondary,
        })
    }
}

/// Orient three joints with default tolerances.
///
/// Convenience wrapper around [`ChainOrienter::orient`].
pub fn orient_chain(
    p1: Point3,
    p2: Point3,
    p3: Point3,
    primary_axis: AxisChoice,
    secondary_axis: AxisChoice,
) -> Result<OrientationResult, OrientError> {
    let input = ChainInput::new(p1, p2, p3, primary_axis, secondary_axis);
    ChainOrienter::with_defaults().orient(&input)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Orthonormal joint bases and the look-at construction that builds them.
//!
//! A [`Basis`] stores the world-space images of a joint's local X, Y and Z
//! axes as the columns of a rotation matrix. [`build_basis`] aims one local
//! axis along a direction and resolves the remaining twist with an
//! up-reference, the way an aim constraint with a world-up vector would.

use nalgebra::{Matrix3, Rotation3, UnitQuaternion};
use serde::{Deserialize, Serialize};
use tracing::trace;

use rigorient_core::{Axis, AxisChoice, BasisError, Tolerances, Vec3};

use crate::vector::{cross, is_degenerate, length, normalize_with, scale};

// ---------------------------------------------------------------------------
// Basis
// ---------------------------------------------------------------------------

/// World-space rotation of one joint, stored as its three local axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Basis {
    /// Image of the local +X axis.
    pub x_axis: Vec3,
    /// Image of the local +Y axis.
    pub y_axis: Vec3,
    /// Image of the local +Z axis.
    pub z_axis: Vec3,
}

impl Default for Basis {
    fn default() -> Self {
        Self::identity()
    }
}

impl Basis {
    pub fn identity() -> Self {
        Self::from_columns(Vec3::x(), Vec3::y(), Vec3::z())
    }

    pub const fn from_columns(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        Self {
            x_axis,
            y_axis,
            z_axis,
        }
    }

    pub fn from_matrix(m: &Matrix3<f64>) -> Self {
        Self::from_columns(
            m.column(0).into_owned(),
            m.column(1).into_owned(),
            m.column(2).into_owned(),
        )
    }

    pub fn from_rotation(rotation: &Rotation3<f64>) -> Self {
        Self::from_matrix(rotation.matrix())
    }

    /// World-space direction of the positive local `axis`.
    pub const fn axis(&self, axis: Axis) -> Vec3 {
        match axis {
            Axis::X => self.x_axis,
            Axis::Y => self.y_axis,
            Axis::Z => self.z_axis,
        }
    }

    /// World-space direction of a signed local axis, e.g. `-Y`.
    pub fn signed_axis(&self, choice: AxisChoice) -> Vec3 {
        self.axis(choice.axis()) * choice.sign()
    }

    /// Rotation matrix with the local axes as columns.
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[self.x_axis, self.y_axis, self.z_axis])
    }

    pub fn determinant(&self) -> f64 {
        self.matrix().determinant()
    }

    /// Unit-length, mutually orthogonal, right-handed columns within `epsilon`.
    pub fn is_orthonormal(&self, epsilon: f64) -> bool {
        let cols = [self.x_axis, self.y_axis, self.z_axis];
        let unit = cols.iter().all(|c| (c.norm() - 1.0).abs() <= epsilon);
        let orthogonal = (0..3).all(|i| cols[i].dot(&cols[(i + 1) % 3]).abs() <= epsilon);
        unit && orthogonal && (self.determinant() - 1.0).abs() <= epsilon
    }

    /// Interpret as a rotation. The caller is trusted to hold an orthonormal basis.
    pub fn to_rotation(&self) -> Rotation3<f64> {
        Rotation3::from_matrix_unchecked(self.matrix())
    }

    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_rotation_matrix(&self.to_rotation())
    }

    /// Euler angles in degrees for an XYZ rotate order (`R = Rz * Ry * Rx`).
    ///
    /// These are the joint-orient values a host applies to the joint.
    pub fn euler_xyz_degrees(&self) -> [f64; 3] {
        let (rx, ry, rz) = self.to_rotation().euler_angles();
        [rx.to_degrees(), ry.to_degrees(), rz.to_degrees()]
    }

    /// This basis expressed in the frame of `parent` (`parent^T * self`).
    pub fn relative_to(&self, parent: &Self) -> Self {
        Self::from_matrix(&(parent.matrix().transpose() * self.matrix()))
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build a joint basis with default [`Tolerances`].
///
/// See [`build_basis_with`].
pub fn build_basis(
    aim_dir: &Vec3,
    up_reference: &Vec3,
    primary: AxisChoice,
    secondary: AxisChoice,
) -> Result<Basis, BasisError> {
    build_basis_with(aim_dir, up_reference, primary, secondary, &Tolerances::default())
}

/// Build a right-handed orthonormal basis that aims `primary` along `aim_dir`.
///
/// `aim_dir` need not be normalized. `up_reference` is the world-space up
/// direction and already carries the secondary axis' sign, so the local
/// cardinal axis of `secondary` receives the re-orthogonalized up vector as
/// is. The third local axis is the cyclic cross product of the other two.
///
/// Construction:
/// - `forward = normalize(aim_dir)`
/// - `right = normalize(up_reference x forward)`
/// - `up = forward x right`
///
/// # Errors
///
/// - [`BasisError::InvalidAxisPair`] if both choices share a cardinal axis.
/// - [`BasisError::DegenerateAim`] if `|aim_dir| < tolerances.aim` or is not finite.
/// - [`BasisError::DegenerateUp`] if `|up_reference x forward| < tolerances.up` or is
///   not finite.
pub fn build_basis_with(
    aim_dir: &Vec3,
    up_reference: &Vec3,
    primary: AxisChoice,
    secondary: AxisChoice,
    tolerances: &Tolerances,
) -> Result<Basis, BasisError> {
    let Some(third) = Axis::remaining(primary.axis(), secondary.axis()) else {
        return Err(BasisError::InvalidAxisPair { primary, secondary });
    };
    if is_degenerate(length(aim_dir), tolerances.aim) {
        return Err(BasisError::DegenerateAim);
    }
    let forward = normalize_with(aim_dir, tolerances.zero_length);

    let side = cross(up_reference, &forward);
    if is_degenerate(length(&side), tolerances.up) {
        return Err(BasisError::DegenerateUp);
    }
    let right = normalize_with(&side, tolerances.zero_length);
    let up = cross(&forward, &right);

    let p = primary.axis().index();
    let s = secondary.axis().index();
    let t = third.index();

    let mut columns = [Vec3::zeros(); 3];
    columns[p] = scale(&forward, primary.sign());
    columns[s] = up;
    columns[t] = cross(&columns[(t + 1) % 3], &columns[(t + 2) % 3]);

    trace!(
        "rigorient-orient: basis {primary}/{secondary} forward={:?} up={:?}",
        forward.as_slice(),
        up.as_slice()
    );

    Ok(Basis::from_columns(columns[0], columns[1], columns[2]))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-9;

    fn basis(aim: &Vec3, up: &Vec3, primary: AxisChoice, secondary: AxisChoice) -> Basis {
        build_basis(aim, up, primary, secondary).unwrap()
    }

    fn valid_pairs() -> impl Iterator<Item = (AxisChoice, AxisChoice)> {
        AxisChoice::ALL.into_iter().flat_map(|p| {
            AxisChoice::ALL
                .into_iter()
                .filter(move |s| !p.shares_axis(*s))
                .map(move |s| (p, s))
        })
    }

    #[test]
    fn identity_is_orthonormal() {
        let b = Basis::identity();
        assert!(b.is_orthonormal(EPS));
        assert_relative_eq!(b.determinant(), 1.0);
        assert_eq!(b.euler_xyz_degrees(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn x_aim_z_up_along_world_axes() {
        let b = basis(&Vec3::new(2.0, 0.0, 0.0), &Vec3::z(), AxisChoice::PosX, AxisChoice::PosZ);
        assert_relative_eq!(b.x_axis, Vec3::x(), epsilon = EPS);
        assert_relative_eq!(b.y_axis, Vec3::y(), epsilon = EPS);
        assert_relative_eq!(b.z_axis, Vec3::z(), epsilon = EPS);
    }

    #[test]
    fn negative_primary_points_away_from_aim() {
        let b = basis(&Vec3::new(0.0, 3.0, 0.0), &Vec3::z(), AxisChoice::NegX, AxisChoice::PosZ);
        assert_relative_eq!(b.x_axis, -Vec3::y(), epsilon = EPS);
        assert_relative_eq!(b.signed_axis(AxisChoice::NegX), Vec3::y(), epsilon = EPS);
        assert!(b.is_orthonormal(EPS));
    }

    #[test]
    fn up_is_reorthogonalized() {
        // Up leans toward the aim; only its perpendicular part survives.
        let aim = Vec3::new(1.0, 0.0, 0.0);
        let up = Vec3::new(0.7, 0.0, 1.0);
        let b = basis(&aim, &up, AxisChoice::PosX, AxisChoice::PosY);
        assert_relative_eq!(b.y_axis, Vec3::z(), epsilon = EPS);
        assert_relative_eq!(b.z_axis, -Vec3::y(), epsilon = EPS);
        assert!(b.is_orthonormal(EPS));
    }

    #[test]
    fn every_valid_axis_pair_is_right_handed() {
        let aim = Vec3::new(1.0, 2.0, -0.5);
        let up = Vec3::new(-0.3, 0.4, 1.0);
        for (primary, secondary) in valid_pairs() {
            let b = basis(&aim, &up, primary, secondary);
            assert!(b.is_orthonormal(1e-9), "{primary}/{secondary}");
            assert_relative_eq!(b.signed_axis(primary), aim.normalize(), epsilon = EPS);
            // Secondary axis lies on the up side of the aim.
            assert!(b.axis(secondary.axis()).dot(&up) > 0.0, "{primary}/{secondary}");
        }
    }

    #[test]
    fn invalid_axis_pair() {
        let err = build_basis(&Vec3::x(), &Vec3::z(), AxisChoice::PosY, AxisChoice::NegY).unwrap_err();
        assert_eq!(
            err,
            BasisError::InvalidAxisPair {
                primary: AxisChoice::PosY,
                secondary: AxisChoice::NegY
            }
        );
    }

    #[test]
    fn zero_aim_is_degenerate() {
        let err = build_basis(&Vec3::zeros(), &Vec3::z(), AxisChoice::PosX, AxisChoice::PosZ).unwrap_err();
        assert_eq!(err, BasisError::DegenerateAim);
        let err = build_basis(&Vec3::new(1e-10, 0.0, 0.0), &Vec3::z(), AxisChoice::PosX, AxisChoice::PosZ)
            .unwrap_err();
        assert_eq!(err, BasisError::DegenerateAim);
    }

    #[test]
    fn parallel_up_is_degenerate() {
        let err = build_basis(&Vec3::z(), &-Vec3::z(), AxisChoice::PosX, AxisChoice::PosY).unwrap_err();
        assert_eq!(err, BasisError::DegenerateUp);
        let err = build_basis(&Vec3::z(), &Vec3::zeros(), AxisChoice::PosX, AxisChoice::PosY).unwrap_err();
        assert_eq!(err, BasisError::DegenerateUp);
    }

    #[test]
    fn non_finite_inputs_are_degenerate() {
        let nan = Vec3::new(f64::NAN, 0.0, 0.0);
        let inf = Vec3::new(f64::INFINITY, 1.0, 0.0);
        let pair = (AxisChoice::PosX, AxisChoice::PosZ);
        assert_eq!(build_basis(&nan, &Vec3::z(), pair.0, pair.1), Err(BasisError::DegenerateAim));
        assert_eq!(build_basis(&inf, &Vec3::z(), pair.0, pair.1), Err(BasisError::DegenerateAim));
        assert_eq!(build_basis(&Vec3::x(), &nan, pair.0, pair.1), Err(BasisError::DegenerateUp));
    }

    #[test]
    fn far_aim_still_builds() {
        let b = basis(&Vec3::new(1e200, 1e200, 0.0), &Vec3::z(), AxisChoice::PosX, AxisChoice::PosZ);
        assert!(b.is_orthonormal(1e-12));
        assert_relative_eq!(b.x_axis, Vec3::new(1.0, 1.0, 0.0).normalize(), epsilon = 1e-12);
    }

    #[test]
    fn quaternion_matches_matrix() {
        let b = basis(&Vec3::new(1.0, 1.0, 0.0), &Vec3::z(), AxisChoice::PosX, AxisChoice::PosZ);
        let q = b.to_quaternion();
        assert_relative_eq!(q * Vec3::x(), b.x_axis, epsilon = EPS);
        assert_relative_eq!(q * Vec3::y(), b.y_axis, epsilon = EPS);
        assert_relative_eq!(q * Vec3::z(), b.z_axis, epsilon = EPS);
    }

    #[test]
    fn euler_xyz_of_yaw() {
        // X aimed 45 degrees between +X and +Y is a pure Z rotation.
        let b = basis(&Vec3::new(1.0, 1.0, 0.0), &Vec3::z(), AxisChoice::PosX, AxisChoice::PosZ);
        let [rx, ry, rz] = b.euler_xyz_degrees();
        assert_relative_eq!(rx, 0.0, epsilon = 1e-9);
        assert_relative_eq!(ry, 0.0, epsilon = 1e-9);
        assert_relative_eq!(rz, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn euler_xyz_rebuilds_rotation() {
        let b = basis(&Vec3::new(0.3, -1.0, 0.8), &Vec3::new(0.2, 0.5, 1.0), AxisChoice::PosY, AxisChoice::NegZ);
        let [rx, ry, rz] = b.euler_xyz_degrees();
        let rebuilt = Rotation3::from_euler_angles(rx.to_radians(), ry.to_radians(), rz.to_radians());
        assert_relative_eq!(rebuilt.matrix(), &b.matrix(), epsilon = 1e-9);
    }

    #[test]
    fn relative_to_self_is_identity() {
        let b = basis(&Vec3::new(0.3, -1.0, 0.8), &Vec3::z(), AxisChoice::PosX, AxisChoice::PosY);
        let local = b.relative_to(&b);
        assert_relative_eq!(local.matrix(), Matrix3::identity(), epsilon = 1e-9);
    }

    #[test]
    fn relative_to_composes_back() {
        let parent = basis(&Vec3::new(1.0, 1.0, 0.0), &Vec3::z(), AxisChoice::PosX, AxisChoice::PosZ);
        let child = basis(&Vec3::new(0.0, 1.0, 1.0), &Vec3::x(), AxisChoice::PosX, AxisChoice::PosZ);
        let local = child.relative_to(&parent);
        assert!(local.is_orthonormal(1e-9));
        assert_relative_eq!(parent.matrix() * local.matrix(), child.matrix(), epsilon = 1e-9);
    }

    #[test]
    fn from_rotation_roundtrip() {
        let rot = Rotation3::from_euler_angles(0.1, -0.4, 1.2);
        let b = Basis::from_rotation(&rot);
        assert!(b.is_orthonormal(1e-12));
        assert_relative_eq!(b.to_rotation().matrix(), rot.matrix(), epsilon = 1e-12);
    }
}

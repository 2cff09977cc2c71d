//! Normal of the plane spanned by three joint positions.

use thiserror::Error;

use rigorient_core::{Point3, Vec3};

use crate::vector::{ZERO_LENGTH, cross, length, subtract};

/// Minimum `|(p2 - p1) x (p3 - p1)|` for the three points to define a plane.
pub const PLANE_TOLERANCE: f64 = 1e-6;

/// The three points are collinear or coincident within tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Points are collinear or coincident")]
pub struct Degenerate;

/// Unit normal of the plane through `p1`, `p2`, `p3`.
///
/// The normal is `normalize((p2 - p1) x (p3 - p1))`, so its sign follows the
/// winding of the points. Callers that need a particular direction flip it
/// explicitly.
pub fn compute_plane_normal(p1: &Point3, p2: &Point3, p3: &Point3) -> Result<Vec3, Degenerate> {
    compute_plane_normal_with(p1, p2, p3, PLANE_TOLERANCE, ZERO_LENGTH)
}

/// [`compute_plane_normal`] with caller-supplied thresholds.
///
/// The cross product is taken between unit edges and rescaled by the edge
/// lengths for the tolerance check, so joints far from the origin neither
/// overflow nor lose the normal. Non-finite input is degenerate.
pub fn compute_plane_normal_with(
    p1: &Point3,
    p2: &Point3,
    p3: &Point3,
    tolerance: f64,
    zero_length: f64,
) -> Result<Vec3, Degenerate> {
    let v1 = subtract(p2, p1);
    let v2 = subtract(p3, p1);
    let (l1, l2) = (length(&v1), length(&v2));
    if !l1.is_finite() || !l2.is_finite() || l1 <= zero_length || l2 <= zero_length {
        return Err(Degenerate);
    }

    let n = cross(&(v1 / l1), &(v2 / l2));
    let sin = length(&n);
    // |(p2 - p1) x (p3 - p1)|, +inf once the edges are huge.
    let area = l1 * l2 * sin;
    if area.is_nan() || area < tolerance || sin <= 0.0 {
        return Err(Degenerate);
    }
    Ok(n / sin)
}

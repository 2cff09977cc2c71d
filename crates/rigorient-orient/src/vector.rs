//! Vector helpers over [`Point3`] / [`Vec3`].
//!
//! Thin wrappers around nalgebra so the geometry code reads in terms of the
//! operations it performs. The one policy decision lives in [`normalize`]:
//! vectors too short (or too broken) to carry a direction map to zero instead
//! of failing.

use rigorient_core::{Point3, Vec3};

/// Length at or below which [`normalize`] returns the zero vector.
pub const ZERO_LENGTH: f64 = 1e-12;

/// Displacement from `b` to `a`.
#[inline]
pub fn subtract(a: &Point3, b: &Point3) -> Vec3 {
    a - b
}

#[inline]
pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    a + b
}

#[inline]
pub fn scale(v: &Vec3, s: f64) -> Vec3 {
    v * s
}

#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

/// Right-handed cross product.
#[inline]
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    a.cross(b)
}

/// Euclidean length, scaled by the largest component so that far-apart
/// joints (components past ~1e154) do not overflow the sum of squares.
///
/// NaN if any component is NaN; infinite if any component is infinite.
pub fn length(v: &Vec3) -> f64 {
    if v.iter().any(|c| c.is_nan()) {
        return f64::NAN;
    }
    let largest = v.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    if largest <= 0.0 || largest.is_infinite() {
        return largest;
    }
    let unit = v / largest;
    largest * dot(&unit, &unit).sqrt()
}

/// True unless `len` is a finite length of at least `threshold`.
///
/// Degeneracy guards go through this so that NaN and infinite lengths fail
/// them instead of slipping past a bare `<`.
#[inline]
pub fn is_degenerate(len: f64, threshold: f64) -> bool {
    !len.is_finite() || len < threshold
}

/// Unit vector along `v`, or zero when `length(v) <= ZERO_LENGTH` or is not finite.
#[inline]
pub fn normalize(v: &Vec3) -> Vec3 {
    normalize_with(v, ZERO_LENGTH)
}

/// [`normalize`] with a caller-supplied zero-length threshold.
pub fn normalize_with(v: &Vec3, zero_length: f64) -> Vec3 {
    let len = length(v);
    if !len.is_finite() || len <= zero_length {
        Vec3::zeros()
    } else {
        v / len
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn subtract_points() {
        let d = subtract(&Point3::new(1.0, 2.0, 3.0), &Point3::new(0.5, 0.0, -1.0));
        assert_eq!(d, Vec3::new(0.5, 2.0, 4.0));
    }

    #[test]
    fn add_and_scale() {
        let v = add(&Vec3::new(1.0, 0.0, 0.0), &Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(scale(&v, 2.0), Vec3::new(2.0, 4.0, 0.0));
    }

    #[test]
    fn cross_is_right_handed() {
        assert_eq!(cross(&Vec3::x(), &Vec3::y()), Vec3::z());
        assert_eq!(cross(&Vec3::y(), &Vec3::z()), Vec3::x());
        assert_eq!(cross(&Vec3::y(), &Vec3::x()), -Vec3::z());
    }

    #[test]
    fn length_of_3_4_0() {
        assert_relative_eq!(length(&Vec3::new(3.0, 4.0, 0.0)), 5.0);
        assert_relative_eq!(dot(&Vec3::new(1.0, 2.0, 3.0), &Vec3::new(4.0, 5.0, 6.0)), 32.0);
    }

    #[test]
    fn normalize_unit_length() {
        let n = normalize(&Vec3::new(0.0, 3.0, 4.0));
        assert_relative_eq!(length(&n), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.y, 0.6, epsilon = 1e-12);
        assert_relative_eq!(n.z, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn normalize_degenerate_is_zero() {
        assert_eq!(normalize(&Vec3::zeros()), Vec3::zeros());
        assert_eq!(normalize(&Vec3::new(1e-13, 0.0, 0.0)), Vec3::zeros());
    }

    #[test]
    fn length_of_far_apart_points_does_not_overflow() {
        assert_relative_eq!(length(&Vec3::new(3e200, 4e200, 0.0)), 5e200, max_relative = 1e-12);
        let n = normalize(&Vec3::new(0.0, 1e160, 0.0));
        assert_relative_eq!(n, Vec3::y(), epsilon = 1e-12);
    }

    #[test]
    fn non_finite_lengths() {
        assert!(length(&Vec3::new(f64::NAN, 0.0, 1.0)).is_nan());
        assert!(length(&Vec3::new(f64::INFINITY, 0.0, 1.0)).is_infinite());
        assert_eq!(normalize(&Vec3::new(f64::NAN, 1.0, 0.0)), Vec3::zeros());
        assert_eq!(normalize(&Vec3::new(f64::NEG_INFINITY, 1.0, 0.0)), Vec3::zeros());
    }

    #[test]
    fn degenerate_guard_fails_closed() {
        assert!(is_degenerate(f64::NAN, 1e-9));
        assert!(is_degenerate(f64::INFINITY, 1e-9));
        assert!(is_degenerate(1e-10, 1e-9));
        assert!(!is_degenerate(1e-9, 1e-9));
        assert!(!is_degenerate(1e300, 1e-9));
    }

    #[test]
    fn normalize_with_custom_threshold() {
        assert_eq!(normalize_with(&Vec3::new(0.5, 0.0, 0.0), 1.0), Vec3::zeros());
        assert_eq!(normalize_with(&Vec3::new(2.0, 0.0, 0.0), 1.0), Vec3::x());
    }
}

//! Assertions for rotation matrices and vectors.

use approx::relative_eq;
use nalgebra::Matrix3;

use rigorient_core::Vec3;

/// Panics unless the columns of `m` are unit length, pairwise orthogonal,
/// and form a right-handed frame, all within `epsilon`.
#[track_caller]
pub fn assert_orthonormal(m: &Matrix3<f64>, epsilon: f64) {
    for i in 0..3 {
        let col = m.column(i);
        assert!(
            relative_eq!(col.norm(), 1.0, epsilon = epsilon),
            "column {i} has length {}",
            col.norm()
        );
        let next = m.column((i + 1) % 3);
        assert!(
            col.dot(&next).abs() <= epsilon,
            "columns {i} and {} are not orthogonal: dot = {}",
            (i + 1) % 3,
            col.dot(&next)
        );
    }
    let det = m.determinant();
    assert!(
        relative_eq!(det, 1.0, epsilon = epsilon),
        "determinant is {det}, expected +1"
    );
}

/// Component-wise vector comparison with a readable failure message.
#[track_caller]
pub fn assert_vec_eq(actual: &Vec3, expected: &Vec3, epsilon: f64) {
    assert!(
        relative_eq!(*actual, *expected, epsilon = epsilon),
        "expected {:?}, got {:?}",
        expected.as_slice(),
        actual.as_slice()
    );
}

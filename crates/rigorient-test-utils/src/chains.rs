//! Random joint positions and chains for property-style tests.

use rand::Rng;

use rigorient_core::Point3;

/// Uniform point in the cube `[-extent, extent]^3`.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> Point3 {
    Point3::new(
        rng.gen_range(-extent..=extent),
        rng.gen_range(-extent..=extent),
        rng.gen_range(-extent..=extent),
    )
}

/// Three joint positions that bend by a clear margin.
///
/// Segments are at least `0.1 * extent` long and the bend keeps
/// `|(p2 - p1) x (p3 - p1)|` above `1e-3 * extent^2`.
pub fn random_chain<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> [Point3; 3] {
    let min_segment = 0.1 * extent;
    let min_area = 1e-3 * extent * extent;
    loop {
        let p1 = random_point(rng, extent);
        let p2 = random_point(rng, extent);
        let p3 = random_point(rng, extent);
        let upper = p2 - p1;
        let lower = p3 - p2;
        if upper.norm() < min_segment || lower.norm() < min_segment {
            continue;
        }
        if upper.cross(&(p3 - p1)).norm() < min_area {
            continue;
        }
        return [p1, p2, p3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;

    #[test]
    fn random_point_in_extent() {
        let mut rng = seeded_rng(7);
        for _ in 0..100 {
            let p = random_point(&mut rng, 2.0);
            assert!(p.coords.iter().all(|c| c.abs() <= 2.0));
        }
    }

    #[test]
    fn random_chain_bends() {
        let mut rng = seeded_rng(9);
        for _ in 0..100 {
            let [p1, p2, p3] = random_chain(&mut rng, 10.0);
            assert!((p2 - p1).cross(&(p3 - p1)).norm() >= 0.1);
        }
    }

    #[test]
    fn random_chain_is_reproducible() {
        let a = random_chain(&mut seeded_rng(3), 5.0);
        let b = random_chain(&mut seeded_rng(3), 5.0);
        assert_eq!(a, b);
    }
}

//! Free vector functions used by the geometry and shading code.
//!
//! These are thin wrappers over `glam::DVec3` so call sites read the same
//! way as the math they implement.

use crate::DVec3;

/// Component-wise sum.
#[inline]
pub fn add(a: DVec3, b: DVec3) -> DVec3 {
    a + b
}

/// Component-wise difference `a - b`.
#[inline]
pub fn subtract(a: DVec3, b: DVec3) -> DVec3 {
    a - b
}

/// Standard right-handed 3D cross product.
#[inline]
pub fn cross(a: DVec3, b: DVec3) -> DVec3 {
    a.cross(b)
}

/// Sum of component-wise products.
#[inline]
pub fn dot(a: DVec3, b: DVec3) -> f64 {
    a.dot(b)
}

/// Euclidean length.
#[inline]
pub fn magnitude(v: DVec3) -> f64 {
    v.length()
}

/// Scale `v` to unit length.
///
/// The caller must pass a non-zero, finite vector. Debug builds panic on a
/// zero or non-finite input instead of silently producing NaN.
#[inline]
pub fn normalize(v: DVec3) -> DVec3 {
    let len = v.length();
    debug_assert!(
        len > 0.0 && len.is_finite(),
        "normalize called with a zero-length or non-finite vector: {v:?}"
    );
    v / len
}

/// Like [`normalize`], but returns `None` for zero-length or non-finite input.
#[inline]
pub fn try_normalize(v: DVec3) -> Option<DVec3> {
    let len = v.length();
    if len > 0.0 && len.is_finite() {
        Some(v / len)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dvec3;

    #[test]
    fn test_add_subtract() {
        let a = dvec3(1.0, 2.0, 3.0);
        let b = dvec3(4.0, 5.0, 6.0);
        assert_eq!(add(a, b), dvec3(5.0, 7.0, 9.0));
        assert_eq!(subtract(b, a), dvec3(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_cross() {
        assert_eq!(cross(DVec3::X, DVec3::Y), DVec3::Z);
        assert_eq!(cross(DVec3::Y, DVec3::X), -DVec3::Z);
        assert_eq!(
            cross(dvec3(2.0, 0.0, 0.0), dvec3(1.0, 2.0, 0.0)),
            dvec3(0.0, 0.0, 4.0)
        );
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(dvec3(1.0, 2.0, 3.0), dvec3(4.0, -5.0, 6.0)), 12.0);
        assert_eq!(dot(DVec3::X, DVec3::Y), 0.0);
    }

    #[test]
    fn test_normalize_unit_length() {
        let samples = [
            dvec3(3.0, 4.0, 0.0),
            dvec3(-0.001, 0.002, 0.0005),
            dvec3(1e6, -2e6, 3e6),
            dvec3(0.0, 0.0, -7.5),
            dvec3(0.25, 0.5, 1.0),
        ];
        for v in samples {
            let n = normalize(v);
            assert!((magnitude(n) - 1.0).abs() < 1e-6, "{v:?} -> {n:?}");
            // Same direction as the input
            assert!(dot(n, v) > 0.0);
        }
    }

    #[test]
    fn test_try_normalize_rejects_zero() {
        assert_eq!(try_normalize(DVec3::ZERO), None);
        assert_eq!(try_normalize(DVec3::splat(f64::INFINITY)), None);
        assert_eq!(try_normalize(dvec3(0.0, 2.0, 0.0)), Some(DVec3::Y));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero-length")]
    fn test_normalize_zero_panics_in_debug() {
        normalize(DVec3::ZERO);
    }
}

//! Winding-order normalization.
//!
//! The intersection test reports a hit only when a ray approaches the side
//! the winding order faces, so every triangle is brought to clockwise order
//! (viewed looking down the +z axis) before rendering.

use lumen_math::{cross, subtract, DVec3};

use crate::shape::Triangle;

/// True if `a, b, c` wind counter-clockwise when viewed down +z.
pub fn is_counter_clockwise(a: DVec3, b: DVec3, c: DVec3) -> bool {
    cross(subtract(b, a), subtract(c, a)).z > 0.0
}

/// True if `a, b, c` do not wind counter-clockwise (degenerate counts as clockwise).
pub fn is_clockwise(a: DVec3, b: DVec3, c: DVec3) -> bool {
    !is_counter_clockwise(a, b, c)
}

/// Swap the second and third vertex of a counter-clockwise triangle.
///
/// Triangles flagged `skip_winding_order` are left untouched.
pub fn correct_winding_order(triangle: &mut Triangle) {
    if triangle.skip_winding_order {
        return;
    }
    let [a, b, c] = triangle.points;
    if !is_clockwise(a, b, c) {
        log::trace!("Swapping vertices of counter-clockwise triangle at {:?}", triangle.origin);
        triangle.points.swap(1, 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Material;
    use lumen_math::dvec3;

    fn triangle(points: [DVec3; 3]) -> Triangle {
        Triangle::new(points, Material::new(DVec3::ZERO, 0.0, 0.0))
    }

    #[test]
    fn test_orientation() {
        let a = dvec3(-1.0, -1.0, 0.0);
        let b = dvec3(1.0, -1.0, 0.0);
        let c = dvec3(0.0, 1.0, 0.0);

        assert!(is_counter_clockwise(a, b, c));
        assert!(is_clockwise(a, c, b));
        // Degenerate triangles are treated as clockwise
        assert!(is_clockwise(a, a, c));
    }

    #[test]
    fn test_correct_winding_swaps_ccw() {
        let mut tri = triangle([dvec3(-1.0, -1.0, 5.0), dvec3(1.0, -1.0, 5.0), dvec3(0.0, 1.0, 5.0)]);
        correct_winding_order(&mut tri);

        assert_eq!(tri.points[1], dvec3(0.0, 1.0, 5.0));
        assert_eq!(tri.points[2], dvec3(1.0, -1.0, 5.0));
        let [a, b, c] = tri.points;
        assert!(is_clockwise(a, b, c));
    }

    #[test]
    fn test_correct_winding_is_idempotent() {
        let points = [dvec3(1.0, -1.0, 1.0), dvec3(-1.0, -1.0, 1.0), dvec3(0.0, 1.0, 1.0)];
        let mut tri = triangle(points);
        correct_winding_order(&mut tri);
        assert_eq!(tri.points, points);
        correct_winding_order(&mut tri);
        assert_eq!(tri.points, points);
    }

    #[test]
    fn test_skip_winding_order() {
        let points = [dvec3(-1.0, -1.0, 0.0), dvec3(1.0, -1.0, 0.0), dvec3(0.0, 1.0, 0.0)];
        let mut tri = triangle(points).with_skip_winding_order(true);
        correct_winding_order(&mut tri);
        assert_eq!(tri.points, points);
    }
}

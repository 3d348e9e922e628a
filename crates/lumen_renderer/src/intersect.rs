//! Ray-shape intersection.
//!
//! Triangles use the Möller-Trumbore test behind a stochastic transparency
//! gate: every call draws one uniform sample and reports a miss when it falls
//! below the material's transparency. Repeated calls with the same inputs
//! can therefore disagree unless the random source is controlled.

use lumen_core::{Shape, Sphere, Triangle};
use lumen_math::{cross, dot, normalize, subtract, DVec3, Ray};
use rand::Rng;

/// Tolerance for the parallel test and the minimum accepted distance.
pub const EPSILON: f64 = 1e-6;

/// Result of a successful intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// Ray parameter of the hit, always greater than [`EPSILON`]
    pub distance: f64,
    /// Unit geometric normal, following the triangle's winding
    pub normal: DVec3,
}

/// Trait for shapes that can be tested against a ray.
pub trait Intersect {
    /// Test the ray against this shape, drawing from `rng` for the
    /// transparency gate. Returns `None` on a miss.
    fn intersect<R: Rng + ?Sized>(&self, ray: &Ray, rng: &mut R) -> Option<Collision>;
}

impl Intersect for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    ///
    /// The reported distance is `dot(e2, q)` without the `1/a` factor, so it
    /// scales with the triangle's projected area and its sign flips for rays
    /// arriving from the back side. Back-side hits in front of the origin
    /// therefore miss, while back-side hits behind it are reported.
    fn intersect<R: Rng + ?Sized>(&self, ray: &Ray, rng: &mut R) -> Option<Collision> {
        if rng.gen::<f64>() < self.material.transparency {
            return None;
        }

        let [p0, p1, p2] = self.points;
        let e1 = subtract(p1, p0);
        let e2 = subtract(p2, p0);

        let h = cross(ray.direction, e2);
        let a = dot(e1, h);

        // Ray is parallel to the triangle, or the triangle is degenerate
        if a.abs() < EPSILON {
            return None;
        }

        let normal = normalize(cross(e1, e2));

        let s = subtract(ray.origin, p0);
        let u = dot(s, h) / a;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = cross(s, e1);
        let v = dot(ray.direction, q) / a;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = dot(e2, q);
        if t > EPSILON {
            Some(Collision {
                distance: t,
                normal,
            })
        } else {
            None
        }
    }
}

impl Intersect for Sphere {
    /// Spheres are not traced; every ray misses.
    fn intersect<R: Rng + ?Sized>(&self, _ray: &Ray, _rng: &mut R) -> Option<Collision> {
        None
    }
}

impl Intersect for Shape {
    fn intersect<R: Rng + ?Sized>(&self, ray: &Ray, rng: &mut R) -> Option<Collision> {
        match self {
            Shape::Triangle(triangle) => triangle.intersect(ray, rng),
            Shape::Sphere(sphere) => sphere.intersect(ray, rng),
        }
    }
}

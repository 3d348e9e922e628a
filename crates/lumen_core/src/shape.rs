//! Geometric primitives stored in a scene.

use lumen_math::DVec3;

use crate::scene::{Material, SceneError, SceneResult};

/// A triangle with a material.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    /// Vertices, in winding order
    pub points: [DVec3; 3],

    /// Surface material
    pub material: Material,

    /// Informational anchor point, not used by the intersection test
    pub origin: DVec3,

    /// Leave the vertex order alone during the winding pre-pass
    pub skip_winding_order: bool,
}

impl Triangle {
    /// Create a triangle whose origin is its first vertex.
    pub fn new(points: [DVec3; 3], material: Material) -> Self {
        Self {
            points,
            material,
            origin: points[0],
            skip_winding_order: false,
        }
    }

    /// Create a triangle from a dynamically sized point list.
    ///
    /// Exactly the first three points are used; fewer than three is an error
    /// reported against `index`, the triangle's position in the shape list.
    pub fn from_points(index: usize, points: &[DVec3], material: Material) -> SceneResult<Self> {
        match points {
            [a, b, c, ..] => Ok(Self::new([*a, *b, *c], material)),
            _ => Err(SceneError::TooFewPoints {
                index,
                count: points.len(),
            }),
        }
    }

    /// Set the informational origin.
    pub fn with_origin(mut self, origin: DVec3) -> Self {
        self.origin = origin;
        self
    }

    /// Keep the given vertex order regardless of winding.
    pub fn with_skip_winding_order(mut self, skip: bool) -> Self {
        self.skip_winding_order = skip;
        self
    }
}

/// A sphere.
///
/// Spheres are part of the scene description, but the tracer does not
/// intersect them yet: every ray misses a sphere.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: DVec3,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: DVec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// Any primitive a scene can hold.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Triangle(Triangle),
    Sphere(Sphere),
}

impl Shape {
    /// Material of the underlying primitive.
    pub fn material(&self) -> &Material {
        match self {
            Shape::Triangle(triangle) => &triangle.material,
            Shape::Sphere(sphere) => &sphere.material,
        }
    }

    /// The triangle, if this shape is one.
    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            Shape::Triangle(triangle) => Some(triangle),
            Shape::Sphere(_) => None,
        }
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::dvec3;

    fn grey() -> Material {
        Material::new(dvec3(128.0, 128.0, 128.0), 0.0, 0.0)
    }

    #[test]
    fn test_triangle_origin_defaults_to_first_point() {
        let tri = Triangle::new([DVec3::ZERO, DVec3::X, DVec3::Y], grey());
        assert_eq!(tri.origin, DVec3::ZERO);
        assert!(!tri.skip_winding_order);

        let tri = tri.with_origin(dvec3(0.0, 0.0, 1.0));
        assert_eq!(tri.origin, dvec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_points() {
        let points = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
        let tri = Triangle::from_points(0, &points, grey()).unwrap();
        assert_eq!(tri.points, [DVec3::ZERO, DVec3::X, DVec3::Y]);

        let err = Triangle::from_points(3, &points[..2], grey()).unwrap_err();
        assert_eq!(err, SceneError::TooFewPoints { index: 3, count: 2 });
    }

    #[test]
    fn test_shape_accessors() {
        let tri: Shape = Triangle::new([DVec3::ZERO, DVec3::X, DVec3::Y], grey()).into();
        let sphere: Shape = Sphere::new(DVec3::ZERO, 1.0, grey()).into();

        assert!(tri.as_triangle().is_some());
        assert!(sphere.as_triangle().is_none());
        assert_eq!(sphere.material(), &grey());
    }
}

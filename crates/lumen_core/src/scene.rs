//! Scene types for Lumen.
//!
//! A scene is an ordered list of shapes plus a list of point lights. It is
//! validated and winding-corrected once in [`Scene::new`] and is read-only
//! afterwards, so it can be shared freely between render workers.

use lumen_math::{Color, DVec3};
use thiserror::Error;

use crate::shape::Shape;
use crate::winding::correct_winding_order;

/// Errors that can occur while building a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("shape {index}: a triangle needs 3 points, got {count}")]
    TooFewPoints { index: usize, count: usize },

    #[error("shape {index}: coordinates must be finite")]
    NonFiniteCoordinate { index: usize },

    #[error("shape {index}: transparency {value} is outside [0, 1]")]
    InvalidTransparency { index: usize, value: f64 },

    #[error("shape {index}: roughness {value} is outside [0, 1]")]
    InvalidRoughness { index: usize, value: f64 },

    #[error("shape {index}: color channel {value} is outside [0, 255]")]
    InvalidColor { index: usize, value: f64 },

    #[error("shape {index}: sphere radius {value} must be positive")]
    InvalidRadius { index: usize, value: f64 },

    #[error("light {index}: strength {value} must be positive and finite")]
    InvalidLightStrength { index: usize, value: f64 },

    #[error("light {index}: origin must be finite")]
    NonFiniteLightOrigin { index: usize },
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;

/// Surface appearance of a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// RGB color, each channel in [0, 255]
    pub color: Color,

    /// Probability in [0, 1] that a ray passes straight through
    pub transparency: f64,

    /// Blend between mirror (0) and diffuse (1) reflection
    pub roughness: f64,
}

impl Material {
    pub fn new(color: Color, transparency: f64, roughness: f64) -> Self {
        Self {
            color,
            transparency,
            roughness,
        }
    }

    fn validate(&self, index: usize) -> SceneResult<()> {
        for value in self.color.to_array() {
            if !(0.0..=255.0).contains(&value) {
                return Err(SceneError::InvalidColor { index, value });
            }
        }
        if !(0.0..=1.0).contains(&self.transparency) {
            return Err(SceneError::InvalidTransparency {
                index,
                value: self.transparency,
            });
        }
        if !(0.0..=1.0).contains(&self.roughness) {
            return Err(SceneError::InvalidRoughness {
                index,
                value: self.roughness,
            });
        }
        Ok(())
    }
}

/// An isotropic point light with inverse-square falloff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub origin: DVec3,
    pub strength: f64,
}

impl Light {
    pub fn new(origin: DVec3, strength: f64) -> Self {
        Self { origin, strength }
    }

    fn validate(&self, index: usize) -> SceneResult<()> {
        if !self.origin.is_finite() {
            return Err(SceneError::NonFiniteLightOrigin { index });
        }
        if !(self.strength > 0.0 && self.strength.is_finite()) {
            return Err(SceneError::InvalidLightStrength {
                index,
                value: self.strength,
            });
        }
        Ok(())
    }
}

/// A complete, validated scene.
///
/// Shape order is significant: the tracer visits shapes in insertion order
/// and the recursive case keeps the color of the last shape it hits.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    lights: Vec<Light>,
}

impl Scene {
    /// Validate the input and run the winding pre-pass on every triangle.
    pub fn new(shapes: Vec<Shape>, lights: Vec<Light>) -> SceneResult<Self> {
        let mut shapes = shapes;

        for (index, shape) in shapes.iter_mut().enumerate() {
            validate_shape(shape, index)?;
            if let Shape::Triangle(triangle) = shape {
                correct_winding_order(triangle);
            }
        }

        for (index, light) in lights.iter().enumerate() {
            light.validate(index)?;
        }

        log::debug!(
            "Built scene with {} shapes and {} lights",
            shapes.len(),
            lights.len()
        );

        Ok(Self { shapes, lights })
    }

    /// Shapes in traversal order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Point lights in application order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get shape count.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Get triangle count.
    pub fn triangle_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|shape| shape.as_triangle().is_some())
            .count()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

fn validate_shape(shape: &Shape, index: usize) -> SceneResult<()> {
    match shape {
        Shape::Triangle(triangle) => {
            if triangle.points.iter().any(|p| !p.is_finite()) {
                return Err(SceneError::NonFiniteCoordinate { index });
            }
        }
        Shape::Sphere(sphere) => {
            if !sphere.center.is_finite() {
                return Err(SceneError::NonFiniteCoordinate { index });
            }
            if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                return Err(SceneError::InvalidRadius {
                    index,
                    value: sphere.radius,
                });
            }
        }
    }
    shape.material().validate(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Sphere, Triangle};
    use lumen_math::dvec3;

    fn material() -> Material {
        Material::new(dvec3(10.0, 20.0, 30.0), 0.0, 0.0)
    }

    fn triangle_at(z: f64) -> Triangle {
        Triangle::new(
            [dvec3(1.0, -1.0, z), dvec3(-1.0, -1.0, z), dvec3(0.0, 1.0, z)],
            material(),
        )
    }

    #[test]
    fn test_scene_creation() {
        let scene = Scene::new(
            vec![
                triangle_at(1.0).into(),
                Sphere::new(DVec3::ZERO, 1.0, material()).into(),
                triangle_at(2.0).into(),
            ],
            vec![Light::new(DVec3::ZERO, 20.0)],
        )
        .unwrap();

        assert_eq!(scene.shape_count(), 3);
        assert_eq!(scene.triangle_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert!(!scene.is_empty());
    }

    #[test]
    fn test_scene_preserves_insertion_order() {
        let scene = Scene::new(
            vec![triangle_at(3.0).into(), triangle_at(1.0).into(), triangle_at(2.0).into()],
            vec![],
        )
        .unwrap();

        let depths: Vec<f64> = scene
            .shapes()
            .iter()
            .filter_map(Shape::as_triangle)
            .map(|t| t.points[0].z)
            .collect();
        assert_eq!(depths, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_scene_corrects_winding() {
        // Counter-clockwise when viewed down +z
        let ccw = Triangle::new(
            [dvec3(-1.0, -1.0, 0.0), dvec3(1.0, -1.0, 0.0), dvec3(0.0, 1.0, 0.0)],
            material(),
        );
        let scene = Scene::new(vec![ccw.into()], vec![]).unwrap();
        let tri = scene.shapes()[0].as_triangle().unwrap();

        assert_eq!(tri.points[1], dvec3(0.0, 1.0, 0.0));
        assert_eq!(tri.points[2], dvec3(1.0, -1.0, 0.0));
    }

    #[test]
    fn test_rejects_bad_materials() {
        let mut tri = triangle_at(1.0);
        tri.material.transparency = -0.1;
        let err = Scene::new(vec![triangle_at(0.0).into(), tri.into()], vec![]).unwrap_err();
        assert_eq!(err, SceneError::InvalidTransparency { index: 1, value: -0.1 });

        let mut tri = triangle_at(1.0);
        tri.material.roughness = 1.5;
        let err = Scene::new(vec![tri.into()], vec![]).unwrap_err();
        assert!(matches!(err, SceneError::InvalidRoughness { index: 0, .. }));

        let mut tri = triangle_at(1.0);
        tri.material.color = dvec3(300.0, 0.0, 0.0);
        let err = Scene::new(vec![tri.into()], vec![]).unwrap_err();
        assert!(matches!(err, SceneError::InvalidColor { value, .. } if value == 300.0));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let mut tri = triangle_at(1.0);
        tri.points[2].x = f64::NAN;
        let err = Scene::new(vec![tri.into()], vec![]).unwrap_err();
        assert_eq!(err, SceneError::NonFiniteCoordinate { index: 0 });

        let sphere = Sphere::new(DVec3::ZERO, 0.0, material());
        let err = Scene::new(vec![sphere.into()], vec![]).unwrap_err();
        assert!(matches!(err, SceneError::InvalidRadius { index: 0, .. }));
    }

    #[test]
    fn test_rejects_bad_lights() {
        let err = Scene::new(vec![], vec![Light::new(DVec3::ZERO, -20.0)]).unwrap_err();
        assert_eq!(err, SceneError::InvalidLightStrength { index: 0, value: -20.0 });

        let err = Scene::new(
            vec![],
            vec![Light::new(DVec3::ZERO, 1.0), Light::new(DVec3::ZERO, 0.0)],
        )
        .unwrap_err();
        assert!(matches!(err, SceneError::InvalidLightStrength { index: 1, .. }));

        let err = Scene::new(vec![], vec![Light::new(DVec3::splat(f64::INFINITY), 1.0)])
            .unwrap_err();
        assert_eq!(err, SceneError::NonFiniteLightOrigin { index: 0 });
    }

    #[test]
    fn test_error_messages() {
        let err = SceneError::TooFewPoints { index: 4, count: 2 };
        assert_eq!(err.to_string(), "shape 4: a triangle needs 3 points, got 2");
    }
}

//! Recursive ray tracer.
//!
//! At depth 0 a ray takes the unlit color of the nearest shape it hits. At
//! higher depths every shape the ray hits, in scene order, spawns a
//! reflected ray that is traced one level shallower; each hit overwrites
//! the running color, so the last hit in scene order decides the result.
//! A lighting pass then scales the color by each visible point light.

use lumen_core::Scene;
use lumen_math::{try_normalize, Color, Ray};
use rand::Rng;

use crate::intersect::Intersect;
use crate::reflect::reflect;

/// How reflected color is combined with direct color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceOptions {
    /// Mix the reflected color with the direct color of the incoming ray
    pub blend: bool,
    /// Weight of the reflected color when blending, in [0, 1]
    pub blend_amount: f64,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            blend: true,
            blend_amount: 0.5,
        }
    }
}

/// Light strength after inverse-square falloff.
#[inline]
pub fn applied_strength(strength: f64, light_distance: f64) -> f64 {
    strength / light_distance.powi(2)
}

/// Resolves the color of rays against a read-only scene.
#[derive(Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
    options: TraceOptions,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene, options: TraceOptions) -> Self {
        Self { scene, options }
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    pub fn options(&self) -> TraceOptions {
        self.options
    }

    /// Compute the color seen by a ray with `depth` reflection bounces left.
    pub fn trace<R: Rng + ?Sized>(&self, ray: &Ray, depth: u32, rng: &mut R) -> Color {
        // Only updated by the depth-0 arm
        let mut closest_distance = f64::INFINITY;
        let mut color = Color::ZERO;

        for shape in self.scene.shapes() {
            let Some(collision) = shape.intersect(ray, rng) else {
                continue;
            };

            if depth == 0 {
                if collision.distance < closest_distance {
                    closest_distance = collision.distance;
                    color = shape.material().color;
                }
                continue;
            }

            let point = ray.at(collision.distance);
            let direction = reflect(ray.direction, collision.normal, shape.material().roughness, rng);
            let reflected = Ray::new(point, direction);

            color = if self.options.blend {
                let direct = self.trace(ray, 0, rng);
                let reflected_color = self.trace(&reflected, depth - 1, rng);
                let amount = self.options.blend_amount;
                reflected_color * amount + direct * (1.0 - amount)
            } else {
                self.trace(&reflected, depth - 1, rng)
            };
        }

        self.apply_lights(ray, closest_distance, color, rng)
    }

    /// Scale `color` by every light that is visible from the shading point.
    ///
    /// Lights multiply into the color one after another. When no depth-0 hit
    /// was tracked the shading point lies at infinity, where no light can
    /// reach it, so the color is returned unchanged.
    fn apply_lights<R: Rng + ?Sized>(&self, ray: &Ray, distance: f64, mut color: Color, rng: &mut R) -> Color {
        if !distance.is_finite() {
            return color;
        }

        let point = ray.at(distance);

        for light in self.scene.lights() {
            let to_light = light.origin - point;
            let light_distance = to_light.length();
            // A light on the shading point is skipped instead of scaling
            // the color by strength / 0.
            let Some(direction) = try_normalize(to_light) else {
                continue;
            };

            let shadow_ray = Ray::new(point, direction);
            let closest_blocking = self
                .scene
                .shapes()
                .iter()
                .filter_map(|shape| shape.intersect(&shadow_ray, rng))
                .map(|collision| collision.distance)
                .filter(|d| *d > 0.0)
                .fold(f64::INFINITY, f64::min);

            if light_distance < closest_blocking {
                color *= applied_strength(light.strength, light_distance);
            }
        }

        color
    }
}

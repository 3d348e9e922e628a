//! Fixed pinhole camera at the world origin looking down +z.

use lumen_math::{dvec3, normalize, DVec3, Ray};
use serde::{Deserialize, Serialize};

/// Screen extents and focal distance of the pinhole camera.
///
/// The defaults (`1, 1, 1`) give roughly a 53 degree field of view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_width: f64,
    pub fov_height: f64,
    pub focal_distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_width: 1.0,
            fov_height: 1.0,
            focal_distance: 1.0,
        }
    }
}

impl CameraConfig {
    /// True if every extent is positive and finite.
    pub fn is_valid(&self) -> bool {
        [self.fov_width, self.fov_height, self.focal_distance]
            .iter()
            .all(|v| *v > 0.0 && v.is_finite())
    }
}

/// Camera for generating primary rays.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    config: CameraConfig,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    /// World-space position of the eye.
    pub fn origin(&self) -> DVec3 {
        DVec3::ZERO
    }

    /// Generate the ray through pixel `(pixel_x, pixel_y)` of a
    /// `screen_width x screen_height` grid.
    ///
    /// Pixel `(0, 0)` maps to the lower corner of the screen at `-0.5` of
    /// each extent; no half-pixel offset is applied.
    pub fn create_ray(&self, screen_width: u32, screen_height: u32, pixel_x: u32, pixel_y: u32) -> Ray {
        let screen_x = (pixel_x as f64 / screen_width as f64 - 0.5) * self.config.fov_width;
        let screen_y = (pixel_y as f64 / screen_height as f64 - 0.5) * self.config.fov_height;
        let direction = normalize(dvec3(screen_x, screen_y, self.config.focal_distance));
        Ray::new(self.origin(), direction)
    }
}

//! Image assembly.
//!
//! Drives the tracer over every pixel of a (possibly supersampled) grid:
//! - Pixels are independent and evaluated in parallel with rayon
//! - Each pixel owns a random source seeded from the config seed and its
//!   index, so output does not depend on thread scheduling
//! - Supersampled grids are pooled back down to the requested size

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use lumen_core::{Scene, SceneError};
use lumen_math::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::{Camera, CameraConfig};
use crate::grid::{pool, PixelGrid};
use crate::tracer::{TraceOptions, Tracer};

/// Errors that can occur while configuring or assembling a render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("supersample factor must be at least 1")]
    InvalidSupersample,

    #[error("{width}x{height} at supersample {supersample} exceeds the maximum grid size")]
    ImageTooLarge { width: u32, height: u32, supersample: u32 },

    #[error("blend amount {0} is outside [0, 1]")]
    InvalidBlendAmount(f64),

    #[error("camera extents and focal distance must be positive and finite")]
    InvalidCamera,

    #[error("pool step must be at least 1, got {0}")]
    InvalidPoolStep(u32),

    #[error("a 2x2 pool window with step {step} reaches past a {width}x{height} grid")]
    PoolOutOfBounds { width: u32, height: u32, step: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Rays per pixel along each axis; the grid is rendered this many times
    /// larger and pooled back down
    pub supersample: u32,
    /// Maximum reflection depth
    pub max_depth: u32,
    /// Blend reflected color with direct color
    pub blend: bool,
    /// Weight of the reflected color when blending
    pub blend_amount: f64,
    /// Seed for the per-pixel random sources
    pub seed: u64,
    /// Pinhole camera settings
    pub camera: CameraConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 300,
            supersample: 1,
            max_depth: 3,
            blend: true,
            blend_amount: 0.5,
            seed: 0,
            camera: CameraConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Check the configuration before any pixel is traced.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.supersample == 0 {
            return Err(RenderError::InvalidSupersample);
        }
        self.render_size()?;
        if !(0.0..=1.0).contains(&self.blend_amount) {
            return Err(RenderError::InvalidBlendAmount(self.blend_amount));
        }
        if !self.camera.is_valid() {
            return Err(RenderError::InvalidCamera);
        }
        Ok(())
    }

    pub fn trace_options(&self) -> TraceOptions {
        TraceOptions {
            blend: self.blend,
            blend_amount: self.blend_amount,
        }
    }

    /// Dimensions of the grid that is actually traced.
    pub fn render_size(&self) -> RenderResult<(u32, u32)> {
        let too_large = || RenderError::ImageTooLarge {
            width: self.width,
            height: self.height,
            supersample: self.supersample,
        };
        let render_width = self.width.checked_mul(self.supersample).ok_or_else(too_large)?;
        let render_height = self.height.checked_mul(self.supersample).ok_or_else(too_large)?;
        Ok((render_width, render_height))
    }
}

/// Random source for one pixel.
fn pixel_rng(seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(index as u64))
}

/// Trace a single pixel of a `render_width x render_height` grid.
pub fn render_pixel(
    tracer: &Tracer<'_>,
    camera: &Camera,
    render_width: u32,
    render_height: u32,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let index = y as usize * render_width as usize + x as usize;
    let mut rng = pixel_rng(config.seed, index);
    let ray = camera.create_ray(render_width, render_height, x, y);
    tracer.trace(&ray, config.max_depth, &mut rng)
}

/// Render every pixel of a `render_width x render_height` grid.
///
/// Progress is reported through `log::debug!`.
pub fn render(scene: &Scene, render_width: u32, render_height: u32, config: &RenderConfig) -> PixelGrid {
    render_with_progress(scene, render_width, render_height, config, &|percent| {
        log::debug!("Render {percent:.0}% complete");
    })
}

/// Render every pixel, calling `progress` with the percentage complete each
/// time another whole percent of the pixels is finished.
pub fn render_with_progress(
    scene: &Scene,
    render_width: u32,
    render_height: u32,
    config: &RenderConfig,
    progress: &(dyn Fn(f64) + Sync),
) -> PixelGrid {
    let camera = Camera::new(config.camera);
    let tracer = Tracer::new(scene, config.trace_options());

    let total = render_width as usize * render_height as usize;
    let step = (total / 100).max(1);
    let done = AtomicUsize::new(0);

    let pixels: Vec<Color> = (0..total)
        .into_par_iter()
        .map(|index| {
            let x = (index % render_width as usize) as u32;
            let y = (index / render_width as usize) as u32;
            let color = render_pixel(&tracer, &camera, render_width, render_height, x, y, config);

            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            if finished % step == 0 || finished == total {
                progress(finished as f64 * 100.0 / total as f64);
            }
            color
        })
        .collect();

    PixelGrid::from_pixels(render_width, render_height, pixels)
}

/// Render the scene at the configured size.
///
/// The grid is traced at `supersample` times the output size and pooled
/// back down when `supersample > 1`.
pub fn render_image(scene: &Scene, config: &RenderConfig) -> RenderResult<PixelGrid> {
    config.validate()?;

    let (render_width, render_height) = config.render_size()?;
    log::info!(
        "Rendering {}x{} ({}x{} traced) with {} shapes and {} lights, depth {}",
        config.width,
        config.height,
        render_width,
        render_height,
        scene.shape_count(),
        scene.light_count(),
        config.max_depth
    );

    let start = Instant::now();
    let pixels = render(scene, render_width, render_height, config);
    let pixels = if config.supersample > 1 {
        pool(&pixels, config.supersample)?
    } else {
        pixels
    };
    log::info!("Rendered in {:?}", start.elapsed());

    Ok(pixels)
}

//! Pixel grid produced by a render, and box-filter pooling.

use lumen_math::Color;

use crate::renderer::{RenderError, RenderResult};

/// A `width x height` grid of unclamped colors, indexed `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl PixelGrid {
    /// Create a new grid filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Wrap row-major pixels (`y * width + x`).
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Clamp every channel to [0, 255] and convert to RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Clamp a color to the displayable range. NaN channels become 0.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    color.to_array().map(|c| if c.is_nan() { 0 } else { c.clamp(0.0, 255.0) as u8 })
}

/// Downsample by averaging 2x2 blocks, advancing `step` source pixels per
/// output pixel.
///
/// The averaging window stays 2x2 for every `step`, so only `step == 2`
/// gives a true box filter; larger steps skip the rest of each block. A
/// window that would reach past the grid edge is an error.
pub fn pool(pixels: &PixelGrid, step: u32) -> RenderResult<PixelGrid> {
    if step == 0 {
        return Err(RenderError::InvalidPoolStep(step));
    }

    let out_width = pixels.width.div_ceil(step);
    let out_height = pixels.height.div_ceil(step);

    let last_x = (out_width.saturating_sub(1)) * step;
    let last_y = (out_height.saturating_sub(1)) * step;
    if pixels.width > 0 && pixels.height > 0 && (last_x + 1 >= pixels.width || last_y + 1 >= pixels.height) {
        return Err(RenderError::PoolOutOfBounds {
            width: pixels.width,
            height: pixels.height,
            step,
        });
    }

    if step != 2 {
        log::warn!("Pooling with step {step} still averages a 2x2 window per output pixel");
    }

    let mut pooled = PixelGrid::new(out_width, out_height);
    for out_y in 0..out_height {
        for out_x in 0..out_width {
            let x = out_x * step;
            let y = out_y * step;
            let sum = pixels.get(x, y) + pixels.get(x + 1, y) + pixels.get(x, y + 1) + pixels.get(x + 1, y + 1);
            pooled.set(out_x, out_y, sum / 4.0);
        }
    }

    Ok(pooled)
}

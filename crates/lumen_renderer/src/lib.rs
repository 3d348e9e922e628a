//! Lumen Renderer - CPU ray tracing for triangle scenes.
//!
//! A recursive ray tracer with:
//! - Möller-Trumbore triangle intersection behind a stochastic transparency gate
//! - Roughness-blended specular/diffuse reflection up to a fixed depth
//! - Point lights with inverse-square falloff and hard shadows
//! - Parallel per-pixel rendering and 2x2 box-filter pooling for supersampling
//!
//! All randomness comes from an injected `rand::Rng`; renders are seeded
//! through [`RenderConfig::seed`].

mod camera;
mod grid;
mod intersect;
mod reflect;
mod renderer;
mod tracer;

pub use camera::{Camera, CameraConfig};
pub use grid::{color_to_rgb8, pool, PixelGrid};
pub use intersect::{Collision, Intersect, EPSILON};
pub use reflect::{random_in_hemisphere, reflect, reflect_specular};
pub use renderer::{
    render, render_image, render_pixel, render_with_progress, RenderConfig, RenderError, RenderResult,
};
pub use tracer::{applied_strength, TraceOptions, Tracer};

/// Re-export math types from lumen_math
pub use lumen_math::{Color, DVec3, Ray};

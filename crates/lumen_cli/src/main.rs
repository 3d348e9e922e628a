//! Lumen command-line renderer.
//!
//! Renders the built-in demo scene and writes the result to an image file.
//!
//! ```text
//! lumen [config.json] [output.png]
//! ```
//!
//! The optional JSON file overrides any field of `RenderConfig`; missing
//! fields keep their defaults. The output format follows the file extension.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use lumen_core::demo_scene;
use lumen_renderer::{render_image, PixelGrid, RenderConfig};

const DEFAULT_OUTPUT: &str = "render.png";

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}

/// Clamp to the displayable range and write the grid, x across and y down.
fn save_image(grid: &PixelGrid, path: &Path) -> Result<()> {
    let image = image::RgbImage::from_raw(grid.width, grid.height, grid.to_rgb8())
        .context("Pixel buffer does not match image dimensions")?;
    image
        .save(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args_os().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let config = load_config(config_path.as_deref())?;
    let scene = demo_scene()?;

    log::info!("Starting Lumen render");
    log::info!("Dimensions: {}x{}", config.width, config.height);
    log::info!("Objects: {}", scene.shape_count());

    let total_start = Instant::now();
    let grid = render_image(&scene, &config)?;
    let render_time = total_start.elapsed();

    let save_start = Instant::now();
    save_image(&grid, &output_path)?;
    let save_time = save_start.elapsed();

    let total_time = total_start.elapsed();
    log::info!("Saved {}", output_path.display());
    log::info!(
        "Rendering: {:.1}%, saving: {:.1}%, total {:?}",
        100.0 * render_time.as_secs_f64() / total_time.as_secs_f64(),
        100.0 * save_time.as_secs_f64() / total_time.as_secs_f64(),
        total_time
    );

    Ok(())
}

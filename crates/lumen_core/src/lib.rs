//! Lumen Core - scene description for the triangle ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Shape`, `Triangle`, `Sphere`, `Material`, `Light`
//! - **Validation**: malformed scene input is rejected with a `SceneError`
//!   when the scene is built, never inside the tracer
//! - **Winding order**: the clockwise pre-pass applied to every triangle
//!
//! # Example
//!
//! ```
//! use lumen_core::{dvec3, Light, Material, Scene, Shape, Triangle};
//!
//! let red = Material::new(dvec3(255.0, 0.0, 0.0), 0.0, 0.5);
//! let triangle = Triangle::new(
//!     [dvec3(1.0, -1.0, 2.0), dvec3(-1.0, -1.0, 2.0), dvec3(0.0, 1.0, 2.0)],
//!     red,
//! );
//! let scene = Scene::new(
//!     vec![Shape::Triangle(triangle)],
//!     vec![Light::new(dvec3(0.0, 0.0, 0.0), 20.0)],
//! )?;
//! assert_eq!(scene.triangle_count(), 1);
//! # Ok::<(), lumen_core::SceneError>(())
//! ```

pub mod demo;
pub mod scene;
pub mod shape;
pub mod winding;

// Re-export commonly used types
pub use demo::demo_scene;
pub use scene::{Light, Material, Scene, SceneError, SceneResult};
pub use shape::{Shape, Sphere, Triangle};
pub use winding::{correct_winding_order, is_clockwise, is_counter_clockwise};

pub use lumen_math::{dvec3, Color, DVec3};

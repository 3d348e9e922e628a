//! Built-in demo scene.

use lumen_math::dvec3;

use crate::scene::{Light, Material, Scene, SceneResult};
use crate::shape::Triangle;

/// Two overlapping triangles one unit in front of the camera, lit by a
/// single light at the eye.
///
/// The small blue triangle is mirror-smooth and keeps its vertex order; the
/// large red one is fully rough.
pub fn demo_scene() -> SceneResult<Scene> {
    let blue = Triangle::new(
        [dvec3(0.0, 0.5, 1.0), dvec3(-0.5, -0.5, 1.0), dvec3(0.5, -0.5, 1.0)],
        Material::new(dvec3(0.0, 0.0, 255.0), 0.0, 0.0),
    )
    .with_origin(dvec3(0.0, 0.0, 1.0))
    .with_skip_winding_order(true);

    let red = Triangle::new(
        [dvec3(1.0, -1.0, 1.0), dvec3(-1.0, -1.0, 1.0), dvec3(0.0, 1.0, 1.0)],
        Material::new(dvec3(255.0, 0.0, 0.0), 0.0, 1.0),
    )
    .with_origin(dvec3(0.0, 0.0, 1.0));

    Scene::new(
        vec![blue.into(), red.into()],
        vec![Light::new(dvec3(0.0, 0.0, 0.0), 20.0)],
    )
}

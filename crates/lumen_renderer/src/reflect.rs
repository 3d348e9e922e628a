//! Reflection model: a roughness-weighted blend of a mirror direction and a
//! random diffuse direction.

use std::f64::consts::PI;

use lumen_math::{dot, dvec3, normalize, DVec3};
use rand::Rng;

/// Mirror `incident` about `normal` and normalize the result.
#[inline]
pub fn reflect_specular(incident: DVec3, normal: DVec3) -> DVec3 {
    normalize(incident - 2.0 * dot(incident, normal) * normal)
}

/// Uniform random unit direction on the side of the surface `normal` faces.
///
/// A direction is drawn uniformly on the sphere and mirrored through the
/// origin when it points into the surface.
pub fn random_in_hemisphere<R: Rng + ?Sized>(normal: DVec3, rng: &mut R) -> DVec3 {
    let u: f64 = rng.gen();
    let v: f64 = rng.gen();
    let theta = 2.0 * PI * u;
    let phi = (2.0 * v - 1.0).acos();

    let direction = dvec3(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos());
    if dot(direction, normal) < 0.0 {
        -direction
    } else {
        direction
    }
}

/// Blend the specular and diffuse directions as
/// `(1 - roughness) * specular + roughness * diffuse`.
///
/// Both terms are unit length but the blend is not renormalized, so for
/// roughness strictly between 0 and 1 the result can be shorter than one.
/// The diffuse sample is always drawn, even for roughness 0.
pub fn reflect<R: Rng + ?Sized>(incident: DVec3, normal: DVec3, roughness: f64, rng: &mut R) -> DVec3 {
    let specular = reflect_specular(incident, normal);
    let diffuse = random_in_hemisphere(normal, rng);
    (1.0 - roughness) * specular + roughness * diffuse
}

use crate::DVec3;

/// A ray in 3D space with an origin and a direction.
///
/// Camera and shadow rays carry a unit-length direction. Reflected rays from
/// partially rough surfaces blend two unit vectors without renormalizing, so
/// their direction may be slightly shorter than one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

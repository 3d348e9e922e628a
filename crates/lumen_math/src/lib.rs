// Re-export the double precision glam types used throughout Lumen
pub use glam::{dvec3, DVec3};

mod ray;
pub mod vector;

pub use ray::Ray;
pub use vector::{add, cross, dot, magnitude, normalize, subtract, try_normalize};

/// RGB color, one channel per component (x = r, y = g, z = b).
///
/// Material colors live in [0, 255]; lit colors are unclamped.
pub type Color = DVec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dvec3_creation() {
        let v = dvec3(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_color_channels() {
        let c: Color = dvec3(255.0, 128.0, 0.0);
        assert_eq!((c.x, c.y, c.z), (255.0, 128.0, 0.0));
    }
}

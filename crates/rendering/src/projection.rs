//! Geographic to world-space projection.
//!
//! A plain equirectangular mapping: one degree of latitude or
//! longitude is a fixed number of world units, longitude on +X,
//! latitude on +Y. The fleet covers a few degrees at most, so the
//! distortion doesn't matter and f32 world coordinates stay precise.

use bevy::prelude::*;

/// World units per degree of latitude/longitude.
pub const WORLD_UNITS_PER_DEGREE: f64 = 1000.0;

/// Project a lat/lng coordinate onto the 2D map plane.
pub fn geo_to_world(latitude: f64, longitude: f64) -> Vec2 {
    Vec2::new(
        (longitude * WORLD_UNITS_PER_DEGREE) as f32,
        (latitude * WORLD_UNITS_PER_DEGREE) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_orientation() {
        let origin = geo_to_world(0.0, 0.0);
        assert_eq!(origin, Vec2::ZERO);

        // North is +Y, east is +X.
        let north = geo_to_world(1.0, 0.0);
        assert!(north.y > 0.0 && north.x == 0.0);
        let east = geo_to_world(0.0, 1.0);
        assert!(east.x > 0.0 && east.y == 0.0);
    }

    #[test]
    fn test_projection_is_linear() {
        let a = geo_to_world(16.5062, 80.6480);
        let b = geo_to_world(16.5062 + 0.01, 80.6480 + 0.02);
        assert!((b.y - a.y - 10.0).abs() < 1e-2);
        assert!((b.x - a.x - 20.0).abs() < 1e-2);
    }
}

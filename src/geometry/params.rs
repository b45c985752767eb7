use crate::error::{Result, TileError};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// WGS84 equatorial radius used by spherical Web Mercator
pub const EARTH_RADIUS: f64 = 6378137.0;
/// Finest zoom level the pixel grid is expressed in
pub const MAX_LEVEL: u8 = 18;
/// Pixels along one edge of a tile
pub const TILE_PIXELS: u32 = 256;

/// Deepest `max_level` for which level-pixel coordinates still fit an `i64`
/// with room to spare.
pub const MAX_SUPPORTED_LEVEL: u8 = 30;

/// Fixed constants of the tile pyramid and the sphere it is projected onto.
///
/// Passed explicitly into the resolver and projection so tests can swap in
/// a unit sphere or a shallow pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MercatorParams {
    pub earth_radius: f64,
    pub max_level: u8,
    pub tile_pixels: u32,
}

impl Default for MercatorParams {
    fn default() -> Self {
        MercatorParams {
            earth_radius: EARTH_RADIUS,
            max_level: MAX_LEVEL,
            tile_pixels: TILE_PIXELS,
        }
    }
}

impl MercatorParams {
    pub fn validate(&self) -> Result<()> {
        if !self.earth_radius.is_finite() || self.earth_radius <= 0.0 {
            return Err(TileError::InvalidParams(format!(
                "earth radius must be a positive finite number, got {}",
                self.earth_radius
            )));
        }
        if !(1..=MAX_SUPPORTED_LEVEL).contains(&self.max_level) {
            return Err(TileError::InvalidParams(format!(
                "max level must be between 1 and {}, got {}",
                MAX_SUPPORTED_LEVEL, self.max_level
            )));
        }
        if self.tile_pixels == 0 {
            return Err(TileError::InvalidParams(
                "tile size must be at least one pixel".to_string(),
            ));
        }
        Ok(())
    }

    pub fn circumference(&self) -> f64 {
        self.earth_radius * 2.0 * PI
    }

    pub fn half_circumference(&self) -> f64 {
        self.circumference() / 2.0
    }

    /// Edge length of the whole world in `max_level` tile units. Descent
    /// starts from `(0, world_extent())`, the south-west corner of the map.
    pub fn world_extent(&self) -> i64 {
        1i64 << self.max_level
    }

    /// Edge length, in `max_level` tile units, of a tile at `level`.
    ///
    /// Matches `2 << (max_level - level - 1)` wherever that shift is defined
    /// and extends it to `level == max_level` (one unit).
    pub fn tile_size(&self, level: u8) -> i64 {
        debug_assert!(level <= self.max_level);
        1i64 << (self.max_level - level)
    }

    /// Ground meters covered by one pixel at `zoom`.
    pub fn meters_per_pixel(&self, zoom: u8) -> f64 {
        self.circumference() / (2f64.powi(zoom as i32) * self.tile_pixels as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_web_mercator() {
        let params = MercatorParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.world_extent(), 262144);
        assert!((params.half_circumference() - 20037508.342789244).abs() < 1e-6);
    }

    #[test]
    fn test_tile_size_halves_each_level() {
        let params = MercatorParams::default();
        assert_eq!(params.tile_size(1), 131072);
        assert_eq!(params.tile_size(2), 65536);
        assert_eq!(params.tile_size(17), 2);
        assert_eq!(params.tile_size(18), 1);
        for level in 1..=17u8 {
            assert_eq!(
                params.tile_size(level),
                2i64 << (params.max_level - level - 1)
            );
        }
    }

    #[test]
    fn test_meters_per_pixel_at_max_level() {
        let params = MercatorParams::default();
        // ~0.597 m per pixel at zoom 18
        assert!((params.meters_per_pixel(18) - 0.5971642834779395).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_radius = MercatorParams {
            earth_radius: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            bad_radius.validate(),
            Err(TileError::InvalidParams(_))
        ));

        let nan_radius = MercatorParams {
            earth_radius: f64::NAN,
            ..Default::default()
        };
        assert!(nan_radius.validate().is_err());

        let too_deep = MercatorParams {
            max_level: 31,
            ..Default::default()
        };
        assert!(too_deep.validate().is_err());

        let zero_level = MercatorParams {
            max_level: 0,
            ..Default::default()
        };
        assert!(zero_level.validate().is_err());

        let no_pixels = MercatorParams {
            tile_pixels: 0,
            ..Default::default()
        };
        assert!(no_pixels.validate().is_err());
    }
}

use super::quadkey::QuadKey;
use serde::Serialize;
use std::fmt;

/// Square region of the global pixel grid, in `max_level` tile units.
///
/// `(x, y)` is the box's south-west (bottom-left) corner; y grows southward,
/// so the northern edge sits at `y - height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelBox {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        GeoPoint {
            longitude,
            latitude,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} , {}", self.longitude, self.latitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBox {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl GeoBox {
    /// Arithmetic midpoint of the corners (not the Mercator midpoint).
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
        )
    }

    /// Edge-inclusive containment test.
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.south_west.longitude..=self.north_east.longitude).contains(&point.longitude)
            && (self.south_west.latitude..=self.north_east.latitude).contains(&point.latitude)
    }
}

/// Everything the rendering side needs for one tile: the key (as a display
/// label), its pixel box and its corner coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTile {
    pub quadkey: QuadKey,
    pub zoom: u8,
    pub pixel_box: PixelBox,
    pub geo_box: GeoBox,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_box() -> GeoBox {
        GeoBox {
            south_west: GeoPoint::new(-180.0, 0.0),
            north_east: GeoPoint::new(0.0, 85.0),
        }
    }

    #[test]
    fn test_center_and_contains() {
        let geo_box = sample_box();
        let center = geo_box.center();
        assert_eq!(center, GeoPoint::new(-90.0, 42.5));
        assert!(geo_box.contains(center));
        assert!(geo_box.contains(geo_box.south_west));
        assert!(geo_box.contains(geo_box.north_east));
        assert!(!geo_box.contains(GeoPoint::new(10.0, 10.0)));
        assert!(!geo_box.contains(GeoPoint::new(-10.0, -1.0)));
    }

    #[test]
    fn test_point_label() {
        assert_eq!(GeoPoint::new(-180.0, 0.5).to_string(), "-180 , 0.5");
    }
}

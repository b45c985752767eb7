use crate::error::{Result, TileError};
use crate::geometry::MercatorParams;
use crate::geometry::projection::{
    latitude_to_pixel, longitude_to_pixel, pixel_to_latitude, pixel_to_longitude,
};
use crate::models::{GeoBox, GeoPoint, PixelBox, QuadKey, ResolvedTile};

/// Shift applied to the running origin by one quadkey digit, for a tile of
/// `tile_size` units at the digit's level. Pixel y grows southward and the
/// origin tracks the south-west corner, so only the southern half (2, 3)
/// keeps y.
///
/// | digit | dx | dy |
/// |---|---|---|
/// | 0 | 0 | -size |
/// | 1 | +size | -size |
/// | 2 | 0 | 0 |
/// | 3 | +size | 0 |
pub fn quadrant_offset(digit: u8, tile_size: i64) -> Option<(i64, i64)> {
    match digit {
        0 => Some((0, -tile_size)),
        1 => Some((tile_size, -tile_size)),
        2 => Some((0, 0)),
        3 => Some((tile_size, 0)),
        _ => None,
    }
}

/// Descends `key` from `(origin_x, origin_y)`, treating its first digit as
/// `level`, and returns the box of the last tile reached.
pub fn resolve_box(
    key: &QuadKey,
    origin_x: i64,
    origin_y: i64,
    level: u8,
    params: &MercatorParams,
) -> Result<PixelBox> {
    params.validate()?;
    if level == 0 {
        return Err(TileError::invalid_key(
            key.as_str(),
            "descent starts at level 1",
        ));
    }
    let deepest = level as usize + key.as_str().len() - 1;
    if deepest > params.max_level as usize {
        return Err(TileError::invalid_key(
            key.as_str(),
            format!(
                "reaches level {} which is deeper than the max level {}",
                deepest, params.max_level
            ),
        ));
    }

    let (mut x, mut y) = (origin_x, origin_y);
    let mut tile_size = 0;
    for (depth, digit) in key.digits().enumerate() {
        tile_size = params.tile_size(level + depth as u8);
        let (dx, dy) = quadrant_offset(digit, tile_size).ok_or_else(|| {
            TileError::invalid_key(key.as_str(), format!("digit {} is not one of 0-3", digit))
        })?;
        (x, y) = match (x.checked_add(dx), y.checked_add(dy)) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                return Err(TileError::InvalidParams(format!(
                    "origin ({}, {}) overflows while descending {}",
                    origin_x, origin_y, key
                )));
            }
        };
    }

    Ok(PixelBox {
        x,
        y,
        width: tile_size,
        height: tile_size,
    })
}

/// Pixel box of `key` on the whole-world grid.
pub fn resolve_key_box(key: &QuadKey, params: &MercatorParams) -> Result<PixelBox> {
    resolve_box(key, 0, params.world_extent(), 1, params)
}

/// Projects a pixel box's corners. Always evaluated at `max_level`, whatever
/// the key's own zoom, since box units are `max_level` tiles.
pub fn project_box(pixel_box: &PixelBox, params: &MercatorParams) -> GeoBox {
    let zoom = params.max_level;
    let px = params.tile_pixels as i64;

    let south_west = GeoPoint::new(
        pixel_to_longitude(pixel_box.x * px, zoom, params),
        pixel_to_latitude(pixel_box.y * px, zoom, params),
    );
    let north_east = GeoPoint::new(
        pixel_to_longitude((pixel_box.x + pixel_box.width) * px, zoom, params),
        pixel_to_latitude((pixel_box.y - pixel_box.height) * px, zoom, params),
    );

    GeoBox {
        south_west,
        north_east,
    }
}

pub fn resolve_geo_box(key: &QuadKey, params: &MercatorParams) -> Result<GeoBox> {
    let pixel_box = resolve_key_box(key, params)?;
    Ok(project_box(&pixel_box, params))
}

pub fn resolve(key: &QuadKey, params: &MercatorParams) -> Result<ResolvedTile> {
    let pixel_box = resolve_key_box(key, params)?;
    Ok(ResolvedTile {
        quadkey: key.clone(),
        zoom: key.zoom(),
        geo_box: project_box(&pixel_box, params),
        pixel_box,
    })
}

/// The key at `zoom` whose tile contains `(lon, lat)`. Points on the map
/// edge or outside the Mercator band snap to the nearest tile.
pub fn tile_at(lon: f64, lat: f64, zoom: u8, params: &MercatorParams) -> Result<QuadKey> {
    params.validate()?;
    if !lon.is_finite() || !lat.is_finite() {
        return Err(TileError::InvalidParams(format!(
            "coordinates must be finite, got ({}, {})",
            lon, lat
        )));
    }
    if zoom == 0 || zoom > params.max_level {
        return Err(TileError::InvalidParams(format!(
            "zoom must be between 1 and {}, got {}",
            params.max_level, zoom
        )));
    }

    let tiles = 1i64 << zoom;
    let to_tile = |pixel: f64| {
        let t = (pixel / params.tile_pixels as f64).floor() as i64;
        t.clamp(0, tiles - 1)
    };
    let col = to_tile(longitude_to_pixel(lon, zoom, params));
    let row = to_tile(latitude_to_pixel(lat, zoom, params));

    let key: String = (1..=zoom)
        .rev()
        .map(|bit| {
            let mask = 1i64 << (bit - 1);
            let mut digit = b'0';
            if col & mask != 0 {
                digit += 1;
            }
            if row & mask != 0 {
                digit += 2;
            }
            digit as char
        })
        .collect();
    QuadKey::new(&key)
}

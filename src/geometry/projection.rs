use super::params::MercatorParams;
use std::f64::consts::PI;

/// Max bounds for Web Mercator
pub const MAX_LAT: f64 = 85.05112877980659;

/// Pixel column at `zoom` → longitude (degrees)
pub fn pixel_to_longitude(x: i64, zoom: u8, params: &MercatorParams) -> f64 {
    let arc = params.meters_per_pixel(zoom);
    let meters_x = x as f64 * arc - params.half_circumference();
    // πR / R lands a few ulps past π, so the grid edges need pinning
    (meters_x / params.earth_radius)
        .to_degrees()
        .clamp(-180.0, 180.0)
}

/// Pixel row at `zoom` → latitude (degrees). Row 0 is the northern edge.
pub fn pixel_to_latitude(y: i64, zoom: u8, params: &MercatorParams) -> f64 {
    let arc = params.meters_per_pixel(zoom);
    let meters_y = params.half_circumference() - y as f64 * arc;
    // (a - 1) / (a + 1) with a = e^(2m/R) is tanh(m/R); tanh stays finite
    // where the exponential would overflow.
    (meters_y / params.earth_radius).tanh().asin().to_degrees()
}

/// Longitude (degrees) → fractional pixel column at `zoom`
pub fn longitude_to_pixel(lon: f64, zoom: u8, params: &MercatorParams) -> f64 {
    let (meters_x, _) = lon_lat_to_mercator(lon, 0.0, params);
    (meters_x + params.half_circumference()) / params.meters_per_pixel(zoom)
}

/// Latitude (degrees) → fractional pixel row at `zoom`, clamped to the
/// Mercator band
pub fn latitude_to_pixel(lat: f64, zoom: u8, params: &MercatorParams) -> f64 {
    let (_, meters_y) = lon_lat_to_mercator(0.0, lat, params);
    (params.half_circumference() - meters_y) / params.meters_per_pixel(zoom)
}

/// from longitude, latitude (degrees) → Web Mercator (x, y in meters)
pub fn lon_lat_to_mercator(lon: f64, lat: f64, params: &MercatorParams) -> (f64, f64) {
    // clamp latitude into Mercator’s valid range
    let clamped_lat = lat.clamp(-MAX_LAT, MAX_LAT);

    let r = params.earth_radius;
    let x = lon * r * PI / 180.0;
    let lat_rad = clamped_lat * PI / 180.0;
    let y = r * ((PI / 4.0 + lat_rad / 2.0).tan().ln());
    (x, y)
}

/// from Web Mercator (x, y in meters) → longitude, latitude (degrees)
#[cfg(test)]
pub(crate) fn mercator_to_lon_lat(x: f64, y: f64, params: &MercatorParams) -> (f64, f64) {
    let r = params.earth_radius;
    let lon = x / (r * PI / 180.0);
    let lat_rad = 2.0 * ((y / r).exp().atan()) - PI / 2.0;
    let lat = lat_rad * 180.0 / PI;
    (lon, lat)
}

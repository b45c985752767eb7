use crate::error::Result;
use crate::geometry::MercatorParams;
use crate::models::{QuadKey, ResolvedTile};
use crate::tiles::{extract_quadkey, resolve, tile_at};
use log::{debug, warn};

/// Entry point for callers that start from request paths or raw keys.
///
/// Holds only the immutable projection constants, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct TileService {
    params: MercatorParams,
}

impl Default for TileService {
    fn default() -> Self {
        TileService {
            params: MercatorParams::default(),
        }
    }
}

impl TileService {
    pub fn new(params: MercatorParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &MercatorParams {
        &self.params
    }

    /// Request path → tile bounds
    pub fn resolve_path(&self, request_path: &str) -> Result<ResolvedTile> {
        let outcome = extract_quadkey(request_path).and_then(|key| resolve(&key, &self.params));
        self.log_outcome(request_path, &outcome);
        outcome
    }

    pub fn resolve_key(&self, key: &str) -> Result<ResolvedTile> {
        let outcome = QuadKey::new(key).and_then(|key| resolve(&key, &self.params));
        self.log_outcome(key, &outcome);
        outcome
    }

    /// The four tiles under `key`, in digit order.
    pub fn children(&self, key: &str) -> Result<Vec<ResolvedTile>> {
        let key = QuadKey::new(key)?;
        key.children()
            .iter()
            .map(|child| resolve(child, &self.params))
            .collect()
    }

    pub fn locate(&self, lon: f64, lat: f64, zoom: u8) -> Result<ResolvedTile> {
        let key = tile_at(lon, lat, zoom, &self.params)?;
        debug!("({}, {}) at zoom {} falls in tile {}", lon, lat, zoom, key);
        resolve(&key, &self.params)
    }

    fn log_outcome(&self, input: &str, outcome: &Result<ResolvedTile>) {
        match outcome {
            Ok(tile) => debug!(
                "{} -> key {} (zoom {}), sw [{}], ne [{}]",
                input, tile.quadkey, tile.zoom, tile.geo_box.south_west, tile.geo_box.north_east
            ),
            Err(e) => warn!("{}: {}", input, e),
        }
    }
}

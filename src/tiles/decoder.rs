use crate::error::{Result, TileError};
use crate::models::QuadKey;
use once_cell::sync::Lazy;
use regex::Regex;

// Greedy on both sides: the last `tiles/` segment, up to the last `.`.
static TILE_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r".*tiles/(.+)[.].*").expect("tile segment pattern is valid")
});

/// Pulls the quadkey out of a Virtual Earth style tile URL or path, e.g.
/// `http://host/tiles/r0123.png?g=45` → `0123`.
///
/// The first character after `tiles/` is a map-style prefix (`r`, `a`, `h`
/// on Virtual Earth) and is dropped; the rest up to the extension must be a
/// valid quadkey.
pub fn extract_quadkey(request_path: &str) -> Result<QuadKey> {
    let segment = TILE_SEGMENT
        .captures(request_path)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| TileError::MalformedAddress {
            path: request_path.to_string(),
        })?
        .as_str();

    let mut chars = segment.chars();
    chars.next();
    QuadKey::new(chars.as_str())
}

use crate::error::TileError;
use crate::models::ResolvedTile;

/// Consumer of resolved tiles: whatever turns bounds into output (a table,
/// JSON, an image renderer).
pub trait TileSink {
    fn accept(&mut self, input: &str, tile: &ResolvedTile) -> anyhow::Result<()>;
    fn reject(&mut self, input: &str, error: &TileError) -> anyhow::Result<()>;
    /// Flushes anything buffered. Called once after the last tile.
    fn finish(&mut self) -> anyhow::Result<()>;
}

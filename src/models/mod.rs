pub mod geometry;
pub mod quadkey;

pub use geometry::{GeoBox, GeoPoint, PixelBox, ResolvedTile};
pub use quadkey::QuadKey;

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod models;
pub mod service;
pub mod tiles;
pub mod traits;
pub mod utils;

pub use config::{Config, OutputFormat};
pub use error::TileError;
pub use geometry::MercatorParams;
pub use models::{GeoBox, GeoPoint, PixelBox, QuadKey, ResolvedTile};
pub use service::TileService;

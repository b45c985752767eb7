pub mod decoder;
pub mod resolver;

pub use decoder::extract_quadkey;
pub use resolver::{
    project_box, quadrant_offset, resolve, resolve_box, resolve_geo_box, resolve_key_box, tile_at,
};

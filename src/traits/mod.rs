pub mod sink;

pub use sink::TileSink;

pub mod params;
pub mod projection;

pub use params::MercatorParams;

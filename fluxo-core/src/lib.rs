//! aggregation, geocoding and map-layer construction for origin-destination
//! travel survey data.

pub mod aggregate;
pub mod model;
pub mod render;
pub mod resolve;
pub mod util;

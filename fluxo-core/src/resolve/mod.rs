pub mod join_ops;

mod centroid;
mod config;
mod resolver;
mod table;

pub use centroid::CentroidResolver;
pub use config::{CoordinateRow, ResolverConfig};
pub use resolver::CoordinateResolver;
pub use table::TableResolver;

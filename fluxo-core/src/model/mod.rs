pub mod filter;

mod flow;
mod geo_point;
mod grouping;
mod metric;
mod metrics;
mod mode;
mod trip;
mod zone_geometry;
mod zone_id;

pub use flow::OdFlow;
pub use geo_point::GeoPoint;
pub use grouping::FlowGrouping;
pub use metric::Metric;
pub use metrics::ZoneMetrics;
pub use mode::TripMode;
pub use trip::TripRecord;
pub use zone_geometry::ZoneGeometry;
pub use zone_id::ZoneId;

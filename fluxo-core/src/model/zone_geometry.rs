use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ZoneId;

/// zone polygon(s) read from the zone geometry input. the pipeline consumes
/// the geometry (centroids, choropleth shapes) but never the properties,
/// which pass through to the output layers untouched.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ZoneGeometry {
    pub zone: ZoneId,
    pub geometry: geo::MultiPolygon<f64>,
    /// feature properties other than the zone id column, in file order
    pub properties: IndexMap<String, serde_json::Value>,
}

impl ZoneGeometry {
    pub fn new(zone: ZoneId, geometry: geo::MultiPolygon<f64>) -> ZoneGeometry {
        ZoneGeometry {
            zone,
            geometry,
            properties: IndexMap::new(),
        }
    }
}

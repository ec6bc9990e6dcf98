use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::ZoneId;

/// one choropleth polygon: the zone geometry augmented with the computed
/// metrics, the mapped fill color, and the untouched passthrough properties
/// from the zone input file.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RenderPolygon {
    pub zone: ZoneId,
    pub geometry: geo::MultiPolygon<f64>,
    pub generation: Option<f64>,
    pub attraction: Option<f64>,
    pub total: Option<f64>,
    /// normalized value of the selected metric, in [0, 1]
    pub value: f64,
    /// fill color as "#rrggbb"
    pub color: String,
    pub properties: IndexMap<String, serde_json::Value>,
}

use serde::{Deserialize, Serialize};

use crate::model::{GeoPoint, TripMode, ZoneId};

/// one drawable flow line. endpoints are present by construction: the
/// adapter drops unresolved flows before building these.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RenderLine {
    pub origin: ZoneId,
    pub destination: ZoneId,
    pub mode: Option<TripMode>,
    pub volume: f64,
    pub origin_point: GeoPoint,
    pub destination_point: GeoPoint,
    pub width: f64,
    /// hover text, e.g. "São Luís → Raposa: 1.234 viagens"
    pub label: String,
}

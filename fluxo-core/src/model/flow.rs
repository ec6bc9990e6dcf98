use serde::{Deserialize, Serialize};

use super::{GeoPoint, TripMode, ZoneId};

/// an aggregated origin-destination pair. od pairs are directed: (a, b) and
/// (b, a) are distinct flows. derived from trip records and recomputed
/// whenever the record set or the active filters change.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OdFlow {
    pub origin: ZoneId,
    pub destination: ZoneId,
    pub mode: Option<TripMode>,
    /// sum of the volumes of the records grouped into this flow
    pub volume: f64,
    pub origin_point: Option<GeoPoint>,
    pub destination_point: Option<GeoPoint>,
}

impl OdFlow {
    /// a flow starts unresolved; the geocoded join fills in the endpoints.
    pub fn new(
        origin: ZoneId,
        destination: ZoneId,
        mode: Option<TripMode>,
        volume: f64,
    ) -> OdFlow {
        OdFlow {
            origin,
            destination,
            mode,
            volume,
            origin_point: None,
            destination_point: None,
        }
    }

    /// true when both endpoints resolved to coordinates.
    pub fn is_resolved(&self) -> bool {
        self.origin_point.is_some() && self.destination_point.is_some()
    }
}

impl std::fmt::Display for OdFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.origin, self.destination, self.volume)
    }
}

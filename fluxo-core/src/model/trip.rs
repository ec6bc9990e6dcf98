use serde::{Deserialize, Serialize};

use super::{TripMode, ZoneId};

/// one row of the travel survey after ingestion. immutable from here on:
/// every downstream view is recomputed from these records, never the other
/// way around. raw survey rows carry a volume of 1.0; pre-aggregated rows
/// carry the published count.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TripRecord {
    pub origin: ZoneId,
    pub destination: ZoneId,
    pub mode: Option<TripMode>,
    pub volume: f64,
}

impl TripRecord {
    pub fn new(
        origin: ZoneId,
        destination: ZoneId,
        mode: Option<TripMode>,
        volume: f64,
    ) -> TripRecord {
        TripRecord {
            origin,
            destination,
            mode,
            volume,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::{GeoPoint, ZoneId};

/// per-zone trip totals. a trip contributes once to its origin's generation
/// and once to its destination's attraction, independently.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ZoneMetrics {
    pub zone: ZoneId,
    /// volume summed over records where this zone is the origin
    pub generation: f64,
    /// volume summed over records where this zone is the destination
    pub attraction: f64,
    /// resolved zone location, filled by the geocoded join
    pub point: Option<GeoPoint>,
}

impl ZoneMetrics {
    pub fn empty(zone: ZoneId) -> ZoneMetrics {
        ZoneMetrics {
            zone,
            generation: 0.0,
            attraction: 0.0,
            point: None,
        }
    }

    /// combined figure, computed so that generation + attraction == total
    /// holds by construction.
    pub fn total(&self) -> f64 {
        self.generation + self.attraction
    }
}

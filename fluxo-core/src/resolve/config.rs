use serde::{Deserialize, Serialize};

use super::{CentroidResolver, CoordinateResolver, TableResolver};
use crate::model::{GeoPoint, ZoneGeometry, ZoneId};

/// configuration for the coordinate resolver used by the geocoded join.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ResolverConfig {
    /// fixed zone-to-coordinate table
    StaticTable { coordinates: Vec<CoordinateRow> },
    /// area-weighted centroids computed from the zone geometry input
    Centroid,
}

/// one entry of the static coordinate table.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CoordinateRow {
    pub zone: String,
    /// [latitude, longitude]
    pub point: [f64; 2],
}

impl ResolverConfig {
    /// builds the resolver. the centroid variant precomputes from `zones`;
    /// the static table ignores them. construction never fails: zones the
    /// resolver does not know stay unresolved.
    pub fn build(&self, zones: &[ZoneGeometry]) -> Box<dyn CoordinateResolver> {
        match self {
            ResolverConfig::StaticTable { coordinates } => {
                let table = coordinates
                    .iter()
                    .map(|row| {
                        let [lat, lon] = row.point;
                        (ZoneId(row.zone.clone()), GeoPoint::new(lat, lon))
                    })
                    .collect();
                Box::new(TableResolver::new(table))
            }
            ResolverConfig::Centroid => Box::new(CentroidResolver::from_zones(zones)),
        }
    }
}

use std::collections::HashMap;

use geo::Centroid;

use super::CoordinateResolver;
use crate::model::{GeoPoint, ZoneGeometry, ZoneId};

/// resolves zones to the area-weighted centroid of their geometry. a vertex
/// average would be biased for concave shapes and uneven vertex densities,
/// so the geo crate's centroid is used. centroids are precomputed once per
/// dataset load; resolve is a lookup afterwards.
pub struct CentroidResolver {
    centroids: HashMap<ZoneId, GeoPoint>,
}

impl CentroidResolver {
    /// precomputes a centroid per zone. zones whose geometry has no centroid
    /// (empty multipolygons) are skipped with a warning and resolve to None.
    pub fn from_zones(zones: &[ZoneGeometry]) -> CentroidResolver {
        let mut centroids = HashMap::with_capacity(zones.len());
        for zone in zones {
            match zone.geometry.centroid() {
                Some(point) => {
                    centroids.insert(zone.zone.clone(), GeoPoint::from(point));
                }
                None => {
                    log::warn!(
                        "zone '{}' has an empty geometry, no centroid computed",
                        zone.zone
                    );
                }
            }
        }
        CentroidResolver { centroids }
    }
}

impl CoordinateResolver for CentroidResolver {
    fn resolve(&self, zone: &ZoneId) -> Option<GeoPoint> {
        self.centroids.get(zone).copied()
    }
}

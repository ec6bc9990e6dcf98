//! per-zone generation and attraction totals.

use std::collections::{HashMap, HashSet};

use crate::model::{TripRecord, ZoneId, ZoneMetrics};

/// computes generation (volume summed where the zone is the origin) and
/// attraction (volume summed where the zone is the destination) for every
/// zone. zones from `zone_ids` appear even with zero traffic, so their
/// features can still be rendered and "no data" stays distinguishable from
/// "excluded by filter". zones that only appear in records are included
/// too; dropping undrawable entries is the render adapter's job.
pub fn zone_metrics(
    records: &[TripRecord],
    zone_ids: &HashSet<ZoneId>,
) -> HashMap<ZoneId, ZoneMetrics> {
    let mut metrics: HashMap<ZoneId, ZoneMetrics> = zone_ids
        .iter()
        .map(|zone| (zone.clone(), ZoneMetrics::empty(zone.clone())))
        .collect();
    for record in records {
        metrics
            .entry(record.origin.clone())
            .or_insert_with(|| ZoneMetrics::empty(record.origin.clone()))
            .generation += record.volume;
        metrics
            .entry(record.destination.clone())
            .or_insert_with(|| ZoneMetrics::empty(record.destination.clone()))
            .attraction += record.volume;
    }
    metrics
}

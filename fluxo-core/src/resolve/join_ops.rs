//! attaches resolved coordinates to aggregated rows. joining never deletes
//! data: rows that stay unresolved are handed on with absent points, and
//! the render adapter filters them explicitly.

use std::collections::HashMap;

use super::CoordinateResolver;
use crate::model::{OdFlow, ZoneId, ZoneMetrics};

/// resolves both endpoints of each flow independently. flows with unknown
/// endpoints are retained with absent point fields.
pub fn join_flows(flows: Vec<OdFlow>, resolver: &dyn CoordinateResolver) -> Vec<OdFlow> {
    flows
        .into_iter()
        .map(|mut flow| {
            flow.origin_point = resolver.resolve(&flow.origin);
            flow.destination_point = resolver.resolve(&flow.destination);
            flow
        })
        .collect()
}

/// resolves the point for each zone's metrics entry.
pub fn join_metrics(
    metrics: HashMap<ZoneId, ZoneMetrics>,
    resolver: &dyn CoordinateResolver,
) -> HashMap<ZoneId, ZoneMetrics> {
    metrics
        .into_iter()
        .map(|(zone, mut entry)| {
            entry.point = resolver.resolve(&entry.zone);
            (zone, entry)
        })
        .collect()
}

//! translates aggregated, geocoded rows into layer objects for an external
//! map widget. this is the single place where undrawable rows are dropped.

use std::collections::HashMap;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use super::{ColorRamp, RenderLabel, RenderLine, RenderPolygon, WidthPolicy};
use crate::model::{Metric, OdFlow, ZoneGeometry, ZoneId, ZoneMetrics};
use crate::util::format_ops;

/// builds the flow line layer. flows with unresolved endpoints are dropped
/// first; widths then interpolate over the volume range observed in the
/// drawable set, and lines are sorted by ascending volume so the largest
/// flows draw last.
pub fn line_layer(flows: &[OdFlow], policy: &WidthPolicy) -> Vec<RenderLine> {
    let drawable = flows
        .iter()
        .filter_map(|flow| match (flow.origin_point, flow.destination_point) {
            (Some(origin_point), Some(destination_point)) => {
                Some((flow, origin_point, destination_point))
            }
            _ => None,
        })
        .collect_vec();
    let bounds = drawable
        .iter()
        .map(|(flow, _, _)| OrderedFloat(flow.volume))
        .minmax()
        .into_option();
    let (min_vol, max_vol) = match bounds {
        Some((min, max)) => (min.0, max.0),
        None => return vec![],
    };
    drawable
        .into_iter()
        .sorted_by_key(|(flow, _, _)| OrderedFloat(flow.volume))
        .map(|(flow, origin_point, destination_point)| RenderLine {
            origin: flow.origin.clone(),
            destination: flow.destination.clone(),
            mode: flow.mode,
            volume: flow.volume,
            origin_point,
            destination_point,
            width: policy.width_for(flow.volume, min_vol, max_vol),
            label: format!(
                "{} → {}: {} viagens",
                flow.origin,
                flow.destination,
                format_ops::format_volume(flow.volume)
            ),
        })
        .collect_vec()
}

/// builds the choropleth layer for a metric. the color scale is normalized
/// against the maximum over ALL zones in `metrics`, not just those with
/// geometry, so side-by-side views share one scale. polygons keep their
/// passthrough properties and gain the computed metric fields.
pub fn choropleth_layer(
    zones: &[ZoneGeometry],
    metrics: &HashMap<ZoneId, ZoneMetrics>,
    metric: &Metric,
    ramp: &ColorRamp,
) -> Vec<RenderPolygon> {
    let max_value = metrics
        .values()
        .map(|m| OrderedFloat(metric.value_of(m)))
        .max()
        .map(|v| v.0)
        .unwrap_or(0.0);
    zones
        .iter()
        .map(|zone| {
            let entry = metrics.get(&zone.zone);
            let value = entry.map(|m| metric.value_of(m)).unwrap_or(0.0);
            let t = ColorRamp::normalize(value, max_value);
            RenderPolygon {
                zone: zone.zone.clone(),
                geometry: zone.geometry.clone(),
                generation: entry.map(|m| m.generation),
                attraction: entry.map(|m| m.attraction),
                total: entry.map(|m| m.total()),
                value: t,
                color: ramp.eval(t),
                properties: zone.properties.clone(),
            }
        })
        .collect_vec()
}

/// builds text labels at resolved zone points showing the selected metric.
/// entries without a resolved point are dropped here, never upstream.
pub fn label_layer(metrics: &HashMap<ZoneId, ZoneMetrics>, metric: &Metric) -> Vec<RenderLabel> {
    metrics
        .values()
        .filter_map(|entry| {
            entry.point.map(|point| RenderLabel {
                zone: entry.zone.clone(),
                point,
                text: format!(
                    "{}: {}",
                    entry.zone,
                    format_ops::format_volume(metric.value_of(entry))
                ),
            })
        })
        .sorted_by(|a, b| a.zone.0.cmp(&b.zone.0))
        .collect_vec()
}

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::{Duration, Instant};

use fluxo_core::aggregate::{flow_ops, metrics_ops};
use fluxo_core::model::filter::{FlowFilter, ModeSelection};
use fluxo_core::model::{
    FlowGrouping, GeoPoint, OdFlow, TripRecord, ZoneGeometry, ZoneId, ZoneMetrics,
};
use fluxo_core::resolve::{join_ops, CoordinateResolver};

use super::{FlowCache, FlowCacheKey, SourceFingerprint};
use crate::input::{trip_reader, zone_reader, FluxoConfig, InputError, RenderConfig};

/// one loaded dataset and the derived views computed over it. every
/// user-facing operation recomputes from the raw records held here; the
/// flow cache only memoizes the aggregation step.
pub struct Session {
    config: FluxoConfig,
    records: Vec<TripRecord>,
    zones: Vec<ZoneGeometry>,
    resolver: Box<dyn CoordinateResolver>,
    fingerprints: Vec<SourceFingerprint>,
    cache: FlowCache,
}

impl Session {
    /// reads every configured input and prepares the coordinate resolver.
    pub fn open(config: FluxoConfig) -> Result<Session, InputError> {
        let started = Instant::now();
        let mut records = Vec::new();
        let mut fingerprints = Vec::new();
        for dataset in &config.datasets {
            fingerprints.push(SourceFingerprint::of(Path::new(&dataset.file))?);
            records.extend(trip_reader::read_trip_records(dataset)?);
        }
        let zones = match &config.zones {
            Some(zone_config) => {
                fingerprints.push(SourceFingerprint::of(Path::new(&zone_config.file))?);
                zone_reader::read_zone_geometries(zone_config)?
            }
            None => Vec::new(),
        };
        let resolver = config.resolver.build(&zones);
        let elapsed = Duration::from_millis(started.elapsed().as_millis() as u64);
        log::info!(
            "session opened at {}: {} trip records, {} zones, loaded in {}",
            chrono::Utc::now().to_rfc3339(),
            records.len(),
            zones.len(),
            humantime::format_duration(elapsed)
        );
        Ok(Session {
            config,
            records,
            zones,
            resolver,
            fingerprints,
            cache: FlowCache::default(),
        })
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn zones(&self) -> &[ZoneGeometry] {
        &self.zones
    }

    pub fn render(&self) -> &RenderConfig {
        &self.config.render
    }

    pub fn cached_aggregations(&self) -> usize {
        self.cache.len()
    }

    /// drops memoized aggregations, forcing the next view to recompute.
    pub fn invalidate(&mut self) {
        self.cache.invalidate()
    }

    /// aggregated flows for one mode selection, unfiltered and unjoined.
    /// the per-mode views group by (origin, destination, mode); the combined
    /// view re-aggregates its two pre-aggregated mode sets by the shared
    /// (origin, destination) key rather than concatenating them.
    pub fn aggregated_flows(&mut self, mode: ModeSelection) -> Vec<OdFlow> {
        let key = FlowCacheKey {
            sources: self.fingerprints.clone(),
            mode,
        };
        if let Some(flows) = self.cache.get(&key) {
            log::debug!("flow cache hit for mode selection {mode}");
            return flows.clone();
        }
        let flows = match mode {
            ModeSelection::Collective | ModeSelection::Individual => {
                let selected: Vec<TripRecord> = self
                    .records
                    .iter()
                    .filter(|record| mode.selects(record.mode))
                    .cloned()
                    .collect();
                flow_ops::aggregate(&selected, &FlowGrouping::OriginDestinationMode)
            }
            ModeSelection::Combined => {
                let (collective, rest): (Vec<TripRecord>, Vec<TripRecord>) = self
                    .records
                    .iter()
                    .cloned()
                    .partition(|record| ModeSelection::Collective.selects(record.mode));
                flow_ops::combine(
                    &flow_ops::aggregate(&collective, &FlowGrouping::OriginDestinationMode),
                    &flow_ops::aggregate(&rest, &FlowGrouping::OriginDestinationMode),
                    &FlowGrouping::OriginDestination,
                )
            }
        };
        self.cache.insert(key, flows.clone());
        flows
    }

    /// the full flow pipeline: aggregate for the mode, apply the filter,
    /// then join coordinates. unresolved flows stay in the result; the
    /// render adapter drops them.
    pub fn filtered_flows(&mut self, mode: ModeSelection, filter: &FlowFilter) -> Vec<OdFlow> {
        let aggregated = self.aggregated_flows(mode);
        let filtered = filter.apply(&aggregated);
        join_ops::join_flows(filtered, self.resolver.as_ref())
    }

    /// per-zone generation and attraction for one mode selection, with
    /// points joined. every zone with geometry appears even at zero.
    pub fn metrics(&self, mode: ModeSelection) -> HashMap<ZoneId, ZoneMetrics> {
        let zone_ids: HashSet<ZoneId> = self.zones.iter().map(|z| z.zone.clone()).collect();
        let selected: Vec<TripRecord> = self
            .records
            .iter()
            .filter(|record| mode.selects(record.mode))
            .cloned()
            .collect();
        let metrics = metrics_ops::zone_metrics(&selected, &zone_ids);
        join_ops::join_metrics(metrics, self.resolver.as_ref())
    }

    /// mean of the resolved zone points, a framing hint for the external
    /// map widget.
    pub fn suggested_center(&self) -> Option<GeoPoint> {
        let zone_ids: HashSet<ZoneId> = self
            .zones
            .iter()
            .map(|z| z.zone.clone())
            .chain(self.records.iter().flat_map(|record| {
                [record.origin.clone(), record.destination.clone()]
            }))
            .collect();
        let points: Vec<GeoPoint> = zone_ids
            .iter()
            .filter_map(|zone| self.resolver.resolve(zone))
            .collect();
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        Some(GeoPoint::new(
            points.iter().map(|p| p.lat).sum::<f64>() / n,
            points.iter().map(|p| p.lon).sum::<f64>() / n,
        ))
    }
}

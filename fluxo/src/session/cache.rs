use std::collections::HashMap;

use fluxo_core::model::filter::ModeSelection;
use fluxo_core::model::OdFlow;

use super::SourceFingerprint;

/// cache key for one aggregation result: the fingerprints of every input
/// file plus the mode selection the records were filtered by.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlowCacheKey {
    pub sources: Vec<SourceFingerprint>,
    pub mode: ModeSelection,
}

/// memo of aggregated (pre-filter, pre-join) flow sets. an optimization
/// only: recomputation is idempotent, and invalidation is manual.
#[derive(Default)]
pub struct FlowCache {
    entries: HashMap<FlowCacheKey, Vec<OdFlow>>,
}

impl FlowCache {
    pub fn get(&self, key: &FlowCacheKey) -> Option<&Vec<OdFlow>> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: FlowCacheKey, flows: Vec<OdFlow>) {
        self.entries.insert(key, flows);
    }

    /// drops every memoized result. callers decide when inputs changed.
    pub fn invalidate(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        log::debug!("flow cache invalidated, {dropped} entries dropped");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

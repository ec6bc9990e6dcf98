mod cache;
mod fingerprint;
mod model;

pub use cache::{FlowCache, FlowCacheKey};
pub use fingerprint::SourceFingerprint;
pub use model::Session;

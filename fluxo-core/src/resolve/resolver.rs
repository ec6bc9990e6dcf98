use crate::model::{GeoPoint, ZoneId};

/// maps a zone identifier to a geographic point. implementations return
/// None for unknown zones rather than failing; callers must tolerate
/// missing coordinates, which surface as dropped rows at render time.
pub trait CoordinateResolver {
    fn resolve(&self, zone: &ZoneId) -> Option<GeoPoint>;
}

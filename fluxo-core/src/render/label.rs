use serde::{Deserialize, Serialize};

use crate::model::{GeoPoint, ZoneId};

/// text label anchored at a zone's resolved point.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RenderLabel {
    pub zone: ZoneId,
    pub point: GeoPoint,
    pub text: String,
}

mod flow_filter;
mod mode_selection;
mod volume_range;
mod zone_selection;

pub use flow_filter::FlowFilter;
pub use mode_selection::ModeSelection;
pub use volume_range::VolumeRange;
pub use zone_selection::ZoneSelection;

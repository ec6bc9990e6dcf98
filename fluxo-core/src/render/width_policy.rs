use serde::{Deserialize, Serialize};

/// linear mapping from flow volume to a visual line width. widths
/// interpolate between min_width and max_width as volume ranges over the
/// [min_vol, max_vol] observed in the drawable flow set.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct WidthPolicy {
    pub min_width: f64,
    pub max_width: f64,
}

impl WidthPolicy {
    pub fn new(min_width: f64, max_width: f64) -> WidthPolicy {
        WidthPolicy {
            min_width,
            max_width,
        }
    }

    /// width for a volume given the observed volume bounds. a degenerate
    /// range (min_vol == max_vol, from a single flow or all-equal volumes)
    /// maps every flow to min_width, which also guards the division.
    pub fn width_for(&self, volume: f64, min_vol: f64, max_vol: f64) -> f64 {
        if max_vol <= min_vol {
            return self.min_width;
        }
        let t = (volume - min_vol) / (max_vol - min_vol);
        self.min_width + t * (self.max_width - self.min_width)
    }
}

impl Default for WidthPolicy {
    fn default() -> Self {
        WidthPolicy {
            min_width: 1.0,
            max_width: 10.0,
        }
    }
}

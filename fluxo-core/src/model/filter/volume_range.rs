use serde::{Deserialize, Serialize};

/// volume bounds applied to aggregated flows. both bounds inclusive.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct VolumeRange {
    pub min: f64,
    pub max: f64,
}

impl VolumeRange {
    pub fn new(min: f64, max: f64) -> VolumeRange {
        VolumeRange { min, max }
    }

    pub fn contains(&self, volume: f64) -> bool {
        self.min <= volume && volume <= self.max
    }
}

impl Default for VolumeRange {
    fn default() -> Self {
        VolumeRange {
            min: 0.0,
            max: f64::INFINITY,
        }
    }
}

impl std::fmt::Display for VolumeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        let range = VolumeRange::new(5.0, 10.0);
        assert!(range.contains(5.0));
        assert!(range.contains(10.0));
        assert!(range.contains(7.5));
        assert!(!range.contains(4.999));
        assert!(!range.contains(10.001));
    }

    #[test]
    fn test_default_is_unbounded_above() {
        let range = VolumeRange::default();
        assert!(range.contains(0.0));
        assert!(range.contains(1e12));
    }
}

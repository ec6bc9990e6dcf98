use std::str::FromStr;

/// a colorous gradient for choropleth coloring.
#[derive(Clone, Copy)]
pub struct ColorRamp {
    gradient: colorous::Gradient,
}

impl ColorRamp {
    pub fn new(gradient: colorous::Gradient) -> ColorRamp {
        ColorRamp { gradient }
    }

    pub fn viridis() -> ColorRamp {
        ColorRamp::new(colorous::VIRIDIS)
    }

    /// normalized position of a value against the maximum observed across
    /// all zones. a maximum of zero is treated as one, so an all-zero map
    /// renders at the low end of the ramp instead of dividing by zero.
    pub fn normalize(value: f64, max: f64) -> f64 {
        let denominator = if max <= 0.0 { 1.0 } else { max };
        (value / denominator).clamp(0.0, 1.0)
    }

    /// hex color ("#rrggbb") for a normalized position, clamped to [0, 1].
    pub fn eval(&self, t: f64) -> String {
        let color = self.gradient.eval_continuous(t.clamp(0.0, 1.0));
        format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        ColorRamp::viridis()
    }
}

impl FromStr for ColorRamp {
    type Err = String;

    /// named gradients supported in dataset configuration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let gradient = match s.trim().to_lowercase().as_str() {
            "viridis" => colorous::VIRIDIS,
            "plasma" => colorous::PLASMA,
            "inferno" => colorous::INFERNO,
            "magma" => colorous::MAGMA,
            "cool" => colorous::COOL,
            "warm" => colorous::WARM,
            "reds" => colorous::REDS,
            "blues" => colorous::BLUES,
            "greens" => colorous::GREENS,
            "oranges" => colorous::ORANGES,
            other => {
                return Err(format!(
                    "unknown color ramp '{other}', expected one of: viridis, plasma, inferno, magma, cool, warm, reds, blues, greens, oranges"
                ))
            }
        };
        Ok(ColorRamp::new(gradient))
    }
}

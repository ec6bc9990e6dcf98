//! pt-BR numeric formatting for user-facing figures: "." groups thousands,
//! "," marks the decimal.

/// formats a non-negative volume with brazilian separators. whole numbers
/// print without a decimal part; fractional survey weights keep two
/// decimal places.
pub fn format_volume(volume: f64) -> String {
    let rounded = (volume * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let grouped = group_thousands(whole);
    let cents = (rounded.fract() * 100.0).round() as u64;
    if cents == 0 {
        grouped
    } else {
        format!("{grouped},{cents:02}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut groups: Vec<String> = digits
        .as_bytes()
        .rchunks(3)
        .map(|chunk| String::from_utf8_lossy(chunk).to_string())
        .collect();
    groups.reverse();
    groups.join(".")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_whole_volumes_group_thousands_with_dots() {
        assert_eq!(format_volume(0.0), "0");
        assert_eq!(format_volume(999.0), "999");
        assert_eq!(format_volume(1000.0), "1.000");
        assert_eq!(format_volume(1234567.0), "1.234.567");
    }

    #[test]
    fn test_fractional_volumes_use_a_decimal_comma() {
        assert_eq!(format_volume(1234.5), "1.234,50");
        assert_eq!(format_volume(0.05), "0,05");
        assert_eq!(format_volume(2.25), "2,25");
    }

    #[test]
    fn test_near_whole_values_round_cleanly() {
        assert_eq!(format_volume(12.999), "13");
        assert_eq!(format_volume(999.999), "1.000");
    }
}

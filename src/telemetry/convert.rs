//! Value shape conversions shared by the typed accessors
//!
//! All helpers return `None` when the value does not have the expected shape.

/// Parses a decimal value with an optional trailing unit, e.g. `3.2 bar`
pub fn parse_measure(value: &str, unit: &str) -> Option<f64> {
    strip_unit(value, unit)
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Parses an integer value with an optional trailing unit, e.g. `30 s` or `4x`
pub fn parse_whole(value: &str, unit: &str) -> Option<i64> {
    strip_unit(value, unit).parse::<i64>().ok()
}

/// Parses the leading run of digits, e.g. `3` from `3/20`
pub fn parse_leading_count(value: &str) -> Option<u32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Lower-cases free text and joins words with underscores
pub fn slugify(value: &str) -> String {
    value.to_lowercase().replace(' ', "_")
}

/// Removes a trailing unit word, ignoring case and surrounding whitespace
fn strip_unit(value: &str, unit: &str) -> String {
    let value = value.trim().to_lowercase();
    let unit = unit.to_lowercase();
    if !unit.is_empty() {
        if let Some(number) = value.strip_suffix(unit.as_str()) {
            return number.trim().to_string();
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_measure() {
        assert_eq!(parse_measure("3.2 bar", "bar"), Some(3.2));
        assert_eq!(parse_measure("3.2bar", "bar"), Some(3.2));
        assert_eq!(parse_measure(" 120 CM ", "cm"), Some(120.0));
        assert_eq!(parse_measure("1.5", "m"), Some(1.5));
        assert_eq!(parse_measure("-0.4 bar", "bar"), Some(-0.4));
    }

    #[test]
    fn test_parse_measure_rejects_other_shapes() {
        assert_eq!(parse_measure("--- bar", "bar"), None);
        assert_eq!(parse_measure("", "bar"), None);
        assert_eq!(parse_measure("3.2 psi", "bar"), None);
        assert_eq!(parse_measure("inf bar", "bar"), None);
    }

    #[test]
    fn test_parse_whole() {
        assert_eq!(parse_whole("30 s", "s"), Some(30));
        assert_eq!(parse_whole("4x", "x"), Some(4));
        assert_eq!(parse_whole("24 hours", "hours"), Some(24));
        assert_eq!(parse_whole("20/hour", "/hour"), Some(20));
        assert_eq!(parse_whole("7 days", "days"), Some(7));
        assert_eq!(parse_whole("2", ""), Some(2));
        assert_eq!(parse_whole("2.5 s", "s"), None);
    }

    #[test]
    fn test_parse_leading_count() {
        assert_eq!(parse_leading_count("3/20"), Some(3));
        assert_eq!(parse_leading_count(" 12 / 20"), Some(12));
        assert_eq!(parse_leading_count("/20"), None);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Tap water"), "tap_water");
        assert_eq!(slugify("RAIN WATER"), "rain_water");
        assert_eq!(slugify("auto"), "auto");
    }
}

//! Key and value cleanup for text scraped from the status pages
//!
//! The firmware decorates labels with section numbers ("3.2 "), error codes
//! ("E12 ") and trailing colons, and occasionally leaks NUL bytes and `<br>`
//! markup into values. Both cleaners are total: any input yields a string.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)*\s*").expect("valid leading number pattern"));

static ERROR_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^E\d+(?:\.\d+)?\s*").expect("valid error code pattern"));

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break pattern"));

/// Cleans a raw label into a lookup key
///
/// Strips surrounding whitespace, a leading section number such as `3.2 `,
/// a leading error code such as `E12 ` or `E4.1 `, and one trailing colon.
///
/// # Example
///
/// ```
/// use rain3_telemetry::clean_key;
///
/// assert_eq!(clean_key(" 3.2 Pressure: "), "Pressure");
/// assert_eq!(clean_key("E12 Dry running"), "Dry running");
/// ```
pub fn clean_key(raw: &str) -> String {
    let key = raw.trim();
    let key = LEADING_NUMBER.replace(key, "");
    let key = ERROR_CODE.replace(&key, "");
    let key = key.trim_end();
    let key = key.strip_suffix(':').unwrap_or(key);
    key.trim().to_string()
}

/// Cleans a raw value
///
/// Removes NUL characters and `<br>` / `<br/>` markup (any case) and trims
/// surrounding whitespace. `None` and empty input yield an empty string.
pub fn clean_value(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return String::new(),
    };

    let value = raw.replace('\0', "");
    LINE_BREAK.replace_all(value.trim(), "").trim().to_string()
}

/// Trims and collapses internal whitespace runs to single spaces
pub fn normalize_space(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_key_plain() {
        assert_eq!(clean_key("Pressure"), "Pressure");
    }

    #[test]
    fn test_clean_key_strips_section_number() {
        assert_eq!(clean_key("3.2 Pressure"), "Pressure");
        assert_eq!(clean_key("1 Drives"), "Drives");
        assert_eq!(clean_key("2.10.4   Minimum pressure"), "Minimum pressure");
    }

    #[test]
    fn test_clean_key_strips_error_code() {
        assert_eq!(clean_key("E12 Dry running RWM"), "Dry running RWM");
        assert_eq!(clean_key("E4.1 Level sensor fault"), "Level sensor fault");
    }

    #[test]
    fn test_clean_key_strips_single_trailing_colon() {
        assert_eq!(clean_key("Serial number:"), "Serial number");
        assert_eq!(clean_key("Ratio::"), "Ratio:");
        assert_eq!(clean_key("Connected to :  "), "Connected to");
    }

    #[test]
    fn test_clean_key_keeps_inner_numbers() {
        assert_eq!(clean_key("3 Ways-valve"), "Ways-valve");
        assert_eq!(clean_key("Number of CP"), "Number of CP");
    }

    #[test]
    fn test_clean_key_whitespace_only() {
        assert_eq!(clean_key("   "), "");
        assert_eq!(clean_key("4.2 :"), "");
    }

    #[test]
    fn test_clean_value_absent_or_empty() {
        assert_eq!(clean_value(None), "");
        assert_eq!(clean_value(Some("")), "");
    }

    #[test]
    fn test_clean_value_strips_nul_and_breaks() {
        assert_eq!(clean_value(Some(" 3.2 bar\0 ")), "3.2 bar");
        assert_eq!(clean_value(Some("No active alarm<br>")), "No active alarm");
        assert_eq!(clean_value(Some("A<BR/>B<br />")), "AB");
    }

    #[test]
    fn test_normalize_space() {
        assert_eq!(normalize_space("  Alarm \n  history "), "Alarm history");
        assert_eq!(normalize_space("Alarm"), "Alarm");
        assert_eq!(normalize_space(" \t "), "");
    }
}

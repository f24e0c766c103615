//! Composite duration strings such as `2d 3h 5m`
//!
//! The firmware writes timers and runtime meters as any subset of days, hours,
//! minutes and seconds, always in that order.

use once_cell::sync::Lazy;
use regex::Regex;

static DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)
        ^
        (?:(?P<days>\d+)\s*(?:d|days))?
        \s*?
        (?:(?P<hours>\d+)\s*(?:h|hours))?
        \s*?
        (?:(?P<minutes>\d+)\s*(?:m|min|minutes))?
        \s*?
        (?:(?P<seconds>\d+)\s*(?:s|sec|seconds))?
        $
        ",
    )
    .expect("valid duration pattern")
});

/// Target unit of a duration conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Number of seconds in one unit
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 3_600,
            Self::Days => 86_400,
        }
    }
}

/// Parses a composite duration and converts it to whole `unit`s
///
/// The whole trimmed string must match; any leftover token or unknown unit word
/// yields `None`. Matching is case-insensitive and absent components count as
/// zero, so an empty string is a zero duration. The result is floored.
///
/// # Example
///
/// ```
/// use rain3_telemetry::{parse_duration, TimeUnit};
///
/// assert_eq!(parse_duration("2d 3h 5m", TimeUnit::Seconds), Some(183_900));
/// assert_eq!(parse_duration("90s", TimeUnit::Minutes), Some(1));
/// assert_eq!(parse_duration("abc", TimeUnit::Seconds), None);
/// ```
pub fn parse_duration(text: &str, unit: TimeUnit) -> Option<u64> {
    let captures = DURATION.captures(text.trim())?;

    let component = |name: &str, factor: u64| -> Option<u64> {
        match captures.name(name) {
            Some(value) => value.as_str().parse::<u64>().ok()?.checked_mul(factor),
            None => Some(0),
        }
    };

    let total = component("days", TimeUnit::Days.seconds())?
        .checked_add(component("hours", TimeUnit::Hours.seconds())?)?
        .checked_add(component("minutes", TimeUnit::Minutes.seconds())?)?
        .checked_add(component("seconds", TimeUnit::Seconds.seconds())?)?;

    Some(total / unit.seconds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_composite() {
        assert_eq!(parse_duration("2d 3h 5m", TimeUnit::Seconds), Some(183_900));
        assert_eq!(parse_duration("1d 1h 1m 1s", TimeUnit::Seconds), Some(90_061));
    }

    #[test]
    fn test_floor_division_into_target_unit() {
        assert_eq!(parse_duration("90s", TimeUnit::Minutes), Some(1));
        assert_eq!(parse_duration("59m", TimeUnit::Hours), Some(0));
        assert_eq!(parse_duration("2d 23h", TimeUnit::Days), Some(2));
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(parse_duration("", TimeUnit::Seconds), Some(0));
        assert_eq!(parse_duration("   ", TimeUnit::Hours), Some(0));
    }

    #[test]
    fn test_long_unit_words_and_case() {
        assert_eq!(parse_duration("3 Days 4 HOURS", TimeUnit::Hours), Some(76));
        assert_eq!(parse_duration("12 min 30 sec", TimeUnit::Seconds), Some(750));
        assert_eq!(parse_duration("5 minutes", TimeUnit::Seconds), Some(300));
        assert_eq!(parse_duration("45 seconds", TimeUnit::Seconds), Some(45));
    }

    #[test]
    fn test_subset_of_components() {
        assert_eq!(parse_duration("7h", TimeUnit::Minutes), Some(420));
        assert_eq!(parse_duration("1d 30s", TimeUnit::Seconds), Some(86_430));
        assert_eq!(parse_duration("  4h 10m  ", TimeUnit::Minutes), Some(250));
    }

    #[test]
    fn test_rejects_unmatched_input() {
        assert_eq!(parse_duration("abc", TimeUnit::Seconds), None);
        assert_eq!(parse_duration("5", TimeUnit::Seconds), None);
        assert_eq!(parse_duration("5 weeks", TimeUnit::Seconds), None);
        assert_eq!(parse_duration("3h 2d", TimeUnit::Seconds), None);
        assert_eq!(parse_duration("1h 30m extra", TimeUnit::Seconds), None);
    }

    #[test]
    fn test_overflow_is_none() {
        assert_eq!(parse_duration("99999999999999999999d", TimeUnit::Seconds), None);
        assert_eq!(parse_duration("999999999999999999d", TimeUnit::Seconds), None);
    }
}

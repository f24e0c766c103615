use crate::telemetry::{AlarmData, TelemetrySnapshot};
use std::fmt;

/// How a metric is exposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Numeric or text reading
    Sensor,

    /// On/off reading
    BinarySensor,
}

/// Where a metric belongs in a device overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricCategory {
    /// Configuration and bookkeeping values
    Diagnostic,

    /// Primary physical measurements
    Measurement,

    /// Primary values that are not measurements, e.g. running state
    None,
}

/// What a metric measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Duration,
    Pressure,
    Distance,
    Running,
    Problem,
}

/// How successive values of a metric relate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateClass {
    /// Instantaneous value
    Measurement,

    /// Monotonic counter that only resets when the controller is reset
    TotalIncreasing,
}

/// Unit of a metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Bar,
    Centimeters,
    Meters,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Seconds => "s",
            Unit::Minutes => "min",
            Unit::Hours => "h",
            Unit::Days => "d",
            Unit::Bar => "bar",
            Unit::Centimeters => "cm",
            Unit::Meters => "m",
        }
    }

    /// Size of one unit in its dimension's base unit (seconds, bar, centimeters)
    fn factor(&self) -> f64 {
        match self {
            Unit::Seconds => 1.0,
            Unit::Minutes => 60.0,
            Unit::Hours => 3_600.0,
            Unit::Days => 86_400.0,
            Unit::Bar => 1.0,
            Unit::Centimeters => 1.0,
            Unit::Meters => 100.0,
        }
    }

    fn dimension(&self) -> u8 {
        match self {
            Unit::Seconds | Unit::Minutes | Unit::Hours | Unit::Days => 0,
            Unit::Bar => 1,
            Unit::Centimeters | Unit::Meters => 2,
        }
    }

    /// Converts `value` from this unit into `target`
    ///
    /// Returns `None` when the units measure different things.
    ///
    /// # Example
    ///
    /// ```
    /// use rain3_telemetry::metrics::Unit;
    ///
    /// assert_eq!(Unit::Seconds.convert(120.0, Unit::Minutes), Some(2.0));
    /// assert_eq!(Unit::Bar.convert(1.0, Unit::Meters), None);
    /// ```
    pub fn convert(&self, value: f64, target: Unit) -> Option<f64> {
        if self == &target {
            return Some(value);
        }
        if self.dimension() != target.dimension() {
            return None;
        }
        Some(value * self.factor() / target.factor())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A materialized metric value
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Bool(bool),
    Integer(u64),
    Float(f64),
    Text(String),
}

impl MetricValue {
    /// Numeric view of the value, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Integer(value) => Some(*value as f64),
            MetricValue::Float(value) => Some(*value),
            MetricValue::Bool(_) | MetricValue::Text(_) => None,
        }
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        MetricValue::Bool(value)
    }
}

impl From<u32> for MetricValue {
    fn from(value: u32) -> Self {
        MetricValue::Integer(u64::from(value))
    }
}

impl From<u64> for MetricValue {
    fn from(value: u64) -> Self {
        MetricValue::Integer(value)
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Float(value)
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Bool(true) => f.write_str("on"),
            MetricValue::Bool(false) => f.write_str("off"),
            MetricValue::Integer(value) => write!(f, "{}", value),
            MetricValue::Float(value) => write!(f, "{}", (value * 100.0).round() / 100.0),
            MetricValue::Text(value) => f.write_str(value),
        }
    }
}

/// Outcome of extracting one metric from a snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum MetricState {
    /// The field was present and well-formed
    Value(MetricValue),

    /// The firmware does not currently print the field
    Unknown,

    /// The field is missing or malformed; carries the reason
    Unavailable(String),
}

/// Auxiliary data attached to a reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraAttributes {
    Alarm(AlarmData),
}

/// Reads the main value of a metric from a snapshot
pub type Extractor = fn(&TelemetrySnapshot) -> MetricState;

/// Reads the auxiliary data of a metric from a snapshot
pub type ExtraExtractor = fn(&TelemetrySnapshot) -> ExtraAttributes;

/// Static description of one exposed metric
///
/// Descriptors are declared with `const` builders:
///
/// ```
/// use rain3_telemetry::metrics::{extract, DeviceClass, MetricDescriptor, Unit};
///
/// const PRESSURE: MetricDescriptor = MetricDescriptor::sensor("pressure", extract::pressure)
///     .measurement()
///     .device_class(DeviceClass::Pressure)
///     .unit(Unit::Bar, Unit::Bar)
///     .enabled();
///
/// assert!(PRESSURE.enabled_by_default);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MetricDescriptor {
    /// Stable metric id, unique within a catalog
    pub id: &'static str,
    pub kind: MetricKind,

    /// Unit the extractor produces
    pub unit_raw: Option<Unit>,

    /// Unit readings are reported in
    pub unit_display: Option<Unit>,

    pub category: MetricCategory,
    pub device_class: Option<DeviceClass>,
    pub state_class: Option<StateClass>,
    pub enabled_by_default: bool,
    pub extractor: Extractor,
    pub extra_extractor: Option<ExtraExtractor>,
}

impl MetricDescriptor {
    /// Disabled diagnostic sensor without unit
    pub const fn sensor(id: &'static str, extractor: Extractor) -> Self {
        Self {
            id,
            kind: MetricKind::Sensor,
            unit_raw: None,
            unit_display: None,
            category: MetricCategory::Diagnostic,
            device_class: None,
            state_class: None,
            enabled_by_default: false,
            extractor,
            extra_extractor: None,
        }
    }

    /// Disabled diagnostic binary sensor
    pub const fn binary(id: &'static str, extractor: Extractor) -> Self {
        Self {
            kind: MetricKind::BinarySensor,
            ..Self::sensor(id, extractor)
        }
    }

    pub const fn unit(self, raw: Unit, display: Unit) -> Self {
        Self {
            unit_raw: Some(raw),
            unit_display: Some(display),
            ..self
        }
    }

    pub const fn device_class(self, device_class: DeviceClass) -> Self {
        Self {
            device_class: Some(device_class),
            ..self
        }
    }

    pub const fn state_class(self, state_class: StateClass) -> Self {
        Self {
            state_class: Some(state_class),
            ..self
        }
    }

    /// Moves the metric out of the diagnostic category as a measurement
    pub const fn measurement(self) -> Self {
        Self {
            category: MetricCategory::Measurement,
            ..self
        }
    }

    /// Moves the metric out of the diagnostic category
    pub const fn primary(self) -> Self {
        Self {
            category: MetricCategory::None,
            ..self
        }
    }

    pub const fn enabled(self) -> Self {
        Self {
            enabled_by_default: true,
            ..self
        }
    }

    pub const fn extra(self, extra_extractor: ExtraExtractor) -> Self {
        Self {
            extra_extractor: Some(extra_extractor),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nothing(_: &TelemetrySnapshot) -> MetricState {
        MetricState::Unknown
    }

    #[test]
    fn test_builder_defaults() {
        let descriptor = MetricDescriptor::sensor("sample", nothing);
        assert_eq!(descriptor.kind, MetricKind::Sensor);
        assert_eq!(descriptor.category, MetricCategory::Diagnostic);
        assert!(!descriptor.enabled_by_default);
        assert!(descriptor.unit_raw.is_none());
        assert!(descriptor.extra_extractor.is_none());

        let binary = MetricDescriptor::binary("sample", nothing)
            .primary()
            .enabled();
        assert_eq!(binary.kind, MetricKind::BinarySensor);
        assert_eq!(binary.category, MetricCategory::None);
        assert!(binary.enabled_by_default);
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(Unit::Minutes.convert(90.0, Unit::Hours), Some(1.5));
        assert_eq!(Unit::Meters.convert(1.5, Unit::Centimeters), Some(150.0));
        assert_eq!(Unit::Days.convert(1.0, Unit::Seconds), Some(86_400.0));
        assert_eq!(Unit::Bar.convert(2.5, Unit::Bar), Some(2.5));
        assert_eq!(Unit::Seconds.convert(1.0, Unit::Centimeters), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(MetricValue::Bool(true).to_string(), "on");
        assert_eq!(MetricValue::Integer(42).to_string(), "42");
        assert_eq!(MetricValue::Float(2.0833333).to_string(), "2.08");
        assert_eq!(MetricValue::Text("auto".to_string()).to_string(), "auto");
    }
}

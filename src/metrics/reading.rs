//! Materializing descriptors into readings for one snapshot

use crate::metrics::descriptor::{
    ExtraAttributes, MetricDescriptor, MetricKind, MetricState, MetricValue, Unit,
};
use crate::telemetry::TelemetrySnapshot;

/// One materialized metric of one device
#[derive(Debug, Clone, PartialEq)]
pub struct MetricReading {
    /// `<device unique id>_<metric id>`
    pub unique_id: String,
    pub metric_id: &'static str,
    pub kind: MetricKind,

    /// Value in `unit`
    pub state: MetricState,
    pub unit: Option<Unit>,
    pub enabled_by_default: bool,
    pub extra: Option<ExtraAttributes>,
}

impl MetricDescriptor {
    /// Materializes this metric from a snapshot
    ///
    /// Numeric values are converted from the raw unit into the display unit.
    pub fn read(&self, snapshot: &TelemetrySnapshot, device_unique_id: &str) -> MetricReading {
        let state = match (self.extractor)(snapshot) {
            MetricState::Value(value) => MetricState::Value(self.to_display_unit(value)),
            other => other,
        };

        MetricReading {
            unique_id: format!("{}_{}", device_unique_id, self.id),
            metric_id: self.id,
            kind: self.kind,
            state,
            unit: self.unit_display.or(self.unit_raw),
            enabled_by_default: self.enabled_by_default,
            extra: self.extra_extractor.map(|extract| extract(snapshot)),
        }
    }

    fn to_display_unit(&self, value: MetricValue) -> MetricValue {
        let (Some(raw), Some(display)) = (self.unit_raw, self.unit_display) else {
            return value;
        };
        if raw == display {
            return value;
        }

        match value.as_f64().and_then(|number| raw.convert(number, display)) {
            Some(converted) => MetricValue::Float(converted),
            None => value,
        }
    }
}

/// Materializes every metric of `catalog` from one snapshot
///
/// # Arguments
///
/// * `catalog` - Descriptors to read, usually [`crate::CATALOG`]
/// * `snapshot` - Snapshot of one poll cycle
/// * `device_unique_id` - Unique id of the polled device
///
/// # Returns
///
/// One reading per descriptor, in catalog order. Missing or malformed fields
/// only affect their own reading.
pub fn read_metrics(
    catalog: &[MetricDescriptor],
    snapshot: &TelemetrySnapshot,
    device_unique_id: &str,
) -> Vec<MetricReading> {
    catalog
        .iter()
        .map(|descriptor| descriptor.read(snapshot, device_unique_id))
        .collect()
}

use crate::device::DeviceIdentity;
use crate::metrics::{ExtraAttributes, MetricReading, MetricState};
use crate::telemetry::TelemetrySnapshot;

/// Formats the state of a single reading, including its unit
pub fn format_state(reading: &MetricReading) -> String {
    match &reading.state {
        MetricState::Value(value) => match reading.unit {
            Some(unit) => format!("{} {}", value, unit),
            None => value.to_string(),
        },
        MetricState::Unknown => "unknown".to_string(),
        MetricState::Unavailable(reason) => format!("unavailable ({})", reason),
    }
}

/// Renders one poll cycle as a plain-text report
///
/// # Arguments
///
/// * `identity` - Identity of the polled device
/// * `snapshot` - Snapshot the readings were taken from
/// * `readings` - Materialized readings, in catalog order
/// * `all` - Include readings that are disabled by default
pub fn render_report(
    identity: &DeviceIdentity,
    snapshot: &TelemetrySnapshot,
    readings: &[MetricReading],
    all: bool,
) -> String {
    let mut report = String::new();

    report.push_str(&format!(
        "=== {} | {} ===\n",
        identity.name,
        snapshot.captured_at().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    if snapshot.is_degraded() {
        report.push_str("Unavailable pages:\n");
        for (endpoint, failure) in snapshot.failures() {
            report.push_str(&format!("  - {}: {}\n", endpoint, failure));
        }
    }

    let width = readings
        .iter()
        .map(|reading| reading.metric_id.len())
        .max()
        .unwrap_or(0);

    for reading in readings
        .iter()
        .filter(|reading| all || reading.enabled_by_default)
    {
        report.push_str(&format!(
            "  {:width$}  {}\n",
            reading.metric_id,
            format_state(reading),
            width = width
        ));

        if let Some(ExtraAttributes::Alarm(alarm)) = &reading.extra {
            for entry in &alarm.history {
                report.push_str(&format!(
                    "  {:width$}    {}  {}\n",
                    "",
                    entry.timestamp,
                    entry.error,
                    width = width
                ));
            }
        }
    }

    report
}

/// Prints a poll cycle report to stdout
pub fn print_report(
    identity: &DeviceIdentity,
    snapshot: &TelemetrySnapshot,
    readings: &[MetricReading],
    all: bool,
) {
    println!("{}", render_report(identity, snapshot, readings, all));
}

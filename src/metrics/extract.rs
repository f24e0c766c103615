//! Extraction functions, one per metric id
//!
//! Each function reads one typed accessor and folds its failure policy into a
//! [`MetricState`]: field errors become `Unavailable`, absent optional fields
//! become `Unknown`.

use crate::metrics::descriptor::{ExtraAttributes, MetricState, MetricValue};
use crate::telemetry::TelemetrySnapshot;
use crate::FieldResult;

trait IntoState {
    fn into_state(self) -> MetricState;
}

impl<T: Into<MetricValue>> IntoState for FieldResult<T> {
    fn into_state(self) -> MetricState {
        match self {
            Ok(value) => MetricState::Value(value.into()),
            Err(e) => MetricState::Unavailable(e.to_string()),
        }
    }
}

impl<T: Into<MetricValue>> IntoState for Option<T> {
    fn into_state(self) -> MetricState {
        match self {
            Some(value) => MetricState::Value(value.into()),
            None => MetricState::Unknown,
        }
    }
}

impl IntoState for u32 {
    fn into_state(self) -> MetricState {
        MetricState::Value(self.into())
    }
}

macro_rules! extractors {
    ($($id:ident => $accessor:ident;)*) => {
        $(
            pub fn $id(snapshot: &TelemetrySnapshot) -> MetricState {
                snapshot.$accessor().into_state()
            }
        )*
    };
}

extractors! {
    serial_number => serial_number;
    software_version => software_version;
    equipment_number => equipment_number;

    state => is_pump_running;
    running_duration => main_pump_current_runtime;
    pressure => pump_pressure;
    on_pressure_reached => is_switch_on_pressure_reached;
    off_pressure_reached => is_switch_off_pressure_reached;
    mp_stop_in => main_pump_stop_in;
    cistern_level => cistern_level;
    valve_position => valve_position;
    calc_protection_timer => calc_protection_timer;
    flushing_timer => flushing_timer;
    pump_switches_this_hour => pump_switches_this_hour;

    wifi_ssid => connected_wifi_ssid;
    wifi_ip => connected_wifi_ip;

    system_hours => system_total_runtime;
    mp_hours => main_pump_total_runtime;
    cp_hours => cistern_pump_total_runtime;
    system_switches => system_switches_counter;
    mp_switches => main_pump_switches_counter;
    cp_switches => cistern_pump_switches_counter;

    max_pump_cycles_alarms => max_pump_cycles_alarm_count;
    pressure_sensor_fault_alarms => pressure_sensor_fault_alarm_count;
    dry_running_tap_water_alarms => dry_running_tap_water_alarm_count;
    dry_running_rain_water_alarms => dry_running_rain_water_alarm_count;
    max_runtime_alarms => max_pump_runtime_alarm_count;
    break_tank_overflow_alarms => break_tank_overflow_alarm_count;
    cistern_backflow_alarms => cistern_backflow_alarm_count;
    cistern_overflow_alarms => cistern_overflow_alarm_count;
    high_water_alarms => high_water_alarm_count;
    level_sensor_fault_alarms => level_sensor_fault_alarm_count;
    system_over_pressure_alarms => system_over_pressure_alarm_count;

    mp_type => main_pump_type;
    cp_count => cistern_pump_count;
    pressure_range => pressure_range;
    over_pressure_threshold => over_pressure_threshold;
    cistern_sensor_range => cistern_sensor_range;
    cistern_sensor_installed_height => cistern_sensor_installed_height;
    high_water_threshold => high_water_threshold;
    cistern_shape => cistern_shape;
    cistern_height_or_diameter => cistern_height_or_diameter;
    pump_kick => pump_kick_enabled;
    pump_kick_interval => pump_kick_interval;
    pump_kick_duration => pump_kick_duration;
    over_flow_threshold => over_flow_threshold;
    tap_water_threshold => tap_water_threshold;
    rain_water_threshold => rain_water_threshold;
    calcination_protection_interval => calcination_protection_interval;
    flushing_interval => flushing_interval;
    flushing_duration => flushing_duration;
    pump_max_runtime => pump_max_runtime;
    fault_message_behavior => fault_message_behavior;
    minimum_pressure => minimum_pressure;
    dry_run_delay => dry_run_delay;
    dry_run_tap_water => dry_run_tap_water;
    dry_run_rain_water => dry_run_rain_water;
    maximum_pump_cycles_per_hour => max_pump_cycles_per_hour;

    switch_on_pressure => switch_on_pressure;
    switch_off_pressure => switch_off_pressure;
    mp_stop_delay => main_pump_stop_delay;
    cp_start_time => cistern_pump_start_time;
    cp_stop_time => cistern_pump_stop_time;
    pressure_delta_tap_water => pressure_delta_for_tap_water;
    pressure_reduction_interval => interval_for_switch_off_pressure_reduction;
    pressure_reduction_amount => pressure_reduction_amount;
    drives_enabled => is_drive_on;
    mp_mode => main_pump_mode;
    cp_mode => cistern_pump_mode;
    mp_manual_runtime => main_pump_manual_runtime;
    cp_manual_runtime => cistern_pump_manual_runtime;

    alarm_active => is_alarm_active;
}

/// Current alarm and history, attached to `alarm_active`
pub fn alarm_active_extra(snapshot: &TelemetrySnapshot) -> ExtraAttributes {
    ExtraAttributes::Alarm(snapshot.alarm_data())
}

//! The static metric table for the Rain3 controller
//!
//! Metrics are disabled by default unless marked `enabled()`.

use crate::metrics::descriptor::{DeviceClass, MetricDescriptor, StateClass, Unit};
use crate::metrics::extract;

type M = MetricDescriptor;

/// Every metric exposed for a Rain3 controller, in display order
pub static CATALOG: &[MetricDescriptor] = &[
    // identity
    M::sensor("serial_number", extract::serial_number),
    M::sensor("software_version", extract::software_version),
    M::sensor("equipment_number", extract::equipment_number),
    // running state
    M::binary("state", extract::state)
        .primary()
        .device_class(DeviceClass::Running)
        .enabled(),
    M::sensor("running_duration", extract::running_duration)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Seconds, Unit::Minutes)
        .enabled(),
    M::sensor("pressure", extract::pressure)
        .measurement()
        .device_class(DeviceClass::Pressure)
        .unit(Unit::Bar, Unit::Bar)
        .enabled(),
    M::binary("on_pressure_reached", extract::on_pressure_reached),
    M::binary("off_pressure_reached", extract::off_pressure_reached),
    M::sensor("mp_stop_in", extract::mp_stop_in)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Seconds, Unit::Seconds),
    M::sensor("cistern_level", extract::cistern_level)
        .measurement()
        .device_class(DeviceClass::Distance)
        .state_class(StateClass::Measurement)
        .unit(Unit::Centimeters, Unit::Centimeters)
        .enabled(),
    M::sensor("valve_position", extract::valve_position).enabled(),
    M::sensor("calc_protection_timer", extract::calc_protection_timer)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Hours, Unit::Hours),
    M::sensor("flushing_timer", extract::flushing_timer)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Hours, Unit::Hours),
    M::sensor("pump_switches_this_hour", extract::pump_switches_this_hour),
    // network
    M::sensor("wifi_ssid", extract::wifi_ssid),
    M::sensor("wifi_ip", extract::wifi_ip),
    // runtime meters and switch counters
    M::sensor("system_hours", extract::system_hours)
        .device_class(DeviceClass::Duration)
        .state_class(StateClass::TotalIncreasing)
        .unit(Unit::Hours, Unit::Hours),
    M::sensor("mp_hours", extract::mp_hours)
        .device_class(DeviceClass::Duration)
        .state_class(StateClass::TotalIncreasing)
        .unit(Unit::Minutes, Unit::Hours),
    M::sensor("cp_hours", extract::cp_hours)
        .device_class(DeviceClass::Duration)
        .state_class(StateClass::TotalIncreasing)
        .unit(Unit::Minutes, Unit::Hours),
    M::sensor("system_switches", extract::system_switches)
        .state_class(StateClass::TotalIncreasing),
    M::sensor("mp_switches", extract::mp_switches)
        .state_class(StateClass::TotalIncreasing),
    M::sensor("cp_switches", extract::cp_switches)
        .state_class(StateClass::TotalIncreasing),
    // alarm counters
    M::sensor("max_pump_cycles_alarms", extract::max_pump_cycles_alarms)
        .state_class(StateClass::TotalIncreasing),
    M::sensor(
        "pressure_sensor_fault_alarms",
        extract::pressure_sensor_fault_alarms,
    )
    .state_class(StateClass::TotalIncreasing),
    M::sensor(
        "dry_running_tap_water_alarms",
        extract::dry_running_tap_water_alarms,
    )
    .state_class(StateClass::TotalIncreasing),
    M::sensor(
        "dry_running_rain_water_alarms",
        extract::dry_running_rain_water_alarms,
    )
    .state_class(StateClass::TotalIncreasing),
    M::sensor("max_runtime_alarms", extract::max_runtime_alarms)
        .state_class(StateClass::TotalIncreasing),
    M::sensor(
        "break_tank_overflow_alarms",
        extract::break_tank_overflow_alarms,
    )
    .state_class(StateClass::TotalIncreasing),
    M::sensor("cistern_backflow_alarms", extract::cistern_backflow_alarms)
        .state_class(StateClass::TotalIncreasing),
    M::sensor("cistern_overflow_alarms", extract::cistern_overflow_alarms)
        .state_class(StateClass::TotalIncreasing),
    M::sensor("high_water_alarms", extract::high_water_alarms)
        .state_class(StateClass::TotalIncreasing),
    M::sensor(
        "level_sensor_fault_alarms",
        extract::level_sensor_fault_alarms,
    )
    .state_class(StateClass::TotalIncreasing),
    M::sensor(
        "system_over_pressure_alarms",
        extract::system_over_pressure_alarms,
    )
    .state_class(StateClass::TotalIncreasing),
    // installation
    M::sensor("mp_type", extract::mp_type),
    M::sensor("cp_count", extract::cp_count),
    M::sensor("pressure_range", extract::pressure_range)
        .device_class(DeviceClass::Pressure)
        .unit(Unit::Bar, Unit::Bar),
    M::sensor("over_pressure_threshold", extract::over_pressure_threshold)
        .device_class(DeviceClass::Pressure)
        .unit(Unit::Bar, Unit::Bar),
    M::sensor("cistern_sensor_range", extract::cistern_sensor_range)
        .device_class(DeviceClass::Distance)
        .unit(Unit::Meters, Unit::Meters),
    M::sensor(
        "cistern_sensor_installed_height",
        extract::cistern_sensor_installed_height,
    )
    .device_class(DeviceClass::Distance)
    .unit(Unit::Centimeters, Unit::Centimeters),
    M::sensor("high_water_threshold", extract::high_water_threshold)
        .device_class(DeviceClass::Distance)
        .unit(Unit::Centimeters, Unit::Centimeters),
    M::sensor("cistern_shape", extract::cistern_shape),
    M::sensor(
        "cistern_height_or_diameter",
        extract::cistern_height_or_diameter,
    )
    .device_class(DeviceClass::Distance)
    .unit(Unit::Centimeters, Unit::Centimeters),
    M::binary("pump_kick", extract::pump_kick),
    M::sensor("pump_kick_interval", extract::pump_kick_interval)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Hours, Unit::Hours),
    M::sensor("pump_kick_duration", extract::pump_kick_duration)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Seconds, Unit::Seconds),
    M::sensor("over_flow_threshold", extract::over_flow_threshold)
        .device_class(DeviceClass::Distance)
        .unit(Unit::Centimeters, Unit::Centimeters),
    M::sensor("tap_water_threshold", extract::tap_water_threshold)
        .device_class(DeviceClass::Distance)
        .unit(Unit::Centimeters, Unit::Centimeters),
    M::sensor("rain_water_threshold", extract::rain_water_threshold)
        .device_class(DeviceClass::Distance)
        .unit(Unit::Centimeters, Unit::Centimeters),
    M::sensor(
        "calcination_protection_interval",
        extract::calcination_protection_interval,
    )
    .device_class(DeviceClass::Duration)
    .unit(Unit::Days, Unit::Days),
    M::sensor("flushing_interval", extract::flushing_interval)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Days, Unit::Days),
    M::sensor("flushing_duration", extract::flushing_duration)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Minutes, Unit::Minutes),
    M::sensor("pump_max_runtime", extract::pump_max_runtime)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Minutes, Unit::Minutes),
    M::sensor("fault_message_behavior", extract::fault_message_behavior),
    M::sensor("minimum_pressure", extract::minimum_pressure)
        .device_class(DeviceClass::Pressure)
        .unit(Unit::Bar, Unit::Bar),
    M::sensor("dry_run_delay", extract::dry_run_delay)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Seconds, Unit::Seconds),
    M::sensor("dry_run_tap_water", extract::dry_run_tap_water)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Seconds, Unit::Seconds),
    M::sensor("dry_run_rain_water", extract::dry_run_rain_water)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Seconds, Unit::Seconds),
    M::sensor(
        "maximum_pump_cycles_per_hour",
        extract::maximum_pump_cycles_per_hour,
    ),
    // settings
    M::sensor("switch_on_pressure", extract::switch_on_pressure)
        .device_class(DeviceClass::Pressure)
        .unit(Unit::Bar, Unit::Bar),
    M::sensor("switch_off_pressure", extract::switch_off_pressure)
        .device_class(DeviceClass::Pressure)
        .unit(Unit::Bar, Unit::Bar),
    M::sensor("mp_stop_delay", extract::mp_stop_delay)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Seconds, Unit::Seconds),
    M::sensor("cp_start_time", extract::cp_start_time)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Seconds, Unit::Seconds),
    M::sensor("cp_stop_time", extract::cp_stop_time)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Seconds, Unit::Seconds),
    M::sensor(
        "pressure_delta_tap_water",
        extract::pressure_delta_tap_water,
    )
    .device_class(DeviceClass::Pressure)
    .unit(Unit::Bar, Unit::Bar),
    M::sensor(
        "pressure_reduction_interval",
        extract::pressure_reduction_interval,
    )
    .device_class(DeviceClass::Duration)
    .unit(Unit::Seconds, Unit::Seconds),
    M::sensor(
        "pressure_reduction_amount",
        extract::pressure_reduction_amount,
    )
    .device_class(DeviceClass::Pressure)
    .unit(Unit::Bar, Unit::Bar),
    M::binary("drives_enabled", extract::drives_enabled),
    M::sensor("mp_mode", extract::mp_mode),
    M::sensor("cp_mode", extract::cp_mode),
    M::sensor("mp_manual_runtime", extract::mp_manual_runtime)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Seconds, Unit::Seconds),
    M::sensor("cp_manual_runtime", extract::cp_manual_runtime)
        .device_class(DeviceClass::Duration)
        .unit(Unit::Seconds, Unit::Seconds),
    // alarm
    M::binary("alarm_active", extract::alarm_active)
        .primary()
        .device_class(DeviceClass::Problem)
        .extra(extract::alarm_active_extra)
        .enabled(),
];

/// Looks up a descriptor by metric id
pub fn find(id: &str) -> Option<&'static MetricDescriptor> {
    CATALOG.iter().find(|descriptor| descriptor.id == id)
}

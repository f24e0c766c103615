//! Typed accessors over a [`TelemetrySnapshot`]
//!
//! Fields the firmware always prints return [`FieldResult`], naming the page and
//! label on failure. Fields that only some firmware versions print return
//! `Option` instead, and `pump_switches_this_hour` falls back to zero.

use crate::device::Endpoint;
use crate::telemetry::convert::{parse_leading_count, parse_measure, parse_whole, slugify};
use crate::telemetry::keys::{self, derived, sentinel};
use crate::telemetry::{parse_duration, AlarmData, AlarmHistoryEntry, TelemetrySnapshot, TimeUnit};
use crate::{FieldError, FieldResult};

impl TelemetrySnapshot {
    fn raw(&self, endpoint: Endpoint, key: &'static str) -> FieldResult<&str> {
        self.record(endpoint)
            .get(key)
            .ok_or(FieldError::Missing { endpoint, key })
    }

    fn text(&self, endpoint: Endpoint, key: &'static str) -> FieldResult<String> {
        self.raw(endpoint, key).map(str::to_string)
    }

    fn lowercase(&self, endpoint: Endpoint, key: &'static str) -> FieldResult<String> {
        self.raw(endpoint, key).map(str::to_lowercase)
    }

    fn flag(&self, endpoint: Endpoint, key: &'static str, expected: &str) -> FieldResult<bool> {
        self.raw(endpoint, key).map(|value| value == expected)
    }

    fn measure(&self, endpoint: Endpoint, key: &'static str, unit: &str) -> FieldResult<f64> {
        let value = self.raw(endpoint, key)?;
        parse_measure(value, unit).ok_or_else(|| malformed(endpoint, key, value))
    }

    fn whole(&self, endpoint: Endpoint, key: &'static str, unit: &str) -> FieldResult<u64> {
        let value = self.raw(endpoint, key)?;
        parse_whole(value, unit)
            .and_then(|number| u64::try_from(number).ok())
            .ok_or_else(|| malformed(endpoint, key, value))
    }

    fn duration(&self, endpoint: Endpoint, key: &'static str, unit: TimeUnit) -> FieldResult<u64> {
        let value = self.raw(endpoint, key)?;
        parse_duration(value, unit).ok_or_else(|| malformed(endpoint, key, value))
    }

    // identity

    pub fn serial_number(&self) -> FieldResult<String> {
        self.text(Endpoint::Identity, keys::identity::SERIAL_NUMBER)
    }

    pub fn software_version(&self) -> FieldResult<String> {
        self.text(Endpoint::Identity, keys::identity::SOFTWARE_VERSION)
    }

    pub fn equipment_number(&self) -> FieldResult<String> {
        self.text(Endpoint::Identity, keys::identity::EQUIPMENT_NUMBER)
    }

    // errors

    /// Returns true unless the controller reports "No active alarm"
    ///
    /// A missing alarm section is "no data", not "no alarm", so it is reported
    /// as a missing field.
    pub fn is_alarm_active(&self) -> FieldResult<bool> {
        self.active_alarm()
            .map(|alarm| alarm != sentinel::NO_ACTIVE_ALARM)
    }

    /// Current alarm text as printed by the controller
    pub fn active_alarm(&self) -> FieldResult<String> {
        self.raw_active_alarm()
            .map(str::to_string)
            .ok_or(FieldError::Missing {
                endpoint: Endpoint::Errors,
                key: derived::ACTIVE_ALARM,
            })
    }

    /// Alarm history in page order
    pub fn alarm_history(&self) -> FieldResult<&[AlarmHistoryEntry]> {
        self.raw_alarm_history().ok_or(FieldError::Missing {
            endpoint: Endpoint::Errors,
            key: derived::ALARM_HISTORY,
        })
    }

    /// Current alarm and history in one value; absent parts stay empty
    pub fn alarm_data(&self) -> AlarmData {
        AlarmData {
            current: self.raw_active_alarm().map(str::to_string),
            history: self.raw_alarm_history().map(<[_]>::to_vec).unwrap_or_default(),
        }
    }

    // state

    pub fn is_pump_running(&self) -> FieldResult<bool> {
        self.flag(Endpoint::State, keys::state::MAIN_PUMP, sentinel::ON)
    }

    /// Current pressure in bar
    pub fn pump_pressure(&self) -> FieldResult<f64> {
        self.measure(Endpoint::State, keys::state::PRESSURE, "bar")
    }

    /// Cistern fill level in centimeters
    pub fn cistern_level(&self) -> FieldResult<f64> {
        self.measure(Endpoint::State, keys::state::LEVEL, "cm")
    }

    /// Position of the three way valve, e.g. `rain_water`
    pub fn valve_position(&self) -> FieldResult<String> {
        self.raw(Endpoint::State, keys::state::VALVE).map(slugify)
    }

    /// Hours until the next calcination protection cycle
    pub fn calc_protection_timer(&self) -> FieldResult<u64> {
        self.duration(Endpoint::State, keys::state::CALC_PROTECTION_IN, TimeUnit::Hours)
    }

    /// Hours until the next system flushing
    pub fn flushing_timer(&self) -> FieldResult<u64> {
        self.duration(Endpoint::State, keys::state::FLUSHING_IN, TimeUnit::Hours)
    }

    /// Pump switches in the current hour, read from e.g. `3/20`
    ///
    /// Defaults to zero when the field is missing or does not start with digits.
    pub fn pump_switches_this_hour(&self) -> u32 {
        self.record(Endpoint::State)
            .get(keys::state::PUMP_SWITCHES_PER_HOUR)
            .and_then(parse_leading_count)
            .unwrap_or(0)
    }

    /// Seconds the main pump has been running; only printed while it runs
    pub fn main_pump_current_runtime(&self) -> Option<u64> {
        self.record(Endpoint::State)
            .get(keys::state::MAIN_PUMP_RUNNING_FOR)
            .and_then(|value| parse_duration(value, TimeUnit::Seconds))
    }

    /// Seconds until the main pump stops after the switch-off pressure is reached
    pub fn main_pump_stop_in(&self) -> Option<u64> {
        self.record(Endpoint::State)
            .get(keys::state::STOP_MAIN_PUMP_IN)
            .and_then(|value| parse_duration(value, TimeUnit::Seconds))
    }

    pub fn is_switch_on_pressure_reached(&self) -> FieldResult<bool> {
        self.flag(Endpoint::State, keys::state::SWITCH_ON, sentinel::REACHED)
    }

    pub fn is_switch_off_pressure_reached(&self) -> FieldResult<bool> {
        self.flag(Endpoint::State, keys::state::SWITCH_OFF, sentinel::REACHED)
    }

    // download

    pub fn connected_wifi_ssid(&self) -> FieldResult<String> {
        self.text(Endpoint::Download, keys::download::CONNECTED_TO)
    }

    pub fn connected_wifi_ip(&self) -> FieldResult<String> {
        self.text(Endpoint::Download, keys::download::WEBSERVER_IP)
    }

    // settings

    /// Main pump switch-on pressure in bar
    pub fn switch_on_pressure(&self) -> FieldResult<f64> {
        self.measure(Endpoint::Settings, keys::settings::SWITCH_ON_PRESSURE, "bar")
    }

    /// Main pump switch-off pressure in bar
    pub fn switch_off_pressure(&self) -> FieldResult<f64> {
        self.measure(Endpoint::Settings, keys::settings::SWITCH_OFF_PRESSURE, "bar")
    }

    /// Seconds the main pump keeps running once the switch-off pressure is reached
    pub fn main_pump_stop_delay(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Settings, keys::settings::MAIN_PUMP_STOP_DELAY, "s")
    }

    /// Cistern pump start offset in seconds, relative to the main pump start
    pub fn cistern_pump_start_time(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Settings, keys::settings::CISTERN_PUMP_START_TIME, "s")
    }

    /// Cistern pump stop offset in seconds, relative to the main pump stop
    pub fn cistern_pump_stop_time(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Settings, keys::settings::CISTERN_PUMP_STOP_TIME, "s")
    }

    /// Switch-off pressure modifier in tap water mode, in bar
    pub fn pressure_delta_for_tap_water(&self) -> FieldResult<f64> {
        self.measure(Endpoint::Settings, keys::settings::PRESSURE_DELTA_TAP_WATER, "bar")
    }

    /// Seconds between two switch-off pressure reductions
    pub fn interval_for_switch_off_pressure_reduction(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Settings, keys::settings::PRESSURE_COMPARE_INTERVAL, "s")
    }

    /// Amount in bar the switch-off pressure drops per reduction interval
    pub fn pressure_reduction_amount(&self) -> FieldResult<f64> {
        self.measure(Endpoint::Settings, keys::settings::PRESSURE_JUMP, "bar")
    }

    pub fn is_drive_on(&self) -> FieldResult<bool> {
        self.flag(Endpoint::Settings, keys::settings::DRIVES, sentinel::ON)
    }

    pub fn main_pump_mode(&self) -> FieldResult<String> {
        self.lowercase(Endpoint::Settings, keys::settings::MAIN_PUMP_MODE)
    }

    pub fn cistern_pump_mode(&self) -> FieldResult<String> {
        self.lowercase(Endpoint::Settings, keys::settings::CISTERN_PUMP_MODE)
    }

    /// Seconds the main pump runs in manual mode
    pub fn main_pump_manual_runtime(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Settings, keys::settings::MAIN_PUMP_MANUAL_RUNTIME, "s")
    }

    /// Seconds the cistern pump runs in manual mode
    pub fn cistern_pump_manual_runtime(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Settings, keys::settings::CISTERN_PUMP_MANUAL_RUNTIME, "s")
    }

    // setup: meters and counters

    pub fn main_pump_switches_counter(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::MAIN_PUMP_SWITCHES, "")
    }

    /// Total main pump runtime in minutes
    pub fn main_pump_total_runtime(&self) -> FieldResult<u64> {
        self.duration(Endpoint::Setup, keys::setup::MAIN_PUMP_RUNTIME, TimeUnit::Minutes)
    }

    pub fn cistern_pump_switches_counter(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::CISTERN_PUMP_SWITCHES, "")
    }

    /// Total cistern pump runtime in minutes
    pub fn cistern_pump_total_runtime(&self) -> FieldResult<u64> {
        self.duration(Endpoint::Setup, keys::setup::CISTERN_PUMP_RUNTIME, TimeUnit::Minutes)
    }

    /// Total system runtime in hours
    pub fn system_total_runtime(&self) -> FieldResult<u64> {
        self.duration(Endpoint::Setup, keys::setup::SYSTEM_RUNTIME, TimeUnit::Hours)
    }

    /// Number of power cycles
    pub fn system_switches_counter(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::SYSTEM_SWITCHES, "")
    }

    // setup: alarm counters, printed as `<n>x`

    pub fn max_pump_cycles_alarm_count(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::MAX_PUMP_CYCLES_ALARMS, "x")
    }

    pub fn pressure_sensor_fault_alarm_count(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::PRESSURE_SENSOR_FAULT_ALARMS, "x")
    }

    pub fn dry_running_tap_water_alarm_count(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::DRY_RUNNING_TAP_WATER_ALARMS, "x")
    }

    pub fn dry_running_rain_water_alarm_count(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::DRY_RUNNING_RAIN_WATER_ALARMS, "x")
    }

    pub fn max_pump_runtime_alarm_count(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::MAX_RUNTIME_ALARMS, "x")
    }

    pub fn break_tank_overflow_alarm_count(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::BREAK_TANK_OVERFLOW_ALARMS, "x")
    }

    pub fn cistern_backflow_alarm_count(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::CISTERN_BACKFLOW_ALARMS, "x")
    }

    pub fn cistern_overflow_alarm_count(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::CISTERN_OVERFLOW_ALARMS, "x")
    }

    pub fn high_water_alarm_count(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::HIGH_WATER_ALARMS, "x")
    }

    pub fn level_sensor_fault_alarm_count(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::LEVEL_SENSOR_FAULT_ALARMS, "x")
    }

    pub fn system_over_pressure_alarm_count(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Setup, keys::setup::SYSTEM_OVER_PRESSURE_ALARMS, "x")
    }

    // installation

    pub fn main_pump_type(&self) -> FieldResult<String> {
        self.lowercase(Endpoint::Installation, keys::installation::PUMP_TYPE)
    }

    pub fn cistern_pump_count(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::CISTERN_PUMP_COUNT, "")
    }

    /// Upper limit of the pressure sensor in bar
    pub fn pressure_range(&self) -> FieldResult<f64> {
        self.measure(Endpoint::Installation, keys::installation::PRESSURE_SENSOR_RANGE, "bar")
    }

    pub fn over_pressure_threshold(&self) -> FieldResult<f64> {
        self.measure(Endpoint::Installation, keys::installation::OVER_PRESSURE_THRESHOLD, "bar")
    }

    /// Upper limit of the cistern level sensor in meters
    pub fn cistern_sensor_range(&self) -> FieldResult<f64> {
        self.measure(Endpoint::Installation, keys::installation::LEVEL_SENSOR_RANGE, "m")
    }

    pub fn cistern_sensor_installed_height(&self) -> FieldResult<f64> {
        self.measure(Endpoint::Installation, keys::installation::LEVEL_SENSOR_HEIGHT, "cm")
    }

    pub fn high_water_threshold(&self) -> FieldResult<f64> {
        self.measure(Endpoint::Installation, keys::installation::HIGH_WATER_THRESHOLD, "cm")
    }

    /// Cistern shape used for volume calculation
    pub fn cistern_shape(&self) -> FieldResult<String> {
        self.lowercase(Endpoint::Installation, keys::installation::CISTERN_SHAPE)
    }

    pub fn cistern_height_or_diameter(&self) -> FieldResult<f64> {
        self.measure(Endpoint::Installation, keys::installation::CISTERN_HEIGHT_OR_DIAMETER, "cm")
    }

    pub fn pump_kick_enabled(&self) -> FieldResult<bool> {
        self.flag(Endpoint::Installation, keys::installation::PUMP_KICK, sentinel::ON)
    }

    /// Hours between two pump kicks
    pub fn pump_kick_interval(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::PUMP_KICK_INTERVAL, "hours")
    }

    /// Seconds the pump runs during a pump kick
    pub fn pump_kick_duration(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::PUMP_KICK_DURATION, "s")
    }

    pub fn over_flow_threshold(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::OVERFLOW_THRESHOLD, "cm")
    }

    /// Level below which the valve switches to tap water, in centimeters
    pub fn tap_water_threshold(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::TAP_WATER_THRESHOLD, "cm")
    }

    /// Level above which the valve switches back to rain water, in centimeters
    pub fn rain_water_threshold(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::RAIN_WATER_THRESHOLD, "cm")
    }

    /// Days between calcination protection cycles
    pub fn calcination_protection_interval(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::CALCINATION_PROTECTION, "days")
    }

    /// Days between flushing cycles
    pub fn flushing_interval(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::SYSTEM_FLUSHING, "days")
    }

    /// Minutes per flushing cycle
    pub fn flushing_duration(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::FLUSHING_DURATION, "min")
    }

    /// Minutes the pump may run before an alarm is raised
    pub fn pump_max_runtime(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::MAX_PUMP_RUNTIME, "min")
    }

    pub fn fault_message_behavior(&self) -> FieldResult<String> {
        self.lowercase(Endpoint::Installation, keys::installation::FAULT_MESSAGE_BEHAVIOR)
    }

    /// Pressure in bar below which dry running is reported
    pub fn minimum_pressure(&self) -> FieldResult<f64> {
        self.measure(Endpoint::Installation, keys::installation::MINIMUM_PRESSURE, "bar")
    }

    pub fn dry_run_delay(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::DRY_RUN_DELAY, "s")
    }

    pub fn dry_run_tap_water(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::DRY_RUN_TAP_WATER, "s")
    }

    pub fn dry_run_rain_water(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::DRY_RUN_RAIN_WATER, "s")
    }

    /// Pump cycles per hour allowed before an alarm is raised
    pub fn max_pump_cycles_per_hour(&self) -> FieldResult<u64> {
        self.whole(Endpoint::Installation, keys::installation::MAX_PUMP_CYCLES, "/hour")
    }
}

fn malformed(endpoint: Endpoint, key: &'static str, value: &str) -> FieldError {
    FieldError::Malformed {
        endpoint,
        key,
        value: value.to_string(),
    }
}

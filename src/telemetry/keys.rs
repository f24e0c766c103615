//! Firmware labels as they appear after key cleaning, grouped by page

/// `identity` page
pub mod identity {
    pub const SERIAL_NUMBER: &str = "Serial number";
    pub const SOFTWARE_VERSION: &str = "SW Version";
    pub const EQUIPMENT_NUMBER: &str = "Equipment number";
}

/// `state` page
pub mod state {
    pub const MAIN_PUMP: &str = "MP";
    pub const PRESSURE: &str = "Pressure";
    pub const LEVEL: &str = "Level";
    pub const VALVE: &str = "Ways-valve";
    pub const CALC_PROTECTION_IN: &str = "Calc. protection in";
    pub const FLUSHING_IN: &str = "Flushing in";
    pub const PUMP_SWITCHES_PER_HOUR: &str = "Pump switches/hour";
    pub const SWITCH_ON: &str = "Switch on";
    pub const SWITCH_OFF: &str = "Switch off";
    pub const MAIN_PUMP_RUNNING_FOR: &str = "MP running for";
    pub const STOP_MAIN_PUMP_IN: &str = "Stop MP in";
}

/// `download` page
pub mod download {
    pub const CONNECTED_TO: &str = "Connected to";
    pub const WEBSERVER_IP: &str = "Webserver IP";
}

/// `setup` page: runtime meters, switch counters and alarm counters
pub mod setup {
    pub const MAIN_PUMP_SWITCHES: &str = "MP switches";
    pub const MAIN_PUMP_RUNTIME: &str = "MP";
    pub const CISTERN_PUMP_SWITCHES: &str = "CP switches";
    pub const CISTERN_PUMP_RUNTIME: &str = "CP";
    pub const SYSTEM_RUNTIME: &str = "System";
    pub const SYSTEM_SWITCHES: &str = "System switches";

    pub const MAX_PUMP_CYCLES_ALARMS: &str = "Max. pump cycles/hour";
    pub const PRESSURE_SENSOR_FAULT_ALARMS: &str = "Pressure sensor fault";
    pub const DRY_RUNNING_TAP_WATER_ALARMS: &str = "Dry running TWM";
    pub const DRY_RUNNING_RAIN_WATER_ALARMS: &str = "Dry running RWM";
    pub const MAX_RUNTIME_ALARMS: &str = "Max. runtime pump";
    pub const BREAK_TANK_OVERFLOW_ALARMS: &str = "Break tank overflow";
    pub const CISTERN_BACKFLOW_ALARMS: &str = "Cistern backflow";
    pub const CISTERN_OVERFLOW_ALARMS: &str = "Cistern overflow";
    pub const HIGH_WATER_ALARMS: &str = "High water alarm";
    pub const LEVEL_SENSOR_FAULT_ALARMS: &str = "Level sensor fault";
    pub const SYSTEM_OVER_PRESSURE_ALARMS: &str = "System over pressure";
}

/// `installation` page
pub mod installation {
    pub const PUMP_TYPE: &str = "Pump type";
    pub const CISTERN_PUMP_COUNT: &str = "Number of CP";
    pub const PRESSURE_SENSOR_RANGE: &str = "Sensor range pressure";
    pub const OVER_PRESSURE_THRESHOLD: &str = "Threshold over pressure";
    pub const LEVEL_SENSOR_RANGE: &str = "Sensor range level cistern";
    pub const LEVEL_SENSOR_HEIGHT: &str = "Level sensor inst. height";
    pub const HIGH_WATER_THRESHOLD: &str = "High water on threshold";
    pub const CISTERN_SHAPE: &str = "Cistern shape";
    pub const CISTERN_HEIGHT_OR_DIAMETER: &str = "Cistern high/diameter";
    pub const PUMP_KICK: &str = "Pump kick";
    pub const PUMP_KICK_INTERVAL: &str = "Pump kick interval";
    pub const PUMP_KICK_DURATION: &str = "Pump kick duration";
    pub const OVERFLOW_THRESHOLD: &str = "Over flow on threshold";
    pub const TAP_WATER_THRESHOLD: &str = "Tap water on threshold";
    pub const RAIN_WATER_THRESHOLD: &str = "Rain water on threshold";
    pub const CALCINATION_PROTECTION: &str = "Calcination protection";
    pub const SYSTEM_FLUSHING: &str = "System flushing";
    pub const FLUSHING_DURATION: &str = "Flushing duration";
    pub const MAX_PUMP_RUNTIME: &str = "Max. running time pump";
    pub const FAULT_MESSAGE_BEHAVIOR: &str = "Fault message behavior";
    pub const MINIMUM_PRESSURE: &str = "Minimum pressure";
    pub const DRY_RUN_DELAY: &str = "Delay dry run protection";
    pub const DRY_RUN_TAP_WATER: &str = "Dry run tap water mode";
    pub const DRY_RUN_RAIN_WATER: &str = "Dry run rain water mode";
    pub const MAX_PUMP_CYCLES: &str = "Max. pump cycles per hour";
}

/// `settings` page
pub mod settings {
    pub const SWITCH_ON_PRESSURE: &str = "MP switch-on pressure";
    pub const SWITCH_OFF_PRESSURE: &str = "MP switch-off pressure";
    pub const MAIN_PUMP_STOP_DELAY: &str = "Stop MP in";
    pub const CISTERN_PUMP_START_TIME: &str = "CP start time";
    pub const CISTERN_PUMP_STOP_TIME: &str = "CP stop time";
    pub const PRESSURE_DELTA_TAP_WATER: &str = "Pressure delta TWM";
    pub const PRESSURE_COMPARE_INTERVAL: &str = "Time pressure compare";
    pub const PRESSURE_JUMP: &str = "Pressure jump in RWM";
    pub const DRIVES: &str = "Drives";
    pub const MAIN_PUMP_MODE: &str = "Main pump mode";
    pub const CISTERN_PUMP_MODE: &str = "Cistern pump mode";
    pub const MAIN_PUMP_MANUAL_RUNTIME: &str = "Running time MP manual";
    pub const CISTERN_PUMP_MANUAL_RUNTIME: &str = "Running time CP manual";
}

/// Sentinel values compared against boolean fields
pub mod sentinel {
    pub const ON: &str = "ON";
    pub const REACHED: &str = "reached!";
    pub const NO_ACTIVE_ALARM: &str = "No active alarm";
}

/// Pseudo keys used in field errors for values outside the label/value pairs
pub mod derived {
    pub const ACTIVE_ALARM: &str = "Alarm";
    pub const ALARM_HISTORY: &str = "Alarm history";
}

use crate::config::types::{Config, DeviceConfig, HttpConfig, PollingConfig};
use crate::device::device_base_url;
use crate::{ConfigError, ConfigResult};

const MIN_INTERVAL: u64 = 5;
const MAX_INTERVAL: u64 = 3_600;
const MIN_TIMEOUT: u64 = 1;
const MAX_TIMEOUT: u64 = 120;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_device_config(&config.device)?;
    validate_polling_config(&config.polling)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates the device section
fn validate_device_config(config: &DeviceConfig) -> ConfigResult<()> {
    device_base_url(&config.address).map_err(ConfigError::InvalidAddress)?;
    Ok(())
}

/// Validates poll timing
fn validate_polling_config(config: &PollingConfig) -> ConfigResult<()> {
    if !(MIN_INTERVAL..=MAX_INTERVAL).contains(&config.interval) {
        return Err(ConfigError::Validation(format!(
            "interval must be between {} and {} seconds, got {}",
            MIN_INTERVAL, MAX_INTERVAL, config.interval
        )));
    }

    if !(MIN_TIMEOUT..=MAX_TIMEOUT).contains(&config.timeout) {
        return Err(ConfigError::Validation(format!(
            "timeout must be between {} and {} seconds, got {}",
            MIN_TIMEOUT, MAX_TIMEOUT, config.timeout
        )));
    }

    // A poll cycle has to finish before the next one is due
    if config.timeout >= config.interval {
        return Err(ConfigError::Validation(format!(
            "timeout ({}s) must be shorter than interval ({}s)",
            config.timeout, config.interval
        )));
    }

    Ok(())
}

/// Validates HTTP client settings
fn validate_http_config(config: &HttpConfig) -> ConfigResult<()> {
    if let Some(user_agent) = &config.user_agent {
        if user_agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user-agent cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

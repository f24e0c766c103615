use crate::device::{DeviceModel, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use serde::Deserialize;

/// Main configuration structure for Rain3 Telemetry
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub device: DeviceConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// The polled device
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    /// Host or `host:port`, optionally prefixed with `http://`
    pub address: String,

    /// Controller model
    #[serde(default)]
    pub model: DeviceModel,

    /// Instance id; `0` keeps the bare model key as unique id
    #[serde(rename = "device-id", default)]
    pub device_id: u32,
}

/// Poll timing
#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    /// Seconds between two poll cycles
    #[serde(default = "default_interval")]
    pub interval: u64,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            timeout: default_timeout(),
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfig {
    /// Overrides the default user agent
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,
}

impl HttpConfig {
    /// Effective user agent
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

fn default_interval() -> u64 {
    30
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

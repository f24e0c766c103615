//! Rain3 Telemetry: typed telemetry for Wilo Rain3 pump controllers
//!
//! The controller's embedded web server only exposes its state as a handful of
//! HTML status pages. This crate fetches those pages, parses the two page
//! layouts the firmware produces, normalizes keys, values and durations, and
//! exposes the result as a typed, unit-aware snapshot plus a catalog of metric
//! descriptors that downstream consumers can iterate.

pub mod config;
pub mod device;
pub mod metrics;
pub mod output;
pub mod parser;
pub mod telemetry;

use thiserror::Error;

/// Main error type for Rain3 Telemetry operations
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid device address: {0}")]
    InvalidAddress(String),

    #[error("Device setup failed at endpoint '{endpoint}': {reason}")]
    Setup {
        endpoint: device::Endpoint,
        reason: String,
    },

    #[error("Device identity is missing field: {field}")]
    MissingIdentity { field: &'static str },

    #[error("Provider used before a successful initialization")]
    NotInitialized,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid device address in config: {0}")]
    InvalidAddress(String),
}

/// Field-scoped accessor errors
///
/// A field error only ever makes a single reading unavailable; it never aborts
/// the rest of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Field '{key}' is missing from the {endpoint} page")]
    Missing {
        endpoint: device::Endpoint,
        key: &'static str,
    },

    #[error("Field '{key}' on the {endpoint} page has unexpected value '{value}'")]
    Malformed {
        endpoint: device::Endpoint,
        key: &'static str,
        value: String,
    },
}

/// Result type alias for Rain3 Telemetry operations
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for typed snapshot accessors
pub type FieldResult<T> = std::result::Result<T, FieldError>;

// Re-export commonly used types
pub use config::Config;
pub use device::{DeviceIdentity, Endpoint, FetchFailure, Fetcher, HttpFetcher, Provider};
pub use metrics::{read_metrics, MetricDescriptor, MetricReading, CATALOG};
pub use parser::{clean_key, clean_value, parse_error_page, parse_page};
pub use telemetry::{parse_duration, CategoryRecord, TelemetrySnapshot, TimeUnit};

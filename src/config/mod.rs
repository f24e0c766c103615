//! Configuration module for Rain3 Telemetry
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use rain3_telemetry::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("rain3.toml")).unwrap();
//! println!("Request timeout: {}s", config.polling.timeout);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, DeviceConfig, HttpConfig, PollingConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};

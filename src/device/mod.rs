//! Device access: endpoints, page fetching and poll orchestration
//!
//! # Example
//!
//! ```no_run
//! use rain3_telemetry::config::load_config;
//! use rain3_telemetry::Provider;
//! use std::path::Path;
//!
//! # async fn run() -> rain3_telemetry::Result<()> {
//! let config = load_config(Path::new("rain3.toml"))?;
//! let mut provider = Provider::from_config(&config)?;
//! provider.initialize().await?;
//! let snapshot = provider.poll().await?;
//! println!("Pump running: {:?}", snapshot.is_pump_running());
//! # Ok(())
//! # }
//! ```

mod endpoint;
mod fetcher;
mod model;
mod provider;

pub use endpoint::Endpoint;
pub use fetcher::{
    build_http_client, device_base_url, FetchFailure, Fetcher, HttpFetcher, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
pub use model::{DeviceIdentity, DeviceModel, MANUFACTURER};
pub use provider::{Provider, ProviderState};

//! Poll orchestration for one device
//!
//! A provider owns the fetcher of a single device. Each poll cycle requests
//! every page concurrently, waits for all of them, and parses each page with
//! the parser matching its layout. A page that cannot be fetched only empties
//! its own record.

use crate::config::Config;
use crate::device::model::MANUFACTURER;
use crate::device::{DeviceIdentity, DeviceModel, Endpoint, FetchFailure, Fetcher, HttpFetcher};
use crate::parser::{parse_error_page, parse_page};
use crate::telemetry::keys;
use crate::telemetry::TelemetrySnapshot;
use crate::{Result, TelemetryError};
use chrono::Utc;
use futures_util::future::join_all;
use std::time::Duration;

type FetchResult = std::result::Result<String, FetchFailure>;

/// Lifecycle state of a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderState {
    /// `initialize` has not succeeded yet
    Uninitialized,

    /// The last poll fetched every page
    Ready,

    /// The last poll lost at least one page
    Degraded,
}

/// Fetches, parses and assembles telemetry for one device
pub struct Provider<F: Fetcher> {
    fetcher: F,
    address: String,
    model: DeviceModel,
    device_id: u32,
    state: ProviderState,
    identity: Option<DeviceIdentity>,
}

impl Provider<HttpFetcher> {
    /// Creates an HTTP provider from a loaded configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Provider)` - Uninitialized provider for the configured device
    /// * `Err(TelemetryError)` - Invalid address or HTTP client failure
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(
            &config.device.address,
            Duration::from_secs(config.polling.timeout),
            config.http.user_agent(),
        )?;

        Ok(Self::new(
            fetcher,
            &config.device.address,
            config.device.model,
            config.device.device_id,
        ))
    }
}

impl<F: Fetcher> Provider<F> {
    /// Creates an uninitialized provider
    ///
    /// `address` is only used for display metadata; an `http://` prefix and a
    /// trailing slash are dropped.
    pub fn new(fetcher: F, address: &str, model: DeviceModel, device_id: u32) -> Self {
        let address = address.trim();
        let address = address.strip_prefix("http://").unwrap_or(address);

        Self {
            fetcher,
            address: address.trim_end_matches('/').to_string(),
            model,
            device_id,
            state: ProviderState::Uninitialized,
            identity: None,
        }
    }

    /// Unique id of the device, e.g. `rain3` or `rain3_1`
    pub fn unique_id(&self) -> String {
        self.model.unique_id(self.device_id)
    }

    pub fn model(&self) -> DeviceModel {
        self.model
    }

    pub fn state(&self) -> ProviderState {
        self.state
    }

    /// Identity read during initialization
    pub fn identity(&self) -> Option<&DeviceIdentity> {
        self.identity.as_ref()
    }

    /// Runs a first poll and reads the device identity from it
    ///
    /// Only the identity page matters here: it must be fetched and must carry
    /// the serial number and software version. Other failing pages leave the
    /// provider degraded but initialized.
    ///
    /// # Returns
    ///
    /// * `Ok(TelemetrySnapshot)` - The snapshot of the first poll
    /// * `Err(TelemetryError::Setup)` - The identity page could not be fetched
    /// * `Err(TelemetryError::MissingIdentity)` - A required identity field is absent
    pub async fn initialize(&mut self) -> Result<TelemetrySnapshot> {
        tracing::info!("Initializing {} at {}", self.unique_id(), self.address);

        let snapshot = self.collect().await;

        if let Some(failure) = snapshot.failures().get(&Endpoint::Identity) {
            tracing::error!(
                "Identity page of {} unavailable: {}",
                self.unique_id(),
                failure
            );
            return Err(TelemetryError::Setup {
                endpoint: Endpoint::Identity,
                reason: failure.to_string(),
            });
        }

        let serial_number = snapshot
            .serial_number()
            .map_err(|_| TelemetryError::MissingIdentity {
                field: keys::identity::SERIAL_NUMBER,
            })?;
        let software_version = snapshot
            .software_version()
            .map_err(|_| TelemetryError::MissingIdentity {
                field: keys::identity::SOFTWARE_VERSION,
            })?;

        let identity = DeviceIdentity {
            unique_id: self.unique_id(),
            name: format!(
                "{} {} ({})",
                MANUFACTURER,
                self.model.display_name(),
                self.address
            ),
            manufacturer: MANUFACTURER.to_string(),
            model: self.model.display_name().to_string(),
            serial_number,
            software_version,
            equipment_number: snapshot.equipment_number().ok(),
            configuration_url: format!("http://{}", self.address),
        };

        tracing::info!(
            "Device {} initialized (serial: {}, software: {})",
            identity.unique_id,
            identity.serial_number,
            identity.software_version
        );

        self.identity = Some(identity);
        self.update_state(&snapshot);
        Ok(snapshot)
    }

    /// Runs one poll cycle
    ///
    /// Never fails because of individual pages; unreachable pages are logged
    /// and contribute empty records. Dropping the returned future abandons all
    /// in-flight requests.
    ///
    /// # Returns
    ///
    /// * `Ok(TelemetrySnapshot)` - The assembled snapshot
    /// * `Err(TelemetryError::NotInitialized)` - `initialize` has not succeeded
    pub async fn poll(&mut self) -> Result<TelemetrySnapshot> {
        if self.state == ProviderState::Uninitialized {
            return Err(TelemetryError::NotInitialized);
        }

        let snapshot = self.collect().await;
        self.update_state(&snapshot);
        Ok(snapshot)
    }

    /// Fetches every page concurrently and assembles the snapshot once all
    /// requests have completed or failed
    async fn collect(&self) -> TelemetrySnapshot {
        let requests = self.model.endpoints().iter().map(|&e| self.fetch_page(e));
        let pages = join_all(requests).await;

        let mut builder = TelemetrySnapshot::builder();
        for (endpoint, page) in pages {
            builder = match page {
                Ok(html) if endpoint.is_alarm_page() => {
                    let page = parse_error_page(&html);
                    tracing::debug!(
                        "Parsed {} pairs from {} (alarm: {}, history entries: {})",
                        page.record.len(),
                        endpoint,
                        page.active_alarm.is_some(),
                        page.alarm_history.as_ref().map_or(0, Vec::len)
                    );
                    builder.alarm_page(page)
                }
                Ok(html) => {
                    let record = parse_page(&html);
                    tracing::debug!("Parsed {} pairs from {}", record.len(), endpoint);
                    builder.record(endpoint, record)
                }
                Err(failure) => {
                    tracing::warn!(
                        "Failed to fetch {} from {}: {}",
                        endpoint,
                        self.unique_id(),
                        failure
                    );
                    builder.failure(endpoint, failure)
                }
            };
        }

        builder.captured_at(Utc::now()).build()
    }

    async fn fetch_page(&self, endpoint: Endpoint) -> (Endpoint, FetchResult) {
        (endpoint, self.fetcher.fetch(endpoint).await)
    }

    fn update_state(&mut self, snapshot: &TelemetrySnapshot) {
        let next = if snapshot.is_degraded() {
            ProviderState::Degraded
        } else {
            ProviderState::Ready
        };

        if next != self.state {
            match next {
                ProviderState::Degraded => tracing::warn!(
                    "{} degraded: {} of {} pages unavailable",
                    self.unique_id(),
                    snapshot.failures().len(),
                    self.model.endpoints().len()
                ),
                _ => tracing::info!("{} ready", self.unique_id()),
            }
        }

        self.state = next;
    }
}

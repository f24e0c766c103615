//! Supported controller models and the identity reported by a device

use crate::device::Endpoint;
use crate::metrics::{MetricDescriptor, CATALOG};
use serde::Deserialize;
use std::fmt;

/// Manufacturer shown in device metadata
pub const MANUFACTURER: &str = "Wilo";

/// Supported pump controller models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceModel {
    #[default]
    Rain3,
}

impl DeviceModel {
    /// Lower-case model key, used in unique ids and configuration
    pub fn key(&self) -> &'static str {
        match self {
            DeviceModel::Rain3 => "rain3",
        }
    }

    /// Human readable model name
    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceModel::Rain3 => "Rain3",
        }
    }

    /// Pages this model serves, in poll order
    pub fn endpoints(&self) -> &'static [Endpoint] {
        match self {
            DeviceModel::Rain3 => &Endpoint::ALL,
        }
    }

    /// Metric catalog of this model
    pub fn catalog(&self) -> &'static [MetricDescriptor] {
        match self {
            DeviceModel::Rain3 => CATALOG,
        }
    }

    /// Unique id of one device instance
    ///
    /// Instance `0` keeps the bare model key, so a single-device setup gets
    /// `rain3` and further devices get `rain3_1`, `rain3_2` and so on.
    pub fn unique_id(&self, device_id: u32) -> String {
        if device_id == 0 {
            self.key().to_string()
        } else {
            format!("{}_{}", self.key(), device_id)
        }
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Identity metadata of an initialized device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub unique_id: String,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub software_version: String,

    /// Not printed by every firmware version
    pub equipment_number: Option<String>,

    pub configuration_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_id() {
        assert_eq!(DeviceModel::Rain3.unique_id(0), "rain3");
        assert_eq!(DeviceModel::Rain3.unique_id(2), "rain3_2");
    }

    #[test]
    fn test_model_deserializes_from_key() {
        #[derive(Deserialize)]
        struct Wrapper {
            model: DeviceModel,
        }

        let wrapper: Wrapper = toml::from_str(r#"model = "rain3""#).unwrap();
        assert_eq!(wrapper.model, DeviceModel::Rain3);
        assert!(toml::from_str::<Wrapper>(r#"model = "rain4""#).is_err());
    }

    #[test]
    fn test_rain3_serves_all_endpoints() {
        assert_eq!(DeviceModel::Rain3.endpoints(), &Endpoint::ALL[..]);
        assert!(!DeviceModel::Rain3.catalog().is_empty());
    }
}

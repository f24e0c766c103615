//! Metric descriptor catalog
//!
//! A static table that maps every exposed metric id to its metadata and a
//! named extraction function. Consumers iterate the table once per snapshot
//! instead of special-casing individual fields.
//!
//! # Example
//!
//! ```
//! use rain3_telemetry::{read_metrics, TelemetrySnapshot, CATALOG};
//!
//! let snapshot = TelemetrySnapshot::builder().build();
//! for reading in read_metrics(CATALOG, &snapshot, "rain3") {
//!     println!("{}: {:?}", reading.unique_id, reading.state);
//! }
//! ```

mod catalog;
mod descriptor;
pub mod extract;
mod reading;

pub use catalog::{find, CATALOG};
pub use descriptor::{
    DeviceClass, ExtraAttributes, ExtraExtractor, Extractor, MetricCategory, MetricDescriptor,
    MetricKind, MetricState, MetricValue, StateClass, Unit,
};
pub use reading::{read_metrics, MetricReading};

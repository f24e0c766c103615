//! Telemetry model for one poll cycle
//!
//! This module contains:
//! - `CategoryRecord`, the cleaned key/value map of a single page
//! - `TelemetrySnapshot`, the combined records of all pages
//! - Typed, unit-aware accessors over the snapshot
//! - The composite duration parser shared by those accessors

mod accessors;
pub mod convert;
mod duration;
pub mod keys;
mod record;
mod snapshot;

pub use duration::{parse_duration, TimeUnit};
pub use record::CategoryRecord;
pub use snapshot::{AlarmData, AlarmHistoryEntry, SnapshotBuilder, TelemetrySnapshot};

//! Telemetry snapshot for one poll cycle
//!
//! A snapshot always holds one record per endpoint; an endpoint that could not
//! be fetched contributes an empty record and an entry in `failures`.

use crate::device::{Endpoint, FetchFailure};
use crate::parser::AlarmPage;
use crate::telemetry::CategoryRecord;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// One entry of the alarm history list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmHistoryEntry {
    /// Error description, including the firmware error code
    pub error: String,

    /// Timestamp exactly as printed by the controller
    pub timestamp: String,
}

/// Current alarm and history combined, used as auxiliary metric data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlarmData {
    pub current: Option<String>,
    pub history: Vec<AlarmHistoryEntry>,
}

/// Combined telemetry of all endpoints for one poll cycle
///
/// Immutable once built. A new poll produces a new snapshot; there is no
/// incremental merge.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySnapshot {
    identity: CategoryRecord,
    state: CategoryRecord,
    download: CategoryRecord,
    setup: CategoryRecord,
    installation: CategoryRecord,
    settings: CategoryRecord,
    errors: CategoryRecord,
    active_alarm: Option<String>,
    alarm_history: Option<Vec<AlarmHistoryEntry>>,
    failures: BTreeMap<Endpoint, FetchFailure>,
    captured_at: DateTime<Utc>,
}

impl TelemetrySnapshot {
    /// Starts building a snapshot with all records empty
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::new()
    }

    /// Returns the record parsed from the given endpoint
    pub fn record(&self, endpoint: Endpoint) -> &CategoryRecord {
        match endpoint {
            Endpoint::Identity => &self.identity,
            Endpoint::State => &self.state,
            Endpoint::Download => &self.download,
            Endpoint::Setup => &self.setup,
            Endpoint::Installation => &self.installation,
            Endpoint::Settings => &self.settings,
            Endpoint::Errors => &self.errors,
        }
    }

    /// Current alarm text as printed on the errors page
    pub fn raw_active_alarm(&self) -> Option<&str> {
        self.active_alarm.as_deref()
    }

    /// Alarm history; `None` if the errors page had no history section
    pub fn raw_alarm_history(&self) -> Option<&[AlarmHistoryEntry]> {
        self.alarm_history.as_deref()
    }

    /// Endpoints that failed to fetch during this cycle
    pub fn failures(&self) -> &BTreeMap<Endpoint, FetchFailure> {
        &self.failures
    }

    /// Returns true if at least one endpoint failed to fetch
    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }

    /// When the poll cycle that produced this snapshot completed
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

/// Assembles a [`TelemetrySnapshot`]
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    snapshot: TelemetrySnapshot,
}

impl SnapshotBuilder {
    fn new() -> Self {
        Self {
            snapshot: TelemetrySnapshot {
                identity: CategoryRecord::new(),
                state: CategoryRecord::new(),
                download: CategoryRecord::new(),
                setup: CategoryRecord::new(),
                installation: CategoryRecord::new(),
                settings: CategoryRecord::new(),
                errors: CategoryRecord::new(),
                active_alarm: None,
                alarm_history: None,
                failures: BTreeMap::new(),
                captured_at: Utc::now(),
            },
        }
    }

    /// Sets the record of one endpoint
    pub fn record(mut self, endpoint: Endpoint, record: CategoryRecord) -> Self {
        let slot = match endpoint {
            Endpoint::Identity => &mut self.snapshot.identity,
            Endpoint::State => &mut self.snapshot.state,
            Endpoint::Download => &mut self.snapshot.download,
            Endpoint::Setup => &mut self.snapshot.setup,
            Endpoint::Installation => &mut self.snapshot.installation,
            Endpoint::Settings => &mut self.snapshot.settings,
            Endpoint::Errors => &mut self.snapshot.errors,
        };
        *slot = record;
        self
    }

    /// Sets the errors record together with the derived alarm fields
    pub fn alarm_page(mut self, page: AlarmPage) -> Self {
        self.snapshot.active_alarm = page.active_alarm;
        self.snapshot.alarm_history = page.alarm_history;
        self.record(Endpoint::Errors, page.record)
    }

    /// Records a fetch failure; the endpoint keeps an empty record
    pub fn failure(mut self, endpoint: Endpoint, failure: FetchFailure) -> Self {
        self.snapshot.failures.insert(endpoint, failure);
        self.record(endpoint, CategoryRecord::new())
    }

    /// Overrides the capture time
    pub fn captured_at(mut self, captured_at: DateTime<Utc>) -> Self {
        self.snapshot.captured_at = captured_at;
        self
    }

    /// Finishes the snapshot
    pub fn build(self) -> TelemetrySnapshot {
        self.snapshot
    }
}

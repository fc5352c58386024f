//! Mock schedule source for testing without network access.
//!
//! Serves canned snapshots keyed by station id, with optional
//! per-station failure injection and artificial delay so tests can
//! exercise slow and failing fetches.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::{Snapshot, StationId};

use super::ScheduleSource;
use super::error::ScheduleError;

/// Failure modes the mock can inject.
///
/// `ScheduleError` is not `Clone` (it can wrap a `reqwest::Error`),
/// so the mock stores this and materializes a fresh error per call.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Simulated network-level failure.
    Transport,
    /// Upstream answered with an unusable status.
    Unavailable(i32),
}

impl MockFailure {
    fn to_error(&self) -> ScheduleError {
        match self {
            MockFailure::Transport => ScheduleError::Api {
                status: 0,
                message: "simulated network error".to_string(),
            },
            MockFailure::Unavailable(status) => ScheduleError::Unavailable(*status),
        }
    }
}

#[derive(Clone)]
struct MockEntry {
    result: Result<Snapshot, MockFailure>,
    delay: Duration,
}

/// Mock schedule source serving canned data.
#[derive(Clone, Default)]
pub struct MockScheduleClient {
    entries: Arc<Mutex<HashMap<StationId, MockEntry>>>,
}

impl MockScheduleClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a canned snapshot for a station.
    pub fn with_snapshot(self, station: StationId, snapshot: Snapshot) -> Self {
        self.set(station, Ok(snapshot), Duration::ZERO);
        self
    }

    /// Fail every fetch for a station.
    pub fn with_failure(self, station: StationId, failure: MockFailure) -> Self {
        self.set(station, Err(failure), Duration::ZERO);
        self
    }

    /// Delay completions for a station by the given duration.
    pub fn with_delay(self, station: StationId, delay: Duration) -> Self {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.get_mut(&station) {
            entry.delay = delay;
        }
        drop(entries);
        self
    }

    fn set(&self, station: StationId, result: Result<Snapshot, MockFailure>, delay: Duration) {
        self.entries
            .lock()
            .unwrap()
            .insert(station, MockEntry { result, delay });
    }

    fn entry(&self, station: StationId) -> Option<MockEntry> {
        self.entries.lock().unwrap().get(&station).cloned()
    }
}

impl ScheduleSource for MockScheduleClient {
    fn fetch(
        &self,
        station: StationId,
    ) -> impl Future<Output = Result<Snapshot, ScheduleError>> + Send {
        let entry = self.entry(station);
        async move {
            let Some(entry) = entry else {
                return Err(ScheduleError::Api {
                    status: 404,
                    message: format!("no mock data for station {station}"),
                });
            };

            if !entry.delay.is_zero() {
                tokio::time::sleep(entry.delay).await;
            }

            entry.result.map_err(|f| f.to_error())
        }
    }
}

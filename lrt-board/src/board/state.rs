//! Departure board state machine.
//!
//! `Board` owns the selection state: the chosen station, the search
//! text, the display phase, and the latest snapshot. All transitions
//! are synchronous; the async driver executes the `FetchRequest`
//! values these methods hand back and feeds completions into
//! `apply_fetch_result`.
//!
//! Fetches in flight are never cancelled. Instead every request
//! carries the generation current at issue time, and a completion
//! whose generation is no longer the latest is discarded. This is
//! what keeps a slow response for a previously selected station from
//! overwriting the snapshot of the current one.

use tracing::{debug, warn};

use crate::domain::{Snapshot, StationId};
use crate::schedule::ScheduleError;

/// Display phase of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing fetched yet.
    Idle,
    /// A fetch for the current selection is in flight.
    Loading,
    /// The latest fetch succeeded and its snapshot is current.
    Displaying,
    /// The latest fetch failed or had no usable data.
    Failed,
}

/// A fetch the driver should execute, tagged with the station it was
/// issued for and the board generation at issue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub station: StationId,
    pub generation: u64,
}

/// The view controller state.
#[derive(Debug, Clone)]
pub struct Board {
    selected: StationId,
    query: String,
    phase: Phase,
    snapshot: Option<Snapshot>,
    generation: u64,
}

impl Board {
    /// Create a board for an initial station. No fetch is issued
    /// until the first `tick` or selection change.
    pub fn new(initial: StationId) -> Self {
        Self {
            selected: initial,
            query: String::new(),
            phase: Phase::Idle,
            snapshot: None,
            generation: 0,
        }
    }

    /// The currently selected station.
    pub fn selected(&self) -> StationId {
        self.selected
    }

    /// The in-flight search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current display phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The latest snapshot, if any is current.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Replace the search text. Search narrows the visible station
    /// list only; it never touches fetch state.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select a station: clears the search text, enters `Loading`,
    /// and returns the fetch to run for the new selection.
    pub fn select_station(&mut self, station: StationId) -> FetchRequest {
        self.query.clear();
        self.begin_fetch(station)
    }

    /// Periodic refresh: re-fetch whatever is selected *now*. The
    /// driver's timer must call this rather than reuse an id captured
    /// when the timer was armed.
    pub fn tick(&mut self) -> FetchRequest {
        self.begin_fetch(self.selected)
    }

    fn begin_fetch(&mut self, station: StationId) -> FetchRequest {
        self.selected = station;
        self.phase = Phase::Loading;
        self.generation += 1;

        FetchRequest {
            station,
            generation: self.generation,
        }
    }

    /// Apply a fetch completion. Returns `false` when the result was
    /// stale and discarded.
    ///
    /// Latest-wins: only the completion for the most recently issued
    /// request may touch state. A success transitions to
    /// `Displaying`; any error clears the snapshot and transitions to
    /// `Failed`, logging the cause instead of surfacing it.
    pub fn apply_fetch_result(
        &mut self,
        request: FetchRequest,
        result: Result<Snapshot, ScheduleError>,
    ) -> bool {
        if request.generation != self.generation || request.station != self.selected {
            debug!(
                station = %request.station,
                generation = request.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }

        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.phase = Phase::Displaying;
            }
            Err(e) => {
                warn!(station = %request.station, error = %e, "schedule fetch failed");
                self.snapshot = None;
                self.phase = Phase::Failed;
            }
        }

        true
    }
}

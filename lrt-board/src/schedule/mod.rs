//! Next Train schedule fetcher.
//!
//! This module provides the HTTP client for the Light Rail Next Train
//! API and the defensive decoding into typed snapshots.
//!
//! Key characteristics of the upstream feed:
//! - Loosely typed: `platform_list` and `route_list` are omitted
//!   rather than sent empty, and route fields can be missing
//! - `status != 1` means "no usable schedule" even on HTTP 200
//! - A literal `"-"` display time means the train is arriving now
//!
//! The fetcher is stateless per call and never retries; cadence and
//! stale-result handling live in the board layer.

mod client;
mod convert;
mod error;
mod mock;
mod types;

use crate::domain::{Snapshot, StationId};

pub use client::{ScheduleClient, ScheduleConfig};
pub use convert::convert_schedule;
pub use error::ScheduleError;
pub use mock::{MockFailure, MockScheduleClient};
pub use types::{PlatformDto, RouteDto, ScheduleResponse};

/// Anything that can fetch a schedule snapshot for a station.
///
/// The seam between the board/UI layers and the network: the real
/// `ScheduleClient` and the `MockScheduleClient` both implement it.
pub trait ScheduleSource: Clone + Send + Sync + 'static {
    /// Fetch the schedule for a station.
    fn fetch(
        &self,
        station: StationId,
    ) -> impl Future<Output = Result<Snapshot, ScheduleError>> + Send;
}

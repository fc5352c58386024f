//! Domain types for the Light Rail departure board.
//!
//! This module contains the validated core types. `StationId` enforces
//! its invariants at construction time; the snapshot types are plain
//! data whose optional upstream fields have already been normalized by
//! the schedule decoding layer, so code that receives them never sees
//! absence.

mod snapshot;
mod station_id;

pub use snapshot::{ARRIVING_NOW, Direction, Platform, RouteEntry, STATUS_OK, Snapshot};
pub use station_id::{InvalidStationId, StationId};

//! Conversion from Next Train DTOs to the typed snapshot.
//!
//! This is the defensive-decoding step: every optional collection is
//! normalized to an empty vector and every optional field to a
//! neutral default here, so absence never propagates past this
//! boundary. The conversion is total: an unusable status still yields
//! a snapshot, and the client decides what to do with it.

use crate::domain::{Direction, Platform, RouteEntry, Snapshot};

use super::types::{PlatformDto, RouteDto, ScheduleResponse};

/// Convert a raw `getSchedule` response into a typed snapshot.
pub fn convert_schedule(raw: ScheduleResponse) -> Snapshot {
    let platforms = raw
        .platform_list
        .unwrap_or_default()
        .into_iter()
        .map(convert_platform)
        .collect();

    Snapshot {
        status: raw.status,
        system_time: raw.system_time,
        platforms,
    }
}

fn convert_platform(dto: PlatformDto) -> Platform {
    Platform {
        id: dto.platform_id,
        routes: dto
            .route_list
            .unwrap_or_default()
            .into_iter()
            .map(convert_route)
            .collect(),
    }
}

fn convert_route(dto: RouteDto) -> RouteEntry {
    RouteEntry {
        route_no: dto.route_no.unwrap_or_default(),
        dest_en: dto.dest_en.unwrap_or_default(),
        dest_ch: dto.dest_ch.unwrap_or_default(),
        time_en: dto.time_en.unwrap_or_default(),
        time_ch: dto.time_ch.unwrap_or_default(),
        train_length: dto.train_length.unwrap_or(1),
        direction: Direction::from_code(dto.arrival_departure.as_deref().unwrap_or("")),
        stopped: dto.stop.unwrap_or(0) == 1,
    }
}

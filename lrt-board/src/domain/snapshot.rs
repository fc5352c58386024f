//! Typed schedule snapshot.
//!
//! One `Snapshot` is one complete, immutable schedule result for one
//! station at one point in time. A fresh snapshot fully replaces the
//! previous one; nothing is ever merged.

/// Response status value meaning the schedule is usable.
pub const STATUS_OK: i32 = 1;

/// Display time string the API sends for a train that is arriving now.
pub const ARRIVING_NOW: &str = "-";

/// Travel direction of a route entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Arrival,
    Departure,
}

impl Direction {
    /// Parse the API's one-letter direction code. Anything other than
    /// `"A"` is treated as a departure, which is what the upstream feed
    /// sends in practice for everything else.
    pub fn from_code(code: &str) -> Self {
        if code == "A" {
            Direction::Arrival
        } else {
            Direction::Departure
        }
    }
}

/// One scheduled train arrival/departure record within a platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Route number, e.g. "505" or "761P".
    pub route_no: String,

    /// Destination, English.
    pub dest_en: String,

    /// Destination, Chinese.
    pub dest_ch: String,

    /// Display time, English (e.g. "3 min", or "-" for arriving now).
    pub time_en: String,

    /// Display time, Chinese.
    pub time_ch: String,

    /// Number of coupled cars (1 = single, 2 = coupled).
    pub train_length: u8,

    /// Whether this record is an arrival or a departure.
    pub direction: Direction,

    /// Whether the train is currently stopped at the platform.
    pub stopped: bool,
}

impl RouteEntry {
    /// The train is arriving right now (the feed sends a literal dash
    /// instead of a minutes-away time).
    pub fn is_arriving(&self) -> bool {
        self.time_en == ARRIVING_NOW
    }

    /// The train is currently stopped at the platform.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Two-car coupled consist.
    pub fn is_coupled(&self) -> bool {
        self.train_length == 2
    }

    /// Display label for the consist length.
    pub fn consist_label(&self) -> &'static str {
        if self.is_coupled() { "coupled" } else { "single" }
    }
}

/// A physical boarding point at a station.
///
/// Holds zero or more route entries in the order the server sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub id: u32,
    pub routes: Vec<RouteEntry>,
}

/// One complete schedule result for one station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Upstream status code; `STATUS_OK` means usable data.
    pub status: i32,

    /// Server-reported generation time, e.g. "2026-08-29 14:03:10".
    pub system_time: String,

    /// Platforms in server order.
    pub platforms: Vec<Platform>,
}

impl Snapshot {
    /// Whether the upstream status marks this snapshot as usable.
    pub fn is_usable(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Total route entries across all platforms.
    pub fn route_count(&self) -> usize {
        self.platforms.iter().map(|p| p.routes.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(time_en: &str, stop: bool, length: u8) -> RouteEntry {
        RouteEntry {
            route_no: "505".to_string(),
            dest_en: "Sam Shing".to_string(),
            dest_ch: "三聖".to_string(),
            time_en: time_en.to_string(),
            time_ch: time_en.to_string(),
            train_length: length,
            direction: Direction::Departure,
            stopped: stop,
        }
    }

    #[test]
    fn dash_time_means_arriving() {
        assert!(entry("-", false, 1).is_arriving());
        assert!(!entry("3 min", false, 1).is_arriving());
    }

    #[test]
    fn stop_flag_means_stopped() {
        assert!(entry("-", true, 1).is_stopped());
        assert!(!entry("-", false, 1).is_stopped());
    }

    #[test]
    fn two_cars_means_coupled() {
        assert!(entry("3 min", false, 2).is_coupled());
        assert_eq!(entry("3 min", false, 2).consist_label(), "coupled");
        assert!(!entry("3 min", false, 1).is_coupled());
        assert_eq!(entry("3 min", false, 1).consist_label(), "single");
    }

    #[test]
    fn direction_codes() {
        assert_eq!(Direction::from_code("A"), Direction::Arrival);
        assert_eq!(Direction::from_code("D"), Direction::Departure);
        assert_eq!(Direction::from_code(""), Direction::Departure);
    }

    #[test]
    fn usable_status() {
        let snapshot = Snapshot {
            status: STATUS_OK,
            system_time: "2026-08-29 14:03:10".to_string(),
            platforms: vec![],
        };
        assert!(snapshot.is_usable());

        let down = Snapshot { status: 0, ..snapshot };
        assert!(!down.is_usable());
    }

    #[test]
    fn route_count_sums_platforms() {
        let snapshot = Snapshot {
            status: STATUS_OK,
            system_time: String::new(),
            platforms: vec![
                Platform {
                    id: 1,
                    routes: vec![entry("-", false, 1), entry("5 min", false, 2)],
                },
                Platform { id: 2, routes: vec![] },
            ],
        };
        assert_eq!(snapshot.route_count(), 2);
    }
}

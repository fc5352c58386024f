//! Next Train API response DTOs.
//!
//! These types map directly to the `getSchedule` JSON response. The
//! upstream contract is loosely typed: collection fields are omitted
//! rather than sent as empty arrays, and individual route fields can
//! be missing, so everything optional defaults here and gets
//! normalized in `convert`.

use serde::Deserialize;

/// Response from `getSchedule`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleResponse {
    /// 1 = usable schedule; anything else means no data.
    #[serde(default)]
    pub status: i32,

    /// Server time the schedule was generated, "YYYY-MM-DD HH:MM:SS".
    #[serde(default)]
    pub system_time: String,

    /// Platforms at the station. Omitted when the station has no data.
    #[serde(default)]
    pub platform_list: Option<Vec<PlatformDto>>,
}

/// One platform in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformDto {
    #[serde(default)]
    pub platform_id: u32,

    /// Scheduled departures at this platform. Omitted when empty.
    #[serde(default)]
    pub route_list: Option<Vec<RouteDto>>,
}

/// One scheduled departure in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    /// 1 or 2 cars.
    #[serde(default)]
    pub train_length: Option<u8>,

    /// "A" for arrival, "D" for departure.
    #[serde(default)]
    pub arrival_departure: Option<String>,

    #[serde(default)]
    pub dest_en: Option<String>,

    #[serde(default)]
    pub dest_ch: Option<String>,

    /// Display time, e.g. "3 min", or "-" for arriving now.
    #[serde(default)]
    pub time_en: Option<String>,

    #[serde(default)]
    pub time_ch: Option<String>,

    #[serde(default)]
    pub route_no: Option<String>,

    /// 1 when the train is currently stopped at the platform.
    #[serde(default)]
    pub stop: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_response() {
        let json = r#"{
            "status": 1,
            "system_time": "2026-08-29 14:03:10",
            "platform_list": [
                {
                    "platform_id": 1,
                    "route_list": [
                        {
                            "train_length": 2,
                            "arrival_departure": "D",
                            "dest_en": "Sam Shing",
                            "dest_ch": "三聖",
                            "time_en": "3 min",
                            "time_ch": "3 分鐘",
                            "route_no": "505",
                            "stop": 0
                        }
                    ]
                }
            ]
        }"#;

        let response: ScheduleResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, 1);
        assert_eq!(response.system_time, "2026-08-29 14:03:10");

        let platforms = response.platform_list.unwrap();
        assert_eq!(platforms.len(), 1);
        assert_eq!(platforms[0].platform_id, 1);

        let routes = platforms[0].route_list.as_ref().unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].route_no.as_deref(), Some("505"));
        assert_eq!(routes[0].train_length, Some(2));
        assert_eq!(routes[0].stop, Some(0));
    }

    #[test]
    fn deserialize_without_platform_list() {
        let json = r#"{"status": 0, "system_time": "2026-08-29 14:03:10"}"#;
        let response: ScheduleResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, 0);
        assert!(response.platform_list.is_none());
    }

    #[test]
    fn deserialize_platform_without_route_list() {
        let json = r#"{"platform_id": 2}"#;
        let platform: PlatformDto = serde_json::from_str(json).unwrap();

        assert_eq!(platform.platform_id, 2);
        assert!(platform.route_list.is_none());
    }

    #[test]
    fn deserialize_sparse_route() {
        let json = r#"{"route_no": "614", "time_en": "-"}"#;
        let route: RouteDto = serde_json::from_str(json).unwrap();

        assert_eq!(route.route_no.as_deref(), Some("614"));
        assert_eq!(route.time_en.as_deref(), Some("-"));
        assert!(route.train_length.is_none());
        assert!(route.arrival_departure.is_none());
    }

    #[test]
    fn deserialize_empty_object() {
        // Everything defaults; nothing is required.
        let response: ScheduleResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.status, 0);
        assert!(response.system_time.is_empty());
        assert!(response.platform_list.is_none());
    }
}

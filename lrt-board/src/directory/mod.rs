//! Station directory: id → bilingual name lookup and search.
//!
//! The directory is a fixed table loaded once at startup and never
//! mutated. Iteration order is the table's insertion order, which
//! follows the network layout and stays stable across calls.

mod data;

use std::collections::HashMap;

use crate::domain::StationId;

/// One Light Rail station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub name_en: String,
    pub name_ch: String,
}

/// Immutable station lookup built from the compiled-in table.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    stations: Vec<Station>,
    by_id: HashMap<StationId, usize>,
}

impl StationDirectory {
    /// Build the directory from the compiled-in table.
    ///
    /// Table rows whose id fails to parse are skipped; a test pins the
    /// table to be fully valid.
    pub fn new() -> Self {
        let stations: Vec<Station> = data::STATIONS
            .iter()
            .filter_map(|&(id, name_en, name_ch)| {
                StationId::parse(id).ok().map(|id| Station {
                    id,
                    name_en: name_en.to_string(),
                    name_ch: name_ch.to_string(),
                })
            })
            .collect();

        let by_id = stations
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id, i))
            .collect();

        Self { stations, by_id }
    }

    /// Look up a station by id.
    pub fn lookup(&self, id: StationId) -> Option<&Station> {
        self.by_id.get(&id).map(|&i| &self.stations[i])
    }

    /// All stations, in stable insertion order.
    pub fn all(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations in the directory.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Find stations matching a free-text query.
    ///
    /// A station matches when its English name (case-insensitively),
    /// Chinese name, or raw id contains the query as a substring. The
    /// empty query matches everything. Results keep insertion order.
    pub fn search(&self, query: &str) -> Vec<&Station> {
        if query.is_empty() {
            return self.stations.iter().collect();
        }

        let query_lower = query.to_lowercase();

        self.stations
            .iter()
            .filter(|s| {
                s.name_en.to_lowercase().contains(&query_lower)
                    || s.name_ch.contains(query)
                    || s.id.as_str().contains(query)
            })
            .collect()
    }
}

impl Default for StationDirectory {
    fn default() -> Self {
        Self::new()
    }
}

//! Crowding levels per (station, line).
//!
//! Affluence is a normalized crowding score in `[0, 1]` for one station as
//! served by one line, precomputed externally from day/hour profiles. The
//! planner only reads it; pairs without an entry resolve to
//! [`DEFAULT_AFFLUENCE`].

use std::collections::HashMap;

use crate::domain::{LineLabel, StationKey};

/// Crowding assumed for (station, line) pairs with no recorded level.
pub const DEFAULT_AFFLUENCE: f64 = 0.2;

/// Lookup from `(station, line)` to a crowding level.
#[derive(Debug, Clone, Default)]
pub struct AffluenceMap {
    levels: HashMap<(StationKey, LineLabel), f64>,
}

impl AffluenceMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the crowding level for a (station, line) pair.
    pub fn insert(&mut self, station: &str, line: &str, level: f64) {
        self.levels
            .insert((StationKey::new(station), LineLabel::new(line)), level);
    }

    /// Crowding level for a (station, line) pair.
    ///
    /// Missing pairs resolve to [`DEFAULT_AFFLUENCE`].
    pub fn get(&self, station: &StationKey, line: &LineLabel) -> f64 {
        self.levels
            .get(&(station.clone(), line.clone()))
            .copied()
            .unwrap_or(DEFAULT_AFFLUENCE)
    }

    /// Number of recorded pairs.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if no levels are recorded.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

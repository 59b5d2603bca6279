//! Application state for the web layer.

use std::sync::Arc;

use crate::affluence::AffluenceMap;
use crate::network::TransitGraph;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// The graph and affluence map are read-only for the lifetime of the
/// server; searches borrow them without locking.
#[derive(Clone)]
pub struct AppState {
    /// The line-expanded transit graph
    pub graph: Arc<TransitGraph>,

    /// Crowding levels per (station, line)
    pub affluence: Arc<AffluenceMap>,

    /// Default search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: TransitGraph, affluence: AffluenceMap, config: SearchConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            affluence: Arc::new(affluence),
            config: Arc::new(config),
        }
    }
}

//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Comfort dial, nominally 1 (fastest) to 10 (least crowded).
    ///
    /// Exactly 1 and exactly 10 select fixed endpoint weight sets; every
    /// other value, including values outside the nominal range, goes
    /// through the interpolation curves.
    pub dial: f64,

    /// Maximum number of frontier pops before the search gives up.
    pub max_iterations: usize,

    /// Target number of completed routes.
    ///
    /// The search stops early once it has archived five times this many
    /// completions. It does NOT bound the final result count, which is
    /// fixed at [`MAX_ROUTES`](crate::planner::MAX_ROUTES).
    pub target_routes: usize,

    /// Record every popped candidate as an exploration trace.
    pub record_explored: bool,

    /// Emit per-iteration debug logging. Never affects results.
    pub verbose: bool,
}

impl SearchConfig {
    /// Completed-route count at which the search stops early.
    pub fn completion_budget(&self) -> usize {
        self.target_routes * 5
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            dial: 1.0,
            max_iterations: 25_000,
            target_routes: 10,
            record_explored: false,
            verbose: false,
        }
    }
}

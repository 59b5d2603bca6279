//! Crowd-aware route planner.
//!
//! This module implements the core search that answers: "between these
//! origin nodes and these destination nodes, which routes best trade off
//! trip length, crowding and line changes?"
//!
//! The search is best-first over the line-expanded graph, with scores
//! recomputed per candidate path rather than accumulated incrementally,
//! four loop-avoidance rules, and a post-search dedup/rank step.

mod config;
mod cost;
mod filter;
mod rank;
mod search;

pub use config::SearchConfig;
pub use cost::Weights;
pub use filter::admits;
pub use rank::{MAX_ROUTES, RouteSummary, rank_routes};
pub use search::{CompletedRoute, ExploredPath, SearchEngine, SearchError, SearchOutcome};

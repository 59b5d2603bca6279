//! Ranking and summarizing completed routes.
//!
//! Completed routes are sorted by score, deduplicated by physical-station
//! sequence (the lowest-scoring route per distinct itinerary survives, even
//! when the duplicates rode different lines), capped at [`MAX_ROUTES`] and
//! annotated with stop, change and affluence statistics.

use std::collections::HashSet;

use crate::domain::{CanonicalLine, StationKey};
use crate::network::{NodeId, TransitGraph};

use super::search::CompletedRoute;

/// Final result cap, independent of any configured target count.
pub const MAX_ROUTES: usize = 3;

/// A ranked route with its presentation-ready statistics.
#[derive(Debug, Clone)]
pub struct RouteSummary {
    /// Composite score the route completed with.
    pub score: f64,

    /// Normalized `(station, canonical line)` pair per stop.
    pub stops: Vec<(StationKey, CanonicalLine)>,

    /// Display name per stop.
    pub stop_names: Vec<String>,

    /// Canonical line per stop.
    pub lines: Vec<CanonicalLine>,

    /// Number of stops.
    pub stop_count: usize,

    /// Stop indices where the canonical line differs from the previous stop.
    pub change_indices: Vec<usize>,

    /// Number of line changes.
    pub change_count: usize,

    /// Mean affluence over the route.
    pub mean_affluence: f64,

    /// Highest affluence seen on the route.
    pub max_affluence: f64,

    /// Display names of the stops attaining the highest affluence.
    pub busiest_stops: Vec<String>,

    /// The raw node path through the line-expanded graph.
    pub raw_path: Vec<NodeId>,
}

/// Rank completed routes and keep the best distinct itineraries.
///
/// Sorting is stable, so among equal scores the archive order (and with it
/// the engine's deterministic pop order) decides which route represents a
/// station sequence.
pub fn rank_routes(graph: &TransitGraph, mut routes: Vec<CompletedRoute>) -> Vec<RouteSummary> {
    routes.sort_by(|a, b| a.score.total_cmp(&b.score));

    let mut seen: HashSet<Vec<StationKey>> = HashSet::new();
    let mut summaries = Vec::new();
    for route in routes {
        let sequence: Vec<StationKey> = route
            .path
            .iter()
            .map(|&n| graph.node(n).station.clone())
            .collect();
        if !seen.insert(sequence) {
            continue;
        }
        summaries.push(summarize(graph, route));
        if summaries.len() == MAX_ROUTES {
            break;
        }
    }
    summaries
}

fn summarize(graph: &TransitGraph, route: CompletedRoute) -> RouteSummary {
    let stop_names: Vec<String> = route
        .path
        .iter()
        .map(|&n| graph.node(n).name.clone())
        .collect();
    let lines: Vec<CanonicalLine> = route
        .path
        .iter()
        .map(|&n| graph.node(n).line.canonical())
        .collect();
    let stops: Vec<(StationKey, CanonicalLine)> = route
        .path
        .iter()
        .zip(&lines)
        .map(|(&n, line)| (graph.node(n).station.clone(), line.clone()))
        .collect();

    let stop_count = route.path.len();
    let mean_affluence = route.affluences.iter().sum::<f64>() / route.affluences.len() as f64;
    let max_affluence = route
        .affluences
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let busiest_stops: Vec<String> = route
        .affluences
        .iter()
        .zip(&stop_names)
        .filter(|&(&aff, _)| aff == max_affluence)
        .map(|(_, name)| name.clone())
        .collect();

    let change_indices: Vec<usize> = (1..lines.len())
        .filter(|&i| lines[i] != lines[i - 1])
        .collect();
    let change_count = change_indices.len();

    RouteSummary {
        score: route.score,
        stops,
        stop_names,
        lines,
        stop_count,
        change_indices,
        change_count,
        mean_affluence,
        max_affluence,
        busiest_stops,
        raw_path: route.path,
    }
}

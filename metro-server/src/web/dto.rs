//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::TransitGraph;
use crate::planner::{ExploredPath, RouteSummary};

/// Request to plan routes.
#[derive(Debug, Deserialize)]
pub struct PlanRoutesRequest {
    /// Origin node ids
    pub origins: Vec<usize>,

    /// Destination node ids
    pub destinations: Vec<usize>,

    /// Comfort dial, 1 (fastest) to 10 (least crowded); defaults to the
    /// server configuration
    pub dial: Option<f64>,

    /// Return the raw exploration trace alongside the routes
    #[serde(default)]
    pub include_explored: bool,
}

/// One stop of a planned route.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// Node id in the line-expanded graph
    pub node: usize,

    /// Canonical station key
    pub station: String,

    /// Canonical line label
    pub line: String,

    /// Display name
    pub name: String,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Composite score (lower is better)
    pub score: f64,

    /// Stops in order
    pub stops: Vec<StopResult>,

    /// Number of stops
    pub stop_count: usize,

    /// Number of line changes
    pub change_count: usize,

    /// Stop indices where the line changes
    pub change_indices: Vec<usize>,

    /// Mean affluence over the route
    pub mean_affluence: f64,

    /// Highest affluence on the route
    pub max_affluence: f64,

    /// Names of the stops at the highest affluence
    pub busiest_stops: Vec<String>,
}

impl RouteResult {
    /// Build a DTO from a ranked route summary.
    pub fn from_summary(summary: &RouteSummary) -> Self {
        let stops = summary
            .raw_path
            .iter()
            .zip(&summary.stops)
            .zip(&summary.stop_names)
            .map(|((&node, (station, line)), name)| StopResult {
                node: node.0,
                station: station.to_string(),
                line: line.to_string(),
                name: name.clone(),
            })
            .collect();

        Self {
            score: summary.score,
            stops,
            stop_count: summary.stop_count,
            change_count: summary.change_count,
            change_indices: summary.change_indices.clone(),
            mean_affluence: summary.mean_affluence,
            max_affluence: summary.max_affluence,
            busiest_stops: summary.busiest_stops.clone(),
        }
    }
}

/// One popped candidate of the exploration trace.
#[derive(Debug, Serialize)]
pub struct ExploredResult {
    pub score: f64,
    pub path: Vec<usize>,
    pub affluences: Vec<f64>,
    pub lines: Vec<String>,
}

impl ExploredResult {
    /// Build a DTO from a recorded exploration entry.
    pub fn from_explored(entry: &ExploredPath) -> Self {
        Self {
            score: entry.score,
            path: entry.path.iter().map(|n| n.0).collect(),
            affluences: entry.affluences.clone(),
            lines: entry.lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct PlanRoutesResponse {
    /// Ranked routes, best first (at most three)
    pub routes: Vec<RouteResult>,

    /// Frontier pops performed by the search
    pub iterations: usize,

    /// Exploration trace, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explored: Option<Vec<ExploredResult>>,
}

/// One node of the network inventory.
#[derive(Debug, Serialize)]
pub struct NodeResult {
    pub id: usize,
    pub station: String,
    pub line: String,
    pub name: String,
}

/// Response for the network inventory.
#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    pub nodes: Vec<NodeResult>,
}

impl NetworkResponse {
    /// List every node of the graph.
    pub fn from_graph(graph: &TransitGraph) -> Self {
        let nodes = graph
            .node_ids()
            .map(|id| {
                let stop = graph.node(id);
                NodeResult {
                    id: id.0,
                    station: stop.station.to_string(),
                    line: stop.line.to_string(),
                    name: stop.name.clone(),
                }
            })
            .collect();
        Self { nodes }
    }
}

/// Error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

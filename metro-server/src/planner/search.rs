//! Best-first route search over the line-expanded graph.
//!
//! The engine explores from every origin node at once, popping the
//! lowest-scoring candidate from a min-ordered frontier. Scores are
//! recomputed per extension from the full candidate path (see
//! [`Weights`]), candidate extensions are filtered by the loop rules, and
//! exploration is bounded by an iteration budget and a completed-route
//! budget. A candidate whose node lies in the destination set is archived
//! as a completed route and never expanded further.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::affluence::AffluenceMap;
use crate::domain::{LineLabel, StationKey};
use crate::network::{NodeId, TransitGraph};

use super::config::SearchConfig;
use super::cost::Weights;
use super::filter;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The origin set is empty
    #[error("origin set is empty")]
    EmptyOrigins,

    /// An origin or destination id is not in the graph
    #[error("node {0} is not in the graph")]
    UnknownNode(NodeId),
}

/// A route whose final node lies in the destination set.
///
/// Immutable once archived. `path`, `affluences` and `lines` run in
/// parallel, one entry per stop; `lines` holds raw labels.
#[derive(Debug, Clone)]
pub struct CompletedRoute {
    /// Final composite score.
    pub score: f64,

    /// Visited nodes in order.
    pub path: Vec<NodeId>,

    /// Affluence sampled at each visited node.
    pub affluences: Vec<f64>,

    /// Raw line label at each visited node.
    pub lines: Vec<LineLabel>,
}

/// One popped candidate, recorded verbatim when a trace is requested.
#[derive(Debug, Clone)]
pub struct ExploredPath {
    pub score: f64,
    pub path: Vec<NodeId>,
    pub affluences: Vec<f64>,
    pub lines: Vec<LineLabel>,
}

/// Result of one search invocation.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Completed routes in archive order (not yet ranked).
    pub routes: Vec<CompletedRoute>,

    /// Number of frontier pops performed.
    pub iterations: usize,

    /// Every popped candidate, when the trace was requested.
    pub explored: Option<Vec<ExploredPath>>,
}

/// A path under exploration. Exists only inside one `search` call.
///
/// Extending a candidate copies every sequence; candidates never share
/// mutable state even when their paths share a prefix.
#[derive(Debug, Clone)]
struct Candidate {
    score: f64,
    node: NodeId,
    path: Vec<NodeId>,
    affluences: Vec<f64>,
    lines: Vec<LineLabel>,
    visits: HashMap<StationKey, u32>,
}

impl Candidate {
    /// Raw line currently ridden (the last path entry's label).
    ///
    /// Paths are non-empty by construction, so this only returns `None`
    /// for a candidate that was never initialized through `seed`.
    fn ridden_line(&self) -> Option<&LineLabel> {
        self.lines.last()
    }
}

// Frontier ordering: score first (total order over floats), then node id,
// then path contents. The tie-breakers make equal-score pops deterministic.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.node.cmp(&other.node))
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Route search engine.
///
/// Borrows the graph, the affluence map and the configuration; owns nothing
/// across invocations. Every call to [`search`](Self::search) builds its
/// own frontier and visited table and discards them on return.
pub struct SearchEngine<'a> {
    graph: &'a TransitGraph,
    affluence: &'a AffluenceMap,
    config: &'a SearchConfig,
}

impl<'a> SearchEngine<'a> {
    /// Create a new engine.
    pub fn new(
        graph: &'a TransitGraph,
        affluence: &'a AffluenceMap,
        config: &'a SearchConfig,
    ) -> Self {
        Self {
            graph,
            affluence,
            config,
        }
    }

    /// Find routes from any origin node to any destination node.
    ///
    /// Completion is destination-set membership, not an exact node match;
    /// an origin that is itself a destination yields a zero-hop route with
    /// score 0. An unreachable destination is not an error: the outcome
    /// simply carries no routes.
    pub fn search(
        &self,
        origins: &[NodeId],
        destinations: &[NodeId],
    ) -> Result<SearchOutcome, SearchError> {
        if origins.is_empty() {
            return Err(SearchError::EmptyOrigins);
        }
        for &id in origins.iter().chain(destinations) {
            if !self.graph.contains(id) {
                return Err(SearchError::UnknownNode(id));
            }
        }

        let weights = Weights::from_dial(self.config.dial);
        let destinations: HashSet<NodeId> = destinations.iter().copied().collect();

        let mut frontier = BinaryHeap::new();
        for &origin in origins {
            frontier.push(Reverse(self.seed(origin)));
        }

        // Lowest score at which each (node, ridden raw line) pairing was
        // expanded. A later pop at an equal-or-higher score is discarded;
        // equal scores block too, never an "only if strictly better" rule.
        let mut visited: HashMap<(NodeId, LineLabel), f64> = HashMap::new();

        let mut completed: Vec<CompletedRoute> = Vec::new();
        let mut explored = self.config.record_explored.then(Vec::new);
        let budget = self.config.completion_budget();
        let mut iterations = 0;

        while iterations < self.config.max_iterations && completed.len() < budget {
            let Some(Reverse(mut candidate)) = frontier.pop() else {
                break;
            };
            iterations += 1;

            let station = self.graph.node(candidate.node).station.clone();
            *candidate.visits.entry(station).or_insert(0) += 1;

            if let Some(trace) = explored.as_mut() {
                trace.push(ExploredPath {
                    score: candidate.score,
                    path: candidate.path.clone(),
                    affluences: candidate.affluences.clone(),
                    lines: candidate.lines.clone(),
                });
            }

            if destinations.contains(&candidate.node) {
                if self.config.verbose {
                    tracing::debug!(
                        score = candidate.score,
                        stops = candidate.path.len(),
                        "route completed"
                    );
                }
                completed.push(CompletedRoute {
                    score: candidate.score,
                    path: candidate.path,
                    affluences: candidate.affluences,
                    lines: candidate.lines,
                });
                continue;
            }

            let Some(ridden) = candidate.ridden_line().cloned() else {
                continue;
            };
            let key = (candidate.node, ridden);
            match visited.get(&key) {
                Some(&sealed) if sealed <= candidate.score => continue,
                _ => {
                    visited.insert(key, candidate.score);
                }
            }

            self.expand(&candidate, &weights, &mut frontier);
        }

        if self.config.verbose {
            tracing::debug!(
                iterations,
                completed = completed.len(),
                frontier = frontier.len(),
                "search finished"
            );
        }

        Ok(SearchOutcome {
            routes: completed,
            iterations,
            explored,
        })
    }

    /// Initial candidate for one origin node.
    fn seed(&self, origin: NodeId) -> Candidate {
        let stop = self.graph.node(origin);
        let mut visits = HashMap::new();
        visits.insert(stop.station.clone(), 1);
        Candidate {
            score: 0.0,
            node: origin,
            path: vec![origin],
            affluences: vec![self.affluence.get(&stop.station, &stop.line)],
            lines: vec![stop.line.clone()],
            visits,
        }
    }

    /// Push every admissible extension of `candidate` onto the frontier.
    fn expand(
        &self,
        candidate: &Candidate,
        weights: &Weights,
        frontier: &mut BinaryHeap<Reverse<Candidate>>,
    ) {
        for &succ in self.graph.neighbors(candidate.node) {
            if !filter::admits(self.graph, &candidate.path, &candidate.lines, succ) {
                continue;
            }

            let stop = self.graph.node(succ);
            let succ_affluence = self.affluence.get(&stop.station, &stop.line);
            let line_changed = candidate.ridden_line() != Some(&stop.line);
            let score = weights.extension_score(&candidate.affluences, succ_affluence, line_changed);

            let mut path = candidate.path.clone();
            path.push(succ);
            let mut affluences = candidate.affluences.clone();
            affluences.push(succ_affluence);
            let mut lines = candidate.lines.clone();
            lines.push(stop.line.clone());

            frontier.push(Reverse(Candidate {
                score,
                node: succ,
                path,
                affluences,
                lines,
                visits: candidate.visits.clone(),
            }));
        }
    }
}

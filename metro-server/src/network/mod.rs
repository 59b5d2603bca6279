//! The line-expanded transit graph.
//!
//! Each node pairs a physical station with one line serving it, so a hub
//! like Châtelet appears once per line. Edges connect consecutive stops on
//! a line and co-located nodes of different lines (transfers); both kinds
//! are plain unweighted adjacencies, and the planner costs them by hop
//! count.
//!
//! The graph is built once (by the external data pipeline, arriving here
//! through [`load`] or [`TransitGraphBuilder`]) and is read-only for the
//! lifetime of every search.

mod load;

use std::fmt;

use crate::domain::{LineLabel, StationKey};

pub use load::{AffluenceEntry, EdgeEntry, NetworkError, NetworkFile, StopEntry, load};

/// Dense index of a node in the line-expanded graph.
///
/// Ids are assigned in insertion order by the builder. `Ord` matters: the
/// planner breaks score ties by node id to keep exploration deterministic.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A (physical-station, line) node of the graph.
#[derive(Debug, Clone)]
pub struct Stop {
    /// Canonical physical-station identity.
    pub station: StationKey,

    /// Raw line label as stored in the source data.
    pub line: LineLabel,

    /// Display name of the station.
    pub name: String,
}

/// The line-expanded graph: a node table plus undirected adjacency lists.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    stops: Vec<Stop>,
    adjacency: Vec<Vec<NodeId>>,
}

impl TransitGraph {
    /// Start building a graph.
    pub fn builder() -> TransitGraphBuilder {
        TransitGraphBuilder::default()
    }

    /// Returns the stop for a node.
    ///
    /// Panics if `id` is out of range; the planner validates membership up
    /// front, so ids that reach this accessor are known good.
    pub fn node(&self, id: NodeId) -> &Stop {
        &self.stops[id.0]
    }

    /// Returns the stop for a node, or `None` if the id is out of range.
    pub fn get(&self, id: NodeId) -> Option<&Stop> {
        self.stops.get(id.0)
    }

    /// Whether the graph contains a node with this id.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.stops.len()
    }

    /// Neighbors of a node, in ascending id order.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(id.0).map_or(&[], Vec::as_slice)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Iterate over all node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.stops.len()).map(NodeId)
    }
}

/// Builder for [`TransitGraph`].
///
/// Collects stops and edges, then sorts and deduplicates adjacency lists so
/// neighbor iteration order is deterministic.
#[derive(Debug, Default)]
pub struct TransitGraphBuilder {
    stops: Vec<Stop>,
    edges: Vec<(NodeId, NodeId)>,
}

impl TransitGraphBuilder {
    /// Add a (station, line) node and return its id.
    pub fn add_stop(&mut self, station: &str, line: &str, name: &str) -> NodeId {
        let id = NodeId(self.stops.len());
        self.stops.push(Stop {
            station: StationKey::new(station),
            line: LineLabel::new(line),
            name: name.to_string(),
        });
        id
    }

    /// Connect two nodes with an undirected edge.
    ///
    /// Out-of-range and self-loop edges are ignored.
    pub fn connect(&mut self, a: NodeId, b: NodeId) {
        if a != b && a.0 < self.stops.len() && b.0 < self.stops.len() {
            self.edges.push((a, b));
        }
    }

    /// Build the graph.
    pub fn build(self) -> TransitGraph {
        let mut adjacency = vec![Vec::new(); self.stops.len()];
        for (a, b) in self.edges {
            adjacency[a.0].push(b);
            adjacency[b.0].push(a);
        }
        for list in &mut adjacency {
            list.sort_unstable();
            list.dedup();
        }
        TransitGraph {
            stops: self.stops,
            adjacency,
        }
    }
}

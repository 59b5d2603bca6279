//! Network file loading.
//!
//! The graph-construction pipeline (station datasets, synonym resolution,
//! affluence profiles) lives outside this crate and hands over its output
//! as a single JSON document: the stop table, the edge list, and optional
//! affluence entries. This module is that boundary.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::affluence::AffluenceMap;

use super::{NodeId, TransitGraph};

/// Error loading a network file.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Failed to read the file
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid JSON or does not match the schema
    #[error("failed to parse network file: {0}")]
    Parse(#[from] serde_json::Error),

    /// An edge references a stop index that does not exist
    #[error("edge references unknown stop index {index}")]
    UnknownStop { index: usize },
}

/// On-disk description of a network, as produced by the data pipeline.
#[derive(Debug, Deserialize)]
pub struct NetworkFile {
    /// Stop table; the position in this list becomes the node id.
    pub stops: Vec<StopEntry>,

    /// Undirected edges, referencing stops by index.
    pub edges: Vec<EdgeEntry>,

    /// Crowding levels; stops without an entry fall back to the default.
    #[serde(default)]
    pub affluence: Vec<AffluenceEntry>,
}

/// One (station, line) node.
#[derive(Debug, Deserialize)]
pub struct StopEntry {
    /// Canonical station key
    pub station: String,

    /// Raw line label
    pub line: String,

    /// Display name
    pub name: String,
}

/// One undirected edge by stop index.
#[derive(Debug, Deserialize)]
pub struct EdgeEntry {
    pub from: usize,
    pub to: usize,
}

/// One crowding entry.
#[derive(Debug, Deserialize)]
pub struct AffluenceEntry {
    pub station: String,
    pub line: String,
    /// Crowding level in `[0, 1]`
    pub level: f64,
}

impl NetworkFile {
    /// Turn the file description into a graph and affluence map.
    pub fn into_network(self) -> Result<(TransitGraph, AffluenceMap), NetworkError> {
        let stop_count = self.stops.len();
        let mut builder = TransitGraph::builder();
        for stop in &self.stops {
            builder.add_stop(&stop.station, &stop.line, &stop.name);
        }
        for edge in &self.edges {
            for index in [edge.from, edge.to] {
                if index >= stop_count {
                    return Err(NetworkError::UnknownStop { index });
                }
            }
            builder.connect(NodeId(edge.from), NodeId(edge.to));
        }

        let mut affluence = AffluenceMap::new();
        for entry in self.affluence {
            affluence.insert(&entry.station, &entry.line, entry.level);
        }

        Ok((builder.build(), affluence))
    }
}

/// Load a network file from disk.
pub fn load(path: &Path) -> Result<(TransitGraph, AffluenceMap), NetworkError> {
    let reader = BufReader::new(File::open(path)?);
    let file: NetworkFile = serde_json::from_reader(reader)?;
    file.into_network()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineLabel, StationKey};

    const SAMPLE: &str = r#"{
        "stops": [
            {"station": "chatelet", "line": "METRO 1", "name": "Châtelet"},
            {"station": "nation", "line": "METRO 1", "name": "Nation"}
        ],
        "edges": [{"from": 0, "to": 1}],
        "affluence": [
            {"station": "chatelet", "line": "METRO 1", "level": 0.9}
        ]
    }"#;

    #[test]
    fn parse_sample() {
        let file: NetworkFile = serde_json::from_str(SAMPLE).unwrap();
        let (graph, affluence) = file.into_network().unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.neighbors(NodeId(0)), &[NodeId(1)]);
        assert_eq!(
            affluence.get(&StationKey::new("chatelet"), &LineLabel::new("METRO 1")),
            0.9
        );
        // No entry for Nation: default applies.
        assert_eq!(
            affluence.get(&StationKey::new("nation"), &LineLabel::new("METRO 1")),
            crate::affluence::DEFAULT_AFFLUENCE
        );
    }

    #[test]
    fn affluence_section_optional() {
        let json = r#"{"stops": [], "edges": []}"#;
        let file: NetworkFile = serde_json::from_str(json).unwrap();
        let (graph, affluence) = file.into_network().unwrap();
        assert!(graph.is_empty());
        assert!(affluence.is_empty());
    }

    #[test]
    fn edge_out_of_range_rejected() {
        let json = r#"{
            "stops": [{"station": "x", "line": "METRO 1", "name": "X"}],
            "edges": [{"from": 0, "to": 7}]
        }"#;
        let file: NetworkFile = serde_json::from_str(json).unwrap();
        let err = file.into_network().unwrap_err();
        assert!(matches!(err, NetworkError::UnknownStop { index: 7 }));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = serde_json::from_str::<NetworkFile>("{").unwrap_err();
        let _: NetworkError = err.into();
    }
}

//! Loop avoidance for candidate extensions.
//!
//! Four rules decide whether a path may be extended onto a successor node.
//! Every rule examines the path as it would be AFTER appending the
//! successor; one failing rule rejects the extension outright.
//!
//! Rules 1-3 scan the whole (would-be) path; rule 4 looks only at the
//! immediately preceding node.

use crate::domain::LineLabel;
use crate::network::{NodeId, TransitGraph};

/// Whether extending `path` (with parallel raw `lines`) onto `succ` is
/// admissible under the loop rules.
pub fn admits(graph: &TransitGraph, path: &[NodeId], lines: &[LineLabel], succ: NodeId) -> bool {
    !revisits_station(graph, path, succ)
        && !revisits_canonical_line(graph, path, succ)
        && !dwells_three_in_a_row(graph, path, succ)
        && !cosmetic_segment_switch(graph, path, lines, succ)
}

/// Rule 1: the successor's physical station may not appear more than twice
/// in the extended path, all lines pooled.
fn revisits_station(graph: &TransitGraph, path: &[NodeId], succ: NodeId) -> bool {
    let station = &graph.node(succ).station;
    let prior = path
        .iter()
        .filter(|&&n| graph.node(n).station == *station)
        .count();
    prior + 1 > 2
}

/// Rule 2: the successor's (station, canonical line) pair may not appear
/// more than once in the extended path. Revisiting a station is only
/// allowed on a genuinely different logical line.
fn revisits_canonical_line(graph: &TransitGraph, path: &[NodeId], succ: NodeId) -> bool {
    let stop = graph.node(succ);
    let canonical = stop.line.canonical();
    let prior = path
        .iter()
        .filter(|&&n| {
            let other = graph.node(n);
            other.station == stop.station && other.line.canonical() == canonical
        })
        .count();
    prior + 1 > 1
}

/// Rule 3: the last three stops of the extended path may not all be the
/// same physical station, even across line nodes.
fn dwells_three_in_a_row(graph: &TransitGraph, path: &[NodeId], succ: NodeId) -> bool {
    if path.len() < 2 {
        return false;
    }
    let station = &graph.node(succ).station;
    graph.node(path[path.len() - 1]).station == *station
        && graph.node(path[path.len() - 2]).station == *station
}

/// Rule 4: forbid a same-station hop that stays on the same canonical line
/// while switching raw labels, e.g. `RER C 1` to `RER C 2`. That is a
/// cosmetic segment change, not an actual transfer.
fn cosmetic_segment_switch(
    graph: &TransitGraph,
    path: &[NodeId],
    lines: &[LineLabel],
    succ: NodeId,
) -> bool {
    let (Some(&last), Some(ridden)) = (path.last(), lines.last()) else {
        return false;
    };
    let stop = graph.node(succ);
    let last_stop = graph.node(last);
    last_stop.station == stop.station
        && last_stop.line.canonical() == stop.line.canonical()
        && stop.line != *ridden
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(graph: &TransitGraph, path: &[NodeId]) -> Vec<LineLabel> {
        path.iter().map(|&n| graph.node(n).line.clone()).collect()
    }

    #[test]
    fn fresh_station_admitted() {
        let mut builder = TransitGraph::builder();
        let a = builder.add_stop("x", "METRO 1", "X");
        let b = builder.add_stop("y", "METRO 1", "Y");
        builder.connect(a, b);
        let graph = builder.build();

        let path = vec![a];
        let lines = lines_of(&graph, &path);
        assert!(admits(&graph, &path, &lines, b));
    }

    #[test]
    fn third_station_visit_rejected() {
        // x -> y -> x (other line) -> y would put y in the path three times.
        let mut builder = TransitGraph::builder();
        let x1 = builder.add_stop("x", "METRO 1", "X");
        let y1 = builder.add_stop("y", "METRO 1", "Y");
        let x4 = builder.add_stop("x", "METRO 4", "X");
        let y9 = builder.add_stop("y", "METRO 9", "Y");
        let graph = builder.build();

        let path = vec![y1, x1, y9, x4];
        assert!(revisits_station(&graph, &path, y1));
        let lines = lines_of(&graph, &path);
        assert!(!admits(&graph, &path, &lines, y1));
    }

    #[test]
    fn second_visit_on_other_canonical_line_admitted() {
        let mut builder = TransitGraph::builder();
        let x1 = builder.add_stop("x", "METRO 1", "X");
        let y1 = builder.add_stop("y", "METRO 1", "Y");
        let x4 = builder.add_stop("x", "METRO 4", "X");
        let graph = builder.build();

        // x -> y -> back to x on a different canonical line: allowed.
        let path = vec![x1, y1];
        let lines = lines_of(&graph, &path);
        assert!(admits(&graph, &path, &lines, x4));
    }

    #[test]
    fn second_visit_on_same_canonical_line_rejected() {
        let mut builder = TransitGraph::builder();
        let x1 = builder.add_stop("x", "RER C 1", "X");
        let y1 = builder.add_stop("y", "RER C 1", "Y");
        let x2 = builder.add_stop("x", "RER C 2", "X");
        let graph = builder.build();

        // x (RER C 1) -> y -> x (RER C 2): same (station, RER C) pair twice.
        let path = vec![x1, y1];
        let lines = lines_of(&graph, &path);
        assert!(revisits_canonical_line(&graph, &path, x2));
        assert!(!admits(&graph, &path, &lines, x2));
    }

    #[test]
    fn triple_dwell_rejected() {
        // Three consecutive nodes of one physical hub, each on a distinct
        // canonical line so only rule 3 fires.
        let mut builder = TransitGraph::builder();
        let h1 = builder.add_stop("hub", "METRO 1", "Hub");
        let h4 = builder.add_stop("hub", "METRO 4", "Hub");
        let h7 = builder.add_stop("hub", "METRO 7", "Hub");
        let graph = builder.build();

        let path = vec![h1, h4];
        let lines = lines_of(&graph, &path);
        assert!(dwells_three_in_a_row(&graph, &path, h7));
        assert!(!admits(&graph, &path, &lines, h7));
    }

    #[test]
    fn transfer_after_ride_is_not_a_dwell() {
        // Only two consecutive same-station nodes: fine.
        let mut builder = TransitGraph::builder();
        let y1 = builder.add_stop("y", "METRO 1", "Y");
        let h1 = builder.add_stop("hub", "METRO 1", "Hub");
        let h4 = builder.add_stop("hub", "METRO 4", "Hub");
        let graph = builder.build();

        let path = vec![y1, h1];
        let lines = lines_of(&graph, &path);
        assert!(!dwells_three_in_a_row(&graph, &path, h4));
        assert!(admits(&graph, &path, &lines, h4));
    }

    #[test]
    fn cosmetic_segment_switch_rejected() {
        // Standing at x on RER C 1, hopping to the co-located RER C 2 node
        // changes the raw label but not the logical line.
        let mut builder = TransitGraph::builder();
        let x1 = builder.add_stop("x", "RER C 1", "X");
        let x2 = builder.add_stop("x", "RER C 2", "X");
        let graph = builder.build();

        let path = vec![x1];
        let lines = lines_of(&graph, &path);
        assert!(cosmetic_segment_switch(&graph, &path, &lines, x2));
        assert!(!admits(&graph, &path, &lines, x2));
    }

    #[test]
    fn real_transfer_at_station_admitted() {
        // Same station, genuinely different canonical line: a transfer.
        let mut builder = TransitGraph::builder();
        let x1 = builder.add_stop("x", "METRO 1", "X");
        let xa = builder.add_stop("x", "RER A", "X");
        let graph = builder.build();

        let path = vec![x1];
        let lines = lines_of(&graph, &path);
        assert!(!cosmetic_segment_switch(&graph, &path, &lines, xa));
        assert!(admits(&graph, &path, &lines, xa));
    }

    #[test]
    fn riding_on_unchanged_raw_line_not_a_switch() {
        // Rule 4 needs a raw-label change; continuing on the same raw line
        // never triggers it.
        let mut builder = TransitGraph::builder();
        let x = builder.add_stop("x", "RER C 1", "X");
        let y = builder.add_stop("y", "RER C 1", "Y");
        let graph = builder.build();

        let path = vec![x];
        let lines = lines_of(&graph, &path);
        assert!(!cosmetic_segment_switch(&graph, &path, &lines, y));
    }
}

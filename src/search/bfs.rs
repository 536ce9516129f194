//! Fewest-hops search with deterministic tie-breaking.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::Graph;
use crate::path::Path;
use crate::types::{GraphError, GraphResult, Label, HOP_COST};

/// Find a path with the fewest edges from `start` to `end`.
///
/// Each segment records the child reached and the edge label used to reach
/// it, and costs `HOP_COST`. Children are discovered in ascending label
/// order and each is attached through the lexicographically first edge
/// label connecting it to its parent; the first discovery of a node wins.
///
/// Returns `Ok(None)` when `end` is unreachable and a zero-segment path
/// when `start == end`.
pub fn bfs<N: Label, E: Label>(
    graph: &Graph<N, E>,
    start: &N,
    end: &N,
) -> GraphResult<Option<Path<N, E>>> {
    require_endpoints(graph, start, end)?;

    let mut frontier: VecDeque<N> = VecDeque::new();
    let mut queued: HashSet<N> = HashSet::new();
    let mut explored: HashSet<N> = HashSet::new();
    let mut paths: HashMap<N, Path<N, E>> = HashMap::new();

    frontier.push_back(start.clone());
    queued.insert(start.clone());
    paths.insert(start.clone(), Path::new(start.clone()));

    while let Some(parent) = frontier.pop_front() {
        queued.remove(&parent);
        if &parent == end {
            log::debug!("bfs reached {} after exploring {} nodes", end, explored.len());
            return Ok(paths.remove(&parent));
        }

        let Some(parent_path) = paths.get(&parent).cloned() else {
            continue;
        };
        // `get_edges` is ordered by label, which gives the tie-break.
        let edges = graph.get_edges(&parent);

        for child in graph.get_children_labels(&parent) {
            if queued.contains(&child) || explored.contains(&child) || paths.contains_key(&child) {
                continue;
            }
            let Some(edge) = edges.iter().find(|e| graph.connects(e, &child)) else {
                continue;
            };
            let path = parent_path.extend_via(child.clone(), edge.label().clone(), HOP_COST)?;
            paths.insert(child.clone(), path);
            queued.insert(child.clone());
            frontier.push_back(child);
        }
        explored.insert(parent);
    }

    log::debug!("bfs found no path from {} to {}", start, end);
    Ok(None)
}

/// Both search endpoints must already be nodes of the graph.
pub(crate) fn require_endpoints<N: Label, E: Label>(
    graph: &Graph<N, E>,
    start: &N,
    end: &N,
) -> GraphResult<()> {
    for label in [start, end] {
        if !graph.contains(label)? {
            return Err(GraphError::UnknownNode(label.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn prefers_first_edge_label_between_same_pair() {
        let mut b: GraphBuilder<String, String> = GraphBuilder::new();
        b.nodes(["a", "b"]).link("a", "b", "zeta").link("a", "b", "alpha");
        let g = b.build().unwrap();

        let path = bfs(&g, &"a".to_string(), &"b".to_string()).unwrap().unwrap();
        let hop = path.segments().next().unwrap();
        assert_eq!(hop.edge(), "alpha");
        assert_eq!(path.cost(), 1.0);
    }

    #[test]
    fn unreachable_is_none() {
        let mut b: GraphBuilder<String, String> = GraphBuilder::new();
        b.nodes(["a", "b"]).link("b", "a", "back");
        let g = b.build().unwrap();
        assert!(bfs(&g, &"a".to_string(), &"b".to_string()).unwrap().is_none());
    }
}

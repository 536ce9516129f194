//! Minimum-cost search over graphs whose edge labels are costs.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::graph::Graph;
use crate::path::Path;
use crate::types::{Cost, GraphResult, Label};

use super::bfs::require_endpoints;

/// A queued partial path. The heap pops the cheapest path first and,
/// among equal costs, the one pushed earliest.
struct Candidate<N> {
    path: Path<N>,
    seq: u64,
}

impl<N> PartialEq for Candidate<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Candidate<N> {}

impl<N> PartialOrd for Candidate<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Candidate<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .path
            .cmp_cost(&self.path)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Find a minimum-cost path from `start` to `end`.
///
/// When `end` is unreachable this returns the zero-segment path from
/// `start`, exactly as for `start == end`; use `dijkstra_checked` to tell
/// the two apart.
pub fn dijkstra<N: Label, E: Label + Cost>(
    graph: &Graph<N, E>,
    start: &N,
    end: &N,
) -> GraphResult<Path<N>> {
    Ok(dijkstra_checked(graph, start, end)?.unwrap_or_else(|| Path::new(start.clone())))
}

/// Like `dijkstra`, but returns `Ok(None)` when no path exists.
pub fn dijkstra_checked<N: Label, E: Label + Cost>(
    graph: &Graph<N, E>,
    start: &N,
    end: &N,
) -> GraphResult<Option<Path<N>>> {
    require_endpoints(graph, start, end)?;

    let mut queue: BinaryHeap<Candidate<N>> = BinaryHeap::new();
    let mut finalized: HashSet<N> = HashSet::new();
    let mut seq: u64 = 0;

    queue.push(Candidate {
        path: Path::new(start.clone()),
        seq,
    });

    while let Some(Candidate { path, .. }) = queue.pop() {
        let current = path.end().clone();
        if &current == end {
            log::debug!(
                "dijkstra reached {} at cost {:.3} after finalizing {} nodes",
                end,
                path.cost(),
                finalized.len()
            );
            return Ok(Some(path));
        }
        if finalized.contains(&current) {
            continue;
        }

        // Stale entries for finalized nodes are skipped on pop, not pruned here.
        for edge in graph.get_edges(&current) {
            for neighbor in graph.get_nodes(edge) {
                if neighbor.label() == &current {
                    continue;
                }
                seq += 1;
                queue.push(Candidate {
                    path: path.extend(neighbor.label().clone(), edge.label().cost())?,
                    seq,
                });
            }
        }
        finalized.insert(current);
    }

    log::debug!("dijkstra found no path from {} to {}", start, end);
    Ok(None)
}

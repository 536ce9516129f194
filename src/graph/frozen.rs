//! Read-only, shareable view of a fully built graph.

use std::ops::Deref;
use std::sync::Arc;

use crate::types::Label;

use super::Graph;

/// A graph that no longer accepts mutation.
///
/// Cloning is cheap and every clone reads the same store, so a frozen graph
/// can be handed to any number of threads running searches at once.
#[derive(Debug)]
pub struct FrozenGraph<N, E> {
    inner: Arc<Graph<N, E>>,
}

impl<N: Label, E: Label> FrozenGraph<N, E> {
    pub(crate) fn new(graph: Graph<N, E>) -> Self {
        log::debug!(
            "froze graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Self {
            inner: Arc::new(graph),
        }
    }

    /// Number of handles sharing this snapshot.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Recover a mutable graph, copying the store only if other handles are alive.
    pub fn thaw(self) -> Graph<N, E> {
        Arc::try_unwrap(self.inner).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<N, E> Clone for FrozenGraph<N, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<N, E> Deref for FrozenGraph<N, E> {
    type Target = Graph<N, E>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<N, E> AsRef<Graph<N, E>> for FrozenGraph<N, E> {
    fn as_ref(&self) -> &Graph<N, E> {
        &self.inner
    }
}

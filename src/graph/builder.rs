//! Fluent API for building Graph instances.

use crate::types::{GraphResult, Label};

use super::Graph;

enum PendingEdge<N, E> {
    Directed { src: N, dst: N, label: E, unique: bool },
    Bidirectional { src: N, dst: N, label: E, unique: bool },
    SingleSource { src: N, label: E, unique: bool },
}

/// Fluent builder for constructing a Graph.
///
/// Nodes are inserted before edges regardless of call order, so edges may
/// be declared before their endpoints. Validation happens in `build`.
pub struct GraphBuilder<N, E> {
    nodes: Vec<N>,
    edges: Vec<PendingEdge<N, E>>,
}

impl<N: Label, E: Label> GraphBuilder<N, E> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node.
    pub fn node(&mut self, label: impl Into<N>) -> &mut Self {
        self.nodes.push(label.into());
        self
    }

    /// Add several nodes.
    pub fn nodes<I, L>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = L>,
        L: Into<N>,
    {
        self.nodes.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Add a directed edge.
    pub fn link(&mut self, src: impl Into<N>, dst: impl Into<N>, label: impl Into<E>) -> &mut Self {
        self.edges.push(PendingEdge::Directed {
            src: src.into(),
            dst: dst.into(),
            label: label.into(),
            unique: false,
        });
        self
    }

    /// Add a unique directed edge.
    pub fn link_unique(
        &mut self,
        src: impl Into<N>,
        dst: impl Into<N>,
        label: impl Into<E>,
    ) -> &mut Self {
        self.edges.push(PendingEdge::Directed {
            src: src.into(),
            dst: dst.into(),
            label: label.into(),
            unique: true,
        });
        self
    }

    /// Add a bidirectional edge.
    pub fn link_both(
        &mut self,
        src: impl Into<N>,
        dst: impl Into<N>,
        label: impl Into<E>,
    ) -> &mut Self {
        self.edges.push(PendingEdge::Bidirectional {
            src: src.into(),
            dst: dst.into(),
            label: label.into(),
            unique: false,
        });
        self
    }

    /// Add a unique bidirectional edge.
    pub fn link_both_unique(
        &mut self,
        src: impl Into<N>,
        dst: impl Into<N>,
        label: impl Into<E>,
    ) -> &mut Self {
        self.edges.push(PendingEdge::Bidirectional {
            src: src.into(),
            dst: dst.into(),
            label: label.into(),
            unique: true,
        });
        self
    }

    /// Attach a node to a shared edge label.
    pub fn attach(&mut self, src: impl Into<N>, label: impl Into<E>) -> &mut Self {
        self.edges.push(PendingEdge::SingleSource {
            src: src.into(),
            label: label.into(),
            unique: false,
        });
        self
    }

    /// Attach a node to an edge of its own.
    pub fn attach_unique(&mut self, src: impl Into<N>, label: impl Into<E>) -> &mut Self {
        self.edges.push(PendingEdge::SingleSource {
            src: src.into(),
            label: label.into(),
            unique: true,
        });
        self
    }

    /// Build the final Graph. Fails on the first invalid node or edge.
    pub fn build(self) -> GraphResult<Graph<N, E>> {
        let mut graph = Graph::new();
        for label in self.nodes {
            graph.add_node(label)?;
        }
        for edge in self.edges {
            match edge {
                PendingEdge::Directed {
                    src,
                    dst,
                    label,
                    unique: false,
                } => graph.add_edge(src, dst, label)?,
                PendingEdge::Directed {
                    src,
                    dst,
                    label,
                    unique: true,
                } => graph.add_unique_edge(src, dst, label)?,
                PendingEdge::Bidirectional {
                    src,
                    dst,
                    label,
                    unique: false,
                } => graph.add_bidirectional_edge(src, dst, label)?,
                PendingEdge::Bidirectional {
                    src,
                    dst,
                    label,
                    unique: true,
                } => graph.add_unique_bidirectional_edge(src, dst, label)?,
                PendingEdge::SingleSource {
                    src,
                    label,
                    unique: false,
                } => graph.add_single_source_edge(src, label)?,
                PendingEdge::SingleSource {
                    src,
                    label,
                    unique: true,
                } => graph.add_unique_single_source_edge(src, label)?,
            }
        }
        Ok(graph)
    }
}

impl<N: Label, E: Label> Default for GraphBuilder<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

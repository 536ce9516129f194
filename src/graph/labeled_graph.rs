//! Core graph structure: labeled nodes and edges with a dual index.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::types::{Edge, GraphError, GraphResult, Label, Node};

use super::FrozenGraph;

/// A mutable, labeled multigraph.
///
/// Two indexes are kept in step: every node maps to the edges incident to
/// it, and every edge maps to the nodes it leads to. All mutation goes
/// through the `add_*` methods, each of which validates its arguments
/// before touching either index.
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    /// Node -> incident edges (outgoing for directed edges).
    nodes: HashMap<Node<N>, HashSet<Edge<E>>>,
    /// Edge -> endpoint nodes.
    edges: HashMap<Edge<E>, HashSet<Node<N>>>,
}

impl<N: Label, E: Label> Graph<N, E> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node. Adding a label that is already present is a no-op.
    pub fn add_node(&mut self, label: N) -> GraphResult<()> {
        check_label(&label)?;
        if !self.nodes.contains_key(&label) {
            log::debug!("add node {}", label);
            self.nodes.insert(Node::new(label), HashSet::new());
        }
        Ok(())
    }

    /// Add a directed edge from `src` to `dst`. Re-adding an identical
    /// non-unique edge is a no-op.
    pub fn add_edge(&mut self, src: N, dst: N, label: E) -> GraphResult<()> {
        self.insert_directed(src, dst, label, false)
    }

    /// Add a directed edge that never merges with another edge of the same label.
    pub fn add_unique_edge(&mut self, src: N, dst: N, label: E) -> GraphResult<()> {
        self.insert_directed(src, dst, label, true)
    }

    /// Add an edge registered at both endpoints.
    pub fn add_bidirectional_edge(&mut self, src: N, dst: N, label: E) -> GraphResult<()> {
        self.insert_bidirectional(src, dst, label, false)
    }

    /// Add a bidirectional edge that never merges with another edge of the same label.
    pub fn add_unique_bidirectional_edge(&mut self, src: N, dst: N, label: E) -> GraphResult<()> {
        self.insert_bidirectional(src, dst, label, true)
    }

    /// Attach `src` to a shared edge label with no fixed destination.
    ///
    /// Every node attached to the same non-unique label becomes reachable
    /// from every other one through that edge.
    pub fn add_single_source_edge(&mut self, src: N, label: E) -> GraphResult<()> {
        self.insert_single_source(src, label, false)
    }

    /// Attach `src` to an edge of its own, unreachable from other nodes.
    pub fn add_unique_single_source_edge(&mut self, src: N, label: E) -> GraphResult<()> {
        self.insert_single_source(src, label, true)
    }

    fn insert_directed(&mut self, src: N, dst: N, label: E, unique: bool) -> GraphResult<()> {
        check_label(&label)?;
        self.require_node(&src)?;
        self.require_node(&dst)?;

        let edge = Edge::new(label, unique, src == dst);
        log::debug!(
            "add edge {} from {} to {} (unique: {}, self-loop: {})",
            edge,
            src,
            dst,
            unique,
            edge.is_self_loop()
        );
        self.attach(&src, edge.clone());
        self.edges.entry(edge).or_default().insert(Node::new(dst));
        Ok(())
    }

    fn insert_bidirectional(&mut self, src: N, dst: N, label: E, unique: bool) -> GraphResult<()> {
        check_label(&label)?;
        self.require_node(&src)?;
        self.require_node(&dst)?;

        let edge = Edge::new(label, unique, false);
        log::debug!(
            "add bidirectional edge {} between {} and {} (unique: {})",
            edge,
            src,
            dst,
            unique
        );
        self.attach(&src, edge.clone());
        self.attach(&dst, edge.clone());
        let endpoints = self.edges.entry(edge).or_default();
        endpoints.insert(Node::new(src));
        endpoints.insert(Node::new(dst));
        Ok(())
    }

    fn insert_single_source(&mut self, src: N, label: E, unique: bool) -> GraphResult<()> {
        check_label(&label)?;
        self.require_node(&src)?;

        let edge = Edge::new(label, unique, false);
        log::debug!("attach {} to edge {} (unique: {})", src, edge, unique);
        self.attach(&src, edge.clone());
        self.edges.entry(edge).or_default().insert(Node::new(src));
        Ok(())
    }

    /// Register `edge` in the incident set of an already-validated node.
    fn attach(&mut self, label: &N, edge: Edge<E>) {
        if let Some(incident) = self.nodes.get_mut(label) {
            incident.insert(edge);
        }
    }

    fn require_node(&self, label: &N) -> GraphResult<()> {
        check_label(label)?;
        if self.nodes.contains_key(label) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(label.to_string()))
        }
    }

    /// Whether a node with this label exists. Fails only for absent labels.
    pub fn contains(&self, label: &N) -> GraphResult<bool> {
        check_label(label)?;
        Ok(self.nodes.contains_key(label))
    }

    /// All node labels in ascending order.
    pub fn list_node_labels(&self) -> Vec<N> {
        let mut labels: Vec<N> = self.nodes.keys().map(|n| n.label().clone()).collect();
        labels.sort();
        labels
    }

    /// Render every `child(edge)` pair reachable in one hop from `label`,
    /// sorted as strings.
    ///
    /// A self-loop edge pairs a node only with itself; any other edge never
    /// pairs a node with itself.
    pub fn list_children(&self, label: &N) -> Vec<String> {
        let mut children = Vec::new();
        let Some(incident) = self.nodes.get(label) else {
            return children;
        };
        for edge in incident {
            for child in self.endpoints(edge) {
                if (child.label() == label) == edge.is_self_loop() {
                    children.push(format!("{}({})", child, edge));
                }
            }
        }
        children.sort();
        children
    }

    /// Labels of the edges incident to a node.
    pub fn get_edge_labels(&self, label: &N) -> BTreeSet<E> {
        self.nodes
            .get(label)
            .map(|incident| incident.iter().map(|e| e.label().clone()).collect())
            .unwrap_or_default()
    }

    /// Labels of the nodes a shared (non-unique) edge leads to.
    pub fn get_node_labels(&self, edge_label: &E) -> BTreeSet<N> {
        self.get_nodes(&Edge::shared(edge_label.clone()))
            .into_iter()
            .map(|n| n.label().clone())
            .collect()
    }

    /// Labels of every node one hop away from `label`, excluding itself.
    pub fn get_children_labels(&self, label: &N) -> BTreeSet<N> {
        let mut children = BTreeSet::new();
        if let Some(incident) = self.nodes.get(label) {
            for edge in incident {
                for node in self.endpoints(edge) {
                    if node.label() != label {
                        children.insert(node.label().clone());
                    }
                }
            }
        }
        children
    }

    /// Edges incident to a node, in edge order (label first).
    pub fn get_edges(&self, label: &N) -> Vec<&Edge<E>> {
        let mut edges: Vec<&Edge<E>> = self
            .nodes
            .get(label)
            .map(|incident| incident.iter().collect())
            .unwrap_or_default();
        edges.sort();
        edges
    }

    /// Endpoint nodes of an edge, in label order.
    pub fn get_nodes(&self, edge: &Edge<E>) -> Vec<&Node<N>> {
        let mut nodes: Vec<&Node<N>> = self.endpoints(edge).collect();
        nodes.sort();
        nodes
    }

    /// Whether `edge` leads to the node labeled `label`.
    pub fn connects(&self, edge: &Edge<E>, label: &N) -> bool {
        self.edges
            .get(edge)
            .is_some_and(|endpoints| endpoints.contains(label))
    }

    fn endpoints<'a>(&'a self, edge: &Edge<E>) -> impl Iterator<Item = &'a Node<N>> + 'a {
        self.edges.get(edge).into_iter().flatten()
    }

    /// Verify that both indexes reference only entries the other one holds.
    pub fn is_consistent(&self) -> bool {
        let edges_indexed = self
            .nodes
            .values()
            .flatten()
            .all(|edge| self.edges.contains_key(edge));
        let nodes_indexed = self
            .edges
            .values()
            .flatten()
            .all(|node| self.nodes.contains_key(node));
        let no_absent = self.nodes.keys().all(|n| !n.label().is_absent())
            && self.edges.keys().all(|e| !e.label().is_absent());
        edges_indexed && nodes_indexed && no_absent
    }

    /// Stop accepting mutation and share the graph read-only.
    pub fn freeze(self) -> FrozenGraph<N, E> {
        FrozenGraph::new(self)
    }
}

impl<N: Label, E: Label> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_label<L: Label>(label: &L) -> GraphResult<()> {
    if label.is_absent() {
        return Err(GraphError::InvalidArgument(format!(
            "label must not be absent: {:?}",
            label
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_nodes() -> Graph<String, String> {
        let mut g = Graph::new();
        g.add_node("n1".to_string()).unwrap();
        g.add_node("n2".to_string()).unwrap();
        g
    }

    #[test]
    fn rejected_edge_leaves_graph_untouched() {
        let mut g = two_nodes();
        let err = g
            .add_edge("n1".into(), "missing".into(), "e".into())
            .unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode(ref n) if n == "missing"));
        assert_eq!(g.edge_count(), 0);
        assert!(g.get_edges(&"n1".to_string()).is_empty());
        assert!(g.is_consistent());
    }

    #[test]
    fn directed_edge_is_indexed_against_destination() {
        let mut g = two_nodes();
        g.add_edge("n1".into(), "n2".into(), "e".into()).unwrap();
        let edges = g.get_edges(&"n1".to_string());
        assert_eq!(edges.len(), 1);
        let nodes = g.get_nodes(edges[0]);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].label(), "n2");
        assert!(g.get_edges(&"n2".to_string()).is_empty());
    }

    #[test]
    fn self_loop_only_pairs_with_itself() {
        let mut g = two_nodes();
        g.add_edge("n1".into(), "n1".into(), "loop".into()).unwrap();
        assert_eq!(g.list_children(&"n1".to_string()), vec!["n1(loop)"]);
        assert!(g.get_children_labels(&"n1".to_string()).is_empty());
    }
}

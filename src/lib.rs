//! pathgraph: a labeled multigraph with deterministic path search.
//!
//! Nodes and edges are identified by caller-supplied labels. Edges may be
//! directed, bidirectional, or attached to a single node and shared by
//! label; unique edges never merge with identically labeled ones. Two
//! searches run over the graph: a fewest-hops BFS that breaks ties by edge
//! label, and a minimum-cost Dijkstra over edges whose labels are costs.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod graph;
pub mod path;
pub mod search;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{DriverConfig, ScriptMode};
pub use dataset::{CampusMap, HeroAppearance};
pub use graph::{FrozenGraph, Graph, GraphBuilder};
pub use path::{Path, Segment};
pub use search::{bfs, dijkstra, dijkstra_checked};
pub use types::{
    Cost, Edge, GraphError, GraphResult, Label, Node, Point, Weight, HOP_COST, SHARED_EDGE_ID,
};

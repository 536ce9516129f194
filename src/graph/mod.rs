//! In-memory labeled graph store.

pub mod builder;
pub mod frozen;
pub mod labeled_graph;

pub use builder::GraphBuilder;
pub use frozen::FrozenGraph;
pub use labeled_graph::Graph;

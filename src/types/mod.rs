//! All data types for the pathgraph library.

pub mod edge;
pub mod error;
pub mod label;
pub mod node;
pub mod point;
pub mod weight;

pub use edge::{Edge, SHARED_EDGE_ID};
pub use error::{GraphError, GraphResult};
pub use label::Label;
pub use node::Node;
pub use point::Point;
pub use weight::{Cost, Weight};

/// Cost charged per hop by the unweighted search.
pub const HOP_COST: f64 = 1.0;

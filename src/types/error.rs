//! Error types for the pathgraph library.

use thiserror::Error;

/// All errors that can occur in the pathgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge or search referenced a node that is not in the graph.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// A caller supplied an absent label or otherwise unusable argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A segment or edge cost was NaN, infinite, or negative.
    #[error("cost must be finite and non-negative: {0}")]
    InvalidCost(f64),

    /// A script referenced a graph name that was never created.
    #[error("unknown graph: {0}")]
    UnknownGraph(String),

    /// A campus query named a building that is not in the dataset.
    #[error("unknown building: {0}")]
    UnknownBuilding(String),

    /// A script command was given the wrong number of arguments.
    #[error("Bad arguments to {command}: [{}]", .arguments.join(", "))]
    BadArguments {
        command: String,
        arguments: Vec<String>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed dataset record.
    #[error("dataset error: {0}")]
    Dataset(#[from] csv::Error),

    /// Malformed configuration file.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience result type for pathgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;

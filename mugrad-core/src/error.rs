use thiserror::Error;

/// Custom error type for the mugrad engine.
///
/// Graph construction and the backward pass never fail; these variants cover
/// checked lookups, configuration, and the neural-network helpers built on top.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MugradError {
    #[error("Unknown node: id {id} is out of range for a graph of {len} nodes")]
    UnknownNode { id: usize, len: usize },

    #[error("Foreign node: id {id} was issued by another graph")]
    ForeignNode { id: usize },

    #[error("Input arity mismatch: expected {expected}, got {actual} during operation {operation}")]
    InputArity {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Cannot compute {operation} over an empty list of nodes")]
    EmptyInput { operation: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

use thiserror::Error;

/// Custom error type for the micrograd workspace.
///
/// Shared by the engine, the network layer and the data crate so that a whole
/// forward/backward/training cycle can be driven with `?`.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MicrogradError {
    #[error("Domain error in {operation}: input {value} is outside the domain of the operation")]
    Domain { operation: String, value: f64 },

    #[error("Unknown node {id}: graph only holds {len} nodes")]
    UnknownNode { id: usize, len: usize },

    #[error("Node {id} is not a leaf; only leaf values can be overwritten")]
    NotALeaf { id: usize },

    #[error("Input size mismatch in {operation}: expected {expected}, got {actual}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("CSV parse error at line {line}, column {column}: {message}")]
    CsvParse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

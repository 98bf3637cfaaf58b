//! Unified error types for the vector arena
//!
//! Every fallible operation in the store, the math primitives and the
//! tournament engine returns [`ArenaError`]. "Not found" is never an error:
//! lookups against an empty store return `None`.

/// Main error type for vector arena operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArenaError {
    /// Vector dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Cosine similarity against a vector with zero norm
    #[error("Zero magnitude vector: cosine similarity is undefined")]
    ZeroMagnitude,

    /// Tournament requested on an arena with no warriors
    #[error("Empty population: the arena has no warriors")]
    EmptyPopulation,

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for vector arena operations
pub type Result<T> = std::result::Result<T, ArenaError>;

impl ArenaError {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

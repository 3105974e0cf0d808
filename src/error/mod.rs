//! Error handling for the merkle chain
//!
//! This module provides the error types shared by batching, tree building,
//! input loading and configuration.

use std::fmt;

/// Result type alias for merkle chain operations
pub type Result<T> = std::result::Result<T, BlockchainError>;

/// Error types for merkle chain operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockchainError {
    /// File I/O errors
    Io(String),
    /// Configuration errors
    Config(String),
    /// Serialization/deserialization errors (JSON reports, TOML config)
    Serialization(String),
    /// A transaction record could not be parsed
    InvalidTransaction { line: usize, reason: String },
    /// Indexed access past the end of a container
    IndexOutOfBounds { index: usize, len: usize },
    /// Removal or access on an empty container
    EmptyContainer(&'static str),
}

impl fmt::Display for BlockchainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockchainError::Io(msg) => write!(f, "I/O error: {msg}"),
            BlockchainError::Config(msg) => write!(f, "Configuration error: {msg}"),
            BlockchainError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            BlockchainError::InvalidTransaction { line, reason } => {
                write!(f, "Invalid transaction on line {line}: {reason}")
            }
            BlockchainError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {index} out of bounds (len: {len})")
            }
            BlockchainError::EmptyContainer(what) => write!(f, "{what} is empty"),
        }
    }
}

impl std::error::Error for BlockchainError {}

impl From<std::io::Error> for BlockchainError {
    fn from(err: std::io::Error) -> Self {
        BlockchainError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BlockchainError {
    fn from(err: serde_json::Error) -> Self {
        BlockchainError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for BlockchainError {
    fn from(err: toml::de::Error) -> Self {
        BlockchainError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BlockchainError::InvalidTransaction {
            line: 3,
            reason: "expected 4 fields, found 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid transaction on line 3: expected 4 fields, found 2"
        );

        let err = BlockchainError::IndexOutOfBounds { index: 5, len: 2 };
        assert_eq!(err.to_string(), "Index 5 out of bounds (len: 2)");

        let err = BlockchainError::EmptyContainer("transaction pool");
        assert_eq!(err.to_string(), "transaction pool is empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: BlockchainError = io.into();
        assert!(matches!(err, BlockchainError::Io(msg) if msg.contains("missing.txt")));
    }
}

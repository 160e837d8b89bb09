//! Error types for chainseal.

use std::fmt;

/// Errors that can occur while chunking, building, or verifying a chain.
#[derive(Debug)]
pub enum ChainError {
    /// An I/O error occurred while reading input data.
    Io(std::io::Error),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The chain builder was given zero blocks.
    ///
    /// A chain over nothing has no authentication meaning, so this is
    /// rejected rather than producing a digest of the empty sequence.
    EmptyInput,

    /// A block arrived out of order during verification.
    ///
    /// The verifier cannot reorder or buffer blocks; the session is
    /// permanently failed once this is returned.
    OutOfOrder {
        /// The index the verifier expected next.
        expected: u64,
        /// The index the received block carried.
        got: u64,
    },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::Io(e) => write!(f, "io error: {}", e),
            ChainError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            ChainError::EmptyInput => write!(f, "cannot build a chain over zero blocks"),
            ChainError::OutOfOrder { expected, got } => {
                write!(f, "out-of-order block: expected index {}, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for ChainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChainError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChainError {
    fn from(e: std::io::Error) -> Self {
        ChainError::Io(e)
    }
}

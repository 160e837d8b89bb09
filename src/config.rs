//! Configuration for the chain's block layout.
//!
//! - [`ChainConfig`] - Block size shared by builder and verifier

use crate::error::ChainError;

/// Default block size (1 KiB).
///
/// Every block except the last has exactly this many content bytes. Builder
/// and verifier must agree on the value; it is not carried in the blocks
/// themselves.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Configuration for splitting a file into blocks.
///
/// The block size applies to raw content; a distributed non-final block is
/// 32 bytes longer on the wire because it carries its successor's digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainConfig {
    block_size: usize,
}

impl ChainConfig {
    /// Creates a new configuration.
    ///
    /// Returns an error if `block_size` is zero.
    pub fn new(block_size: usize) -> Result<Self, ChainError> {
        if block_size == 0 {
            return Err(ChainError::InvalidConfig {
                message: "block size must be non-zero",
            });
        }
        Ok(Self { block_size })
    }

    /// Returns the block size in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), ChainError> {
        Self::new(self.block_size).map(|_| ())
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ChainConfig::default();
        assert_eq!(config.block_size(), 1024);
    }

    #[test]
    fn test_valid() {
        let config = ChainConfig::new(512).unwrap();
        assert_eq!(config.block_size(), 512);
    }

    #[test]
    fn test_invalid_zero() {
        assert!(ChainConfig::new(0).is_err());
    }

    #[test]
    fn test_non_power_of_two_is_fine() {
        // Block sizes are arbitrary positive lengths, not power-of-2 bound.
        assert!(ChainConfig::new(1000).is_ok());
        assert!(ChainConfig::new(1).is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(ChainConfig::default().validate().is_ok());
    }
}

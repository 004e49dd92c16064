//! Configuration errors for the block count.

use thiserror::Error;

use crate::types::{MAX_NUM_BLOCKS, MIN_NUM_BLOCKS};

/// Rejected session configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("block count {0} is outside {min}..={max}", min = MIN_NUM_BLOCKS, max = MAX_NUM_BLOCKS)]
    BlockCountOutOfRange(usize),
    #[error("block count can only change while no session is running")]
    SessionActive,
}

/// Check a block count against the allowed range.
pub fn validate_num_blocks(n: usize) -> Result<usize, ConfigError> {
    if (MIN_NUM_BLOCKS..=MAX_NUM_BLOCKS).contains(&n) {
        Ok(n)
    } else {
        Err(ConfigError::BlockCountOutOfRange(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_bounds() {
        assert_eq!(validate_num_blocks(1), Ok(1));
        assert_eq!(validate_num_blocks(20), Ok(20));
    }

    #[test]
    fn rejects_zero_and_too_many() {
        assert_eq!(
            validate_num_blocks(0),
            Err(ConfigError::BlockCountOutOfRange(0))
        );
        assert_eq!(
            validate_num_blocks(21),
            Err(ConfigError::BlockCountOutOfRange(21))
        );
    }

    #[test]
    fn messages_name_the_range() {
        let msg = ConfigError::BlockCountOutOfRange(0).to_string();
        assert!(msg.contains("1..=20"), "{msg}");
    }
}

//! Array configuration parameters.

use crate::error::ArrayError;

/// Configuration for a [`DualPrecisionArray`](crate::DualPrecisionArray).
///
/// Controls how materialization splits its copy across the rayon pool.
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Minimum array length for a parallel materialization.
    ///
    /// Shorter arrays are copied on the calling thread. Default: 65_536.
    pub parallel_threshold: usize,

    /// Smallest number of elements a single rayon task copies.
    ///
    /// Default: 4096. Must be non-zero.
    pub min_chunk_len: usize,
}

impl ArrayConfig {
    /// Default parallel threshold (512KB of heads).
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 65_536;

    /// Default minimum chunk length per rayon task.
    pub const DEFAULT_MIN_CHUNK_LEN: usize = 4096;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
            min_chunk_len: Self::DEFAULT_MIN_CHUNK_LEN,
        }
    }

    /// A config that always materializes on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::new()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.min_chunk_len == 0 {
            return Err(ArrayError::InvalidConfig {
                reason: "min_chunk_len must be non-zero".into(),
            });
        }
        Ok(())
    }

    /// Whether an array of `len` elements is materialized in parallel.
    pub fn is_parallel_for(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(ArrayConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_chunk_len_rejected() {
        let config = ArrayConfig {
            min_chunk_len: 0,
            ..ArrayConfig::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ArrayError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn sequential_never_goes_parallel() {
        let config = ArrayConfig::sequential();
        assert!(!config.is_parallel_for(usize::MAX - 1));
    }

    #[test]
    fn threshold_is_inclusive() {
        let config = ArrayConfig {
            parallel_threshold: 10,
            min_chunk_len: 1,
        };
        assert!(!config.is_parallel_for(9));
        assert!(config.is_parallel_for(10));
    }
}

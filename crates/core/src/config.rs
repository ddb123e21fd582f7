//! Core runtime configuration.
//!
//! Configuration is resolved once by the caller and passed into the list helpers that need it.
//! Nothing in this crate reads environment variables.

use crate::constants::LINEAR_SCAN_THRESHOLD;

/// Errors returned when constructing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Tuning for de-duplicated bulk insertion.
///
/// The threshold only selects between two equivalent strategies. It never changes which
/// items end up in the list or in what order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DedupConfig {
    linear_scan_threshold: usize,
}

impl DedupConfig {
    /// Create a new `DedupConfig`.
    ///
    /// `linear_scan_threshold` is the largest combined count (existing list length plus
    /// candidate count) handled by linear scans. It must be at least 1.
    pub fn new(linear_scan_threshold: usize) -> Result<Self, ConfigError> {
        if linear_scan_threshold == 0 {
            return Err(ConfigError::InvalidInput(
                "linear_scan_threshold must be at least 1".into(),
            ));
        }

        Ok(Self {
            linear_scan_threshold,
        })
    }

    pub fn linear_scan_threshold(&self) -> usize {
        self.linear_scan_threshold
    }

    /// Returns true if a combined count of `combined` should use linear scans.
    pub fn use_linear_scan(&self, combined: usize) -> bool {
        combined <= self.linear_scan_threshold
    }
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            linear_scan_threshold: LINEAR_SCAN_THRESHOLD,
        }
    }
}

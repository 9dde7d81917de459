//! High-level configuration API

use crate::algorithm::Algorithm;
use crate::error::{ApiError, Result};

/// Default ceiling for the result-cache hint.
pub const DEFAULT_MAX_CACHE_SIZE: usize = 10_000;

/// Configuration for a [`Stemmer`](crate::Stemmer)
///
/// The cache size is a hint for callers that memoize results around the
/// stemmer; it never changes what a word stems to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// The stemming algorithm to run
    pub algorithm: Algorithm,
    /// Upper bound suggested for an external result cache
    pub max_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::English,
            max_cache_size: DEFAULT_MAX_CACHE_SIZE,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the algorithm by identifier
    pub fn algorithm(mut self, code: &str) -> Result<Self> {
        self.config.algorithm = Algorithm::from_code(code)?;
        Ok(self)
    }

    /// Override the result-cache hint; must be positive
    pub fn max_cache_size(mut self, size: usize) -> Self {
        self.config.max_cache_size = size;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.max_cache_size == 0 {
            return Err(ApiError::InvalidCacheSize { size: 0 });
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.algorithm, Algorithm::English);
        assert_eq!(config.max_cache_size, DEFAULT_MAX_CACHE_SIZE);
    }

    #[test]
    fn builder_accepts_valid_settings() {
        let config = Config::builder()
            .algorithm("eng")
            .unwrap()
            .max_cache_size(50_000)
            .build()
            .unwrap();
        assert_eq!(config.algorithm, Algorithm::English);
        assert_eq!(config.max_cache_size, 50_000);
    }

    #[test]
    fn builder_rejects_zero_cache_size() {
        let err = Config::builder().max_cache_size(0).build().unwrap_err();
        assert_eq!(err, ApiError::InvalidCacheSize { size: 0 });
    }

    #[test]
    fn builder_rejects_unknown_algorithm() {
        assert!(Config::builder().algorithm("porter").is_err());
    }
}

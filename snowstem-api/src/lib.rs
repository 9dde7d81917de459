//! Public API for Porter2 English stemming
//!
//! This crate provides a clean, stable interface over the pure algorithm in
//! `snowstem-core`: a [`Stemmer`] facade with one-word and batch entry
//! points, construction-time validation of the requested algorithm, and the
//! module-level [`algorithms`] and [`version`] accessors.
//!
//! # Example
//!
//! ```rust
//! use snowstem_api::Stemmer;
//!
//! let stemmer = Stemmer::new("english")?;
//! assert_eq!(stemmer.stem_word("consistently"), "consist");
//! assert_eq!(
//!     stemmer.stem_words(["skies", "caresses"]),
//!     vec!["sky", "caress"],
//! );
//! # Ok::<(), snowstem_api::ApiError>(())
//! ```

#![warn(missing_docs)]

pub mod algorithm;
pub mod config;
pub mod error;

use tracing::debug;

// Re-export key types
pub use algorithm::Algorithm;
pub use config::{Config, ConfigBuilder, DEFAULT_MAX_CACHE_SIZE};
pub use error::{ApiError, Result};

/// Names of the available stemming algorithms
pub fn algorithms() -> &'static [&'static str] {
    &["english"]
}

/// Version of the stemming module as a whole
pub fn version() -> &'static str {
    "1.0.0"
}

/// Legacy single-function entry point, removed in 1.0.0.
///
/// This always fails with [`ApiError::RemovedApi`]; construct a [`Stemmer`]
/// and call [`Stemmer::stem_word`] instead.
#[deprecated(since = "1.0.0", note = "construct a Stemmer and call stem_word()")]
pub fn stem(_word: &str) -> Result<String> {
    Err(ApiError::RemovedApi)
}

/// An instance of a stemming algorithm
///
/// Construction validates the algorithm identifier; stemming itself is
/// infallible and referentially transparent, so instances are cheap, `Send`,
/// `Sync`, and freely shareable.
#[derive(Debug, Clone)]
pub struct Stemmer {
    config: Config,
}

impl Stemmer {
    /// Create a stemmer for the given algorithm identifier.
    ///
    /// Accepts the canonical name `"english"` or the ISO 639 codes `"eng"`
    /// and `"en"`; anything else is [`ApiError::UnknownAlgorithm`].
    pub fn new(algorithm: &str) -> Result<Self> {
        let config = Config::builder().algorithm(algorithm)?.build()?;
        Self::with_config(config)
    }

    /// Create a stemmer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        if config.max_cache_size == 0 {
            return Err(ApiError::InvalidCacheSize { size: 0 });
        }
        debug!(
            algorithm = %config.algorithm,
            max_cache_size = config.max_cache_size,
            "created stemmer"
        );
        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the configured algorithm
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    /// Stem a single word.
    ///
    /// Words of two bytes or fewer are returned unchanged; any other input
    /// produces a deterministic stem. There is no failure mode.
    pub fn stem_word(&self, word: &str) -> String {
        snowstem_core::stem(word)
    }

    /// Stem a sequence of words, preserving input order.
    pub fn stem_words<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| self.stem_word(word.as_ref()))
            .collect()
    }

    /// Stem a batch in parallel, preserving input order.
    ///
    /// A thin order-preserving map over independent pure calls; results are
    /// identical to [`Stemmer::stem_words`].
    #[cfg(feature = "parallel")]
    pub fn stem_words_parallel<S>(&self, words: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        words
            .par_iter()
            .map(|word| self.stem_word(word.as_ref()))
            .collect()
    }
}

impl Default for Stemmer {
    fn default() -> Self {
        Self {
            config: Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_accessors() {
        assert_eq!(algorithms(), &["english"]);
        assert_eq!(version(), "1.0.0");
    }

    #[test]
    fn removed_entry_point_always_fails() {
        #[allow(deprecated)]
        let result = stem("stemming");
        assert_eq!(result, Err(ApiError::RemovedApi));
    }

    #[test]
    fn default_stemmer_is_english() {
        let stemmer = Stemmer::default();
        assert_eq!(stemmer.algorithm(), Algorithm::English);
        assert_eq!(stemmer.config().max_cache_size, DEFAULT_MAX_CACHE_SIZE);
    }
}

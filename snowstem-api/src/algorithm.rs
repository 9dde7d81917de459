//! Algorithm identifier for the API

use crate::error::{ApiError, Result};
use std::fmt;

/// Supported stemming algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// The Porter2 (Snowball) English stemmer
    #[default]
    English,
}

impl Algorithm {
    /// Resolve an algorithm from its canonical name or ISO 639 code.
    ///
    /// Matching is exact and case-sensitive: `"english"`, `"eng"`, and
    /// `"en"` are the only accepted identifiers.
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "english" | "eng" | "en" => Ok(Algorithm::English),
            _ => Err(ApiError::UnknownAlgorithm {
                code: code.to_string(),
            }),
        }
    }

    /// The 2-letter ISO 639 code
    pub fn code(&self) -> &'static str {
        match self {
            Algorithm::English => "en",
        }
    }

    /// The canonical algorithm name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::English => "english",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

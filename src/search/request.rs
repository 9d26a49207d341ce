//! Search Request Module
//!
//! The normalized, immutable parameters of one search.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result count used when none (or zero) is given
pub const DEFAULT_MAX_RESULTS: u32 = 5;

// == Search Depth ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    Basic,
    #[default]
    Advanced,
}

impl SearchDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchDepth::Basic => "basic",
            SearchDepth::Advanced => "advanced",
        }
    }

    /// Parses a raw depth. Anything other than exactly `basic` or `advanced`
    /// maps to the default; the flag reports whether that fallback happened.
    pub fn normalize(raw: &str) -> (Self, bool) {
        match raw {
            "basic" => (SearchDepth::Basic, false),
            "advanced" => (SearchDepth::Advanced, false),
            _ => (SearchDepth::default(), true),
        }
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Search Request ==
/// Query, depth and result count after normalization.
///
/// Warnings produced while normalizing travel with the request so the
/// caller that executes it can surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    depth: SearchDepth,
    max_results: u32,
    warnings: Vec<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, search_depth: &str, max_results: u32) -> Self {
        let mut warnings = Vec::new();

        let (depth, fell_back) = SearchDepth::normalize(search_depth);
        if fell_back {
            warnings.push(format!(
                "Invalid search_depth '{}' received. Defaulting to '{}'.",
                search_depth, depth
            ));
        }

        let max_results = if max_results == 0 {
            warnings.push(format!(
                "Invalid max_results 0 received. Defaulting to {}.",
                DEFAULT_MAX_RESULTS
            ));
            DEFAULT_MAX_RESULTS
        } else {
            max_results
        };

        Self {
            query: query.into(),
            depth,
            max_results,
            warnings,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn depth(&self) -> SearchDepth {
        self.depth
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

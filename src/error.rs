// src/error.rs
// =============================================================================
// This file defines the error type for README generation.
//
// There are exactly two ways a generation request can fail from the user's
// point of view:
// - The URL they gave us isn't a GitHub repository URL (InvalidUrl)
// - GitHub couldn't give us the repository data we need (Upstream)
//
// A missing or broken package.json is deliberately NOT an error - the
// aggregator degrades to an empty dependency set instead (see
// src/github/aggregate.rs).
//
// Rust concepts:
// - Enums: Types that can be one of several variants
// - thiserror: Derives std::error::Error and Display for us
// - #[source]: Chains the underlying cause so callers can inspect it
// =============================================================================

use crate::github::ApiError;
use thiserror::Error;

// The error type returned by the generation pipeline
//
// #[derive(Error)] (from thiserror) generates the Display and Error impls
// from the #[error("...")] attributes below
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The input string doesn't contain a github.com/<owner>/<repo> pattern
    #[error("not a valid GitHub repository URL: {0}")]
    InvalidUrl(String),

    /// One of the two required GitHub API calls (repository metadata or
    /// root listing) failed. The cause is kept for logging but the
    /// user-facing message stays generic.
    #[error("failed to fetch repository data from GitHub")]
    Upstream(#[source] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_upstream_keeps_cause() {
        let err = GenerateError::Upstream(ApiError::NotFound);
        // The user-facing message is generic...
        assert_eq!(err.to_string(), "failed to fetch repository data from GitHub");
        // ...but the underlying cause is still reachable via source()
        let cause = err.source().expect("should have a source");
        assert_eq!(cause.to_string(), "repository or path not found");
    }

    #[test]
    fn test_invalid_url_names_the_input() {
        let err = GenerateError::InvalidUrl("ftp://nope".to_string());
        assert!(err.to_string().contains("ftp://nope"));
    }
}

// src/github/url.rs
// =============================================================================
// This module parses GitHub URLs into an (owner, repo) identifier.
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - https://github.com/owner/repo/tree/main (extra path segments ignored)
//   - github.com/owner/repo
//
// Anything that doesn't contain the github.com/<owner>/<repo> pattern is
// rejected with GenerateError::InvalidUrl before we touch the network.
//
// Rust concepts:
// - &str slicing and splitting: To extract path segments
// - Result: For error handling
// - Ownership: We return owned Strings because the identifier outlives the input
// =============================================================================

use crate::error::GenerateError;

/// A repository identifier: who owns it and what it's called.
///
/// Both fields are guaranteed non-empty - the parser never produces a
/// half-filled identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

// Parses a GitHub URL to extract owner and repository name
//
// Example:
//   "https://github.com/rust-lang/rust" -> RepoId { owner: "rust-lang", name: "rust" }
//
// A segment ends at '/', '?' or '#', so deep links and query strings don't
// leak into the repository name. A trailing ".git" suffix is stripped so
// clone URLs work too.
pub fn parse_repo_url(url: &str) -> Result<RepoId, GenerateError> {
    let invalid = || GenerateError::InvalidUrl(url.to_string());

    // Find the host anywhere in the string, so scheme and www. prefixes
    // don't matter
    let index = url.find("github.com/").ok_or_else(invalid)?;
    let path = &url[index + "github.com/".len()..];

    // The next two path segments are owner and repo
    let mut segments = path.split(|c| c == '/' || c == '?' || c == '#');
    let owner = segments.next().unwrap_or("");
    let name = segments.next().unwrap_or("");

    // Remove .git suffix if present
    let name = name.strip_suffix(".git").unwrap_or(name);

    if owner.is_empty() || name.is_empty() {
        return Err(invalid());
    }

    Ok(RepoId {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_url() {
        let id = parse_repo_url("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(id.owner, "rust-lang");
        assert_eq!(id.name, "rust");
    }

    #[test]
    fn test_parse_url_with_git_suffix() {
        let id = parse_repo_url("https://github.com/user/repo.git").unwrap();
        assert_eq!(id.owner, "user");
        assert_eq!(id.name, "repo");
    }

    #[test]
    fn test_parse_url_without_scheme() {
        let id = parse_repo_url("github.com/user/repo").unwrap();
        assert_eq!(id.owner, "user");
        assert_eq!(id.name, "repo");
    }

    #[test]
    fn test_parse_url_with_deep_path() {
        // Extra path segments belong to the repo page, not the repo name
        let id = parse_repo_url("https://github.com/user/repo/tree/main/src").unwrap();
        assert_eq!(id.name, "repo");
    }

    #[test]
    fn test_parse_url_with_query_string() {
        let id = parse_repo_url("https://github.com/user/repo?tab=readme-ov-file").unwrap();
        assert_eq!(id.name, "repo");
    }

    #[test]
    fn test_reject_non_github_url() {
        let result = parse_repo_url("https://gitlab.com/user/repo");
        assert!(matches!(result, Err(GenerateError::InvalidUrl(_))));
    }

    #[test]
    fn test_reject_url_without_repo() {
        let result = parse_repo_url("https://github.com/user");
        assert!(matches!(result, Err(GenerateError::InvalidUrl(_))));
    }

    #[test]
    fn test_reject_url_with_empty_owner() {
        let result = parse_repo_url("https://github.com//repo");
        assert!(matches!(result, Err(GenerateError::InvalidUrl(_))));
    }

    #[test]
    fn test_reject_bare_git_suffix() {
        // ".git" alone leaves an empty repo name behind
        let result = parse_repo_url("https://github.com/user/.git");
        assert!(matches!(result, Err(GenerateError::InvalidUrl(_))));
    }
}

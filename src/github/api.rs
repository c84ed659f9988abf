// src/github/api.rs
// =============================================================================
// This module is our client for the GitHub REST API.
//
// We only consume two endpoints:
// - GET /repos/{owner}/{repo}           -> repository metadata
// - GET /repos/{owner}/{repo}/contents/{path}
//     - for a directory path: a JSON array of entries
//     - for a file path: a single object with base64-encoded content
//
// Why the API and not raw.githubusercontent.com?
// - We need metadata (description, clone URL, license), not just file bodies
// - The contents endpoint gives us the root listing in one call
// - Anonymous access is enough for occasional use; a token raises the limits
//
// Rust concepts:
// - async functions: For network I/O
// - serde derive: Deserializes API JSON straight into our structs
// - #[serde(untagged)]: One endpoint, two response shapes
// =============================================================================

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use super::url::RepoId;

/// Base URL of the GitHub REST API. Tests point the client elsewhere.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// The dependency manifest we look for at the repository root.
pub const MANIFEST_PATH: &str = "package.json";

// Repository metadata as returned by GET /repos/{owner}/{repo}
//
// The API sends dozens of fields; serde simply ignores the ones we don't
// declare. Everything we consume downstream is listed here.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoMetadata {
    /// Repository name (without the owner prefix)
    pub name: String,
    /// Free-form description, often missing
    pub description: Option<String>,
    /// HTTPS URL suitable for `git clone`
    pub clone_url: String,
    /// License info, missing for unlicensed repositories
    pub license: Option<License>,
}

/// License info nested inside the repository metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct License {
    /// Human-readable license name (e.g., "MIT License")
    pub name: String,
}

// The coarse kind of a directory entry
//
// GitHub reports "file", "dir", "symlink" or "submodule". We only care
// about the first two; #[serde(other)] folds everything else into Other
// instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    #[serde(other)]
    Other,
}

/// One item in a directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    /// Path relative to the repository root
    pub path: String,
    /// Coarse kind: file, dir, or something we ignore
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// A single file's payload from the contents endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FileContent {
    /// The file body, encoded per `encoding` (GitHub wraps base64 in newlines)
    pub content: String,
    /// Encoding of `content` - "base64" for regular files
    pub encoding: String,
}

// The contents endpoint returns either shape depending on what the path
// points at. #[serde(untagged)] tries each variant in order: a JSON array
// deserializes as Listing, an object as File.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Contents {
    Listing(Vec<ContentEntry>),
    File(FileContent),
}

// What can go wrong talking to the API
//
// We keep the interesting cases (not found, rate limited) as their own
// variants so callers can log something meaningful, even though the
// user-facing message upstream stays generic.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("repository or path not found")]
    NotFound,

    #[error("GitHub API rate limit exceeded (try again later or pass --token)")]
    RateLimited,

    #[error("GitHub API returned HTTP {0}")]
    Http(StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("the provided API token contains invalid characters")]
    InvalidToken,
}

// A thin wrapper around reqwest::Client with GitHub-specific defaults
//
// Client is cheap to clone (it's reference-counted internally), but one
// instance per run is all we need - it pools connections for the two or
// three requests we make.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    base_url: String,
}

impl GithubClient {
    /// Creates a client against the real GitHub API.
    ///
    /// Pass a token for authenticated requests (5000 requests/hour instead
    /// of 60); anonymous access works without one.
    pub fn new(token: Option<&str>) -> Result<Self, ApiError> {
        Self::with_base_url(GITHUB_API_BASE, token)
    }

    /// Creates a client against an arbitrary base URL (used by tests).
    pub fn with_base_url(base_url: &str, token: Option<&str>) -> Result<Self, ApiError> {
        // The API rejects requests without a User-Agent, and asks for this
        // Accept header to pin the response format
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::InvalidToken)?;
            // Keep the token out of debug output
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .user_agent(concat!("readme-forge/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10)) // 10 second timeout per request
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches repository metadata: GET /repos/{owner}/{repo}
    pub async fn get_repository(&self, id: &RepoId) -> Result<RepoMetadata, ApiError> {
        let url = format!("{}/repos/{}/{}", self.base_url, id.owner, id.name);
        self.get_json(&url).await
    }

    /// Fetches the contents at a path: GET /repos/{owner}/{repo}/contents/{path}
    ///
    /// An empty path means the repository root, which comes back as a
    /// (non-recursive) directory listing.
    pub async fn get_contents(&self, id: &RepoId, path: &str) -> Result<Contents, ApiError> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url, id.owner, id.name, path
        );
        self.get_json(&url).await
    }

    // Shared GET-and-deserialize helper for both endpoints
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        // The 'json' feature on reqwest deserializes the body for us
        Ok(response.json().await?)
    }
}

// Maps a non-success HTTP status to our error taxonomy
//
// GitHub signals rate limiting with 403 (secondary limits) or 429; both
// carry the same advice for the user.
fn status_error(status: StatusCode) -> ApiError {
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        other => ApiError::Http(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_not_found() {
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND),
            ApiError::NotFound
        ));
    }

    #[test]
    fn test_status_error_rate_limited() {
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN),
            ApiError::RateLimited
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS),
            ApiError::RateLimited
        ));
    }

    #[test]
    fn test_status_error_other() {
        match status_error(StatusCode::INTERNAL_SERVER_ERROR) {
            ApiError::Http(status) => assert_eq!(status.as_u16(), 500),
            other => panic!("expected Http variant, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_repo_metadata() {
        // A trimmed-down version of a real /repos/{owner}/{repo} response;
        // unknown fields like stargazers_count are simply ignored
        let json = r#"{
            "name": "demo",
            "full_name": "owner/demo",
            "description": "A demo",
            "clone_url": "https://github.com/owner/demo.git",
            "stargazers_count": 42,
            "license": { "key": "mit", "name": "MIT License" }
        }"#;
        let metadata: RepoMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.name, "demo");
        assert_eq!(metadata.description.as_deref(), Some("A demo"));
        assert_eq!(metadata.clone_url, "https://github.com/owner/demo.git");
        assert_eq!(metadata.license.unwrap().name, "MIT License");
    }

    #[test]
    fn test_deserialize_metadata_without_optional_fields() {
        let json = r#"{
            "name": "demo",
            "description": null,
            "clone_url": "https://github.com/owner/demo.git",
            "license": null
        }"#;
        let metadata: RepoMetadata = serde_json::from_str(json).unwrap();
        assert!(metadata.description.is_none());
        assert!(metadata.license.is_none());
    }

    #[test]
    fn test_deserialize_directory_listing() {
        let json = r#"[
            { "path": "index.js", "type": "file" },
            { "path": "src", "type": "dir" },
            { "path": "vendored", "type": "submodule" }
        ]"#;
        let contents: Contents = serde_json::from_str(json).unwrap();
        match contents {
            Contents::Listing(entries) => {
                assert_eq!(entries.len(), 3);
                assert_eq!(entries[0].kind, EntryKind::File);
                assert_eq!(entries[1].kind, EntryKind::Dir);
                // Unknown kinds fold into Other instead of failing
                assert_eq!(entries[2].kind, EntryKind::Other);
            }
            Contents::File(_) => panic!("expected a listing"),
        }
    }

    #[test]
    fn test_deserialize_file_payload() {
        let json = r#"{
            "path": "package.json",
            "type": "file",
            "content": "eyJuYW1lIjoiZGVtbyJ9\n",
            "encoding": "base64"
        }"#;
        let contents: Contents = serde_json::from_str(json).unwrap();
        match contents {
            Contents::File(file) => {
                assert_eq!(file.encoding, "base64");
                assert!(file.content.starts_with("eyJ"));
            }
            Contents::Listing(_) => panic!("expected a file payload"),
        }
    }
}

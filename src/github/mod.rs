// src/github/mod.rs
// =============================================================================
// This module handles everything GitHub-specific.
//
// Submodules:
// - url: Parses repository URLs into an (owner, name) identifier
// - api: The REST API client and the response types it deserializes
// - aggregate: Fetches metadata + listing + manifest concurrently
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod aggregate;
mod api;
mod url;

// Re-export public items from submodules
// This lets users write `github::aggregate()` instead of
// `github::aggregate::aggregate()`
pub use aggregate::{aggregate, AggregatedData, DependencySet};
pub use api::{
    ApiError, ContentEntry, Contents, EntryKind, FileContent, GithubClient, License,
    RepoMetadata, GITHUB_API_BASE, MANIFEST_PATH,
};
pub use url::{parse_repo_url, RepoId};

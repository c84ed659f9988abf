// src/github/aggregate.rs
// =============================================================================
// This module gathers everything the composer needs, in one concurrent burst.
//
// Per repository we make three requests:
// 1. Repository metadata        (required - failure aborts the run)
// 2. Root directory listing     (required - failure aborts the run)
// 3. package.json at the root   (best effort - failure means "no dependencies")
//
// All three are dispatched at once with tokio::join!, so the total latency
// is one round trip, not three. There are no retries anywhere: required
// data either arrives or the run fails, and the optional manifest either
// parses or quietly contributes nothing.
//
// Rust concepts:
// - tokio::join!: Runs several futures concurrently and waits for all
// - Result fallback: match Ok/Err to turn a failure into a default value
// - serde(default): Missing JSON keys become empty collections
// =============================================================================

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

use crate::error::GenerateError;
use crate::github::api::{Contents, ContentEntry, EntryKind, GithubClient, RepoMetadata, MANIFEST_PATH};
use crate::github::url::RepoId;

/// The merged dependency map: package name -> version specifier.
///
/// serde_json's map preserves insertion order (the 'preserve_order' cargo
/// feature), so the keys stay in manifest order: runtime dependencies
/// first, then devDependencies that weren't already present.
pub type DependencySet = serde_json::Map<String, serde_json::Value>;

/// Everything the composer consumes, gathered for a single repository.
#[derive(Debug, Clone)]
pub struct AggregatedData {
    pub metadata: RepoMetadata,
    pub contents: Vec<ContentEntry>,
    pub dependencies: DependencySet,
}

// The two top-level groups we read out of package.json
//
// #[serde(default)] means an absent group contributes an empty map rather
// than a parse error - plenty of manifests only have one of the two.
#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: DependencySet,
    #[serde(rename = "devDependencies", default)]
    dev_dependencies: DependencySet,
}

// Fetches metadata, root listing and dependency manifest for a repository
//
// Metadata and listing are mandatory: if either call fails, the whole
// aggregation fails with GenerateError::Upstream and no partial result.
// The manifest is optional: any failure on that path (404, submodule or
// directory at the path, bad base64, broken JSON) collapses to an empty
// dependency set and the run carries on.
pub async fn aggregate(client: &GithubClient, id: &RepoId) -> Result<AggregatedData, GenerateError> {
    // Fire all three requests concurrently and wait for every outcome.
    // join! (unlike try_join!) lets us treat the manifest result
    // differently from the mandatory pair.
    let (metadata, listing, manifest) = tokio::join!(
        client.get_repository(id),
        client.get_contents(id, ""),
        client.get_contents(id, MANIFEST_PATH),
    );

    let metadata = metadata.map_err(GenerateError::Upstream)?;

    // The root of a repository always lists as a directory; if the API
    // ever hands us a file payload here we treat it as an empty listing
    let entries = match listing.map_err(GenerateError::Upstream)? {
        Contents::Listing(entries) => entries,
        Contents::File(_) => Vec::new(),
    };
    let contents = normalize_entries(entries);

    // Explicit fallback boundary: a manifest is nice to have, not required
    let dependencies = match manifest
        .map_err(anyhow::Error::from)
        .and_then(|contents| dependencies_from_manifest(&contents))
    {
        Ok(dependencies) => dependencies,
        Err(e) => {
            eprintln!("  Note: no usable package.json ({e:#})");
            DependencySet::new()
        }
    };

    Ok(AggregatedData {
        metadata,
        contents,
        dependencies,
    })
}

// Keeps only files and directories from a listing
//
// Submodules, symlinks and anything the API grows in the future are
// dropped here so the composer never sees them.
fn normalize_entries(entries: Vec<ContentEntry>) -> Vec<ContentEntry> {
    entries
        .into_iter()
        .filter(|entry| matches!(entry.kind, EntryKind::File | EntryKind::Dir))
        .collect()
}

// Turns a contents payload into the merged dependency map
//
// Fails (and the caller swallows it) when the payload isn't a base64 file
// or the decoded text isn't valid package.json.
fn dependencies_from_manifest(contents: &Contents) -> Result<DependencySet> {
    let file = match contents {
        Contents::File(file) => file,
        Contents::Listing(_) => return Err(anyhow!("manifest path is a directory")),
    };

    if file.encoding != "base64" {
        return Err(anyhow!("unexpected content encoding '{}'", file.encoding));
    }

    let text = decode_base64_text(&file.content).context("could not decode manifest content")?;
    let manifest: PackageManifest =
        serde_json::from_str(&text).context("could not parse manifest JSON")?;

    Ok(merge_dependencies(manifest))
}

// Decodes a base64 payload into UTF-8 text
//
// The contents endpoint wraps base64 in newlines every 60 characters, so
// strip all whitespace before decoding.
fn decode_base64_text(payload: &str) -> Result<String> {
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

// Merges the two dependency groups into one map
//
// Runtime dependencies come first; devDependencies are inserted after, so
// on a name collision the dev version string wins (last write) while the
// key keeps its original position.
fn merge_dependencies(manifest: PackageManifest) -> DependencySet {
    let mut merged = manifest.dependencies;
    for (name, version) in manifest.dev_dependencies {
        merged.insert(name, version);
    }
    merged
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is tokio::join!?
//    - Runs several futures at the same time and waits for all of them
//    - Like Promise.all() in JavaScript, except nothing short-circuits:
//      every future runs to completion and you get every Result back
//    - That's exactly what we want here, because the manifest result is
//      handled differently from the two required ones
//
// 2. Why match on the manifest Result instead of using ??
//    - ? would turn a missing package.json into a failed run
//    - The match makes the fallback visible: Ok -> use it, Err -> empty map
//    - Silent degradation should look deliberate in the code, not like a
//      forgotten error path
//
// 3. What is and_then?
//    - Chains a second fallible step onto a Result
//    - result.and_then(f) runs f only when result is Ok
//    - Here: "if the fetch worked, try to decode and parse it"
//
// 4. What does #[serde(default)] do?
//    - Uses Default::default() when the JSON key is missing
//    - For a map field that means "absent group = empty map"
// -----------------------------------------------------------------------------

// src/readme/compose.rs
// =============================================================================
// This module turns aggregated repository data into the final README text.
//
// Design:
// - One small builder function per section
// - Each builder looks only at the aggregated data and returns
//   Option<String>: Some(block) to include the section, None to skip it
// - compose() runs the builders in a fixed order and joins the blocks
//
// Because every builder is a pure function of its input, composing the
// same data twice always produces byte-identical output - there's no
// clock, no randomness, no I/O anywhere in this file.
//
// Rust concepts:
// - Option<String>: A section that may or may not exist
// - Iterators: flatten() drops the Nones, join() glues the blocks
// - String building: format! and push_str
// =============================================================================

use crate::github::{AggregatedData, ContentEntry, DependencySet, RepoMetadata};

// Composes the README from aggregated repository data
//
// Section order is fixed: title, description, technologies, structure,
// setup, environment variables, license. Sections with nothing to say are
// omitted entirely rather than emitted empty.
pub fn compose(data: &AggregatedData) -> String {
    let sections = [
        Some(title_section(&data.metadata)),
        Some(description_section(&data.metadata)),
        technologies_section(&data.dependencies),
        Some(structure_section(&data.contents)),
        Some(setup_section(&data.metadata, &data.dependencies)),
        environment_section(&data.contents),
        license_section(&data.metadata),
    ];

    let blocks: Vec<String> = sections.into_iter().flatten().collect();
    let mut document = blocks.join("\n\n");
    document.push('\n');
    document
}

fn title_section(metadata: &RepoMetadata) -> String {
    format!("# {}", metadata.name)
}

// The repository description, or a fixed fallback line
fn description_section(metadata: &RepoMetadata) -> String {
    match &metadata.description {
        Some(description) if !description.trim().is_empty() => description.clone(),
        _ => "No description provided.".to_string(),
    }
}

// One bullet per dependency name, in manifest order
//
// Only the package names are listed - version specifiers are an install
// detail the README doesn't need.
fn technologies_section(dependencies: &DependencySet) -> Option<String> {
    if dependencies.is_empty() {
        return None;
    }

    let mut section = String::from(
        "## Technologies Used\n\nThis project uses the following technologies:\n",
    );
    for name in dependencies.keys() {
        section.push_str(&format!("\n- {name}"));
    }
    Some(section)
}

// A fenced block with one path per line, in the order GitHub returned them
fn structure_section(contents: &[ContentEntry]) -> String {
    let mut section = String::from("## Project Structure\n\n```\n");
    for entry in contents {
        section.push_str(&entry.path);
        section.push('\n');
    }
    section.push_str("```");
    section
}

// Clone step always; install step only when there's something to install
//
// The "2." is literal text, not a counter - when the install step is
// skipped nothing gets renumbered because there's nothing after it.
fn setup_section(metadata: &RepoMetadata, dependencies: &DependencySet) -> String {
    let mut section = format!(
        "## Setup Instructions\n\n1. Clone the repository:\n\n```bash\ngit clone {}\n```",
        metadata.clone_url
    );

    if !dependencies.is_empty() {
        section.push_str("\n\n2. Install dependencies:\n\n```bash\nnpm install\n```");
    }

    section
}

// Lists every entry whose path starts with ".env" (.env, .env.local, ...)
fn environment_section(contents: &[ContentEntry]) -> Option<String> {
    let env_paths: Vec<&str> = contents
        .iter()
        .map(|entry| entry.path.as_str())
        .filter(|path| path.starts_with(".env"))
        .collect();

    if env_paths.is_empty() {
        return None;
    }

    let mut section = String::from(
        "## Environment Variables\n\nThe following environment files are present in the project:\n",
    );
    for path in env_paths {
        section.push_str(&format!("\n- {path}"));
    }
    Some(section)
}

fn license_section(metadata: &RepoMetadata) -> Option<String> {
    let license = metadata.license.as_ref()?;
    Some(format!(
        "## License\n\nThis project is licensed under the {} - see the LICENSE file for details.",
        license.name
    ))
}

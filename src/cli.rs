// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Option<T>: For arguments the user may leave out
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "readme-forge",
    version = "0.1.0",
    about = "A CLI tool that generates a README.md for a GitHub repository",
    long_about = "readme-forge looks up a public GitHub repository, reads its metadata, \
                  file listing and package.json (if any), and assembles a ready-to-commit \
                  README.md from what it finds."
)]
pub struct Cli {
    /// GitHub repository URL (e.g., https://github.com/user/repo)
    ///
    /// This is a positional argument (required, no flag needed)
    pub repo_url: String,

    /// Write the generated README to this file instead of stdout
    ///
    /// This is an optional flag: --output README.md (or -o README.md)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Output the result as JSON ({"readme": "..."}) instead of plain markdown
    ///
    /// This is an optional flag: --json
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub json: bool,

    /// GitHub API token for authenticated requests (higher rate limits)
    ///
    /// Falls back to the GITHUB_TOKEN environment variable when not given.
    /// Anonymous access works fine for occasional use.
    #[arg(long)]
    pub token: Option<String>,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 2. Why Option<PathBuf> instead of PathBuf?
//    - Option represents a value that might not exist
//    - The user doesn't have to pass --output, so the field may be None
//    - PathBuf is the owned filesystem-path type (like String but for paths)
//
// 3. What does 'pub' mean?
//    - pub = public, meaning other modules can use this
//    - Without pub, items are private to this module
//
// 4. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
// -----------------------------------------------------------------------------

// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Parse the repository URL and aggregate data from the GitHub API
// 3. Compose the README and print it (or write it to a file)
// 4. Exit with proper code (0 = success, 1 = bad input, 2 = upstream error)
//
// Rust concepts used:
// - async/await: Because we make several network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle the different failure kinds
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod error;    // src/error.rs - the pipeline's error type
mod github;   // src/github/ - URL parsing, API client, data aggregation
mod readme;   // src/readme/ - README composition

// Import items we need from our modules
use cli::Cli;
use clap::Parser; // Parser trait enables the parse() method
use error::GenerateError;
use github::GithubClient;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};
use std::error::Error as _; // for source() on GenerateError

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {e:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = README generated
//   Ok(1) = the URL wasn't a GitHub repository URL
//   Ok(2) = GitHub couldn't give us the data
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // --token wins over the environment variable
    let token = cli
        .token
        .clone()
        .or_else(|| std::env::var("GITHUB_TOKEN").ok());

    eprintln!("🔍 Analyzing GitHub repository: {}", cli.repo_url);

    let client = GithubClient::new(token.as_deref())?;

    match generate_readme(&client, &cli.repo_url).await {
        Ok(document) => {
            emit(&cli, &document)?;
            Ok(0)
        }
        Err(e @ GenerateError::InvalidUrl(_)) => {
            eprintln!("❌ {e}");
            Ok(1)
        }
        Err(e) => {
            eprintln!("❌ {e}");
            // The generic message above is all the user needs; the real
            // cause still lands on stderr for debugging
            if let Some(cause) = e.source() {
                eprintln!("   Caused by: {cause}");
            }
            Ok(2)
        }
    }
}

// The whole pipeline: URL -> identifier -> aggregated data -> document
//
// Parameters:
//   client: the GitHub API client (shared, cheap to borrow)
//   repo_url: GitHub repository URL (e.g., "https://github.com/user/repo")
async fn generate_readme(client: &GithubClient, repo_url: &str) -> Result<String, GenerateError> {
    let id = github::parse_repo_url(repo_url)?;

    eprintln!("📦 Fetching data for {}/{}...", id.owner, id.name);
    let data = github::aggregate(client, &id).await?;

    eprintln!(
        "📄 Found {} top-level entries and {} dependencies",
        data.contents.len(),
        data.dependencies.len()
    );

    Ok(readme::compose(&data))
}

// Prints the document, wraps it in JSON, or writes it to a file
//
// The document itself goes to stdout so the output can be piped; all the
// progress chatter above goes to stderr.
fn emit(cli: &Cli, document: &str) -> Result<()> {
    if cli.json {
        // Same shape a web caller would expect: {"readme": "..."}
        let wrapped = serde_json::json!({ "readme": document });
        println!("{}", serde_json::to_string_pretty(&wrapped)?);
        return Ok(());
    }

    match &cli.output {
        Some(path) => {
            std::fs::write(path, document)
                .with_context(|| format!("could not write {}", path.display()))?;
            eprintln!("✅ Wrote README to {}", path.display());
        }
        None => {
            println!("{document}");
        }
    }

    Ok(())
}

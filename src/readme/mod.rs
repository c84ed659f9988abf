// src/readme/mod.rs
// =============================================================================
// This module builds the README document from aggregated repository data.
//
// Currently implements:
// - Section-by-section composition (title, description, technologies,
//   structure, setup, environment variables, license)
//
// The composer is a pure function: no network, no filesystem, no clock.
// Everything it needs arrives in the AggregatedData value, which keeps it
// trivially testable.
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod compose;

// Re-export the main function from compose.rs
pub use compose::compose;

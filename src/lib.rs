//! fast-setup creates new projects by copying a bundled template directory
//! and setting the package name in the copied `package.json`.

/// Command-line interface module for the fast-setup application
pub mod cli;

/// Command dispatch and the read-only `list` / `info` commands
pub mod commands;

/// Common constants
pub mod constants;

/// Error types and handling for the fast-setup application
pub mod error;

/// Project generation pipeline
/// Copies the template tree and patches `package.json`
pub mod generator;

pub mod logger;

/// Optional template descriptors (`meta.json`)
pub mod metadata;

/// User input and interaction handling
pub mod prompt;

/// Template lookup under the templates root
pub mod registry;

/// Console output formatting
pub mod reporter;

//! Error handling for fast-setup.
//! Defines the error type and result alias used throughout the application.

use colored::Colorize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Unexpected failures of a command.
///
/// Expected conditions such as an unknown template, an existing project
/// directory or a cancelled prompt are not errors; see
/// [`crate::generator::Outcome`].
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Represents JSON encoding and decoding failures outside of descriptors
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    /// Represents failures while walking a template tree
    #[error("{0}")]
    WalkError(#[from] walkdir::Error),

    /// Represents failures of the interactive prompt itself
    #[error("Prompt failed: {0}")]
    PromptError(String),

    /// The project directory would be created inside the template itself
    #[error("Cannot copy '{}' to a subdirectory of itself, '{}'", template.display(), target.display())]
    CopyIntoItselfError { template: PathBuf, target: PathBuf },

    /// The generated package manifest is valid JSON but not an object
    #[error("Cannot set the package name in '{}': manifest is not a JSON object", path.display())]
    InvalidManifestError { path: PathBuf },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints a critical error line to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", format!("\n✖ Critical Error: {err}").red());
    std::process::exit(1);
}

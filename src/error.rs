//! Error handling for avrkit.
//! Defines the error type and result alias shared by both utilities.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while emitting the IntelliSense configuration
/// or scaffolding a new project.
#[derive(Error, Debug)]
pub enum Error {
    /// The host operating system has no entry in the platform table.
    #[error("Unsupported platform: {platform}")]
    UnsupportedPlatform { platform: String },

    /// The project directory to scaffold is already present.
    #[error("{} already exists", target.display())]
    AlreadyExists { target: PathBuf },

    /// An override key has no `KEY = value` line in the build file.
    #[error("{key} not found in {}", file.display())]
    KeyNotFound { key: String, file: PathBuf },

    /// The template directory to copy from is missing.
    #[error("Template directory not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while serializing the configuration document
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors that occur while walking the template tree
    #[error("Walk error: {0}")]
    WalkError(#[from] walkdir::Error),

    /// Represents an invalid assignment pattern
    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    log::debug!("{:?}", err);
    eprintln!("{}", err);
    std::process::exit(1);
}

//! Error handling for the stencil application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for stencil operations.
///
/// Every variant is terminal for the current run: no failure is retried, and
/// `default_error_handler` maps each one to a non-zero process exit.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the template engine
    #[error("Render error: {0}")]
    RenderError(#[from] minijinja::Error),

    /// Represents errors that occur during user interaction
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// The target project directory already exists (hard precondition)
    #[error("target directory '{target_dir}' already exists")]
    TargetDirectoryExists { target_dir: String },

    /// Retrieving the template tree failed
    #[error("failed to fetch template from {source_desc}: {cause}")]
    FetchError {
        source_desc: String,
        #[source]
        cause: Box<Error>,
    },

    /// Represents errors raised by libgit2 during clone
    #[error("git error: {0}")]
    Git2Error(#[from] git2::Error),

    /// Reading, rendering or writing a specific project file failed
    #[error("failed to process '{file}': {cause}")]
    FileStageError {
        file: PathBuf,
        #[source]
        cause: Box<Error>,
    },

    /// Creating the hooks directory or writing the hook script failed
    #[error("failed to install pre-push hook: {0}")]
    HookInstallError(#[source] io::Error),
}

impl Error {
    /// Wraps an error as a file-stage failure for the given file.
    pub fn for_file<P: Into<PathBuf>>(file: P, cause: Error) -> Self {
        Error::FileStageError { file: file.into(), cause: Box::new(cause) }
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message and a generic failure summary to stderr and exits
/// with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{} {}", console::style("✘").red().bold(), console::style(&err).red());
    eprintln!("{}", console::style("project creation failed!").red().bold());
    std::process::exit(1);
}

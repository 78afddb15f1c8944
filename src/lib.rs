//! Stencil scaffolds a new backend service project from a remote template.
//! It collects a handful of answers, fetches the template tree, renders the
//! project files with the collected values and installs a pre-push git hook
//! that gates pushes on required environment variables.

/// Answer collection from prompts or stdin
pub mod answers;

/// Command-line interface module for the stencil application
pub mod cli;

/// Common constants: template location, required variables, CI command
pub mod constants;

/// Generation of the project `.env` file and handler pruning
pub mod envfile;

/// Error types and handling for the stencil application
pub mod error;

/// Template fetching from git repositories or the local filesystem
pub mod fetch;

/// Pre-push git hook installation
pub mod hook;

/// Core scaffolding orchestration
/// Combines all components to materialize the final project
pub mod pipeline;

/// Project data model: request, runtimes, template variants
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Template parsing and rendering functionality
/// Handles the actual placeholder substitution logic
pub mod render;

/// Terminal progress reporting for pipeline stages
pub mod ui;

//! User input and interaction handling.
//! Terminal prompting lives behind the [`Prompter`] trait so the answer
//! collection logic can be driven by scripted doubles in tests.

use crate::error::{Error, Result};
use dialoguer::{Input, Select};

/// Trait for interactive answer gathering.
pub trait Prompter {
    /// Asks for a free-text value; an empty response yields `default`.
    fn input(&self, help: &str, default: &str) -> Result<String>;

    /// Asks the user to pick one of `choices`, returning the chosen index.
    fn select(&self, help: &str, choices: &[&str], default: usize) -> Result<usize>;
}

/// Dialoguer-backed prompter used by the CLI.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, help: &str, default: &str) -> Result<String> {
        Input::new()
            .with_prompt(help)
            .default(default.to_string())
            .allow_empty(true)
            .show_default(!default.is_empty())
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, help: &str, choices: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(help)
            .default(default)
            .items(choices)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

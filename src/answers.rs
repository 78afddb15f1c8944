//! Answer collection for a scaffolding run.
//! Answers come either from interactive prompts or, with `--stdin`, from a
//! JSON object piped into the process; absent fields take the documented
//! defaults either way.

use crate::error::{Error, Result};
use crate::project::{ProjectRequest, Runtime, DEFAULT_BASE_PATH, DEFAULT_DOMAIN};
use crate::prompt::Prompter;
use log::{debug, warn};
use serde::Deserialize;
use std::io::Read;

/// Raw, possibly partial answers as supplied on stdin.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAnswers {
    pub description: Option<String>,
    pub domain: Option<String>,
    pub base_path: Option<String>,
    pub runtime: Option<String>,
}

/// Reads a JSON answers object from stdin.
///
/// Unparseable input degrades to an empty answer set so that defaults apply,
/// mirroring the interactive behavior on empty responses.
pub fn load_from_stdin() -> Result<RawAnswers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(parse_raw_answers(&buffer))
}

fn parse_raw_answers(buffer: &str) -> RawAnswers {
    match serde_json::from_str(buffer.trim()) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("ignoring unparseable answers on stdin: {}", e);
            RawAnswers::default()
        }
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

fn parse_runtime(value: &str) -> Runtime {
    if value.trim().is_empty() {
        return Runtime::default();
    }
    value.parse().unwrap_or_else(|e: String| {
        warn!("{}, falling back to '{}'", e, Runtime::default());
        Runtime::default()
    })
}

/// Collects a fully populated [`ProjectRequest`] for the given project name.
///
/// # Arguments
/// * `prompt` - Interactive prompter, consulted when no preloaded answers exist
/// * `name` - Target directory name from the command line
/// * `preloaded` - Answers read from stdin, taking precedence over prompting
///
/// # Errors
/// * `Error::PromptError` if terminal interaction fails; empty responses are
///   not an error and resolve to the defaults
pub fn collect_answers(
    prompt: &dyn Prompter,
    name: &str,
    preloaded: Option<RawAnswers>,
) -> Result<ProjectRequest> {
    let request = if let Some(raw) = preloaded {
        ProjectRequest {
            name: name.to_string(),
            description: raw.description.unwrap_or_default(),
            domain: or_default(raw.domain.unwrap_or_default(), DEFAULT_DOMAIN),
            base_path: or_default(raw.base_path.unwrap_or_default(), DEFAULT_BASE_PATH),
            runtime: parse_runtime(&raw.runtime.unwrap_or_default()),
        }
    } else {
        let description = prompt.input("enter a description (optional)", "")?;
        let domain = prompt.input(
            &format!("enter the domain you want to use [default: {}]", DEFAULT_DOMAIN),
            DEFAULT_DOMAIN,
        )?;
        let base_path = prompt.input(
            &format!(
                "enter the basePath for this service [default: {}]",
                DEFAULT_BASE_PATH
            ),
            DEFAULT_BASE_PATH,
        )?;
        let selection =
            prompt.select("select the runtime for this service", &Runtime::CHOICES, 0)?;
        let runtime = Runtime::CHOICES[selection].parse().map_err(Error::PromptError)?;

        ProjectRequest {
            name: name.to_string(),
            description,
            domain: or_default(domain, DEFAULT_DOMAIN),
            base_path: or_default(base_path, DEFAULT_BASE_PATH),
            runtime,
        }
    };

    if let Ok(json) = serde_json::to_string(&request) {
        debug!("collected answers: {}", json);
    }

    Ok(request)
}

//! Generation of the project `.env` file and runtime handler pruning.

use crate::error::{Error, Result};
use crate::project::{ProjectRequest, Runtime};
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Builds the `.env` entries for a request, in file order.
///
/// Credential keys are written as empty placeholders to be filled in by the
/// developer; domain, base path and runtime carry the collected answers.
pub fn env_entries(request: &ProjectRequest) -> IndexMap<&'static str, String> {
    let mut entries = IndexMap::new();
    entries.insert("DB_CONNECTION_STRING", String::new());
    entries.insert("AWS_ACCESS_KEY_ID", String::new());
    entries.insert("AWS_SECRET_ACCESS_KEY", String::new());
    entries.insert("DOMAIN", request.domain.clone());
    entries.insert("BASE_PATH", request.base_path.clone());
    entries.insert("RUNTIME", request.runtime.profile().identifier.to_string());
    entries
}

/// Writes `<project_dir>/.env` with single-quoted values.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the written file
pub fn write_env_file(project_dir: &Path, request: &ProjectRequest) -> Result<PathBuf> {
    let env_path = project_dir.join(".env");
    let content = env_entries(request)
        .iter()
        .map(|(key, value)| format!("{}='{}'", key, value))
        .collect::<Vec<_>>()
        .join("\n");

    debug!("writing '{}'", env_path.display());
    fs::write(&env_path, content + "\n")
        .map_err(|e| Error::for_file(&env_path, Error::IoError(e)))?;

    Ok(env_path)
}

/// Deletes the handler file of the runtime that was not selected.
///
/// A template that never shipped the other handler is left untouched.
pub fn prune_handlers(project_dir: &Path, runtime: Runtime) -> Result<()> {
    let discarded = project_dir.join(runtime.discarded_handler());
    match fs::remove_file(&discarded) {
        Ok(()) => {
            debug!("removed unused handler '{}'", discarded.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no handler to prune at '{}'", discarded.display());
            Ok(())
        }
        Err(e) => Err(Error::for_file(discarded, Error::IoError(e))),
    }
}

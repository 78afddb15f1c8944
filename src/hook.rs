//! Pre-push git hook installation.
//! The generated project gets a fixed shell script under `.git/hooks` that
//! refuses to push while any required environment variable is unset and
//! otherwise registers each one with the CI provider.

use crate::constants::{DEFAULT_CI_COMMAND, REQUIRED_ENV_VARS};
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Installs the pre-push hook into a materialized project.
///
/// The CI registration command is data, not logic, so tests can stub it out.
pub struct HookInstaller {
    ci_command: String,
}

impl HookInstaller {
    pub fn new<S: Into<String>>(ci_command: S) -> Self {
        Self { ci_command: ci_command.into() }
    }

    /// Builds the hook script text.
    ///
    /// One guard line per required variable: exit 1 when unset, otherwise
    /// register the value with the CI provider.
    pub fn script(&self) -> String {
        let mut script = String::from("#!/bin/bash\n# read config\nsource .env\n\n");
        for var in REQUIRED_ENV_VARS {
            script.push_str(&format!(
                "if [ -z ${{{var}}} ]; then echo \"{var} is unset\" && exit 1; else {ci} {var} ${{{var}}}; fi\n",
                var = var,
                ci = self.ci_command,
            ));
        }
        script
    }

    /// Writes `<project_dir>/.git/hooks/pre-push`, creating the hooks
    /// directory if absent, and marks the script executable for all users.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the installed hook
    pub fn install(&self, project_dir: &Path) -> Result<PathBuf> {
        let hooks_dir = project_dir.join(".git").join("hooks");
        fs::create_dir_all(&hooks_dir).map_err(Error::HookInstallError)?;

        let hook_path = hooks_dir.join("pre-push");
        debug!("installing pre-push hook at '{}'", hook_path.display());
        fs::write(&hook_path, self.script()).map_err(Error::HookInstallError)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&hook_path, fs::Permissions::from_mode(0o777))
                .map_err(Error::HookInstallError)?;
        }

        Ok(hook_path)
    }
}

impl Default for HookInstaller {
    fn default() -> Self {
        HookInstaller::new(DEFAULT_CI_COMMAND)
    }
}

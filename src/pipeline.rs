//! Core scaffolding orchestration.
//! Combines answer collection, template fetching, file rendering and hook
//! installation into one strictly sequential pipeline. Each stage is gated on
//! the previous one; the first failure aborts the run with no rollback of
//! files already written.

use crate::answers::{collect_answers, RawAnswers};
use crate::envfile;
use crate::error::{Error, Result};
use crate::fetch::{fetch_template, TemplateSource};
use crate::hook::HookInstaller;
use crate::project::TemplateVariant;
use crate::prompt::Prompter;
use crate::render::{render_file, TemplateRenderer};
use crate::ui;
use log::debug;
use std::path::PathBuf;

/// Orchestrates one scaffolding run.
pub struct Materializer<'a> {
    engine: &'a dyn TemplateRenderer,
    prompt: &'a dyn Prompter,
    source: TemplateSource,
    variant: TemplateVariant,
    hook: HookInstaller,
}

/// Checks the hard precondition that the target directory is free.
///
/// Runs before any prompt or filesystem mutation; an existing directory is a
/// terminal, unretriable failure.
fn ensure_target_free(name: &str) -> Result<PathBuf> {
    let project_dir = PathBuf::from(name);
    if project_dir.exists() {
        return Err(Error::TargetDirectoryExists { target_dir: name.to_string() });
    }
    Ok(project_dir)
}

impl<'a> Materializer<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        prompt: &'a dyn Prompter,
        source: TemplateSource,
        variant: TemplateVariant,
        hook: HookInstaller,
    ) -> Self {
        Self { engine, prompt, source, variant, hook }
    }

    /// Materializes the project directory `name`.
    ///
    /// # Flow
    /// 1. Checks that the target directory does not exist
    /// 2. Collects answers (prompting unless preloaded from stdin)
    /// 3. Fetches the template tree
    /// 4. Writes `.env` and prunes the unused runtime handler
    /// 5. Renders `package.json`, the deployment config, `README.md`
    /// 6. Installs the pre-push git hook
    pub fn materialize(&self, name: &str, preloaded: Option<RawAnswers>) -> Result<()> {
        let project_dir = ensure_target_free(name)?;
        let request = collect_answers(self.prompt, name, preloaded)?;

        ui::stage("downloading template", || {
            fetch_template(&self.source, &project_dir)
        })?;

        ui::stage("creating .env file", || {
            envfile::write_env_file(&project_dir, &request)?;
            if self.variant.multi_runtime {
                envfile::prune_handlers(&project_dir, request.runtime)?;
            }
            Ok(())
        })?;

        ui::stage("creating package.json file from template", || {
            render_file(
                self.engine,
                project_dir.join("package.json"),
                &request.package_context(),
            )
        })?;

        if let Some(deploy_config) = self.variant.deploy_config {
            ui::stage(&format!("creating {} file from template", deploy_config), || {
                render_file(
                    self.engine,
                    project_dir.join(deploy_config),
                    &request.deploy_context(),
                )
            })?;
        }

        ui::stage("creating README.md file from template", || {
            render_file(
                self.engine,
                project_dir.join("README.md"),
                &request.readme_context(),
            )
        })?;

        ui::stage("creating pre-push git hook", || {
            self.hook.install(&project_dir).map(|hook_path| {
                debug!("installed hook '{}'", hook_path.display());
            })
        })?;

        ui::report_success(&format!("project created successfully in '{}'", name));
        Ok(())
    }
}

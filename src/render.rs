//! Template parsing and rendering functionality.
//! Handles placeholder substitution in the fetched project files with support
//! for MiniJinja template processing.

use crate::error::{Error, Result};
use minijinja::Environment;
use std::fs;
use std::path::Path;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
///
/// Placeholders not present in the context resolve to an empty string
/// (MiniJinja's lenient undefined behavior), so rendering already-rendered
/// content is a no-op.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let env = Environment::new();
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::RenderError` if:
    ///   - Template addition fails
    ///   - Template retrieval fails
    ///   - Template rendering fails
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::RenderError)?;

        let tmpl = env.get_template("temp").map_err(Error::RenderError)?;

        tmpl.render(context).map_err(Error::RenderError)
    }
}

/// Renders a single project file in place.
///
/// Reads the file's current text, substitutes placeholders against `context`
/// and overwrites the file with the result. Any read, render or write failure
/// surfaces as a file-stage error naming the file.
pub fn render_file<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    path: P,
    context: &serde_json::Value,
) -> Result<()> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|e| Error::for_file(path, Error::IoError(e)))?;
    let rendered =
        engine.render(&content, context).map_err(|e| Error::for_file(path, e))?;
    fs::write(path, rendered).map_err(|e| Error::for_file(path, Error::IoError(e)))
}

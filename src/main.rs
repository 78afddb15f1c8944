//! Stencil's main application entry point and orchestration logic.
//! Handles command-line argument parsing, logger configuration and
//! coordinates the scaffolding pipeline.

use stencil::{
    answers::load_from_stdin,
    cli::{get_args, Cli, Command},
    error::{default_error_handler, Result},
    fetch::TemplateSource,
    hook::HookInstaller,
    pipeline::Materializer,
    project::TemplateVariant,
    prompt::DialoguerPrompter,
    render::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the template source (fixed remote by default)
/// 2. Loads preloaded answers from stdin when requested
/// 3. Hands the run to the materializer
fn run(args: Cli) -> Result<()> {
    match args.command {
        Command::Init { name, template, stdin } => {
            let engine = MiniJinjaRenderer::new();
            let prompt = DialoguerPrompter::new();

            let preloaded = if stdin { Some(load_from_stdin()?) } else { None };
            let source = TemplateSource::from_string(&template);

            let materializer = Materializer::new(
                &engine,
                &prompt,
                source,
                TemplateVariant::default(),
                HookInstaller::default(),
            );
            materializer.materialize(&name, preloaded)
        }
    }
}

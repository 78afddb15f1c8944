//! Command-line interface implementation for stencil.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::TEMPLATE_REPO;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};

/// Command-line arguments structure for stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "stencil: backend service scaffolding tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new backend service project from the template
    Init {
        /// Name of the project directory to create
        #[arg(value_name = "NAME")]
        name: String,

        /// Template source: git repository URL or local path
        #[arg(short, long, default_value = TEMPLATE_REPO)]
        template: String,

        /// Read answers as a JSON object from stdin instead of prompting
        #[arg(short, long)]
        stdin: bool,
    },
}

/// Parses command line arguments and returns the Cli structure.
///
/// # Returns
/// * `Cli` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if no subcommand or required argument is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Cli {
    match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument | ErrorKind::MissingSubcommand
            ) {
                Cli::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

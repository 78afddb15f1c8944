//! Terminal progress reporting.
//! Each pipeline stage runs under a spinner and settles into a single
//! success or failure line.

use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .expect("spinner template is valid"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Runs one named stage under a spinner.
///
/// The stage's outcome is reported as a checked or crossed line; the error
/// itself propagates to the caller untouched.
pub fn stage<T>(label: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let spinner = create_spinner(label);
    let result = f();
    spinner.finish_and_clear();

    match result {
        Ok(value) => {
            println!("{} {}", console::style("✔").green(), label);
            Ok(value)
        }
        Err(err) => {
            eprintln!("{} {}", console::style("✘").red(), label);
            Err(err)
        }
    }
}

/// Prints the final success line.
pub fn report_success(message: &str) {
    println!(
        "{} {}",
        console::style("✔").green().bold(),
        console::style(message).green()
    );
}

//! Progress line utilities.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for long-running operations.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

/// Create the single updating `Progress: <completed>/<total>` line.
///
/// With `visible` false a hidden bar is returned, which swallows redraws but
/// still tracks position.
pub fn create_progress_line(total: u64, visible: bool) -> ProgressBar {
    let bar = if visible {
        ProgressBar::new(total)
    } else {
        ProgressBar::hidden()
    };
    bar.set_length(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} Progress: {pos}/{len}")
            .unwrap(),
    );
    bar
}

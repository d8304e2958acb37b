//! Console output utilities.

use console::style;

use crate::config::{Config, ThreadLink};

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════╗
║     dvach-dl                          ║
║     2ch thread media downloader       ║
╚═══════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(config: &Config, link: &ThreadLink) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Thread:      /{}/{}", link.board, link.thread);
    println!("  Directory:   {}", config.output_directory().display());
    println!("  Concurrency: {}", config.options.concurrency);
    println!("  Progress:    {}", config.options.progress_mode);
    println!();
}

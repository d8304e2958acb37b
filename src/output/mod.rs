//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - The updating progress line
//! - Batch statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_info, print_success, print_warning,
};
pub use progress::{create_progress_line, create_spinner};
pub use stats::print_batch_stats;

//! Statistics reporting.

use std::path::Path;

use console::style;

use crate::download::BatchReport;

/// Print statistics for a finished batch.
pub fn print_batch_stats(report: &BatchReport, folder: &Path) {
    println!();
    println!("{}", style("Batch complete:").bold());
    println!("  Downloaded: {}", style(report.succeeded).green());
    if report.failed > 0 {
        println!("  Failed:     {}", style(report.failed).red());
    }
    println!("  Saved to:   {}", folder.display());
}

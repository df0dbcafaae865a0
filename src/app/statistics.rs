//! End-of-run statistics logging.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats, WarningType};

/// Lines describing the non-zero error and warning counts of a run.
fn error_statistics_lines(error_stats: &ProcessingStats) -> Vec<String> {
    let mut lines = Vec::new();

    let total_errors = error_stats.total_errors();
    if total_errors > 0 {
        lines.push(format!("Error Counts ({total_errors} total):"));
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                lines.push(format!("   {}: {count}", error_type.as_str()));
            }
        }
    }

    let total_warnings = error_stats.total_warnings();
    if total_warnings > 0 {
        lines.push(format!("Warning Counts ({total_warnings} total):"));
        for warning_type in WarningType::iter() {
            let count = error_stats.get_warning_count(warning_type);
            if count > 0 {
                lines.push(format!("   {}: {count}", warning_type.as_str()));
            }
        }
    }

    lines
}

fn summary_line(analyzed: usize, failed: usize, elapsed_seconds: f64) -> String {
    format!(
        "Analyzed {} page{} ({} failed) in {:.1}s",
        analyzed,
        if analyzed == 1 { "" } else { "s" },
        failed,
        elapsed_seconds
    )
}

/// Logs error and warning counts collected during the run.
///
/// Nothing is logged for categories with a zero count.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    for line in error_statistics_lines(error_stats) {
        info!("{line}");
    }
}

/// Logs a one-line summary of the run.
pub fn print_simple_summary(analyzed: usize, failed: usize, elapsed_seconds: f64) {
    info!("{}", summary_line(analyzed, failed, elapsed_seconds));
}

//! End-of-run summary.
//!
//! The human-readable block follows the data table on stdout; the same
//! counters are also emitted as one structured log event.

use crate::error::TelemetryResult;
use std::io::Write;
use tickema_core::RunStatistics;
use tracing::{info, warn};

/// Write the exit statistics block.
pub fn write_summary<W: Write>(out: &mut W, stats: &RunStatistics) -> TelemetryResult<()> {
    writeln!(out, "Exit stats:")?;
    writeln!(out, "Retries: {}", stats.retries)?;
    writeln!(out, "Critical errors: {}", stats.critical_errors)?;
    writeln!(out, "Dropped ooo: {}", stats.dropped_out_of_order)?;
    writeln!(out, "Dropped dt0: {}", stats.dropped_zero_delta)?;
    writeln!(out, "Handled: {}", stats.handled)?;
    out.flush()?;
    Ok(())
}

/// Log the run counters as a single event.
pub fn log_summary(stats: &RunStatistics) {
    if stats.has_critical_errors() {
        warn!(
            retries = stats.retries,
            critical_errors = stats.critical_errors,
            dropped_out_of_order = stats.dropped_out_of_order,
            dropped_zero_delta = stats.dropped_zero_delta,
            handled = stats.handled,
            "Run aborted"
        );
    } else {
        info!(
            retries = stats.retries,
            critical_errors = stats.critical_errors,
            dropped_out_of_order = stats.dropped_out_of_order,
            dropped_zero_delta = stats.dropped_zero_delta,
            handled = stats.handled,
            "Run finished"
        );
    }
}

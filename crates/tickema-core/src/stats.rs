//! Run statistics.
//!
//! Plain counters owned by the poll loop and returned to the caller when the
//! run ends. Counters only ever increase.

use serde::{Deserialize, Serialize};

/// Counters for one collection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Receive attempts that produced nothing usable.
    pub retries: u64,
    /// Fatal failures. The loop stops on the first one.
    pub critical_errors: u64,
    /// Samples whose sequence went backwards.
    pub dropped_out_of_order: u64,
    /// Samples with the same timestamp as the previous handled one.
    pub dropped_zero_delta: u64,
    /// Samples that produced an output row.
    pub handled: u64,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_retry(&mut self) {
        self.retries += 1;
    }

    pub fn record_critical_error(&mut self) {
        self.critical_errors += 1;
    }

    pub fn record_out_of_order(&mut self) {
        self.dropped_out_of_order += 1;
    }

    pub fn record_zero_delta(&mut self) {
        self.dropped_zero_delta += 1;
    }

    pub fn record_handled(&mut self) {
        self.handled += 1;
    }

    /// True if any fatal failure was recorded.
    pub fn has_critical_errors(&self) -> bool {
        self.critical_errors > 0
    }
}

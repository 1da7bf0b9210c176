//! Ordering state of the ticker stream.

use serde::{Deserialize, Serialize};

/// Position of the poll loop in the stream.
///
/// `last_sequence` moves whenever the sequence gate admits a sample.
/// `last_timestamp_us` moves only when a sample is actually handled, so a
/// zero-delta sample advances the sequence but not the time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamCursor {
    /// Last admitted sequence number (0 = nothing admitted yet).
    pub last_sequence: u64,
    /// Timestamp of the last handled sample (0 = nothing handled yet).
    pub last_timestamp_us: u64,
}

impl StreamCursor {
    pub fn new() -> Self {
        Self::default()
    }
}

//! Sequence ordering gate.
//!
//! Enforces a monotonic lower bound on sequence numbers, not a contiguous
//! counter: gaps pass through, and so do repeats of the last sequence since
//! the feed does not promise strict increase.

use tickema_core::{Sample, StreamCursor};

/// Gate decision for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Sample is in order; the cursor now points at it.
    Accepted,
    /// Sample is older than the last admitted one; the cursor is unchanged.
    DroppedOutOfOrder,
}

impl Admission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Admit or drop `sample` based on the cursor's last sequence.
pub fn admit(sample: &Sample, cursor: &mut StreamCursor) -> Admission {
    if sample.sequence < cursor.last_sequence {
        return Admission::DroppedOutOfOrder;
    }
    cursor.last_sequence = sample.sequence;
    Admission::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(sequence: u64) -> Sample {
        Sample::new(sequence, 1_000, 1.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_first_sample_accepted() {
        let mut cursor = StreamCursor::new();
        assert_eq!(admit(&sample(1), &mut cursor), Admission::Accepted);
        assert_eq!(cursor.last_sequence, 1);
    }

    #[test]
    fn test_regression_dropped_without_moving_cursor() {
        let mut cursor = StreamCursor::new();
        admit(&sample(5), &mut cursor);

        let admission = admit(&sample(3), &mut cursor);
        assert_eq!(admission, Admission::DroppedOutOfOrder);
        assert!(!admission.is_accepted());
        assert_eq!(cursor.last_sequence, 5);
    }

    #[test]
    fn test_equal_sequence_accepted() {
        let mut cursor = StreamCursor::new();
        admit(&sample(2), &mut cursor);
        assert!(admit(&sample(2), &mut cursor).is_accepted());
        assert_eq!(cursor.last_sequence, 2);
    }

    #[test]
    fn test_gaps_accepted() {
        let mut cursor = StreamCursor::new();
        admit(&sample(1), &mut cursor);
        assert!(admit(&sample(100), &mut cursor).is_accepted());
        assert_eq!(cursor.last_sequence, 100);
    }

    #[test]
    fn test_gate_leaves_timestamp_alone() {
        let mut cursor = StreamCursor::new();
        admit(&sample(1), &mut cursor);
        assert_eq!(cursor.last_timestamp_us, 0);
    }
}

//! Non-blocking frame source abstraction.
//!
//! The poll loop only needs three things from a transport: a receive call
//! that never blocks, a way to tell "nothing yet" apart from a dead
//! connection, and an upper bound on message size.

use crate::error::{WsError, WsResult};

/// Size of the poll loop's receive buffer. Larger frames violate the
/// transport contract and are reported as `WsError::FrameTooLarge`.
pub const MAX_FRAME_BYTES: usize = 4096;

/// Outcome of one non-blocking receive attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecvStatus {
    /// A complete text frame of this many bytes was written to the buffer.
    Ready(usize),
    /// Nothing to read right now. Try again later.
    WouldBlock,
}

/// Source of raw text frames.
pub trait FrameSource {
    /// Receive at most one frame into `buf` without blocking.
    ///
    /// Any `Err` is fatal for the run; callers must not retry.
    fn try_receive(&mut self, buf: &mut [u8]) -> WsResult<RecvStatus>;
}

/// Copy a received frame into the caller's buffer.
pub fn copy_frame(frame: &[u8], buf: &mut [u8]) -> WsResult<RecvStatus> {
    if frame.len() > buf.len() {
        return Err(WsError::FrameTooLarge {
            len: frame.len(),
            capacity: buf.len(),
        });
    }

    buf[..frame.len()].copy_from_slice(frame);
    Ok(RecvStatus::Ready(frame.len()))
}

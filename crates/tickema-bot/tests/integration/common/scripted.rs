//! In-memory frame source driven by a fixed script.

use std::collections::VecDeque;
use tickema_ws::{copy_frame, FrameSource, RecvStatus, WsError, WsResult};

/// One scripted receive outcome.
pub enum Event {
    Frame(String),
    WouldBlock,
    Fail(WsError),
}

/// Replays a script, then reports the stream as ended.
pub struct ScriptedSource {
    events: VecDeque<Event>,
    receives: u64,
}

impl ScriptedSource {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            receives: 0,
        }
    }

    /// Source that yields each frame in order.
    pub fn frames(frames: impl IntoIterator<Item = String>) -> Self {
        Self::new(frames.into_iter().map(Event::Frame))
    }

    /// Number of receive attempts made so far.
    pub fn receives(&self) -> u64 {
        self.receives
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl FrameSource for ScriptedSource {
    fn try_receive(&mut self, buf: &mut [u8]) -> WsResult<RecvStatus> {
        self.receives += 1;
        match self.events.pop_front() {
            Some(Event::Frame(frame)) => copy_frame(frame.as_bytes(), buf),
            Some(Event::WouldBlock) => Ok(RecvStatus::WouldBlock),
            Some(Event::Fail(e)) => Err(e),
            None => Err(WsError::StreamEnded),
        }
    }
}

/// Ticker frame with the given sequence and time.
///
/// `bid` is `price - 1` and `ask` is `price + 1`, so the mid equals `price`.
pub fn ticker(sequence: u64, time: &str, price: f64) -> String {
    serde_json::json!({
        "type": "ticker",
        "sequence": sequence,
        "product_id": "ETH-USD",
        "price": price.to_string(),
        "best_bid": (price - 1.0).to_string(),
        "best_ask": (price + 1.0).to_string(),
        "side": "buy",
        "time": time,
    })
    .to_string()
}

/// `2024-03-01T12:00:00Z` plus `offset_us` microseconds, in feed format.
pub fn feed_time(offset_us: u64) -> String {
    let secs = offset_us / 1_000_000;
    let micros = offset_us % 1_000_000;
    format!(
        "2024-03-01T12:{:02}:{:02}.{:06}Z",
        secs / 60,
        secs % 60,
        micros
    )
}

/// Epoch microseconds of `2024-03-01T12:00:00Z`.
pub const BASE_EPOCH_US: u64 = 1_709_294_400_000_000;

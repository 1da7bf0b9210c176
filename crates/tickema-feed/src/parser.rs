//! Ticker frame decoding.
//!
//! Decodes one JSON text frame straight out of the poll loop's receive
//! buffer. String fields borrow from the buffer; only the final numbers are
//! materialized.
//!
//! Frame format (extra fields ignored):
//! `{"type":"ticker","sequence":37475248783,"price":"1285.22",
//!   "best_bid":"1285.04","best_ask":"1285.27","time":"2022-10-19T23:28:22.061769Z"}`
//!
//! Known limitation: one receive is assumed to carry one message. If several
//! updates arrive coalesced in a single buffer, only the first is decoded and
//! the rest are discarded with a warning.

use crate::error::{FeedError, FeedResult};
use crate::timestamp::{parse_epoch_us, TIMESTAMP_PARSE_FAILED};
use serde::Deserialize;
use std::borrow::Cow;
use tickema_core::Sample;
use tracing::{debug, warn};

/// Raw frame as sent by the feed. Only `type` is required at this level so
/// that non-ticker messages can be told apart from broken tickers.
///
/// Ticker fields never contain escapes, so they borrow from the frame.
#[derive(Debug, Deserialize)]
struct RawFrame<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(default)]
    sequence: Option<u64>,
    #[serde(default)]
    price: Option<&'a str>,
    #[serde(default)]
    best_bid: Option<&'a str>,
    #[serde(default)]
    best_ask: Option<&'a str>,
    #[serde(default)]
    time: Option<&'a str>,
    /// Set on `error` frames. May contain escapes, so not borrowed.
    #[serde(default, borrow)]
    message: Option<Cow<'a, str>>,
    /// Set on `error` frames.
    #[serde(default, borrow)]
    reason: Option<Cow<'a, str>>,
}

/// Frame type that carries samples. Every ticker channel (`ticker`,
/// `ticker_batch`) delivers frames of this type.
pub const TICKER_TYPE: &str = "ticker";

/// Decodes raw text frames into samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameDecoder;

impl FrameDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode one frame.
    ///
    /// Returns:
    /// - `Ok(Some(sample))` for a well-formed ticker
    /// - `Ok(None)` for any other frame type (subscriptions, heartbeats, errors)
    /// - `Err(_)` for a ticker with missing or malformed fields
    ///
    /// `FeedError::InvalidTimestamp` is the only fatal error; see
    /// [`FeedError::is_fatal`].
    pub fn decode(&self, frame: &[u8]) -> FeedResult<Option<Sample>> {
        let mut values = serde_json::Deserializer::from_slice(frame).into_iter::<RawFrame<'_>>();
        let raw = match values.next() {
            Some(raw) => raw?,
            None => return Err(FeedError::ParseError("Empty frame".to_string())),
        };

        let consumed = values.byte_offset();
        if frame[consumed..].iter().any(|b| !b.is_ascii_whitespace()) {
            warn!(
                consumed,
                total = frame.len(),
                "Coalesced frame, trailing messages discarded"
            );
        }

        if raw.kind != TICKER_TYPE {
            if raw.kind == "error" {
                warn!(
                    message = raw.message.as_deref().unwrap_or(""),
                    reason = raw.reason.as_deref().unwrap_or(""),
                    "Feed reported an error"
                );
            } else {
                debug!(kind = raw.kind, "Ignoring non-ticker frame");
            }
            return Ok(None);
        }

        let sequence = raw.sequence.ok_or(FeedError::MissingField("sequence"))?;
        let price = parse_decimal("price", raw.price)?;
        let bid = parse_decimal("best_bid", raw.best_bid)?;
        let ask = parse_decimal("best_ask", raw.best_ask)?;

        let time = raw.time.ok_or(FeedError::MissingField("time"))?;
        let timestamp_us = parse_epoch_us(time);
        if timestamp_us == TIMESTAMP_PARSE_FAILED {
            return Err(FeedError::InvalidTimestamp(time.to_string()));
        }

        let sample = Sample::new(sequence, timestamp_us, bid, ask, price)?;
        Ok(Some(sample))
    }
}

/// Parse a decimal price sent as text.
fn parse_decimal(field: &'static str, value: Option<&str>) -> FeedResult<f64> {
    let s = value.ok_or(FeedError::MissingField(field))?;
    s.parse()
        .map_err(|_| FeedError::ParseError(format!("Invalid {field}: {s}")))
}

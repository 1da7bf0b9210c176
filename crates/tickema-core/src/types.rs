//! Market data values passed between pipeline stages.
//!
//! A `Sample` is created by the frame decoder, inspected once by the
//! sequence gate and the smoothers, then dropped. Nothing keeps history.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// One decoded ticker snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Feed sequence number.
    pub sequence: u64,
    /// Exchange time in microseconds since the Unix epoch. Never zero.
    pub timestamp_us: u64,
    /// Best bid price.
    pub bid: f64,
    /// Best ask price.
    pub ask: f64,
    /// Last traded price.
    pub price: f64,
}

impl Sample {
    /// Create a sample, rejecting a zero timestamp and non-finite prices.
    pub fn new(sequence: u64, timestamp_us: u64, bid: f64, ask: f64, price: f64) -> Result<Self> {
        if timestamp_us == 0 {
            return Err(CoreError::ZeroTimestamp);
        }
        for (field, value) in [("bid", bid), ("ask", ask), ("price", price)] {
            if !value.is_finite() {
                return Err(CoreError::InvalidPrice { field, value });
            }
        }

        Ok(Self {
            sequence,
            timestamp_us,
            bid,
            ask,
            price,
        })
    }

    /// Mid price: (bid + ask) / 2.
    pub fn mid_price(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }
}

/// One row of the smoothed output table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    pub timestamp_us: u64,
    pub bid: f64,
    pub ask: f64,
    pub price: f64,
    /// Moving average of the mid price after this sample.
    pub mid_ema: f64,
    /// Moving average of the traded price after this sample.
    pub price_ema: f64,
}

impl OutputRow {
    /// Combine a handled sample with the averages it produced.
    pub fn new(sample: &Sample, mid_ema: f64, price_ema: f64) -> Self {
        Self {
            timestamp_us: sample.timestamp_us,
            bid: sample.bid,
            ask: sample.ask,
            price: sample.price,
            mid_ema,
            price_ema,
        }
    }
}

//! Outgoing WebSocket message types.

use serde::Serialize;

/// Channel subscription request.
///
/// Serializes to the feed's subscribe format:
/// `{"type":"subscribe","product_ids":["BTC-USD"],"channels":["ticker"]}`
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeRequest {
    /// Always "subscribe".
    #[serde(rename = "type")]
    pub request_type: String,
    /// Products to subscribe to. tickema sends exactly one.
    pub product_ids: Vec<String>,
    /// Channels to subscribe to.
    pub channels: Vec<String>,
}

impl SubscribeRequest {
    /// Subscribe one symbol to one channel. The symbol is forwarded verbatim.
    pub fn single(symbol: &str, channel: &str) -> Self {
        Self {
            request_type: "subscribe".to_string(),
            product_ids: vec![symbol.to_string()],
            channels: vec![channel.to_string()],
        }
    }
}

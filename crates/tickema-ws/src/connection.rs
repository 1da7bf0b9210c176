//! WebSocket ticker connection.
//!
//! Connects, subscribes to a single product, and exposes the socket as a
//! non-blocking `FrameSource`. Reads are polled once with `now_or_never`;
//! the caller yields to the runtime between attempts so the I/O driver can
//! make progress.

use crate::error::{WsError, WsResult};
use crate::message::SubscribeRequest;
use crate::transport::{copy_frame, FrameSource, RecvStatus};
use futures_util::{FutureExt, SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async_tls_with_config, tungstenite::Message, MaybeTlsStream, WebSocketStream,
};
use tracing::{debug, info, warn};

/// Default ticker feed endpoint.
pub const DEFAULT_FEED_URL: &str = "wss://ws-feed.exchange.coinbase.com";

/// Connection configuration.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// WebSocket URL.
    pub url: String,
    /// Channel to subscribe the product to.
    pub channel: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            channel: "ticker".to_string(),
        }
    }
}

/// Live, subscribed ticker connection.
pub struct WsTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    symbol: String,
}

impl WsTransport {
    /// Connect to the feed and subscribe `symbol` to the configured channel.
    ///
    /// Any failure here is fatal; there is no retry.
    pub async fn connect_and_subscribe(config: &ConnectionConfig, symbol: &str) -> WsResult<Self> {
        info!(url = %config.url, "Connecting to WebSocket");

        // TCP_NODELAY: ticker frames are small and latency matters more than throughput
        let (mut stream, _response) = connect_async_tls_with_config(&config.url, None, true, None)
            .await
            .map_err(|e| WsError::ConnectionFailed(e.to_string()))?;
        info!("WebSocket connected");

        let request = SubscribeRequest::single(symbol, &config.channel);
        let msg = serde_json::to_string(&request)?;
        stream
            .send(Message::Text(msg))
            .await
            .map_err(|e| WsError::SubscriptionError(e.to_string()))?;

        info!(symbol, channel = %config.channel, "Subscription sent");

        Ok(Self {
            stream,
            symbol: symbol.to_string(),
        })
    }

    /// Subscribed symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Send a Close frame and drop the connection.
    pub async fn close(mut self) -> WsResult<()> {
        info!(symbol = %self.symbol, "Closing WebSocket");
        if let Err(e) = self.stream.send(Message::Close(None)).await {
            warn!(?e, "Failed to send Close frame");
            return Err(e.into());
        }
        Ok(())
    }
}

impl FrameSource for WsTransport {
    fn try_receive(&mut self, buf: &mut [u8]) -> WsResult<RecvStatus> {
        let Some(next) = self.stream.next().now_or_never() else {
            return Ok(RecvStatus::WouldBlock);
        };

        match next {
            Some(Ok(Message::Text(text))) => copy_frame(text.as_bytes(), buf),
            Some(Ok(Message::Close(frame))) => {
                let (code, reason) = frame
                    .map(|f| (f.code.into(), f.reason.to_string()))
                    .unwrap_or((1000, "Normal close".to_string()));
                warn!(code, %reason, "WebSocket closed by server");
                Err(WsError::ConnectionClosed { code, reason })
            }
            Some(Ok(other)) => {
                // Pings are answered by tungstenite on the next read
                debug!(kind = message_kind(&other), "Ignoring non-text frame");
                Ok(RecvStatus::WouldBlock)
            }
            Some(Err(e)) => Err(e.into()),
            None => Err(WsError::StreamEnded),
        }
    }
}

fn message_kind(msg: &Message) -> &'static str {
    match msg {
        Message::Text(_) => "text",
        Message::Binary(_) => "binary",
        Message::Ping(_) => "ping",
        Message::Pong(_) => "pong",
        Message::Close(_) => "close",
        Message::Frame(_) => "frame",
    }
}

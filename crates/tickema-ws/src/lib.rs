//! WebSocket transport for the tickema ticker feed.
//!
//! Provides the collaborator the poll loop reads from:
//! - Connection and ticker subscription in one step
//! - Non-blocking receive into a caller-owned buffer
//! - A distinguishable "would block" signal vs fatal failure
//! - Close frame on teardown
//!
//! There is no reconnect logic. Connection loss is fatal for the run.

pub mod connection;
pub mod error;
pub mod message;
pub mod transport;

pub use connection::{ConnectionConfig, WsTransport, DEFAULT_FEED_URL};
pub use error::{WsError, WsResult};
pub use message::SubscribeRequest;
pub use transport::{copy_frame, FrameSource, RecvStatus, MAX_FRAME_BYTES};

use std::sync::Once;

static INIT_CRYPTO: Once = Once::new();

/// Initialize the TLS crypto provider.
/// Must be called before any WebSocket connections are made.
pub fn init_crypto() {
    INIT_CRYPTO.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

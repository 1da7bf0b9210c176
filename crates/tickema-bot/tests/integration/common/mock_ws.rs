//! Mock feed server for integration tests.
//!
//! Provides a simple WebSocket server that can:
//! - Accept connections
//! - Record received messages
//! - Answer the first subscribe request with a scripted list of frames
//! - Optionally close the connection once the script is sent

use futures_util::{SinkExt, StreamExt};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, Mutex};
use tokio_tungstenite::{accept_async, tungstenite::Message};

/// What the server does after the subscribe request arrives.
#[derive(Debug, Clone, Default)]
pub struct FeedScript {
    /// Text frames sent in order.
    pub frames: Vec<String>,
    /// Send a Close frame after the last scripted frame.
    pub close_after: bool,
}

/// A mock feed server for testing.
pub struct MockWsServer {
    addr: SocketAddr,
    shutdown_tx: mpsc::Sender<()>,
    messages: Arc<Mutex<VecDeque<String>>>,
    connections: Arc<Mutex<u32>>,
    client_closed: Arc<Mutex<bool>>,
}

impl MockWsServer {
    /// Start a new mock server on an available port.
    pub async fn start(script: FeedScript) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let messages: Arc<Mutex<VecDeque<String>>> = Arc::new(Mutex::new(VecDeque::new()));
        let connections: Arc<Mutex<u32>> = Arc::new(Mutex::new(0));
        let client_closed = Arc::new(Mutex::new(false));
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let messages_clone = messages.clone();
        let connections_clone = connections.clone();
        let closed_clone = client_closed.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    Ok((stream, _)) = listener.accept() => {
                        tokio::spawn(handle_connection(
                            stream,
                            script.clone(),
                            messages_clone.clone(),
                            connections_clone.clone(),
                            closed_clone.clone(),
                        ));
                    }
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                }
            }
        });

        Self {
            addr,
            shutdown_tx,
            messages,
            connections,
            client_closed,
        }
    }

    /// Get the server's WebSocket URL.
    pub fn url(&self) -> String {
        format!("ws://{}", self.addr)
    }

    /// Get the number of connections received.
    pub async fn connection_count(&self) -> u32 {
        *self.connections.lock().await
    }

    /// Get all received text messages.
    pub async fn received_messages(&self) -> Vec<String> {
        self.messages.lock().await.iter().cloned().collect()
    }

    /// Whether a client sent a Close frame.
    pub async fn client_closed(&self) -> bool {
        *self.client_closed.lock().await
    }

    /// Shutdown the server.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

async fn handle_connection(
    stream: TcpStream,
    script: FeedScript,
    messages: Arc<Mutex<VecDeque<String>>>,
    connections: Arc<Mutex<u32>>,
    client_closed: Arc<Mutex<bool>>,
) {
    {
        let mut count = connections.lock().await;
        *count += 1;
    }

    let ws_stream = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            eprintln!("WebSocket handshake failed: {}", e);
            return;
        }
    };

    let (mut write, mut read) = ws_stream.split();
    let mut script_sent = false;

    while let Some(msg) = read.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                messages.lock().await.push_back(text.clone());

                let is_subscribe = serde_json::from_str::<serde_json::Value>(&text)
                    .map(|v| v.get("type") == Some(&serde_json::json!("subscribe")))
                    .unwrap_or(false);
                if !is_subscribe || script_sent {
                    continue;
                }
                script_sent = true;

                for frame in &script.frames {
                    if write.send(Message::Text(frame.clone())).await.is_err() {
                        return;
                    }
                }
                if script.close_after {
                    let _ = write.send(Message::Close(None)).await;
                }
            }
            Ok(Message::Ping(data)) => {
                let _ = write.send(Message::Pong(data)).await;
            }
            Ok(Message::Close(_)) => {
                *client_closed.lock().await = true;
                break;
            }
            Err(_) => break,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_starts() {
        let server = MockWsServer::start(FeedScript::default()).await;
        assert!(server.url().starts_with("ws://127.0.0.1:"));
        server.shutdown().await;
    }
}

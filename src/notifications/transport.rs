//! Socket transport abstraction
//!
//! The client only needs "connect" and "next text frame", so the WebSocket
//! library stays behind these traits and tests can script connections.

use async_trait::async_trait;
use futures::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::debug;

use crate::error::{CashlyError, CashlyResult};

/// An open connection
#[async_trait]
pub trait NotificationStream: Send {
    /// Next text frame, or `None` once the connection is closed
    async fn next_frame(&mut self) -> Option<CashlyResult<String>>;

    /// Close the connection from our side
    async fn close(&mut self);
}

/// Something that can open connections
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    async fn connect(&self, url: &str) -> CashlyResult<Box<dyn NotificationStream>>;
}

/// WebSocket transport (ws:// and wss://)
#[derive(Debug, Clone, Copy, Default)]
pub struct WsTransport;

#[async_trait]
impl NotificationTransport for WsTransport {
    async fn connect(&self, url: &str) -> CashlyResult<Box<dyn NotificationStream>> {
        let (socket, response) = connect_async(url)
            .await
            .map_err(|e| CashlyError::Socket(format!("Failed to connect to {}: {}", url, e)))?;
        debug!(status = %response.status(), "websocket handshake complete");
        Ok(Box::new(WsStream { socket }))
    }
}

struct WsStream {
    socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

#[async_trait]
impl NotificationStream for WsStream {
    async fn next_frame(&mut self) -> Option<CashlyResult<String>> {
        loop {
            match self.socket.next().await? {
                Ok(Message::Text(text)) => return Some(Ok(text.to_string())),
                Ok(Message::Close(frame)) => {
                    debug!(?frame, "server closed the socket");
                    return None;
                }
                // Pings are answered by tungstenite; binary frames carry nothing for us
                Ok(_) => continue,
                Err(e) => return Some(Err(CashlyError::Socket(e.to_string()))),
            }
        }
    }

    async fn close(&mut self) {
        if let Err(e) = self.socket.close(None).await {
            debug!(error = %e, "error while closing socket");
        }
    }
}

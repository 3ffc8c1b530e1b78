//! The bridge connection seam.
//!
//! The actual transport (handshake, reconnection, wire framing) lives in
//! the embedding application; the relay core only needs connectivity
//! status and a send primitive.

use async_trait::async_trait;

use crate::common::error::TransportError;

/// A persistent connection to the remote messaging bridge.
///
/// Implementations are expected to manage their own reconnection and
/// backoff; the dispatcher never retries a failed send. `is_connected`
/// must be cheap: it is polled on every relay send, and connectivity may
/// change between dispatch and the actual send.
#[async_trait]
pub trait BridgeConnection: Send + Sync {
    /// Whether the connection is currently open.
    fn is_connected(&self) -> bool;

    /// Send a chat message to the bridge on behalf of `sender`.
    async fn send_message(&self, sender: &str, text: &str) -> Result<(), TransportError>;
}

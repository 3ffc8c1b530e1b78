//! Validation and non-blocking hand-off of relay messages to the bridge.

use std::sync::Arc;

use tracing::{debug, error};

use crate::bridge::BridgeConnection;
use crate::client::feedback::FeedbackSender;
use crate::common::messages::RelayRequest;

/// Maximum relay message length, in characters.
pub const MAX_MESSAGE_LEN: usize = 256;

/// Validates relay messages and sends them to the bridge off the
/// interactive loop.
pub struct RelayDispatcher {
    bridge: Arc<dyn BridgeConnection>,
    feedback: FeedbackSender,
}

impl RelayDispatcher {
    pub fn new(bridge: Arc<dyn BridgeConnection>, feedback: FeedbackSender) -> Self {
        Self { bridge, feedback }
    }

    /// Dispatch a message to the bridge.
    ///
    /// Validation runs synchronously and short-circuits with a feedback
    /// line; nothing reaches the network on a validation failure. A
    /// message that passes validation is sent on its own task so a slow
    /// bridge cannot stall the interactive loop, and the caller returns
    /// immediately. Must be called from within a tokio runtime.
    ///
    /// Messages dispatched concurrently are sent on independent tasks
    /// with no ordering guarantee between them.
    pub fn dispatch(&self, sender: Option<String>, text: String) {
        if text.trim().is_empty() {
            self.feedback.show("[relay] message cannot be empty", false);
            return;
        }

        if text.chars().count() > MAX_MESSAGE_LEN {
            self.feedback
                .show("[relay] message too long (max 256 characters)", false);
            return;
        }

        let Some(sender) = sender else {
            self.feedback
                .show("[relay] cannot resolve player identity", false);
            return;
        };

        let request = RelayRequest { sender, text };
        let bridge = Arc::clone(&self.bridge);
        let feedback = self.feedback.clone();

        tokio::spawn(async move {
            // Connectivity is checked on the send task, not at dispatch
            // time: it may change between validation and send.
            if !bridge.is_connected() {
                debug!("bridge not connected, relay message dropped");
                feedback.show("[relay] not connected to server", false);
                return;
            }

            if let Err(e) = bridge.send_message(&request.sender, &request.text).await {
                error!(error = %e, sender = %request.sender, "Failed to send relay message");
                feedback.show(format!("[relay] send failed: {}", e), false);
            }
        });
    }
}

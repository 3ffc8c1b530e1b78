//! Canonical message types shared across the crate.

/// A line of user-facing feedback.
///
/// Feedback lines are produced by the command interpreter and the relay
/// dispatcher and are consumed only by the interactive loop, which hands
/// them to the client's display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackLine {
    /// Text to display.
    pub text: String,
    /// Whether the line should be shown transiently (action bar style)
    /// rather than in the persistent chat log.
    pub transient: bool,
}

impl FeedbackLine {
    /// Create a persistent chat-log feedback line.
    pub fn chat(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            transient: false,
        }
    }
}

/// A validated message bound for the bridge.
///
/// Constructed only after dispatch validation passes; owned by the send
/// task and discarded once the send completes or fails.
#[derive(Debug, Clone)]
pub struct RelayRequest {
    /// Resolved name of the local player sending the message.
    pub sender: String,
    /// Message content, 1..=256 characters.
    pub text: String,
}

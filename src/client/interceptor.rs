//! The interception point for outgoing chat submissions.
//!
//! The client's chat-send path invokes [`ChatInterceptor::intercept`]
//! synchronously before its own network send. A submission claimed by
//! the relay layer must be suppressed by the caller; everything else
//! proceeds untouched.

use std::sync::Arc;

use tracing::debug;

use crate::bridge::BridgeConnection;
use crate::client::feedback::FeedbackSender;
use crate::relay::classifier::{classify, Classification};
use crate::relay::commands::interpret;
use crate::relay::dispatcher::RelayDispatcher;
use crate::relay::session::SessionState;

/// Resolves the local player's name from the embedding client.
///
/// Returns `None` when no player is available (e.g. not logged in yet).
pub type IdentityResolver = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// What happened to one chat submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptOutcome {
    /// The relay layer handled the text; suppress the native send.
    Intercepted,
    /// Not ours; run the native send path unmodified.
    PassedThrough,
}

/// Entry hook for every outgoing chat submission.
///
/// Owns the session state and runs entirely on the interactive loop;
/// only the dispatcher's send tasks leave it.
pub struct ChatInterceptor {
    session: SessionState,
    dispatcher: RelayDispatcher,
    identity: IdentityResolver,
    feedback: FeedbackSender,
}

impl ChatInterceptor {
    pub fn new(
        bridge: Arc<dyn BridgeConnection>,
        identity: IdentityResolver,
        feedback: FeedbackSender,
    ) -> Self {
        Self {
            session: SessionState::default(),
            dispatcher: RelayDispatcher::new(bridge, feedback.clone()),
            identity,
            feedback,
        }
    }

    /// Process one outgoing chat submission.
    ///
    /// Classification is total: every submission ends up handled exactly
    /// once, either by the relay layer or by the caller's native path.
    pub fn intercept(&mut self, raw: &str) -> InterceptOutcome {
        match classify(raw, self.session.relay_mode_enabled) {
            Classification::LocalCommand { body } => {
                debug!(command = %body, "Handling relay command");
                for line in interpret(&body, &mut self.session) {
                    self.feedback.send(line);
                }
                InterceptOutcome::Intercepted
            }
            Classification::RelayMessage { text } => {
                self.dispatcher.dispatch((self.identity)(), text);
                InterceptOutcome::Intercepted
            }
            Classification::PassThrough => InterceptOutcome::PassedThrough,
        }
    }

    /// Whether relay mode is currently enabled for this session.
    pub fn relay_mode_enabled(&self) -> bool {
        self.session.relay_mode_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    use crate::client::feedback::{feedback_channel, FeedbackReceiver};
    use crate::common::error::TransportError;

    struct MockBridge {
        connected: bool,
        sent_tx: mpsc::UnboundedSender<(String, String)>,
    }

    #[async_trait]
    impl BridgeConnection for MockBridge {
        fn is_connected(&self) -> bool {
            self.connected
        }

        async fn send_message(&self, sender: &str, text: &str) -> Result<(), TransportError> {
            self.sent_tx
                .send((sender.to_string(), text.to_string()))
                .unwrap();
            Ok(())
        }
    }

    fn make_interceptor(
        connected: bool,
        player: Option<&str>,
    ) -> (
        ChatInterceptor,
        FeedbackReceiver,
        mpsc::UnboundedReceiver<(String, String)>,
    ) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        let (feedback_tx, feedback_rx) = feedback_channel();
        let bridge = Arc::new(MockBridge { connected, sent_tx });
        let player = player.map(|s| s.to_string());
        let identity: IdentityResolver = Arc::new(move || player.clone());
        (
            ChatInterceptor::new(bridge, identity, feedback_tx),
            feedback_rx,
            sent_rx,
        )
    }

    #[tokio::test]
    async fn test_chat_on_command_intercepted() {
        let (mut interceptor, mut feedback_rx, mut sent_rx) = make_interceptor(true, Some("Thrall"));

        let outcome = interceptor.intercept("##chat on");

        assert_eq!(outcome, InterceptOutcome::Intercepted);
        assert!(interceptor.relay_mode_enabled());
        // Two feedback lines, no network traffic.
        assert_eq!(feedback_rx.try_drain().len(), 2);
        assert!(sent_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_one_shot_relay_strips_prefix() {
        let (mut interceptor, _feedback_rx, mut sent_rx) = make_interceptor(true, Some("Thrall"));

        let outcome = interceptor.intercept("#hello");

        assert_eq!(outcome, InterceptOutcome::Intercepted);
        assert!(!interceptor.relay_mode_enabled());
        let (sender, text) = timeout(Duration::from_secs(1), sent_rx.recv())
            .await
            .expect("timed out waiting for send")
            .expect("send channel closed");
        assert_eq!(sender, "Thrall");
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_relay_mode_keeps_full_text() {
        let (mut interceptor, _feedback_rx, mut sent_rx) = make_interceptor(true, Some("Thrall"));

        interceptor.intercept("##chat on");
        let outcome = interceptor.intercept("hello");

        assert_eq!(outcome, InterceptOutcome::Intercepted);
        let (_, text) = timeout(Duration::from_secs(1), sent_rx.recv())
            .await
            .expect("timed out waiting for send")
            .expect("send channel closed");
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_native_command_passes_through_in_relay_mode() {
        let (mut interceptor, _feedback_rx, mut sent_rx) = make_interceptor(true, Some("Thrall"));

        interceptor.intercept("##chat on");
        let outcome = interceptor.intercept("/guild hello");

        assert_eq!(outcome, InterceptOutcome::PassedThrough);
        assert!(sent_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_plain_chat_passes_through() {
        let (mut interceptor, mut feedback_rx, mut sent_rx) = make_interceptor(true, Some("Thrall"));

        let outcome = interceptor.intercept("hello");

        assert_eq!(outcome, InterceptOutcome::PassedThrough);
        assert!(feedback_rx.try_drain().is_empty());
        assert!(sent_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_unknown_command_reports_help() {
        let (mut interceptor, mut feedback_rx, _sent_rx) = make_interceptor(true, Some("Thrall"));

        let outcome = interceptor.intercept("##bogus");

        assert_eq!(outcome, InterceptOutcome::Intercepted);
        let lines = feedback_rx.try_drain();
        assert!(lines[0].text.contains("unknown command: ##bogus"));
        assert!(lines.len() > 1);
    }

    #[tokio::test]
    async fn test_missing_identity_reported_on_relay() {
        let (mut interceptor, mut feedback_rx, mut sent_rx) = make_interceptor(true, None);

        let outcome = interceptor.intercept("#hello");

        assert_eq!(outcome, InterceptOutcome::Intercepted);
        let line = timeout(Duration::from_secs(1), feedback_rx.recv())
            .await
            .expect("timed out waiting for feedback")
            .expect("feedback channel closed");
        assert_eq!(line.text, "[relay] cannot resolve player identity");
        assert!(sent_rx.try_recv().is_err());
    }
}

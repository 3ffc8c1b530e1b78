//! Feedback delivery to the interactive client.
//!
//! The display surface is owned by the client's interactive loop and is
//! not safe to touch from arbitrary tasks. All feedback therefore goes
//! through a channel: producers (interpreter, dispatcher, send tasks)
//! post lines, and only the interactive loop consumes them.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::common::messages::FeedbackLine;

/// The client's display surface.
///
/// Must only be invoked from the interactive loop. The relay core never
/// calls this directly; it posts [`FeedbackLine`]s through the feedback
/// channel and the loop forwards them here.
pub trait ChatDisplay: Send + Sync {
    /// Show a line to the local user.
    fn show(&self, line: &str, transient: bool);
}

/// Create the feedback channel pair.
///
/// The sender side is cheap to clone and safe to use from any task; the
/// receiver must live on the interactive loop.
pub fn feedback_channel() -> (FeedbackSender, FeedbackReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (FeedbackSender { tx }, FeedbackReceiver { rx })
}

/// Posts feedback lines onto the interactive loop.
#[derive(Clone)]
pub struct FeedbackSender {
    tx: mpsc::UnboundedSender<FeedbackLine>,
}

impl FeedbackSender {
    /// Post a feedback line.
    pub fn send(&self, line: FeedbackLine) {
        if self.tx.send(line).is_err() {
            // Loop is gone; nothing left to show feedback to.
            debug!("Feedback channel closed, dropping line");
        }
    }

    /// Convenience for posting a line from text.
    pub fn show(&self, text: impl Into<String>, transient: bool) {
        self.send(FeedbackLine {
            text: text.into(),
            transient,
        });
    }
}

/// Consumes feedback lines; owned by the interactive loop.
pub struct FeedbackReceiver {
    rx: mpsc::UnboundedReceiver<FeedbackLine>,
}

impl FeedbackReceiver {
    /// Await the next feedback line.
    pub async fn recv(&mut self) -> Option<FeedbackLine> {
        self.rx.recv().await
    }

    /// Drain every line currently queued without waiting.
    ///
    /// For clients that pump feedback once per frame instead of running
    /// [`run_feedback_loop`] as a task.
    pub fn try_drain(&mut self) -> Vec<FeedbackLine> {
        let mut lines = Vec::new();
        while let Ok(line) = self.rx.try_recv() {
            lines.push(line);
        }
        lines
    }
}

/// Forward feedback lines onto the display until every sender is dropped.
///
/// Spawn this on the interactive loop (or await it there); the display
/// is only ever touched from here.
pub async fn run_feedback_loop(mut rx: FeedbackReceiver, display: Arc<dyn ChatDisplay>) {
    while let Some(line) = rx.recv().await {
        display.show(&line.text, line.transient);
    }

    warn!("Feedback loop ended");
}

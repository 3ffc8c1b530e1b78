//! Interpreter for `##`-prefixed relay commands.
//!
//! Runs synchronously on the interactive loop: commands only mutate
//! session state and produce feedback lines, never network calls.

use tracing::debug;

use crate::common::messages::FeedbackLine;
use crate::relay::session::SessionState;

/// Execute a relay command and return the feedback to show the user.
///
/// The command body is trimmed and lowercased before matching, so
/// `"  CHAT ON "` behaves like `"chat on"`. Unknown commands echo the
/// original body and list the recognized commands.
pub fn interpret(body: &str, session: &mut SessionState) -> Vec<FeedbackLine> {
    let cmd = body.trim().to_lowercase();

    match cmd.as_str() {
        "chat on" => {
            session.relay_mode_enabled = true;
            debug!("relay mode enabled");
            vec![
                FeedbackLine::chat("[relay] relay mode enabled - chat will be forwarded to the bridge"),
                FeedbackLine::chat("[relay] use ##chat off to return to normal chat"),
            ]
        }
        "chat off" => {
            session.relay_mode_enabled = false;
            debug!("relay mode disabled");
            vec![
                FeedbackLine::chat("[relay] relay mode disabled - normal chat restored"),
                FeedbackLine::chat("[relay] use the # prefix to relay a single message"),
            ]
        }
        "chat" | "chat status" => {
            if session.relay_mode_enabled {
                vec![
                    FeedbackLine::chat("[relay] current status: relay mode enabled"),
                    FeedbackLine::chat("[relay] use ##chat off to disable relay mode"),
                ]
            } else {
                vec![
                    FeedbackLine::chat("[relay] current status: normal chat mode"),
                    FeedbackLine::chat("[relay] use ##chat on to enable relay mode"),
                ]
            }
        }
        _ => vec![
            FeedbackLine::chat(format!("[relay] unknown command: ##{}", body)),
            FeedbackLine::chat("[relay] available commands:"),
            FeedbackLine::chat("  ##chat on - enable relay mode"),
            FeedbackLine::chat("  ##chat off - disable relay mode"),
            FeedbackLine::chat("  ##chat - show current status"),
        ],
    }
}

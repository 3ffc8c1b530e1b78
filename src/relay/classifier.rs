//! Classification of outgoing chat submissions.
//!
//! Pure decision logic: maps raw input text plus the relay-mode flag to
//! exactly one classification. No side effects, no I/O.

/// Prefix for commands handled by the relay layer itself.
pub const COMMAND_PREFIX: &str = "##";

/// Prefix for a one-shot relay message.
pub const RELAY_PREFIX: &str = "#";

/// The client's native command prefix; never relayed while in relay mode.
pub const NATIVE_COMMAND_PREFIX: &str = "/";

/// What to do with one outgoing chat submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A relay command to interpret locally (prefix already stripped).
    LocalCommand { body: String },
    /// Text to forward to the bridge.
    RelayMessage { text: String },
    /// Not ours; the native send path proceeds unmodified.
    PassThrough,
}

/// Classify a raw chat submission.
///
/// Rules are evaluated in order and the first match wins. The `"##"`
/// check must come before the `"#"` check, otherwise every command would
/// be misread as a one-shot relay of a `"#"`-prefixed message.
pub fn classify(raw: &str, relay_mode_enabled: bool) -> Classification {
    if let Some(body) = raw.strip_prefix(COMMAND_PREFIX) {
        return Classification::LocalCommand {
            body: body.to_string(),
        };
    }

    if relay_mode_enabled && !raw.starts_with(NATIVE_COMMAND_PREFIX) {
        return Classification::RelayMessage {
            text: raw.to_string(),
        };
    }

    if let Some(text) = raw.strip_prefix(RELAY_PREFIX) {
        return Classification::RelayMessage {
            text: text.to_string(),
        };
    }

    Classification::PassThrough
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_prefix_is_always_a_command() {
        for mode in [false, true] {
            assert_eq!(
                classify("##chat on", mode),
                Classification::LocalCommand {
                    body: "chat on".to_string()
                }
            );
            assert_eq!(
                classify("##", mode),
                Classification::LocalCommand {
                    body: String::new()
                }
            );
            // Even nonsense after "##" classifies as a command; the
            // interpreter is the one that rejects it.
            assert_eq!(
                classify("##bogus", mode),
                Classification::LocalCommand {
                    body: "bogus".to_string()
                }
            );
        }
    }

    #[test]
    fn test_relay_mode_forwards_full_text() {
        assert_eq!(
            classify("hello", true),
            Classification::RelayMessage {
                text: "hello".to_string()
            }
        );
        // No prefix stripping in relay mode.
        assert_eq!(
            classify("#hello", true),
            Classification::RelayMessage {
                text: "#hello".to_string()
            }
        );
    }

    #[test]
    fn test_relay_mode_skips_native_commands() {
        assert_eq!(classify("/guild hello", true), Classification::PassThrough);
        assert_eq!(classify("/logout", true), Classification::PassThrough);
    }

    #[test]
    fn test_one_shot_prefix_is_stripped() {
        assert_eq!(
            classify("#hello", false),
            Classification::RelayMessage {
                text: "hello".to_string()
            }
        );
        assert_eq!(
            classify("#", false),
            Classification::RelayMessage {
                text: String::new()
            }
        );
    }

    #[test]
    fn test_plain_chat_passes_through() {
        assert_eq!(classify("hello", false), Classification::PassThrough);
        assert_eq!(classify("/who", false), Classification::PassThrough);
        assert_eq!(classify("", false), Classification::PassThrough);
    }

    #[test]
    fn test_empty_input_in_relay_mode() {
        // Empty text still classifies as a relay message; dispatch
        // validation rejects it before any network call.
        assert_eq!(
            classify("", true),
            Classification::RelayMessage {
                text: String::new()
            }
        );
    }
}

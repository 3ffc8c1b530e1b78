//! Per-session relay state.

/// Mutable state for one client session.
///
/// Lives on the interactive loop for the lifetime of the session. The
/// command interpreter is the only writer; the classifier is the only
/// other reader. Background send tasks never touch it, so no locking is
/// needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionState {
    /// When enabled, every chat submission that is not a native command
    /// is forwarded to the bridge instead of the native chat channel.
    pub relay_mode_enabled: bool,
}

//! Error types for the crate.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Failures reported by the bridge connection.
///
/// Produced by [`BridgeConnection`](crate::bridge::BridgeConnection)
/// implementations. The relay dispatcher catches every variant on its
/// send task, logs it, and turns it into a user-facing feedback line;
/// nothing here ever propagates into the interactive loop.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("not connected to bridge")]
    NotConnected,

    #[error("send failed: {message}")]
    SendFailed { message: String },

    #[error("connection closed by remote")]
    ConnectionClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for bridge send operations.
pub type TransportResult<T> = std::result::Result<T, TransportError>;

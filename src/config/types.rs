//! Configuration type definitions.

use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bridge: BridgeConfig,
}

/// Bridge connection configuration.
///
/// These values are handed to the transport implementation constructed by
/// the embedding client; the relay core itself only loads and validates
/// them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// WebSocket endpoint of the bridge server.
    pub server_url: String,
    /// Delay between reconnection attempts, in milliseconds.
    pub reconnect_delay_ms: u64,
    /// Connection timeout, in milliseconds.
    pub connection_timeout_ms: u64,
    /// Maximum reconnection attempts before giving up (0 = infinite).
    pub max_retry_attempts: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            server_url: "ws://localhost:5001".to_string(),
            reconnect_delay_ms: 5000,
            connection_timeout_ms: 15000,
            max_retry_attempts: 3,
        }
    }
}

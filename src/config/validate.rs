//! Configuration validation.
//!
//! Validates configuration values and provides helpful error messages.

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Validate a configuration and return detailed errors.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if config.bridge.server_url.is_empty() {
        errors.push("bridge.server_url is required".to_string());
    } else if !config.bridge.server_url.starts_with("ws://")
        && !config.bridge.server_url.starts_with("wss://")
    {
        errors.push(format!(
            "bridge.server_url must be a ws:// or wss:// URL (got '{}')",
            config.bridge.server_url
        ));
    }

    if config.bridge.reconnect_delay_ms == 0 {
        errors.push("bridge.reconnect_delay_ms must be non-zero".to_string());
    }
    if config.bridge.connection_timeout_ms == 0 {
        errors.push("bridge.connection_timeout_ms must be non-zero".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            message: errors.join("\n"),
        })
    }
}

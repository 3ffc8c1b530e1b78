//! Environment variable overrides for configuration.
//!
//! Supports overriding config values with environment variables:
//! - `HERALD_BRIDGE_URL` - bridge server URL
//! - `HERALD_RECONNECT_DELAY_MS` - delay between reconnection attempts
//! - `HERALD_CONFIG` - path to the config file

use std::env;

use crate::config::types::Config;

/// Environment variable prefix for all config overrides.
const ENV_PREFIX: &str = "HERALD";

/// Apply environment variable overrides to a config.
///
/// This allows deployment-specific values like the bridge endpoint to be
/// provided via environment variables instead of the config file.
pub fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(url) = env::var(format!("{}_BRIDGE_URL", ENV_PREFIX)) {
        config.bridge.server_url = url;
    }

    if let Ok(delay) = env::var(format!("{}_RECONNECT_DELAY_MS", ENV_PREFIX)) {
        if let Ok(delay) = delay.parse() {
            config.bridge.reconnect_delay_ms = delay;
        }
    }

    config
}

/// Get the config file path from environment or use default.
///
/// Checks `HERALD_CONFIG` environment variable, otherwise returns "herald.conf".
pub fn get_config_path() -> String {
    env::var(format!("{}_CONFIG", ENV_PREFIX)).unwrap_or_else(|_| "herald.conf".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_prefix() {
        assert_eq!(ENV_PREFIX, "HERALD");
    }

    #[test]
    fn test_get_config_path_default() {
        // Clear the env var first
        env::remove_var("HERALD_CONFIG");
        assert_eq!(get_config_path(), "herald.conf");
    }

    #[test]
    fn test_apply_env_overrides_no_vars() {
        env::remove_var("HERALD_BRIDGE_URL");
        env::remove_var("HERALD_RECONNECT_DELAY_MS");

        let config = Config::default();
        let result = apply_env_overrides(config);

        // Should remain unchanged
        assert_eq!(result.bridge.server_url, "ws://localhost:5001");
        assert_eq!(result.bridge.reconnect_delay_ms, 5000);
    }
}

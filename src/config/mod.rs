//! Configuration parsing, validation, and environment overrides.

pub mod env;
pub mod parser;
pub mod types;
pub mod validate;

use std::path::Path;

use tracing::{info, warn};

use crate::common::error::ConfigError;

pub use env::get_config_path;
pub use types::{BridgeConfig, Config};

/// Load a config file, apply env overrides, and validate it.
///
/// The strict path for embedders that want hard failures on a broken
/// config.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let config = parser::load_config(path)?;
    let config = env::apply_env_overrides(config);
    validate::validate_config(&config)?;
    Ok(config)
}

/// Load a config file, falling back to defaults when it is missing or
/// unreadable.
///
/// Matches the lenient behavior of the original client: a missing file is
/// normal on first run, and a broken file should not keep the client from
/// starting.
pub fn load_or_default(path: impl AsRef<Path>) -> Config {
    let path = path.as_ref();

    if !path.exists() {
        info!(path = %path.display(), "No config file found, using defaults");
        return env::apply_env_overrides(Config::default());
    }

    match parser::load_config(path) {
        Ok(config) => env::apply_env_overrides(config),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
            env::apply_env_overrides(Config::default())
        }
    }
}

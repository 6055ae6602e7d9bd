//! Configuration loading from file system

use std::fs;
use std::path::Path;
use tracing::{info, instrument, warn};

use super::defaults::CONFIG_FILE_NAME;
use super::types::{app_dir, Config};

/// Load configuration from `~/.shortcut-engine/config.json`.
pub fn load_config() -> Config {
    load_config_from(&app_dir().join(CONFIG_FILE_NAME))
}

/// Load configuration from `path`.
///
/// Returns Config::default() if the file is missing or unreadable.
#[instrument(name = "load_config")]
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(error = %e, path = %path.display(), "Failed to read config, using defaults");
            return Config::default();
        }
    };

    match serde_json::from_str::<Config>(&content) {
        Ok(config) => {
            info!(path = %path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            let hint = if e.to_string().contains("unknown variant") {
                "\n\nHint: 'platform' must be one of \"win\", \"mac\" or \"linux\"."
            } else {
                ""
            };
            warn!(
                error = %e,
                path = %path.display(),
                hint = %hint,
                "Failed to parse config JSON, using defaults"
            );
            Config::default()
        }
    }
}

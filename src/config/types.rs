//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;
use crate::shortcuts::Platform;

/// Engine configuration, read from `~/.shortcut-engine/config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Force a platform instead of detecting the host (default: detect)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Where persisted overrides live (default: ~/.shortcut-engine/shortcuts.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides_path: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            platform: None,
            overrides_path: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// The configured platform, or the host platform.
    pub fn get_platform(&self) -> Platform {
        Platform::resolve(self.platform)
    }

    /// The configured overrides path, or the default one under the app dir.
    pub fn get_overrides_path(&self) -> PathBuf {
        self.overrides_path
            .clone()
            .unwrap_or_else(|| app_dir().join(OVERRIDES_FILE_NAME))
    }
}

/// `~/.shortcut-engine`, or a temp dir fallback when there is no home.
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(APP_DIR_NAME))
        .unwrap_or_else(|| std::env::temp_dir().join(APP_DIR_NAME))
}

//! Configuration module - Engine settings
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.shortcut-engine/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, DISPATCH_SEPARATOR, DISPLAY_SEPARATOR,
    NO_BINDING, OVERRIDES_FILE_NAME,
};

pub use types::{app_dir, Config};

pub use loader::{load_config, load_config_from};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

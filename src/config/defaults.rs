//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Separator between tokens in display text ("⌘ + ⇧ + C")
pub const DISPLAY_SEPARATOR: &str = " + ";

/// Separator between tokens in dispatch text ("ctrl+shift+c")
pub const DISPATCH_SEPARATOR: &str = "+";

/// Dispatch text that tells the key listener to unbind
pub const NO_BINDING: &str = "none";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// App directory under the user's home
pub const APP_DIR_NAME: &str = ".shortcut-engine";

/// Config file name inside the app directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Persisted override file name inside the app directory
pub const OVERRIDES_FILE_NAME: &str = "shortcuts.json";

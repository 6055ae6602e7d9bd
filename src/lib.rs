//! Shortcut Engine - resolution, validation and formatting of keyboard shortcuts
//!
//! This library merges built-in shortcut definitions with user overrides,
//! interprets raw key events, validates new bindings and renders them for
//! display and for hotkey dispatch.

pub mod config;
pub mod error;
pub mod logging;
pub mod shortcuts;

pub use error::{Result, ShortcutError};

//! Core shortcut vocabulary: platforms, shortcut identifiers and key tokens.
//!
//! This module provides:
//! - `Platform` - The injected host platform (win, mac, linux)
//! - `ShortcutName` - The closed set of shortcut identifiers
//! - Key token constants and classification helpers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing an identifier string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("unknown platform '{0}'")]
    UnknownPlatform(String),
    #[error("unknown shortcut '{0}'")]
    UnknownShortcut(String),
}

/// Platform used for parsing and formatting.
///
/// Always passed in explicitly; nothing in the engine reads the host
/// environment except `Platform::current()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Win,
    Mac,
    Linux,
}

impl Platform {
    /// Detect the host platform at compile time.
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::Mac
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Win
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Platform::Linux
        }
    }

    /// An explicit platform always wins; otherwise fall back to the host.
    pub fn resolve(explicit: Option<Platform>) -> Self {
        explicit.unwrap_or_else(Self::current)
    }

    pub fn is_mac(self) -> bool {
        self == Platform::Mac
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Win => "win",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "win" | "windows" | "win32" => Ok(Platform::Win),
            "mac" | "macos" | "darwin" => Ok(Platform::Mac),
            "linux" => Ok(Platform::Linux),
            _ => Err(IdentifierError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Identifier of a shortcut.
///
/// The string forms are stored inside persisted overrides, so they must never
/// be renamed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutName {
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ShowSettings,
    ShowApp,
    MiniWindow,
    SelectionAssistantToggle,
    SelectionAssistantSelectText,
    NewTopic,
    ToggleShowAssistants,
    ToggleShowTopics,
    CopyLastMessage,
    SearchMessageInChat,
    SearchMessage,
    ClearTopic,
    ToggleNewContext,
    ExitFullscreen,
}

impl ShortcutName {
    pub const ALL: [ShortcutName; 17] = [
        ShortcutName::ZoomIn,
        ShortcutName::ZoomOut,
        ShortcutName::ZoomReset,
        ShortcutName::ShowSettings,
        ShortcutName::ShowApp,
        ShortcutName::MiniWindow,
        ShortcutName::SelectionAssistantToggle,
        ShortcutName::SelectionAssistantSelectText,
        ShortcutName::NewTopic,
        ShortcutName::ToggleShowAssistants,
        ShortcutName::ToggleShowTopics,
        ShortcutName::CopyLastMessage,
        ShortcutName::SearchMessageInChat,
        ShortcutName::SearchMessage,
        ShortcutName::ClearTopic,
        ShortcutName::ToggleNewContext,
        ShortcutName::ExitFullscreen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShortcutName::ZoomIn => "zoom_in",
            ShortcutName::ZoomOut => "zoom_out",
            ShortcutName::ZoomReset => "zoom_reset",
            ShortcutName::ShowSettings => "show_settings",
            ShortcutName::ShowApp => "show_app",
            ShortcutName::MiniWindow => "mini_window",
            ShortcutName::SelectionAssistantToggle => "selection_assistant_toggle",
            ShortcutName::SelectionAssistantSelectText => "selection_assistant_select_text",
            ShortcutName::NewTopic => "new_topic",
            ShortcutName::ToggleShowAssistants => "toggle_show_assistants",
            ShortcutName::ToggleShowTopics => "toggle_show_topics",
            ShortcutName::CopyLastMessage => "copy_last_message",
            ShortcutName::SearchMessageInChat => "search_message_in_chat",
            ShortcutName::SearchMessage => "search_message",
            ShortcutName::ClearTopic => "clear_topic",
            ShortcutName::ToggleNewContext => "toggle_new_context",
            ShortcutName::ExitFullscreen => "exit_fullscreen",
        }
    }
}

impl fmt::Display for ShortcutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShortcutName {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShortcutName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| IdentifierError::UnknownShortcut(s.to_string()))
    }
}

// =============================================================================
// KEY TOKENS
// =============================================================================

/// Cross-platform accelerator: Ctrl on Windows/Linux, Command on macOS.
pub const COMMAND_OR_CONTROL: &str = "CommandOrControl";
pub const CTRL: &str = "Ctrl";
pub const ALT: &str = "Alt";
pub const META: &str = "Meta";
pub const SHIFT: &str = "Shift";

/// Every token that counts as a modifier for validation.
pub const MODIFIER_TOKENS: [&str; 5] = [COMMAND_OR_CONTROL, CTRL, ALT, META, SHIFT];

pub fn is_modifier(token: &str) -> bool {
    MODIFIER_TOKENS.contains(&token)
}

/// `F` followed by one or more ASCII digits.
pub fn is_function_key(token: &str) -> bool {
    let Some(digits) = token.strip_prefix('F') else {
        return false;
    };
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Build an owned key sequence from string literals.
pub fn key_sequence(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

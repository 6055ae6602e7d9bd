//! Rendering of key sequences.
//!
//! Two independent forms:
//! - display text for people (`⌘ + ⇧ + C` on macOS, `Ctrl + Shift + C` elsewhere)
//! - dispatch text for the hotkey matcher (`meta+shift+c` / `ctrl+shift+c`)

use serde::{Deserialize, Serialize};

use super::resolve::ResolvedShortcut;
use super::types::Platform;
use crate::config::{DISPATCH_SEPARATOR, DISPLAY_SEPARATOR, NO_BINDING};

/// Render tokens for display, joined with `" + "`.
pub fn display(tokens: &[String], platform: Platform) -> String {
    tokens
        .iter()
        .map(|token| display_token(token, platform))
        .collect::<Vec<_>>()
        .join(DISPLAY_SEPARATOR)
}

fn display_token(token: &str, platform: Platform) -> String {
    let (command_or_control, control, alt, shift) = if platform.is_mac() {
        ("⌘", "⌃", "⌥", "⇧")
    } else {
        ("Ctrl", "Ctrl", "Alt", "Shift")
    };
    let meta = match platform {
        Platform::Mac => "⌘",
        Platform::Win => "Win",
        Platform::Linux => "Super",
    };

    match token {
        "CommandOrControl" => command_or_control,
        "Command" | "Cmd" | "Meta" => meta,
        "Ctrl" | "Control" => control,
        "Alt" => alt,
        "Shift" => shift,
        "ArrowUp" => "↑",
        "ArrowDown" => "↓",
        "ArrowLeft" => "←",
        "ArrowRight" => "→",
        "Comma" => ",",
        "Minus" => "-",
        "Equal" => "=",
        "BracketLeft" => "[",
        "BracketRight" => "]",
        "Slash" => "/",
        "Semicolon" => ";",
        "Backslash" => "\\",
        "Quote" => "'",
        other => return capitalize_first(other),
    }
    .to_string()
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render tokens for the hotkey matcher: lower-case, joined with `"+"`.
pub fn dispatch(tokens: &[String], platform: Platform) -> String {
    tokens
        .iter()
        .map(|token| dispatch_token(token, platform))
        .collect::<Vec<_>>()
        .join(DISPATCH_SEPARATOR)
}

fn dispatch_token(token: &str, platform: Platform) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "commandorcontrol" if platform.is_mac() => "meta".to_string(),
        "commandorcontrol" => "ctrl".to_string(),
        "command" | "cmd" => "meta".to_string(),
        "control" => "ctrl".to_string(),
        _ => lower,
    }
}

/// What the key-listening subsystem receives for one shortcut.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyBinding {
    /// Dispatch text, or `"none"` when the listener must be switched off.
    pub keys: String,
    pub enabled: bool,
    pub description: String,
}

/// Build the listener binding for a resolved shortcut.
///
/// A disabled shortcut, or one without keys, gets the `"none"` sentinel so the
/// listener unbinds instead of matching an empty combination.
pub fn dispatch_binding(
    shortcut: &ResolvedShortcut,
    platform: Platform,
    description: impl Into<String>,
) -> HotkeyBinding {
    let keys = if shortcut.enabled && !shortcut.keys.is_empty() {
        dispatch(&shortcut.keys, platform)
    } else {
        NO_BINDING.to_string()
    };

    HotkeyBinding {
        keys,
        enabled: shortcut.enabled,
        description: description.into(),
    }
}

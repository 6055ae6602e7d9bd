//! Key event interpretation.
//!
//! Turns one keyboard interaction (modifier flags + physical key code) into a
//! canonical token sequence. "No usable key" is an empty sequence, never an
//! error: the caller keeps listening for the next event.

use serde::{Deserialize, Serialize};

use super::types::{Platform, ALT, COMMAND_OR_CONTROL, CTRL, META, SHIFT};

/// A raw keyboard interaction.
///
/// `code` is the physical key code (`KeyA`, `Digit5`, `NumpadEnter`, ...),
/// independent of keyboard layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
    #[serde(default)]
    pub shift: bool,
    pub code: String,
}

impl KeyEvent {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// Parse a key event into `[modifiers..., end key]`.
///
/// Modifier order is fixed: control flag, Alt, meta flag, Shift. On macOS the
/// meta (Command) flag becomes `CommandOrControl` and control stays a plain
/// `Ctrl`; elsewhere control becomes `CommandOrControl` and meta stays `Meta`.
pub fn parse_key_event(event: &KeyEvent, platform: Platform) -> Vec<String> {
    let Some(end_key) = end_key_token(&event.code) else {
        return Vec::new();
    };

    let (ctrl_token, meta_token) = if platform.is_mac() {
        (CTRL, COMMAND_OR_CONTROL)
    } else {
        (COMMAND_OR_CONTROL, META)
    };

    let mut tokens = Vec::with_capacity(5);
    if event.ctrl {
        tokens.push(ctrl_token.to_string());
    }
    if event.alt {
        tokens.push(ALT.to_string());
    }
    if event.meta {
        tokens.push(meta_token.to_string());
    }
    if event.shift {
        tokens.push(SHIFT.to_string());
    }
    tokens.push(end_key);
    tokens
}

/// Map a physical key code to its end-key token.
pub fn end_key_token(code: &str) -> Option<String> {
    if let Some(letter) = code.strip_prefix("Key") {
        return single_char(letter, |c| c.is_ascii_uppercase());
    }
    if let Some(digit) = code
        .strip_prefix("Digit")
        .or_else(|| code.strip_prefix("Numpad"))
    {
        if let Some(token) = single_char(digit, |c| c.is_ascii_digit()) {
            return Some(token);
        }
    }
    if let Some(number) = code.strip_prefix('F') {
        let digits_only = !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit());
        return match number.parse::<u8>() {
            Ok(1..=19) if digits_only && !number.starts_with('0') => Some(code.to_string()),
            _ => None,
        };
    }

    let token = match code {
        "Space" | "Enter" | "Backspace" | "Tab" | "Delete" | "Insert" | "Home" | "End"
        | "PageUp" | "PageDown" | "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" => code,
        "NumpadEnter" => "Enter",
        "Backquote" => "`",
        "Period" => ".",
        _ => return None,
    };
    Some(token.to_string())
}

fn single_char(s: &str, accept: impl Fn(char) -> bool) -> Option<String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if accept(c) => Some(c.to_string()),
        _ => None,
    }
}

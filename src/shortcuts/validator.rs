//! Accept/reject decisions for candidate key sequences.
//!
//! All checks compare canonical tokens, never display or dispatch text.

use super::registry::ShortcutDefinition;
use super::resolve::ResolvedShortcut;
use super::store::UserOverride;
use super::types::{is_function_key, is_modifier, ShortcutName};

/// Whether `tokens` may be bound as a shortcut.
///
/// Bare letters and digits would swallow normal typing, so a sequence needs a
/// modifier plus a regular key. Function keys are accepted on their own.
pub fn is_acceptable(tokens: &[String]) -> bool {
    let has_modifier = tokens.iter().any(|t| is_modifier(t));
    let has_key = tokens.iter().any(|t| !is_modifier(t));
    let has_function_key = tokens.iter().any(|t| is_function_key(t));

    (has_modifier && has_key && tokens.len() >= 2) || has_function_key
}

/// Whether another shortcut already uses `candidate`.
///
/// The shortcut being edited (`excluding`) and shortcuts with no keys never
/// count as duplicates.
pub fn is_duplicate(
    all_resolved: &[ResolvedShortcut],
    candidate: &[String],
    excluding: ShortcutName,
) -> bool {
    all_resolved.iter().any(|existing| {
        existing.name != excluding && !existing.keys.is_empty() && existing.keys == candidate
    })
}

/// Whether the override's keys differ from the definition's defaults.
///
/// Toggling `enabled` alone does not count as a modification.
pub fn is_modified(definition: &ShortcutDefinition, user_override: Option<&UserOverride>) -> bool {
    user_override.is_some_and(|o| o.keys != definition.keys)
}

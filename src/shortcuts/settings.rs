//! Shortcut editing workflow.
//!
//! `ShortcutSettings` is the single entry point for consumers: it parses key
//! events, validates candidates, writes accepted edits into the override store
//! and hands out resolved, formatted shortcuts. Refused edits leave the store
//! untouched.

use tracing::{debug, info};

use super::format::{self, HotkeyBinding};
use super::parser::{parse_key_event, KeyEvent};
use super::registry::Registry;
use super::resolve::{ResolvedShortcut, Resolver};
use super::store::{ChangeListener, OverrideStore, UserOverride};
use super::types::{Platform, ShortcutName};
use super::validator;

/// Result of an edit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The store was updated.
    Applied,
    /// The key event had no usable end key yet; keep listening.
    Incomplete,
    /// The sequence is not an acceptable shortcut.
    Rejected,
    /// Another shortcut already uses the sequence.
    Duplicate,
    /// The shortcut cannot be changed by the user.
    NotEditable,
    /// The registry has no such shortcut.
    Unknown,
}

impl EditOutcome {
    pub fn is_applied(self) -> bool {
        self == EditOutcome::Applied
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EditOutcome::Applied => "applied",
            EditOutcome::Incomplete => "incomplete",
            EditOutcome::Rejected => "rejected",
            EditOutcome::Duplicate => "duplicate",
            EditOutcome::NotEditable => "not_editable",
            EditOutcome::Unknown => "unknown",
        }
    }
}

/// Registry + override store + platform, wired together.
pub struct ShortcutSettings<'r, S: OverrideStore> {
    registry: &'r Registry,
    store: S,
    platform: Platform,
}

impl<'r, S: OverrideStore> ShortcutSettings<'r, S> {
    pub fn new(registry: &'r Registry, store: S, platform: Platform) -> Self {
        Self {
            registry,
            store,
            platform,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Register a listener for override changes (e.g. the persistence layer).
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.store.subscribe(listener);
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn resolver(&self) -> Resolver<'_, S> {
        Resolver::new(self.registry, &self.store, self.platform)
    }

    pub fn resolve(&self, name: ShortcutName) -> Option<ResolvedShortcut> {
        self.resolver().resolve(name)
    }

    pub fn resolve_all(&self) -> Vec<ResolvedShortcut> {
        self.resolver().resolve_all()
    }

    /// Whether the user changed the keys away from the default.
    pub fn is_modified(&self, name: ShortcutName) -> bool {
        let Some(definition) = self.registry.lookup(name) else {
            return false;
        };
        validator::is_modified(definition, self.store.get(name).as_ref())
    }

    pub fn display(&self, name: ShortcutName) -> Option<String> {
        self.resolve(name)
            .map(|shortcut| format::display(&shortcut.keys, self.platform))
    }

    pub fn dispatch_binding(
        &self,
        name: ShortcutName,
        description: impl Into<String>,
    ) -> Option<HotkeyBinding> {
        let shortcut = self.resolve(name)?;
        let binding = format::dispatch_binding(&shortcut, self.platform, description);
        Some(binding)
    }

    /// Bind the shortcut to whatever the key event parses to.
    pub fn record(&mut self, name: ShortcutName, event: &KeyEvent) -> EditOutcome {
        let tokens = parse_key_event(event, self.platform);
        if tokens.is_empty() {
            return self.refused(name, EditOutcome::Incomplete);
        }
        self.update_keys(name, tokens)
    }

    /// Bind the shortcut to `keys`, keeping its enabled state.
    pub fn update_keys(&mut self, name: ShortcutName, keys: Vec<String>) -> EditOutcome {
        let current = match self.editable(name) {
            Ok(current) => current,
            Err(outcome) => return self.refused(name, outcome),
        };
        if !validator::is_acceptable(&keys) {
            return self.refused(name, EditOutcome::Rejected);
        }
        if validator::is_duplicate(&self.resolve_all(), &keys, name) {
            return self.refused(name, EditOutcome::Duplicate);
        }

        self.write(UserOverride {
            name,
            keys,
            enabled: current.enabled,
        })
    }

    /// Switch the shortcut on or off, keeping its keys.
    ///
    /// Switching on is refused while another shortcut holds the same keys.
    pub fn set_enabled(&mut self, name: ShortcutName, enabled: bool) -> EditOutcome {
        let current = match self.editable(name) {
            Ok(current) => current,
            Err(outcome) => return self.refused(name, outcome),
        };
        if enabled && validator::is_duplicate(&self.resolve_all(), &current.keys, name) {
            return self.refused(name, EditOutcome::Duplicate);
        }

        self.write(UserOverride {
            name,
            keys: current.keys,
            enabled,
        })
    }

    pub fn toggle(&mut self, name: ShortcutName) -> EditOutcome {
        match self.resolve(name) {
            Some(current) => self.set_enabled(name, !current.enabled),
            None => self.refused(name, EditOutcome::Unknown),
        }
    }

    /// Remove the key binding but keep the override (and enabled state).
    pub fn clear(&mut self, name: ShortcutName) -> EditOutcome {
        match self.editable(name) {
            Ok(current) => self.write(UserOverride {
                name,
                keys: Vec::new(),
                enabled: current.enabled,
            }),
            Err(outcome) => self.refused(name, outcome),
        }
    }

    /// Put the default keys and enabled state back.
    ///
    /// The override stays in place holding the defaults; only `reset_all`
    /// removes overrides.
    pub fn reset(&mut self, name: ShortcutName) -> EditOutcome {
        if let Err(outcome) = self.editable(name) {
            return self.refused(name, outcome);
        }
        let Some(definition) = self.registry.lookup(name) else {
            return self.refused(name, EditOutcome::Unknown);
        };
        let keys = definition.keys.clone();
        let enabled = definition.enabled_by_default;
        if validator::is_duplicate(&self.resolve_all(), &keys, name) {
            return self.refused(name, EditOutcome::Duplicate);
        }

        self.write(UserOverride {
            name,
            keys,
            enabled,
        })
    }

    /// Drop every override.
    pub fn reset_all(&mut self) {
        info!(
            event_type = "shortcut_edit",
            action = "reset_all",
            "Resetting all shortcuts"
        );
        self.store.remove_all();
    }

    /// Shortcuts hidden on this platform count as unknown for editing.
    fn editable(&self, name: ShortcutName) -> Result<ResolvedShortcut, EditOutcome> {
        let supported = self
            .registry
            .lookup(name)
            .is_some_and(|definition| definition.is_supported_on(self.platform));
        if !supported {
            return Err(EditOutcome::Unknown);
        }

        match self.resolve(name) {
            Some(current) if current.editable => Ok(current),
            Some(_) => Err(EditOutcome::NotEditable),
            None => Err(EditOutcome::Unknown),
        }
    }

    fn write(&mut self, user_override: UserOverride) -> EditOutcome {
        info!(
            event_type = "shortcut_edit",
            shortcut = %user_override.name,
            keys = ?user_override.keys,
            enabled = user_override.enabled,
            "Shortcut updated"
        );
        self.store.set(user_override);
        EditOutcome::Applied
    }

    fn refused(&self, name: ShortcutName, outcome: EditOutcome) -> EditOutcome {
        debug!(
            event_type = "shortcut_edit",
            shortcut = %name,
            outcome = outcome.as_str(),
            "Shortcut edit refused"
        );
        outcome
    }
}

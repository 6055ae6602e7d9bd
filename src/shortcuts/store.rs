//! User override storage.
//!
//! The engine only talks to the `OverrideStore` trait. `MemoryOverrideStore`
//! is the in-process implementation; persisting its contents is left to
//! whoever subscribes to its change notifications.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::ShortcutName;

/// A user-supplied replacement for a shortcut's keys and enabled state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOverride {
    pub name: ShortcutName,
    pub keys: Vec<String>,
    pub enabled: bool,
}

/// Called after every mutation with the full, ordered override list.
pub type ChangeListener = Box<dyn FnMut(&[UserOverride])>;

/// Storage for user overrides.
///
/// Every call is a single atomic read or write; implementations must make a
/// write visible to the very next read.
pub trait OverrideStore {
    fn get(&self, name: ShortcutName) -> Option<UserOverride>;
    fn set(&mut self, user_override: UserOverride);
    fn remove(&mut self, name: ShortcutName);
    fn remove_all(&mut self);
    fn subscribe(&mut self, listener: ChangeListener);
}

/// Ordered in-memory override store.
///
/// Overrides keep the order in which they were first created, matching the
/// order of the persisted record list.
#[derive(Default)]
pub struct MemoryOverrideStore {
    overrides: Vec<UserOverride>,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for MemoryOverrideStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryOverrideStore")
            .field("overrides", &self.overrides)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl MemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store without notifying anyone.
    pub fn with_overrides(overrides: impl IntoIterator<Item = UserOverride>) -> Self {
        let mut store = Self::new();
        for user_override in overrides {
            store.upsert(user_override);
        }
        store
    }

    pub fn overrides(&self) -> &[UserOverride] {
        &self.overrides
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    fn upsert(&mut self, user_override: UserOverride) {
        match self
            .overrides
            .iter_mut()
            .find(|existing| existing.name == user_override.name)
        {
            Some(existing) => *existing = user_override,
            None => self.overrides.push(user_override),
        }
    }

    fn notify(&mut self) {
        debug!(
            event_type = "overrides_changed",
            count = self.overrides.len(),
            listeners = self.listeners.len(),
            "Shortcut overrides changed"
        );
        for listener in &mut self.listeners {
            listener(&self.overrides);
        }
    }
}

impl OverrideStore for MemoryOverrideStore {
    fn get(&self, name: ShortcutName) -> Option<UserOverride> {
        self.overrides.iter().find(|o| o.name == name).cloned()
    }

    fn set(&mut self, user_override: UserOverride) {
        self.upsert(user_override);
        self.notify();
    }

    fn remove(&mut self, name: ShortcutName) {
        let before = self.overrides.len();
        self.overrides.retain(|o| o.name != name);
        if self.overrides.len() != before {
            self.notify();
        }
    }

    fn remove_all(&mut self) {
        self.overrides.clear();
        self.notify();
    }

    fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }
}

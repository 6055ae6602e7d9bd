//! Merged view of definitions and user overrides.
//!
//! Nothing here is cached: every call reads the store again, so a mutation is
//! visible to the very next resolve.

use serde::{Deserialize, Serialize};

use super::registry::{Registry, ShortcutDefinition};
use super::store::{OverrideStore, UserOverride};
use super::types::{Platform, ShortcutName};

/// Read-only merge of a definition and its optional override.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedShortcut {
    pub name: ShortcutName,
    pub keys: Vec<String>,
    pub enabled: bool,
    pub editable: bool,
    pub system: bool,
}

/// Overlay `user_override` on `definition`.
///
/// Keys and enabled state come from the override when there is one;
/// editability always comes from the definition.
pub fn merge(
    definition: &ShortcutDefinition,
    user_override: Option<&UserOverride>,
) -> ResolvedShortcut {
    let (keys, enabled) = match user_override {
        Some(o) => (o.keys.clone(), o.enabled),
        None => (definition.keys.clone(), definition.enabled_by_default),
    };

    ResolvedShortcut {
        name: definition.name,
        keys,
        enabled,
        editable: definition.editable,
        system: definition.system,
    }
}

/// Resolves shortcuts for one platform against a registry and an override store.
pub struct Resolver<'a, S: OverrideStore + ?Sized> {
    registry: &'a Registry,
    store: &'a S,
    platform: Platform,
}

impl<'a, S: OverrideStore + ?Sized> Resolver<'a, S> {
    pub fn new(registry: &'a Registry, store: &'a S, platform: Platform) -> Self {
        Self {
            registry,
            store,
            platform,
        }
    }

    /// Resolve one shortcut; `None` if the registry does not know it.
    pub fn resolve(&self, name: ShortcutName) -> Option<ResolvedShortcut> {
        let definition = self.registry.lookup(name)?;
        Some(merge(definition, self.store.get(name).as_ref()))
    }

    /// All shortcuts supported on the platform, system shortcuts first.
    ///
    /// Within each group the registry order is kept.
    pub fn resolve_all(&self) -> Vec<ResolvedShortcut> {
        self.supported()
            .filter(|d| d.system)
            .chain(self.supported().filter(|d| !d.system))
            .map(|d| merge(d, self.store.get(d.name).as_ref()))
            .collect()
    }

    fn supported(&self) -> impl Iterator<Item = &'a ShortcutDefinition> {
        let platform = self.platform;
        self.registry
            .definitions()
            .iter()
            .filter(move |d| d.is_supported_on(platform))
    }
}

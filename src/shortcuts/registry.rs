//! Immutable table of shortcut definitions.
//!
//! Uses Vec for deterministic iteration order and HashMap for O(1) lookup.

use std::collections::HashMap;

use super::types::{key_sequence, Platform, ShortcutName, COMMAND_OR_CONTROL, SHIFT};

/// Default configuration for one shortcut identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutDefinition {
    pub name: ShortcutName,
    pub keys: Vec<String>,
    pub enabled_by_default: bool,
    pub editable: bool,
    /// Application-level shortcut, listed before the rest.
    pub system: bool,
    /// `None` means every platform.
    pub platforms: Option<Vec<Platform>>,
}

impl ShortcutDefinition {
    pub fn new(name: ShortcutName, keys: &[&str]) -> Self {
        Self {
            name,
            keys: key_sequence(keys),
            enabled_by_default: true,
            editable: true,
            system: false,
            platforms: None,
        }
    }

    pub fn system(mut self) -> Self {
        self.system = true;
        self
    }

    pub fn non_editable(mut self) -> Self {
        self.editable = false;
        self
    }

    pub fn disabled_by_default(mut self) -> Self {
        self.enabled_by_default = false;
        self
    }

    pub fn only_on(mut self, platforms: &[Platform]) -> Self {
        self.platforms = Some(platforms.to_vec());
        self
    }

    pub fn is_supported_on(&self, platform: Platform) -> bool {
        self.platforms
            .as_ref()
            .map_or(true, |platforms| platforms.contains(&platform))
    }
}

/// Lookup table of all shortcut definitions.
///
/// Built once and then only read; pass it by reference to whatever needs it.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    definitions: Vec<ShortcutDefinition>,
    name_to_index: HashMap<ShortcutName, usize>,
}

impl Registry {
    /// Build a registry from definitions in insertion order.
    ///
    /// A later definition for the same name replaces the earlier one in place.
    pub fn from_definitions(definitions: impl IntoIterator<Item = ShortcutDefinition>) -> Self {
        let mut registry = Self::default();
        for definition in definitions {
            registry.insert(definition);
        }
        registry
    }

    fn insert(&mut self, definition: ShortcutDefinition) {
        if let Some(&existing_index) = self.name_to_index.get(&definition.name) {
            self.definitions[existing_index] = definition;
        } else {
            self.name_to_index
                .insert(definition.name, self.definitions.len());
            self.definitions.push(definition);
        }
    }

    /// The application's built-in shortcut table.
    pub fn builtin() -> Self {
        use ShortcutName::*;

        Self::from_definitions([
            ShortcutDefinition::new(ZoomIn, &[COMMAND_OR_CONTROL, "="])
                .system()
                .non_editable(),
            ShortcutDefinition::new(ZoomOut, &[COMMAND_OR_CONTROL, "-"])
                .system()
                .non_editable(),
            ShortcutDefinition::new(ZoomReset, &[COMMAND_OR_CONTROL, "0"])
                .system()
                .non_editable(),
            ShortcutDefinition::new(ShowSettings, &[COMMAND_OR_CONTROL, ","])
                .system()
                .non_editable(),
            ShortcutDefinition::new(ShowApp, &[]).system(),
            ShortcutDefinition::new(MiniWindow, &[COMMAND_OR_CONTROL, "E"])
                .system()
                .disabled_by_default(),
            ShortcutDefinition::new(SelectionAssistantToggle, &[])
                .system()
                .disabled_by_default()
                .only_on(&[Platform::Win, Platform::Mac]),
            ShortcutDefinition::new(SelectionAssistantSelectText, &[])
                .system()
                .disabled_by_default()
                .only_on(&[Platform::Win, Platform::Mac]),
            ShortcutDefinition::new(NewTopic, &[COMMAND_OR_CONTROL, "N"]),
            ShortcutDefinition::new(ToggleShowAssistants, &[COMMAND_OR_CONTROL, "["]),
            ShortcutDefinition::new(ToggleShowTopics, &[COMMAND_OR_CONTROL, "]"]),
            ShortcutDefinition::new(CopyLastMessage, &[COMMAND_OR_CONTROL, SHIFT, "C"]),
            ShortcutDefinition::new(SearchMessageInChat, &[COMMAND_OR_CONTROL, "F"]),
            ShortcutDefinition::new(SearchMessage, &[COMMAND_OR_CONTROL, SHIFT, "F"]),
            ShortcutDefinition::new(ClearTopic, &[COMMAND_OR_CONTROL, "L"]),
            ShortcutDefinition::new(ToggleNewContext, &[COMMAND_OR_CONTROL, "K"]),
            ShortcutDefinition::new(ExitFullscreen, &["Escape"]).non_editable(),
        ])
    }

    pub fn lookup(&self, name: ShortcutName) -> Option<&ShortcutDefinition> {
        self.name_to_index
            .get(&name)
            .and_then(|&i| self.definitions.get(i))
    }

    /// All definitions in insertion order.
    pub fn definitions(&self) -> &[ShortcutDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

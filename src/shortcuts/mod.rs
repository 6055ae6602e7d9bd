//! Keyboard shortcut resolution engine.
//!
//! This module provides:
//! - An immutable registry of default shortcut definitions
//! - Key event parsing into canonical, platform-normalized tokens
//! - Validation (acceptable sequences, duplicate detection)
//! - Display and dispatch rendering
//! - The merged view of defaults and user overrides
//!
//! # Architecture
//!
//! Data flows one way: a key event is parsed into tokens, validated against
//! the registry and the currently resolved shortcuts, written into the
//! override store, and then re-resolved and formatted. The registry and the
//! platform are injected values; nothing reads global state.
//!
//! # Example
//!
//! ```ignore
//! use shortcut_engine::shortcuts::{KeyEvent, MemoryOverrideStore, Platform, Registry, ShortcutName, ShortcutSettings};
//!
//! let registry = Registry::builtin();
//! let mut settings = ShortcutSettings::new(&registry, MemoryOverrideStore::new(), Platform::Mac);
//! settings.record(ShortcutName::NewTopic, &KeyEvent::new("KeyM").meta());
//! println!("{}", settings.display(ShortcutName::NewTopic).unwrap()); // ⌘ + M
//! ```

mod format;
mod parser;
mod persistence;
mod registry;
mod resolve;
mod settings;
mod store;
mod types;
mod validator;




#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;

pub use types::{
    is_function_key, is_modifier, key_sequence, IdentifierError, Platform, ShortcutName, ALT,
    COMMAND_OR_CONTROL, CTRL, META, MODIFIER_TOKENS, SHIFT,
};

pub use registry::{Registry, ShortcutDefinition};

pub use parser::{end_key_token, parse_key_event, KeyEvent};

pub use validator::{is_acceptable, is_duplicate, is_modified};

pub use format::{dispatch, dispatch_binding, display, HotkeyBinding};

pub use resolve::{merge, ResolvedShortcut, Resolver};

pub use store::{ChangeListener, MemoryOverrideStore, OverrideStore, UserOverride};

pub use persistence::{from_records, load_records, record_listener, to_records, PersistedShortcut};

pub use settings::{EditOutcome, ShortcutSettings};

use super::*;

fn settings(registry: &Registry, platform: Platform) -> ShortcutSettings<'_, MemoryOverrideStore> {
    ShortcutSettings::new(registry, MemoryOverrideStore::new(), platform)
}

#[test]
fn recording_a_valid_event_applies_it() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Mac);

    let outcome = settings.record(ShortcutName::NewTopic, &KeyEvent::new("KeyM").meta());
    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(
        settings.resolve(ShortcutName::NewTopic).map(|r| r.keys),
        Some(key_sequence(&["CommandOrControl", "M"]))
    );
    let display = settings.display(ShortcutName::NewTopic);
    assert_eq!(display.as_deref(), Some("⌘ + M"));
    assert!(settings.is_modified(ShortcutName::NewTopic));
}

#[test]
fn incomplete_event_leaves_binding_untouched() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Win);

    let outcome = settings.record(ShortcutName::NewTopic, &KeyEvent::new("AltLeft").alt());
    assert_eq!(outcome, EditOutcome::Incomplete);
    assert!(!settings.is_modified(ShortcutName::NewTopic));
    assert!(settings.into_store().is_empty());
}

#[test]
fn unacceptable_sequence_is_rejected() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Win);

    let outcome = settings.record(ShortcutName::NewTopic, &KeyEvent::new("KeyQ"));
    assert_eq!(outcome, EditOutcome::Rejected);
    assert_eq!(
        settings.resolve(ShortcutName::NewTopic).map(|r| r.keys),
        Some(key_sequence(&["CommandOrControl", "N"]))
    );
}

#[test]
fn bare_function_key_is_accepted() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Linux);

    let outcome = settings.record(ShortcutName::ClearTopic, &KeyEvent::new("F5"));
    assert_eq!(outcome, EditOutcome::Applied);
}

#[test]
fn duplicate_of_another_shortcut_is_refused() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Win);

    // toggle_new_context already owns CommandOrControl+K
    let outcome = settings.record(ShortcutName::ClearTopic, &KeyEvent::new("KeyK").ctrl());
    assert_eq!(outcome, EditOutcome::Duplicate);

    let outcome = settings.record(ShortcutName::ClearTopic, &KeyEvent::new("KeyJ").ctrl());
    assert_eq!(outcome, EditOutcome::Applied);
}

#[test]
fn rebinding_to_own_keys_is_not_a_duplicate() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Win);

    let outcome = settings.record(ShortcutName::NewTopic, &KeyEvent::new("KeyN").ctrl());
    assert_eq!(outcome, EditOutcome::Applied);
    assert!(!settings.is_modified(ShortcutName::NewTopic));
}

#[test]
fn non_editable_shortcuts_are_refused_silently() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Win);

    let name = ShortcutName::ZoomIn;
    let outcome = settings.update_keys(name, key_sequence(&["CommandOrControl", "Alt", "P"]));
    assert_eq!(outcome, EditOutcome::NotEditable);
    assert_eq!(settings.toggle(name), EditOutcome::NotEditable);
    assert_eq!(settings.clear(name), EditOutcome::NotEditable);
    assert_eq!(settings.reset(name), EditOutcome::NotEditable);
    assert!(settings.into_store().is_empty());
}

#[test]
fn unknown_shortcut_is_reported() {
    let definition = ShortcutDefinition::new(ShortcutName::NewTopic, &["F2"]);
    let registry = Registry::from_definitions([definition]);
    let mut settings = settings(&registry, Platform::Win);

    let name = ShortcutName::ClearTopic;
    assert_eq!(settings.toggle(name), EditOutcome::Unknown);
    assert_eq!(settings.resolve(name), None);
    assert_eq!(settings.dispatch_binding(name, "x"), None);
}

#[test]
fn shortcuts_hidden_on_the_platform_cannot_be_edited() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Linux);
    let hidden = ShortcutName::SelectionAssistantToggle;
    let keys = key_sequence(&["CommandOrControl", "J"]);

    let outcome = settings.update_keys(hidden, keys.clone());
    assert_eq!(outcome, EditOutcome::Unknown);
    assert_eq!(settings.set_enabled(hidden, true), EditOutcome::Unknown);
    assert_eq!(settings.toggle(hidden), EditOutcome::Unknown);
    assert_eq!(settings.clear(hidden), EditOutcome::Unknown);
    assert_eq!(settings.reset(hidden), EditOutcome::Unknown);

    // the combination stays free for a visible shortcut
    let outcome = settings.update_keys(ShortcutName::NewTopic, keys);
    assert_eq!(outcome, EditOutcome::Applied);

    let store = settings.into_store();
    assert_eq!(store.len(), 1);
    assert_eq!(store.overrides()[0].name, ShortcutName::NewTopic);
}

#[test]
fn enabling_a_shortcut_whose_keys_are_taken_is_refused() {
    let registry = Registry::builtin();
    let disabled = UserOverride {
        name: ShortcutName::ClearTopic,
        keys: key_sequence(&["CommandOrControl", "N"]),
        enabled: false,
    };
    let store = MemoryOverrideStore::with_overrides([disabled]);
    let mut settings = ShortcutSettings::new(&registry, store, Platform::Mac);
    let name = ShortcutName::ClearTopic;

    // new_topic still holds CommandOrControl+N
    assert_eq!(settings.set_enabled(name, true), EditOutcome::Duplicate);
    assert_eq!(settings.toggle(name), EditOutcome::Duplicate);
    assert!(!settings.resolve(name).unwrap().enabled);

    // switching off never collides
    assert_eq!(settings.set_enabled(name, false), EditOutcome::Applied);

    let outcome = settings.update_keys(ShortcutName::NewTopic, key_sequence(&["F2"]));
    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(settings.toggle(name), EditOutcome::Applied);
    assert!(settings.resolve(name).unwrap().enabled);
}

#[test]
fn toggle_keeps_keys_and_is_not_a_modification() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Linux);
    let name = ShortcutName::NewTopic;

    assert_eq!(settings.toggle(name), EditOutcome::Applied);
    let resolved = settings.resolve(name).unwrap();
    assert!(!resolved.enabled);
    assert_eq!(resolved.keys, key_sequence(&["CommandOrControl", "N"]));
    assert!(!settings.is_modified(name));

    let binding = settings.dispatch_binding(name, "New topic").unwrap();
    assert_eq!(binding.keys, "none");

    settings.toggle(name);
    let binding = settings.dispatch_binding(name, "New topic").unwrap();
    assert_eq!(binding.keys, "ctrl+n");
}

#[test]
fn clear_keeps_override_with_no_keys() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Win);
    let name = ShortcutName::CopyLastMessage;

    assert_eq!(settings.clear(name), EditOutcome::Applied);
    let resolved = settings.resolve(name).unwrap();
    assert!(resolved.keys.is_empty());
    assert!(settings.is_modified(name));

    // the freed combination can be taken by another shortcut
    let keys = key_sequence(&["CommandOrControl", "Shift", "C"]);
    let outcome = settings.update_keys(ShortcutName::ClearTopic, keys);
    assert_eq!(outcome, EditOutcome::Applied);
}

#[test]
fn reset_single_is_idempotent() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Win);
    let name = ShortcutName::NewTopic;
    settings.update_keys(name, key_sequence(&["F2"]));
    settings.toggle(name);

    assert_eq!(settings.reset(name), EditOutcome::Applied);
    let once = settings.resolve_all();
    assert_eq!(settings.reset(name), EditOutcome::Applied);
    let twice = settings.resolve_all();

    assert_eq!(once, twice);
    let resolved = settings.resolve(name).unwrap();
    assert_eq!(resolved.keys, key_sequence(&["CommandOrControl", "N"]));
    assert!(resolved.enabled);
    assert!(!settings.is_modified(name));

    // reset keeps the override record around
    assert_eq!(settings.into_store().len(), 1);
}

#[test]
fn reset_refuses_when_default_keys_are_taken() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Win);
    let name = ShortcutName::NewTopic;
    settings.update_keys(name, key_sequence(&["F2"]));
    let keys = key_sequence(&["CommandOrControl", "N"]);
    settings.update_keys(ShortcutName::ClearTopic, keys);

    assert_eq!(settings.reset(name), EditOutcome::Duplicate);
    assert_eq!(
        settings.resolve(name).map(|r| r.keys),
        Some(key_sequence(&["F2"]))
    );
}

#[test]
fn reset_all_removes_every_override() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Win);
    settings.update_keys(ShortcutName::NewTopic, key_sequence(&["F2"]));
    settings.toggle(ShortcutName::ClearTopic);

    settings.reset_all();

    let empty = MemoryOverrideStore::new();
    let resolver = Resolver::new(&registry, &empty, Platform::Win);
    assert_eq!(settings.resolve_all(), resolver.resolve_all());
    assert!(settings.into_store().is_empty());
}

#[test]
fn subscribers_receive_persisted_records() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Win);
    let written = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&written);
    let listener = record_listener(move |records| *sink.borrow_mut() = records);
    settings.subscribe(listener);

    settings.update_keys(ShortcutName::NewTopic, key_sequence(&["F2"]));
    settings.toggle(ShortcutName::ClearTopic);

    let names: Vec<_> = written.borrow().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, vec!["new_topic", "clear_topic"]);

    settings.reset_all();
    assert!(written.borrow().is_empty());
}

#[test]
fn enabled_resolved_shortcuts_stay_unique_after_edits() {
    let registry = Registry::builtin();
    let mut settings = settings(&registry, Platform::Mac);
    settings.record(ShortcutName::NewTopic, &KeyEvent::new("KeyK").meta());
    settings.record(ShortcutName::ClearTopic, &KeyEvent::new("KeyN").meta());
    settings.record(ShortcutName::SearchMessage, &KeyEvent::new("F6"));
    settings.set_enabled(ShortcutName::MiniWindow, true);

    let all = settings.resolve_all();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            if a.enabled && b.enabled && !a.keys.is_empty() {
                assert_ne!(a.keys, b.keys, "{} and {} collide", a.name, b.name);
            }
        }
    }
}

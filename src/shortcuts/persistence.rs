//! Persisted override record format.
//!
//! Every mutation hands the persistence collaborator an ordered list of:
//! ```json
//! [{"name":"new_topic","keys":["CommandOrControl","M"],"enabled":true,"system":false,"editable":true}]
//! ```
//! `system` and `editable` are kept for older readers and are always written
//! as `false` / `true`. How the list is stored is up to the collaborator.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::store::{ChangeListener, UserOverride};
use super::types::ShortcutName;
use crate::error::{Result, ShortcutError};

/// One entry of the persisted override list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedShortcut {
    pub name: String,
    pub keys: Vec<String>,
    pub enabled: bool,
    #[serde(default)]
    pub system: bool,
    #[serde(default = "default_editable")]
    pub editable: bool,
}

fn default_editable() -> bool {
    true
}

impl From<&UserOverride> for PersistedShortcut {
    fn from(user_override: &UserOverride) -> Self {
        Self {
            name: user_override.name.as_str().to_string(),
            keys: user_override.keys.clone(),
            enabled: user_override.enabled,
            system: false,
            editable: true,
        }
    }
}

/// Convert overrides into the persisted record list, keeping their order.
pub fn to_records(overrides: &[UserOverride]) -> Vec<PersistedShortcut> {
    overrides.iter().map(PersistedShortcut::from).collect()
}

/// Convert persisted records back into overrides.
///
/// Records naming a shortcut this build does not know are skipped.
pub fn from_records(records: &[PersistedShortcut]) -> Vec<UserOverride> {
    records
        .iter()
        .filter_map(|record| match record.name.parse::<ShortcutName>() {
            Ok(name) => Some(UserOverride {
                name,
                keys: record.keys.clone(),
                enabled: record.enabled,
            }),
            Err(e) => {
                warn!(error = %e, "Skipping persisted override for unknown shortcut");
                None
            }
        })
        .collect()
}

/// Wrap a record sink as a store change listener.
pub fn record_listener(mut sink: impl FnMut(Vec<PersistedShortcut>) + 'static) -> ChangeListener {
    Box::new(move |all: &[UserOverride]| sink(to_records(all)))
}

/// Read a persisted record list from a JSON file.
///
/// A missing file means "no overrides yet".
pub fn load_records(path: &Path) -> Result<Vec<PersistedShortcut>> {
    if !path.exists() {
        info!(path = %path.display(), "No persisted shortcut overrides found");
        return Ok(Vec::new());
    }

    let content =
        fs::read_to_string(path).map_err(|e| ShortcutError::io(path.display().to_string(), e))?;
    let records: Vec<PersistedShortcut> = serde_json::from_str(&content)?;
    info!(
        path = %path.display(),
        count = records.len(),
        "Loaded persisted shortcut overrides"
    );
    Ok(records)
}

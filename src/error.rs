use thiserror::Error;
use tracing::warn;

use crate::shortcuts::IdentifierError;

/// Errors from the I/O edges of the crate (config and persisted overrides).
///
/// The shortcut engine itself never fails; it reports refusals through
/// `EditOutcome`, empty token sequences and `None`.
#[derive(Error, Debug)]
pub enum ShortcutError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Identifier(#[from] IdentifierError),
}

impl ShortcutError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io { path, .. } => format!("Could not read {}", path),
            Self::Json(e) => format!("Invalid file format: {}", e),
            Self::Identifier(e) => e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShortcutError>;

/// Extension trait for logging a failed result and carrying on.
///
/// Includes the caller's file/line via `#[track_caller]`.
///
/// ```ignore
/// use shortcut_engine::error::ResultExt;
///
/// let records = load_records(&path).warn_on_err().unwrap_or_default();
/// ```
pub trait ResultExt<T> {
    /// Log as warning with caller location and return None.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = %error,
                    file = caller.file(),
                    line = caller.line(),
                    "Continuing without result"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_values_pass_through() {
        let result: std::result::Result<u8, String> = Ok(7);
        assert_eq!(result.warn_on_err(), Some(7));
    }

    #[test]
    fn errors_become_none() {
        let result: std::result::Result<u8, String> = Err("boom".to_string());
        assert_eq!(result.warn_on_err(), None);
    }

    #[test]
    fn identifier_errors_convert() {
        let parsed = "nope".parse::<crate::shortcuts::ShortcutName>();
        let err = ShortcutError::from(parsed.unwrap_err());
        assert_eq!(err.user_message(), "unknown shortcut 'nope'");
    }

    #[test]
    fn io_errors_mention_the_path() {
        let err = ShortcutError::io(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.user_message(), "Could not read /tmp/missing.json");
    }
}

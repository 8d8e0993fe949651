//! Session configuration.
//!
//! # Responsibility
//! - Hold tunables for one calendar session (defaults, prompts, policies).
//! - Parse host-provided JSON with defaults for omitted fields.
//!
//! # Invariants
//! - A config handed to a session has passed `validate()`.

use crate::model::event::{is_hex_color, DEFAULT_EVENT_COLOR, TITLE_MAX_CHARS};
use crate::surface::CalendarView;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Prompt shown before an event is deleted.
pub const DEFAULT_CONFIRM_DELETE_MESSAGE: &str = "Вы уверены, что хотите удалить это событие?";
/// Notification raised by the top-level "add event" button.
pub const DEFAULT_ADD_EVENT_NOTICE: &str = "Добавить событие";
/// Editor heading when creating an event.
pub const HEADING_NEW_EVENT: &str = "Добавить событие";
/// Editor heading when editing an event.
pub const HEADING_EDIT_EVENT: &str = "Редактировать событие";

/// Tunables for one calendar session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Color assigned to drafts opened on an empty slot.
    pub default_color: String,
    /// Title input cap, in characters.
    pub title_max_chars: usize,
    /// Close the editor after a declined delete confirmation.
    pub close_on_declined_delete: bool,
    /// View the surface starts in.
    pub default_view: CalendarView,
    pub confirm_delete_message: String,
    pub add_event_notice: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_EVENT_COLOR.to_string(),
            title_max_chars: TITLE_MAX_CHARS,
            close_on_declined_delete: true,
            default_view: CalendarView::Month,
            confirm_delete_message: DEFAULT_CONFIRM_DELETE_MESSAGE.to_string(),
            add_event_notice: DEFAULT_ADD_EVENT_NOTICE.to_string(),
        }
    }
}

impl SessionConfig {
    /// Parses and validates a JSON config document.
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed JSON or unknown fields.
    /// - Validation errors from [`SessionConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks config-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_hex_color(self.default_color.as_str()) {
            return Err(ConfigError::InvalidDefaultColor(
                self.default_color.clone(),
            ));
        }
        if self.title_max_chars == 0 || self.title_max_chars > TITLE_MAX_CHARS {
            return Err(ConfigError::InvalidTitleLimit(self.title_max_chars));
        }
        Ok(())
    }
}

/// Config parse/validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidDefaultColor(String),
    InvalidTitleLimit(usize),
    Parse(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDefaultColor(value) => {
                write!(f, "default_color must be `#rrggbb`, got `{value}`")
            }
            Self::InvalidTitleLimit(value) => write!(
                f,
                "title_max_chars must be within 1..={TITLE_MAX_CHARS}, got {value}"
            ),
            Self::Parse(message) => write!(f, "invalid session config: {message}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SessionConfig};
    use crate::surface::CalendarView;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SessionConfig::from_json("{}").expect("empty config should parse");
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.default_color, "#4a90e2");
        assert!(config.close_on_declined_delete);
    }

    #[test]
    fn partial_document_overrides_selected_fields() {
        let config = SessionConfig::from_json(
            r#"{"default_view":"week","close_on_declined_delete":false}"#,
        )
        .expect("partial config should parse");
        assert_eq!(config.default_view, CalendarView::Week);
        assert!(!config.close_on_declined_delete);
        assert_eq!(config.title_max_chars, 30);
    }

    #[test]
    fn rejects_bad_color_and_limits() {
        let err = SessionConfig::from_json(r#"{"default_color":"blue"}"#).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDefaultColor("blue".to_string()));

        let err = SessionConfig::from_json(r#"{"title_max_chars":31}"#).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTitleLimit(31));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = SessionConfig::from_json(r#"{"timezone":"UTC"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

//! Editor draft form state.
//!
//! # Responsibility
//! - Hold the scratch copy of event fields while the editor is open.
//! - Apply input-level constraints (title cap) on every edit.
//!
//! # Invariants
//! - A draft never touches the event store; only commit does.

use crate::model::event::{
    truncate_title, validate_fields, CalendarEvent, EventId, EventValidationError,
};

/// Editable copy of event fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub color: String,
    /// Unix epoch milliseconds.
    pub start: i64,
    /// Unix epoch milliseconds.
    pub end: i64,
}

impl EventDraft {
    /// Blank draft for a freshly selected slot.
    pub fn blank(color: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            title: String::new(),
            color: color.into(),
            start,
            end,
        }
    }

    /// Prefilled draft copied from a committed event.
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            title: event.title.clone(),
            color: event.color.clone(),
            start: event.start,
            end: event.end,
        }
    }

    /// Replaces the title, truncating input past `max_chars`.
    pub fn set_title(&mut self, title: &str, max_chars: usize) {
        self.title = truncate_title(title, max_chars);
    }

    /// Replaces the color. Format is checked at commit time.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Replaces the time window. Ordering is checked at commit time.
    pub fn set_range(&mut self, start: i64, end: i64) {
        self.start = start;
        self.end = end;
    }

    /// Validates the draft against record invariants.
    pub fn validate(&self, title_max_chars: usize) -> Result<(), EventValidationError> {
        validate_fields(
            self.title.as_str(),
            self.color.as_str(),
            self.start,
            self.end,
            title_max_chars,
        )
    }

    /// Builds the committed record for `id` after validation.
    pub fn commit_as(
        &self,
        id: EventId,
        title_max_chars: usize,
    ) -> Result<CalendarEvent, EventValidationError> {
        self.validate(title_max_chars)?;
        let event = CalendarEvent {
            id,
            title: self.title.clone(),
            color: self.color.clone(),
            start: self.start,
            end: self.end,
        };
        if event.id.is_nil() {
            return Err(EventValidationError::NilId);
        }
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::EventDraft;
    use crate::model::event::EventValidationError;
    use uuid::Uuid;

    #[test]
    fn set_title_truncates_past_cap() {
        let mut draft = EventDraft::blank("#4a90e2", 0, 1);
        draft.set_title("abcdefghij", 4);
        assert_eq!(draft.title, "abcd");
    }

    #[test]
    fn commit_rejects_reversed_window() {
        let draft = EventDraft::blank("#4a90e2", 200, 100);
        let err = draft.commit_as(Uuid::new_v4(), 30).unwrap_err();
        assert_eq!(
            err,
            EventValidationError::InvalidRange {
                start: 200,
                end: 100
            }
        );
    }

    #[test]
    fn commit_rejects_nil_id() {
        let draft = EventDraft::blank("#4a90e2", 0, 0);
        let err = draft.commit_as(Uuid::nil(), 30).unwrap_err();
        assert_eq!(err, EventValidationError::NilId);
    }
}

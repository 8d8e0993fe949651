//! Calendar event domain model.
//!
//! # Responsibility
//! - Define the committed event record rendered by the calendar surface.
//! - Own validation rules shared by commit and drag/drop paths.
//!
//! # Invariants
//! - `id` is stable for the session and never reused for another event.
//! - `start` is never later than `end`.
//! - `title` holds at most [`TITLE_MAX_CHARS`] characters.
//! - `color` is a `#rrggbb` hex string.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Maximum title length accepted by the editor and the store.
pub const TITLE_MAX_CHARS: usize = 30;

/// Background color given to drafts opened on an empty slot.
pub const DEFAULT_EVENT_COLOR: &str = "#4a90e2";

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color regex"));

/// Surrogate key assigned to each event when it is first committed.
pub type EventId = Uuid;

/// Validation errors for event records and drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// Nil UUID cannot identify an event.
    NilId,
    /// Title exceeds the configured character cap.
    TitleTooLong { max: usize, actual: usize },
    /// Color is not a `#rrggbb` string.
    InvalidColor(String),
    /// `end` is earlier than `start`.
    InvalidRange { start: i64, end: i64 },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "event id must not be nil"),
            Self::TitleTooLong { max, actual } => {
                write!(f, "title has {actual} characters; at most {max} allowed")
            }
            Self::InvalidColor(value) => write!(f, "invalid event color `{value}`"),
            Self::InvalidRange { start, end } => {
                write!(f, "event end ({end}) must be >= event start ({start})")
            }
        }
    }
}

impl Error for EventValidationError {}

/// Committed calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    /// Hex background color, e.g. `#4a90e2`.
    pub color: String,
    /// Unix epoch milliseconds.
    pub start: i64,
    /// Unix epoch milliseconds.
    pub end: i64,
}

impl CalendarEvent {
    /// Creates a validated event with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        color: impl Into<String>,
        start: i64,
        end: i64,
    ) -> Result<Self, EventValidationError> {
        Self::with_id(Uuid::new_v4(), title, color, start, end)
    }

    /// Creates a validated event keeping a caller-provided id.
    ///
    /// Replacement commits use this so the record keeps its identity.
    pub fn with_id(
        id: EventId,
        title: impl Into<String>,
        color: impl Into<String>,
        start: i64,
        end: i64,
    ) -> Result<Self, EventValidationError> {
        let event = Self {
            id,
            title: title.into(),
            color: color.into(),
            start,
            end,
        };
        event.validate()?;
        Ok(event)
    }

    /// Checks record invariants against the default title cap.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        self.validate_with_limit(TITLE_MAX_CHARS)
    }

    /// Checks record invariants against an explicit title cap.
    pub fn validate_with_limit(&self, title_max_chars: usize) -> Result<(), EventValidationError> {
        if self.id.is_nil() {
            return Err(EventValidationError::NilId);
        }
        validate_fields(
            self.title.as_str(),
            self.color.as_str(),
            self.start,
            self.end,
            title_max_chars,
        )
    }

    /// Returns whether this event intersects the half-open window `[from, to)`.
    ///
    /// Zero-length events count when their instant falls inside the window.
    pub fn overlaps(&self, from: i64, to: i64) -> bool {
        if self.start == self.end {
            return self.start >= from && self.start < to;
        }
        self.start < to && self.end > from
    }

    /// Event length in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.end.abs_diff(self.start)
    }
}

/// Shared field checks for committed events and drafts.
pub(crate) fn validate_fields(
    title: &str,
    color: &str,
    start: i64,
    end: i64,
    title_max_chars: usize,
) -> Result<(), EventValidationError> {
    let actual = title.chars().count();
    if actual > title_max_chars {
        return Err(EventValidationError::TitleTooLong {
            max: title_max_chars,
            actual,
        });
    }
    if !is_hex_color(color) {
        return Err(EventValidationError::InvalidColor(color.to_string()));
    }
    if end < start {
        return Err(EventValidationError::InvalidRange { start, end });
    }
    Ok(())
}

/// Returns whether `value` is a `#rrggbb` color string.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_RE.is_match(value)
}

/// Cuts `value` to at most `max_chars` characters, respecting char boundaries.
pub fn truncate_title(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

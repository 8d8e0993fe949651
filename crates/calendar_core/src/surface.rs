//! Calendar surface collaborator contract.
//!
//! # Responsibility
//! - Describe what the rendering surface consumes (events, views, styles).
//! - Define the blocking prompts the session calls back into.
//!
//! # Invariants
//! - Nothing here renders; the host UI implements the traits.

use crate::model::event::CalendarEvent;
use serde::{Deserialize, Serialize};

/// Display granularity offered by the calendar surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
}

impl CalendarView {
    /// Views the surface lets the user switch between.
    pub const ALL: [CalendarView; 3] = [Self::Month, Self::Week, Self::Day];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "month" => Some(Self::Month),
            "week" => Some(Self::Week),
            "day" => Some(Self::Day),
            _ => None,
        }
    }
}

/// Time range reported by the surface when an empty slot is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRange {
    /// Unix epoch milliseconds.
    pub start: i64,
    /// Unix epoch milliseconds.
    pub end: i64,
}

impl SlotRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// Inline style the surface applies to one rendered event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventStyle {
    pub background_color: String,
    pub border_radius: &'static str,
    pub color: &'static str,
    pub padding: &'static str,
    pub cursor: &'static str,
}

/// Resolves the visual style for one event.
///
/// Only the background follows the event; the rest is fixed chrome.
pub fn event_style(event: &CalendarEvent) -> EventStyle {
    EventStyle {
        background_color: event.color.clone(),
        border_radius: "5px",
        color: "white",
        padding: "5px",
        cursor: "pointer",
    }
}

/// Snapshot handed to the surface on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceProps {
    pub events: Vec<CalendarEvent>,
    pub views: Vec<CalendarView>,
    pub default_view: CalendarView,
    pub selectable: bool,
}

/// Blocking yes/no prompt shown before deletion.
pub trait ConfirmDialog {
    /// Returns `true` when the user confirms.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Dismissible notification sink.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Dialog with a fixed answer, for hosts that collect the answer up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl ConfirmDialog for FixedAnswer {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}

/// Notifier that keeps messages for the host to drain later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueuedNotifier {
    pub messages: Vec<String>,
}

impl Notifier for QueuedNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::{event_style, CalendarView};
    use crate::model::event::CalendarEvent;

    #[test]
    fn view_parse_is_case_insensitive() {
        assert_eq!(CalendarView::parse(" Week "), Some(CalendarView::Week));
        assert_eq!(CalendarView::parse("agenda"), None);
        assert_eq!(CalendarView::default(), CalendarView::Month);
    }

    #[test]
    fn style_uses_event_color_as_background() {
        let event = CalendarEvent::new("Standup", "#ff0000", 0, 1).unwrap();
        let style = event_style(&event);
        assert_eq!(style.background_color, "#ff0000");
        assert_eq!(style.border_radius, "5px");
        assert_eq!(style.color, "white");
    }
}

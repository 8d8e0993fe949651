//! Core domain logic for the calendar editor.
//! This crate is the single source of truth for event and editor invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod surface;

pub use config::{ConfigError, SessionConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::EventDraft;
pub use model::event::{
    CalendarEvent, EventId, EventValidationError, DEFAULT_EVENT_COLOR, TITLE_MAX_CHARS,
};
pub use repo::event_repo::{EventRepository, InMemoryEventRepository};
pub use service::calendar_service::{CalendarService, DeleteOutcome, SaveOutcome};
pub use service::editor::{Commit, EditorError, EditorSession, EditorState};
pub use surface::{
    event_style, CalendarView, ConfirmDialog, EventStyle, FixedAnswer, Notifier, QueuedNotifier,
    SlotRange, SurfaceProps,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

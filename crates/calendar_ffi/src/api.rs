//! FFI use-case API for the calendar UI shell.
//!
//! # Responsibility
//! - Mount one process-wide calendar session for the UI to drive.
//! - Expose surface callbacks and editor actions as sync FRB functions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Calls are serialized through one session lock.
//! - Timestamps cross the boundary as Unix epoch milliseconds.

use calendar_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CalendarEvent, CalendarService, DeleteOutcome, EditorState, FixedAnswer,
    InMemoryEventRepository, QueuedNotifier, SaveOutcome, SessionConfig, SlotRange,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

type Session = CalendarService<InMemoryEventRepository>;

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Event row handed to the calendar surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEventItem {
    pub id: String,
    pub title: String,
    pub color: String,
    pub start_epoch_ms: i64,
    pub end_epoch_ms: i64,
}

impl From<CalendarEvent> for CalendarEventItem {
    fn from(value: CalendarEvent) -> Self {
        Self {
            id: value.id.to_string(),
            title: value.title,
            color: value.color,
            start_epoch_ms: value.start,
            end_epoch_ms: value.end,
        }
    }
}

/// Snapshot of the modal editor for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    /// `closed|editing_new|editing_existing`.
    pub state: String,
    /// Id of the event under edit.
    pub selected_id: Option<String>,
    pub heading: Option<String>,
    pub title: String,
    pub color: String,
    pub start_epoch_ms: Option<i64>,
    pub end_epoch_ms: Option<i64>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarActionResponse {
    /// Whether the action took effect.
    pub ok: bool,
    /// Event id touched by the action, if any.
    pub event_id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl CalendarActionResponse {
    fn success(message: impl Into<String>, event_id: Option<Uuid>) -> Self {
        Self {
            ok: true,
            event_id: event_id.map(|id| id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            event_id: None,
            message: message.into(),
        }
    }
}

/// Surface callback: an empty slot was selected.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_select_slot(start_epoch_ms: i64, end_epoch_ms: i64) -> CalendarActionResponse {
    session().on_select_slot(SlotRange::new(start_epoch_ms, end_epoch_ms));
    CalendarActionResponse::success("editor opened for new event", None)
}

/// Surface callback: an existing event was clicked.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_select_event(event_id: String) -> CalendarActionResponse {
    let id = match parse_event_id(event_id.as_str()) {
        Ok(id) => id,
        Err(response) => return response,
    };
    if session().on_select_event(id) {
        CalendarActionResponse::success("editor opened for existing event", Some(id))
    } else {
        CalendarActionResponse::failure(format!("event not found: {id}"))
    }
}

/// Draft edit: title (truncated to the title cap).
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_set_title(title: String) -> CalendarActionResponse {
    match session().set_title(title.as_str()) {
        Ok(()) => CalendarActionResponse::success("title updated", None),
        Err(err) => CalendarActionResponse::failure(err.to_string()),
    }
}

/// Draft edit: color.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_set_color(color: String) -> CalendarActionResponse {
    match session().set_color(color.as_str()) {
        Ok(()) => CalendarActionResponse::success("color updated", None),
        Err(err) => CalendarActionResponse::failure(err.to_string()),
    }
}

/// Commits the draft.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_save() -> CalendarActionResponse {
    match session().save() {
        Ok(SaveOutcome::Inserted(id)) => CalendarActionResponse::success("event created", Some(id)),
        Ok(SaveOutcome::Replaced(id)) => CalendarActionResponse::success("event updated", Some(id)),
        Ok(SaveOutcome::TargetMissing(id)) => {
            CalendarActionResponse::failure(format!("event not found: {id}"))
        }
        Err(err) => CalendarActionResponse::failure(err.to_string()),
    }
}

/// Discards the draft.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_cancel() -> CalendarActionResponse {
    session().cancel();
    CalendarActionResponse::success("editor closed", None)
}

/// Deletes the event under edit.
///
/// The UI shows the confirmation prompt itself (see
/// `calendar_confirm_delete_message`) and passes the answer in `confirmed`.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_delete(confirmed: bool) -> CalendarActionResponse {
    match session().delete(&mut FixedAnswer(confirmed)) {
        Ok(DeleteOutcome::Deleted(id)) => CalendarActionResponse::success("event deleted", Some(id)),
        Ok(DeleteOutcome::Declined(id)) => CalendarActionResponse {
            ok: false,
            event_id: Some(id.to_string()),
            message: "delete declined".to_string(),
        },
        Ok(DeleteOutcome::TargetMissing(id)) => {
            CalendarActionResponse::failure(format!("event not found: {id}"))
        }
        Err(err) => CalendarActionResponse::failure(err.to_string()),
    }
}

/// Prompt text the UI shows before calling `calendar_delete`.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_confirm_delete_message() -> String {
    session().config().confirm_delete_message.clone()
}

/// Surface callback: an event was dropped on a new range.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_move_event(
    event_id: String,
    start_epoch_ms: i64,
    end_epoch_ms: i64,
) -> CalendarActionResponse {
    let id = match parse_event_id(event_id.as_str()) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match session().on_event_moved(id, SlotRange::new(start_epoch_ms, end_epoch_ms)) {
        Ok(true) => CalendarActionResponse::success("event moved", Some(id)),
        Ok(false) => CalendarActionResponse::failure(format!("event not found: {id}")),
        Err(err) => CalendarActionResponse::failure(err.to_string()),
    }
}

/// Top-level "add event" button; returns the notice to display.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_add_event_notice() -> String {
    let mut notifier = QueuedNotifier::default();
    session().request_add_event(&mut notifier);
    notifier.messages.join("\n")
}

/// Committed events in store order.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_list_events() -> Vec<CalendarEventItem> {
    session()
        .events()
        .into_iter()
        .map(CalendarEventItem::from)
        .collect()
}

/// Committed events overlapping the visible window `[from, to)`.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_list_events_in_range(
    from_epoch_ms: i64,
    to_epoch_ms: i64,
) -> Vec<CalendarEventItem> {
    session()
        .events_in_range(from_epoch_ms, to_epoch_ms)
        .into_iter()
        .map(CalendarEventItem::from)
        .collect()
}

/// Current editor state and draft.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_editor_state() -> EditorSnapshot {
    let session = session();
    let editor = session.editor();
    let draft = editor.draft();
    EditorSnapshot {
        state: editor.state().as_str().to_string(),
        selected_id: match editor.state() {
            EditorState::EditingExisting(id) => Some(id.to_string()),
            EditorState::Closed | EditorState::EditingNew => None,
        },
        heading: editor.heading().map(str::to_string),
        title: draft.map(|d| d.title.clone()).unwrap_or_default(),
        color: draft.map(|d| d.color.clone()).unwrap_or_default(),
        start_epoch_ms: draft.map(|d| d.start),
        end_epoch_ms: draft.map(|d| d.end),
    }
}

/// Drops every event and closes the editor, starting a fresh session.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_reset() -> CalendarActionResponse {
    *session() = CalendarService::in_memory();
    CalendarActionResponse::success("session reset", None)
}

/// Applies a JSON session config and starts a fresh session with it.
///
/// Missing fields keep their defaults. On error the current session is kept.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_configure(config_json: String) -> CalendarActionResponse {
    let config = match SessionConfig::from_json(config_json.as_str()) {
        Ok(config) => config,
        Err(err) => {
            warn!("event=session_configure module=ffi status=error");
            return CalendarActionResponse::failure(err.to_string());
        }
    };
    *session() = CalendarService::new(InMemoryEventRepository::new(), config);
    CalendarActionResponse::success("session configured", None)
}

fn session() -> MutexGuard<'static, Session> {
    let lock = SESSION.get_or_init(|| Mutex::new(CalendarService::in_memory()));
    lock.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock module=ffi status=recovered");
        poisoned.into_inner()
    })
}

fn parse_event_id(raw: &str) -> Result<Uuid, CalendarActionResponse> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| CalendarActionResponse::failure(format!("invalid event id `{raw}`")))
}

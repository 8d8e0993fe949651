//! Calendar session service.
//!
//! # Responsibility
//! - Own the event store and the editor for one calendar session.
//! - Translate surface callbacks (slot/event selection, drag moves) into
//!   editor transitions and store commits.
//!
//! # Invariants
//! - The store changes only through save, confirmed delete, or move.
//! - Log lines carry ids and states only, never event titles.

use crate::config::SessionConfig;
use crate::model::event::{CalendarEvent, EventId, EventValidationError};
use crate::repo::event_repo::{EventRepository, InMemoryEventRepository};
use crate::service::editor::{Commit, EditorError, EditorSession, EditorState};
use crate::surface::{
    event_style, CalendarView, ConfirmDialog, EventStyle, Notifier, SlotRange, SurfaceProps,
};
use log::{info, warn};

/// Result of a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new event was appended.
    Inserted(EventId),
    /// The edited event was replaced in place.
    Replaced(EventId),
    /// The edited event had vanished from the store; nothing was written.
    TargetMissing(EventId),
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// User confirmed and the event was removed.
    Deleted(EventId),
    /// User confirmed but the event was already gone.
    TargetMissing(EventId),
    /// User declined; the store is unchanged.
    Declined(EventId),
}

/// One calendar session: committed events plus transient editor state.
pub struct CalendarService<R: EventRepository> {
    repo: R,
    editor: EditorSession,
    config: SessionConfig,
}

impl CalendarService<InMemoryEventRepository> {
    /// Creates an empty in-memory session with default config.
    pub fn in_memory() -> Self {
        Self::new(InMemoryEventRepository::new(), SessionConfig::default())
    }
}

impl<R: EventRepository> CalendarService<R> {
    /// Creates a session over `repo`.
    ///
    /// `config` is expected to have passed `SessionConfig::validate()`.
    pub fn new(repo: R, config: SessionConfig) -> Self {
        Self {
            repo,
            editor: EditorSession::new(),
            config,
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn editor(&self) -> &EditorSession {
        &self.editor
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Committed events in store order.
    pub fn events(&self) -> Vec<CalendarEvent> {
        self.repo.list()
    }

    /// Committed events visible in the window `[from, to)`.
    pub fn events_in_range(&self, from: i64, to: i64) -> Vec<CalendarEvent> {
        self.repo.list_in_range(from, to)
    }

    /// Render snapshot for the calendar surface.
    pub fn surface_props(&self) -> SurfaceProps {
        SurfaceProps {
            events: self.repo.list(),
            views: CalendarView::ALL.to_vec(),
            default_view: self.config.default_view,
            selectable: true,
        }
    }

    pub fn event_style(&self, event: &CalendarEvent) -> EventStyle {
        event_style(event)
    }

    /// Surface callback: an empty slot was selected.
    pub fn on_select_slot(&mut self, slot: SlotRange) {
        self.editor
            .open_new(slot, self.config.default_color.as_str());
        info!(
            "event=editor_open module=editor status=ok mode=new start={} end={}",
            slot.start, slot.end
        );
    }

    /// Surface callback: an existing event was clicked.
    ///
    /// Returns `false` and leaves the editor untouched when `id` is unknown.
    pub fn on_select_event(&mut self, id: EventId) -> bool {
        let Some(event) = self.repo.get(id) else {
            warn!("event=editor_open module=editor status=miss mode=edit id={id}");
            return false;
        };
        self.editor.open_existing(&event);
        info!("event=editor_open module=editor status=ok mode=edit id={id}");
        true
    }

    /// Surface callback: an event was dragged or resized to `range`.
    ///
    /// Commits through the same replace path as a save. Returns `Ok(false)`
    /// for unknown ids.
    ///
    /// # Errors
    /// - `EventValidationError::InvalidRange` when `range.end < range.start`.
    pub fn on_event_moved(
        &mut self,
        id: EventId,
        range: SlotRange,
    ) -> Result<bool, EventValidationError> {
        let Some(mut event) = self.repo.get(id) else {
            warn!("event=event_move module=store status=miss id={id}");
            return Ok(false);
        };
        event.start = range.start;
        event.end = range.end;
        event.validate_with_limit(self.config.title_max_chars)?;

        let replaced = self.repo.replace(id, event);
        if replaced {
            self.editor.sync_range(id, range.start, range.end);
        }
        info!(
            "event=event_move module=store status=ok id={id} start={} end={}",
            range.start, range.end
        );
        Ok(replaced)
    }

    /// Draft edit: title, truncated to the configured cap.
    pub fn set_title(&mut self, title: &str) -> Result<(), EditorError> {
        self.editor.set_title(title, self.config.title_max_chars)
    }

    /// Draft edit: color; format is checked on save.
    pub fn set_color(&mut self, color: &str) -> Result<(), EditorError> {
        self.editor.set_color(color)
    }

    /// Commits the draft and closes the editor.
    ///
    /// # Errors
    /// - `EditorError::NotEditing` when the editor is closed.
    /// - `EditorError::Validation` when the draft breaks record invariants;
    ///   the editor stays open with the draft intact.
    pub fn save(&mut self) -> Result<SaveOutcome, EditorError> {
        let commit = match self.editor.commit(self.config.title_max_chars) {
            Ok(commit) => commit,
            Err(err) => {
                warn!(
                    "event=editor_save module=editor status=error state={} error={}",
                    self.editor.state().as_str(),
                    err
                );
                return Err(err);
            }
        };

        let outcome = match commit {
            Commit::Insert(event) => {
                let id = event.id;
                self.repo.insert(event);
                SaveOutcome::Inserted(id)
            }
            Commit::Replace(id, event) => {
                if self.repo.replace(id, event) {
                    SaveOutcome::Replaced(id)
                } else {
                    SaveOutcome::TargetMissing(id)
                }
            }
        };
        info!("event=editor_save module=editor status=ok outcome={outcome:?}");
        Ok(outcome)
    }

    /// Discards the draft without touching the store.
    pub fn cancel(&mut self) {
        if self.editor.is_open() {
            info!(
                "event=editor_cancel module=editor status=ok state={}",
                self.editor.state().as_str()
            );
        }
        self.editor.close();
    }

    /// Deletes the event under edit after asking `dialog` for confirmation.
    ///
    /// On decline the editor closes when `close_on_declined_delete` is set,
    /// otherwise it stays open on the same draft.
    ///
    /// # Errors
    /// - `EditorError::NotEditing` when the editor is closed.
    /// - `EditorError::NothingToDelete` while creating a new event.
    pub fn delete(&mut self, dialog: &mut dyn ConfirmDialog) -> Result<DeleteOutcome, EditorError> {
        let id = match self.editor.state() {
            EditorState::Closed => return Err(EditorError::NotEditing),
            EditorState::EditingNew => return Err(EditorError::NothingToDelete),
            EditorState::EditingExisting(id) => id,
        };

        if !dialog.confirm(self.config.confirm_delete_message.as_str()) {
            if self.config.close_on_declined_delete {
                self.editor.close();
            }
            info!(
                "event=editor_delete module=editor status=declined id={id} editor_open={}",
                self.editor.is_open()
            );
            return Ok(DeleteOutcome::Declined(id));
        }

        let removed = self.repo.remove(id);
        self.editor.close();
        info!("event=editor_delete module=editor status=ok id={id} removed={removed}");
        Ok(if removed {
            DeleteOutcome::Deleted(id)
        } else {
            DeleteOutcome::TargetMissing(id)
        })
    }

    /// Top-level "add event" button: raises a notice, never opens the editor.
    pub fn request_add_event(&self, notifier: &mut dyn Notifier) {
        notifier.notify(self.config.add_event_notice.as_str());
        info!("event=add_event_notice module=surface status=ok");
    }
}

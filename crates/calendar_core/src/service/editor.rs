//! Editor session state machine.
//!
//! # Responsibility
//! - Track whether the modal editor is open and which event it targets.
//! - Own the draft until a save turns it into a store commit.
//!
//! # Invariants
//! - `draft` is `Some` exactly when `state != EditorState::Closed`.
//! - Field edits never change `state`.
//! - A rejected save leaves both `state` and `draft` untouched.

use crate::config::{HEADING_EDIT_EVENT, HEADING_NEW_EVENT};
use crate::model::draft::EventDraft;
use crate::model::event::{CalendarEvent, EventId, EventValidationError};
use crate::surface::SlotRange;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Modal editor lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// No modal shown.
    Closed,
    /// Creating an event from a selected slot.
    EditingNew,
    /// Editing the committed event with this id.
    EditingExisting(EventId),
}

impl EditorState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::EditingNew => "editing_new",
            Self::EditingExisting(_) => "editing_existing",
        }
    }
}

/// Editor operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The operation needs an open editor.
    NotEditing,
    /// Delete was requested while creating a new event.
    NothingToDelete,
    /// Draft failed commit validation.
    Validation(EventValidationError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEditing => write!(f, "editor is not open"),
            Self::NothingToDelete => write!(f, "new event has nothing to delete"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotEditing | Self::NothingToDelete => None,
        }
    }
}

impl From<EventValidationError> for EditorError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store mutation produced by a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    Insert(CalendarEvent),
    Replace(EventId, CalendarEvent),
}

/// Transient editor state, independent of the store until commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    state: EditorState,
    draft: Option<EventDraft>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            state: EditorState::Closed,
            draft: None,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn draft(&self) -> Option<&EventDraft> {
        self.draft.as_ref()
    }

    /// Modal visibility, derived from the state.
    pub fn is_open(&self) -> bool {
        self.state != EditorState::Closed
    }

    /// Id of the event under edit, if any.
    pub fn selected(&self) -> Option<EventId> {
        match self.state {
            EditorState::EditingExisting(id) => Some(id),
            EditorState::Closed | EditorState::EditingNew => None,
        }
    }

    /// Modal heading for the current mode; `None` when closed.
    pub fn heading(&self) -> Option<&'static str> {
        match self.state {
            EditorState::Closed => None,
            EditorState::EditingNew => Some(HEADING_NEW_EVENT),
            EditorState::EditingExisting(_) => Some(HEADING_EDIT_EVENT),
        }
    }

    /// Opens a blank draft over `slot`. Replaces any session in progress.
    pub fn open_new(&mut self, slot: SlotRange, default_color: &str) {
        self.draft = Some(EventDraft::blank(default_color, slot.start, slot.end));
        self.state = EditorState::EditingNew;
    }

    /// Opens a draft prefilled from `event`. Replaces any session in progress.
    pub fn open_existing(&mut self, event: &CalendarEvent) {
        self.draft = Some(EventDraft::from_event(event));
        self.state = EditorState::EditingExisting(event.id);
    }

    pub fn set_title(&mut self, title: &str, max_chars: usize) -> Result<(), EditorError> {
        self.draft_mut()?.set_title(title, max_chars);
        Ok(())
    }

    pub fn set_color(&mut self, color: &str) -> Result<(), EditorError> {
        self.draft_mut()?.set_color(color);
        Ok(())
    }

    /// Moves the draft window when `id` is the event under edit.
    ///
    /// Returns whether the draft changed.
    pub fn sync_range(&mut self, id: EventId, start: i64, end: i64) -> bool {
        if self.selected() != Some(id) {
            return false;
        }
        match self.draft.as_mut() {
            Some(draft) => {
                draft.set_range(start, end);
                true
            }
            None => false,
        }
    }

    /// Validates the draft and closes the editor, yielding the store mutation.
    ///
    /// New events get a fresh id; edits keep the selected id.
    pub fn commit(&mut self, title_max_chars: usize) -> Result<Commit, EditorError> {
        let draft = self.draft.as_ref().ok_or(EditorError::NotEditing)?;
        let commit = match self.state {
            EditorState::Closed => return Err(EditorError::NotEditing),
            EditorState::EditingNew => {
                Commit::Insert(draft.commit_as(Uuid::new_v4(), title_max_chars)?)
            }
            EditorState::EditingExisting(id) => {
                Commit::Replace(id, draft.commit_as(id, title_max_chars)?)
            }
        };
        self.close();
        Ok(commit)
    }

    /// Discards the draft. Closing an already closed editor is a no-op.
    pub fn close(&mut self) {
        self.state = EditorState::Closed;
        self.draft = None;
    }

    fn draft_mut(&mut self) -> Result<&mut EventDraft, EditorError> {
        self.draft.as_mut().ok_or(EditorError::NotEditing)
    }
}

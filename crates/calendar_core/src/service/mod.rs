//! Calendar use-case services.
//!
//! # Responsibility
//! - Run the editor state machine against the event store.
//! - Keep UI/FFI layers decoupled from store details.

pub mod calendar_service;
pub mod editor;

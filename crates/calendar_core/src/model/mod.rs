//! Calendar domain model.
//!
//! # Responsibility
//! - Define committed event records and the editor's draft shape.
//! - Keep validation rules next to the data they guard.
//!
//! # Invariants
//! - Every committed event is identified by a stable `EventId`.
//! - Drafts are detached copies; editing one never mutates a record.

pub mod draft;
pub mod event;

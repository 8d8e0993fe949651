//! Event store abstractions.
//!
//! # Responsibility
//! - Define the store contract used by session services.
//! - Provide the in-memory implementation backing one calendar session.
//!
//! # Invariants
//! - Store operations are total; callers never handle store errors.

pub mod event_repo;

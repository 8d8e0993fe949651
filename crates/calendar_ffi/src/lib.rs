//! Flutter-facing bindings for the calendar core.

pub mod api;

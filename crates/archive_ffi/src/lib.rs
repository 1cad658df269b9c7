//! Flutter-facing bridge for the archive core.

pub mod api;

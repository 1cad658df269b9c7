//! Core use-case services.
//!
//! # Responsibility
//! - Combine loaded records, navigation state and image access into one
//!   session-level facade for the shell.
//! - Keep UI/FFI layers decoupled from store and view-model details.

pub mod archive_service;

pub use archive_service::ArchiveService;

//! Curated static copy shown alongside records.
//!
//! # Responsibility
//! - Hold per-decade overview prose and highlight bullets.
//! - Hold Home/About/sidebar copy.
//!
//! All text is compiled in; nothing here is loaded at runtime.

pub mod decades;
pub mod pages;

pub use decades::{decade_highlights, decade_overview};

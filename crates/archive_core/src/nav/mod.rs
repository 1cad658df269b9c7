//! Section navigation for the archive shell.
//!
//! # Responsibility
//! - Track the single selected section as an explicitly owned value.
//! - Compute previous/next targets across the decade chain.
//! - Project navigation state into button models for the shell.
//!
//! # Invariants
//! - Exactly one section is selected; the initial selection is Home.
//! - Previous/next only step through decades; Home and About are reached via
//!   direct selection.
//! - Boundary steps are inert, never errors.

pub mod controls;
pub mod state;

pub use controls::{NavButton, NavControls};
pub use state::{NavAction, NavigationState};

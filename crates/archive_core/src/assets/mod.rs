//! Image asset access.
//!
//! # Responsibility
//! - Define the "does file exist / load bytes" capability used by views.
//! - Provide the local filesystem implementation.
//!
//! # Invariants
//! - Failures are per image; callers degrade that one item to a placeholder.
//! - Decoding is left to the shell; core only moves bytes.

pub mod image_source;

pub use image_source::{FsImageSource, ImageError, ImageSource};

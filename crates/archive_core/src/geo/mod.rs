//! Geographic helpers for map projections.
//!
//! # Responsibility
//! - Turn free-text `"lat,lon"` cells into coordinate pairs.
//! - Report why a cell was rejected without surfacing it as an error.
//!
//! # Invariants
//! - Parsing is pure and total; malformed input maps to `None`.
//! - No range validation is applied to latitude/longitude.

pub mod location;

pub use location::{classify_location, parse_location, LocationIssue};

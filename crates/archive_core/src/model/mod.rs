//! Domain model for the decade-scoped archive.
//!
//! # Responsibility
//! - Define the canonical record shape loaded from the backing table.
//! - Define the fixed decade buckets and the navigable section order.
//!
//! # Invariants
//! - Every record belongs to exactly one `Decade`.
//! - Section order is fixed: Home, each decade in chronological order, About.

pub mod record;
pub mod section;

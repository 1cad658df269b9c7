//! Decade-scoped record selection.
//!
//! # Invariants
//! - Filtering is stable: matches keep their source relative order.
//! - An empty result is a valid "no data" state, never an error.

use crate::model::record::{Decade, Record};

/// Returns every record belonging to `decade`, in source order.
pub fn filter_by_decade(records: &[Record], decade: Decade) -> Vec<Record> {
    iter_decade(records, decade).cloned().collect()
}

/// Borrowing variant of [`filter_by_decade`].
pub fn iter_decade(records: &[Record], decade: Decade) -> impl Iterator<Item = &Record> {
    records.iter().filter(move |record| record.decade == decade)
}

/// Record counts per decade, in chronological order.
pub fn count_by_decade(records: &[Record]) -> Vec<(Decade, usize)> {
    Decade::ALL
        .into_iter()
        .map(|decade| (decade, iter_decade(records, decade).count()))
        .collect()
}

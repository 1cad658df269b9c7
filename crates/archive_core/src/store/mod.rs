//! Flat-table record storage.
//!
//! # Responsibility
//! - Read the backing CSV table into immutable records.
//! - Cache loaded records for the process lifetime.
//!
//! # Invariants
//! - Required columns are checked before any row is decoded.
//! - A load either yields every row or fails; partial tables are never cached.
//!
//! # See also
//! - crate::filter for decade-scoped views over loaded records.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod csv_store;

pub use csv_store::{load_records_from_reader, RecordStore, REQUIRED_COLUMNS};

pub type LoadResult<T> = Result<T, DataLoadError>;

/// Fatal startup error raised when the backing table cannot be loaded.
#[derive(Debug)]
pub enum DataLoadError {
    /// Backing file is missing or unreadable.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Header row lacks one of `REQUIRED_COLUMNS`.
    MissingColumn(&'static str),
    /// CSV framing/decoding failure.
    Csv(csv::Error),
    /// Row breaks a record invariant (1-based source line).
    InvalidRow { line: u64, reason: String },
}

impl Display for DataLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read record table `{}`: {source}", path.display())
            }
            Self::MissingColumn(column) => {
                write!(f, "record table is missing required column `{column}`")
            }
            Self::Csv(err) => write!(f, "malformed record table: {err}"),
            Self::InvalidRow { line, reason } => {
                write!(f, "invalid record on line {line}: {reason}")
            }
        }
    }
}

impl Error for DataLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv(err) => Some(err),
            Self::MissingColumn(_) | Self::InvalidRow { .. } => None,
        }
    }
}

impl From<csv::Error> for DataLoadError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

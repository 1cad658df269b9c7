//! CSV-backed record store.
//!
//! # Responsibility
//! - Decode CSV rows into `Record` values with null-checking only.
//! - Load the table once and hand out shared read-only slices.
//!
//! # Invariants
//! - Source row order is preserved.
//! - Empty cells decode as `None`.

use super::{DataLoadError, LoadResult};
use crate::model::record::{Decade, Record};
use log::{error, info, warn};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Columns that must appear in the header row.
pub const REQUIRED_COLUMNS: [&str; 4] = ["decade", "title", "image_path", "description"];

/// Raw table row before invariant checks.
#[derive(Debug, Deserialize)]
struct RecordRow {
    decade: Option<String>,
    title: Option<String>,
    architect: Option<String>,
    year_built: Option<String>,
    style: Option<String>,
    description: Option<String>,
    image_path: Option<String>,
    location: Option<String>,
}

/// Read-only record table loaded at most once per cache lifetime.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    cache: OnceCell<Arc<[Record]>>,
}

impl RecordStore {
    /// Creates a store for the table at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    /// Backing table location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns cached records, reading the table on first use.
    ///
    /// # Errors
    /// - `DataLoadError` when the table is missing or malformed. Failed loads
    ///   are not cached, so a later call retries the read.
    pub fn load(&self) -> LoadResult<Arc<[Record]>> {
        self.cache
            .get_or_try_init(|| read_records_file(&self.path).map(Arc::from))
            .map(Arc::clone)
    }

    /// Whether a successful load is currently cached.
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Drops the cached table; the next `load()` re-reads the file.
    pub fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            info!(
                "event=data_invalidate module=store status=ok path={}",
                self.path.display()
            );
        }
    }
}

fn read_records_file(path: &Path) -> LoadResult<Vec<Record>> {
    let started_at = Instant::now();
    info!(
        "event=data_load module=store status=start path={}",
        path.display()
    );

    let result = File::open(path)
        .map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(load_records_from_reader);

    match &result {
        Ok(records) => info!(
            "event=data_load module=store status=ok path={} rows={} duration_ms={}",
            path.display(),
            records.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=data_load module=store status=error path={} duration_ms={} error={}",
            path.display(),
            started_at.elapsed().as_millis(),
            err
        ),
    }

    result
}

/// Decodes a CSV table from any reader.
///
/// # Errors
/// - `MissingColumn` when a required header is absent.
/// - `Csv` on framing errors (e.g. ragged rows).
/// - `InvalidRow` when `decade`, `title` or `image_path` is empty, or
///   `decade` is outside the fixed set.
pub fn load_records_from_reader<R: Read>(reader: R) -> LoadResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DataLoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    let mut raw = csv::StringRecord::new();
    while reader.read_record(&mut raw)? {
        let line = raw.position().map_or(0, csv::Position::line);
        let row: RecordRow = raw.deserialize(Some(&headers))?;
        records.push(row_to_record(row, line)?);
    }

    Ok(records)
}

fn row_to_record(row: RecordRow, line: u64) -> LoadResult<Record> {
    let decade_text = require_cell(row.decade, "decade", line)?;
    let decade = decade_text
        .parse::<Decade>()
        .map_err(|err| DataLoadError::InvalidRow {
            line,
            reason: err.to_string(),
        })?;
    let title = require_cell(row.title, "title", line)?;
    let image_path = require_cell(row.image_path, "image_path", line)?;

    Ok(Record {
        decade,
        year_built: non_empty(row.year_built).and_then(|raw| parse_year(&raw, line)),
        title,
        architect: non_empty(row.architect),
        style: non_empty(row.style),
        description: non_empty(row.description),
        image_path,
        location: non_empty(row.location),
    })
}

fn require_cell(value: Option<String>, column: &str, line: u64) -> LoadResult<String> {
    non_empty(value).ok_or_else(|| DataLoadError::InvalidRow {
        line,
        reason: format!("`{column}` must not be empty"),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Accepts integers and whole floats (`1952.0`); anything else is absent.
fn parse_year(raw: &str, line: u64) -> Option<i32> {
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    let parsed = raw
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && value.fract() == 0.0)
        .filter(|value| *value >= f64::from(i32::MIN) && *value <= f64::from(i32::MAX))
        .map(|value| value as i32);
    if parsed.is_none() {
        warn!("event=data_load module=store status=degraded line={line} field=year_built");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::{non_empty, parse_year};

    #[test]
    fn non_empty_trims_and_drops_blank_cells() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(
            non_empty(Some(" Laurie Baker ".to_string())).as_deref(),
            Some("Laurie Baker")
        );
    }

    #[test]
    fn parse_year_accepts_integers_and_whole_floats() {
        assert_eq!(parse_year("1952", 2), Some(1952));
        assert_eq!(parse_year("1952.0", 2), Some(1952));
        assert_eq!(parse_year("1952.5", 2), None);
        assert_eq!(parse_year("circa 1950", 2), None);
    }
}

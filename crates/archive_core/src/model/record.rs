//! Architectural record model.
//!
//! # Responsibility
//! - Define the immutable record shared by gallery/detail/map projections.
//! - Own the closed set of decade buckets and their stable text keys.
//!
//! # Invariants
//! - `title` and `image_path` are non-empty for every loaded record.
//! - Optional attributes stay `None` when the source cell is empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Fixed historical period used to group records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Decade {
    #[serde(rename = "1940s")]
    Forties,
    #[serde(rename = "1950s")]
    Fifties,
    #[serde(rename = "1960s")]
    Sixties,
    #[serde(rename = "1970s")]
    Seventies,
    #[serde(rename = "1980s-1990s")]
    EightiesNineties,
}

impl Decade {
    /// All decades in chronological order.
    pub const ALL: [Decade; 5] = [
        Decade::Forties,
        Decade::Fifties,
        Decade::Sixties,
        Decade::Seventies,
        Decade::EightiesNineties,
    ];

    /// Zero-based chronological position.
    pub fn ordinal(self) -> usize {
        match self {
            Self::Forties => 0,
            Self::Fifties => 1,
            Self::Sixties => 2,
            Self::Seventies => 3,
            Self::EightiesNineties => 4,
        }
    }

    /// Stable key used by the backing table and by section labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forties => "1940s",
            Self::Fifties => "1950s",
            Self::Sixties => "1960s",
            Self::Seventies => "1970s",
            Self::EightiesNineties => "1980s-1990s",
        }
    }
}

impl Display for Decade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a text key is not one of the fixed decade buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDecade(pub String);

impl Display for UnknownDecade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown decade `{}`; expected 1940s|1950s|1960s|1970s|1980s-1990s",
            self.0
        )
    }
}

impl Error for UnknownDecade {}

impl FromStr for Decade {
    type Err = UnknownDecade;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Decade::ALL
            .into_iter()
            .find(|decade| decade.as_str() == trimmed)
            .ok_or_else(|| UnknownDecade(trimmed.to_string()))
    }
}

/// One catalogued architectural entry.
///
/// Records are produced by the record store and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub decade: Decade,
    /// Display key and map label.
    pub title: String,
    pub architect: Option<String>,
    pub year_built: Option<i32>,
    pub style: Option<String>,
    pub description: Option<String>,
    /// Asset path relative to the image root; the file may not exist.
    pub image_path: String,
    /// Free text formatted `"<lat>,<lon>"`; see `geo::parse_location`.
    pub location: Option<String>,
}

impl Record {
    /// Creates a record with only the required attributes set.
    pub fn new(decade: Decade, title: impl Into<String>, image_path: impl Into<String>) -> Self {
        Self {
            decade,
            title: title.into(),
            architect: None,
            year_built: None,
            style: None,
            description: None,
            image_path: image_path.into(),
            location: None,
        }
    }
}

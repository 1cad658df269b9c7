//! Navigable sections of the archive shell.
//!
//! # Invariants
//! - `Section::ALL` is the single source of section order.
//! - Index 0 is Home, the last index is About, decades fill the interior.

use crate::model::record::Decade;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const HOME_LABEL: &str = "Home";
const ABOUT_LABEL: &str = "About";

/// One navigable unit in the UI shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Decade(Decade),
    About,
}

impl Section {
    /// Ordered section list shown in the sidebar.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Decade(Decade::Forties),
        Section::Decade(Decade::Fifties),
        Section::Decade(Decade::Sixties),
        Section::Decade(Decade::Seventies),
        Section::Decade(Decade::EightiesNineties),
        Section::About,
    ];

    /// Number of sections.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this section in `Section::ALL`.
    pub fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Decade(decade) => 1 + decade.ordinal(),
            Self::About => Self::COUNT - 1,
        }
    }

    /// Section at `index`, or `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Stable display label (`Home`, `1940s`, ..., `About`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => HOME_LABEL,
            Self::Decade(decade) => decade.as_str(),
            Self::About => ABOUT_LABEL,
        }
    }

    /// Returns the decade when this section is a decade page.
    pub fn decade(self) -> Option<Decade> {
        match self {
            Self::Decade(decade) => Some(decade),
            Self::Home | Self::About => None,
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a label does not name any section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl Display for UnknownSection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown section `{}`", self.0)
    }
}

impl Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.label() == trimmed)
            .ok_or_else(|| UnknownSection(trimmed.to_string()))
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

//! Best-effort coordinate parsing for record `location` cells.

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Reason a location cell produced no coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum LocationIssue {
    /// Cell is absent or blank.
    Missing,
    /// Comma split did not yield exactly two tokens.
    TokenCount(usize),
    /// Token is not a number.
    InvalidNumber(String),
    /// Token parsed to NaN.
    NotANumber,
    /// Pair parsed but a coordinate is infinite; raised by map projections
    /// only, `parse_location` keeps such pairs.
    NotFinite,
}

impl Display for LocationIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => f.write_str("location is missing"),
            Self::TokenCount(count) => write!(f, "expected `lat,lon`, found {count} token(s)"),
            Self::InvalidNumber(token) => write!(f, "`{token}` is not a number"),
            Self::NotANumber => f.write_str("coordinate is NaN"),
            Self::NotFinite => f.write_str("coordinate is infinite"),
        }
    }
}

/// Parses `"<lat>,<lon>"` into `(lat, lon)`, or `None` when absent/malformed.
///
/// Tokens are trimmed; values outside the usual lat/lon ranges are returned
/// unchanged.
pub fn parse_location(raw: Option<&str>) -> Option<(f64, f64)> {
    classify_location(raw).ok()
}

/// Same as [`parse_location`] but keeps the rejection reason.
pub fn classify_location(raw: Option<&str>) -> Result<(f64, f64), LocationIssue> {
    let raw = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(LocationIssue::Missing)?;

    let tokens = raw.split(',').collect::<Vec<_>>();
    let [lat, lon] = tokens.as_slice() else {
        return Err(LocationIssue::TokenCount(tokens.len()));
    };

    Ok((parse_coordinate(lat)?, parse_coordinate(lon)?))
}

fn parse_coordinate(token: &str) -> Result<f64, LocationIssue> {
    let trimmed = token.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| LocationIssue::InvalidNumber(trimmed.to_string()))?;
    if value.is_nan() {
        return Err(LocationIssue::NotANumber);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{classify_location, LocationIssue};

    #[test]
    fn blank_cell_is_reported_as_missing() {
        assert_eq!(classify_location(Some("   ")), Err(LocationIssue::Missing));
    }

    #[test]
    fn nan_tokens_are_rejected() {
        assert_eq!(
            classify_location(Some("NaN,73.8")),
            Err(LocationIssue::NotANumber)
        );
    }

    #[test]
    fn first_bad_token_is_reported() {
        assert_eq!(
            classify_location(Some("18.5, east")),
            Err(LocationIssue::InvalidNumber("east".to_string()))
        );
    }
}

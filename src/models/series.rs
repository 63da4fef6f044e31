//! Series identifiers and raw provider observations

use chrono::NaiveDate;
use std::fmt;

/// Opaque name of one time series held by the data provider (e.g. `DGS10`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesIdentifier(String);

impl SeriesIdentifier {
    /// Create a series identifier, rejecting empty or blank ids
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single dated value returned by the provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_identifier_rejects_blank() {
        assert!(SeriesIdentifier::new("").is_none());
        assert!(SeriesIdentifier::new("   ").is_none());
    }

    #[test]
    fn test_series_identifier_trims() {
        let id = SeriesIdentifier::new(" DGS10 ").unwrap();
        assert_eq!(id.as_str(), "DGS10");
        assert_eq!(id.to_string(), "DGS10");
    }
}

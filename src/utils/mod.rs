pub mod table;
pub mod errors;
pub mod ratelimit;

pub use table::{Table, format_yield};
pub use errors::{LookupError, ConfigError, ChartError, DashboardError, extract_clean_error};
pub use ratelimit::rate_limit_fred_api;

use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Format a date the way the dashboard labels snapshots (`MM/DD/YYYY`)
pub fn display_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

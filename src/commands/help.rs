/// Usage text for the dashboard binary
pub fn usage() -> String {
    [
        "Treasury Yield Curve",
        "",
        "Usage:",
        "  treasury-curve [curve] [YYYY-MM-DD]   Render the yield curve chart and print the table",
        "  treasury-curve table [YYYY-MM-DD]     Print the yield table only",
        "  treasury-curve help                   Show this help message",
        "",
        "The optional date replaces today as the current curve date (provider source only).",
        "",
        "Environment (.env is loaded if present):",
        "  YIELD_SOURCE         hardcoded | provider (default: hardcoded)",
        "  FRED_API_KEY         required for the provider source",
        "  FRED_BASE_URL        default: https://api.stlouisfed.org/fred",
        "  YIELD_BASE_DATE      default: 2025-01-01",
        "  YIELD_LOOKBACK_DAYS  default: 7",
        "  FRED_MAX_RETRIES     default: 2",
        "  EMPTY_CURVE_POLICY   render | halt (default: render)",
        "  CHART_OUTPUT         default: treasury_yield_curve.png",
        "  CHART_WIDTH          default: 1200",
        "  CHART_HEIGHT         default: 600",
    ]
    .join("\n")
}

pub fn execute() {
    println!("{}", usage());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_commands() {
        let text = usage();
        assert!(text.contains("curve"));
        assert!(text.contains("table"));
        assert!(text.contains("EMPTY_CURVE_POLICY"));
    }
}

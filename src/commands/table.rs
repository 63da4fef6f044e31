use tracing::info;

use super::{load_curves, parse_as_of, ResolvedCurves};
use crate::config::DashboardConfig;
use crate::utils::{format_yield, DashboardError, Table};

pub async fn execute(config: &DashboardConfig, args: &[&str]) -> Result<(), DashboardError> {
    info!("Table command called with args: {:?}", args);
    let as_of = parse_as_of(args)?;

    let curves = load_curves(config, as_of).await?;
    println!("{}", render_table(&curves));
    Ok(())
}

/// Side-by-side table of both curves, absent yields shown as `n/a`
pub fn render_table(curves: &ResolvedCurves) -> String {
    let mut table = Table::new(vec!["Maturity", curves.base.name.as_str(), curves.current.name.as_str()]);

    for label in curves.maturities.labels() {
        let base = format_yield(curves.base.value(&label));
        let current = format_yield(curves.current.value(&label));
        table.add_row(vec![label, base, current]);
    }

    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::YieldPoint;
    use crate::services::preset_service;

    #[test]
    fn test_render_table_hardcoded() {
        let curves = ResolvedCurves {
            maturities: preset_service::hardcoded_maturities(),
            base: preset_service::fixtures::base_snapshot(),
            current: preset_service::fixtures::current_snapshot(),
        };

        let rendered = render_table(&curves);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 15);
        assert!(lines[0].starts_with("Maturity | 01/01/2025 | Current"));
        assert!(lines[2].starts_with("1 mo."));
        assert!(lines[2].ends_with("4.37"));
        assert!(lines[14].starts_with("30 yr."));
    }

    #[test]
    fn test_render_table_shows_absent() {
        let mut current = preset_service::fixtures::current_snapshot();
        let point = current.get("10 yr.").unwrap().clone();
        current.insert("10 yr.", YieldPoint::absent(point.series_id, point.requested_date));

        let curves = ResolvedCurves {
            maturities: preset_service::hardcoded_maturities(),
            base: preset_service::fixtures::base_snapshot(),
            current,
        };

        let rendered = render_table(&curves);
        let row = rendered.lines().find(|l| l.starts_with("10 yr.")).unwrap();
        assert!(row.contains("4.58"));
        assert!(row.ends_with("n/a"));
    }
}

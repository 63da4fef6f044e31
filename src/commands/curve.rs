use std::fs;
use std::path::Path;
use tracing::info;

use super::{load_curves, parse_as_of, table};
use crate::config::DashboardConfig;
use crate::models::CurveEpoch;
use crate::services::{chart_service, curve_service};
use crate::utils::DashboardError;

const CHART_TITLE: &str = "Treasury Yield Curve";

pub async fn execute(config: &DashboardConfig, args: &[&str]) -> Result<(), DashboardError> {
    info!("Curve command called with args: {:?}", args);
    let as_of = parse_as_of(args)?;

    let curves = load_curves(config, as_of).await?;

    let mut views = curve_service::build_views(&curves.base, &curves.maturities, CurveEpoch::Base);
    views.extend(curve_service::build_views(&curves.current, &curves.maturities, CurveEpoch::Current));

    let labels = curves.maturities.labels();
    let image = chart_service::generate_chart(&views, &labels, CHART_TITLE, config.width, config.height)?;
    write_output(&config.output_path, &image)?;
    info!("Chart written to {} ({} bytes)", config.output_path.display(), image.len());

    println!("{}", table::render_table(&curves));
    Ok(())
}

/// Write the rendered image, creating the parent directory if needed
pub fn write_output(path: &Path, data: &[u8]) -> Result<(), DashboardError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts").join("curve.png");

        write_output(&path, b"\x89PNG").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"\x89PNG");
    }

    #[test]
    fn test_write_output_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.png");

        write_output(&path, b"old").unwrap();
        write_output(&path, b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
    }
}

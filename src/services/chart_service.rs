use plotters::prelude::*;
use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::models::{CurveEpoch, CurveGroup, CurveView};
use crate::utils::ChartError;

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const SANDY_BROWN: RGBColor = RGBColor(244, 164, 96);
const DARK_ORANGE: RGBColor = RGBColor(255, 140, 0);

/// Line color for a curve: light shades for the base date, strong for current
pub fn curve_color(group: CurveGroup, epoch: CurveEpoch) -> RGBColor {
    match (group, epoch) {
        (CurveGroup::MoneyMarket, CurveEpoch::Base) => SKY_BLUE,
        (CurveGroup::MoneyMarket, CurveEpoch::Current) => BLUE,
        (CurveGroup::CapitalMarket, CurveEpoch::Base) => SANDY_BROWN,
        (CurveGroup::CapitalMarket, CurveEpoch::Current) => DARK_ORANGE,
    }
}

/// Y axis range covering every plotted value with 10% padding
pub fn y_range(views: &[CurveView]) -> Range<f64> {
    let values = views.iter().flat_map(|v| v.values.iter().copied());
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !min.is_finite() || !max.is_finite() {
        return 0.0..5.0;
    }

    // Avoid a zero-height axis when every value is equal
    let padding = (max - min).max(0.1) * 0.1;
    (min - padding)..(max + padding)
}

/// Map curve points onto x positions of the shared label axis
fn positioned_points(view: &CurveView, labels: &[String]) -> Vec<(i32, f64)> {
    view.labels
        .iter()
        .zip(&view.values)
        .filter_map(|(label, &value)| {
            labels
                .iter()
                .position(|l| l == label)
                .map(|idx| (idx as i32, value))
        })
        .collect()
}

/// Axis label for an x position, blank outside the label range
fn axis_label(labels: &[String], x: i32) -> String {
    usize::try_from(x)
        .ok()
        .and_then(|idx| labels.get(idx))
        .cloned()
        .unwrap_or_default()
}

/// Generate the yield curve chart image as PNG bytes
///
/// `labels` fixes the x-axis order; view points whose label is not in it are
/// not drawn.
pub fn generate_chart(
    views: &[CurveView],
    labels: &[String],
    title: &str,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, ChartError> {
    // Use a temporary file path for BitMapBackend
    let temp_file = std::env::temp_dir().join(format!("treasury_curve_{}.png", uuid::Uuid::new_v4()));

    let image_data = draw_chart(&temp_file, views, labels, title, (width, height))
        .and_then(|_| fs::read(&temp_file).map_err(ChartError::from));

    // Clean up temporary file, also when drawing failed half way
    let _ = fs::remove_file(&temp_file);

    image_data
}

fn draw_chart(
    path: &Path,
    views: &[CurveView],
    labels: &[String],
    title: &str,
    size: (u32, u32),
) -> Result<(), ChartError> {
    {
        let backend = BitMapBackend::new(path, size);
        let root = backend.into_drawing_area();
        root.fill(&BLACK)
            .map_err(|e| ChartError::Drawing(format!("Failed to fill canvas: {}", e)))?;

        let x_max = labels.len() as i32;
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 32).into_font().color(&WHITE))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(-1..x_max, y_range(views))
            .map_err(|e| ChartError::Drawing(format!("Failed to build chart: {}", e)))?;

        chart
            .configure_mesh()
            .x_labels(labels.len() + 2)
            .x_label_formatter(&|x| axis_label(labels, *x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .x_desc("Maturity (months - years)")
            .y_desc("Yield (%)")
            .axis_style(WHITE)
            .bold_line_style(WHITE.mix(0.25))
            .light_line_style(WHITE.mix(0.08))
            .label_style(("sans-serif", 14).into_font().color(&WHITE))
            .axis_desc_style(("sans-serif", 16).into_font().color(&WHITE))
            .draw()
            .map_err(|e| ChartError::Drawing(format!("Failed to draw mesh: {}", e)))?;

        for view in views {
            let points = positioned_points(view, labels);
            if points.is_empty() {
                continue;
            }
            let color = curve_color(view.group, view.epoch);

            chart
                .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
                .map_err(|e| ChartError::Drawing(format!("Failed to draw line: {}", e)))?
                .label(view.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

            // Circles for money market, squares for capital market
            match view.group {
                CurveGroup::MoneyMarket => chart.draw_series(
                    points.iter().map(|&p| EmptyElement::at(p) + Circle::new((0, 0), 4, color.filled())),
                ),
                CurveGroup::CapitalMarket => chart.draw_series(
                    points.iter().map(|&p| EmptyElement::at(p) + Rectangle::new([(-4, -4), (4, 4)], color.filled())),
                ),
            }
            .map_err(|e| ChartError::Drawing(format!("Failed to draw point: {}", e)))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(BLACK)
            .border_style(WHITE)
            .label_font(("sans-serif", 14).into_font().color(&WHITE))
            .draw()
            .map_err(|e| ChartError::Drawing(format!("Failed to draw legend: {}", e)))?;

        root.present()
            .map_err(|e| ChartError::Drawing(format!("Failed to render chart: {}", e)))?;
    }

    Ok(())
}

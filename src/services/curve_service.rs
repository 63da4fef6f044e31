use tracing::debug;

use crate::models::{CurveEpoch, CurveGroup, CurveView, MaturityMap, YieldCurveSnapshot};

/// Drop every position whose value is absent, keeping labels and values aligned
pub fn filter_missing(labels: &[String], values: &[Option<f64>]) -> (Vec<String>, Vec<f64>) {
    labels
        .iter()
        .zip(values)
        .filter_map(|(label, value)| value.map(|v| (label.clone(), v)))
        .unzip()
}

/// Labels and optional values of `group_labels`, read from `snapshot`
fn group_sequence(snapshot: &YieldCurveSnapshot, group_labels: &[&str]) -> (Vec<String>, Vec<Option<f64>>) {
    group_labels
        .iter()
        .map(|label| (label.to_string(), snapshot.value(label)))
        .unzip()
}

/// Build the two stitched sequences for one snapshot.
///
/// The short sequence gets the first long maturity appended and the long
/// sequence gets the last short maturity prepended, so the two curves meet.
/// The boundary values are copied out of the snapshot, which is left as is.
pub fn stitch(
    snapshot: &YieldCurveSnapshot,
    short_labels: &[&str],
    long_labels: &[&str],
) -> ((Vec<String>, Vec<Option<f64>>), (Vec<String>, Vec<Option<f64>>)) {
    let (mut short_x, mut short_y) = group_sequence(snapshot, short_labels);
    let (mut long_x, mut long_y) = group_sequence(snapshot, long_labels);

    if let (Some(last_short), Some(first_long)) = (short_labels.last(), long_labels.first()) {
        short_x.push(first_long.to_string());
        short_y.push(snapshot.value(first_long));

        long_x.insert(0, last_short.to_string());
        long_y.insert(0, snapshot.value(last_short));
    }

    ((short_x, short_y), (long_x, long_y))
}

fn group_title(group: CurveGroup) -> &'static str {
    match group {
        CurveGroup::MoneyMarket => "Money Market Yield",
        CurveGroup::CapitalMarket => "Capital Market Yield",
    }
}

/// Stitched, gap-free money-market and capital-market views of one snapshot
pub fn build_views(snapshot: &YieldCurveSnapshot, maturities: &MaturityMap, epoch: CurveEpoch) -> Vec<CurveView> {
    let ((short_x, short_y), (long_x, long_y)) =
        stitch(snapshot, &maturities.short_labels(), &maturities.long_labels());

    [
        (CurveGroup::MoneyMarket, short_x, short_y),
        (CurveGroup::CapitalMarket, long_x, long_y),
    ]
    .into_iter()
    .map(|(group, labels, values)| {
        let (labels, values) = filter_missing(&labels, &values);
        let name = format!("{} ({})", group_title(group), snapshot.name);
        debug!("{}: {} points", name, values.len());
        CurveView {
            name,
            group,
            epoch,
            labels,
            values,
        }
    })
    .collect()
}

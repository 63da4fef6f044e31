//! Yield curve snapshots and maturity maps

use super::series::SeriesIdentifier;
use super::yield_point::YieldPoint;

/// Ordered maturity label to series mapping, split into the money-market
/// (short) group and the capital-market (long) group.
#[derive(Debug, Clone)]
pub struct MaturityMap {
    pub short: Vec<(String, SeriesIdentifier)>,
    pub long: Vec<(String, SeriesIdentifier)>,
}

impl MaturityMap {
    /// All entries, short group first
    pub fn entries(&self) -> impl Iterator<Item = &(String, SeriesIdentifier)> {
        self.short.iter().chain(self.long.iter())
    }

    /// All labels in x-axis order
    pub fn labels(&self) -> Vec<String> {
        self.entries().map(|(label, _)| label.clone()).collect()
    }

    pub fn short_labels(&self) -> Vec<&str> {
        self.short.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn long_labels(&self) -> Vec<&str> {
        self.long.iter().map(|(label, _)| label.as_str()).collect()
    }
}

/// Maturity label to resolved yield, in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct YieldCurveSnapshot {
    pub name: String,
    points: Vec<(String, YieldPoint)>,
}

impl YieldCurveSnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Append a point. A label that is already present is replaced in place
    /// so the original ordering is kept.
    pub fn insert(&mut self, label: impl Into<String>, point: YieldPoint) {
        let label = label.into();
        if let Some(slot) = self.points.iter_mut().find(|(l, _)| *l == label) {
            slot.1 = point;
        } else {
            self.points.push((label, point));
        }
    }

    pub fn get(&self, label: &str) -> Option<&YieldPoint> {
        self.points
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, p)| p)
    }

    /// Value at `label`, `None` when the label is unknown or the point is absent
    pub fn value(&self, label: &str) -> Option<f64> {
        self.get(label).and_then(|p| p.value)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &YieldPoint)> {
        self.points.iter().map(|(l, p)| (l.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when no point in the snapshot carries a value
    pub fn all_absent(&self) -> bool {
        self.points.iter().all(|(_, p)| p.is_absent())
    }
}

//! Chart generation models

/// Which maturity group a plotted curve belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveGroup {
    MoneyMarket,
    CapitalMarket,
}

/// Which snapshot a plotted curve was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveEpoch {
    Base,
    Current,
}

/// A plot-ready curve: aligned label and value sequences with no gaps
#[derive(Debug, Clone, PartialEq)]
pub struct CurveView {
    pub name: String,
    pub group: CurveGroup,
    pub epoch: CurveEpoch,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

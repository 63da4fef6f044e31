//! Data models for the yield curve dashboard
//!
//! Series ids and observations come from the provider, yield points and
//! snapshots are what the resolver produces, and curve views are what the
//! chart renderer consumes.

pub mod series;
pub mod yield_point;
pub mod snapshot;
pub mod chart;

// Re-export commonly used types for convenience
pub use series::{SeriesIdentifier, Observation};
pub use yield_point::YieldPoint;
pub use snapshot::{YieldCurveSnapshot, MaturityMap};
pub use chart::{CurveView, CurveGroup, CurveEpoch};

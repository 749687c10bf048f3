//! Metric aggregation for SellerHub
//!
//! Groups per-entity records by a key, sums their numeric fields and derives
//! ratios (margin, ROI, percent change). All functions are pure and run
//! against an in-memory [`Dataset`](crate::dataset::Dataset).
//!
//! # Usage
//!
//! ```ignore
//! let dataset = Dataset::sample();
//! let query = StatsQuery::new(&dataset);
//!
//! let map = query.map_summary();
//! let trends = query.trend_summary();
//! ```
//!
//! Ratios never produce NaN or infinity: a zero denominator yields `None`.

mod aggregate;
mod models;
mod queries;
mod ratio;

pub use aggregate::{AggregateBucket, group_by, max_of, total};
pub use models::{
    ChartTotals, MapSummary, PlSummary, QuickStats, RegionStats, TrendSummary, TrendValue,
};
pub use queries::StatsQuery;
pub use ratio::{margin_percent, percent_change, ratio_percent, roi_percent};

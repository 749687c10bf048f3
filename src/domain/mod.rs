//! Core domain types for SellerHub
//!
//! Each dashboard view works on its own row shape. All of them expose their
//! numbers through [`MetricSource`] so the aggregator can treat them alike.

mod chart;
mod metric;
mod pl;
mod region;
mod tile;
mod trend;

pub use chart::{ChartKind, ChartPoint, ChartSeries};
pub use metric::{MetricField, MetricRecord, MetricSource};
pub use pl::{PL_PERIODS, PL_TOTAL_CATEGORIES, PlRow};
pub use region::{MapMode, RegionRow};
pub use tile::{MetricTile, TimePeriod};
pub use trend::ProductTrend;

//! Data models for dashboard statistics

mod dashboard;

pub use dashboard::{
    ChartTotals, MapSummary, PlSummary, QuickStats, RegionStats, TrendSummary, TrendValue,
};

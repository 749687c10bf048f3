//! Per-view summary models
//!
//! These structures hold the headline numbers of each dashboard view.

use crate::domain::ChartSeries;
use crate::stats::ratio::{margin_percent, percent_change, ratio_percent};

/// Trend comparison with previous period
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrendValue {
    pub current: f64,
    pub previous: f64,
}

impl TrendValue {
    pub fn new(current: f64, previous: f64) -> Self {
        Self { current, previous }
    }

    /// None when the previous period is zero
    pub fn percent_change(&self) -> Option<f64> {
        percent_change(self.current, self.previous)
    }

    pub fn is_positive(&self) -> bool {
        self.current >= self.previous
    }
}

/// Today-vs-yesterday quick stats on the tiles view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickStats {
    pub sales: TrendValue,
    pub orders: TrendValue,
    pub units_sold: TrendValue,
    pub net_profit: TrendValue,
}

/// Totals per chart series across all points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartTotals {
    pub totals: Vec<(ChartSeries, f64)>,
}

impl ChartTotals {
    pub fn get(&self, series: ChartSeries) -> f64 {
        self.totals
            .iter()
            .find(|(s, _)| *s == series)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }
}

/// Headline figures of the P&L statement (first period column)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlSummary {
    pub revenue: f64,
    pub net_profit: f64,
    pub total_expenses: f64,
}

impl PlSummary {
    pub fn margin(&self) -> Option<f64> {
        margin_percent(self.net_profit, self.revenue)
    }
}

/// One region bucket on the map view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionStats {
    pub region: String,
    pub revenue: f64,
    pub units_sold: f64,
    pub current_stock: f64,
    pub gross_profit: f64,
    pub refunds: f64,
    pub countries: usize,
}

impl RegionStats {
    pub fn margin(&self) -> Option<f64> {
        margin_percent(self.gross_profit, self.revenue)
    }
}

/// Map view summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSummary {
    /// Region buckets, highest revenue first
    pub regions: Vec<RegionStats>,
    pub max_revenue: f64,
    pub max_stock: f64,
}

/// Portfolio-level figures of the trends view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendSummary {
    pub product_count: usize,
    pub portfolio_value: f64,
    /// Mean of the defined product changes; None when no product has one
    pub average_change: Option<f64>,
    pub growing: usize,
    pub declining: usize,
}

impl TrendSummary {
    pub fn growing_share(&self) -> Option<f64> {
        ratio_percent(self.growing as f64, self.product_count as f64)
    }

    pub fn declining_share(&self) -> Option<f64> {
        ratio_percent(self.declining as f64, self.product_count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_value() {
        let t = TrendValue::new(150.0, 100.0);
        assert_eq!(t.percent_change(), Some(50.0));
        assert!(t.is_positive());

        let flat = TrendValue::new(0.0, 0.0);
        assert_eq!(flat.percent_change(), None);
        assert!(flat.is_positive());
    }

    #[test]
    fn test_trend_summary_shares() {
        let summary = TrendSummary {
            product_count: 4,
            growing: 3,
            declining: 1,
            ..Default::default()
        };
        assert_eq!(summary.growing_share(), Some(75.0));
        assert_eq!(summary.declining_share(), Some(25.0));
        assert_eq!(TrendSummary::default().growing_share(), None);
    }
}

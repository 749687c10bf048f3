//! Tiles view queries

use tracing::debug;

use super::StatsQuery;
use crate::domain::{MetricTile, TimePeriod};
use crate::stats::models::{QuickStats, TrendValue};

impl StatsQuery<'_> {
    /// Today vs yesterday for the quick stat cards.
    ///
    /// None when either tile is missing from the dataset.
    pub fn quick_stats(&self) -> Option<QuickStats> {
        let today = self.dataset.tile(TimePeriod::Today);
        let yesterday = self.dataset.tile(TimePeriod::Yesterday);
        let (Some(today), Some(yesterday)) = (today, yesterday) else {
            debug!("Quick stats unavailable: today or yesterday tile missing");
            return None;
        };
        Some(compare_tiles(today, yesterday))
    }

    /// Tiles in display order
    pub fn tiles(&self) -> Vec<&MetricTile> {
        let mut tiles: Vec<&MetricTile> = self.dataset.tiles.iter().collect();
        tiles.sort_by_key(|t| t.period);
        tiles
    }
}

fn compare_tiles(current: &MetricTile, previous: &MetricTile) -> QuickStats {
    QuickStats {
        sales: TrendValue::new(current.sales, previous.sales),
        orders: TrendValue::new(current.orders, previous.orders),
        units_sold: TrendValue::new(current.units_sold, previous.units_sold),
        net_profit: TrendValue::new(current.net_profit, previous.net_profit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_quick_stats_sample() {
        let dataset = Dataset::sample();
        let stats = StatsQuery::new(&dataset).quick_stats().unwrap();
        assert_eq!(stats.orders.current, 47.0);
        assert_eq!(stats.orders.previous, 43.0);
        let change = stats.sales.percent_change().unwrap();
        assert!((change - 8.689).abs() < 0.01, "{}", change);
    }

    #[test]
    fn test_quick_stats_missing_tile() {
        let mut dataset = Dataset::sample();
        dataset.tiles.retain(|t| t.period != TimePeriod::Yesterday);
        assert!(StatsQuery::new(&dataset).quick_stats().is_none());
    }

    #[test]
    fn test_tiles_sorted_by_period() {
        let mut dataset = Dataset::sample();
        dataset.tiles.reverse();
        let query = StatsQuery::new(&dataset);
        let periods: Vec<_> = query.tiles().iter().map(|t| t.period).collect();
        assert_eq!(periods.first(), Some(&TimePeriod::Today));
        assert_eq!(periods.last(), Some(&TimePeriod::ThisMonthForecast));
    }
}

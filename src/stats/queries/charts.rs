//! Charts view queries

use super::StatsQuery;
use crate::domain::ChartSeries;
use crate::stats::aggregate::total;
use crate::stats::models::ChartTotals;

impl StatsQuery<'_> {
    /// Sum of every series across all chart points
    pub fn chart_totals(&self) -> ChartTotals {
        let points = &self.dataset.chart;
        ChartTotals {
            totals: ChartSeries::ALL
                .into_iter()
                .map(|series| (series, total(points, series.field())))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_chart_totals_sum_points() {
        let dataset = Dataset::sample();
        let totals = StatsQuery::new(&dataset).chart_totals();
        let expected: f64 = dataset.chart.iter().map(|p| p.sales).sum();
        assert!((totals.get(ChartSeries::Sales) - expected).abs() < 1e-9);
        assert_eq!(totals.get(ChartSeries::Orders), 307.0);
    }

    #[test]
    fn test_chart_totals_empty() {
        let dataset = Dataset::default();
        let totals = StatsQuery::new(&dataset).chart_totals();
        assert_eq!(totals.get(ChartSeries::NetProfit), 0.0);
    }
}

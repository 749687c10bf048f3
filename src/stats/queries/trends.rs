//! Trends view queries

use super::StatsQuery;
use crate::stats::models::TrendSummary;

impl StatsQuery<'_> {
    /// Portfolio value, average change and growth counts
    pub fn trend_summary(&self) -> TrendSummary {
        let products = &self.dataset.trends;
        let changes: Vec<f64> = products.iter().filter_map(|p| p.change()).collect();
        let average_change =
            (!changes.is_empty()).then(|| changes.iter().sum::<f64>() / changes.len() as f64);

        TrendSummary {
            product_count: products.len(),
            portfolio_value: products.iter().map(|p| p.current_value).sum(),
            average_change,
            growing: products.iter().filter(|p| p.is_growing()).count(),
            declining: products.iter().filter(|p| p.is_declining()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_trend_summary_sample() {
        let dataset = Dataset::sample();
        let summary = StatsQuery::new(&dataset).trend_summary();
        assert_eq!(summary.product_count, 8);
        assert_eq!(summary.growing, 4);
        assert_eq!(summary.declining, 3);
        assert!(summary.average_change.is_some());
    }

    #[test]
    fn test_trend_summary_empty_average_is_undefined() {
        let dataset = Dataset::default();
        let summary = StatsQuery::new(&dataset).trend_summary();
        assert_eq!(summary.product_count, 0);
        assert_eq!(summary.average_change, None);
        assert_eq!(summary.portfolio_value, 0.0);
    }
}

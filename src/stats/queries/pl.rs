//! P&L view queries

use super::StatsQuery;
use crate::domain::PlRow;
use crate::stats::models::PlSummary;

impl StatsQuery<'_> {
    /// Headline figures for one period column of the P&L statement.
    ///
    /// Expenses are the top-level rows that are neither totals nor ratios.
    pub fn pl_summary(&self, period: usize) -> PlSummary {
        let rows = &self.dataset.pl;
        PlSummary {
            revenue: category_value(rows, "Revenue", period),
            net_profit: category_value(rows, "Net Profit", period),
            total_expenses: rows
                .iter()
                .filter(|r| !r.is_total() && !r.is_percentage())
                .map(|r| r.value_at(period))
                .sum(),
        }
    }
}

fn category_value(rows: &[PlRow], category: &str, period: usize) -> f64 {
    rows.iter()
        .find(|r| r.category == category)
        .map(|r| r.value_at(period))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_pl_summary_sample() {
        let dataset = Dataset::sample();
        let summary = StatsQuery::new(&dataset).pl_summary(0);
        assert_eq!(summary.revenue, 52380.00);
        assert_eq!(summary.net_profit, 16200.92);
        assert!((summary.total_expenses - 36179.08).abs() < 1e-6);
        assert!((summary.revenue - summary.total_expenses - summary.net_profit).abs() < 1e-6);
        let margin = summary.margin().unwrap();
        assert!((margin - 30.93).abs() < 0.01);
    }

    #[test]
    fn test_pl_summary_without_revenue() {
        let dataset = Dataset {
            pl: vec![PlRow::new("Advertising", vec![10.0])],
            ..Default::default()
        };
        let summary = StatsQuery::new(&dataset).pl_summary(0);
        assert_eq!(summary.revenue, 0.0);
        assert_eq!(summary.total_expenses, 10.0);
        assert_eq!(summary.margin(), None);
    }

    #[test]
    fn test_expenses_skip_percentage_rows() {
        let dataset = Dataset {
            pl: vec![
                PlRow::new("Revenue", vec![100.0]),
                PlRow::new("Advertising", vec![10.0]),
                PlRow::new("Net Margin", vec![30.0]),
                PlRow::new("Refund Rate", vec![2.5]),
                PlRow::new("Net Profit", vec![90.0]),
            ],
            ..Default::default()
        };
        let summary = StatsQuery::new(&dataset).pl_summary(0);
        assert_eq!(summary.total_expenses, 10.0);
        assert!((summary.margin().unwrap() - 90.0).abs() < 1e-9);
    }
}

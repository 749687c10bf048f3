use serde::{Deserialize, Serialize};

/// Column headings of the P&L table, in value order
pub const PL_PERIODS: [&str; 3] = ["Last Month", "Month to Date", "This Month Forecast"];

/// Top-level categories that carry totals rather than expenses
pub const PL_TOTAL_CATEGORIES: [&str; 3] = ["Revenue", "Gross Profit", "Net Profit"];

/// A row of the profit & loss statement, possibly with nested subcategories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlRow {
    pub category: String,
    pub values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<PlRow>,
}

impl PlRow {
    pub fn new(category: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            category: category.into(),
            values,
            subcategories: Vec::new(),
        }
    }

    pub fn with_subcategories(mut self, subcategories: Vec<PlRow>) -> Self {
        self.subcategories = subcategories;
        self
    }

    pub fn has_subcategories(&self) -> bool {
        !self.subcategories.is_empty()
    }

    /// Revenue, Gross Profit and Net Profit rows hold totals
    pub fn is_total(&self) -> bool {
        PL_TOTAL_CATEGORIES.contains(&self.category.as_str())
    }

    /// Ratio rows (margins, refund rate) hold percentages, not money
    pub fn is_percentage(&self) -> bool {
        let lower = self.category.to_lowercase();
        lower.contains("margin") || lower.contains("refund rate")
    }

    /// Value for a period column, 0 when the row has no value there
    pub fn value_at(&self, period: usize) -> f64 {
        self.values.get(period).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_kinds() {
        assert!(PlRow::new("Revenue", vec![]).is_total());
        assert!(!PlRow::new("Amazon Fees", vec![]).is_total());
        assert!(PlRow::new("Net Margin", vec![]).is_percentage());
        assert!(PlRow::new("Refund Rate", vec![]).is_percentage());
        assert!(!PlRow::new("Refunds", vec![]).is_percentage());
    }

    #[test]
    fn test_value_at_out_of_range() {
        let row = PlRow::new("Revenue", vec![1.0]);
        assert_eq!(row.value_at(0), 1.0);
        assert_eq!(row.value_at(2), 0.0);
    }
}

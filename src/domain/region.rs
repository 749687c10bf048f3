use serde::{Deserialize, Serialize};

use super::metric::{MetricField, MetricSource};
use crate::stats::margin_percent;

/// Sales and inventory for one country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRow {
    pub region: String,
    pub country: String,
    pub units_sold: f64,
    pub current_stock: f64,
    pub refunds: f64,
    pub revenue: f64,
    pub gross_profit: f64,
}

impl RegionRow {
    /// Two-letter badge shown next to the country name
    pub fn badge(&self) -> String {
        self.country.chars().take(2).collect::<String>().to_uppercase()
    }

    pub fn margin(&self) -> Option<f64> {
        margin_percent(self.gross_profit, self.revenue)
    }
}

impl MetricSource for RegionRow {
    fn value(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::UnitsSold => Some(self.units_sold),
            MetricField::CurrentStock => Some(self.current_stock),
            MetricField::Refunds => Some(self.refunds),
            MetricField::Revenue => Some(self.revenue),
            MetricField::GrossProfit => Some(self.gross_profit),
            MetricField::Margin => self.margin(),
            _ => None,
        }
    }
}

/// Which figure the map shades countries by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapMode {
    #[default]
    Sales,
    Stock,
}

impl MapMode {
    pub fn field(&self) -> MetricField {
        match self {
            Self::Sales => MetricField::Revenue,
            Self::Stock => MetricField::CurrentStock,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Sales => "Sales by Region",
            Self::Stock => "Stock by Region",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sales" | "revenue" => Some(Self::Sales),
            "stock" | "inventory" => Some(Self::Stock),
            _ => None,
        }
    }
}

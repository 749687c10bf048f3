use serde::{Deserialize, Serialize};

use super::metric::{MetricField, MetricSource};
use crate::stats::{margin_percent, roi_percent};

/// Reporting period shown on a metric tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimePeriod {
    Today,
    Yesterday,
    Mtd,
    LastMonth,
    ThisMonthForecast,
}

impl TimePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Mtd => "mtd",
            Self::LastMonth => "lastMonth",
            Self::ThisMonthForecast => "thisMonthForecast",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::Mtd => "Month to Date",
            Self::LastMonth => "Last Month",
            Self::ThisMonthForecast => "This Month (Forecast)",
        }
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key figures for one reporting period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTile {
    pub period: TimePeriod,
    pub label: String,
    pub sales: f64,
    pub orders: f64,
    pub units_sold: f64,
    pub refunds: f64,
    pub advertising_cost: f64,
    pub estimated_payout: f64,
    pub gross_profit: f64,
    pub net_profit: f64,
    /// Margin as supplied by the data source. Display compatibility only,
    /// `margin()` is authoritative.
    #[serde(rename = "margin", default, skip_serializing_if = "Option::is_none")]
    pub reported_margin: Option<f64>,
    pub amazon_fees: f64,
    pub cogs: f64,
    pub shipping_cost: f64,
}

impl MetricTile {
    /// Net margin derived from net profit and sales
    pub fn margin(&self) -> Option<f64> {
        margin_percent(self.net_profit, self.sales)
    }

    /// Return on advertising spend
    pub fn roi(&self) -> Option<f64> {
        roi_percent(self.net_profit, self.advertising_cost)
    }
}

impl MetricSource for MetricTile {
    fn value(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::Sales => Some(self.sales),
            MetricField::Orders => Some(self.orders),
            MetricField::UnitsSold => Some(self.units_sold),
            MetricField::Refunds => Some(self.refunds),
            MetricField::AdvertisingCost => Some(self.advertising_cost),
            MetricField::GrossProfit => Some(self.gross_profit),
            MetricField::NetProfit => Some(self.net_profit),
            MetricField::Margin => self.margin(),
            MetricField::Roi => self.roi(),
            MetricField::Revenue => Some(self.sales),
            MetricField::CurrentStock => None,
        }
    }
}

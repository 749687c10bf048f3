use serde::{Deserialize, Serialize};

use crate::stats::percent_change;

/// Period-over-period movement of one product's selected KPI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTrend {
    pub asin: String,
    pub sku: String,
    pub name: String,
    pub current_value: f64,
    pub previous_value: f64,
    /// Change as supplied by the data source; `change()` is authoritative
    #[serde(rename = "percentChange", default, skip_serializing_if = "Option::is_none")]
    pub reported_change: Option<f64>,
    #[serde(default)]
    pub sparkline: Vec<f64>,
}

impl ProductTrend {
    /// Percent change from previous to current, None when previous is zero
    pub fn change(&self) -> Option<f64> {
        percent_change(self.current_value, self.previous_value)
    }

    pub fn is_growing(&self) -> bool {
        self.change().is_some_and(|c| c > 0.0)
    }

    pub fn is_declining(&self) -> bool {
        self.change().is_some_and(|c| c < 0.0)
    }
}

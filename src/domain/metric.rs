use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A numeric field carried by dashboard records
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricField {
    Sales,
    Orders,
    UnitsSold,
    Refunds,
    AdvertisingCost,
    GrossProfit,
    NetProfit,
    /// Derived: profit / revenue * 100
    Margin,
    /// Derived: net profit / advertising cost * 100
    Roi,
    CurrentStock,
    Revenue,
}

impl MetricField {
    pub const ALL: [MetricField; 11] = [
        Self::Sales,
        Self::Orders,
        Self::UnitsSold,
        Self::Refunds,
        Self::AdvertisingCost,
        Self::GrossProfit,
        Self::NetProfit,
        Self::Margin,
        Self::Roi,
        Self::CurrentStock,
        Self::Revenue,
    ];

    /// Metrics offered by the trends view selector
    pub const TREND_OPTIONS: [MetricField; 9] = [
        Self::Sales,
        Self::Orders,
        Self::UnitsSold,
        Self::Refunds,
        Self::AdvertisingCost,
        Self::GrossProfit,
        Self::NetProfit,
        Self::Margin,
        Self::Roi,
    ];

    /// Derived fields are recomputed from base fields and never summed
    pub fn is_derived(&self) -> bool {
        matches!(self, Self::Margin | Self::Roi)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Orders => "orders",
            Self::UnitsSold => "unitsSold",
            Self::Refunds => "refunds",
            Self::AdvertisingCost => "advertisingCost",
            Self::GrossProfit => "grossProfit",
            Self::NetProfit => "netProfit",
            Self::Margin => "margin",
            Self::Roi => "roi",
            Self::CurrentStock => "currentStock",
            Self::Revenue => "revenue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Orders => "Orders",
            Self::UnitsSold => "Units Sold",
            Self::Refunds => "Refunds",
            Self::AdvertisingCost => "Ad Cost",
            Self::GrossProfit => "Gross Profit",
            Self::NetProfit => "Net Profit",
            Self::Margin => "Margin %",
            Self::Roi => "ROI %",
            Self::CurrentStock => "Current Stock",
            Self::Revenue => "Revenue",
        }
    }

    /// Parse a field name, accepting camelCase, snake_case and kebab-case
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().to_lowercase() == normalized)
    }
}

impl std::fmt::Display for MetricField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MetricField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown metric: {}", s))
    }
}

/// Anything that exposes metric values by field
pub trait MetricSource {
    /// Value of a field, or None if the source doesn't carry it
    fn value(&self, field: MetricField) -> Option<f64>;
}

/// A flat record of metric values tagged with a grouping key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub key: String,
    pub fields: BTreeMap<MetricField, f64>,
}

impl MetricRecord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with(mut self, field: MetricField, value: f64) -> Self {
        self.fields.insert(field, value);
        self
    }
}

impl MetricSource for MetricRecord {
    fn value(&self, field: MetricField) -> Option<f64> {
        self.fields.get(&field).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_spellings() {
        assert_eq!(MetricField::parse("netProfit"), Some(MetricField::NetProfit));
        assert_eq!(MetricField::parse("net_profit"), Some(MetricField::NetProfit));
        assert_eq!(MetricField::parse("units-sold"), Some(MetricField::UnitsSold));
        assert_eq!(MetricField::parse("ROI"), Some(MetricField::Roi));
        assert_eq!(MetricField::parse("bogus"), None);
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&MetricField::AdvertisingCost).unwrap();
        assert_eq!(json, "\"advertisingCost\"");
    }

    #[test]
    fn test_record_reports_only_set_fields() {
        let record = MetricRecord::new("x")
            .with(MetricField::Sales, 10.0)
            .with(MetricField::Orders, 2.0);
        assert_eq!(record.value(MetricField::Sales), Some(10.0));
        assert_eq!(record.value(MetricField::Revenue), None);
    }

    #[test]
    fn test_trend_options_exclude_inventory_fields() {
        assert!(MetricField::TREND_OPTIONS.contains(&MetricField::Roi));
        assert!(!MetricField::TREND_OPTIONS.contains(&MetricField::CurrentStock));
        assert!(!MetricField::TREND_OPTIONS.contains(&MetricField::Revenue));
    }
}

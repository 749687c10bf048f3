use serde::{Deserialize, Serialize};

use super::metric::{MetricField, MetricSource};

/// One point of the time series behind the charts view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: String,
    pub sales: f64,
    pub advertising_cost: f64,
    pub refunds: f64,
    pub net_profit: f64,
    pub orders: f64,
}

impl MetricSource for ChartPoint {
    fn value(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::Sales => Some(self.sales),
            MetricField::AdvertisingCost => Some(self.advertising_cost),
            MetricField::Refunds => Some(self.refunds),
            MetricField::NetProfit => Some(self.net_profit),
            MetricField::Orders => Some(self.orders),
            _ => None,
        }
    }
}

/// Chart series that can be toggled on and off
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartSeries {
    Sales,
    AdvertisingCost,
    Refunds,
    NetProfit,
    Orders,
}

impl ChartSeries {
    pub const ALL: [ChartSeries; 5] = [
        Self::Sales,
        Self::AdvertisingCost,
        Self::Refunds,
        Self::NetProfit,
        Self::Orders,
    ];

    pub fn field(&self) -> MetricField {
        match self {
            Self::Sales => MetricField::Sales,
            Self::AdvertisingCost => MetricField::AdvertisingCost,
            Self::Refunds => MetricField::Refunds,
            Self::NetProfit => MetricField::NetProfit,
            Self::Orders => MetricField::Orders,
        }
    }

    pub fn label(&self) -> &'static str {
        self.field().label()
    }

    /// Orders are counts, every other series is money
    pub fn is_currency(&self) -> bool {
        !matches!(self, Self::Orders)
    }

    pub fn parse(s: &str) -> Option<Self> {
        let field = MetricField::parse(s)?;
        Self::ALL.into_iter().find(|series| series.field() == field)
    }
}

impl std::fmt::Display for ChartSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field().as_str())
    }
}

/// How the charts view draws its series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Area,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Line => "Line Chart",
            Self::Bar => "Bar Chart",
            Self::Area => "Area Chart",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "line" => Some(Self::Line),
            "bar" => Some(Self::Bar),
            "area" => Some(Self::Area),
            _ => None,
        }
    }
}

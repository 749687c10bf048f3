//! Dataset loading and validation
//!
//! A [`Dataset`] holds the pre-shaped rows behind every dashboard view. It
//! comes either from the built-in sample ([`Dataset::sample`]) or from a JSON
//! file with camelCase keys ([`Dataset::from_file`]). Both paths run
//! [`Dataset::validate`], so the aggregator can assume finite numbers.

mod sample;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{ChartPoint, MetricTile, PlRow, ProductTrend, RegionRow, TimePeriod};

/// Stored ratios further than this from the derived value get a warning
const REPORTED_DRIFT_TOLERANCE: f64 = 0.5;

/// Errors raised while loading or validating a dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Non-finite value in {section} row '{row}' field '{field}'")]
    NonFinite {
        section: &'static str,
        row: String,
        field: String,
    },

    #[error("Duplicate tile period: {0}")]
    DuplicatePeriod(TimePeriod),
}

/// All rows behind the dashboard views
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub tiles: Vec<MetricTile>,
    #[serde(default)]
    pub chart: Vec<ChartPoint>,
    #[serde(default)]
    pub pl: Vec<PlRow>,
    #[serde(default)]
    pub regions: Vec<RegionRow>,
    #[serde(default)]
    pub trends: Vec<ProductTrend>,
}

impl Dataset {
    /// Built-in sample data
    pub fn sample() -> Self {
        sample::sample_dataset()
    }

    /// Load and validate a JSON dataset
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&content).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        dataset.validate()?;
        debug!(
            path = %path.display(),
            tiles = dataset.tiles.len(),
            regions = dataset.regions.len(),
            products = dataset.trends.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse without validating
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up the tile for a period
    pub fn tile(&self, period: TimePeriod) -> Option<&MetricTile> {
        self.tiles.iter().find(|t| t.period == period)
    }

    /// Reject non-finite numbers and duplicate tile periods.
    ///
    /// Stored margins and percent changes that disagree with the derived
    /// values are logged, not rejected.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut periods = HashSet::new();
        for tile in &self.tiles {
            if !periods.insert(tile.period) {
                return Err(DatasetError::DuplicatePeriod(tile.period));
            }
            check_finite(
                "tiles",
                &tile.label,
                &[
                    ("sales", tile.sales),
                    ("orders", tile.orders),
                    ("unitsSold", tile.units_sold),
                    ("refunds", tile.refunds),
                    ("advertisingCost", tile.advertising_cost),
                    ("estimatedPayout", tile.estimated_payout),
                    ("grossProfit", tile.gross_profit),
                    ("netProfit", tile.net_profit),
                    ("amazonFees", tile.amazon_fees),
                    ("cogs", tile.cogs),
                    ("shippingCost", tile.shipping_cost),
                ],
            )?;
            warn_on_drift("tile", &tile.label, "margin", tile.reported_margin, tile.margin());
        }

        for point in &self.chart {
            check_finite(
                "chart",
                &point.date,
                &[
                    ("sales", point.sales),
                    ("advertisingCost", point.advertising_cost),
                    ("refunds", point.refunds),
                    ("netProfit", point.net_profit),
                    ("orders", point.orders),
                ],
            )?;
        }

        for row in &self.pl {
            check_pl_row(row)?;
        }

        for region in &self.regions {
            check_finite(
                "regions",
                &region.country,
                &[
                    ("unitsSold", region.units_sold),
                    ("currentStock", region.current_stock),
                    ("refunds", region.refunds),
                    ("revenue", region.revenue),
                    ("grossProfit", region.gross_profit),
                ],
            )?;
        }

        for product in &self.trends {
            check_finite(
                "trends",
                &product.sku,
                &[
                    ("currentValue", product.current_value),
                    ("previousValue", product.previous_value),
                ],
            )?;
            if product.sparkline.iter().any(|v| !v.is_finite()) {
                return Err(non_finite("trends", &product.sku, "sparkline"));
            }
            warn_on_drift(
                "product",
                &product.sku,
                "percentChange",
                product.reported_change,
                product.change(),
            );
        }

        Ok(())
    }
}

fn non_finite(section: &'static str, row: &str, field: &str) -> DatasetError {
    DatasetError::NonFinite {
        section,
        row: row.to_string(),
        field: field.to_string(),
    }
}

fn check_finite(section: &'static str, row: &str, fields: &[(&str, f64)]) -> Result<(), DatasetError> {
    match fields.iter().find(|(_, v)| !v.is_finite()) {
        Some((field, _)) => Err(non_finite(section, row, field)),
        None => Ok(()),
    }
}

fn check_pl_row(row: &PlRow) -> Result<(), DatasetError> {
    if let Some(idx) = row.values.iter().position(|v| !v.is_finite()) {
        return Err(non_finite("pl", &row.category, &format!("values[{}]", idx)));
    }
    row.subcategories.iter().try_for_each(check_pl_row)
}

fn warn_on_drift(kind: &str, row: &str, field: &str, reported: Option<f64>, derived: Option<f64>) {
    let Some(reported) = reported else {
        return;
    };
    match derived {
        Some(derived) if (reported - derived).abs() <= REPORTED_DRIFT_TOLERANCE => {}
        Some(derived) => warn!(
            "{} '{}': stored {} {:.2} differs from derived {:.2}, using derived",
            kind, row, field, reported, derived
        ),
        None => warn!(
            "{} '{}': stored {} {:.2} but derived value is undefined",
            kind, row, field, reported
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_valid() {
        let dataset = Dataset::sample();
        dataset.validate().unwrap();
        assert!(dataset.tile(TimePeriod::Today).is_some());
        assert!(dataset.tile(TimePeriod::Yesterday).is_some());
    }

    #[test]
    fn test_duplicate_period_rejected() {
        let mut dataset = Dataset::sample();
        let dup = dataset.tiles[0].clone();
        dataset.tiles.push(dup);
        assert!(matches!(
            dataset.validate(),
            Err(DatasetError::DuplicatePeriod(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut dataset = Dataset::sample();
        dataset.regions[0].revenue = f64::NAN;
        let err = dataset.validate().unwrap_err();
        assert!(err.to_string().contains("revenue"), "{}", err);
    }

    #[test]
    fn test_non_finite_in_nested_pl_row_rejected() {
        let mut dataset = Dataset::sample();
        let row = dataset
            .pl
            .iter_mut()
            .find(|r| r.has_subcategories())
            .unwrap();
        row.subcategories[0].values[1] = f64::INFINITY;
        assert!(matches!(
            dataset.validate(),
            Err(DatasetError::NonFinite { section: "pl", .. })
        ));
    }

    #[test]
    fn test_json_roundtrip_keeps_reported_fields() {
        let json = r#"{
            "trends": [{
                "asin": "B0TEST", "sku": "SKU-1", "name": "Widget A",
                "currentValue": 150, "previousValue": 100, "percentChange": 50,
                "sparkline": [1, 2, 3]
            }]
        }"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.trends[0].reported_change, Some(50.0));
        assert_eq!(dataset.trends[0].change(), Some(50.0));
        assert!(dataset.tiles.is_empty());
    }

    #[test]
    fn test_from_file_missing() {
        let err = Dataset::from_file(Path::new("/nonexistent/dataset.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}

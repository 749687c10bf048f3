//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small dataset exercising zero denominators in every section
pub const EDGE_DATASET: &str = r#"{
  "tiles": [
    {
      "period": "today", "label": "Today",
      "sales": 0, "orders": 0, "unitsSold": 0, "refunds": 0,
      "advertisingCost": 0, "estimatedPayout": 0, "grossProfit": 0,
      "netProfit": 0, "amazonFees": 0, "cogs": 0, "shippingCost": 0
    },
    {
      "period": "yesterday", "label": "Yesterday",
      "sales": 0, "orders": 0, "unitsSold": 0, "refunds": 0,
      "advertisingCost": 0, "estimatedPayout": 0, "grossProfit": 0,
      "netProfit": 0, "amazonFees": 0, "cogs": 0, "shippingCost": 0
    }
  ],
  "chart": [
    { "date": "Jan 01", "sales": 100, "advertisingCost": 10, "refunds": 0, "netProfit": 20, "orders": 3 }
  ],
  "pl": [
    { "category": "Revenue", "values": [0, 0, 0] },
    { "category": "Net Profit", "values": [0, 0, 0] }
  ],
  "regions": [
    { "region": "Europe", "country": "Germany", "unitsSold": 0, "currentStock": 0,
      "refunds": 0, "revenue": 0, "grossProfit": 0 }
  ],
  "trends": [
    { "asin": "B0NEW", "sku": "NEW-1", "name": "Brand New", "currentValue": 50, "previousValue": 0 },
    { "asin": "B0UP", "sku": "UP-1", "name": "Riser", "currentValue": 120, "previousValue": 100 },
    { "asin": "B0DOWN", "sku": "DOWN-1", "name": "Faller", "currentValue": 80, "previousValue": 100,
      "percentChange": -20 }
  ]
}"#;

/// Writes `content` to a file in a fresh temp dir
pub fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    (temp_dir, path)
}

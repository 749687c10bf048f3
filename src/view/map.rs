//! Map shading and the selected-country panel

use crate::domain::{MapMode, RegionRow};
use crate::stats::MapSummary;

/// Shading intensity of a country in percent of the busiest country.
///
/// 0 for unknown countries or when every value is zero.
pub fn intensity(rows: &[RegionRow], summary: &MapSummary, country: &str, mode: MapMode) -> f64 {
    let Some(row) = rows.iter().find(|r| r.country == country) else {
        return 0.0;
    };
    let (value, max) = match mode {
        MapMode::Sales => (row.revenue, summary.max_revenue),
        MapMode::Stock => (row.current_stock, summary.max_stock),
    };
    if max <= 0.0 { 0.0 } else { value / max * 100.0 }
}

/// Width of the stock bar in the detail panel, capped at 100
pub fn stock_fill_percent(row: &RegionRow, summary: &MapSummary) -> f64 {
    if summary.max_stock <= 0.0 {
        0.0
    } else {
        (row.current_stock / summary.max_stock * 100.0).min(100.0)
    }
}

/// Countries ordered by the active map mode, busiest first
pub fn ranked_countries(rows: &[RegionRow], mode: MapMode) -> Vec<&RegionRow> {
    let mut ranked: Vec<&RegionRow> = rows.iter().collect();
    super::selector::sort_desc_by(&mut ranked, |r| match mode {
        MapMode::Sales => Some(r.revenue),
        MapMode::Stock => Some(r.current_stock),
    });
    ranked
}

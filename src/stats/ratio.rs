//! Guarded ratio math
//!
//! Every ratio here returns `None` when the denominator is zero or the result
//! is not finite. Callers render `None` with the configured placeholder
//! (see [`crate::format::format_change`]).

/// Percent change from `previous` to `current`.
///
/// `(current - previous) / previous * 100`, or `None` when `previous` is zero.
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    ratio_percent(current - previous, previous)
}

/// Profit as a percentage of revenue. `None` when revenue is zero.
pub fn margin_percent(profit: f64, revenue: f64) -> Option<f64> {
    ratio_percent(profit, revenue)
}

/// Net profit as a percentage of the cost basis (advertising spend).
pub fn roi_percent(net_profit: f64, cost: f64) -> Option<f64> {
    ratio_percent(net_profit, cost)
}

/// `part / whole * 100`, guarded
pub fn ratio_percent(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        return None;
    }
    let value = part / whole * 100.0;
    value.is_finite().then_some(value)
}

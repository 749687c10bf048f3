//! Charts command implementation

use anyhow::{Result, bail};

use sellerhub::ChartKind;
use sellerhub::domain::{ChartSeries, MetricSource};
use sellerhub::stats::StatsQuery;
use sellerhub::view::{ViewAction, sparkline};

use super::Context;

/// Print series totals, then the active series point by point
pub fn charts_command(ctx: &Context, toggles: &[String], kind: &str) -> Result<()> {
    let Some(kind) = ChartKind::parse(kind) else {
        bail!("Unknown chart kind: {} (expected line, bar or area)", kind);
    };

    let mut actions = vec![ViewAction::SetChartKind(kind)];
    for name in toggles {
        let Some(series) = ChartSeries::parse(name) else {
            bail!("Unknown chart series: {}", name);
        };
        actions.push(ViewAction::ToggleSeries(series));
    }
    let state = ctx.state.apply_all(actions);

    let fmt = &ctx.formatter;
    let totals = StatsQuery::new(&ctx.dataset).chart_totals();

    println!("Totals:");
    for series in ChartSeries::ALL {
        let total = totals.get(series);
        let value = if series.is_currency() {
            fmt.currency(total)
        } else {
            fmt.number(total)
        };
        let marker = if state.active_series.contains(&series) { "*" } else { " " };
        println!("  {} {:<18} {:>14}", marker, series.label(), value);
    }

    if state.active_series.is_empty() {
        println!("\nNo series selected.");
        return Ok(());
    }

    println!("\n{}:", state.chart_kind.label());
    for series in state.active_series.iter() {
        let values: Vec<f64> = ctx
            .dataset
            .chart
            .iter()
            .map(|p| p.value(series.field()).unwrap_or(0.0))
            .collect();
        println!("  {:<18} {}", series.label(), sparkline::blocks(&values));
    }

    println!();
    for point in &ctx.dataset.chart {
        let cells: Vec<String> = state
            .active_series
            .iter()
            .map(|series| {
                let v = point.value(series.field()).unwrap_or(0.0);
                if series.is_currency() {
                    fmt.compact_currency(v)
                } else {
                    fmt.number(v)
                }
            })
            .collect();
        println!("  {}  {}", point.date, cells.join("  "));
    }

    Ok(())
}

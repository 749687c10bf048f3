//! Trends command implementation

use anyhow::{Result, bail};

use sellerhub::ProductTrend;
use sellerhub::domain::MetricField;
use sellerhub::stats::StatsQuery;
use sellerhub::view::{SortKey, ViewAction, select_trends, sparkline};

use super::Context;

/// Print the filtered, sorted trends table and the two ranking panels
pub fn trends_command(
    ctx: &Context,
    filter: String,
    sort: &str,
    metric: Option<&str>,
) -> Result<()> {
    let Some(sort) = SortKey::parse(sort) else {
        bail!("Unknown sort key: {} (expected change or current)", sort);
    };
    let mut actions = vec![ViewAction::SetFilter(filter), ViewAction::SortBy(sort)];
    if let Some(name) = metric {
        actions.push(ViewAction::SelectMetric(parse_trend_metric(name)?));
    }
    let state = ctx.state.apply_all(actions);

    let fmt = &ctx.formatter;
    let summary = StatsQuery::new(&ctx.dataset).trend_summary();
    let selection = select_trends(&ctx.dataset.trends, &state, ctx.config.settings.top_n);

    println!(
        "{} trends, sorted by {}: {} products, portfolio {}, avg change {}",
        state.metric.label(),
        state.sort.label(),
        summary.product_count,
        fmt.currency(summary.portfolio_value),
        fmt.change(summary.average_change)
    );
    println!(
        "Growing {} ({}), declining {} ({})\n",
        summary.growing,
        fmt.percent(summary.growing_share()),
        summary.declining,
        fmt.percent(summary.declining_share())
    );

    if selection.rows.is_empty() {
        println!("No products match \"{}\".", state.filter);
    }
    for product in &selection.rows {
        print_row(product, ctx);
    }

    println!("\nTop performers:");
    for product in &selection.top_performers {
        println!("  {:<32} {}", product.name, fmt.change(product.change()));
    }
    println!("\nNeeds attention:");
    for product in &selection.needs_attention {
        println!("  {:<32} {}", product.name, fmt.change(product.change()));
    }

    Ok(())
}

/// Accept only the KPIs the trends view offers
fn parse_trend_metric(name: &str) -> Result<MetricField> {
    match MetricField::parse(name) {
        Some(field) if MetricField::TREND_OPTIONS.contains(&field) => Ok(field),
        _ => {
            let options: Vec<&str> = MetricField::TREND_OPTIONS.iter().map(|f| f.as_str()).collect();
            bail!("Unknown trends metric: {} (expected one of {})", name, options.join(", "))
        }
    }
}

fn print_row(product: &ProductTrend, ctx: &Context) {
    let fmt = &ctx.formatter;
    println!(
        "  {:<12} {:<14} {:<32} {:>12} {:>12} {:>8}  {}",
        product.asin,
        product.sku,
        product.name,
        fmt.currency(product.current_value),
        fmt.currency(product.previous_value),
        fmt.change(product.change()),
        sparkline::blocks(&product.sparkline)
    );
}

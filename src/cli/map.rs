//! Map command implementation

use anyhow::{Result, bail};

use sellerhub::MapMode;
use sellerhub::stats::StatsQuery;
use sellerhub::view::{ViewAction, map};

use super::Context;

/// Print region totals, countries by the active mode, and an optional country panel
pub fn map_command(ctx: &Context, mode: &str, country: Option<String>) -> Result<()> {
    let Some(mode) = MapMode::parse(mode) else {
        bail!("Unknown map mode: {} (expected sales or stock)", mode);
    };
    let state = ctx.state.apply_all([
        ViewAction::SetMapMode(mode),
        ViewAction::SelectCountry(country),
    ]);

    let fmt = &ctx.formatter;
    let query = StatsQuery::new(&ctx.dataset);
    let summary = query.map_summary();

    println!("{}\n", state.map_mode.title());
    for region in &summary.regions {
        println!(
            "{} ({} countries): revenue {}, units {}, stock {}, margin {}",
            region.region,
            region.countries,
            fmt.currency(region.revenue),
            fmt.number(region.units_sold),
            fmt.number(region.current_stock),
            fmt.percent(region.margin())
        );
    }

    println!();
    for row in map::ranked_countries(&ctx.dataset.regions, state.map_mode) {
        let shade = map::intensity(&ctx.dataset.regions, &summary, &row.country, state.map_mode);
        let value = match state.map_mode {
            MapMode::Sales => fmt.currency(row.revenue),
            MapMode::Stock => fmt.number(row.current_stock),
        };
        println!(
            "  {:<4} {:<20} {:>14}  {:>5.1}%",
            row.badge(),
            row.country,
            value,
            shade
        );
    }

    if let Some(name) = &state.selected_country {
        let Some(row) = query.country(name) else {
            bail!("Unknown country: {}", name);
        };
        println!("\n{} ({})", row.country, row.region);
        println!("  Revenue:       {}", fmt.currency(row.revenue));
        println!("  Gross profit:  {}", fmt.currency(row.gross_profit));
        println!("  Margin:        {}", fmt.percent(row.margin()));
        println!("  Units sold:    {}", fmt.number(row.units_sold));
        println!("  Refunds:       {}", fmt.currency(row.refunds));
        println!(
            "  Stock:         {} ({:.0}% of max)",
            fmt.number(row.current_stock),
            map::stock_fill_percent(row, &summary)
        );
    }

    Ok(())
}

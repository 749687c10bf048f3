//! Tiles command implementation

use sellerhub::stats::{StatsQuery, TrendValue};

use super::Context;

/// Print one card per period, then today vs yesterday
pub fn tiles_command(ctx: &Context) {
    let query = StatsQuery::new(&ctx.dataset);
    let fmt = &ctx.formatter;

    let tiles = query.tiles();
    if tiles.is_empty() {
        println!("No metric tiles in dataset.");
        return;
    }

    for tile in tiles {
        println!("{} ({})", tile.label, tile.period.label());
        println!("  Sales:            {}", fmt.currency(tile.sales));
        println!("  Orders / Units:   {} / {}", fmt.number(tile.orders), fmt.number(tile.units_sold));
        println!("  Refunds:          {}", fmt.currency(tile.refunds));
        println!("  Adv. cost:        {}", fmt.currency(tile.advertising_cost));
        println!("  Est. payout:      {}", fmt.currency(tile.estimated_payout));
        println!("  Gross profit:     {}", fmt.currency(tile.gross_profit));
        println!("  Net profit:       {}", fmt.currency(tile.net_profit));
        println!("  Margin:           {}", fmt.percent(tile.margin()));
        println!("  ROI:              {}", fmt.percent(tile.roi()));
        println!();
    }

    match query.quick_stats() {
        Some(quick) => {
            println!("Today vs yesterday:");
            print_trend("Sales", &quick.sales, ctx, true);
            print_trend("Orders", &quick.orders, ctx, false);
            print_trend("Units sold", &quick.units_sold, ctx, false);
            print_trend("Net profit", &quick.net_profit, ctx, true);
        }
        None => println!("Today vs yesterday: {}", fmt.undefined),
    }
}

fn print_trend(label: &str, value: &TrendValue, ctx: &Context, currency: bool) {
    let fmt = &ctx.formatter;
    let current = if currency {
        fmt.currency(value.current)
    } else {
        fmt.number(value.current)
    };
    println!(
        "  {:<12} {:>14}  {}",
        label,
        current,
        fmt.change(value.percent_change())
    );
}

//! P&L command implementation

use sellerhub::PL_PERIODS;
use sellerhub::stats::StatsQuery;
use sellerhub::view::{ViewAction, visible_rows};

use super::Context;

/// Print the statement with the requested rows toggled, then per-period totals
pub fn pl_command(ctx: &Context, toggles: &[String]) {
    let state = ctx
        .state
        .apply_all(toggles.iter().cloned().map(ViewAction::ToggleRow));
    let fmt = &ctx.formatter;

    if ctx.dataset.pl.is_empty() {
        println!("No P&L rows in dataset.");
        return;
    }

    print!("{:<32}", "Category");
    for period in PL_PERIODS {
        print!("{:>22}", period);
    }
    println!();

    for visible in visible_rows(&ctx.dataset.pl, &state.expanded_rows) {
        let marker = match (visible.row.has_subcategories(), visible.expanded) {
            (true, true) => "▾ ",
            (true, false) => "▸ ",
            (false, _) => "  ",
        };
        let label = format!("{}{}{}", "  ".repeat(visible.depth), marker, visible.row.category);
        let label = if visible.is_highlighted() {
            label.to_uppercase()
        } else {
            label
        };
        print!("{:<32}", label);
        for period in 0..PL_PERIODS.len() {
            let value = visible.row.value_at(period);
            let cell = if visible.row.is_percentage() {
                fmt.percent(Some(value))
            } else {
                fmt.currency(value)
            };
            print!("{:>22}", cell);
        }
        println!();
    }

    println!();
    let query = StatsQuery::new(&ctx.dataset);
    for (period, name) in PL_PERIODS.iter().enumerate() {
        let summary = query.pl_summary(period);
        println!(
            "{}: revenue {}, expenses {}, net profit {}, margin {}",
            name,
            fmt.currency(summary.revenue),
            fmt.currency(summary.total_expenses),
            fmt.currency(summary.net_profit),
            fmt.percent(summary.margin())
        );
    }
}

//! Built-in sample data used when no dataset file is configured

use super::Dataset;
use crate::domain::{ChartPoint, MetricTile, PlRow, ProductTrend, RegionRow, TimePeriod};

/// Month-to-date and forecast columns are scaled from last month
const MTD_FACTOR: f64 = 0.5966;
const FORECAST_FACTOR: f64 = 1.08;

pub(super) fn sample_dataset() -> Dataset {
    Dataset {
        tiles: sample_tiles(),
        chart: sample_chart(),
        pl: sample_pl(),
        regions: sample_regions(),
        trends: sample_trends(),
    }
}

#[allow(clippy::too_many_arguments)]
fn tile(
    period: TimePeriod,
    sales: f64,
    orders: f64,
    units_sold: f64,
    refunds: f64,
    advertising_cost: f64,
    estimated_payout: f64,
    gross_profit: f64,
    net_profit: f64,
    margin: f64,
    amazon_fees: f64,
    cogs: f64,
    shipping_cost: f64,
) -> MetricTile {
    MetricTile {
        period,
        label: period.label().to_string(),
        sales,
        orders,
        units_sold,
        refunds,
        advertising_cost,
        estimated_payout,
        gross_profit,
        net_profit,
        reported_margin: Some(margin),
        amazon_fees,
        cogs,
        shipping_cost,
    }
}

fn sample_tiles() -> Vec<MetricTile> {
    use TimePeriod::*;
    vec![
        tile(Today, 1842.50, 47.0, 58.0, 2.0, 215.30, 1290.10, 712.40, 497.10, 27.0, 552.75, 460.60, 116.75),
        tile(Yesterday, 1695.20, 43.0, 52.0, 1.0, 198.70, 1187.40, 650.10, 451.40, 26.6, 508.55, 423.80, 112.75),
        tile(Mtd, 31250.80, 802.0, 987.0, 24.0, 3750.10, 21875.55, 12187.80, 8437.70, 27.0, 9375.25, 7812.70, 1875.05),
        tile(LastMonth, 52380.00, 1345.0, 1652.0, 41.0, 6285.60, 36666.00, 24057.92, 16200.92, 30.9, 15227.08, 13095.00, 3142.80),
        tile(ThisMonthForecast, 56570.40, 1452.0, 1784.0, 44.0, 6788.45, 39599.28, 25982.55, 17497.00, 30.9, 16445.28, 14142.60, 3394.22),
    ]
}

fn sample_chart() -> Vec<ChartPoint> {
    [
        ("Jun 01", 1520.40, 182.10, 46.00, 398.20, 39.0),
        ("Jun 02", 1688.90, 190.50, 52.30, 441.70, 44.0),
        ("Jun 03", 1432.10, 175.00, 38.90, 366.00, 37.0),
        ("Jun 04", 1811.70, 210.40, 61.20, 472.90, 46.0),
        ("Jun 05", 1976.30, 224.80, 58.70, 529.40, 51.0),
        ("Jun 06", 1695.20, 198.70, 49.50, 451.40, 43.0),
        ("Jun 07", 1842.50, 215.30, 55.10, 497.10, 47.0),
    ]
    .into_iter()
    .map(|(date, sales, advertising_cost, refunds, net_profit, orders)| ChartPoint {
        date: date.to_string(),
        sales,
        advertising_cost,
        refunds,
        net_profit,
        orders,
    })
    .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn pl_row(category: &str, last_month: f64) -> PlRow {
    PlRow::new(
        category,
        vec![
            last_month,
            round2(last_month * MTD_FACTOR),
            round2(last_month * FORECAST_FACTOR),
        ],
    )
}

fn sample_pl() -> Vec<PlRow> {
    vec![
        pl_row("Revenue", 52380.00).with_subcategories(vec![
            pl_row("Product Sales", 50420.00),
            pl_row("Shipping Credits", 1410.00),
            pl_row("Gift Wrap Credits", 550.00),
        ]),
        pl_row("Amazon Fees", 15227.08).with_subcategories(vec![
            pl_row("Referral Fees", 7857.09),
            pl_row("FBA Fulfillment Fees", 5238.06),
            pl_row("Storage Fees", 1431.93),
            pl_row("Other Fees", 700.00),
        ]),
        pl_row("Cost of Goods Sold", 13095.00),
        pl_row("Gross Profit", 24057.92),
        pl_row("Advertising", 6285.60).with_subcategories(vec![
            pl_row("Sponsored Products", 4714.20),
            pl_row("Sponsored Brands", 1571.40),
        ]),
        pl_row("Refunds", 1571.40),
        pl_row("Net Profit", 16200.92),
        PlRow::new("Net Margin", vec![30.93, 30.93, 30.93]),
    ]
}

fn sample_regions() -> Vec<RegionRow> {
    [
        ("North America", "United States", 912.0, 2340.0, 22.0, 28450.00, 12233.50),
        ("North America", "Canada", 131.0, 410.0, 4.0, 4120.00, 1689.20),
        ("Europe", "United Kingdom", 198.0, 620.0, 6.0, 6230.00, 2616.60),
        ("Europe", "Germany", 187.0, 540.0, 5.0, 5890.00, 2414.90),
        ("Europe", "France", 104.0, 380.0, 3.0, 3310.00, 1323.30),
        ("Europe", "Italy", 61.0, 210.0, 2.0, 1870.00, 729.30),
        ("Europe", "Spain", 49.0, 190.0, 1.0, 1540.00, 585.20),
        ("Asia-Pacific", "Japan", 72.0, 260.0, 2.0, 2180.00, 850.20),
        ("Asia-Pacific", "Australia", 38.0, 150.0, 1.0, 1150.00, 437.00),
    ]
    .into_iter()
    .map(
        |(region, country, units_sold, current_stock, refunds, revenue, gross_profit)| RegionRow {
            region: region.to_string(),
            country: country.to_string(),
            units_sold,
            current_stock,
            refunds,
            revenue,
            gross_profit,
        },
    )
    .collect()
}

fn sample_trends() -> Vec<ProductTrend> {
    [
        ("B08XYZ1234", "BCB-001", "Bamboo Cutting Board Set", 4820.50, 3950.20, Some(22.0),
            vec![3950.0, 4010.0, 4180.0, 4260.0, 4455.0, 4610.0, 4820.0]),
        ("B07ABC5678", "SWB-750", "Stainless Steel Water Bottle", 3615.00, 3890.40, Some(-7.1),
            vec![3890.0, 3842.0, 3801.0, 3760.0, 3712.0, 3650.0, 3615.0]),
        ("B09DEF9012", "SBM-002", "Silicone Baking Mat (2-Pack)", 2240.75, 1605.30, Some(39.6),
            vec![1605.0, 1720.0, 1790.0, 1905.0, 2010.0, 2150.0, 2240.0]),
        ("B08GHI3456", "WCP-010", "Wireless Charging Pad", 1980.00, 2645.80, Some(-25.2),
            vec![2645.0, 2510.0, 2420.0, 2290.0, 2180.0, 2050.0, 1980.0]),
        ("B07JKL7890", "YMP-183", "Yoga Mat Premium", 3105.60, 2980.10, Some(4.2),
            vec![2980.0, 3010.0, 2995.0, 3040.0, 3060.0, 3090.0, 3105.0]),
        ("B09MNO1234", "LDL-220", "LED Desk Lamp", 1455.20, 1502.90, Some(-3.2),
            vec![1502.0, 1498.0, 1490.0, 1481.0, 1470.0, 1462.0, 1455.0]),
        ("B08PQR5678", "WOT-005", "Widget Organizer Tray", 890.40, 610.00, Some(46.0),
            vec![610.0, 655.0, 700.0, 748.0, 790.0, 842.0, 890.0]),
        ("B0BSTU9012", "CPS-300", "Ceramic Pour-Over Set", 640.00, 0.0, None,
            vec![0.0, 0.0, 85.0, 160.0, 310.0, 480.0, 640.0]),
    ]
    .into_iter()
    .map(
        |(asin, sku, name, current_value, previous_value, reported_change, sparkline)| ProductTrend {
            asin: asin.to_string(),
            sku: sku.to_string(),
            name: name.to_string(),
            current_value,
            previous_value,
            reported_change,
            sparkline,
        },
    )
    .collect()
}

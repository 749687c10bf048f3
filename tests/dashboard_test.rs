//! Aggregation and selection over whole datasets

mod common;

use sellerhub::dataset::{Dataset, DatasetError};
use sellerhub::format::Formatter;
use sellerhub::stats::{StatsQuery, group_by, total};
use sellerhub::view::{SortKey, ViewAction, ViewState, select_trends, visible_rows};
use sellerhub::{ChartSeries, MetricField, PL_PERIODS, TimePeriod};

use common::{EDGE_DATASET, write_temp};

#[test]
fn test_sample_dataset_is_valid() {
    let dataset = Dataset::sample();
    dataset.validate().unwrap();
    assert_eq!(dataset.tiles.len(), 5);
    assert_eq!(dataset.pl[0].values.len(), PL_PERIODS.len());
}

#[test]
fn test_grouping_preserves_totals() {
    let dataset = Dataset::sample();
    let buckets = group_by(&dataset.regions, |r| r.region.clone());

    for field in [MetricField::Revenue, MetricField::UnitsSold, MetricField::CurrentStock] {
        let grouped: f64 = buckets.values().map(|b| b.sum(field)).sum();
        let flat = total(&dataset.regions, field);
        assert!((grouped - flat).abs() < 1e-6, "{field} lost in grouping");
    }
    let counted: usize = buckets.values().map(|b| b.count).sum();
    assert_eq!(counted, dataset.regions.len());
}

#[test]
fn test_bucket_margin_is_recomputed_not_summed() {
    let dataset = Dataset::sample();
    let buckets = group_by(&dataset.regions, |r| r.region.clone());
    let europe = &buckets["Europe"];

    let expected = europe.sum(MetricField::GrossProfit) / europe.sum(MetricField::Revenue) * 100.0;
    let margin = europe.get(MetricField::Margin).unwrap();
    assert!((margin - expected).abs() < 1e-9);
    assert!(margin < 100.0);
}

#[test]
fn test_zero_denominators_yield_undefined() {
    let (_dir, path) = write_temp("edge.json", EDGE_DATASET);
    let dataset = Dataset::from_file(&path).unwrap();
    let query = StatsQuery::new(&dataset);

    let quick = query.quick_stats().unwrap();
    assert_eq!(quick.sales.percent_change(), None);
    assert_eq!(dataset.tile(TimePeriod::Today).unwrap().margin(), None);
    assert_eq!(dataset.tile(TimePeriod::Today).unwrap().roi(), None);
    assert_eq!(query.pl_summary(0).margin(), None);

    let map = query.map_summary();
    assert_eq!(map.regions[0].margin(), None);
    assert_eq!(map.max_revenue, 0.0);

    let fmt = Formatter::default();
    assert_eq!(fmt.change(quick.sales.percent_change()), "—");
    assert_eq!(fmt.percent(query.pl_summary(0).margin()), "—");
}

#[test]
fn test_undefined_changes_sort_last() {
    let dataset = Dataset::from_json(EDGE_DATASET).unwrap();
    let state = ViewState::default().apply(ViewAction::SortBy(SortKey::Change));
    let selection = select_trends(&dataset.trends, &state, 3);

    let names: Vec<&str> = selection.rows.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Riser", "Faller", "Brand New"]);
}

#[test]
fn test_average_change_skips_undefined() {
    let dataset = Dataset::from_json(EDGE_DATASET).unwrap();
    let summary = StatsQuery::new(&dataset).trend_summary();
    assert_eq!(summary.product_count, 3);
    assert_eq!(summary.growing, 1);
    assert_eq!(summary.declining, 1);
    assert!(summary.average_change.unwrap().abs() < 1e-9);
}

#[test]
fn test_filter_does_not_change_panels() {
    let dataset = Dataset::sample();
    let unfiltered = select_trends(&dataset.trends, &ViewState::default(), 3);
    let filtered_state = ViewState::default().apply(ViewAction::SetFilter("zzz-no-match".into()));
    let filtered = select_trends(&dataset.trends, &filtered_state, 3);

    assert!(filtered.rows.is_empty());
    assert_eq!(filtered.top_performers, unfiltered.top_performers);
    assert_eq!(filtered.needs_attention, unfiltered.needs_attention);
    assert!(unfiltered.top_performers.len() <= 3);
}

#[test]
fn test_sort_by_current_value() {
    let dataset = Dataset::sample();
    let state = ViewState::default().apply(ViewAction::SortBy(SortKey::Current));
    let rows = select_trends(&dataset.trends, &state, 3).rows;
    assert_eq!(rows.len(), dataset.trends.len());
    for pair in rows.windows(2) {
        assert!(pair[0].current_value >= pair[1].current_value);
    }
}

#[test]
fn test_view_actions_toggle_back() {
    let start = ViewState::default();
    let toggled = start
        .apply(ViewAction::ToggleSeries(ChartSeries::Orders))
        .apply(ViewAction::ToggleRow("Advertising".into()));
    assert_ne!(toggled, start);

    let back = toggled
        .apply(ViewAction::ToggleSeries(ChartSeries::Orders))
        .apply(ViewAction::ToggleRow("Advertising".into()));
    assert_eq!(back, start);
}

#[test]
fn test_collapsed_rows_hide_children() {
    let dataset = Dataset::sample();
    let expanded = ViewState::default();
    let collapsed = expanded.apply(ViewAction::ToggleRow("Amazon Fees".into()));

    let open = visible_rows(&dataset.pl, &expanded.expanded_rows);
    let closed = visible_rows(&dataset.pl, &collapsed.expanded_rows);
    assert!(open.len() > closed.len());
    assert!(closed.iter().all(|r| r.depth == 0));
}

#[test]
fn test_non_finite_value_is_rejected() {
    let mut dataset = Dataset::sample();
    dataset.regions[0].revenue = f64::NAN;
    let err = dataset.validate().unwrap_err();
    assert!(matches!(err, DatasetError::NonFinite { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::from_file(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let (_dir, path) = write_temp("bad.json", "{ \"tiles\": [ }");
    let err = Dataset::from_file(&path).unwrap_err();
    assert!(matches!(err, DatasetError::Parse { .. }));
}

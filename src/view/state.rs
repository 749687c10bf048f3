//! Immutable view state and the actions that produce new states

use std::collections::BTreeSet;

use crate::domain::{ChartKind, ChartSeries, MapMode, MetricField};

/// Ordering of the trends table, always descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Largest absolute percent change first
    #[default]
    Change,
    /// Largest current value first
    Current,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Change => "Change %",
            SortKey::Current => "Current Value",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "change" | "change%" => Some(SortKey::Change),
            "current" | "value" => Some(SortKey::Current),
            _ => None,
        }
    }
}

/// A set with idempotent toggle semantics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSet<T: Ord> {
    items: BTreeSet<T>,
}

impl<T: Ord> Default for ToggleSet<T> {
    fn default() -> Self {
        Self {
            items: BTreeSet::new(),
        }
    }
}

impl<T: Ord + Clone> ToggleSet<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Present becomes absent, absent becomes present
    pub fn toggle(&mut self, item: T) {
        if !self.items.remove(&item) {
            self.items.insert(item);
        }
    }

    /// Copy of this set with `item` toggled
    pub fn toggled(&self, item: T) -> Self {
        let mut next = self.clone();
        next.toggle(item);
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Ord> FromIterator<T> for ToggleSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// A single user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    SelectMetric(MetricField),
    SortBy(SortKey),
    SetFilter(String),
    ToggleSeries(ChartSeries),
    ToggleRow(String),
    SelectCountry(Option<String>),
    SetMapMode(MapMode),
    SetChartKind(ChartKind),
}

/// Presentation state of every dashboard view.
///
/// Never mutated in place by callers: each interaction goes through
/// [`ViewState::apply`] and yields a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub metric: MetricField,
    pub sort: SortKey,
    pub filter: String,
    pub active_series: ToggleSet<ChartSeries>,
    pub expanded_rows: ToggleSet<String>,
    pub selected_country: Option<String>,
    pub map_mode: MapMode,
    pub chart_kind: ChartKind,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            metric: MetricField::NetProfit,
            sort: SortKey::Change,
            filter: String::new(),
            active_series: [ChartSeries::Sales, ChartSeries::NetProfit]
                .into_iter()
                .collect(),
            expanded_rows: ["Amazon Fees".to_string()].into_iter().collect(),
            selected_country: None,
            map_mode: MapMode::Sales,
            chart_kind: ChartKind::Line,
        }
    }
}

impl ViewState {
    /// Produce the state that follows `action`
    pub fn apply(&self, action: ViewAction) -> Self {
        let mut next = self.clone();
        match action {
            ViewAction::SelectMetric(metric) => next.metric = metric,
            ViewAction::SortBy(sort) => next.sort = sort,
            ViewAction::SetFilter(filter) => next.filter = filter,
            ViewAction::ToggleSeries(series) => next.active_series.toggle(series),
            ViewAction::ToggleRow(category) => next.expanded_rows.toggle(category),
            ViewAction::SelectCountry(country) => next.selected_country = country,
            ViewAction::SetMapMode(mode) => next.map_mode = mode,
            ViewAction::SetChartKind(kind) => next.chart_kind = kind,
        }
        next
    }

    /// Apply a sequence of actions in order
    pub fn apply_all<I: IntoIterator<Item = ViewAction>>(&self, actions: I) -> Self {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_idempotent_in_pairs() {
        let set: ToggleSet<&str> = ["sales"].into_iter().collect();
        let once = set.toggled("orders");
        assert!(once.contains(&"orders"));
        let twice = once.toggled("orders");
        assert_eq!(twice, set);

        let removed = set.toggled("sales");
        assert!(removed.is_empty());
        assert_eq!(removed.toggled("sales"), set);
    }

    #[test]
    fn test_apply_does_not_touch_previous_state() {
        let initial = ViewState::default();
        let next = initial.apply(ViewAction::SetFilter("wid".into()));
        assert_eq!(initial.filter, "");
        assert_eq!(next.filter, "wid");
    }

    #[test]
    fn test_apply_all() {
        let state = ViewState::default().apply_all([
            ViewAction::ToggleSeries(ChartSeries::Sales),
            ViewAction::ToggleSeries(ChartSeries::Orders),
            ViewAction::ToggleRow("Amazon Fees".into()),
            ViewAction::SelectCountry(Some("Germany".into())),
            ViewAction::SortBy(SortKey::Current),
        ]);
        assert!(!state.active_series.contains(&ChartSeries::Sales));
        assert!(state.active_series.contains(&ChartSeries::Orders));
        assert!(state.active_series.contains(&ChartSeries::NetProfit));
        assert!(state.expanded_rows.is_empty());
        assert_eq!(state.selected_country.as_deref(), Some("Germany"));
        assert_eq!(state.sort, SortKey::Current);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("Change"), Some(SortKey::Change));
        assert_eq!(SortKey::parse("current"), Some(SortKey::Current));
        assert_eq!(SortKey::parse("name"), None);
    }
}

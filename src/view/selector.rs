//! Filtering, sorting and top-N selection

use std::cmp::Ordering;

use super::state::{SortKey, ViewState};
use crate::domain::{ProductTrend, RegionRow};

/// Default size of the top performers / needs attention panels
pub const DEFAULT_TOP_N: usize = 3;

/// Rows that can be matched by the free-text filter
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any field; empty needle matches
    fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Searchable for ProductTrend {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str(), self.asin.as_str()]
    }
}

impl Searchable for RegionRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.country.as_str(), self.region.as_str()]
    }
}

/// Keep the rows matching `needle`, in input order
pub fn filter<'a, T: Searchable>(items: &'a [T], needle: &str) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches(needle)).collect()
}

/// Descending by `key`; rows without a key go last. Stable.
pub fn sort_desc_by<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> Option<f64>,
{
    items.sort_by(|a, b| match (key(a), key(b)) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Sort products for the trends table
pub fn sort_trends(items: &mut [&ProductTrend], sort: SortKey) {
    match sort {
        SortKey::Change => sort_desc_by(items, |p| p.change().map(f64::abs)),
        SortKey::Current => sort_desc_by(items, |p| Some(p.current_value)),
    }
}

/// First `n` items, or all of them when there are fewer
pub fn top_n<T>(items: Vec<T>, n: usize) -> Vec<T> {
    items.into_iter().take(n).collect()
}

/// Largest percent change first
pub fn top_performers(products: &[ProductTrend], n: usize) -> Vec<&ProductTrend> {
    let mut ranked: Vec<&ProductTrend> = products.iter().collect();
    sort_desc_by(&mut ranked, |p| p.change());
    top_n(ranked, n)
}

/// Smallest percent change first
pub fn needs_attention(products: &[ProductTrend], n: usize) -> Vec<&ProductTrend> {
    let mut ranked: Vec<&ProductTrend> = products.iter().collect();
    sort_desc_by(&mut ranked, |p| p.change().map(|c| -c));
    top_n(ranked, n)
}

/// Projection of the trends view for one state
#[derive(Debug, Clone)]
pub struct TrendSelection<'a> {
    pub rows: Vec<&'a ProductTrend>,
    pub top_performers: Vec<&'a ProductTrend>,
    pub needs_attention: Vec<&'a ProductTrend>,
}

/// Filtered and sorted table plus the two capped panels.
///
/// The panels rank the whole portfolio and ignore the filter.
pub fn select_trends<'a>(
    products: &'a [ProductTrend],
    state: &ViewState,
    n: usize,
) -> TrendSelection<'a> {
    let mut rows = filter(products, &state.filter);
    sort_trends(&mut rows, state.sort);
    TrendSelection {
        rows,
        top_performers: top_performers(products, n),
        needs_attention: needs_attention(products, n),
    }
}

//! Grouping and summing of metric records

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use super::ratio::{margin_percent, roi_percent};
use crate::domain::{MetricField, MetricSource};

/// Summed fields of every record sharing a key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateBucket {
    pub sums: BTreeMap<MetricField, f64>,
    /// Number of records folded into this bucket
    pub count: usize,
}

impl AggregateBucket {
    /// Fold one record in. Derived fields are skipped.
    pub fn add<S: MetricSource + ?Sized>(&mut self, source: &S) {
        for field in MetricField::ALL {
            if field.is_derived() {
                continue;
            }
            if let Some(value) = source.value(field) {
                *self.sums.entry(field).or_insert(0.0) += value;
            }
        }
        self.count += 1;
    }

    /// Sum of a base field, 0 when no record carried it
    pub fn sum(&self, field: MetricField) -> f64 {
        self.sums.get(&field).copied().unwrap_or(0.0)
    }

    /// Gross margin: gross profit / revenue * 100
    pub fn margin_percent(&self) -> Option<f64> {
        margin_percent(self.sum(MetricField::GrossProfit), self.sum(MetricField::Revenue))
    }

    /// Net profit / advertising cost * 100
    pub fn roi_percent(&self) -> Option<f64> {
        roi_percent(self.sum(MetricField::NetProfit), self.sum(MetricField::AdvertisingCost))
    }

    /// Value of any field; derived fields are recomputed from the sums
    pub fn get(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::Margin => self.margin_percent(),
            MetricField::Roi => self.roi_percent(),
            _ => self.sums.get(&field).copied(),
        }
    }
}

impl MetricSource for AggregateBucket {
    fn value(&self, field: MetricField) -> Option<f64> {
        self.get(field)
    }
}

/// Group records by `key` and sum their base fields.
///
/// The returned map has no defined order; display code sorts.
pub fn group_by<T, K, F>(records: &[T], key: F) -> HashMap<K, AggregateBucket>
where
    T: MetricSource,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut buckets: HashMap<K, AggregateBucket> = HashMap::new();
    for record in records {
        buckets.entry(key(record)).or_default().add(record);
    }
    buckets
}

/// Sum a single field over all records (ungrouped)
pub fn total<T: MetricSource>(records: &[T], field: MetricField) -> f64 {
    records.iter().filter_map(|r| r.value(field)).sum()
}

/// Largest value of a field, None for an empty slice
pub fn max_of<T: MetricSource>(records: &[T], field: MetricField) -> Option<f64> {
    records
        .iter()
        .filter_map(|r| r.value(field))
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MetricRecord;

    fn rec(key: &str, revenue: f64, gross: f64) -> MetricRecord {
        MetricRecord::new(key)
            .with(MetricField::Revenue, revenue)
            .with(MetricField::GrossProfit, gross)
            .with(MetricField::Margin, 99.0)
    }

    #[test]
    fn test_group_by_sums_and_counts() {
        let records = vec![rec("eu", 100.0, 30.0), rec("na", 50.0, 10.0), rec("eu", 300.0, 90.0)];
        let buckets = group_by(&records, |r| r.key.clone());

        assert_eq!(buckets.len(), 2);
        let eu = &buckets["eu"];
        assert_eq!(eu.count, 2);
        assert_eq!(eu.sum(MetricField::Revenue), 400.0);
        assert_eq!(eu.sum(MetricField::GrossProfit), 120.0);
        assert_eq!(eu.margin_percent(), Some(30.0));
    }

    #[test]
    fn test_derived_fields_are_recomputed_not_summed() {
        let records = vec![rec("eu", 100.0, 30.0), rec("eu", 100.0, 10.0)];
        let buckets = group_by(&records, |r| r.key.clone());
        let eu = &buckets["eu"];
        assert!(!eu.sums.contains_key(&MetricField::Margin));
        assert_eq!(eu.get(MetricField::Margin), Some(20.0));
    }

    #[test]
    fn test_zero_revenue_bucket_margin_is_undefined() {
        let records = vec![rec("empty", 0.0, 0.0)];
        let buckets = group_by(&records, |r| r.key.clone());
        assert_eq!(buckets["empty"].margin_percent(), None);
    }

    #[test]
    fn test_grouping_is_lossless() {
        let records: Vec<MetricRecord> = (0..20)
            .map(|i| rec(["a", "b", "c"][i % 3], i as f64 * 1.5, i as f64 * 0.25))
            .collect();
        let buckets = group_by(&records, |r| r.key.clone());

        for field in [MetricField::Revenue, MetricField::GrossProfit] {
            let grouped: f64 = buckets.values().map(|b| b.sum(field)).sum();
            assert!((grouped - total(&records, field)).abs() < 1e-9);
        }
        let count: usize = buckets.values().map(|b| b.count).sum();
        assert_eq!(count, records.len());
    }

    #[test]
    fn test_max_of() {
        let records = vec![rec("a", 5.0, 0.0), rec("b", 7.0, 0.0)];
        assert_eq!(max_of(&records, MetricField::Revenue), Some(7.0));
        assert_eq!(max_of::<MetricRecord>(&[], MetricField::Revenue), None);
    }
}

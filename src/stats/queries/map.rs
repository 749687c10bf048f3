//! Map view queries

use super::StatsQuery;
use crate::domain::{MetricField, RegionRow};
use crate::stats::aggregate::{group_by, max_of};
use crate::stats::models::{MapSummary, RegionStats};

impl StatsQuery<'_> {
    /// Region buckets plus the maxima used for shading
    pub fn map_summary(&self) -> MapSummary {
        let rows = &self.dataset.regions;
        let buckets = group_by(rows, |r: &RegionRow| r.region.clone());

        let mut regions: Vec<RegionStats> = buckets
            .into_iter()
            .map(|(region, bucket)| RegionStats {
                region,
                revenue: bucket.sum(MetricField::Revenue),
                units_sold: bucket.sum(MetricField::UnitsSold),
                current_stock: bucket.sum(MetricField::CurrentStock),
                gross_profit: bucket.sum(MetricField::GrossProfit),
                refunds: bucket.sum(MetricField::Refunds),
                countries: bucket.count,
            })
            .collect();
        regions.sort_by(|a, b| {
            b.revenue
                .total_cmp(&a.revenue)
                .then_with(|| a.region.cmp(&b.region))
        });

        MapSummary {
            regions,
            max_revenue: max_of(rows, MetricField::Revenue).unwrap_or(0.0),
            max_stock: max_of(rows, MetricField::CurrentStock).unwrap_or(0.0),
        }
    }

    /// Row for a country, matched exactly
    pub fn country(&self, name: &str) -> Option<&RegionRow> {
        self.dataset.regions.iter().find(|r| r.country == name)
    }
}

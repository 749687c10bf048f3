//! Stats queries over a loaded dataset
//!
//! Each submodule computes the headline numbers of one dashboard view.
//! Everything is recomputed per call; nothing is cached.

mod charts;
mod map;
mod pl;
mod tiles;
mod trends;

use crate::dataset::Dataset;

/// Query interface for dashboard statistics
#[derive(Debug, Clone, Copy)]
pub struct StatsQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> StatsQuery<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }
}

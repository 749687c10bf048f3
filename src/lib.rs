//! SellerHub - analytics for marketplace sellers
//!
//! SellerHub turns pre-aggregated sales, profit, inventory and trend data into
//! the numbers behind a seller dashboard: metric tiles, chart series, a P&L
//! statement, a region map and a product trends table.
//!
//! ## Layers
//!
//! 1. **Aggregation** ([`stats`]): group, sum and derive ratios. Ratios with a
//!    zero denominator are `None`, never NaN.
//! 2. **Selection** ([`view`]): filter, sort and cap rows for display from an
//!    immutable [`view::ViewState`].
//!
//! Data comes in through [`dataset`]; seller API credentials are kept by
//! [`credentials`].

pub mod config;
pub mod credentials;
pub mod dataset;
pub mod domain;
pub mod format;
pub mod stats;
pub mod view;

pub use domain::*;

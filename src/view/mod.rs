//! Presentation selection
//!
//! Pure projections from dataset rows and an immutable [`ViewState`] to what
//! each view displays: filtered and sorted tables, capped top-N panels, map
//! shading, sparkline geometry and the visible part of the P&L tree.

pub mod map;
pub mod pl;
pub mod selector;
pub mod sparkline;
mod state;

pub use pl::{VisibleRow, visible_rows};
pub use selector::{
    DEFAULT_TOP_N, Searchable, TrendSelection, filter, needs_attention, select_trends,
    sort_desc_by, sort_trends, top_n, top_performers,
};
pub use state::{SortKey, ToggleSet, ViewAction, ViewState};

//! P&L tree flattening

use super::state::ToggleSet;
use crate::domain::PlRow;

/// A row as it appears in the rendered table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRow<'a> {
    pub row: &'a PlRow,
    pub depth: usize,
    pub expanded: bool,
}

impl VisibleRow<'_> {
    /// Top-level total rows are emphasized
    pub fn is_highlighted(&self) -> bool {
        self.depth == 0 && self.row.is_total()
    }
}

/// Depth-first walk that only descends into expanded rows
pub fn visible_rows<'a>(rows: &'a [PlRow], expanded: &ToggleSet<String>) -> Vec<VisibleRow<'a>> {
    let mut out = Vec::new();
    walk(rows, expanded, 0, &mut out);
    out
}

fn walk<'a>(rows: &'a [PlRow], expanded: &ToggleSet<String>, depth: usize, out: &mut Vec<VisibleRow<'a>>) {
    for row in rows {
        let is_expanded = row.has_subcategories() && expanded.contains(&row.category);
        out.push(VisibleRow {
            row,
            depth,
            expanded: is_expanded,
        });
        if is_expanded {
            walk(&row.subcategories, expanded, depth + 1, out);
        }
    }
}

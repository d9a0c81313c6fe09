use crate::classify::RowId;
use crate::sink::{FilterCell, FilterTarget, RowHandlers};
use std::collections::HashMap;

#[derive(Debug)]
struct RowBinding {
    handlers: RowHandlers,
    expanded: bool,
}

/// Per-row handler bookkeeping shared by sink implementations.
///
/// A colliding row id rebinds the id to the newest row.
#[derive(Debug, Default)]
pub struct RowControls {
    rows: HashMap<RowId, RowBinding>,
}

impl RowControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, row_id: &RowId, handlers: RowHandlers) {
        self.rows.insert(
            row_id.clone(),
            RowBinding {
                handlers,
                expanded: false,
            },
        );
    }

    pub fn toggle(&mut self, row_id: &RowId) -> Option<bool> {
        let binding = self.rows.get_mut(row_id)?;
        if !binding.handlers.expand_toggle {
            return None;
        }
        binding.expanded = !binding.expanded;
        Some(binding.expanded)
    }

    pub fn is_expanded(&self, row_id: &RowId) -> bool {
        self.rows.get(row_id).is_some_and(|b| b.expanded)
    }

    pub fn filter_target(&self, row_id: &RowId, cell: FilterCell) -> Option<FilterTarget> {
        self.rows
            .get(row_id)
            .map(|b| b.handlers.filter_target(cell))
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

use crate::classify::{DisplayEvent, RowId};
use crate::sink::{FilterCell, FilterTarget, RenderSink, RowControls, RowHandlers};
use std::collections::VecDeque;

/// Sink that keeps the visible list in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    rows: VecDeque<DisplayEvent>,
    placeholder: bool,
    loading: bool,
    controls: RowControls,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible rows, newest first.
    pub fn rows(&self) -> impl Iterator<Item = &DisplayEvent> {
        self.rows.iter()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn newest(&self) -> Option<&DisplayEvent> {
        self.rows.front()
    }

    pub fn has_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_expanded(&self, row_id: &RowId) -> bool {
        self.controls.is_expanded(row_id)
    }

    pub fn bound_rows(&self) -> usize {
        self.controls.len()
    }
}

impl RenderSink for MemorySink {
    fn prepend(&mut self, row: DisplayEvent) {
        self.placeholder = false;
        self.rows.push_front(row);
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.placeholder = false;
        self.controls.clear();
    }

    fn show_placeholder(&mut self) {
        self.placeholder = true;
    }

    fn attach_row_handlers(&mut self, row_id: &RowId, handlers: RowHandlers) {
        self.controls.bind(row_id, handlers);
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty() && !self.placeholder
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn toggle_row(&mut self, row_id: &RowId) -> Option<bool> {
        self.controls.toggle(row_id)
    }

    fn filter_click(&self, row_id: &RowId, cell: FilterCell) -> Option<FilterTarget> {
        self.controls.filter_target(row_id, cell)
    }
}

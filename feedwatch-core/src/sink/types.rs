use crate::classify::{DisplayEvent, RowId};

/// Which cell of a row was clicked to re-filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCell {
    Service,
    Version,
}

/// Service/version pair a filter click feeds back into the form.
///
/// `version: None` clears the version input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTarget {
    pub service: String,
    pub version: Option<String>,
}

/// Behaviors bound to a freshly rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHandlers {
    /// The row has a hidden detail panel that can be toggled.
    pub expand_toggle: bool,
    pub service: String,
    pub version: String,
}

impl RowHandlers {
    pub fn for_row(row: &DisplayEvent) -> Self {
        Self {
            expand_toggle: row.is_expandable,
            service: row.service.clone(),
            version: row.version.clone(),
        }
    }

    /// Clicking the service cell filters on the service alone; clicking the
    /// version cell filters on both.
    pub fn filter_target(&self, cell: FilterCell) -> FilterTarget {
        FilterTarget {
            service: self.service.clone(),
            version: match cell {
                FilterCell::Service => None,
                FilterCell::Version => Some(self.version.clone()),
            },
        }
    }
}

/// The visible, most-recent-first event list.
pub trait RenderSink {
    /// Insert a row at the top of the list. A shown placeholder goes away.
    fn prepend(&mut self, row: DisplayEvent);

    /// Drop every row, placeholder and binding.
    fn clear(&mut self);

    /// Show the "No data" placeholder.
    fn show_placeholder(&mut self);

    /// Bind expand/filter behaviors to a row rendered by [`RenderSink::prepend`].
    fn attach_row_handlers(&mut self, row_id: &RowId, handlers: RowHandlers);

    /// True when nothing is visible, placeholder included.
    fn is_empty(&self) -> bool;

    fn set_loading(&mut self, loading: bool);

    /// Fire a row's expand handler. Returns the new expanded state, or
    /// `None` when the row has no detail panel.
    fn toggle_row(&mut self, row_id: &RowId) -> Option<bool>;

    /// Fire a row's filter handler.
    fn filter_click(&self, row_id: &RowId, cell: FilterCell) -> Option<FilterTarget>;
}

use crate::classify::{ColorToken, RowId};

/// Event kinds that carry connection-lifecycle meaning instead of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    /// Stream is idle, nothing to show yet.
    Await,
    /// Server ended the stream.
    Close,
}

impl ControlSignal {
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "Await" => Some(ControlSignal::Await),
            "Close" => Some(ControlSignal::Close),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayEvent {
    pub row_id: RowId,
    pub service: String,
    pub version: String,
    pub user: String,
    pub formatted_type: String,
    pub formatted_timestamp: String,
    pub color: ColorToken,
    pub detail_text: String,
    pub is_expandable: bool,
    /// Pretty-printed payload shown when an expandable row is toggled open.
    pub detail_body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    Display(DisplayEvent),
    Control(ControlSignal),
}

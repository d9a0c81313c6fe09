use feedwatch_core::classify::{ColorToken, DisplayEvent, RowId};
use feedwatch_core::sink::{FilterCell, FilterTarget, RenderSink, RowControls, RowHandlers};
use owo_colors::OwoColorize;
use std::collections::HashMap;
use std::fmt::Display;
use std::io::{self, Stdout, Write};

pub const PLACEHOLDER: &str = "No data";
pub const LOADING: &str = "loading...";

/// Terminal rendition of the event list.
///
/// A terminal only appends, so the newest row is printed last. The sink
/// still tracks which rows are visible so row commands can be resolved.
pub struct TerminalSink<W> {
    out: W,
    color: bool,
    rows: HashMap<RowId, DisplayEvent>,
    controls: RowControls,
    placeholder: bool,
    loading: bool,
}

impl TerminalSink<Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            rows: HashMap::new(),
            controls: RowControls::new(),
            placeholder: false,
            loading: false,
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    #[cfg(test)]
    pub fn has_placeholder(&self) -> bool {
        self.placeholder
    }

    fn emit(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }

    fn paint(&self, text: &str, color: ColorToken) -> String {
        if !self.color {
            return text.to_string();
        }
        match color {
            ColorToken::Red => text.red().to_string(),
            ColorToken::Green => text.green().to_string(),
            ColorToken::Yellow => text.yellow().to_string(),
            ColorToken::Grey => text.bright_black().to_string(),
            ColorToken::Black => text.to_string(),
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// One row: id, timestamp, service, version, user, type and detail.
    pub fn format_row(&self, row: &DisplayEvent) -> String {
        let marker = if row.is_expandable { "+" } else { " " };
        let kind = if self.color {
            row.formatted_type.bold().to_string()
        } else {
            row.formatted_type.clone()
        };

        format!(
            "{marker}[{}] {} {} {} {} {} {}",
            row.row_id,
            self.dim(&row.formatted_timestamp),
            row.service,
            row.version,
            row.user,
            kind,
            self.paint(&row.detail_text, row.color),
        )
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn prepend(&mut self, row: DisplayEvent) {
        let line = self.format_row(&row);
        self.placeholder = false;
        self.emit(line);
        self.rows.insert(row.row_id.clone(), row);
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.controls.clear();
        self.placeholder = false;
        let rule = self.dim("----");
        self.emit(rule);
    }

    fn show_placeholder(&mut self) {
        self.placeholder = true;
        let line = self.dim(PLACEHOLDER);
        self.emit(line);
    }

    fn attach_row_handlers(&mut self, row_id: &RowId, handlers: RowHandlers) {
        self.controls.bind(row_id, handlers);
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty() && !self.placeholder
    }

    fn set_loading(&mut self, loading: bool) {
        if loading && !self.loading {
            let line = self.dim(LOADING);
            self.emit(line);
        }
        self.loading = loading;
    }

    fn toggle_row(&mut self, row_id: &RowId) -> Option<bool> {
        let expanded = self.controls.toggle(row_id)?;
        let body = self
            .rows
            .get(row_id)
            .and_then(|row| row.detail_body.clone());

        match (expanded, body) {
            (true, Some(body)) => {
                for line in body.lines() {
                    self.emit(format_args!("    {line}"));
                }
            }
            _ => self.emit(format_args!(" [{row_id}] collapsed")),
        }
        Some(expanded)
    }

    fn filter_click(&self, row_id: &RowId, cell: FilterCell) -> Option<FilterTarget> {
        self.controls.filter_target(row_id, cell)
    }
}

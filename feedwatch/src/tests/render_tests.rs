use crate::render::{LOADING, PLACEHOLDER, TerminalSink};
use feedwatch_core::classify::{ColorToken, DisplayEvent, RowId};
use feedwatch_core::sink::{FilterCell, FilterTarget, RenderSink, RowHandlers};
use pretty_assertions::assert_eq;

fn row(id: &str, detail_body: Option<&str>) -> DisplayEvent {
    DisplayEvent {
        row_id: RowId::from(id),
        service: "billing".into(),
        version: "1.4".into(),
        user: "ops".into(),
        formatted_type: "Deploy ok".into(),
        formatted_timestamp: "10:00:00 02/Jan/24".into(),
        color: ColorToken::Green,
        detail_text: "to GREEN".into(),
        is_expandable: detail_body.is_some(),
        detail_body: detail_body.map(str::to_string),
    }
}

fn render(sink: &mut TerminalSink<Vec<u8>>, row: DisplayEvent) {
    let handlers = RowHandlers::for_row(&row);
    let id = row.row_id.clone();
    sink.prepend(row);
    sink.attach_row_handlers(&id, handlers);
}

fn output(sink: &TerminalSink<Vec<u8>>) -> String {
    String::from_utf8(sink.output().clone()).unwrap()
}

#[test]
fn prepend_prints_plain_row_without_color() {
    // Arrange
    let mut sink = TerminalSink::new(Vec::new(), false);

    // Act
    render(&mut sink, row("abcde", None));

    // Assert
    assert_eq!(
        output(&sink),
        " [abcde] 10:00:00 02/Jan/24 billing 1.4 ops Deploy ok to GREEN\n"
    );
    assert!(!sink.is_empty());
}

#[test]
fn colored_row_carries_ansi_codes() {
    let mut sink = TerminalSink::new(Vec::new(), true);

    render(&mut sink, row("abcde", None));

    assert!(output(&sink).contains("\u{1b}[32mto GREEN"));
}

#[test]
fn expandable_row_prints_body_when_toggled_open() {
    // Arrange
    let mut sink = TerminalSink::new(Vec::new(), false);
    render(&mut sink, row("abcde", Some("{\n  \"replicas\": 3\n}")));
    let id = RowId::from("abcde");

    // Act
    let opened = sink.toggle_row(&id);
    let closed = sink.toggle_row(&id);

    // Assert
    assert_eq!(opened, Some(true));
    assert_eq!(closed, Some(false));
    let out = output(&sink);
    assert!(out.starts_with("+[abcde]"));
    assert!(out.contains("    {\n      \"replicas\": 3\n    }\n"));
    assert!(out.ends_with(" [abcde] collapsed\n"));
}

#[test]
fn plain_row_cannot_be_toggled() {
    let mut sink = TerminalSink::new(Vec::new(), false);
    render(&mut sink, row("abcde", None));

    assert_eq!(sink.toggle_row(&RowId::from("abcde")), None);
    assert_eq!(sink.toggle_row(&RowId::from("nope0")), None);
}

#[test]
fn placeholder_and_loading_are_printed_once() {
    // Arrange
    let mut sink = TerminalSink::new(Vec::new(), false);

    // Act
    sink.set_loading(true);
    sink.set_loading(true);
    sink.set_loading(false);
    sink.show_placeholder();

    // Assert
    assert_eq!(output(&sink), format!("{LOADING}\n{PLACEHOLDER}\n"));
    assert!(!sink.is_empty());
}

#[test]
fn row_after_placeholder_replaces_it() {
    let mut sink = TerminalSink::new(Vec::new(), false);
    sink.show_placeholder();

    render(&mut sink, row("abcde", None));

    assert!(!sink.has_placeholder());
    assert!(!sink.is_empty());
}

#[test]
fn clear_forgets_rows_and_bindings() {
    let mut sink = TerminalSink::new(Vec::new(), false);
    render(&mut sink, row("abcde", None));

    sink.clear();

    assert!(sink.is_empty());
    assert_eq!(sink.filter_click(&RowId::from("abcde"), FilterCell::Service), None);
}

#[test]
fn filter_click_resolves_row_cells() {
    let mut sink = TerminalSink::new(Vec::new(), false);
    render(&mut sink, row("abcde", None));

    let target = sink.filter_click(&RowId::from("abcde"), FilterCell::Version);

    assert_eq!(
        target,
        Some(FilterTarget {
            service: "billing".into(),
            version: Some("1.4".into()),
        })
    );
}

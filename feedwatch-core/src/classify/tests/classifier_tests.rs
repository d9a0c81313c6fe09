use crate::classify::{Classified, ColorToken, ControlSignal, DisplayEvent, ROW_ID_LEN, classify};
use crate::event::{RawMessage, parse};
use pretty_assertions::assert_eq;

fn classify_raw(raw: &str) -> Classified {
    let event = parse(&RawMessage::from(raw)).expect("test payload should parse");
    classify(event)
}

fn display(raw: &str) -> DisplayEvent {
    match classify_raw(raw) {
        Classified::Display(d) => d,
        other => panic!("Expected Display, got {:?}", other),
    }
}

//-----------------------------------------------------------------------------
// Control signals
//-----------------------------------------------------------------------------
#[test]
fn await_is_a_control_signal() {
    assert_eq!(
        classify_raw(r#"{"service":"authsvc","type":"Await"}"#),
        Classified::Control(ControlSignal::Await)
    );
}

#[test]
fn close_is_a_control_signal() {
    assert_eq!(
        classify_raw(r#"{"type":"Close"}"#),
        Classified::Control(ControlSignal::Close)
    );
}

#[test]
fn control_kinds_are_case_sensitive() {
    assert!(matches!(
        classify_raw(r#"{"type":"close"}"#),
        Classified::Display(_)
    ));
}

//-----------------------------------------------------------------------------
// Display events
//-----------------------------------------------------------------------------
#[test]
fn empty_message_with_plain_payload() {
    // Act
    let row = display(r#"{"service":"x","type":"DeployOk","message":"","data":"to GREEN"}"#);

    // Assert
    assert_eq!(row.detail_text, "details...");
    assert_eq!(row.color, ColorToken::Green);
    assert!(!row.is_expandable);
    assert_eq!(row.detail_body, None);
    assert_eq!(row.formatted_type, "Deploy ok");
}

#[test]
fn message_is_preferred_for_detail_and_color() {
    let row = display(
        r#"{"type":"StatusChanged","message":"status changed to RED now","data":"to GREEN"}"#,
    );

    assert_eq!(row.detail_text, "status changed to RED now");
    assert_eq!(row.color.css(), "red");
}

#[test]
fn no_message_no_payload_has_empty_detail() {
    let row = display(r#"{"service":"api","type":"Started"}"#);

    assert_eq!(row.detail_text, "");
    assert_eq!(row.color, ColorToken::Black);
}

#[test]
fn structured_payload_is_expandable_and_pretty_printed() {
    let row = display(r#"{"type":"ConfigChanged","data":{"replicas":3}}"#);

    assert!(row.is_expandable);
    assert_eq!(row.detail_text, "details...");
    assert_eq!(row.detail_body.as_deref(), Some("{\n  \"replicas\": 3\n}"));
}

#[test]
fn identity_fields_are_carried() {
    let row = display(r#"{"service":"auth","version":"2.0","user":"ci","type":"Deployed"}"#);

    assert_eq!(row.service, "auth");
    assert_eq!(row.version, "2.0");
    assert_eq!(row.user, "ci");
}

#[test]
fn unformattable_timestamp_passes_through() {
    let row = display(r#"{"type":"Deployed","timestamp":"soon"}"#);

    assert_eq!(row.formatted_timestamp, "soon");
}

#[test]
fn row_id_is_five_alphanumerics() {
    let row = display(r#"{"type":"Deployed"}"#);

    assert_eq!(row.row_id.as_str().len(), ROW_ID_LEN);
    assert!(row.row_id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
}

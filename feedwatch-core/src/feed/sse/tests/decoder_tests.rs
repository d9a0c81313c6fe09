use crate::feed::sse::{SseDecoder, SseEvent, SseFrame};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn event(data: &str) -> SseFrame {
    SseFrame::Event(SseEvent {
        event_type: "message".into(),
        data: data.into(),
        last_event_id: None,
    })
}

fn decode_all(chunks: &[&[u8]]) -> Vec<SseFrame> {
    let mut decoder = SseDecoder::new();
    chunks.iter().flat_map(|c| decoder.feed(c)).collect()
}

#[test]
fn single_event() {
    assert_eq!(
        decode_all(&[b"data: {\"type\":\"Await\"}\n\n"]),
        vec![event("{\"type\":\"Await\"}")]
    );
}

#[test]
fn multi_line_data_is_joined() {
    assert_eq!(decode_all(&[b"data: a\ndata: b\n\n"]), vec![event("a\nb")]);
}

#[test]
fn only_one_leading_space_is_stripped() {
    assert_eq!(decode_all(&[b"data:  x\n\ndata:y\n\n"]), vec![event(" x"), event("y")]);
}

#[test]
fn empty_data_line_dispatches_empty_message() {
    assert_eq!(decode_all(&[b"data:\n\n"]), vec![event("")]);
}

#[test]
fn blank_line_without_data_dispatches_nothing() {
    assert_eq!(decode_all(&[b"\n\nevent: ping\n\n"]), Vec::<SseFrame>::new());
}

#[test]
fn comments_are_ignored() {
    assert_eq!(decode_all(&[b": keep-alive\ndata: x\n\n"]), vec![event("x")]);
}

#[test]
fn crlf_and_cr_line_endings() {
    assert_eq!(
        decode_all(&[b"data: a\r\n\r\ndata: b\r\rdata: c\n\n"]),
        vec![event("a"), event("b"), event("c")]
    );
}

#[test]
fn crlf_split_across_chunks() {
    assert_eq!(decode_all(&[b"data: a\r", b"\n\r", b"\n"]), vec![event("a")]);
}

#[test]
fn utf8_split_across_chunks() {
    let bytes = "data: café\n\n".as_bytes();
    let (head, tail) = bytes.split_at(10);

    assert_eq!(decode_all(&[head, tail]), vec![event("café")]);
}

#[test]
fn leading_bom_is_dropped() {
    assert_eq!(decode_all(&["\u{feff}data: x\n\n".as_bytes()]), vec![event("x")]);
}

#[test]
fn named_event_keeps_its_type() {
    assert_eq!(
        decode_all(&[b"event: heartbeat\ndata: 1\n\n"]),
        vec![SseFrame::Event(SseEvent {
            event_type: "heartbeat".into(),
            data: "1".into(),
            last_event_id: None,
        })]
    );
}

#[test]
fn last_event_id_persists_between_events() {
    // Arrange
    let mut decoder = SseDecoder::new();

    // Act
    let frames = decoder.feed(b"id: 7\ndata: a\n\ndata: b\n\n");

    // Assert
    let ids: Vec<Option<String>> = frames
        .into_iter()
        .map(|f| match f {
            SseFrame::Event(e) => e.last_event_id,
            other => panic!("Expected event, got {:?}", other),
        })
        .collect();
    assert_eq!(ids, vec![Some("7".to_string()), Some("7".to_string())]);
    assert_eq!(decoder.last_event_id(), Some("7"));
}

#[test]
fn id_with_nul_is_ignored() {
    let mut decoder = SseDecoder::new();

    decoder.feed(b"id: a\0b\n\n");

    assert_eq!(decoder.last_event_id(), None);
}

#[test]
fn retry_field() {
    assert_eq!(
        decode_all(&[b"retry: 1500\nretry: soon\n\n"]),
        vec![SseFrame::Retry(Duration::from_millis(1500))]
    );
}

#[test]
fn unterminated_event_is_held() {
    let mut decoder = SseDecoder::new();

    assert_eq!(decoder.feed(b"data: partial"), Vec::<SseFrame>::new());
    assert_eq!(decoder.feed(b"\n\n"), vec![event("partial")]);
}

#[test]
fn reset_drops_partial_event_but_keeps_id() {
    let mut decoder = SseDecoder::new();
    decoder.feed(b"id: 3\n\ndata: half\n");

    decoder.reset();
    let frames = decoder.feed(b"\n");

    assert_eq!(frames, Vec::<SseFrame>::new());
    assert_eq!(decoder.last_event_id(), Some("3"));
}

#[test]
fn overlong_line_discards_its_event_only() {
    // Arrange
    let mut decoder = SseDecoder::with_limit(16);

    // Act
    let mut frames = decoder.feed(b"event: big\ndata: 0123456789abcdefghij");
    frames.extend(decoder.feed(b"klmnop\ndata: tail\n\ndata: ok\n\n"));

    // Assert
    assert_eq!(frames, vec![event("ok")]);
}

#[test]
fn oversized_data_discards_event_until_blank_line() {
    let mut decoder = SseDecoder::with_limit(16);

    let frames = decoder.feed(b"data: 0123456789\ndata: 0123456789\ndata: x\n\ndata: ok\n\n");

    assert_eq!(frames, vec![event("ok")]);
}

#[test]
fn line_at_the_limit_is_kept() {
    let mut decoder = SseDecoder::with_limit(16);

    let frames = decoder.feed(b"data: 0123456789\n\n");

    assert_eq!(frames, vec![event("0123456789")]);
}

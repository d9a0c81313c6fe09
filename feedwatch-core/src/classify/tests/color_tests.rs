use crate::classify::{ColorToken, extract_color};
use pretty_assertions::assert_eq;

#[test]
fn red_transition() {
    let color = extract_color("status changed to RED now");

    assert_eq!(color, ColorToken::Red);
    assert_eq!(color.css(), "red");
}

#[test]
fn yellow_maps_to_special_hex() {
    let color = extract_color("health went to YELLOW");

    assert_eq!(color.css(), "#D4C60D");
}

#[test]
fn green_and_grey() {
    assert_eq!(extract_color("to GREEN").css(), "green");
    assert_eq!(extract_color("moved to   GREY").css(), "grey");
}

#[test]
fn match_is_case_insensitive() {
    assert_eq!(extract_color("switched to red").css(), "red");
    assert_eq!(extract_color("TO Green").css(), "green");
}

#[test]
fn whitespace_after_to_is_required() {
    assert_eq!(extract_color("toRED"), ColorToken::Black);
}

#[test]
fn no_match_is_black() {
    assert_eq!(extract_color("deployment finished").css(), "black");
    assert_eq!(extract_color("").css(), "black");
}

#[test]
fn first_transition_wins() {
    assert_eq!(extract_color("to GREY then to RED"), ColorToken::Grey);
}

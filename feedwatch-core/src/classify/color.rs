use once_cell::sync::Lazy;
use regex::Regex;

static STATUS_COLOR: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)to\s+(RED|GREEN|YELLOW|GREY)").ok());

/// Color attached to a row's detail column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorToken {
    Red,
    Green,
    Yellow,
    Grey,
    #[default]
    Black,
}

impl ColorToken {
    /// CSS-style token as the page renders it.
    pub fn css(self) -> &'static str {
        match self {
            ColorToken::Red => "red",
            ColorToken::Green => "green",
            ColorToken::Yellow => "#D4C60D",
            ColorToken::Grey => "grey",
            ColorToken::Black => "black",
        }
    }
}

/// First `to <COLOR>` status transition in `text`, or black.
pub fn extract_color(text: &str) -> ColorToken {
    let Some(re) = STATUS_COLOR.as_ref() else {
        return ColorToken::Black;
    };

    let Some(caps) = re.captures(text) else {
        return ColorToken::Black;
    };

    match caps[1].to_ascii_lowercase().as_str() {
        "red" => ColorToken::Red,
        "green" => ColorToken::Green,
        "yellow" => ColorToken::Yellow,
        "grey" => ColorToken::Grey,
        _ => ColorToken::Black,
    }
}

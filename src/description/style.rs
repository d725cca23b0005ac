//! Text decoration for section headers
//!
//! Waypoint descriptions are plain text, so emphasis has to be carried by
//! the characters themselves. The formatter only asks for a style; how it
//! is rendered is up to the injected [`TextDecorator`].

/// Styles the formatter may request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Bold,
}

/// Renders text in a requested style
pub trait TextDecorator {
    fn decorate(&self, text: &str, style: TextStyle) -> String;
}

impl<F> TextDecorator for F
where
    F: Fn(&str, TextStyle) -> String,
{
    fn decorate(&self, text: &str, style: TextStyle) -> String {
        self(text, style)
    }
}

/// Leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl TextDecorator for PlainText {
    fn decorate(&self, text: &str, _style: TextStyle) -> String {
        text.to_string()
    }
}

/// Maps ASCII letters and digits to the Unicode mathematical sans-serif
/// bold block. Umlauts and punctuation have no bold form and pass through.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeBold;

const BOLD_UPPER_A: u32 = 0x1D5D4;
const BOLD_LOWER_A: u32 = 0x1D5EE;
const BOLD_DIGIT_ZERO: u32 = 0x1D7EC;

fn bold_char(ch: char) -> char {
    let code = match ch {
        'A'..='Z' => BOLD_UPPER_A + (ch as u32 - 'A' as u32),
        'a'..='z' => BOLD_LOWER_A + (ch as u32 - 'a' as u32),
        '0'..='9' => BOLD_DIGIT_ZERO + (ch as u32 - '0' as u32),
        _ => return ch,
    };
    char::from_u32(code).unwrap_or(ch)
}

impl TextDecorator for UnicodeBold {
    fn decorate(&self, text: &str, style: TextStyle) -> String {
        match style {
            TextStyle::Bold => text.chars().map(bold_char).collect(),
        }
    }
}

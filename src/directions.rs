//! Launch direction text to arrow glyphs
//!
//! DHV direction texts use German compass abbreviations ("O" is east,
//! "NNO" north-north-east). They are rendered as a compact row of arrows.

/// Substitutions applied in order; longer abbreviations come first so
/// that "NNW" becomes one arrow instead of being eaten by "N" and "W".
const DIRECTION_ARROWS: [(&str, char); 16] = [
    ("WSW", '↙'),
    ("SSW", '↙'),
    ("NNW", '↖'),
    ("WNW", '↖'),
    ("NNO", '↗'),
    ("ONO", '↗'),
    ("SSO", '↘'),
    ("OSO", '↘'),
    ("SW", '↙'),
    ("NW", '↖'),
    ("NO", '↗'),
    ("SO", '↘'),
    ("S", '↓'),
    ("W", '←'),
    ("N", '↑'),
    ("O", '→'),
];

fn is_arrow(ch: char) -> bool {
    DIRECTION_ARROWS.iter().any(|&(_, arrow)| arrow == ch)
}

/// Convert direction text like "SW, W" or "NNW-NO" into distinct arrows
/// separated by spaces, in order of first appearance.
///
/// Text without any known abbreviation yields an empty string.
#[must_use]
pub fn direction_arrows(text: &str) -> String {
    let mut replaced = text.to_string();
    for (abbreviation, arrow) in DIRECTION_ARROWS {
        replaced = replaced.replace(abbreviation, arrow.encode_utf8(&mut [0; 4]));
    }

    let mut arrows: Vec<char> = Vec::new();
    for ch in replaced.chars().filter(|&ch| is_arrow(ch)) {
        if !arrows.contains(&ch) {
            arrows.push(ch);
        }
    }

    arrows
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

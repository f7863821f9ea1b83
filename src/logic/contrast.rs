//! Text colour selection for coloured backgrounds.
//!
//! Two heuristics are in use and they round differently: ranking tags use a BT.709 luma
//! on normalized channels, match-table team cells use an integer weighted sum. Keep them apart.

use serde::{Deserialize, Serialize};

/// Foreground colour for text drawn on a coloured background.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn as_hex(self) -> &'static str {
        match self {
            TextColor::Black => "#000000",
            TextColor::White => "#ffffff",
        }
    }
}

/// Parse `#rrggbb` or `#rgb` (leading `#` optional).
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

/// Ranking tag text: black when the BT.709 luma of the background exceeds 0.5, else white.
/// Unparseable colours get white text.
pub fn tag_text_color(background: &str) -> TextColor {
    let Some((r, g, b)) = parse_hex_color(background) else {
        return TextColor::White;
    };
    let luma = 0.2126 * (f64::from(r) / 255.0)
        + 0.7152 * (f64::from(g) / 255.0)
        + 0.0722 * (f64::from(b) / 255.0);
    if luma > 0.5 {
        TextColor::Black
    } else {
        TextColor::White
    }
}

/// Match-table team cell text: black when `(299 R + 587 G + 114 B) / 1000` exceeds 150, else white.
/// Unparseable colours get white text.
pub fn team_text_color(background: &str) -> TextColor {
    let Some((r, g, b)) = parse_hex_color(background) else {
        return TextColor::White;
    };
    let brightness = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
    if brightness > 150 {
        TextColor::Black
    } else {
        TextColor::White
    }
}

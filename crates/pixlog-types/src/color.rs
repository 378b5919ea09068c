//! The fixed 32-entry canvas palette.

use serde::{Deserialize, Serialize};

/// Label returned for palette indices that do not address a catalog entry.
pub const UNKNOWN_COLOR: &str = "Unknown";

/// Number of entries in the palette.
pub const PALETTE_SIZE: usize = 32;

/// A named palette entry.
///
/// The discriminant is the index used in the activity log, so the order of
/// the variants is part of the log format and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    DarkGrey,
    DeepGrey,
    MediumGrey,
    LightGrey,
    White,
    Beige,
    Peach,
    Brown,
    Chocolate,
    Rust,
    Orange,
    Yellow,
    PastelYellow,
    Lime,
    Green,
    DarkGreen,
    Forest,
    DarkTeal,
    LightTeal,
    Aqua,
    Azure,
    Blue,
    Navy,
    Purple,
    Mauve,
    Magenta,
    Pink,
    Watermelon,
    Red,
    Rose,
    Maroon,
}

impl Color {
    /// Every palette entry in index order.
    pub const ALL: [Color; PALETTE_SIZE] = [
        Self::Black,
        Self::DarkGrey,
        Self::DeepGrey,
        Self::MediumGrey,
        Self::LightGrey,
        Self::White,
        Self::Beige,
        Self::Peach,
        Self::Brown,
        Self::Chocolate,
        Self::Rust,
        Self::Orange,
        Self::Yellow,
        Self::PastelYellow,
        Self::Lime,
        Self::Green,
        Self::DarkGreen,
        Self::Forest,
        Self::DarkTeal,
        Self::LightTeal,
        Self::Aqua,
        Self::Azure,
        Self::Blue,
        Self::Navy,
        Self::Purple,
        Self::Mauve,
        Self::Magenta,
        Self::Pink,
        Self::Watermelon,
        Self::Red,
        Self::Rose,
        Self::Maroon,
    ];

    /// Returns the palette index of this color.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Looks up the palette entry for a raw log index.
    ///
    /// Returns `None` for anything outside `0..=31`, including negatives.
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Returns the display name of this color.
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::DarkGrey => "Dark Grey",
            Self::DeepGrey => "Deep Grey",
            Self::MediumGrey => "Medium Grey",
            Self::LightGrey => "Light Grey",
            Self::White => "White",
            Self::Beige => "Beige",
            Self::Peach => "Peach",
            Self::Brown => "Brown",
            Self::Chocolate => "Chocolate",
            Self::Rust => "Rust",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::PastelYellow => "Pastel Yellow",
            Self::Lime => "Lime",
            Self::Green => "Green",
            Self::DarkGreen => "Dark Green",
            Self::Forest => "Forest",
            Self::DarkTeal => "Dark Teal",
            Self::LightTeal => "Light Teal",
            Self::Aqua => "Aqua",
            Self::Azure => "Azure",
            Self::Blue => "Blue",
            Self::Navy => "Navy",
            Self::Purple => "Purple",
            Self::Mauve => "Mauve",
            Self::Magenta => "Magenta",
            Self::Pink => "Pink",
            Self::Watermelon => "Watermelon",
            Self::Red => "Red",
            Self::Rose => "Rose",
            Self::Maroon => "Maroon",
        }
    }

    /// Reverse lookup from a display name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a string that is not a palette name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color name: {0}")]
pub struct ParseColorError(pub String);

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Resolves a raw log index to its display name.
///
/// Total over `i64`: indices outside the palette resolve to
/// [`UNKNOWN_COLOR`] instead of failing.
pub fn color_name(index: i64) -> &'static str {
    Color::from_index(index).map_or(UNKNOWN_COLOR, Color::name)
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed palette a post color is drawn from.
///
/// Posts store the `#RRGGBB` value, not the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostColor {
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Gray,
}

impl PostColor {
    /// Palette in display order.
    pub const ALL: [PostColor; 8] = [
        PostColor::White,
        PostColor::Red,
        PostColor::Orange,
        PostColor::Yellow,
        PostColor::Green,
        PostColor::Blue,
        PostColor::Purple,
        PostColor::Gray,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            PostColor::White => "#FFFFFF",
            PostColor::Red => "#FF0000",
            PostColor::Orange => "#FFA500",
            PostColor::Yellow => "#FFFF00",
            PostColor::Green => "#00FF00",
            PostColor::Blue => "#0000FF",
            PostColor::Purple => "#800080",
            PostColor::Gray => "#808080",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PostColor::White => "white",
            PostColor::Red => "red",
            PostColor::Orange => "orange",
            PostColor::Yellow => "yellow",
            PostColor::Green => "green",
            PostColor::Blue => "blue",
            PostColor::Purple => "purple",
            PostColor::Gray => "gray",
        }
    }

    /// Color at a palette position, as picked from a list.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Palette position of this color.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for PostColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// A color value outside the palette.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown post color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for PostColor {
    type Err = UnknownColor;

    /// Accepts a hex value (`#ff0000`, case-insensitive) or a palette name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.hex().eq_ignore_ascii_case(value) || c.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_and_name() {
        assert_eq!("#ff0000".parse::<PostColor>(), Ok(PostColor::Red));
        assert_eq!("Purple".parse::<PostColor>(), Ok(PostColor::Purple));
        assert!("#123456".parse::<PostColor>().is_err());
    }

    #[test]
    fn test_index_lookup() {
        for (i, color) in PostColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(PostColor::from_index(i), Some(*color));
        }
        assert_eq!(PostColor::from_index(PostColor::ALL.len()), None);
    }
}

//! Color palettes.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::ParseNameError;

/// Color palette applied to the phase field.
///
/// `Rainbow` sweeps the full hue circle; every other variant is a
/// single-hue gradient from a dark to a light shade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Palette {
    #[default]
    Rainbow,
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Cyan,
    Gray,
    Pink,
    Orange,
}

impl Palette {
    /// All palettes in cycling order.
    pub const ALL: [Palette; 10] = [
        Palette::Rainbow,
        Palette::Red,
        Palette::Blue,
        Palette::Green,
        Palette::Yellow,
        Palette::Purple,
        Palette::Cyan,
        Palette::Gray,
        Palette::Pink,
        Palette::Orange,
    ];

    /// Cycle to the next palette.
    pub fn next(self) -> Self {
        match self {
            Palette::Rainbow => Palette::Red,
            Palette::Red => Palette::Blue,
            Palette::Blue => Palette::Green,
            Palette::Green => Palette::Yellow,
            Palette::Yellow => Palette::Purple,
            Palette::Purple => Palette::Cyan,
            Palette::Cyan => Palette::Gray,
            Palette::Gray => Palette::Pink,
            Palette::Pink => Palette::Orange,
            Palette::Orange => Palette::Rainbow,
        }
    }

    /// Lowercase name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Palette::Rainbow => "rainbow",
            Palette::Red => "red",
            Palette::Blue => "blue",
            Palette::Green => "green",
            Palette::Yellow => "yellow",
            Palette::Purple => "purple",
            Palette::Cyan => "cyan",
            Palette::Gray => "gray",
            Palette::Pink => "pink",
            Palette::Orange => "orange",
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        // "prism" was the rainbow scheme's old name, "grey" is a common spelling.
        let lower = match lower.as_str() {
            "prism" => "rainbow",
            "grey" => "gray",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|palette| palette.name() == lower)
            .ok_or_else(|| ParseNameError {
                kind: "color",
                value: s.to_string(),
                expected: "rainbow, red, blue, green, yellow, purple, cyan, gray, pink, orange",
            })
    }
}

impl TryFrom<String> for Palette {
    type Error = ParseNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

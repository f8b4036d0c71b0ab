//! Terminal color depth.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::ParseNameError;

/// How many colors the terminal can display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ColorDepth {
    /// 24-bit RGB.
    TrueColor,
    /// xterm 256-color palette.
    #[default]
    Ansi256,
    /// The eight basic ANSI colors.
    Basic8,
}

impl ColorDepth {
    /// Name as accepted by `--color-depth`.
    pub fn name(self) -> &'static str {
        match self {
            ColorDepth::TrueColor => "truecolor",
            ColorDepth::Ansi256 => "256",
            ColorDepth::Basic8 => "8",
        }
    }
}

impl fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorDepth {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => Ok(ColorDepth::TrueColor),
            "256" | "ansi256" => Ok(ColorDepth::Ansi256),
            "8" | "basic" => Ok(ColorDepth::Basic8),
            _ => Err(ParseNameError {
                kind: "color depth",
                value: s.to_string(),
                expected: "truecolor, 256, 8",
            }),
        }
    }
}

impl TryFrom<String> for ColorDepth {
    type Error = ParseNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

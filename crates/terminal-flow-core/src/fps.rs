//! Frame-rate tiers.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::ParseNameError;

/// Target frame rate of the render loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "FpsValue")]
pub enum FpsTier {
    /// Ultra-low definition, 5 FPS.
    UltraLow,
    /// Low definition, 10 FPS.
    #[default]
    Low,
    /// Medium definition, 30 FPS.
    Medium,
    /// High definition, 60 FPS.
    High,
}

impl FpsTier {
    /// Frames per second for this tier.
    pub fn fps(self) -> u32 {
        match self {
            FpsTier::UltraLow => 5,
            FpsTier::Low => 10,
            FpsTier::Medium => 30,
            FpsTier::High => 60,
        }
    }

    /// Time budget for one tick.
    pub fn frame_interval(self) -> Duration {
        Duration::from_secs(1) / self.fps()
    }

    /// Short flag name (`uld`, `ld`, `md`, `hd`).
    pub fn name(self) -> &'static str {
        match self {
            FpsTier::UltraLow => "uld",
            FpsTier::Low => "ld",
            FpsTier::Medium => "md",
            FpsTier::High => "hd",
        }
    }

    /// Tier matching an exact frame rate.
    pub fn from_fps(fps: u32) -> Option<Self> {
        match fps {
            5 => Some(FpsTier::UltraLow),
            10 => Some(FpsTier::Low),
            30 => Some(FpsTier::Medium),
            60 => Some(FpsTier::High),
            _ => None,
        }
    }
}

impl fmt::Display for FpsTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} fps)", self.name(), self.fps())
    }
}

impl FromStr for FpsTier {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let tier = match lower.as_str() {
            "uld" => Some(FpsTier::UltraLow),
            "ld" => Some(FpsTier::Low),
            "md" => Some(FpsTier::Medium),
            "hd" => Some(FpsTier::High),
            other => other.parse().ok().and_then(FpsTier::from_fps),
        };
        tier.ok_or_else(|| ParseNameError {
            kind: "fps tier",
            value: s.to_string(),
            expected: "uld, ld, md, hd, 5, 10, 30, 60",
        })
    }
}

/// Either spelling accepted in config files: `fps = "md"` or `fps = 30`.
#[derive(Deserialize)]
#[serde(untagged)]
enum FpsValue {
    Name(String),
    Rate(u32),
}

impl TryFrom<FpsValue> for FpsTier {
    type Error = ParseNameError;

    fn try_from(value: FpsValue) -> Result<Self, Self::Error> {
        match value {
            FpsValue::Name(name) => name.parse(),
            FpsValue::Rate(rate) => FpsTier::from_fps(rate).ok_or_else(|| ParseNameError {
                kind: "fps tier",
                value: rate.to_string(),
                expected: "5, 10, 30, 60",
            }),
        }
    }
}

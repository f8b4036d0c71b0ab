//! Animation modes.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::ParseNameError;

/// Pattern used to compute each cell's color phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum AnimationMode {
    /// Horizontal band scrolling across columns.
    #[default]
    Wave,
    /// Bands rotating around the art's center.
    Spin,
    /// Rings travelling outward from the center.
    Pulse,
    /// The whole art cycles one uniform color.
    Flux,
    /// Interfering traveling waves.
    Morph,
}

impl AnimationMode {
    /// All modes in cycling order.
    pub const ALL: [AnimationMode; 5] = [
        AnimationMode::Wave,
        AnimationMode::Spin,
        AnimationMode::Pulse,
        AnimationMode::Flux,
        AnimationMode::Morph,
    ];

    /// Cycle to the next animation mode.
    pub fn next(self) -> Self {
        match self {
            AnimationMode::Wave => AnimationMode::Spin,
            AnimationMode::Spin => AnimationMode::Pulse,
            AnimationMode::Pulse => AnimationMode::Flux,
            AnimationMode::Flux => AnimationMode::Morph,
            AnimationMode::Morph => AnimationMode::Wave,
        }
    }

    /// Lowercase name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            AnimationMode::Wave => "wave",
            AnimationMode::Spin => "spin",
            AnimationMode::Pulse => "pulse",
            AnimationMode::Flux => "flux",
            AnimationMode::Morph => "morph",
        }
    }
}

impl fmt::Display for AnimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationMode {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == lower)
            .ok_or_else(|| ParseNameError {
                kind: "mode",
                value: s.to_string(),
                expected: "wave, spin, pulse, flux, morph",
            })
    }
}

impl TryFrom<String> for AnimationMode {
    type Error = ParseNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_cycle_returns_after_five_steps() {
        for start in AnimationMode::ALL {
            let mut mode = start;
            let mut seen = vec![mode];
            for _ in 0..4 {
                mode = mode.next();
                seen.push(mode);
            }
            assert_eq!(mode.next(), start);
            seen.sort_by_key(|m| m.name());
            seen.dedup();
            assert_eq!(seen.len(), 5);
        }
    }

    #[test]
    fn test_mode_cycle_order() {
        let mut mode = AnimationMode::Wave;
        let mut order = Vec::new();
        for _ in 0..5 {
            order.push(mode);
            mode = mode.next();
        }
        assert_eq!(order, AnimationMode::ALL);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("spin".parse::<AnimationMode>(), Ok(AnimationMode::Spin));
        assert_eq!("MORPH".parse::<AnimationMode>(), Ok(AnimationMode::Morph));
        assert!("twirl".parse::<AnimationMode>().is_err());
    }
}

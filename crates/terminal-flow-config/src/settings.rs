//! Fully resolved settings.

use std::path::PathBuf;
use std::time::Duration;

use terminal_flow_core::{AnimationMode, AnimationState, FpsTier, Palette};

use crate::{ColorDepthSetting, ConfigError, SettingsLayer, default_text_dir};

/// Cycle interval used when `--cycle` is given without a value.
pub const DEFAULT_CYCLE_SECS: f64 = 30.0;

const DEFAULT_SPEED: f64 = 1.0;

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub mode: AnimationMode,
    pub palette: Palette,
    /// Finite and above zero.
    pub speed: f64,
    pub fps: FpsTier,
    /// `None` disables automatic file changes.
    pub cycle: Option<Duration>,
    pub text_dir: PathBuf,
    pub color_depth: ColorDepthSetting,
}

impl Settings {
    /// Stack `cli` over `file` over the defaults and validate the result.
    pub fn resolve(cli: SettingsLayer, file: SettingsLayer) -> Result<Settings, ConfigError> {
        let merged = cli.or(file);

        let speed = merged.speed.unwrap_or(DEFAULT_SPEED);
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed(speed));
        }

        let cycle = merged.cycle.map(validate_cycle).transpose()?;

        let settings = Settings {
            mode: merged.mode.unwrap_or_default(),
            palette: merged.color.unwrap_or_default(),
            speed,
            fps: merged.fps.unwrap_or_default(),
            cycle,
            text_dir: merged.text_dir.unwrap_or_else(default_text_dir),
            color_depth: merged.color_depth.unwrap_or_default(),
        };
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }

    /// Initial animation state for these settings.
    pub fn animation_state(&self) -> AnimationState {
        AnimationState::new(self.mode, self.palette, self.speed, self.fps, self.cycle)
    }
}

fn validate_cycle(secs: f64) -> Result<Duration, ConfigError> {
    if secs <= 0.0 {
        return Err(ConfigError::InvalidCycle(secs));
    }
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidCycle(secs))
}

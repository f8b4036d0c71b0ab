//! Mutable animation state owned by the event loop.

use std::time::Duration;

use crate::{AnimationMode, FpsTier, Palette};

/// Everything the renderer needs to know about the current animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    /// Current animation mode.
    pub mode: AnimationMode,
    /// Current color palette.
    pub palette: Palette,
    /// Animation speed multiplier (always positive).
    speed: f64,
    /// Target frame-rate tier.
    fps: FpsTier,
    /// Seconds of animation since start or last file change.
    elapsed: f64,
    /// Time between automatic file changes, if cycling is enabled.
    cycle_interval: Option<Duration>,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            mode: AnimationMode::default(),
            palette: Palette::default(),
            speed: 1.0,
            fps: FpsTier::default(),
            elapsed: 0.0,
            cycle_interval: None,
        }
    }
}

impl AnimationState {
    /// Create a state with the clock at zero.
    ///
    /// `speed` must already be validated as finite and positive; anything
    /// else falls back to 1.0.
    pub fn new(
        mode: AnimationMode,
        palette: Palette,
        speed: f64,
        fps: FpsTier,
        cycle_interval: Option<Duration>,
    ) -> Self {
        let speed = if speed.is_finite() && speed > 0.0 {
            speed
        } else {
            1.0
        };
        Self {
            mode,
            palette,
            speed,
            fps,
            elapsed: 0.0,
            cycle_interval,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn fps(&self) -> FpsTier {
        self.fps
    }

    /// Time budget for one tick of the render loop.
    pub fn frame_interval(&self) -> Duration {
        self.fps.frame_interval()
    }

    /// Elapsed animation time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn cycle_interval(&self) -> Option<Duration> {
        self.cycle_interval
    }

    /// Advance the animation clock by a wall-clock delta.
    pub fn advance(&mut self, delta: Duration) {
        self.elapsed += delta.as_secs_f64();
    }

    /// Restart the animation clock, used when a new file is shown.
    pub fn reset_clock(&mut self) {
        self.elapsed = 0.0;
    }

    /// Switch to the next animation mode.
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
    }

    /// Switch to the next palette.
    pub fn cycle_palette(&mut self) {
        self.palette = self.palette.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates_real_deltas() {
        let mut state = AnimationState::default();
        state.advance(Duration::from_millis(100));
        state.advance(Duration::from_millis(250));
        assert!((state.elapsed() - 0.35).abs() < 1e-9);
        state.reset_clock();
        assert_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn test_invalid_speed_falls_back_to_default() {
        let state = AnimationState::new(
            AnimationMode::Wave,
            Palette::Rainbow,
            -2.0,
            FpsTier::Low,
            None,
        );
        assert_eq!(state.speed(), 1.0);
    }

    #[test]
    fn test_cycling_keeps_other_fields() {
        let mut state = AnimationState::new(
            AnimationMode::Flux,
            Palette::Gray,
            2.0,
            FpsTier::High,
            Some(Duration::from_secs(30)),
        );
        state.advance(Duration::from_secs(1));
        state.cycle_mode();
        state.cycle_palette();
        assert_eq!(state.mode, AnimationMode::Morph);
        assert_eq!(state.palette, Palette::Pink);
        assert_eq!(state.elapsed(), 1.0);
        assert_eq!(state.speed(), 2.0);
    }
}

//! Core types for the terminal-flow ASCII art animator.
//!
//! Everything here is plain data shared by the renderer, the art loader,
//! the configuration layer and the binary: the closed sets of animation
//! modes, palettes and frame-rate tiers, the loaded art grid, and the
//! mutable animation state owned by the event loop.

mod depth;
mod fps;
mod grid;
mod mode;
mod palette;
mod state;

pub use depth::ColorDepth;
pub use fps::FpsTier;
pub use grid::{ArtGrid, GridSize};
pub use mode::AnimationMode;
pub use palette::Palette;
pub use state::AnimationState;

/// Error returned when a name does not match any variant of a closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseNameError {
    /// What was being parsed (e.g. "mode").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma separated list of accepted names.
    pub expected: &'static str,
}

//! Rendering core for terminal-flow.
//!
//! The pipeline for one tick is:
//!
//! 1. [`phase`] maps every art cell to a hue phase in `[0, 1)` from its
//!    position, the elapsed time, the animation mode and the speed.
//! 2. [`resolve_color`] turns a phase into a displayable color for the
//!    current palette and terminal color depth.
//! 3. [`compose`] runs both over an [`ArtGrid`](terminal_flow_core::ArtGrid)
//!    and produces a [`Frame`].
//! 4. [`ScreenBuffer::present`] diffs the frame against what is on screen
//!    and writes only the cells that changed.

mod color;
mod field;
mod frame;
mod palette;
mod screen;

pub use color::{Rgb, hsv_to_rgb};
pub use field::{MORPH_K1, MORPH_K2, MORPH_K3, phase, wrap_unit};
pub use frame::{Frame, FrameCell, compose};
pub use palette::{palette_rgb, quantize, resolve_color};
pub use screen::ScreenBuffer;

//! Color phase fields (stateless, computed from position and time only).

use std::f64::consts::TAU;

use terminal_flow_core::{AnimationMode, GridSize};

/// Horizontal spatial frequency of the morph field (radians per column).
pub const MORPH_K1: f64 = 0.30;
/// Vertical spatial frequency of the morph field (radians per row).
pub const MORPH_K2: f64 = 0.25;
/// Diagonal spatial frequency of the morph field.
pub const MORPH_K3: f64 = 0.20;

/// Compute the hue phase of cell `(x, y)` at time `t` seconds.
///
/// The result is always in `[0, 1)` and depends only on the arguments.
/// `grid` gives the art's size, from which the center and the normalizing
/// radius are taken.
pub fn phase(x: usize, y: usize, t: f64, mode: AnimationMode, speed: f64, grid: GridSize) -> f64 {
    let shift = t * speed;
    let x_f = x as f64;
    let y_f = y as f64;

    let raw = match mode {
        AnimationMode::Wave => x_f / grid.width.max(1) as f64 + shift,
        AnimationMode::Spin => {
            let (dx, dy) = offset_from_center(x_f, y_f, grid);
            dy.atan2(dx) / TAU + shift
        }
        AnimationMode::Pulse => {
            let (dx, dy) = offset_from_center(x_f, y_f, grid);
            let max_radius = (grid.width as f64).hypot(grid.height as f64) / 2.0;
            let radius = if max_radius > 0.0 {
                dx.hypot(dy) / max_radius
            } else {
                0.0
            };
            // Subtracting time makes the rings travel outward.
            radius - shift
        }
        AnimationMode::Flux => shift,
        AnimationMode::Morph => {
            let horizontal = (x_f * MORPH_K1 + shift).sin();
            let vertical = (y_f * MORPH_K2 + shift * 0.7).sin();
            let diagonal = ((x_f + y_f) * MORPH_K3 + shift * 1.3).sin();
            let combined = 0.40 * horizontal + 0.35 * vertical + 0.25 * diagonal;
            (combined + 1.0) / 2.0
        }
    };

    wrap_unit(raw)
}

/// Wrap any real number into `[0, 1)`. Non-finite input maps to 0.
pub fn wrap_unit(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

fn offset_from_center(x: f64, y: f64, grid: GridSize) -> (f64, f64) {
    let cx = (grid.width / 2) as f64;
    let cy = (grid.height / 2) as f64;
    (x - cx, y - cy)
}

//! Phase to color mapping.

use ratatui::style::Color;
use terminal_flow_core::{ColorDepth, Palette};

use crate::color::{Rgb, hsv_to_rgb};

/// Saturation of the rainbow palette.
const RAINBOW_SATURATION: f64 = 0.75;
/// Brightness of the rainbow palette.
const RAINBOW_VALUE: f64 = 0.9;

/// Channel levels of the xterm 6x6x6 color cube (indices 16..=231).
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Reference colors for 8-color terminals.
///
/// Black is left out so text stays visible on dark backgrounds; both white
/// and mid gray fall back to the terminal's normal white.
const BASIC_COLORS: [(Rgb, Color); 8] = [
    (Rgb(255, 0, 0), Color::Red),
    (Rgb(255, 255, 0), Color::Yellow),
    (Rgb(0, 255, 0), Color::Green),
    (Rgb(0, 255, 255), Color::Cyan),
    (Rgb(0, 0, 255), Color::Blue),
    (Rgb(255, 0, 255), Color::Magenta),
    (Rgb(255, 255, 255), Color::Gray),
    (Rgb(128, 128, 128), Color::Gray),
];

/// Resolve a phase to a displayable color for the given palette and depth.
pub fn resolve_color(phase: f64, palette: Palette, depth: ColorDepth) -> Color {
    quantize(palette_rgb(phase, palette), depth)
}

/// The palette's RGB color at `phase`.
///
/// Rainbow maps the phase straight onto the hue circle. Monochrome palettes
/// walk their dark-to-light stops and back again over one phase cycle, so
/// the gradient has no seam where the phase wraps.
pub fn palette_rgb(phase: f64, palette: Palette) -> Rgb {
    let phase = if phase.is_finite() {
        phase.clamp(0.0, 1.0)
    } else {
        0.0
    };

    match gradient_stops(palette) {
        None => hsv_to_rgb(phase * 360.0, RAINBOW_SATURATION, RAINBOW_VALUE),
        Some(stops) => {
            let position = 1.0 - (2.0 * phase - 1.0).abs();
            sample_stops(stops, position)
        }
    }
}

/// Map an RGB color onto what the terminal can show.
pub fn quantize(rgb: Rgb, depth: ColorDepth) -> Color {
    match depth {
        ColorDepth::TrueColor => Color::Rgb(rgb.0, rgb.1, rgb.2),
        ColorDepth::Ansi256 => Color::Indexed(nearest_ansi256(rgb)),
        ColorDepth::Basic8 => nearest_basic(rgb),
    }
}

fn gradient_stops(palette: Palette) -> Option<&'static [Rgb]> {
    let stops: &'static [Rgb] = match palette {
        Palette::Rainbow => return None,
        Palette::Red => &[
            Rgb(150, 20, 20),
            Rgb(200, 30, 30),
            Rgb(255, 0, 0),
            Rgb(255, 50, 50),
            Rgb(255, 80, 80),
        ],
        Palette::Blue => &[
            Rgb(30, 30, 150),
            Rgb(0, 50, 200),
            Rgb(0, 0, 255),
            Rgb(50, 100, 255),
            Rgb(100, 150, 255),
        ],
        Palette::Green => &[Rgb(0, 80, 0), Rgb(0, 255, 0), Rgb(128, 255, 128)],
        Palette::Yellow => &[Rgb(128, 128, 0), Rgb(255, 255, 0), Rgb(255, 255, 128)],
        Palette::Purple => &[Rgb(80, 0, 80), Rgb(128, 0, 128), Rgb(200, 128, 200)],
        Palette::Cyan => &[Rgb(0, 80, 80), Rgb(0, 255, 255), Rgb(128, 255, 255)],
        Palette::Gray => &[Rgb(64, 64, 64), Rgb(128, 128, 128), Rgb(192, 192, 192)],
        Palette::Pink => &[
            Rgb(180, 100, 140),
            Rgb(220, 130, 170),
            Rgb(255, 160, 190),
            Rgb(255, 192, 203),
            Rgb(255, 200, 210),
        ],
        Palette::Orange => &[
            Rgb(180, 60, 0),
            Rgb(215, 110, 0),
            Rgb(255, 140, 0),
            Rgb(255, 180, 40),
            Rgb(255, 195, 80),
        ],
    };
    Some(stops)
}

/// Piecewise-linear sample of `stops` at `position` in `[0, 1]`.
fn sample_stops(stops: &[Rgb], position: f64) -> Rgb {
    match stops {
        [] => Rgb(255, 255, 255),
        [only] => *only,
        _ => {
            let segments = stops.len() - 1;
            let scaled = position.clamp(0.0, 1.0) * segments as f64;
            let index = (scaled.floor() as usize).min(segments - 1);
            stops[index].lerp(stops[index + 1], scaled - index as f64)
        }
    }
}

fn nearest_ansi256(rgb: Rgb) -> u8 {
    let level = |c: u8| {
        CUBE_LEVELS
            .iter()
            .enumerate()
            .min_by_key(|(_, level)| (c as i32 - **level as i32).abs())
            .map(|(i, _)| i as u8)
            .unwrap_or(0)
    };
    let (r, g, b) = (level(rgb.0), level(rgb.1), level(rgb.2));
    let cube = Rgb(
        CUBE_LEVELS[r as usize],
        CUBE_LEVELS[g as usize],
        CUBE_LEVELS[b as usize],
    );
    let cube_index = 16 + 36 * r + 6 * g + b;

    // Grayscale ramp 232..=255 runs from 8 to 238 in steps of 10.
    let avg = (rgb.0 as u32 + rgb.1 as u32 + rgb.2 as u32) / 3;
    let step = (avg.saturating_sub(3) / 10).min(23) as u8;
    let gray_level = 8 + 10 * step;
    let gray = Rgb(gray_level, gray_level, gray_level);

    if gray.distance_sq(rgb) < cube.distance_sq(rgb) {
        232 + step
    } else {
        cube_index
    }
}

fn nearest_basic(rgb: Rgb) -> Color {
    // Strict comparison keeps the first entry on ties.
    let mut best = BASIC_COLORS[0];
    let mut best_distance = best.0.distance_sq(rgb);
    for candidate in &BASIC_COLORS[1..] {
        let distance = candidate.0.distance_sq(rgb);
        if distance < best_distance {
            best = *candidate;
            best_distance = distance;
        }
    }
    best.1
}

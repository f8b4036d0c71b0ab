//! Frame composition.

use ratatui::style::Color;
use terminal_flow_core::{AnimationMode, AnimationState, ArtGrid, ColorDepth, GridSize};

use crate::field::phase;
use crate::palette::resolve_color;

/// One colored cell of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameCell {
    /// Glyph to draw.
    pub glyph: char,
    /// Foreground color; `None` uses the terminal default.
    pub color: Option<Color>,
}

impl FrameCell {
    /// An empty, uncolored cell.
    pub const BLANK: FrameCell = FrameCell {
        glyph: ' ',
        color: None,
    };

    pub const fn new(glyph: char, color: Option<Color>) -> Self {
        Self { glyph, color }
    }
}

impl Default for FrameCell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// A fully colored snapshot of the art for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    size: GridSize,
    cells: Vec<FrameCell>,
}

impl Frame {
    /// A frame of blank cells.
    pub fn blank(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![FrameCell::BLANK; size.area()],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Cell at `(x, y)`, or `None` outside the frame.
    pub fn get(&self, x: usize, y: usize) -> Option<FrameCell> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.cells.get(y * self.size.width + x).copied()
    }
}

/// Compose the colored frame for `grid` at the state's current time.
///
/// Whitespace and the padding past short rows stay uncolored.
pub fn compose(grid: &ArtGrid, state: &AnimationState, depth: ColorDepth) -> Frame {
    let size = grid.size();
    let mut frame = Frame::blank(size);
    let t = state.elapsed();
    let speed = state.speed();

    // Flux paints every cell the same color, resolve it once.
    let uniform = (state.mode == AnimationMode::Flux)
        .then(|| resolve_color(phase(0, 0, t, state.mode, speed, size), state.palette, depth));

    for (y, row) in grid.rows().enumerate() {
        for (x, &glyph) in row.iter().enumerate() {
            if glyph.is_whitespace() {
                // Tabs are already expanded; other whitespace draws as a space.
                frame.cells[y * size.width + x] = FrameCell::BLANK;
                continue;
            }
            let color = match uniform {
                Some(color) => color,
                None => resolve_color(
                    phase(x, y, t, state.mode, speed, size),
                    state.palette,
                    depth,
                ),
            };
            frame.cells[y * size.width + x] = FrameCell::new(glyph, Some(color));
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use terminal_flow_core::{FpsTier, Palette};

    fn state(mode: AnimationMode, palette: Palette) -> AnimationState {
        AnimationState::new(mode, palette, 1.0, FpsTier::Low, None)
    }

    #[test]
    fn test_blank_cells_are_uncolored() {
        let grid = ArtGrid::from_text("# #\n##");
        let st = state(AnimationMode::Wave, Palette::Rainbow);
        let frame = compose(&grid, &st, ColorDepth::TrueColor);

        assert_eq!(frame.size(), GridSize::new(3, 2));
        assert_eq!(frame.get(1, 0), Some(FrameCell::BLANK));
        // Padding past the end of the short second row.
        assert_eq!(frame.get(2, 1), Some(FrameCell::BLANK));
        assert_eq!(frame.cells.iter().filter(|c| c.color.is_some()).count(), 4);
        assert_eq!(frame.get(0, 0).map(|c| c.glyph), Some('#'));
    }

    #[test]
    fn test_wave_end_to_end_colors() {
        let grid = ArtGrid::from_text(&"##########\n".repeat(3));
        let mut st = state(AnimationMode::Wave, Palette::Rainbow);

        let frame = compose(&grid, &st, ColorDepth::TrueColor);
        assert_eq!(frame.get(0, 0).and_then(|c| c.color), Some(Color::Rgb(230, 57, 57)));

        st.advance(Duration::from_millis(500));
        let frame = compose(&grid, &st, ColorDepth::TrueColor);
        assert_eq!(frame.get(0, 0).and_then(|c| c.color), Some(Color::Rgb(57, 230, 230)));
        // Every row of a column shares the wave color.
        assert_eq!(frame.get(4, 0), frame.get(4, 2));
    }

    #[test]
    fn test_flux_colors_every_cell_alike() {
        let grid = ArtGrid::from_text("abc\n d \nefg");
        let mut st = state(AnimationMode::Flux, Palette::Orange);
        st.advance(Duration::from_millis(1234));
        let frame = compose(&grid, &st, ColorDepth::Ansi256);

        let colors: Vec<_> = frame.cells.iter().filter_map(|c| c.color).collect();
        assert_eq!(colors.len(), 7);
        assert!(colors.iter().all(|c| *c == colors[0]));
    }

    #[test]
    fn test_compose_is_pure() {
        let grid = ArtGrid::from_text(" /\\_/\\\n( o.o )\n > ^ <");
        let mut st = state(AnimationMode::Morph, Palette::Cyan);
        st.advance(Duration::from_secs(3));
        let a = compose(&grid, &st, ColorDepth::Basic8);
        let b = compose(&grid, &st, ColorDepth::Basic8);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_grid_gives_empty_frame() {
        let frame = compose(&ArtGrid::default(), &AnimationState::default(), ColorDepth::Basic8);
        assert!(frame.cells.is_empty());
        assert_eq!(frame.get(0, 0), None);
    }
}

//! Diffing presenter for composed frames.
//!
//! [`ScreenBuffer`] remembers what is currently on the terminal and, given
//! the next [`Frame`], emits only the cells that differ. Output for one
//! present is staged in memory and handed to the writer in a single
//! `write_all` followed by one flush.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{self, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use ratatui::layout::Size;
use ratatui::style::Color;

use crate::frame::{Frame, FrameCell};

/// Last screen actually written to the terminal.
#[derive(Debug, Default)]
pub struct ScreenBuffer {
    /// Viewport the cells were written for.
    size: Size,
    /// Viewport-sized cells in row-major order.
    cells: Vec<FrameCell>,
    /// Whether `cells` matches the terminal.
    valid: bool,
    /// Staging area for escape sequences, reused across presents.
    scratch: Vec<u8>,
}

/// Pen position and color while emitting one present.
#[derive(Debug, Default)]
struct Pen {
    cursor: Option<(u16, u16)>,
    color: Option<Option<Color>>,
}

impl Pen {
    /// Whether bold and a foreground color are currently set.
    fn is_styled(&self) -> bool {
        matches!(self.color, Some(Some(_)))
    }
}

impl ScreenBuffer {
    /// An empty buffer; the first present repaints everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a full repaint on the next present.
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Present `frame` centered on a `viewport`-sized terminal.
    ///
    /// Returns the number of cells written. Colored glyphs are drawn bold.
    /// A frame larger than the viewport is clipped around its center. On a
    /// write error the buffer is invalidated so the next present starts
    /// from a cleared screen.
    pub fn present<W: Write>(
        &mut self,
        out: &mut W,
        frame: &Frame,
        viewport: Size,
    ) -> io::Result<usize> {
        let target = place(frame, viewport);
        let full_repaint = !self.valid || self.size != viewport;

        self.scratch.clear();
        if full_repaint {
            tracing::debug!(
                width = viewport.width,
                height = viewport.height,
                "full repaint"
            );
            queue!(
                self.scratch,
                SetAttribute(Attribute::Reset),
                ResetColor,
                Clear(ClearType::All)
            )?;
        }

        let mut pen = Pen::default();
        let mut writes = 0;
        let width = viewport.width as usize;
        for (index, cell) in target.iter().enumerate() {
            // A cleared screen is all blanks.
            let previous = if full_repaint {
                FrameCell::BLANK
            } else {
                self.cells[index]
            };
            if *cell == previous {
                continue;
            }

            let x = (index % width) as u16;
            let y = (index / width) as u16;
            if pen.cursor != Some((x, y)) {
                queue!(self.scratch, MoveTo(x, y))?;
            }
            if pen.color != Some(cell.color) {
                match cell.color {
                    Some(color) => {
                        if !pen.is_styled() {
                            queue!(self.scratch, SetAttribute(Attribute::Bold))?;
                        }
                        queue!(self.scratch, SetForegroundColor(to_crossterm(color)))?;
                    }
                    // Clears bold along with the color.
                    None => queue!(self.scratch, SetAttribute(Attribute::Reset))?,
                }
                pen.color = Some(cell.color);
            }
            queue!(self.scratch, Print(cell.glyph))?;
            pen.cursor = Some((x.saturating_add(1), y));
            writes += 1;
        }
        if pen.is_styled() {
            queue!(self.scratch, SetAttribute(Attribute::Reset))?;
        }

        if let Err(err) = out
            .write_all(&self.scratch)
            .and_then(|()| out.flush())
        {
            self.invalidate();
            return Err(err);
        }

        self.cells = target;
        self.size = viewport;
        self.valid = true;
        Ok(writes)
    }
}

/// Lay `frame` out on a blank viewport, centered, clipping what overflows.
fn place(frame: &Frame, viewport: Size) -> Vec<FrameCell> {
    let view_w = viewport.width as usize;
    let view_h = viewport.height as usize;
    let mut cells = vec![FrameCell::BLANK; view_w * view_h];

    let art = frame.size();
    let (dst_x, src_x, cols) = center_span(art.width, view_w);
    let (dst_y, src_y, rows) = center_span(art.height, view_h);

    for row in 0..rows {
        for col in 0..cols {
            if let Some(cell) = frame.get(src_x + col, src_y + row) {
                cells[(dst_y + row) * view_w + dst_x + col] = cell;
            }
        }
    }
    cells
}

/// Destination offset, source offset and length of a centered span.
fn center_span(content: usize, available: usize) -> (usize, usize, usize) {
    if content <= available {
        ((available - content) / 2, 0, content)
    } else {
        (0, (content - available) / 2, available)
    }
}

fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Reset => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::Gray => style::Color::Grey,
        Color::DarkGray => style::Color::DarkGrey,
        Color::LightRed => style::Color::Red,
        Color::LightGreen => style::Color::Green,
        Color::LightYellow => style::Color::Yellow,
        Color::LightBlue => style::Color::Blue,
        Color::LightMagenta => style::Color::Magenta,
        Color::LightCyan => style::Color::Cyan,
        Color::White => style::Color::White,
        Color::Rgb(r, g, b) => style::Color::Rgb { r, g, b },
        Color::Indexed(i) => style::Color::AnsiValue(i),
    }
}

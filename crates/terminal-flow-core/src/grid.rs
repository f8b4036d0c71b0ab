//! Loaded ASCII art.

/// Tab stops used when expanding tabs in art files.
const TAB_WIDTH: usize = 4;

/// Dimensions of an art grid in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of cells.
    pub const fn area(self) -> usize {
        self.width * self.height
    }
}

/// Immutable grid of glyphs loaded from an art file.
///
/// Rows may be ragged; `width` is the longest row. Cells past the end of a
/// shorter row read as `None` and are treated as blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtGrid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl ArtGrid {
    /// Build a grid from already split rows.
    pub fn new(rows: Vec<Vec<char>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Build a grid from decoded text.
    ///
    /// Carriage returns are dropped and tabs are expanded to the next
    /// 4-column stop. Other control characters become U+FFFD. Blank lines
    /// before and after the art are trimmed.
    pub fn from_text(text: &str) -> Self {
        let mut rows: Vec<Vec<char>> = text.split('\n').map(expand_line).collect();

        let is_blank = |row: &Vec<char>| row.iter().all(|c| c.is_whitespace());
        let first = rows.iter().position(|row| !is_blank(row));
        let last = rows.iter().rposition(|row| !is_blank(row));
        match (first, last) {
            (Some(first), Some(last)) => {
                rows.truncate(last + 1);
                rows.drain(..first);
            }
            _ => rows.clear(),
        }

        Self::new(rows)
    }

    /// Longest row length.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn size(&self) -> GridSize {
        GridSize::new(self.width, self.rows.len())
    }

    /// Whether the grid has no visible content.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.width == 0
    }

    /// Glyph at `(x, y)`, or `None` outside the row.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

fn expand_line(line: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\r' => {}
            '\t' => {
                let pad = TAB_WIDTH - out.len() % TAB_WIDTH;
                out.extend(std::iter::repeat_n(' ', pad));
            }
            // Never hand a control code to the terminal.
            c if c.is_control() => out.push(char::REPLACEMENT_CHARACTER),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_width_is_longest_row() {
        let grid = ArtGrid::from_text("ab\nabcd\na");
        assert_eq!(grid.size(), GridSize::new(4, 3));
        assert_eq!(grid.get(3, 1), Some('d'));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 9), None);
    }

    #[test]
    fn test_blank_edges_are_trimmed() {
        let grid = ArtGrid::from_text("\n   \n /\\ \n/__\\\n\n \n");
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(1, 0), Some('/'));
    }

    #[test]
    fn test_crlf_and_tabs() {
        let grid = ArtGrid::from_text("a\tb\r\nxy\r\n");
        let rows: Vec<String> = grid.rows().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec!["a   b".to_string(), "xy".to_string()]);
    }

    #[test]
    fn test_whitespace_only_text_is_empty() {
        assert!(ArtGrid::from_text(" \n\t\n").is_empty());
        assert!(ArtGrid::from_text("").is_empty());
    }

    #[test]
    fn test_unicode_glyphs_count_as_single_cells() {
        let grid = ArtGrid::from_text("█▓▒░");
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.get(2, 0), Some('▒'));
    }

    #[test]
    fn test_control_characters_are_replaced() {
        let grid = ArtGrid::from_text("ab\u{1b}[2Jcd\u{7}\u{9b}");
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.get(2, 0), Some(char::REPLACEMENT_CHARACTER));
        assert_eq!(grid.get(3, 0), Some('['));
        assert_eq!(grid.get(8, 0), Some(char::REPLACEMENT_CHARACTER));
        assert_eq!(grid.get(9, 0), Some(char::REPLACEMENT_CHARACTER));
    }
}

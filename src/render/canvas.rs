//! Character + style grid the chart is plotted into
//!
//! Rows are addressed bottom-up: row 0 is the lowest temperature line of the
//! printed chart. The vertical flip to storage order happens inside `index`
//! and is invisible to callers.

use crate::render::heat::Rgb;
use crate::types::{Result, SkycastError};

/// Placeholder character for untouched cells
pub const EMPTY: char = ' ';

/// SGR parameter for bold/emphasized cells
pub const BOLD: &str = "1";

/// SGR parameter meaning "no styling"
const STYLE_NONE: &str = "0";

#[derive(Debug, Clone)]
struct Cell {
    glyph: char,
    style: String,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: EMPTY,
            style: STYLE_NONE.to_string(),
        }
    }
}

/// A write-mostly 2D character buffer with per-cell accumulating styles
#[derive(Debug, Clone)]
pub struct Canvas {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Allocate a `rows x cols` grid of blank, unstyled cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SkycastError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        })
    }

    /// Translate a bottom-up logical coordinate into a flat storage index.
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(SkycastError::OutOfBounds { row, col });
        }
        let storage_row = self.rows - 1 - row;
        Ok(storage_row * self.cols + col)
    }

    /// Overwrite the character at (row, col) unconditionally.
    pub fn set(&mut self, row: usize, col: usize, glyph: char) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx].glyph = glyph;
        Ok(())
    }

    /// Write the character only if the cell is still blank.
    /// Used for background elements that must not clobber plotted glyphs.
    pub fn soft_set(&mut self, row: usize, col: usize, glyph: char) -> Result<()> {
        let idx = self.index(row, col)?;
        if self.cells[idx].glyph == EMPTY {
            self.cells[idx].glyph = glyph;
        }
        Ok(())
    }

    /// Soft-set every row of `col`, bottom to top.
    pub fn set_vertical_bar(&mut self, col: usize, glyph: char) -> Result<()> {
        for row in 0..self.rows {
            self.soft_set(row, col, glyph)?;
        }
        Ok(())
    }

    #[allow(dead_code)] // used in tests
    pub fn get(&self, row: usize, col: usize) -> Result<char> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx].glyph)
    }

    /// Append an SGR parameter to the cell's style.
    ///
    /// A still-unstyled cell has its style replaced; otherwise the parameter
    /// is joined with `;` so independently requested attributes compose.
    pub fn apply_style(&mut self, row: usize, col: usize, param: &str) -> Result<()> {
        let idx = self.index(row, col)?;
        let cell = &mut self.cells[idx];
        if cell.style == STYLE_NONE {
            cell.style = param.to_string();
        } else {
            cell.style.push(';');
            cell.style.push_str(param);
        }
        Ok(())
    }

    /// Color the cell's foreground using the 6x6x6 ANSI color cube.
    pub fn set_color(&mut self, row: usize, col: usize, color: Rgb) -> Result<()> {
        let cube = 16 + 36 * u16::from(color.r) + 6 * u16::from(color.g) + u16::from(color.b);
        self.apply_style(row, col, &format!("38;5;{}", cube))
    }

    /// Render one logical row as a printable string.
    ///
    /// Every cell is emitted as open-style, character, reset, styled or not,
    /// so the visible width is `cols` for every row.
    pub fn render_row(&self, row: usize) -> Result<String> {
        let start = self.index(row, 0)?;
        let mut out = String::with_capacity(self.cols * 10);
        for cell in &self.cells[start..start + self.cols] {
            out.push_str("\x1b[");
            out.push_str(&cell.style);
            out.push('m');
            out.push(cell.glyph);
            out.push_str("\x1b[0m");
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop ANSI escape sequences, keeping only visible characters
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            if in_escape {
                if c == 'm' {
                    in_escape = false;
                }
            } else if c == '\x1b' {
                in_escape = true;
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            Canvas::new(0, 10),
            Err(SkycastError::InvalidDimension { rows: 0, cols: 10 })
        ));
        assert!(matches!(
            Canvas::new(10, 0),
            Err(SkycastError::InvalidDimension { rows: 10, cols: 0 })
        ));
    }

    #[test]
    fn test_rows_render_with_uniform_width() {
        let canvas = Canvas::new(3, 7).unwrap();
        for row in 0..3 {
            let rendered = canvas.render_row(row).unwrap();
            assert_eq!(strip_ansi(&rendered).chars().count(), 7);
        }
    }

    #[test]
    fn test_set_is_bottom_up() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.set(0, 1, 'x').unwrap();
        canvas.set(3, 2, 'y').unwrap();
        // row 3 is the topmost printed line, row 0 the bottom one
        assert_eq!(strip_ansi(&canvas.render_row(3).unwrap()), "  y ");
        assert_eq!(strip_ansi(&canvas.render_row(0).unwrap()), " x  ");
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        assert!(matches!(
            canvas.set(2, 0, 'x'),
            Err(SkycastError::OutOfBounds { row: 2, col: 0 })
        ));
        assert!(matches!(
            canvas.set(0, 2, 'x'),
            Err(SkycastError::OutOfBounds { row: 0, col: 2 })
        ));
    }

    #[test]
    fn test_soft_set_keeps_existing_glyph() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.set(1, 1, 'a').unwrap();
        canvas.soft_set(1, 1, 'b').unwrap();
        assert_eq!(canvas.get(1, 1).unwrap(), 'a');

        canvas.soft_set(0, 0, 'b').unwrap();
        assert_eq!(canvas.get(0, 0).unwrap(), 'b');
    }

    #[test]
    fn test_set_always_overwrites() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.set(0, 0, 'a').unwrap();
        canvas.set(0, 0, 'b').unwrap();
        assert_eq!(canvas.get(0, 0).unwrap(), 'b');
    }

    #[test]
    fn test_vertical_bar_spares_plotted_cells() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.set(1, 0, '#').unwrap();
        canvas.set_vertical_bar(0, '|').unwrap();
        assert_eq!(canvas.get(0, 0).unwrap(), '|');
        assert_eq!(canvas.get(1, 0).unwrap(), '#');
        assert_eq!(canvas.get(2, 0).unwrap(), '|');
    }

    #[test]
    fn test_styles_compose() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas.set_color(0, 0, Rgb { r: 5, g: 0, b: 0 }).unwrap();
        canvas.apply_style(0, 0, BOLD).unwrap();
        // 16 + 36*5 = 196 (pure red in the color cube)
        assert_eq!(canvas.render_row(0).unwrap(), "\x1b[38;5;196;1m \x1b[0m");
    }

    #[test]
    fn test_unstyled_cell_renders_reset_style() {
        let canvas = Canvas::new(1, 1).unwrap();
        assert_eq!(canvas.render_row(0).unwrap(), "\x1b[0m \x1b[0m");
    }

    #[test]
    fn test_color_cube_index() {
        let mut canvas = Canvas::new(1, 2).unwrap();
        canvas.set_color(0, 0, Rgb { r: 0, g: 0, b: 5 }).unwrap();
        canvas.set_color(0, 1, Rgb { r: 1, g: 2, b: 3 }).unwrap();
        let row = canvas.render_row(0).unwrap();
        assert!(row.contains("38;5;21")); // 16 + 5
        assert!(row.contains("38;5;67")); // 16 + 36 + 12 + 3
    }
}

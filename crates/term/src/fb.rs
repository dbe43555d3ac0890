//! Framebuffer and style types for terminal rendering.
//!
//! Cells hold one glyph each. A double-width glyph (most kaomoji punctuation
//! such as `っ` or `／`) occupies its lead cell plus a continuation cell, which
//! the renderer never prints; zero-width glyphs are dropped.

use unicode_width::UnicodeWidthChar;

/// Marker stored in the right half of a double-width glyph.
pub const CONTINUATION: char = '\0';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

impl Cell {
    pub fn is_continuation(&self) -> bool {
        self.ch == CONTINUATION
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Overwrite one cell, blanking the other half of any wide glyph it splits.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(i) = self.idx(x, y) else {
            return;
        };
        let old = self.cells[i];
        if old.is_continuation() && x > 0 {
            self.cells[i - 1].ch = ' ';
        }
        if !old.is_continuation() {
            if let Some(next) = self.idx(x + 1, y) {
                if self.cells[next].is_continuation() {
                    self.cells[next].ch = ' ';
                }
            }
        }
        self.cells[i] = cell;
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` starting at column `x`, honoring glyph display widths.
    ///
    /// Returns the column after the last written glyph.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        self.put_str_clipped(x as i32, y as i32, s, style)
            .clamp(0, u16::MAX as i32) as u16
    }

    /// Like [`put_str`](Self::put_str) but accepts off-screen origins; glyphs
    /// left of column 0 or past the right edge are dropped.
    pub fn put_str_clipped(&mut self, x: i32, y: i32, s: &str, style: CellStyle) -> i32 {
        let mut cx = x;
        if y < 0 || y >= self.height as i32 {
            return cx;
        }
        let y = y as u16;
        for ch in s.chars() {
            let w = ch.width().unwrap_or(0) as i32;
            if w == 0 {
                continue;
            }
            if cx + w > self.width as i32 {
                break;
            }
            if cx >= 0 {
                let col = cx as u16;
                self.put_char(col, y, ch, style);
                if w == 2 {
                    self.set(
                        col + 1,
                        y,
                        Cell {
                            ch: CONTINUATION,
                            style,
                        },
                    );
                }
            }
            cx += w;
        }
        cx
    }

    /// Write a decimal number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, mut value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = 0;
        loop {
            digits[n] = b'0' + (value % 10) as u8;
            n += 1;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        let mut cx = x;
        for &d in digits[..n].iter().rev() {
            self.put_char(cx, y, d as char, style);
            cx = cx.saturating_add(1);
        }
        cx
    }

    /// Row `y` as a string, skipping continuation cells (handy in tests).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|c| !c.is_continuation())
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_glyph_takes_two_cells() {
        let mut fb = FrameBuffer::new(6, 1);
        let end = fb.put_str(0, 0, "aっb", CellStyle::default());
        assert_eq!(end, 4);
        assert_eq!(fb.get(1, 0).unwrap().ch, 'っ');
        assert!(fb.get(2, 0).unwrap().is_continuation());
        assert_eq!(fb.get(3, 0).unwrap().ch, 'b');
        assert_eq!(fb.row_text(0), "aっb  ");
    }

    #[test]
    fn wide_glyph_never_straddles_right_edge() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abっ", CellStyle::default());
        assert_eq!(fb.row_text(0), "ab ");
    }

    #[test]
    fn negative_origin_is_clipped() {
        let mut fb = FrameBuffer::new(5, 2);
        fb.put_str_clipped(-2, 1, "xyzw", CellStyle::default());
        assert_eq!(fb.row_text(1), "zw   ");
        fb.put_str_clipped(0, -1, "hidden", CellStyle::default());
        assert_eq!(fb.row_text(0), "     ");
    }

    #[test]
    fn overwriting_half_of_wide_glyph_blanks_the_other_half() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "っ", CellStyle::default());
        fb.put_char(1, 0, 'x', CellStyle::default());
        assert_eq!(fb.row_text(0), " x  ");

        fb.put_str(2, 0, "っ", CellStyle::default());
        fb.put_char(2, 0, 'y', CellStyle::default());
        assert_eq!(fb.row_text(0), " xy ");
    }

    #[test]
    fn overlapping_wide_glyphs_leave_no_orphans() {
        let mut fb = FrameBuffer::new(5, 1);
        fb.put_str(1, 0, "っ", CellStyle::default());
        fb.put_str(0, 0, "ω", CellStyle::default());
        fb.put_str(0, 0, "っ", CellStyle::default());
        assert_eq!(fb.get(0, 0).unwrap().ch, 'っ');
        assert!(fb.get(1, 0).unwrap().is_continuation());
        assert_eq!(fb.get(2, 0).unwrap().ch, ' ');
    }

    #[test]
    fn put_u32_writes_digits() {
        let mut fb = FrameBuffer::new(8, 1);
        let end = fb.put_u32(1, 0, 4096, CellStyle::default());
        assert_eq!(end, 5);
        assert_eq!(fb.row_text(0), " 4096   ");
        fb.put_u32(6, 0, 0, CellStyle::default());
        assert_eq!(fb.get(6, 0).unwrap().ch, '0');
    }
}

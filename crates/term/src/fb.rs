//! Framebuffer and style types for terminal rendering.

use crate::core::Canvas;
use crate::types::{palette, Rgb};

/// Foreground and background color of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(palette::TEXT, palette::BACKGROUND)
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

    /// Signed coordinates to an in-bounds position.
    fn clip(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        self.idx(x, y).map(|_| (x, y))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `ch` in `fg` at a signed position, keeping whatever background
    /// is already there.
    fn overlay_char(&mut self, x: i32, y: i32, ch: char, fg: Rgb) {
        let Some((x, y)) = self.clip(x, y) else {
            return;
        };
        if let Some(i) = self.idx(x, y) {
            let bg = self.cells[i].style.bg;
            self.cells[i] = Cell {
                ch,
                style: CellStyle::new(fg, bg),
            };
        }
    }
}

impl Canvas for FrameBuffer {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        let style = CellStyle::new(color, color);
        for py in y..y.saturating_add(h) {
            for px in x..x.saturating_add(w) {
                if let Some((cx, cy)) = self.clip(px, py) {
                    self.put_char(cx, cy, ' ', style);
                }
            }
        }
    }

    /// Box outline when there is room for one; a single dot otherwise.
    fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        if w < 2 || h < 2 {
            if w > 0 && h > 0 {
                self.overlay_char(x, y, '·', color);
            }
            return;
        }

        let right = x + w - 1;
        let bottom = y + h - 1;
        for px in x + 1..right {
            self.overlay_char(px, y, '─', color);
            self.overlay_char(px, bottom, '─', color);
        }
        for py in y + 1..bottom {
            self.overlay_char(x, py, '│', color);
            self.overlay_char(right, py, '│', color);
        }
        self.overlay_char(x, y, '┌', color);
        self.overlay_char(right, y, '┐', color);
        self.overlay_char(x, bottom, '└', color);
        self.overlay_char(right, bottom, '┘', color);
    }

    fn text(&mut self, x: i32, y: i32, text: &str, color: Rgb) {
        for (i, ch) in text.chars().enumerate() {
            self.overlay_char(x + i as i32, y, ch, color);
        }
    }

    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32
    }
}

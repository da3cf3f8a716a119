//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of cells, each either empty or filled with the
//! color of the piece that locked there. Uses a flat array for cache locality
//! and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::piece::Piece;
use crate::shapes::Shape;
use crate::types::{Cell, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell { occupied: true, .. }))
    }

    /// Test a shape anchored at (x, y) against walls, floor and locked cells.
    ///
    /// Cells above the top edge (y < 0) never collide, so tall pieces can
    /// spawn or rotate partially off-board.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.cells().any(|(dx, dy)| {
            let bx = x + dx;
            let by = y + dy;
            if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
                return true;
            }
            by >= 0 && self.is_occupied(bx, by)
        })
    }

    /// Lock a piece into the board with its color.
    ///
    /// The caller must have checked [`Board::collides`] for this position.
    pub fn merge(&mut self, piece: &Piece) {
        self.merge_shape(&piece.shape, piece.x, piece.y, piece.color);
    }

    /// Mark every occupied cell of `shape` anchored at (x, y) as filled.
    ///
    /// Panics if any cell falls outside the board.
    pub fn merge_shape(&mut self, shape: &Shape, x: i8, y: i8, color: Rgb) {
        for (dx, dy) in shape.cells() {
            let (bx, by) = (x + dx, y + dy);
            let idx = Self::index(bx, by)
                .unwrap_or_else(|| panic!("merge outside the board at ({bx}, {by})"));
            self.cells[idx] = Cell::filled(color);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.occupied)
    }

    /// Remove row `y`: every row above shifts down by one and row 0 becomes empty.
    ///
    /// Panics if `y` is not a board row.
    pub fn clear_row(&mut self, y: usize) {
        assert!(y < HEIGHT, "row {y} outside the board");

        // copy_within handles the overlapping ranges.
        for row in (1..=y).rev() {
            let src_start = (row - 1) * WIDTH;
            self.cells
                .copy_within(src_start..src_start + WIDTH, row * WIDTH);
        }

        self.cells[..WIDTH].fill(Cell::EMPTY);
    }

    /// Clear every full row in one top-to-bottom pass and return how many went.
    ///
    /// Each full row is compacted away as soon as it is found, before the scan
    /// moves on to the next row.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for y in 0..HEIGHT {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared += 1;
            }
        }
        cleared
    }

    /// Borrow row `y` as a slice of cells.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    /// Number of occupied cells on the whole board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.occupied).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Fill row `y` completely with `color`.
    ///
    /// Panics if `y` is not a board row.
    pub fn fill_row(&mut self, y: usize, color: Rgb) {
        assert!(y < HEIGHT, "row {y} outside the board");
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].fill(Cell::filled(color));
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

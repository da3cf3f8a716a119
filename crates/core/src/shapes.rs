//! Shapes module - the piece catalog
//!
//! Each kind is a small binary occupancy grid (rows of columns) plus a color.
//! Grids are at most 4x4 and stored inline, so shapes are `Copy` and never
//! allocate.

use crate::types::{palette, PieceKind, Rgb};

/// Largest grid dimension any shape (or rotated shape) can have.
pub const MAX_SHAPE_DIM: usize = 4;

/// Binary occupancy grid with explicit dimensions.
///
/// Cells outside `rows x cols` are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    grid: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a literal grid of 0/1 values.
    ///
    /// Panics (at compile time for constants) if the grid is empty or larger
    /// than 4x4.
    pub const fn from_grid<const R: usize, const C: usize>(cells: [[u8; C]; R]) -> Self {
        assert!(R > 0 && R <= MAX_SHAPE_DIM, "shape row count out of range");
        assert!(C > 0 && C <= MAX_SHAPE_DIM, "shape column count out of range");

        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut y = 0;
        while y < R {
            let mut x = 0;
            while x < C {
                grid[y][x] = cells[y][x] != 0;
                x += 1;
            }
            y += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            grid,
        }
    }

    /// An all-empty grid of the given dimensions.
    pub(crate) fn empty(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && rows <= MAX_SHAPE_DIM && cols > 0 && cols <= MAX_SHAPE_DIM,
            "shape dimensions {rows}x{cols} out of range"
        );
        Self {
            rows: rows as u8,
            cols: cols as u8,
            grid: [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
        }
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, filled: bool) {
        assert!(
            x < self.cols() && y < self.rows(),
            "shape write at ({x}, {y}) outside {}x{}",
            self.rows,
            self.cols
        );
        self.grid[y][x] = filled;
    }

    /// Number of rows (grid height).
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Number of columns (grid width).
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the local cell (x, y) is occupied. Out-of-range cells are empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.cols() && y < self.rows() && self.grid[y][x]
    }

    /// Occupied local cells as (x, y) offsets, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows()).flat_map(move |y| {
            (0..self.cols())
                .filter(move |&x| self.grid[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells().count()
    }
}

const I_SHAPE: Shape = Shape::from_grid([
    [0, 1, 0, 0],
    [0, 1, 0, 0],
    [0, 1, 0, 0],
    [0, 1, 0, 0],
]);

const O_SHAPE: Shape = Shape::from_grid([
    [1, 1],
    [1, 1],
]);

const T_SHAPE: Shape = Shape::from_grid([
    [0, 1, 0],
    [1, 1, 1],
]);

const S_SHAPE: Shape = Shape::from_grid([
    [0, 1, 1],
    [1, 1, 0],
]);

const Z_SHAPE: Shape = Shape::from_grid([
    [1, 1, 0],
    [0, 1, 1],
]);

const J_SHAPE: Shape = Shape::from_grid([
    [1, 0, 0],
    [1, 1, 1],
]);

const L_SHAPE: Shape = Shape::from_grid([
    [0, 0, 1],
    [1, 1, 1],
]);

/// Base (spawn) grid for a piece kind.
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Color used for a piece kind, both while falling and once locked.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => palette::BLUE,
        PieceKind::O => palette::GREEN,
        PieceKind::T => palette::RED,
        PieceKind::S => palette::YELLOW,
        PieceKind::Z => palette::PURPLE,
        PieceKind::J => palette::ORANGE,
        PieceKind::L => palette::MAROON,
    }
}

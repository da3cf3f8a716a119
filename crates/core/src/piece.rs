//! Piece module - the falling piece and the factory that spawns it

use crate::board::Board;
use crate::rng::{KindSource, UniformKinds};
use crate::rotation::rotate;
use crate::shapes::{base_shape, piece_color, Shape};
use crate::types::{PieceKind, Rgb, BOARD_WIDTH};

/// Active falling piece
///
/// `x`/`y` is the board position of the grid's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub color: Rgb,
}

impl Piece {
    /// Create a piece of `kind` at its spawn position: horizontally centered, row 0.
    pub fn new(kind: PieceKind) -> Self {
        let shape = base_shape(kind);
        Self {
            kind,
            shape,
            x: spawn_column(&shape),
            y: 0,
            color: piece_color(kind),
        }
    }

    /// The same piece moved by (dx, dy), or `None` if the anchor would
    /// leave the `i8` range.
    pub fn shifted(&self, dx: i8, dy: i8) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            ..*self
        })
    }

    /// The same piece with its grid turned 90° clockwise around the same anchor.
    pub fn rotated(&self) -> Self {
        Self {
            shape: rotate(&self.shape),
            ..*self
        }
    }

    /// Check this piece against the board at its current position.
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    /// Absolute board coordinates of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Leftmost column that centers `shape` on the board.
pub fn spawn_column(shape: &Shape) -> i8 {
    (BOARD_WIDTH as i8) / 2 - (shape.cols() / 2) as i8
}

/// Produces new pieces at the spawn position.
///
/// The factory does not look at the board; the caller checks the fresh piece
/// for a collision to detect game over.
#[derive(Debug)]
pub struct PieceFactory {
    source: Box<dyn KindSource>,
}

impl PieceFactory {
    pub fn new(source: Box<dyn KindSource>) -> Self {
        Self { source }
    }

    /// Uniform kinds from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(UniformKinds::seeded(seed)))
    }

    pub fn spawn(&mut self) -> Piece {
        Piece::new(self.source.next_kind())
    }
}

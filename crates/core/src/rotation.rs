//! Rotation module - 90° clockwise grid transform
//!
//! Rotation is a pure function of the grid. There are no kick tables: the
//! caller tests the rotated grid at the current anchor and either commits it
//! or keeps the old one.

use crate::shapes::Shape;

/// Rotate a shape 90° clockwise.
///
/// An R×C grid becomes C×R with `out[x][R - 1 - y] = in[y][x]`.
pub fn rotate(shape: &Shape) -> Shape {
    let rows = shape.rows();
    let cols = shape.cols();
    let mut rotated = Shape::empty(cols, rows);

    for y in 0..rows {
        for x in 0..cols {
            if shape.is_filled(x, y) {
                // Output row x, output column rows-1-y.
                rotated.set(rows - 1 - y, x, true);
            }
        }
    }

    rotated
}

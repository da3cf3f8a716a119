//! Scoring module - points for line clears
//!
//! A clear pass is worth a flat 100 points per row. Clearing several rows at
//! once earns no bonus beyond the multiple, and moving or dropping pieces
//! earns nothing.

use crate::types::LINE_CLEAR_POINTS;

/// Points for a single clear pass that removed `lines` rows.
pub fn line_clear_score(lines: u32) -> u32 {
    lines * LINE_CLEAR_POINTS
}

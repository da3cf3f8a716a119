//! Scene module - turns a `GameState` into draw calls
//!
//! The core never touches a terminal or window. It describes each frame as
//! filled rectangles, rectangle outlines and text against a [`Canvas`], with
//! board cells placed at `origin + coordinate * block size`. The renderer
//! decides what those primitives look like.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::game_state::GameState;
use crate::types::{palette, Phase, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Drawing surface the scene renders onto.
///
/// Coordinates are in the canvas' own units (pixels, terminal cells, ...) and
/// may be negative or past the edge; implementations clip.
pub trait Canvas {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb);

    fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb);

    fn text(&mut self, x: i32, y: i32, text: &str, color: Rgb);

    /// Width `text` would occupy when drawn, used for centering.
    fn text_width(&self, text: &str) -> i32;
}

/// Where the board sits on the canvas and how big a block is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub origin_x: i32,
    pub origin_y: i32,
    pub block_w: i32,
    pub block_h: i32,
    pub screen_w: i32,
    pub screen_h: i32,
    /// Vertical distance between consecutive text lines.
    pub line_h: i32,
}

impl Layout {
    /// Board at the top-left corner of a `screen_w` x `screen_h` canvas.
    pub fn new(block_w: i32, block_h: i32, screen_w: i32, screen_h: i32) -> Self {
        Self {
            origin_x: 0,
            origin_y: 0,
            block_w,
            block_h,
            screen_w,
            screen_h,
            line_h: block_h,
        }
    }

    pub fn with_origin(mut self, x: i32, y: i32) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    pub fn with_line_height(mut self, line_h: i32) -> Self {
        self.line_h = line_h;
        self
    }

    /// Board size in canvas units.
    pub fn board_size(&self) -> (i32, i32) {
        (
            BOARD_WIDTH as i32 * self.block_w,
            BOARD_HEIGHT as i32 * self.block_h,
        )
    }

    /// Top-left canvas position of board cell (x, y).
    pub fn cell_origin(&self, x: i32, y: i32) -> (i32, i32) {
        (
            self.origin_x + x * self.block_w,
            self.origin_y + y * self.block_h,
        )
    }

    /// Left edge of the score panel, two blocks right of the board.
    pub fn panel_x(&self) -> i32 {
        self.origin_x + self.board_size().0 + 2 * self.block_w
    }
}

/// Draw the whole frame for the current phase.
pub fn draw_scene(state: &GameState, layout: &Layout, canvas: &mut impl Canvas) {
    match state.phase() {
        Phase::Menu => draw_menu(layout, canvas),
        Phase::Playing => {
            draw_board(state, layout, canvas);
            draw_active(state, layout, canvas);
            draw_panel(state, layout, canvas);
        }
        Phase::GameOver => draw_game_over(state, layout, canvas),
    }
}

/// Cell outlines plus every locked cell in its color.
pub fn draw_board(state: &GameState, layout: &Layout, canvas: &mut impl Canvas) {
    for (y, row) in state.board().rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let (px, py) = layout.cell_origin(x as i32, y as i32);
            canvas.stroke_rect(px, py, layout.block_w, layout.block_h, palette::GRID);
            if cell.occupied {
                canvas.fill_rect(px, py, layout.block_w, layout.block_h, cell.color);
            }
        }
    }
}

/// The falling piece. Cells still above the top edge are not drawn.
pub fn draw_active(state: &GameState, layout: &Layout, canvas: &mut impl Canvas) {
    let Some(active) = state.active() else {
        return;
    };
    for (x, y) in active.cells().filter(|&(_, y)| y >= 0) {
        let (px, py) = layout.cell_origin(x as i32, y as i32);
        canvas.fill_rect(px, py, layout.block_w, layout.block_h, active.color);
    }
}

fn draw_panel(state: &GameState, layout: &Layout, canvas: &mut impl Canvas) {
    let x = layout.panel_x();
    let mut line = ArrayString::<32>::new();

    let _ = write!(line, "Score: {}", state.score());
    canvas.text(x, layout.origin_y, &line, palette::TEXT);

    line.clear();
    let _ = write!(line, "Lines: {}", state.lines());
    canvas.text(x, layout.origin_y + 2 * layout.line_h, &line, palette::TEXT);
}

fn draw_menu(layout: &Layout, canvas: &mut impl Canvas) {
    canvas.fill_rect(0, 0, layout.screen_w, layout.screen_h, palette::OVERLAY);

    let mid = layout.screen_h / 2;
    centered_text(canvas, layout, mid - 4 * layout.line_h, "BLOCKFALL");
    centered_text(canvas, layout, mid - layout.line_h, "Press [ENTER] to Start");
    centered_text(canvas, layout, mid + layout.line_h, "Press [ESC] to Exit");
}

fn draw_game_over(state: &GameState, layout: &Layout, canvas: &mut impl Canvas) {
    canvas.fill_rect(0, 0, layout.screen_w, layout.screen_h, palette::OVERLAY);

    let mid = layout.screen_h / 2;
    let mut score = ArrayString::<32>::new();
    let _ = write!(score, "Final Score: {}", state.score());

    centered_text(canvas, layout, mid - 3 * layout.line_h, "Game Over");
    centered_text(canvas, layout, mid - layout.line_h, &score);
    centered_text(canvas, layout, mid + layout.line_h, "Press [ENTER] to Restart");
    centered_text(canvas, layout, mid + 3 * layout.line_h, "Press [ESC] to Exit");
}

fn centered_text(canvas: &mut impl Canvas, layout: &Layout, y: i32, text: &str) {
    let x = (layout.screen_w - canvas.text_width(text)) / 2;
    canvas.text(x, y, text, palette::TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedKinds;
    use crate::types::{Cell, PieceKind};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Fill(i32, i32, i32, i32, Rgb),
        Stroke(i32, i32, i32, i32, Rgb),
        Text(i32, i32, String),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Canvas for Recorder {
        fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
            self.calls.push(Call::Fill(x, y, w, h, color));
        }

        fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
            self.calls.push(Call::Stroke(x, y, w, h, color));
        }

        fn text(&mut self, x: i32, y: i32, text: &str, _color: Rgb) {
            self.calls.push(Call::Text(x, y, text.to_string()));
        }

        fn text_width(&self, text: &str) -> i32 {
            text.len() as i32 * 10
        }
    }

    #[test]
    fn menu_is_overlay_and_prompts() {
        let state = GameState::new(1);
        let layout = Layout::new(25, 25, 500, 500);
        let mut canvas = Recorder::default();

        draw_scene(&state, &layout, &mut canvas);

        assert_eq!(canvas.calls[0], Call::Fill(0, 0, 500, 500, palette::OVERLAY));
        assert!(canvas
            .calls
            .iter()
            .any(|c| matches!(c, Call::Text(_, _, t) if t == "Press [ENTER] to Start")));
    }

    #[test]
    fn playing_scales_cells_by_block_size() {
        let mut state = GameState::with_source(ScriptedKinds::repeat(PieceKind::O));
        state.start_game();
        state.board_mut().set(2, 19, Cell::filled(palette::BLUE));

        let layout = Layout::new(25, 25, 500, 500);
        let mut canvas = Recorder::default();
        draw_scene(&state, &layout, &mut canvas);

        let strokes = canvas
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Stroke(..)))
            .count();
        assert_eq!(strokes, 200);
        assert!(canvas
            .calls
            .contains(&Call::Fill(50, 475, 25, 25, palette::BLUE)));
        // Active O at (4, 0).
        assert!(canvas
            .calls
            .contains(&Call::Fill(100, 0, 25, 25, palette::GREEN)));
        assert!(canvas
            .calls
            .contains(&Call::Text(layout.panel_x(), 0, "Score: 0".to_string())));
    }

    #[test]
    fn active_cells_above_top_are_skipped() {
        let mut state = GameState::with_source(ScriptedKinds::repeat(PieceKind::I));
        state.start_game();
        // Rows above the board never collide, so the vertical I can be lifted.
        assert!(state.try_move(0, -1));
        let layout = Layout::new(1, 1, 40, 22);
        let mut canvas = Recorder::default();
        draw_active(&state, &layout, &mut canvas);
        assert_eq!(canvas.calls.len(), 3);
        assert!(canvas.calls.iter().all(|c| match c {
            Call::Fill(x, y, ..) => *x == 4 && (0..3).contains(y),
            _ => false,
        }));
    }

    #[test]
    fn game_over_shows_final_score() {
        let mut state = GameState::with_source(ScriptedKinds::repeat(PieceKind::O));
        state.start_game();
        state.board_mut().set(4, 2, Cell::filled(palette::GRAY));
        state.tick(crate::types::FALL_INTERVAL_MS);
        assert!(state.is_game_over());

        let layout = Layout::new(25, 25, 500, 500);
        let mut canvas = Recorder::default();
        draw_scene(&state, &layout, &mut canvas);

        let text = "Final Score: 0";
        let expected_x = (500 - text.len() as i32 * 10) / 2;
        assert!(canvas
            .calls
            .contains(&Call::Text(expected_x, 250 - 25, text.to_string())));
    }
}

//! Game state module - the Menu / Playing / GameOver state machine
//!
//! `GameState` owns the board, the active piece, the piece factory, the fall
//! timer and the score. The frame loop feeds it one [`InputFrame`] per tick
//! through [`GameState::update`]; everything else here is the per-action API
//! that `update` is built from.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::piece::{Piece, PieceFactory};
use crate::rng::KindSource;
use crate::scoring::line_clear_score;
use crate::types::{CoreEvent, Flow, GameAction, InputFrame, Phase, FALL_INTERVAL_MS};

/// Events buffered between two drains. Oldest events are dropped past this.
pub const EVENT_CAPACITY: usize = 8;

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    factory: PieceFactory,
    phase: Phase,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    /// Accumulated time since the last gravity step.
    fall_timer_ms: u32,
    events: ArrayVec<CoreEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Create a game in the menu, drawing uniform kinds from `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_factory(PieceFactory::seeded(seed))
    }

    /// Create a game in the menu that spawns kinds from `source`.
    pub fn with_source(source: impl KindSource + 'static) -> Self {
        Self::with_factory(PieceFactory::new(Box::new(source)))
    }

    pub fn with_factory(factory: PieceFactory) -> Self {
        Self {
            board: Board::new(),
            active: None,
            factory,
            phase: Phase::Menu,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            fall_timer_ms: 0,
            events: ArrayVec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rows cleared since the current game started.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    /// The falling piece. `Some` exactly while playing.
    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions (tests, demos).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Events emitted since the last drain.
    pub fn events(&self) -> &[CoreEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> ArrayVec<CoreEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: CoreEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Advance one frame.
    ///
    /// While playing: left, right, soft drop, rotate, then gravity. In the
    /// menus Cancel beats Confirm.
    pub fn update(&mut self, input: &InputFrame) -> Flow {
        match self.phase {
            Phase::Menu | Phase::GameOver => {
                if input.is_pressed(GameAction::Cancel) {
                    return Flow::Exit;
                }
                if input.is_pressed(GameAction::Confirm) {
                    self.apply_action(GameAction::Confirm);
                }
            }
            Phase::Playing => {
                for action in [
                    GameAction::MoveLeft,
                    GameAction::MoveRight,
                    GameAction::SoftDrop,
                    GameAction::Rotate,
                ] {
                    if input.is_pressed(action) {
                        self.apply_action(action);
                    }
                }
                self.tick(input.elapsed_ms);
            }
        }
        Flow::Continue
    }

    /// Apply a single action. Returns whether it changed anything.
    ///
    /// `Cancel` never changes state; exiting is reported by [`GameState::update`].
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Confirm => match self.phase {
                Phase::Menu => {
                    self.start_game();
                    true
                }
                Phase::GameOver => {
                    self.return_to_menu();
                    true
                }
                Phase::Playing => false,
            },
            GameAction::Cancel => false,
        }
    }

    /// Menu → Playing: reset board, score and timer, then spawn.
    pub fn start_game(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.fall_timer_ms = 0;
        self.active = None;
        self.phase = Phase::Playing;
        self.emit(CoreEvent::GameStarted);
        self.spawn_piece();
    }

    /// GameOver → Menu. Board and score stay as they were until the next start.
    pub fn return_to_menu(&mut self) {
        self.phase = Phase::Menu;
        self.active = None;
        self.emit(CoreEvent::ReturnedToMenu);
    }

    /// Spawn the next piece, ending the game if it collides where it appears.
    /// Does nothing outside of play.
    pub(crate) fn spawn_piece(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let piece = self.factory.spawn();

        if piece.collides(&self.board) {
            self.active = None;
            self.phase = Phase::GameOver;
            self.emit(CoreEvent::GameOver {
                score: self.score,
                lines: self.lines,
            });
            return false;
        }

        self.active = Some(piece);
        self.emit(CoreEvent::Spawned {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
        });
        true
    }

    /// Move the active piece by (dx, dy) if the destination is free.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let Some(candidate) = active.shifted(dx, dy) else {
            return false;
        };
        if candidate.collides(&self.board) {
            return false;
        }

        self.active = Some(candidate);
        true
    }

    /// Rotate the active piece clockwise if the rotated grid fits at the same anchor.
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.rotated();
        if candidate.collides(&self.board) {
            return false;
        }

        self.active = Some(candidate);
        true
    }

    /// Gravity: accumulate elapsed time and step the piece down once the
    /// fall interval is reached. A blocked step locks the piece.
    ///
    /// Returns true when a gravity step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < FALL_INTERVAL_MS {
            return false;
        }
        self.fall_timer_ms = 0;

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Merge the active piece into the board, clear rows, score, and spawn the next.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(&active);
        let lines_cleared = self.board.clear_full_rows() as u32;

        self.score += line_clear_score(lines_cleared);
        self.lines += lines_cleared;
        self.pieces_locked += 1;

        self.emit(CoreEvent::Locked {
            kind: active.kind,
            x: active.x,
            y: active.y,
            lines_cleared,
            score: self.score,
        });

        self.spawn_piece();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

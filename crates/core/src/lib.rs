//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation logic.
//! It has no dependencies on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted kinds) produces identical games
//! - **Testable**: Unit tests for every rule, driven by plain input frames
//! - **Portable**: Draws through the [`Canvas`] trait, so any backend can render it
//!
//! # Module Structure
//!
//! - [`shapes`]: The seven piece shapes and their colors
//! - [`rotation`]: Clockwise grid rotation
//! - [`board`]: 10x20 board with collision detection and row clearing
//! - [`piece`]: Active piece and the factory that spawns it
//! - [`rng`]: Where new piece kinds come from
//! - [`scoring`]: Points per cleared row
//! - [`game_state`]: The Menu / Playing / GameOver state machine
//! - [`scene`]: Turns a state into draw calls
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: Every kind is equally likely on each spawn
//! - **Plain rotation**: Clockwise only, no wall kicks; a blocked rotation is dropped
//! - **Fixed gravity**: One row every 200ms, no levels, no lock delay
//! - **Scoring**: 100 points per cleared row
//! - **Game over**: A freshly spawned piece that overlaps the stack ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, ScriptedKinds};
//! use blockfall_types::{GameAction, InputFrame, PieceKind, Phase};
//!
//! let mut game = GameState::with_source(ScriptedKinds::repeat(PieceKind::O));
//! game.update(&InputFrame::new(16).with(GameAction::Confirm));
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! game.update(&InputFrame::new(16).with(GameAction::MoveRight));
//! assert_eq!(game.active().map(|p| p.x), Some(5));
//! ```
//!
//! # Timing
//!
//! Call [`GameState::update`] once per frame with the elapsed milliseconds in
//! the input frame. Gravity fires once the accumulated time reaches
//! [`types::FALL_INTERVAL_MS`].

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scene;
pub mod scoring;
pub mod shapes;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, EVENT_CAPACITY};
pub use piece::{spawn_column, Piece, PieceFactory};
pub use rng::{KindSource, ScriptedKinds, UniformKinds};
pub use rotation::rotate;
pub use scene::{draw_scene, Canvas, Layout};
pub use scoring::line_clear_score;
pub use shapes::{base_shape, piece_color, Shape};

//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout frameworks and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! - The core describes each frame through its `Canvas` trait; [`FrameBuffer`]
//!   implements that trait in character cells
//! - [`GameView`] places the board in the viewport (2 columns per block by
//!   default, so blocks look square)
//! - [`TerminalRenderer`] flushes only the cells that changed

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::TerminalRenderer;

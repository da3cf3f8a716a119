//! Terminal input module (core-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and folds the presses seen between
//! two ticks into one [`crate::types::InputFrame`].

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputCollector;
pub use map::{handle_key_event, should_quit};

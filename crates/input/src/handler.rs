//! Per-tick input collection for terminal environments.
//!
//! Terminals deliver key presses as discrete events between ticks. The
//! collector folds every press seen since the last tick into one
//! [`InputFrame`], so a key pressed once acts once. Terminals that report
//! releases (keyboard enhancement) send a `Release` event as well; those are
//! ignored. Auto-repeat events count as fresh presses.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::{GameAction, InputFrame};

/// Accumulates actions between ticks.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    pending: InputFrame,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. Returns the mapped action, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<GameAction> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let action = handle_key_event(key)?;
        self.pending.press(action);
        Some(action)
    }

    /// Record an action directly, bypassing the key map.
    pub fn press(&mut self, action: GameAction) {
        self.pending.press(action);
    }

    /// Hand out everything pressed since the last call, stamped with the
    /// time that passed, and start a fresh frame.
    pub fn take_frame(&mut self, elapsed_ms: u32) -> InputFrame {
        let mut frame = std::mem::take(&mut self.pending);
        frame.elapsed_ms = elapsed_ms;
        frame
    }
}

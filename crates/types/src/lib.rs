//! Shared types module - data structures and constants used across the workspace
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions serve the simulation core, the terminal renderer and the input
//! layer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame loop interval (~60 ticks per second) |
//! | `FALL_INTERVAL_MS` | 200 | Gravity step: one row every 0.2s |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, InputFrame, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.as_str(), "t");
//!
//! let frame = InputFrame::new(16).with(GameAction::MoveLeft);
//! assert!(frame.is_pressed(GameAction::MoveLeft));
//! assert!(!frame.is_pressed(GameAction::Rotate));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame loop interval in milliseconds (16ms ≈ 60 ticks per second)
pub const TICK_MS: u32 = 16;

/// Gravity interval: the active piece attempts to fall one row this often
pub const FALL_INTERVAL_MS: u32 = 200;

/// Points awarded per cleared row. Multi-row clears are a plain multiple.
pub const LINE_CLEAR_POINTS: u32 = 100;


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Named colors used by the game.
pub mod palette {
    use super::Rgb;

    pub const BLUE: Rgb = Rgb::new(0, 121, 241);
    pub const GREEN: Rgb = Rgb::new(0, 228, 48);
    pub const RED: Rgb = Rgb::new(230, 41, 55);
    pub const YELLOW: Rgb = Rgb::new(253, 249, 0);
    pub const PURPLE: Rgb = Rgb::new(200, 122, 255);
    pub const ORANGE: Rgb = Rgb::new(255, 161, 0);
    pub const MAROON: Rgb = Rgb::new(190, 33, 55);

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const GRAY: Rgb = Rgb::new(130, 130, 130);
    pub const DARK_GRAY: Rgb = Rgb::new(80, 80, 80);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Empty board cells and the playfield background.
    pub const BACKGROUND: Rgb = BLACK;
    /// Cell outlines on the playfield.
    pub const GRID: Rgb = GRAY;
    /// Score and menu text.
    pub const TEXT: Rgb = WHITE;
    /// Full-screen fill behind the menu and game over screens.
    pub const OVERLAY: Rgb = DARK_GRAY;
}

/// The seven piece kinds
///
/// Colors follow the game's palette:
/// - **I**: Blue, vertical bar
/// - **O**: Green, 2x2 square
/// - **T**: Red
/// - **S**: Yellow
/// - **Z**: Purple
/// - **J**: Orange
/// - **L**: Maroon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// A cell on the game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub occupied: bool,
    pub color: Rgb,
}

impl Cell {
    /// Unoccupied cell painted with the background color.
    pub const EMPTY: Cell = Cell {
        occupied: false,
        color: palette::BACKGROUND,
    };

    /// Occupied cell of the given color.
    pub const fn filled(color: Rgb) -> Self {
        Self {
            occupied: true,
            color,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Discrete inputs the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Start a game from the menu, or leave the game over screen
    Confirm,
    /// Exit from the menu or the game over screen
    Cancel,
}

impl GameAction {
    pub const COUNT: usize = 6;

    /// All actions in the order they are processed within a tick.
    pub const ALL: [GameAction; GameAction::COUNT] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::Confirm,
        GameAction::Cancel,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Everything the input collaborator reports for one tick.
///
/// Each action is either pressed this tick or not; repeated presses within a
/// tick collapse into one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pressed: [bool; GameAction::COUNT],
    /// Milliseconds since the previous tick.
    pub elapsed_ms: u32,
}

impl InputFrame {
    /// A frame with nothing pressed.
    pub fn new(elapsed_ms: u32) -> Self {
        Self {
            pressed: [false; GameAction::COUNT],
            elapsed_ms,
        }
    }

    pub fn with(mut self, action: GameAction) -> Self {
        self.press(action);
        self
    }

    pub fn press(&mut self, action: GameAction) {
        self.pressed[action.index()] = true;
    }

    pub fn is_pressed(&self, action: GameAction) -> bool {
        self.pressed[action.index()]
    }

    pub fn any_pressed(&self) -> bool {
        self.pressed.iter().any(|&p| p)
    }
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// What the frame loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Lifecycle notification emitted by the game state machine.
///
/// Observers (the event log) drain these after every update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    /// Menu → Playing: board and score were reset.
    GameStarted,
    /// A new active piece appeared at its spawn anchor.
    Spawned { kind: PieceKind, x: i8, y: i8 },
    /// The active piece was merged into the board.
    Locked {
        kind: PieceKind,
        x: i8,
        y: i8,
        lines_cleared: u32,
        score: u32,
    },
    /// A freshly spawned piece collided at its spawn position.
    GameOver { score: u32, lines: u32 },
    /// GameOver → Menu.
    ReturnedToMenu,
}

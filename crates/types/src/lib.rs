//! Shared types and rule constants
//!
//! Pure data with no game logic, usable by the core, by drivers and by
//! renderers alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn origin**: (3, 0), i.e. `(BOARD_WIDTH / 2 - 2, 0)`
//!
//! # Gravity Interval
//!
//! The core never schedules ticks itself. It exposes the interval a driver
//! should wait between ticks, derived from the level:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 500ms |
//! | 2 | 480ms |
//! | 10 | 320ms |
//! | 21+ | 100ms (floor) |
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.cell_value(), 3);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::from_index(5), Rotation::East);
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side of the square frame every piece shape is authored in
pub const PIECE_FRAME: usize = 4;

/// Spawn origin for new pieces (x, y)
pub const SPAWN_ORIGIN: (i8, i8) = ((BOARD_WIDTH / 2) as i8 - 2, 0);

/// Gravity interval at level 1
pub const BASE_TICK_MS: u32 = 500;

/// Interval reduction per level above 1
pub const TICK_STEP_MS: u32 = 20;

/// Fastest gravity interval regardless of level
pub const MIN_TICK_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear base points, indexed by lines cleared in one lock.
///
/// Multiplied by the level in effect before the clear.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Number of render frames a combo annotation stays visible
pub const COMBO_DISPLAY_TICKS: u32 = 30;

/// Anchor of the combo annotation, in board cell coordinates (board center)
pub const COMBO_ANCHOR: (i8, i8) = ((BOARD_WIDTH / 2) as i8, (BOARD_HEIGHT / 2) as i8);

/// 24-bit display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const DARK_YELLOW: Rgb = Rgb::new(128, 128, 0);
    pub const BRIGHT_RED: Rgb = Rgb::new(255, 50, 50);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven piece kinds
///
/// The declaration order is significant: it fixes the 1-based value a kind
/// leaves on the board when it locks (I = 1 ... L = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Zero-based catalog index
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by its zero-based catalog index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Value written into a board cell when this kind locks (1..=7, 0 is empty)
    pub fn cell_value(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`PieceKind::cell_value`]
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_cell_value(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_cell_value(7), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_cell_value(0), None);
    /// assert_eq!(PieceKind::from_cell_value(8), None);
    /// ```
    pub fn from_cell_value(value: u8) -> Option<Self> {
        match value {
            0 => None,
            v => Self::from_index(v as usize - 1),
        }
    }

    /// Display color used by renderers
    pub fn color(self) -> Rgb {
        match self {
            PieceKind::I => Rgb::CYAN,
            PieceKind::O => Rgb::YELLOW,
            PieceKind::T => Rgb::MAGENTA,
            PieceKind::S => Rgb::GREEN,
            PieceKind::Z => Rgb::RED,
            PieceKind::J => Rgb::BLUE,
            PieceKind::L => Rgb::DARK_YELLOW,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
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

/// Rotation state, as a number of clockwise quarter turns from spawn
///
/// The cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Quarter turns from spawn (0..=3)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Rotation reached after `turns` clockwise quarter turns from spawn
    pub fn from_index(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Lifecycle of one game
///
/// `GameOver` is terminal until a new game is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    GameOver,
}

/// Discrete player actions a driver can feed to the game
///
/// Gravity is not an action; drivers call `tick` separately at the
/// interval the game reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, without locking
    SoftDrop,
    /// Rotate piece 90° clockwise, rejected on collision
    Rotate,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Exchange the active piece with the held one
    Hold,
    /// Reset everything and start over
    NewGame,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("pause"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "hold" => Some(GameAction::Hold),
            "newgame" => Some(GameAction::NewGame),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Hold => "hold",
            GameAction::NewGame => "newGame",
        }
    }
}

/// Record of one lock, kept until an observer takes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points awarded for the clear (0 when nothing cleared)
    pub points: u32,
    /// Whether the piece spawned after this lock ended the game
    pub game_over: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_layout_constants() {
        assert_eq!(SPAWN_ORIGIN, (3, 0));
        assert_eq!(COMBO_ANCHOR, (5, 10));
        assert_eq!(LINE_SCORES.len(), 5);
    }
}

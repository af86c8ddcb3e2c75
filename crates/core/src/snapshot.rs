//! Read-only view of a game for renderers and other observers

use serde::Serialize;

use crate::game_state::ActivePiece;
use crate::pieces::{get_shape, Shape};
use crate::scoring::{tick_interval_ms, ComboAnnotation};
use crate::types::{GameStatus, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub shape: Shape,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            shape: *value.shape(),
        }
    }
}

impl Default for ActiveSnapshot {
    fn default() -> Self {
        Self::from(ActivePiece::spawn(PieceKind::I))
    }
}

impl ActiveSnapshot {
    /// Whether the snapshot's cached shape agrees with its kind and rotation
    pub fn is_consistent(&self) -> bool {
        self.shape == get_shape(self.kind, self.rotation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    /// 0 for empty, otherwise the 1-based kind that locked there
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub held: Option<PieceKind>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub status: GameStatus,
    pub combo: Option<ComboAnnotation>,
    pub tick_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot::default(),
            held: None,
            score: 0,
            level: 1,
            lines: 0,
            status: GameStatus::Playing,
            combo: None,
            tick_interval_ms: tick_interval_ms(1),
        }
    }
}

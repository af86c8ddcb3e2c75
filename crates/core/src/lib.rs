//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state transitions. It has no
//! dependency on rendering, input devices or timers:
//!
//! - **Deterministic**: the piece source is injected, so a seed (or a fixed
//!   sequence) reproduces a game exactly
//! - **Synchronous**: every operation runs to completion; the caller decides
//!   when gravity ticks happen
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shapes and their rotations
//! - [`board`]: 10x20 grid with row clearing and compaction
//! - [`scoring`]: points, levels, tick interval and combo feedback
//! - [`rng`]: piece sources (seeded uniform, fixed sequence)
//! - [`game_state`]: the game itself
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each spawn draws one of seven kinds with equal odds
//! - **Rotation**: clockwise only, no wall kicks; a colliding rotation is refused
//! - **Hold**: swaps with the held kind, any number of times per piece
//! - **Scoring**: 40/100/300/1200 times the level, level up every 10 lines
//!
//! # Example
//!
//! ```
//! use blocktris_core::GameState;
//! use blocktris_core::types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick();
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.tick_interval_ms(), 500);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, GameState};
pub use pieces::{get_shape, shape_for, Shape};
pub use rng::{PieceSource, SequencePieces, UniformPieces};
pub use scoring::{calculate_level, calculate_score, combo_for, tick_interval_ms, ComboAnnotation};
pub use snapshot::{ActiveSnapshot, GameSnapshot};

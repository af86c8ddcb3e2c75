//! Game state module - the rules of one game
//!
//! Owns the board, the active and held pieces, the score counters and the
//! status, and implements every transition on them: movement, rotation,
//! gravity, hard drop, hold, lock with line clearing, and game over.
//!
//! Nothing here knows about time. A driver calls [`GameState::tick`] at the
//! interval reported by [`GameState::tick_interval_ms`] and forwards player
//! actions in between; each call runs to completion before the next.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::pieces::{get_shape, Shape};
use crate::rng::{PieceSource, UniformPieces};
use crate::scoring::{calculate_level, calculate_score, combo_for, tick_interval_ms, ComboAnnotation};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// The falling piece
///
/// `shape` is cached and always matches `kind` at `rotation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    shape: Shape,
}

impl ActivePiece {
    /// A piece of `kind` at the spawn origin, unrotated
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_ORIGIN;
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
            shape: get_shape(kind, Rotation::North),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Board coordinates of every occupied cell
    ///
    /// Saturates at the `i8` range, which always lands outside the side walls
    /// or the floor, so an out-of-range origin reads as a collision.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (x, y) = (self.x, self.y);
        self.shape
            .minos()
            .map(move |(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
    }

    /// `None` when the moved frame would leave the `i8` coordinate range.
    fn translated(&self, dx: i8, dy: i8) -> Option<Self> {
        let far = PIECE_FRAME as i8 - 1;
        let x = self.x.checked_add(dx)?;
        let y = self.y.checked_add(dy)?;
        x.checked_add(far)?;
        y.checked_add(far)?;
        Some(Self { x, y, ..*self })
    }

    fn rotated_cw(&self) -> Self {
        let rotation = self.rotation.rotate_cw();
        Self {
            rotation,
            shape: get_shape(self.kind, rotation),
            ..*self
        }
    }

    /// Whether any cell leaves the side walls or the floor, or overlaps a
    /// locked cell. Cells above the top edge never collide.
    pub fn collides(&self, board: &Board) -> bool {
        self.cells().any(|(x, y)| {
            x < 0
                || x >= BOARD_WIDTH as i8
                || y >= BOARD_HEIGHT as i8
                || (y >= 0 && board.is_occupied(x, y))
        })
    }
}

/// Complete game state
///
/// Generic over where new pieces come from; [`GameState::new`] uses a seeded
/// uniform source.
#[derive(Debug, Clone)]
pub struct GameState<S = UniformPieces> {
    board: Board,
    active: ActivePiece,
    held: Option<PieceKind>,
    source: S,
    score: u32,
    level: u32,
    lines: u32,
    status: GameStatus,
    combo: Option<ComboAnnotation>,
    /// Last lock (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<UniformPieces> {
    /// Start a game drawing uniformly random pieces from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_source(UniformPieces::new(seed))
    }
}

impl Default for GameState<UniformPieces> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Start a game drawing pieces from `source`
    pub fn with_source(source: S) -> Self {
        let mut state = Self {
            board: Board::new(),
            active: ActivePiece::spawn(PieceKind::I),
            held: None,
            source,
            score: 0,
            level: 1,
            lines: 0,
            status: GameStatus::Playing,
            combo: None,
            last_event: None,
        };
        state.new_game();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.held
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Combo annotation currently on display, if any
    pub fn combo(&self) -> Option<&ComboAnnotation> {
        self.combo.as_ref()
    }

    /// How long a driver should wait before the next [`GameState::tick`]
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(self.level)
    }

    /// Reset board, counters and hold, then spawn a fresh piece
    pub fn new_game(&mut self) {
        self.board.clear();
        self.held = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.status = GameStatus::Playing;
        self.combo = None;
        self.last_event = None;
        self.spawn_piece();
        info!(kind = self.active.kind.as_str(), "new game");
    }

    /// Gravity step: move down one row, or lock if the piece is resting.
    ///
    /// Returns true if the piece fell.
    pub fn tick(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_piece();
        false
    }

    /// Translate the active piece, rejecting the move on collision
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.is_game_over() {
            return false;
        }

        let Some(moved) = self.active.translated(dx, dy) else {
            return false;
        };
        if moved.collides(&self.board) {
            return false;
        }
        self.active = moved;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// One row down. Never locks, even when blocked.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate a quarter turn clockwise in place.
    ///
    /// There is no kick search: if the rotated shape collides at the same
    /// origin the rotation is rejected and the piece is left untouched.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        let rotated = self.active.rotated_cw();
        if rotated.collides(&self.board) {
            return false;
        }
        self.active = rotated;
        true
    }

    /// Drop to the lowest reachable row and lock. Returns rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        if self.is_game_over() {
            return 0;
        }

        let mut rows = 0;
        while self.try_move(0, 1) {
            rows += 1;
        }
        self.lock_piece();
        rows
    }

    /// Exchange the active piece with the held one.
    ///
    /// With nothing held, the active kind is stored and a new piece spawns.
    /// Otherwise the kinds swap and the incoming piece restarts at the spawn
    /// origin, unrotated. Usable any number of times per piece.
    pub fn hold(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        let current = self.active.kind;
        match self.held.replace(current) {
            Some(held) => self.active = ActivePiece::spawn(held),
            None => self.spawn_piece(),
        }
        trace!(
            held = current.as_str(),
            active = self.active.kind.as_str(),
            "hold"
        );

        self.check_game_over();
        true
    }

    /// Commit the active piece to the board, clear full rows, score them and
    /// bring in the next piece.
    pub fn lock_piece(&mut self) {
        if self.is_game_over() {
            return;
        }

        let kind = self.active.kind;
        for (x, y) in self.active.cells() {
            // Cells still above the visible board are dropped.
            if y < 0 {
                continue;
            }
            let written = self.board.set(x, y, Some(kind));
            debug_assert!(written, "locked cell ({x}, {y}) outside the board");
        }

        let lines_cleared = self.board.clear_full_rows();
        let points = calculate_score(lines_cleared, self.level);
        if lines_cleared > 0 {
            self.score = self.score.saturating_add(points);
            self.lines += lines_cleared as u32;
            self.level = calculate_level(self.lines);
            if let Some(combo) = combo_for(lines_cleared) {
                self.combo = Some(combo);
            }
        }
        debug!(
            kind = kind.as_str(),
            lines_cleared,
            points,
            score = self.score,
            level = self.level,
            "piece locked"
        );

        self.spawn_piece();
        self.check_game_over();

        self.last_event = Some(LockEvent {
            lines_cleared: lines_cleared as u32,
            points,
            game_over: self.is_game_over(),
        });
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Count the combo annotation down by one displayed frame, dropping it
    /// once it expires. Called by whatever renders it.
    pub fn decay_combo(&mut self) {
        if let Some(combo) = self.combo.as_mut() {
            if !combo.decay() {
                self.combo = None;
            }
        }
    }

    /// Apply a player action; returns false if it was rejected
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => {
                if self.is_game_over() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Hold => self.hold(),
            GameAction::NewGame => {
                self.new_game();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = ActiveSnapshot::from(self.active);
        out.held = self.held;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.status = self.status;
        out.combo = self.combo;
        out.tick_interval_ms = self.tick_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn spawn_piece(&mut self) {
        let kind = self.source.next_kind();
        self.active = ActivePiece::spawn(kind);
        trace!(kind = kind.as_str(), "spawned");
    }

    /// A freshly spawned piece that already overlaps the stack ends the game.
    fn check_game_over(&mut self) {
        if self.active.collides(&self.board) {
            self.status = GameStatus::GameOver;
            info!(score = self.score, level = self.level, lines = self.lines, "game over");
        }
    }
}

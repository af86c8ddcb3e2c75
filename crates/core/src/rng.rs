//! RNG module - where new piece kinds come from
//!
//! The game never generates randomness itself. It draws from a [`PieceSource`]
//! handed to it at construction, so tests and replays can substitute a fixed
//! sequence for the seeded uniform generator used in normal play.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::PieceKind;

/// Supplier of piece kinds for spawning
pub trait PieceSource {
    /// Draw the next kind to spawn
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform draws over all seven kinds
///
/// Wraps `ChaCha8Rng` so that a given seed yields the same sequence on every
/// platform.
#[derive(Debug, Clone)]
pub struct UniformPieces {
    rng: ChaCha8Rng,
}

impl UniformPieces {
    /// Deterministic source for the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible source seeded from the OS
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl Default for UniformPieces {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for UniformPieces {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// Replays a fixed list of kinds, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequencePieces {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl SequencePieces {
    /// Cycle through `kinds` in order. An empty list always yields `I`.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            kinds: kinds.into(),
            next: 0,
        }
    }
}

impl PieceSource for SequencePieces {
    fn next_kind(&mut self) -> PieceKind {
        let Some(&kind) = self.kinds.get(self.next) else {
            return PieceKind::I;
        };
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

//! RNG module - where new piece kinds come from
//!
//! The factory asks a [`KindSource`] for each new kind. Gameplay uses
//! [`UniformKinds`], a plain uniform pick over the seven kinds (no bag, no
//! history). Tests and demos use [`ScriptedKinds`] to replay a fixed sequence.

use std::fmt;

use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    SeedableRng,
};

use crate::types::PieceKind;

/// Supplies the kind of each newly spawned piece.
pub trait KindSource: fmt::Debug {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniformly random piece kinds.
#[derive(Debug, Clone)]
pub struct UniformKinds {
    rng: StdRng,
    uniform: Uniform<usize>,
}

impl UniformKinds {
    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            uniform: Uniform::from(0..PieceKind::ALL.len()),
        }
    }
}

impl KindSource for UniformKinds {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.uniform.sample(&mut self.rng)]
    }
}

/// Replays a fixed list of kinds, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedKinds {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl ScriptedKinds {
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "scripted kind list must not be empty");
        Self { kinds, next: 0 }
    }

    /// Always the same kind.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl KindSource for ScriptedKinds {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

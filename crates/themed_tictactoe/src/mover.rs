//! First-mover selection.
//!
//! Each new game picks its opening role through a [`FirstMover`], so the
//! engine stays deterministic under test.

use crate::types::Role;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Source of the role that opens a new game.
pub trait FirstMover: std::fmt::Debug {
    /// Picks the opening role.
    fn pick(&mut self) -> Role;
}

/// Picks X or O with equal probability.
#[derive(Debug, Clone)]
pub struct RandomFirstMover<R = StdRng> {
    rng: R,
}

impl RandomFirstMover<StdRng> {
    /// Seeds from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeds deterministically.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomFirstMover<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng + std::fmt::Debug> FirstMover for RandomFirstMover<R> {
    #[instrument(skip(self))]
    fn pick(&mut self) -> Role {
        Role::from_is_x(self.rng.gen_bool(0.5))
    }
}

/// Always opens with the same role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFirstMover(pub Role);

impl FirstMover for FixedFirstMover {
    fn pick(&mut self) -> Role {
        self.0
    }
}

/// Replays a fixed sequence of roles, cycling when exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedFirstMover {
    roles: Vec<Role>,
    next: usize,
}

impl ScriptedFirstMover {
    /// Creates a script. An empty script always yields X.
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles, next: 0 }
    }
}

impl FirstMover for ScriptedFirstMover {
    fn pick(&mut self) -> Role {
        if self.roles.is_empty() {
            return Role::X;
        }
        let role = self.roles[self.next % self.roles.len()];
        self.next += 1;
        role
    }
}

impl<M: FirstMover + ?Sized> FirstMover for Box<M> {
    fn pick(&mut self) -> Role {
        (**self).pick()
    }
}

//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. The engine checks them in debug builds (or with the
//! `verification` feature); tests can check them directly.

pub mod alternating_mover;
pub mod board_matches_history;
pub mod monotonic_history;

pub use alternating_mover::AlternatingMoverInvariant;
pub use board_matches_history::BoardMatchesHistoryInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    MonotonicHistoryInvariant,
    AlternatingMoverInvariant,
    BoardMatchesHistoryInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedFirstMover, GameEngine, Role};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = GameEngine::with_first_mover(FixedFirstMover(Role::X));
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jump() {
        let mut engine = GameEngine::with_first_mover(FixedFirstMover(Role::O));
        for index in [4, 0, 8, 2] {
            engine.play_move(index);
        }
        assert!(EngineInvariants::check_all(&engine).is_ok());

        engine.jump_to_move(2).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_theme_change_and_reset() {
        let mut engine = GameEngine::with_first_mover(FixedFirstMover(Role::X));
        for index in [0, 4, 8] {
            engine.play_move(index);
        }
        engine.select_theme(1).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());

        engine.play_move(4);
        engine.reset_game();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::with_first_mover(FixedFirstMover(Role::X));
        type TwoInvariants = (MonotonicHistoryInvariant, AlternatingMoverInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}

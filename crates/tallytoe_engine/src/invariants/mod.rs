//! First-class invariants for the board engine.
//!
//! Invariants are logical properties that must hold after every successful
//! placement. [`crate::Game::place_mark`] checks the full set in debug
//! builds, and each invariant is testable on its own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
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
/// Implemented for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
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
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

pub mod alternating_turn;
pub mod move_count;
pub mod tally_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use move_count::MoveCountInvariant;
pub use tally_consistent::TallyConsistentInvariant;

/// All engine invariants as a composable set.
pub type GameInvariants = (
    TallyConsistentInvariant,
    MoveCountInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Coord, Game};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let game = Game::default();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let coords = [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 0)];
        let game = Game::replay(BoardSize::CLASSIC, &coords).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::replay(BoardSize::new(5).unwrap(), &[Coord::new(4, 0)]).unwrap();

        type TwoInvariants = (TallyConsistentInvariant, MoveCountInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation::new("tallies drifted");
        assert_eq!(violation.to_string(), "tallies drifted");
    }
}

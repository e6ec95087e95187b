//! Engine error types.
//!
//! All engine failures are explicit result values. The presentation layer
//! decides user-visible behavior (declining an input, flashing an indicator);
//! the engine only reports what went wrong and leaves state unchanged.

use thiserror::Error;

use super::config::{MAX_DISKS, MIN_DISKS};
use super::rod::RodIndex;

/// Errors reported by the puzzle engine.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Attempted move violates the stacking or in-transit rules.
    ///
    /// Recovered locally: the move is rejected and the state is unchanged.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: RodIndex, to: RodIndex },

    /// Pop from a rod with no disks.
    ///
    /// Unreachable behind the legality checks; surfaced defensively instead
    /// of panicking because this predicate guards every state mutation.
    #[error("{rod} has no disks to remove")]
    EmptyRod { rod: RodIndex },

    /// Disk count outside the supported range.
    #[error("disk count {requested} is outside the supported range {}..={}", MIN_DISKS, MAX_DISKS)]
    InvalidDiskCount { requested: u8 },

    /// The solver exhausted the state space without reaching a win.
    ///
    /// Every legal three-rod configuration is solvable, so this indicates a
    /// broken invariant elsewhere. Logged as a defect at the call site.
    #[error("no sequence of legal moves reaches the destination rod")]
    SolverUnreachable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::IllegalMove {
            from: RodIndex::new(0),
            to: RodIndex::new(2),
        };
        assert_eq!(format!("{}", err), "illegal move from Rod(0) to Rod(2)");

        let err = EngineError::EmptyRod { rod: RodIndex::new(1) };
        assert_eq!(format!("{}", err), "Rod(1) has no disks to remove");

        let err = EngineError::InvalidDiskCount { requested: 11 };
        assert_eq!(
            format!("{}", err),
            "disk count 11 is outside the supported range 3..=10"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(EngineError::SolverUnreachable, EngineError::SolverUnreachable);
        assert_ne!(
            EngineError::EmptyRod { rod: RodIndex::new(0) },
            EngineError::EmptyRod { rod: RodIndex::new(1) },
        );
    }
}

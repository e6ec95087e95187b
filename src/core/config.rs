//! Puzzle configuration.
//!
//! The engine never hardcodes a disk count; callers configure it at session
//! creation (or via the difficulty setter) within the supported range. The
//! range bound is what keeps the solver's exhaustive search tractable.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Number of rods. The rules, solver, and generator all assume exactly three.
pub const ROD_COUNT: usize = 3;

/// Smallest supported disk count.
pub const MIN_DISKS: u8 = 3;

/// Largest supported disk count.
///
/// The solver enumerates rod configurations exhaustively; the state space is
/// bounded by `3^n`, so 10 disks caps it at 59049 states.
pub const MAX_DISKS: u8 = 10;

/// Configuration for a puzzle session.
///
/// ## Example
///
/// ```
/// use hanoi_core::core::PuzzleConfig;
///
/// let config = PuzzleConfig::new(5).with_seed(42);
/// assert!(config.validate().is_ok());
/// assert!(PuzzleConfig::new(11).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Number of disks, validated against `MIN_DISKS..=MAX_DISKS`.
    pub num_disks: u8,

    /// Seed for the session RNG. Same seed, same randomized deals.
    pub seed: u64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            num_disks: MIN_DISKS,
            seed: 0,
        }
    }
}

impl PuzzleConfig {
    /// Create a configuration with the given disk count.
    #[must_use]
    pub fn new(num_disks: u8) -> Self {
        Self {
            num_disks,
            ..Self::default()
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the disk count against the supported range.
    pub fn validate(&self) -> Result<(), EngineError> {
        if (MIN_DISKS..=MAX_DISKS).contains(&self.num_disks) {
            Ok(())
        } else {
            Err(EngineError::InvalidDiskCount {
                requested: self.num_disks,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PuzzleConfig::default();
        assert_eq!(config.num_disks, MIN_DISKS);
        assert_eq!(config.seed, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(PuzzleConfig::new(3).validate().is_ok());
        assert!(PuzzleConfig::new(10).validate().is_ok());

        assert_eq!(
            PuzzleConfig::new(2).validate(),
            Err(EngineError::InvalidDiskCount { requested: 2 })
        );
        assert_eq!(
            PuzzleConfig::new(11).validate(),
            Err(EngineError::InvalidDiskCount { requested: 11 })
        );
        assert_eq!(
            PuzzleConfig::new(0).validate(),
            Err(EngineError::InvalidDiskCount { requested: 0 })
        );
    }

    #[test]
    fn test_builder_seed() {
        let config = PuzzleConfig::new(4).with_seed(7);
        assert_eq!(config.num_disks, 4);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_serialization() {
        let config = PuzzleConfig::new(6).with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PuzzleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

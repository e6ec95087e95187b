//! Core engine types: disks, rods, state, configuration, RNG, errors.
//!
//! This module contains the fundamental building blocks. Higher-level
//! components (rules, solver, generator, history, session) compose them.

pub mod config;
pub mod disk;
pub mod error;
pub mod rng;
pub mod rod;
pub mod state;

pub use config::{PuzzleConfig, MAX_DISKS, MIN_DISKS, ROD_COUNT};
pub use disk::{Disk, DiskId, TransitState};
pub use error::EngineError;
pub use rng::PuzzleRng;
pub use rod::{Rod, RodIndex};
pub use state::{PuzzleState, SizeStack, StateKey};

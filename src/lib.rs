//! # hanoi-core
//!
//! Logical engine for an interactive three-rod disk-stacking puzzle:
//! arbitrary destination rod, randomizable legal starting layouts, variable
//! disk count.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: every function takes and returns `PuzzleState`;
//!    nothing reaches into ambient globals.
//!
//! 2. **Engine-owned concurrency signal**: a move commits logically before
//!    its visual transit completes. The per-disk transit tag and the
//!    effective-top legality rule live here, not in the renderer.
//!
//! 3. **Typed failures**: engine errors are explicit result values; the
//!    presentation layer decides user-visible behavior.
//!
//! ## Architecture
//!
//! - **Bounded search**: the optimal-move solver enumerates the `3^n` rod
//!   configurations breadth-first; the supported disk range (3–10) keeps
//!   that exhaustive by construction.
//!
//! - **Snapshot history**: undo restores deep copies of logical state, not
//!   visual animation. The stack never drops below its seed entry.
//!
//! ## Modules
//!
//! - `core`: disks, rods, state, configuration, RNG, errors
//! - `rules`: move legality, move application, win detection
//! - `solver`: minimum-move computation (closed form + BFS)
//! - `generator`: randomized solvable layout generation
//! - `history`: snapshot stack for undo
//! - `session`: the façade the presentation layer drives
//!
//! ## Example
//!
//! ```
//! use hanoi_core::core::{PuzzleConfig, RodIndex};
//! use hanoi_core::session::GameSession;
//!
//! let mut session = GameSession::new(PuzzleConfig::new(3)).unwrap();
//! assert_eq!(session.optimal_moves(), 7);
//!
//! // The input layer asks before committing
//! assert!(session.can_move(RodIndex::new(0), RodIndex::new(2)));
//!
//! let disk = session.try_move(RodIndex::new(0), RodIndex::new(2)).unwrap();
//!
//! // The animation layer reports the transit finishing
//! assert!(session.complete_transit(disk));
//! assert_eq!(session.move_count(), 1);
//! ```

pub mod core;
pub mod generator;
pub mod history;
pub mod rules;
pub mod session;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{
    Disk, DiskId, EngineError, PuzzleConfig, PuzzleRng, PuzzleState, Rod, RodIndex, SizeStack,
    StateKey, TransitState, MAX_DISKS, MIN_DISKS, ROD_COUNT,
};

pub use crate::rules::{apply_move, check_win, legal_move, legal_moves};

pub use crate::solver::{minimum_moves, standard_minimum_moves};

pub use crate::generator::randomize;

pub use crate::history::{HistoryStack, Snapshot};

pub use crate::session::GameSession;

//! Snapshot history for undo of logical state.
//!
//! Snapshots are deep, structurally independent copies of the rod contents
//! and the move counter, immutable once pushed. The stack is never emptied
//! below its seed entry: the last entry always describes the currently
//! displayed logical state, so there is always something to display.
//!
//! Copy-on-push is O(disks) per move. With at most ten disks that is a
//! deliberate simplicity-over-efficiency tradeoff, not an oversight; the
//! persistent vector keeps the stack itself cheap to clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{PuzzleState, Rod, RodIndex, ROD_COUNT};

/// An immutable copy of full rod contents and move count at a point in time.
///
/// Equality is structural. Snapshots store settled state: transit tags are
/// normalized on capture, and undo is gated on no pending transits, so a
/// restore can never resurrect an in-flight move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    rods: [Rod; ROD_COUNT],
    destination: RodIndex,
    move_count: u32,
}

impl Snapshot {
    /// Capture the current logical state.
    #[must_use]
    pub fn capture(state: &PuzzleState, move_count: u32) -> Self {
        let mut rods = state.rods_array().clone();
        for rod in &mut rods {
            rod.settle_all();
        }
        Self {
            rods,
            destination: state.destination(),
            move_count,
        }
    }

    /// Rebuild the puzzle state this snapshot describes.
    #[must_use]
    pub fn restore(&self) -> PuzzleState {
        PuzzleState::from_parts(self.rods.clone(), self.destination)
    }

    /// The move counter value at capture time.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
}

/// Ordered stack of snapshots, oldest first.
///
/// ## Example
///
/// ```
/// use hanoi_core::core::PuzzleState;
/// use hanoi_core::history::{HistoryStack, Snapshot};
///
/// let state = PuzzleState::new(3).unwrap();
/// let mut history = HistoryStack::new();
/// history.push(Snapshot::capture(&state, 0));
///
/// // The seed entry is never popped
/// assert!(history.pop().is_none());
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HistoryStack {
    entries: Vector<Snapshot>,
}

impl HistoryStack {
    /// Create an empty history.
    ///
    /// Callers seed it with the initial state immediately after creation
    /// (and after every clear); the engine's session does exactly that.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot. Never fails.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push_back(snapshot);
    }

    /// Remove and return the current (last) entry.
    ///
    /// Returns `None` without modifying anything when only the seed entry
    /// remains, preserving the never-empty invariant.
    pub fn pop(&mut self) -> Option<Snapshot> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop_back()
    }

    /// Drop every entry.
    ///
    /// Used only by reset/randomize, which push the new initial state
    /// immediately afterwards.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the history holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry describing the currently displayed logical state.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.last()
    }
}

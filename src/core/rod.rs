//! Rods: ordered disk stacks.
//!
//! A rod is a bottom-to-top stack of disks plus a flag marking the win
//! target. Index 0 is the bottom, the last index is the top. The stack
//! primitives here are the only mutators; every higher-level operation
//! composes them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::MAX_DISKS;
use super::disk::Disk;

/// Identifier for one of the three rods.
///
/// Rod indices are 0-based and always valid: construction asserts the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RodIndex(pub u8);

impl RodIndex {
    /// All three rod indices, left to right.
    pub const ALL: [RodIndex; 3] = [RodIndex(0), RodIndex(1), RodIndex(2)];

    /// Create a new rod index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 3, "rod index out of range");
        Self(index)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RodIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rod({})", self.0)
    }
}

/// An ordered stack of disks, bottom to top.
///
/// The backing store never heap-allocates: the disk count is bounded by
/// `MAX_DISKS`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rod {
    disks: SmallVec<[Disk; MAX_DISKS as usize]>,
    is_destination: bool,
}

impl Rod {
    /// Create a new empty rod.
    #[must_use]
    pub fn new(is_destination: bool) -> Self {
        Self {
            disks: SmallVec::new(),
            is_destination,
        }
    }

    /// Check whether this rod is the win target.
    #[must_use]
    pub fn is_destination(&self) -> bool {
        self.is_destination
    }

    /// Get the disk nearest the open end, if any.
    #[must_use]
    pub fn top_disk(&self) -> Option<&Disk> {
        self.disks.last()
    }

    /// Place a disk on top of the stack.
    pub fn push_disk(&mut self, disk: Disk) {
        self.disks.push(disk);
    }

    /// Remove and return the top disk, or `None` if the rod is empty.
    ///
    /// The state-level accessor maps `None` to `EngineError::EmptyRod`.
    pub fn pop_disk(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    /// Get the number of disks on this rod.
    #[must_use]
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Check whether the rod holds no disks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Get the disks in order, bottom to top.
    #[must_use]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Check the stacking invariant: sizes strictly decrease bottom to top.
    #[must_use]
    pub fn is_strictly_decreasing(&self) -> bool {
        self.disks
            .windows(2)
            .all(|pair| pair[0].size() > pair[1].size())
    }

    /// Sizes in order, bottom to top.
    #[must_use]
    pub fn size_sequence(&self) -> SmallVec<[u8; MAX_DISKS as usize]> {
        self.disks.iter().map(Disk::size).collect()
    }

    /// Clear every disk's transit tag.
    ///
    /// Used when capturing snapshots, which store settled state only.
    pub(crate) fn settle_all(&mut self) {
        for disk in &mut self.disks {
            disk.settle();
        }
    }

    pub(crate) fn disks_mut(&mut self) -> &mut [Disk] {
        &mut self.disks
    }
}

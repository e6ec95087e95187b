//! Puzzle state: three rods, the full disk set, and the invariants that
//! must hold after every transition.
//!
//! ## Invariants
//!
//! 1. Within every rod, disk sizes strictly decrease from bottom to top.
//! 2. The disks across all rods are the full disk set, each exactly once.
//! 3. Exactly one rod is the destination.
//!
//! The state is mutated only by the rule engine's move application and by
//! history restore; reset and randomize replace it wholesale. All functions
//! take and return explicit state, never ambient globals.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{MAX_DISKS, PuzzleConfig, ROD_COUNT};
use super::disk::{Disk, DiskId};
use super::error::EngineError;
use super::rod::{Rod, RodIndex};

/// Per-rod size sequence, bottom to top. Never heap-allocates.
pub type SizeStack = SmallVec<[u8; MAX_DISKS as usize]>;

/// Canonical encoding of a rod configuration.
///
/// Two states with equal keys hold the same sizes in the same places. The
/// solver uses keys as search nodes and visited-set entries; transit tags and
/// disk identities are deliberately not part of the encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    pub(crate) stacks: [SizeStack; ROD_COUNT],
}

impl StateKey {
    /// Per-rod size sequences, bottom to top.
    #[must_use]
    pub fn stacks(&self) -> &[SizeStack; ROD_COUNT] {
        &self.stacks
    }
}

/// Full logical puzzle state.
///
/// ## Example
///
/// ```
/// use hanoi_core::core::{PuzzleState, RodIndex};
///
/// let state = PuzzleState::new(3).unwrap();
///
/// // Canonical start: every disk on rod 0, largest at the bottom
/// assert_eq!(state.rod(RodIndex::new(0)).len(), 3);
/// assert_eq!(state.destination(), RodIndex::new(2));
/// assert!(state.is_well_formed());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    rods: [Rod; ROD_COUNT],
    num_disks: u8,
    destination: RodIndex,
}

impl PuzzleState {
    /// Create the canonical starting state: all disks stacked largest-first
    /// on rod 0, destination rod 2.
    pub fn new(num_disks: u8) -> Result<Self, EngineError> {
        PuzzleConfig::new(num_disks).validate()?;

        let mut state = Self::empty(num_disks, RodIndex::new(2));
        for id in 0..num_disks {
            let size = num_disks - id;
            state.rods[0].push_disk(Disk::new(DiskId::new(id), size));
        }
        Ok(state)
    }

    /// Build a state from explicit per-rod size sequences (bottom to top).
    ///
    /// Disk identities are assigned by size: the largest disk gets id 0.
    /// Intended for presentation layers restoring a saved board and for
    /// tests constructing mid-game positions.
    ///
    /// Panics if any rod violates the stacking invariant, or if the sizes
    /// across rods are not exactly `1..=n` for a total count `n` within
    /// `1..=MAX_DISKS`.
    #[must_use]
    pub fn from_layout(layout: [&[u8]; ROD_COUNT], destination: RodIndex) -> Self {
        let total: usize = layout.iter().map(|rod| rod.len()).sum();
        assert!(
            (1..=MAX_DISKS as usize).contains(&total),
            "layout must hold between 1 and {} disks",
            MAX_DISKS
        );

        let num_disks = total as u8;
        let mut seen = [false; MAX_DISKS as usize];
        let mut state = Self::empty(num_disks, destination);

        for (rod_index, sizes) in layout.iter().enumerate() {
            for pair in sizes.windows(2) {
                assert!(
                    pair[0] > pair[1],
                    "layout rod {} violates the stacking invariant",
                    rod_index
                );
            }
            for &size in *sizes {
                assert!(
                    (1..=num_disks).contains(&size) && !seen[size as usize - 1],
                    "layout sizes must be 1..={} each exactly once",
                    num_disks
                );
                seen[size as usize - 1] = true;
                let id = DiskId::new(num_disks - size);
                state.rods[rod_index].push_disk(Disk::new(id, size));
            }
        }

        state
    }

    /// Create a state with the given destination and no disks placed yet.
    pub(crate) fn empty(num_disks: u8, destination: RodIndex) -> Self {
        let rods = [
            Rod::new(destination.index() == 0),
            Rod::new(destination.index() == 1),
            Rod::new(destination.index() == 2),
        ];
        Self {
            rods,
            num_disks,
            destination,
        }
    }

    /// Rebuild a state from previously captured rods.
    pub(crate) fn from_parts(rods: [Rod; ROD_COUNT], destination: RodIndex) -> Self {
        let num_disks = rods.iter().map(Rod::len).sum::<usize>() as u8;
        Self {
            rods,
            num_disks,
            destination,
        }
    }

    /// Get the configured disk count.
    #[must_use]
    pub fn num_disks(&self) -> u8 {
        self.num_disks
    }

    /// Get the destination rod index.
    #[must_use]
    pub fn destination(&self) -> RodIndex {
        self.destination
    }

    /// Get a rod by index.
    #[must_use]
    pub fn rod(&self, index: RodIndex) -> &Rod {
        &self.rods[index.index()]
    }

    pub(crate) fn rods_array(&self) -> &[Rod; ROD_COUNT] {
        &self.rods
    }

    // === Primitive stack operations ===

    /// Get the disk nearest the open end of a rod, or `None` if empty.
    #[must_use]
    pub fn top_disk(&self, rod: RodIndex) -> Option<&Disk> {
        self.rods[rod.index()].top_disk()
    }

    /// Place a disk on top of a rod.
    pub fn push_disk(&mut self, rod: RodIndex, disk: Disk) {
        self.rods[rod.index()].push_disk(disk);
    }

    /// Remove and return the top disk of a rod.
    pub fn pop_disk(&mut self, rod: RodIndex) -> Result<Disk, EngineError> {
        self.rods[rod.index()]
            .pop_disk()
            .ok_or(EngineError::EmptyRod { rod })
    }

    // === Queries ===

    /// Total disks currently placed across all rods.
    #[must_use]
    pub fn total_disks(&self) -> usize {
        self.rods.iter().map(Rod::len).sum()
    }

    /// Check whether any disk's committed move is still in transit.
    #[must_use]
    pub fn any_in_transit(&self) -> bool {
        self.rods
            .iter()
            .any(|rod| rod.disks().iter().any(Disk::is_in_transit))
    }

    /// Locate a disk by identity.
    #[must_use]
    pub fn find_disk(&self, id: DiskId) -> Option<(RodIndex, &Disk)> {
        for index in RodIndex::ALL {
            if let Some(disk) = self.rod(index).disks().iter().find(|d| d.id == id) {
                return Some((index, disk));
            }
        }
        None
    }

    /// Clear a disk's transit tag after its completion notification.
    ///
    /// Returns true if the disk was found with a pending transit; false for
    /// unknown disks or stale notifications, so callers can spot them.
    pub fn settle_disk(&mut self, id: DiskId) -> bool {
        for rod in &mut self.rods {
            if let Some(disk) = rod.disks_mut().iter_mut().find(|d| d.id == id) {
                let was_pending = disk.is_in_transit();
                disk.settle();
                return was_pending;
            }
        }
        false
    }

    /// Verify the full state invariant.
    ///
    /// Checked by tests after every transition and by the solver before
    /// searching; a false result anywhere is a defect.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        if self.total_disks() != self.num_disks as usize {
            return false;
        }
        if !self.rods.iter().all(Rod::is_strictly_decreasing) {
            return false;
        }

        // Exactly one destination flag, agreeing with the index
        let flagged: Vec<_> = RodIndex::ALL
            .iter()
            .filter(|&&index| self.rod(index).is_destination())
            .collect();
        if flagged.len() != 1 || *flagged[0] != self.destination {
            return false;
        }

        // The disks are 1..=n by size and 0..n by id, each exactly once,
        // with id and size in agreement
        let mut seen = [false; MAX_DISKS as usize];
        for rod in &self.rods {
            for disk in rod.disks() {
                let size = disk.size();
                if !(1..=self.num_disks).contains(&size) || seen[size as usize - 1] {
                    return false;
                }
                if disk.id != DiskId::new(self.num_disks - size) {
                    return false;
                }
                seen[size as usize - 1] = true;
            }
        }
        true
    }

    /// Canonical per-rod size-sequence encoding of this configuration.
    #[must_use]
    pub fn solver_key(&self) -> StateKey {
        StateKey {
            stacks: [
                self.rods[0].size_sequence(),
                self.rods[1].size_sequence(),
                self.rods[2].size_sequence(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_start() {
        let state = PuzzleState::new(4).unwrap();

        assert_eq!(state.num_disks(), 4);
        assert_eq!(state.destination(), RodIndex::new(2));
        assert_eq!(state.rod(RodIndex::new(0)).size_sequence().as_slice(), &[4, 3, 2, 1]);
        assert!(state.rod(RodIndex::new(1)).is_empty());
        assert!(state.rod(RodIndex::new(2)).is_empty());
        assert!(state.rod(RodIndex::new(2)).is_destination());
        assert!(state.is_well_formed());
    }

    #[test]
    fn test_new_rejects_out_of_range_count() {
        assert_eq!(
            PuzzleState::new(2).unwrap_err(),
            EngineError::InvalidDiskCount { requested: 2 }
        );
        assert_eq!(
            PuzzleState::new(11).unwrap_err(),
            EngineError::InvalidDiskCount { requested: 11 }
        );
    }

    #[test]
    fn test_pop_and_push_round_trip() {
        let mut state = PuzzleState::new(3).unwrap();

        let disk = state.pop_disk(RodIndex::new(0)).unwrap();
        assert_eq!(disk.size(), 1);
        assert_eq!(state.total_disks(), 2);

        state.push_disk(RodIndex::new(1), disk);
        assert_eq!(state.top_disk(RodIndex::new(1)).map(|d| d.size()), Some(1));
        assert!(state.is_well_formed());
    }

    #[test]
    fn test_pop_empty_rod_errors() {
        let mut state = PuzzleState::new(3).unwrap();

        assert_eq!(
            state.pop_disk(RodIndex::new(1)).unwrap_err(),
            EngineError::EmptyRod { rod: RodIndex::new(1) }
        );
    }

    #[test]
    fn test_from_layout() {
        let state = PuzzleState::from_layout([&[3, 1], &[2], &[]], RodIndex::new(2));

        assert_eq!(state.num_disks(), 3);
        assert_eq!(state.rod(RodIndex::new(0)).size_sequence().as_slice(), &[3, 1]);
        assert_eq!(state.rod(RodIndex::new(1)).size_sequence().as_slice(), &[2]);
        assert!(state.is_well_formed());

        // Identities follow sizes: largest disk is id 0
        let (_, largest) = state.find_disk(DiskId::new(0)).unwrap();
        assert_eq!(largest.size(), 3);
    }

    #[test]
    #[should_panic(expected = "stacking invariant")]
    fn test_from_layout_rejects_bad_ordering() {
        let _ = PuzzleState::from_layout([&[1, 3], &[2], &[]], RodIndex::new(2));
    }

    #[test]
    #[should_panic(expected = "each exactly once")]
    fn test_from_layout_rejects_duplicate_sizes() {
        let _ = PuzzleState::from_layout([&[2], &[2], &[1]], RodIndex::new(0));
    }

    #[test]
    fn test_settle_disk() {
        let mut state = PuzzleState::new(3).unwrap();

        let mut disk = state.pop_disk(RodIndex::new(0)).unwrap();
        disk.begin_transit();
        let id = disk.id;
        state.push_disk(RodIndex::new(2), disk);

        assert!(state.any_in_transit());
        assert!(state.settle_disk(id));
        assert!(!state.any_in_transit());

        // Stale notification
        assert!(!state.settle_disk(id));
        // Unknown disk
        assert!(!state.settle_disk(DiskId::new(99)));
    }

    #[test]
    fn test_solver_key_equality() {
        let a = PuzzleState::new(3).unwrap();
        let b = PuzzleState::new(3).unwrap();
        assert_eq!(a.solver_key(), b.solver_key());

        let c = PuzzleState::from_layout([&[3, 2], &[1], &[]], RodIndex::new(2));
        assert_ne!(a.solver_key(), c.solver_key());
    }

    #[test]
    fn test_well_formed_detects_wrong_flag_count() {
        let mut state = PuzzleState::new(3).unwrap();
        assert!(state.is_well_formed());

        // Forging a second destination flag breaks the invariant
        state.rods[0] = Rod::new(true);
        state.num_disks = 0;
        assert!(!state.is_well_formed());
    }

    #[test]
    fn test_serialization() {
        let state = PuzzleState::new(5).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: PuzzleState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}

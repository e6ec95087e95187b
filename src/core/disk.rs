//! Disk identity, size, and transit state.
//!
//! ## DiskId
//!
//! Stable identity for a disk across moves. Sizes are all distinct in this
//! puzzle, but identity is what the presentation layer keys animations on,
//! so the two are kept separate.
//!
//! ## TransitState
//!
//! A move is logically committed before its visual transit completes. The
//! interval in between is tracked per disk with an engine-owned tag; the
//! animation layer is notified of transitions, never owns them.

use serde::{Deserialize, Serialize};

/// Unique identifier for a disk.
///
/// Ids are `0..num_disks`; id 0 is the largest disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiskId(pub u8);

impl DiskId {
    /// Create a new disk ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for DiskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Disk({})", self.0)
    }
}

/// Whether a disk's committed move is still visually playing out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitState {
    /// The disk is settled on its rod.
    #[default]
    Idle,
    /// A committed move has not yet received its completion notification.
    InTransit,
}

/// A sized puzzle piece.
///
/// The size rank is immutable; larger value = physically larger disk.
/// Within a rod, sizes strictly decrease from bottom to top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disk {
    /// Stable identity, used to track the disk across moves.
    pub id: DiskId,
    size: u8,
    transit: TransitState,
}

impl Disk {
    /// Create a new settled disk.
    #[must_use]
    pub const fn new(id: DiskId, size: u8) -> Self {
        Self {
            id,
            size,
            transit: TransitState::Idle,
        }
    }

    /// Get the size rank.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Check whether this disk has a pending transit.
    #[must_use]
    pub const fn is_in_transit(&self) -> bool {
        matches!(self.transit, TransitState::InTransit)
    }

    /// Mark the disk's move as committed but not yet visually complete.
    ///
    /// At most one move may be in transit per disk: a disk with this tag set
    /// cannot be selected as a move source until `settle` is called.
    pub fn begin_transit(&mut self) {
        self.transit = TransitState::InTransit;
    }

    /// Clear the transit tag after the completion notification.
    ///
    /// Transits are force-completed to their target, never aborted back to
    /// the source, so settling is the only way out of `InTransit`.
    pub fn settle(&mut self) {
        self.transit = TransitState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_disk_is_settled() {
        let disk = Disk::new(DiskId::new(2), 1);

        assert_eq!(disk.id, DiskId::new(2));
        assert_eq!(disk.size(), 1);
        assert!(!disk.is_in_transit());
    }

    #[test]
    fn test_transit_round_trip() {
        let mut disk = Disk::new(DiskId::new(0), 3);

        disk.begin_transit();
        assert!(disk.is_in_transit());

        disk.settle();
        assert!(!disk.is_in_transit());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DiskId::new(4)), "Disk(4)");
    }

    #[test]
    fn test_serialization() {
        let disk = Disk::new(DiskId::new(1), 2);
        let json = serde_json::to_string(&disk).unwrap();
        let deserialized: Disk = serde_json::from_str(&json).unwrap();
        assert_eq!(disk, deserialized);
    }
}

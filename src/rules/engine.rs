//! Move legality, application, and win detection.
//!
//! A move is legal when it transfers the top disk of one rod onto a strictly
//! larger effective top of another. "Effective" is the load-bearing word: a
//! committed move's disk may still be visually in transit, and legality must
//! account for every arrival committed to a target rod before this move
//! completes, not merely the last settled top. The smallest pending arrival
//! wins.
//!
//! Application commits a move atomically: pop, tag in-transit, push,
//! win-checkable immediately. The visual transit finishing later only clears
//! the tag.

use crate::core::{Disk, DiskId, EngineError, PuzzleState, RodIndex};

/// The size a disk must beat to land on `rod`.
///
/// The smallest arrival still in transit to the rod, if any; otherwise the
/// settled top. `None` means the rod is open.
fn effective_top_size(state: &PuzzleState, rod: RodIndex) -> Option<u8> {
    let rod = state.rod(rod);
    let pending = rod
        .disks()
        .iter()
        .filter(|disk| disk.is_in_transit())
        .map(Disk::size)
        .min();
    pending.or_else(|| rod.top_disk().map(Disk::size))
}

/// Check whether moving the top disk of `from` onto `to` is legal.
///
/// Illegal when:
/// - `from == to`,
/// - `from` is empty,
/// - the top disk of `from` has its own transit pending (at most one move
///   may be in transit per disk),
/// - the effective top of `to` is not strictly larger than the moving disk.
#[must_use]
pub fn legal_move(state: &PuzzleState, from: RodIndex, to: RodIndex) -> bool {
    if from == to {
        return false;
    }
    let Some(moving) = state.top_disk(from) else {
        return false;
    };
    if moving.is_in_transit() {
        return false;
    }
    match effective_top_size(state, to) {
        None => true,
        Some(top) => moving.size() < top,
    }
}

/// Apply a move, committing it in full.
///
/// Pops the top disk of `from`, marks it in transit, and pushes it onto
/// `to`. Returns the moved disk's id, the handle the presentation layer
/// echoes back once the visual transit finishes. Fails with `IllegalMove`
/// and leaves the state untouched if `legal_move` rejects the pair.
pub fn apply_move(
    state: &mut PuzzleState,
    from: RodIndex,
    to: RodIndex,
) -> Result<DiskId, EngineError> {
    if !legal_move(state, from, to) {
        return Err(EngineError::IllegalMove { from, to });
    }

    let mut disk = state.pop_disk(from)?;
    disk.begin_transit();
    let id = disk.id;
    state.push_disk(to, disk);

    debug_assert!(state.rod(to).is_strictly_decreasing());
    Ok(id)
}

/// Check whether the puzzle is won.
///
/// True iff the destination rod holds every disk in strictly decreasing
/// size order. The ordering is already guaranteed by the state invariant,
/// but this predicate is the sole authority for ending the game, so it
/// re-verifies rather than trusting it.
#[must_use]
pub fn check_win(state: &PuzzleState) -> bool {
    let destination = state.rod(state.destination());
    destination.len() == state.num_disks() as usize && destination.is_strictly_decreasing()
}

/// Enumerate all currently legal (from, to) pairs.
#[must_use]
pub fn legal_moves(state: &PuzzleState) -> Vec<(RodIndex, RodIndex)> {
    let mut moves = Vec::new();
    for from in RodIndex::ALL {
        for to in RodIndex::ALL {
            if legal_move(state, from, to) {
                moves.push((from, to));
            }
        }
    }
    moves
}

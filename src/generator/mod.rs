//! Randomized, rule-consistent layout generation.
//!
//! Deals disks largest-first onto uniformly random rods. Largest-first
//! placement is what makes the greedy deal sound: every disk yet to be
//! placed is smaller than everything already on the rods, so each rod can
//! always accept it without violating the stacking invariant.
//!
//! A deal where every disk lands on the destination rod would be a
//! zero-move win, so that outcome is post-corrected before the state is
//! returned. The function is pure: callers get a guaranteed-valid,
//! never-pre-solved state and replace theirs wholesale.

use smallvec::SmallVec;

use crate::core::{
    Disk, DiskId, EngineError, PuzzleConfig, PuzzleRng, PuzzleState, RodIndex, ROD_COUNT,
};

/// Generate a randomized, solvable, not-yet-solved starting state.
///
/// The destination rod is chosen uniformly among the three; each disk then
/// lands on a uniformly random rod among those whose top is absent or
/// strictly larger. Fails with `InvalidDiskCount` outside the supported
/// disk range.
pub fn randomize(num_disks: u8, rng: &mut PuzzleRng) -> Result<PuzzleState, EngineError> {
    PuzzleConfig::new(num_disks).validate()?;

    let destination = RodIndex::ALL[rng.gen_range_usize(0..ROD_COUNT)];
    let mut state = PuzzleState::empty(num_disks, destination);

    for id in 0..num_disks {
        let size = num_disks - id;
        let candidates: SmallVec<[RodIndex; ROD_COUNT]> = RodIndex::ALL
            .into_iter()
            .filter(|&rod| {
                state
                    .top_disk(rod)
                    .map_or(true, |top| top.size() > size)
            })
            .collect();

        let rod = candidates[rng.gen_range_usize(0..candidates.len())];
        state.push_disk(rod, Disk::new(DiskId::new(id), size));
    }

    // A deal that stacked everything on the destination is already won;
    // relocating the topmost disk always succeeds because the other rods
    // are empty
    if state.rod(destination).len() == num_disks as usize {
        log::debug!("deal landed every disk on {}; relocating the top disk", destination);
        let others: SmallVec<[RodIndex; ROD_COUNT]> = RodIndex::ALL
            .into_iter()
            .filter(|&rod| rod != destination)
            .collect();
        let target = others[rng.gen_range_usize(0..others.len())];
        let disk = state.pop_disk(destination)?;
        state.push_disk(target, disk);
    }

    debug_assert!(state.is_well_formed());
    debug_assert!(!crate::rules::check_win(&state));
    Ok(state)
}

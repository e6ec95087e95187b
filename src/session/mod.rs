//! Game session: the state machine the presentation layer drives.
//!
//! Owns the puzzle state, the snapshot history, the session RNG, the move
//! counter, and the cached optimal move count. The input layer calls in to
//! validate and apply moves; the animation layer reports transit
//! completions back. Everything here composes the rule engine, solver,
//! generator, and history primitives; it adds no rules of its own.

use crate::core::{DiskId, EngineError, PuzzleConfig, PuzzleRng, PuzzleState, RodIndex};
use crate::generator::randomize;
use crate::history::{HistoryStack, Snapshot};
use crate::rules::{apply_move, check_win, legal_move};
use crate::solver::minimum_moves;

/// A running puzzle session.
///
/// ## Example
///
/// ```
/// use hanoi_core::core::{PuzzleConfig, RodIndex};
/// use hanoi_core::session::GameSession;
///
/// let mut session = GameSession::new(PuzzleConfig::new(3)).unwrap();
/// assert_eq!(session.optimal_moves(), 7);
///
/// let disk = session.try_move(RodIndex::new(0), RodIndex::new(2)).unwrap();
/// session.complete_transit(disk);
///
/// assert_eq!(session.move_count(), 1);
/// assert!(session.undo());
/// assert_eq!(session.move_count(), 0);
/// ```
#[derive(Debug)]
pub struct GameSession {
    config: PuzzleConfig,
    state: PuzzleState,
    history: HistoryStack,
    rng: PuzzleRng,
    move_count: u32,
    optimal_moves: u32,
}

impl GameSession {
    /// Start a session at the canonical layout for the configured count.
    pub fn new(config: PuzzleConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let state = PuzzleState::new(config.num_disks)?;
        let optimal_moves = minimum_moves(&state)?;

        let mut history = HistoryStack::new();
        history.push(Snapshot::capture(&state, 0));

        Ok(Self {
            config,
            state,
            history,
            rng: PuzzleRng::new(config.seed),
            move_count: 0,
            optimal_moves,
        })
    }

    /// Restart at the canonical layout, discarding state and history.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        let state = PuzzleState::new(self.config.num_disks)?;
        self.install(state)
    }

    /// Change the disk count, then restart.
    ///
    /// The count is validated first; on rejection the session is untouched.
    pub fn set_disk_count(&mut self, num_disks: u8) -> Result<(), EngineError> {
        PuzzleConfig::new(num_disks).validate()?;
        self.config.num_disks = num_disks;
        self.reset()
    }

    /// Replace the board with a randomized, solvable, not-yet-solved deal.
    ///
    /// Each deal runs on a fork of the session RNG, so a session replays
    /// identically from its seed no matter how much randomness one deal
    /// consumed.
    pub fn randomize(&mut self) -> Result<(), EngineError> {
        let mut deal_rng = self.rng.fork();
        let state = randomize(self.config.num_disks, &mut deal_rng)?;
        self.install(state)
    }

    /// Install a fresh state: recompute the optimum, zero the counter,
    /// clear and immediately reseed the history.
    fn install(&mut self, state: PuzzleState) -> Result<(), EngineError> {
        self.optimal_moves = minimum_moves(&state)?;
        self.state = state;
        self.move_count = 0;
        self.history.clear();
        self.history.push(Snapshot::capture(&self.state, 0));
        Ok(())
    }

    /// Check whether a move would be accepted right now.
    #[must_use]
    pub fn can_move(&self, from: RodIndex, to: RodIndex) -> bool {
        legal_move(&self.state, from, to)
    }

    /// Validate and commit a move.
    ///
    /// On success the move counter advances, a snapshot is pushed, and the
    /// moved disk's id is returned for the animation layer to echo back via
    /// `complete_transit`. On failure the session is unchanged.
    pub fn try_move(&mut self, from: RodIndex, to: RodIndex) -> Result<DiskId, EngineError> {
        let disk = apply_move(&mut self.state, from, to)?;
        self.move_count += 1;
        self.history.push(Snapshot::capture(&self.state, self.move_count));
        Ok(disk)
    }

    /// Record that a committed move's visual transit finished.
    ///
    /// Transits force-complete to their target; there is no cancellation
    /// back to the source. Returns false for stale or unknown ids.
    pub fn complete_transit(&mut self, disk: DiskId) -> bool {
        self.state.settle_disk(disk)
    }

    /// Undo the most recent move.
    ///
    /// A no-op returning false while any transit is pending (undo would
    /// restore a past state under a pending commit) or when only the seed
    /// snapshot remains; callers use the result to disable the affordance.
    pub fn undo(&mut self) -> bool {
        if self.state.any_in_transit() {
            log::debug!("undo ignored: a move is still in transit");
            return false;
        }
        if self.history.pop().is_none() {
            return false;
        }
        if let Some(snapshot) = self.history.current() {
            self.state = snapshot.restore();
            self.move_count = snapshot.move_count();
        }
        true
    }

    // === Queries ===

    /// Check whether the puzzle is won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        check_win(&self.state)
    }

    /// Moves committed since the last reset/randomize.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Minimum number of moves from the starting layout.
    #[must_use]
    pub fn optimal_moves(&self) -> u32 {
        self.optimal_moves
    }

    /// Number of history entries, including the seed.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Configured disk count.
    #[must_use]
    pub fn disk_count(&self) -> u8 {
        self.config.num_disks
    }

    /// The current logical state.
    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }
}

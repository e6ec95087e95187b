//! Rule engine: move legality, move application, win detection.

mod engine;

pub use engine::{apply_move, check_win, legal_move, legal_moves};

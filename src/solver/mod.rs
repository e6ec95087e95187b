//! Optimal-solution-length solver.
//!
//! Computes the minimum number of legal moves from an arbitrary legal
//! configuration to a win. The canonical all-on-one-rod layout takes the
//! `2^n − 1` closed form; anything else (randomized deals in particular)
//! goes through exhaustive breadth-first search.

mod search;

pub use search::{minimum_moves, standard_minimum_moves};

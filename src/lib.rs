//! Crossword Layout Library
//!
//! Places a list of clue/answer entries on a square grid so that every word
//! crosses at least one other, then crops and numbers the result. Several
//! strategies (greedy orderings, random restarts, backtracking, beam search)
//! run in turn and the layout with the most words wins.

pub mod backtracking;
pub mod beam;
pub mod budget;
pub mod config;
pub mod error;
pub mod geometry;
pub mod greedy;
pub mod grid;
pub mod logging;
pub mod persistence;
pub mod placement;
pub mod postprocess;
pub mod render;
pub mod restarts;
pub mod solver;
pub mod words;

pub use config::{SearchConfig, SearchLimit};
pub use error::CrosswordError;
pub use grid::{Grid, PlacedWord};
pub use solver::{generate, Puzzle, SearchReport};
pub use words::{normalize_answer, Entry};

use solver::{Attempt, SearchContext};
use words::NormalizedEntry;

/// One way of laying out the entries, run by the solver through dynamic dispatch.
///
/// Implementations read the shared policy and random source from the context
/// and return their best layout, or `None` if they could not start one. The
/// context's `best_placed` is what earlier strategies already achieved.
pub trait Strategy {
    /// Short name used in logs and the search report.
    fn name(&self) -> &'static str;
    fn run(&self, entries: &[NormalizedEntry], context: &mut SearchContext) -> Option<Attempt>;
}

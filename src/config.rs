//! Tunable search policy.

use std::time::Duration;

use crate::geometry::MAX_GRID_SIDE;

/// Minimum number of placed words for a usable puzzle.
pub const MIN_WORDS: usize = 3;

/// How long a time-boxed strategy may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchLimit {
    /// Wall-clock budget; results depend on machine speed.
    Time(Duration),
    /// Fixed number of iterations; reproducible.
    Steps(u64),
}

/// Policy constants for every strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Scored placements a greedy pass tries per word before deferring it.
    pub greedy_candidates: usize,
    /// Placements the backtracking search branches on per word.
    pub backtrack_branching: usize,
    /// Partial layouts kept per beam search generation.
    pub beam_width: usize,
    /// Placements per word each beam state expands into.
    pub beam_children: usize,
    pub restart_limit: SearchLimit,
    pub backtrack_limit: SearchLimit,
    /// Checked once per expanded layout; a cut-short generation is discarded.
    pub beam_limit: SearchLimit,
    /// Fewer placed words than this is a failure.
    pub min_words: usize,
    pub max_grid_side: usize,
    /// Seed for the random restarts; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            greedy_candidates: 20,
            backtrack_branching: 8,
            beam_width: 200,
            beam_children: 3,
            restart_limit: SearchLimit::Time(Duration::from_secs(3)),
            backtrack_limit: SearchLimit::Time(Duration::from_secs(5)),
            beam_limit: SearchLimit::Time(Duration::from_secs(5)),
            min_words: MIN_WORDS,
            max_grid_side: MAX_GRID_SIDE,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Step-limited, seeded configuration whose results do not depend on timing.
    ///
    /// Beam search is bounded only by its width and runs every generation.
    pub fn deterministic(seed: u64, restart_steps: u64, backtrack_steps: u64) -> Self {
        Self {
            restart_limit: SearchLimit::Steps(restart_steps),
            backtrack_limit: SearchLimit::Steps(backtrack_steps),
            beam_limit: SearchLimit::Steps(u64::MAX),
            seed: Some(seed),
            ..Self::default()
        }
    }
}

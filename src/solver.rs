//! Runs the placement strategies in priority order and keeps the best layout.
//!
//! The three greedy orderings run first since they are cheap. Random
//! restarts, backtracking and beam search follow, each only while some word
//! is still missing from the best layout. A strategy that finds nothing
//! better simply contributes nothing; only the final shortfall is an error.

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::backtracking::Backtracking;
use crate::beam::BeamSearch;
use crate::config::SearchConfig;
use crate::error::CrosswordError;
use crate::geometry::{grid_side, Orientation};
use crate::greedy::Greedy;
use crate::grid::{Grid, PlacedWord};
use crate::postprocess;
use crate::render::clue_list;
use crate::restarts::RandomRestarts;
use crate::words::{normalize_entries, Entry, NormalizedEntry, WordOrder};
use crate::Strategy;

/// State shared by the strategies of one search.
pub struct SearchContext<'a> {
    pub config: &'a SearchConfig,
    pub rng: StdRng,
    /// Most words placed by any strategy so far.
    pub best_placed: usize,
    /// Side of the square grid each attempt starts from.
    pub side: usize,
}

impl<'a> SearchContext<'a> {
    pub fn new(config: &'a SearchConfig, side: usize) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            best_placed: 0,
            side,
        }
    }
}

/// A layout produced by one strategy, before cropping and numbering.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub grid: Grid,
    pub placed: usize,
    /// Restarts, search nodes or generations, depending on the strategy.
    pub iterations: u64,
}

/// What one strategy did during a search.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyReport {
    pub name: &'static str,
    /// Words in the strategy's layout, or `None` if it produced nothing.
    pub placed: Option<usize>,
    pub iterations: u64,
    pub elapsed: Duration,
    /// Whether this strategy's layout became the new best.
    pub improved: bool,
}

/// Diagnostics for a whole search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchReport {
    pub total_words: usize,
    pub strategies: Vec<StrategyReport>,
}

impl SearchReport {
    /// Name of the strategy whose layout was kept.
    pub fn winner(&self) -> Option<&'static str> {
        self.strategies
            .iter()
            .rev()
            .find(|report| report.improved)
            .map(|report| report.name)
    }
}

/// A finished puzzle: cropped, numbered grid plus search diagnostics.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    report: SearchReport,
}

impl Puzzle {
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn report(&self) -> &SearchReport {
        &self.report
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn placed_count(&self) -> usize {
        self.grid.words().len()
    }

    /// Across words, by number.
    pub fn across(&self) -> Vec<&PlacedWord> {
        clue_list(&self.grid, Orientation::Across)
    }

    /// Down words, by number.
    pub fn down(&self) -> Vec<&PlacedWord> {
        clue_list(&self.grid, Orientation::Down)
    }
}

/// Lays `entry` out centred in a fresh `side` x `side` grid.
///
/// Returns `None` if the word does not fit.
pub fn starting_grid(
    entries: &[NormalizedEntry],
    first: usize,
    orientation: Orientation,
    side: usize,
) -> Option<Grid> {
    let entry = entries.get(first)?;
    if entry.is_empty() || entry.len() > side {
        return None;
    }

    let mut grid = Grid::new(side, side).ok()?;
    let middle = (side / 2) as i32;
    let offset = ((side - entry.len()) / 2) as i32;
    let anchor = match orientation {
        Orientation::Across => (middle, offset),
        Orientation::Down => (offset, middle),
    };
    grid.add_word(PlacedWord::new(entry, anchor, orientation));
    Some(grid)
}

/// Every strategy, in the order they are tried.
pub fn default_strategies() -> Vec<Box<dyn Strategy>> {
    let mut strategies: Vec<Box<dyn Strategy>> = WordOrder::ALL
        .into_iter()
        .map(|order| Box::new(Greedy::new(order)) as Box<dyn Strategy>)
        .collect();
    strategies.push(Box::new(RandomRestarts));
    strategies.push(Box::new(Backtracking));
    strategies.push(Box::new(BeamSearch));
    strategies
}

/// Normalizes the entries and lays them out with every strategy.
pub fn generate(entries: &[Entry], config: &SearchConfig) -> Result<Puzzle, CrosswordError> {
    let normalized = normalize_entries(entries);
    if normalized.is_empty() {
        return Err(CrosswordError::NoEntries);
    }
    generate_with(&normalized, config, &default_strategies())
}

/// Runs `strategies` in order over already-normalized entries.
pub fn generate_with(
    entries: &[NormalizedEntry],
    config: &SearchConfig,
    strategies: &[Box<dyn Strategy>],
) -> Result<Puzzle, CrosswordError> {
    if entries.is_empty() {
        return Err(CrosswordError::NoEntries);
    }

    let total = entries.len();
    let mut context = SearchContext::new(config, grid_side(entries, config.max_grid_side));
    let mut report = SearchReport {
        total_words: total,
        strategies: Vec::with_capacity(strategies.len()),
    };
    let mut best: Option<Attempt> = None;

    for strategy in strategies {
        if context.best_placed == total {
            break;
        }

        debug!(
            "running {} (best so far {}/{total})",
            strategy.name(),
            context.best_placed
        );
        let started = Instant::now();
        let attempt = strategy.run(entries, &mut context);
        let elapsed = started.elapsed();

        let improved = attempt
            .as_ref()
            .is_some_and(|attempt| attempt.placed > context.best_placed);
        report.strategies.push(StrategyReport {
            name: strategy.name(),
            placed: attempt.as_ref().map(|attempt| attempt.placed),
            iterations: attempt.as_ref().map_or(0, |attempt| attempt.iterations),
            elapsed,
            improved,
        });

        if improved {
            if let Some(attempt) = attempt {
                context.best_placed = attempt.placed;
                best = Some(attempt);
            }
        }
    }

    let best = match best {
        Some(attempt) if attempt.placed >= config.min_words => attempt,
        _ => {
            return Err(CrosswordError::Shortfall {
                placed: context.best_placed,
                required: config.min_words,
            })
        }
    };

    let grid = postprocess::finalize(&best.grid)?;
    info!(
        "placed {}/{total} words with {} on a {}x{} grid",
        best.placed,
        report.winner().unwrap_or("none"),
        grid.width(),
        grid.height()
    );

    Ok(Puzzle { grid, report })
}

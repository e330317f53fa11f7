//! Greedy placement in a fixed word order.
//!
//! The first word of the order is laid across the middle of the grid; every
//! other word takes the best-scoring valid position among its top candidates.
//! Words that find no position are deferred and retried once after everything
//! else has been attempted.

use log::debug;

use crate::geometry::Orientation;
use crate::grid::{Grid, PlacedWord};
use crate::placement::{rank, validate, Scorer};
use crate::solver::{starting_grid, Attempt, SearchContext};
use crate::words::{NormalizedEntry, WordOrder};
use crate::Strategy;

/// Single greedy pass plus one retry pass in one of the [`WordOrder`]s.
#[derive(Debug, Clone, Copy)]
pub struct Greedy {
    pub order: WordOrder,
}

impl Greedy {
    pub fn new(order: WordOrder) -> Self {
        Self { order }
    }
}

impl Strategy for Greedy {
    fn name(&self) -> &'static str {
        self.order.name()
    }

    fn run(&self, entries: &[NormalizedEntry], context: &mut SearchContext) -> Option<Attempt> {
        let order = self.order.arrange(entries);
        let (&first, rest) = order.split_first()?;
        let mut grid = starting_grid(entries, first, Orientation::Across, context.side)?;

        fill(
            &mut grid,
            entries,
            rest,
            Scorer::Extended,
            context.config.greedy_candidates,
        );

        let placed = grid.words().len();
        debug!("{}: placed {placed}/{}", self.name(), entries.len());
        Some(Attempt {
            grid,
            placed,
            iterations: 1,
        })
    }
}

/// Places as many of `pending` as possible onto `grid`, in order, then
/// retries the ones that failed. Returns how many words this call placed.
pub(crate) fn fill(
    grid: &mut Grid,
    entries: &[NormalizedEntry],
    pending: &[usize],
    scorer: Scorer,
    max_candidates: usize,
) -> usize {
    let mut deferred = Vec::new();
    let mut placed = place_in_order(
        grid,
        entries,
        pending,
        scorer,
        max_candidates,
        &mut deferred,
    );

    if !deferred.is_empty() {
        let retry = std::mem::take(&mut deferred);
        placed += place_in_order(
            grid,
            entries,
            &retry,
            scorer,
            max_candidates,
            &mut deferred,
        );
    }

    placed
}

fn place_in_order(
    grid: &mut Grid,
    entries: &[NormalizedEntry],
    order: &[usize],
    scorer: Scorer,
    max_candidates: usize,
    failed: &mut Vec<usize>,
) -> usize {
    let mut placed = 0;
    for (position, &index) in order.iter().enumerate() {
        let upcoming: Vec<u32> = order[position + 1..]
            .iter()
            .map(|&later| entries[later].letters)
            .collect();
        if try_place(grid, &entries[index], scorer, &upcoming, max_candidates) {
            placed += 1;
        } else {
            failed.push(index);
        }
    }
    placed
}

/// Tries the `max_candidates` best-scoring positions for `entry` and places
/// it at the first valid one.
pub(crate) fn try_place(
    grid: &mut Grid,
    entry: &NormalizedEntry,
    scorer: Scorer,
    upcoming: &[u32],
    max_candidates: usize,
) -> bool {
    let chosen = rank(grid, entry, scorer, upcoming)
        .into_iter()
        .take(max_candidates)
        .find(|candidate| {
            validate(grid, entry.bytes(), candidate.anchor, candidate.orientation).is_ok()
        });

    match chosen {
        Some(candidate) => {
            grid.add_word(PlacedWord::new(
                entry,
                candidate.anchor,
                candidate.orientation,
            ));
            true
        }
        None => false,
    }
}

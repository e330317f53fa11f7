//! Bounded depth-first search over placements.
//!
//! Every word and both orientations are tried as the starting word. At each
//! node the unplaced word with the fewest valid placements is branched on
//! (most constrained first): its best few placements are tried in score
//! order, and finally the branch that leaves it out entirely. Placements are
//! undone with [`Grid::remove_last_word`], so one grid is shared by the whole
//! search.

use log::{debug, trace};

use crate::budget::Budget;
use crate::geometry::Orientation;
use crate::grid::{Grid, PlacedWord};
use crate::placement::{valid_placements, Candidate, Scorer};
use crate::solver::{starting_grid, Attempt, SearchContext};
use crate::words::NormalizedEntry;
use crate::Strategy;

/// Depth-first search with pruning, most-constrained-word ordering and undo.
#[derive(Debug, Clone, Copy, Default)]
pub struct Backtracking;

impl Strategy for Backtracking {
    fn name(&self) -> &'static str {
        "backtracking"
    }

    fn run(&self, entries: &[NormalizedEntry], context: &mut SearchContext) -> Option<Attempt> {
        let mut search = Search {
            entries,
            branching: context.config.backtrack_branching,
            budget: Budget::start(context.config.backtrack_limit),
            best_placed: context.best_placed,
            best_grid: None,
        };

        'starts: for first in 0..entries.len() {
            for orientation in Orientation::BOTH {
                if search.is_finished() {
                    break 'starts;
                }
                let Some(mut grid) = starting_grid(entries, first, orientation, context.side)
                else {
                    continue;
                };
                let mut remaining: Vec<usize> =
                    (0..entries.len()).filter(|&index| index != first).collect();
                search.descend(&mut grid, &mut remaining);
            }
        }

        let iterations = search.budget.steps();
        if search.budget.is_exhausted() {
            debug!("{}: budget spent after {iterations} nodes", self.name());
        }

        search.best_grid.map(|grid| Attempt {
            placed: grid.words().len(),
            grid,
            iterations,
        })
    }
}

struct Search<'a> {
    entries: &'a [NormalizedEntry],
    branching: usize,
    budget: Budget,
    /// Bound to beat; starts at the best count of earlier strategies.
    best_placed: usize,
    best_grid: Option<Grid>,
}

impl Search<'_> {
    fn is_finished(&self) -> bool {
        self.budget.is_exhausted() || self.best_placed == self.entries.len()
    }

    fn descend(&mut self, grid: &mut Grid, remaining: &mut Vec<usize>) {
        // a layout reached on the last step of the budget still counts
        let placed = grid.words().len();
        if placed > self.best_placed {
            trace!("backtracking: new best {placed}");
            self.best_placed = placed;
            self.best_grid = Some(grid.duplicate());
        }

        if !self.budget.tick() {
            return;
        }

        // even placing everything left cannot beat the best
        if remaining.is_empty() || placed + remaining.len() <= self.best_placed {
            return;
        }

        let (position, options) = self.most_constrained(grid, remaining);
        let index = remaining.remove(position);
        let entries = self.entries;
        let entry = &entries[index];

        for candidate in options.iter().take(self.branching) {
            grid.add_word(PlacedWord::new(
                entry,
                candidate.anchor,
                candidate.orientation,
            ));
            self.descend(grid, remaining);
            grid.remove_last_word();
            if self.is_finished() {
                break;
            }
        }

        // leave the word out and carry on with the rest
        if !self.is_finished() {
            self.descend(grid, remaining);
        }

        remaining.insert(position, index);
    }

    /// Position in `remaining` of the word with the fewest valid placements,
    /// with those placements best first. Ties go to the earlier word.
    fn most_constrained(&self, grid: &Grid, remaining: &[usize]) -> (usize, Vec<Candidate>) {
        let mut choice: Option<(usize, Vec<Candidate>)> = None;

        for (position, &index) in remaining.iter().enumerate() {
            let options = valid_placements(
                grid,
                &self.entries[index],
                Scorer::Simple,
                &[],
                usize::MAX,
            );
            let fewer = choice
                .as_ref()
                .map_or(true, |(_, current)| options.len() < current.len());
            if fewer {
                let exhausted = options.is_empty();
                choice = Some((position, options));
                if exhausted {
                    break;
                }
            }
        }

        choice.unwrap_or_default()
    }
}

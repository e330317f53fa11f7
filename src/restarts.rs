//! Randomized restarts of the greedy pass.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::budget::Budget;
use crate::geometry::Orientation;
use crate::greedy::fill;
use crate::placement::Scorer;
use crate::solver::{starting_grid, Attempt, SearchContext};
use crate::words::NormalizedEntry;
use crate::Strategy;

/// Repeats greedy passes over shuffled word orders and random starting
/// orientations until the restart budget runs out or every word fits.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRestarts;

impl Strategy for RandomRestarts {
    fn name(&self) -> &'static str {
        "random-restarts"
    }

    fn run(&self, entries: &[NormalizedEntry], context: &mut SearchContext) -> Option<Attempt> {
        let mut budget = Budget::start(context.config.restart_limit);
        let mut order: Vec<usize> = (0..entries.len()).collect();
        let mut best: Option<Attempt> = None;
        let mut iterations = 0;

        while budget.tick() {
            iterations += 1;
            order.shuffle(&mut context.rng);
            let orientation = if context.rng.gen_bool(0.5) {
                Orientation::Across
            } else {
                Orientation::Down
            };

            let Some((&first, rest)) = order.split_first() else {
                break;
            };
            let Some(mut grid) = starting_grid(entries, first, orientation, context.side) else {
                continue;
            };
            fill(
                &mut grid,
                entries,
                rest,
                Scorer::Extended,
                context.config.greedy_candidates,
            );

            let placed = grid.words().len();
            if placed > best.as_ref().map_or(0, |current| current.placed) {
                debug!("{}: restart {iterations} placed {placed}", self.name());
                best = Some(Attempt {
                    grid,
                    placed,
                    iterations,
                });
            }
            if placed == entries.len() {
                break;
            }
        }

        best.map(|attempt| Attempt {
            iterations,
            ..attempt
        })
    }
}

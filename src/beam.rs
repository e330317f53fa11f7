//! Beam search over partial layouts.
//!
//! Each generation extends every kept layout by one more word, in each of
//! that word's best few valid positions, and keeps only the highest-scoring
//! layouts. Every layout in a generation has the same number of words, so the
//! top layout of the last complete, non-empty generation is the result.

use log::debug;
use rustc_hash::FxHashSet;

use crate::budget::Budget;
use crate::geometry::Orientation;
use crate::grid::{Grid, PlacedWord};
use crate::placement::{valid_placements, Scorer};
use crate::solver::{starting_grid, Attempt, SearchContext};
use crate::words::{NormalizedEntry, WordOrder};
use crate::Strategy;

/// Breadth-limited search keeping the `beam_width` best partial layouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeamSearch;

/// One partial layout in the beam.
#[derive(Debug, Clone)]
struct BeamState {
    grid: Grid,
    /// `placed[i]` is set once entry `i` is on the grid.
    placed: Vec<bool>,
    /// Sum of the scores of every placement made so far.
    score: f64,
}

impl BeamState {
    fn is_complete(&self) -> bool {
        self.placed.iter().all(|&placed| placed)
    }

    fn unplaced(&self) -> Vec<usize> {
        (0..self.placed.len())
            .filter(|&index| !self.placed[index])
            .collect()
    }
}

impl Strategy for BeamSearch {
    fn name(&self) -> &'static str {
        "beam-search"
    }

    fn run(&self, entries: &[NormalizedEntry], context: &mut SearchContext) -> Option<Attempt> {
        let width = context.config.beam_width.max(1);
        let children = context.config.beam_children;
        let mut budget = Budget::start(context.config.beam_limit);

        let first = *WordOrder::LongestFirst.arrange(entries).first()?;
        let grid = starting_grid(entries, first, Orientation::Across, context.side)?;
        let mut placed = vec![false; entries.len()];
        placed[first] = true;

        let mut beam = vec![BeamState {
            grid,
            placed,
            score: 0.0,
        }];
        let mut generations = 0;

        for _ in 1..entries.len() {
            if beam[0].is_complete() {
                break;
            }

            let Some(mut next) = expand(&beam, entries, children, &mut budget) else {
                debug!(
                    "{}: budget spent in generation {}",
                    self.name(),
                    generations + 1
                );
                break;
            };
            if next.is_empty() {
                break;
            }

            // stable sort: on equal score, earlier-generated children win
            next.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            next.truncate(width);
            beam = next;
            generations += 1;
        }

        let best = beam.into_iter().next()?;
        let placed = best.grid.words().len();
        debug!(
            "{}: {generations} generations, best layout has {placed} words",
            self.name()
        );

        Some(Attempt {
            grid: best.grid,
            placed,
            iterations: generations,
        })
    }
}

/// Every distinct child of every state in the beam, or `None` if the budget
/// ran out before every state was expanded.
fn expand(
    beam: &[BeamState],
    entries: &[NormalizedEntry],
    children: usize,
    budget: &mut Budget,
) -> Option<Vec<BeamState>> {
    let mut next = Vec::new();
    let mut seen: FxHashSet<(Vec<u8>, Vec<bool>)> = FxHashSet::default();

    for state in beam {
        if !budget.tick() {
            return None;
        }
        let unplaced = state.unplaced();
        for &index in &unplaced {
            let upcoming: Vec<u32> = unplaced
                .iter()
                .filter(|&&other| other != index)
                .map(|&other| entries[other].letters)
                .collect();
            let entry = &entries[index];

            let candidates = valid_placements(
                &state.grid,
                entry,
                Scorer::Extended,
                &upcoming,
                children,
            );
            for candidate in candidates {
                let mut grid = state.grid.duplicate();
                grid.add_word(PlacedWord::new(
                    entry,
                    candidate.anchor,
                    candidate.orientation,
                ));
                let mut placed = state.placed.clone();
                placed[index] = true;

                // the same layout reached by placing words in another order
                if !seen.insert((grid.cells().to_vec(), placed.clone())) {
                    continue;
                }
                next.push(BeamState {
                    grid,
                    placed,
                    score: state.score + candidate.score,
                });
            }
        }
    }

    Some(next)
}

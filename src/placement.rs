//! Finding, validating and scoring candidate placements.
//!
//! A candidate always crosses an already-placed word at a shared letter and
//! runs perpendicular to it. Finding candidates does no validity filtering;
//! [`validate`] decides whether a candidate may actually be placed.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;

use crate::geometry::{cell_at, manhattan, Coord, Orientation};
use crate::grid::{Grid, EMPTY};
use crate::words::NormalizedEntry;

/// A possible position for a word, with its score once ranked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub anchor: Coord,
    pub orientation: Orientation,
    pub score: f64,
}

/// Why a candidate placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Part of the word would fall outside the grid.
    OutOfBounds,
    /// An occupied cell holds a different letter.
    Conflict,
    /// A newly filled cell would touch a neighbouring word from the side.
    SideContact,
    /// The cell before the first or after the last letter is occupied.
    EndContact,
    /// The word would not cross any placed word.
    NoIntersection,
    /// The word would run along a placed word of the same orientation.
    CollinearOverlap,
}

/// Every anchor at which `word` crosses a placed word on a matching letter.
///
/// Duplicate `(anchor, orientation)` pairs are reported once, in order of
/// first discovery.
pub fn find_options(grid: &Grid, word: &[u8]) -> Vec<Candidate> {
    let mut seen: FxHashSet<(Coord, Orientation)> = FxHashSet::default();
    let mut options = Vec::new();

    for placed in grid.words() {
        let orientation = placed.orientation.perpendicular();
        for (existing_index, existing_letter) in placed.answer.bytes().enumerate() {
            let shared_cell = cell_at(placed.anchor(), placed.orientation, existing_index as i32);
            for (index, &letter) in word.iter().enumerate() {
                if letter != existing_letter {
                    continue;
                }
                let anchor = cell_at(shared_cell, orientation, -(index as i32));
                if seen.insert((anchor, orientation)) {
                    options.push(Candidate {
                        anchor,
                        orientation,
                        score: 0.0,
                    });
                }
            }
        }
    }

    options
}

/// Checks a placement and returns its number of intersections.
pub fn validate(
    grid: &Grid,
    word: &[u8],
    anchor: Coord,
    orientation: Orientation,
) -> Result<usize, Rejection> {
    let length = word.len() as i32;
    if length == 0 {
        return Err(Rejection::NoIntersection);
    }

    let (end_row, end_col) = cell_at(anchor, orientation, length - 1);
    if !grid.in_bounds(anchor.0, anchor.1) || !grid.in_bounds(end_row, end_col) {
        return Err(Rejection::OutOfBounds);
    }

    let (before_row, before_col) = cell_at(anchor, orientation, -1);
    let (after_row, after_col) = cell_at(anchor, orientation, length);
    if !grid.is_empty(before_row, before_col) || !grid.is_empty(after_row, after_col) {
        return Err(Rejection::EndContact);
    }

    let (side_row, side_col) = orientation.perpendicular().step();
    let mut intersections = 0;

    for (offset, &letter) in word.iter().enumerate() {
        let (row, col) = cell_at(anchor, orientation, offset as i32);
        match grid.get(row, col) {
            EMPTY => {
                let touches_side = !grid.is_empty(row - side_row, col - side_col)
                    || !grid.is_empty(row + side_row, col + side_col);
                if touches_side {
                    return Err(Rejection::SideContact);
                }
            }
            existing if existing != letter => return Err(Rejection::Conflict),
            _ => {
                let runs_along = grid
                    .words()
                    .iter()
                    .any(|placed| placed.orientation == orientation && placed.covers((row, col)));
                if runs_along {
                    return Err(Rejection::CollinearOverlap);
                }
                intersections += 1;
            }
        }
    }

    if intersections == 0 {
        return Err(Rejection::NoIntersection);
    }
    Ok(intersections)
}

/// Number of cells where the grid already holds the word's letter.
pub fn count_intersections(
    grid: &Grid,
    word: &[u8],
    anchor: Coord,
    orientation: Orientation,
) -> usize {
    word.iter()
        .enumerate()
        .filter(|&(offset, &letter)| {
            let (row, col) = cell_at(anchor, orientation, offset as i32);
            grid.get(row, col) == letter
        })
        .count()
}

/// Ranking function for candidate placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scorer {
    /// `10 * intersections - 0.1 * distance(anchor, centre)`.
    Simple,
    /// Simple score plus 2 for every upcoming word sharing a letter with this one.
    Extended,
}

impl Scorer {
    /// Scores a placement of `entry` with `intersections` crossings.
    ///
    /// `upcoming` holds the letter masks of words still to be placed.
    pub fn score(
        self,
        grid: &Grid,
        entry: &NormalizedEntry,
        anchor: Coord,
        intersections: usize,
        upcoming: &[u32],
    ) -> f64 {
        let simple =
            10.0 * intersections as f64 - 0.1 * f64::from(manhattan(anchor, grid.centre()));
        match self {
            Scorer::Simple => simple,
            Scorer::Extended => {
                let connections = upcoming
                    .iter()
                    .filter(|&&letters| entry.shares_letter_with(letters))
                    .count();
                simple + 2.0 * connections as f64
            }
        }
    }
}

/// All candidates for `entry`, scored and sorted best first.
///
/// The sort is stable, so equal scores keep discovery order.
pub fn rank(
    grid: &Grid,
    entry: &NormalizedEntry,
    scorer: Scorer,
    upcoming: &[u32],
) -> Vec<Candidate> {
    let word = entry.bytes();
    let mut candidates = find_options(grid, word);
    for candidate in &mut candidates {
        let intersections =
            count_intersections(grid, word, candidate.anchor, candidate.orientation);
        candidate.score = scorer.score(grid, entry, candidate.anchor, intersections, upcoming);
    }
    sort_best_first(&mut candidates);
    candidates
}

/// Ranked candidates that pass validation, at most `limit` of them.
pub fn valid_placements(
    grid: &Grid,
    entry: &NormalizedEntry,
    scorer: Scorer,
    upcoming: &[u32],
    limit: usize,
) -> Vec<Candidate> {
    rank(grid, entry, scorer, upcoming)
        .into_iter()
        .filter(|candidate| {
            validate(grid, entry.bytes(), candidate.anchor, candidate.orientation).is_ok()
        })
        .take(limit)
        .collect()
}

fn sort_best_first(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

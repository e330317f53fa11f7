//! Orientations, coordinates and word footprints.
//!
//! Coordinates are `(row, col)` pairs of signed integers so that candidate
//! anchors computed off the top or left edge can be represented and then
//! rejected by the bounds check instead of wrapping.

use crate::words::NormalizedEntry;

/// A `(row, col)` cell position.
pub type Coord = (i32, i32);

/// Hard upper bound on either grid dimension.
pub const MAX_GRID_SIDE: usize = 50;

/// Placement axis of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Row fixed, column increasing.
    Across,
    /// Column fixed, row increasing.
    Down,
}

impl Orientation {
    pub const BOTH: [Orientation; 2] = [Orientation::Across, Orientation::Down];

    #[inline]
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Across => Orientation::Down,
            Orientation::Down => Orientation::Across,
        }
    }

    /// Offset from one letter of a word to the next.
    #[inline]
    pub fn step(self) -> Coord {
        match self {
            Orientation::Across => (0, 1),
            Orientation::Down => (1, 0),
        }
    }

    /// Heading of the clue list for this orientation.
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Across => "Across",
            Orientation::Down => "Down",
        }
    }
}

/// Cell holding the letter at `offset` of a word anchored at `anchor`.
///
/// Negative offsets address cells before the first letter.
#[inline]
pub fn cell_at(anchor: Coord, orientation: Orientation, offset: i32) -> Coord {
    let (d_row, d_col) = orientation.step();
    (anchor.0 + d_row * offset, anchor.1 + d_col * offset)
}

/// All cells covered by a word of `length` letters, first letter first.
pub fn footprint(
    anchor: Coord,
    orientation: Orientation,
    length: usize,
) -> impl Iterator<Item = Coord> {
    (0..length as i32).map(move |offset| cell_at(anchor, orientation, offset))
}

#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// Side of the square grid every strategy starts from.
///
/// `min(max_side, max(longest + 4, ceil(sqrt(4 * total_letters))))`.
pub fn grid_side(entries: &[NormalizedEntry], max_side: usize) -> usize {
    let longest = entries.iter().map(NormalizedEntry::len).max().unwrap_or(0);
    let total: usize = entries.iter().map(NormalizedEntry::len).sum();
    longest
        .saturating_add(4)
        .max(ceil_sqrt(4 * total))
        .min(max_side)
}

fn ceil_sqrt(value: usize) -> usize {
    let mut root = (value as f64).sqrt() as usize;
    while root * root < value {
        root += 1;
    }
    while root > 0 && (root - 1) * (root - 1) >= value {
        root -= 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::{normalize_entries, Entry};

    #[test]
    fn test_footprint_follows_orientation() {
        let across: Vec<_> = footprint((2, 3), Orientation::Across, 3).collect();
        assert_eq!(across, [(2, 3), (2, 4), (2, 5)]);
        let down: Vec<_> = footprint((2, 3), Orientation::Down, 3).collect();
        assert_eq!(down, [(2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn test_cell_before_start() {
        assert_eq!(cell_at((5, 5), Orientation::Across, -1), (5, 4));
        assert_eq!(cell_at((5, 5), Orientation::Down, -1), (4, 5));
    }

    #[test]
    fn test_ceil_sqrt() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(60), 8);
        assert_eq!(ceil_sqrt(64), 8);
        assert_eq!(ceil_sqrt(65), 9);
    }

    #[test]
    fn test_grid_side() {
        let entries = normalize_entries(&[
            Entry::new("home", "house"),
            Entry::new("steed", "horse"),
            Entry::new("shop", "store"),
        ]);
        // longest + 4 = 9 beats ceil(sqrt(60)) = 8
        assert_eq!(grid_side(&entries, MAX_GRID_SIDE), 9);

        let many: Vec<Entry> = (0..40).map(|_| Entry::new("", "ABCDEFGHIJ")).collect();
        // ceil(sqrt(1600)) = 40
        assert_eq!(grid_side(&normalize_entries(&many), MAX_GRID_SIDE), 40);
        assert_eq!(grid_side(&normalize_entries(&many), 30), 30);
    }
}

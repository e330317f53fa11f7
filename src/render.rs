//! Plain-text rendering of finished puzzles.

use std::fmt;

use crate::geometry::Orientation;
use crate::grid::{Grid, PlacedWord};
use crate::solver::Puzzle;

/// Words of one orientation, ordered by clue number.
pub fn clue_list(grid: &Grid, orientation: Orientation) -> Vec<&PlacedWord> {
    let mut words: Vec<&PlacedWord> = grid
        .words()
        .iter()
        .filter(|word| word.orientation == orientation)
        .collect();
    words.sort_by_key(|word| word.number);
    words
}

/// One line per grid row, empty cells shown as '.'.
pub fn format_grid(grid: &Grid) -> String {
    let mut output = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        output.extend(row.iter().map(|&cell| char::from(cell)));
        output.push('\n');
    }
    output
}

/// The grid followed by the across and down clue lists.
pub fn format_puzzle(grid: &Grid) -> String {
    let mut output = format_grid(grid);
    for orientation in Orientation::BOTH {
        let words = clue_list(grid, orientation);
        if words.is_empty() {
            continue;
        }
        output.push('\n');
        output.push_str(orientation.name());
        output.push('\n');
        for word in words {
            let (number, answer, clue) = (word.number, &word.answer, &word.clue);
            output.push_str(&format!("{number}. {answer}  {clue}\n"));
        }
    }
    output
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_puzzle(self.grid()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postprocess::finalize;
    use crate::words::{Entry, NormalizedEntry};

    fn sample_grid() -> Grid {
        let mut grid = Grid::new(9, 9).unwrap();
        let words = [("house", Orientation::Across), ("horse", Orientation::Down)];
        for (answer, orientation) in words {
            let raw = Entry::new(format!("a {answer}"), answer);
            let entry = NormalizedEntry::new(&raw).unwrap();
            grid.add_word(PlacedWord::new(&entry, (4, 2), orientation));
        }
        finalize(&grid).unwrap()
    }

    #[test]
    fn test_format_grid() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(0, 1, b'A');
        assert_eq!(format_grid(&grid), ".A.\n...\n");
    }

    #[test]
    fn test_puzzle_snapshot() {
        insta::assert_snapshot!(format_puzzle(&sample_grid()).trim_end(), @r"
        .......
        .HOUSE.
        .O.....
        .R.....
        .S.....
        .E.....

        Across
        1. HOUSE  a house

        Down
        1. HORSE  a horse
        ");
    }

    #[test]
    fn test_clue_list_filters_orientation() {
        let grid = sample_grid();
        let across = clue_list(&grid, Orientation::Across);
        assert_eq!(across.len(), 1);
        assert_eq!(across[0].answer, "HOUSE");
        let down = clue_list(&grid, Orientation::Down);
        assert_eq!(down[0].answer, "HORSE");
    }
}

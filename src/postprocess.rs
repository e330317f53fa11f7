//! Cropping and numbering of a finished layout.

use crate::error::CrosswordError;
use crate::grid::Grid;

/// Empty cells kept around the words on every side, where the grid allows.
pub const MARGIN: i32 = 1;

/// Crops to the words' bounding box plus [`MARGIN`], then numbers the words.
pub fn finalize(grid: &Grid) -> Result<Grid, CrosswordError> {
    let mut cropped = crop_to_content(grid)?;
    assign_numbers(&mut cropped);
    Ok(cropped)
}

/// Crops to the bounding box of all words, grown by [`MARGIN`] and clamped to
/// the grid. A grid without words is returned unchanged.
pub fn crop_to_content(grid: &Grid) -> Result<Grid, CrosswordError> {
    let Some(((top, left), (bottom, right))) = grid.bounding_box() else {
        return Ok(grid.duplicate());
    };

    let last_row = grid.height() as i32 - 1;
    let last_col = grid.width() as i32 - 1;
    grid.crop(
        (top - MARGIN).max(0),
        (left - MARGIN).max(0),
        (bottom + MARGIN).min(last_row),
        (right + MARGIN).min(last_col),
    )
}

/// Numbers words in reading order of their first cell, starting at 1.
///
/// Words starting on the same cell share a number. Returns the highest
/// number given out.
pub fn assign_numbers(grid: &mut Grid) -> u32 {
    let words = grid.words_mut();
    let mut order: Vec<usize> = (0..words.len()).collect();
    order.sort_by_key(|&index| words[index].anchor());

    let mut number = 0;
    let mut previous = None;
    for index in order {
        let anchor = words[index].anchor();
        if previous != Some(anchor) {
            number += 1;
            previous = Some(anchor);
        }
        words[index].number = number;
    }

    number
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Coord, Orientation};
    use crate::grid::PlacedWord;
    use crate::words::{Entry, NormalizedEntry};

    fn grid_with(size: usize, words: &[(&str, Coord, Orientation)]) -> Grid {
        let mut grid = Grid::new(size, size).unwrap();
        for &(answer, anchor, orientation) in words {
            let entry = NormalizedEntry::new(&Entry::new("", answer)).unwrap();
            grid.add_word(PlacedWord::new(&entry, anchor, orientation));
        }
        grid
    }

    #[test]
    fn test_crop_keeps_one_cell_margin() {
        let grid = grid_with(
            15,
            &[
                ("HOUSE", (6, 4), Orientation::Across),
                ("HORSE", (6, 4), Orientation::Down),
            ],
        );
        let cropped = crop_to_content(&grid).unwrap();
        // words span rows 6..=10 and cols 4..=8
        assert_eq!((cropped.width(), cropped.height()), (7, 7));
        assert_eq!(cropped.words()[0].anchor(), (1, 1));
        assert_eq!(cropped.bounding_box(), Some(((1, 1), (5, 5))));
    }

    #[test]
    fn test_crop_margin_is_clamped_at_edges() {
        let grid = grid_with(
            6,
            &[
                ("HOUSE", (0, 0), Orientation::Across),
                ("HORSE", (0, 0), Orientation::Down),
            ],
        );
        let cropped = crop_to_content(&grid).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (6, 6));
        assert_eq!(cropped.words()[0].anchor(), (0, 0));

        let grid = grid_with(
            5,
            &[
                ("HOUSE", (0, 0), Orientation::Across),
                ("HORSE", (0, 0), Orientation::Down),
            ],
        );
        let cropped = crop_to_content(&grid).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (5, 5));
    }

    #[test]
    fn test_numbers_follow_reading_order_and_share_start_cells() {
        let mut grid = grid_with(
            12,
            &[
                ("RAT", (6, 4), Orientation::Down),
                ("HOUSE", (2, 2), Orientation::Across),
                ("HORSE", (2, 2), Orientation::Down),
                ("EAR", (6, 2), Orientation::Across),
            ],
        );
        let highest = assign_numbers(&mut grid);
        assert_eq!(highest, 3);
        let numbers: Vec<u32> = grid.words().iter().map(|w| w.number).collect();
        // insertion order is kept: RAT, HOUSE, HORSE, EAR
        assert_eq!(numbers, [3, 1, 1, 2]);
    }

    #[test]
    fn test_empty_grid_is_left_alone() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert_eq!(crop_to_content(&grid).unwrap(), grid);
        assert_eq!(assign_numbers(&mut grid), 0);
    }
}

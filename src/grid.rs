//! Grid representation and operations for crossword layouts.
//!
//! The grid is a flat row-major byte array holding `A`-`Z` or [`EMPTY`],
//! plus the stack of words placed on it. Placing a word paints its cells;
//! removing the most recent word clears every cell of it that no remaining
//! word still covers.

use rustc_hash::FxHashSet;

use crate::error::CrosswordError;
use crate::geometry::{footprint, Coord, Orientation};
use crate::words::NormalizedEntry;

/// Fill byte for cells no word covers.
pub const EMPTY: u8 = b'.';

/// A word positioned on a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub answer: String,
    pub clue: String,
    /// Row of the first letter.
    pub row: i32,
    /// Column of the first letter.
    pub col: i32,
    pub orientation: Orientation,
    /// Clue number; 0 until the layout is numbered.
    pub number: u32,
}

impl PlacedWord {
    pub fn new(entry: &NormalizedEntry, anchor: Coord, orientation: Orientation) -> Self {
        Self {
            answer: entry.answer.clone(),
            clue: entry.clue.clone(),
            row: anchor.0,
            col: anchor.1,
            orientation,
            number: 0,
        }
    }

    #[inline]
    pub fn anchor(&self) -> Coord {
        (self.row, self.col)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.answer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    /// Cells covered by this word, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        footprint(self.anchor(), self.orientation, self.len())
    }

    /// Each covered cell paired with the letter this word puts there.
    pub fn letters(&self) -> impl Iterator<Item = (Coord, u8)> + '_ {
        self.cells().zip(self.answer.bytes())
    }

    /// Whether this word covers `cell`.
    pub fn covers(&self, cell: Coord) -> bool {
        let length = self.len() as i32;
        match self.orientation {
            Orientation::Across => {
                cell.0 == self.row && (self.col..self.col + length).contains(&cell.1)
            }
            Orientation::Down => {
                cell.1 == self.col && (self.row..self.row + length).contains(&cell.0)
            }
        }
    }
}

/// A rectangular letter surface and the words placed on it, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
    words: Vec<PlacedWord>,
}

impl Grid {
    /// Allocates an empty `width` x `height` grid.
    pub fn new(width: usize, height: usize) -> Result<Self, CrosswordError> {
        if width == 0 || height == 0 {
            return Err(CrosswordError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
            words: Vec::new(),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Words in placement order.
    #[inline]
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    pub(crate) fn words_mut(&mut self) -> &mut [PlacedWord] {
        &mut self.words
    }

    /// Middle cell, rounding towards the top left.
    #[inline]
    pub fn centre(&self) -> Coord {
        ((self.height / 2) as i32, (self.width / 2) as i32)
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> usize {
        row as usize * self.width + col as usize
    }

    /// Reads a cell; anything outside the grid reads as [`EMPTY`].
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> u8 {
        if self.in_bounds(row, col) {
            self.cells[self.index(row, col)]
        } else {
            EMPTY
        }
    }

    #[inline]
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        self.get(row, col) == EMPTY
    }

    /// Writes a cell; writes outside the grid are ignored.
    #[inline]
    pub fn set(&mut self, row: i32, col: i32, letter: u8) {
        if self.in_bounds(row, col) {
            let index = self.index(row, col);
            self.cells[index] = letter;
        }
    }

    /// Letter at a cell, or `None` for empty and out-of-bounds cells.
    pub fn cell(&self, row: i32, col: i32) -> Option<char> {
        match self.get(row, col) {
            EMPTY => None,
            letter => Some(char::from(letter)),
        }
    }

    /// Row-major view of the cells.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Appends a word and paints its letters over whatever is there.
    ///
    /// The caller is responsible for having validated the placement.
    pub fn add_word(&mut self, word: PlacedWord) {
        for ((row, col), letter) in word.letters() {
            self.set(row, col, letter);
        }
        self.words.push(word);
    }

    /// Pops the most recently added word.
    ///
    /// Cells of the removed word that another remaining word still covers
    /// keep their letter; the rest become empty.
    pub fn remove_last_word(&mut self) -> Option<PlacedWord> {
        let removed = self.words.pop()?;

        let covered: FxHashSet<Coord> = self.words.iter().flat_map(PlacedWord::cells).collect();
        for (row, col) in removed.cells() {
            if !covered.contains(&(row, col)) {
                self.set(row, col, EMPTY);
            }
        }

        Some(removed)
    }

    /// Copies the inclusive box `(min_row, min_col)..=(max_row, max_col)`
    /// into a new grid, shifting every word anchor by `(-min_row, -min_col)`.
    pub fn crop(
        &self,
        min_row: i32,
        min_col: i32,
        max_row: i32,
        max_col: i32,
    ) -> Result<Grid, CrosswordError> {
        let height = i64::from(max_row) - i64::from(min_row) + 1;
        let width = i64::from(max_col) - i64::from(min_col) + 1;
        if width <= 0 || height <= 0 {
            return Err(CrosswordError::InvalidDimensions { width, height });
        }

        let mut cropped = Grid::new(width as usize, height as usize)?;
        for row in 0..height as i32 {
            for col in 0..width as i32 {
                cropped.set(row, col, self.get(row + min_row, col + min_col));
            }
        }
        cropped.words = self
            .words
            .iter()
            .map(|word| PlacedWord {
                row: word.row - min_row,
                col: word.col - min_col,
                ..word.clone()
            })
            .collect();

        Ok(cropped)
    }

    /// Deep copy for strategies that branch from a shared starting grid.
    pub fn duplicate(&self) -> Grid {
        self.clone()
    }

    /// Smallest `(top_left, bottom_right)` box containing every placed word.
    pub fn bounding_box(&self) -> Option<(Coord, Coord)> {
        let mut cells = self.words.iter().flat_map(PlacedWord::cells);
        let first = cells.next()?;
        Some(cells.fold((first, first), |(low, high), (row, col)| {
            (
                (low.0.min(row), low.1.min(col)),
                (high.0.max(row), high.1.max(col)),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::Entry;

    fn word(answer: &str, anchor: Coord, orientation: Orientation) -> PlacedWord {
        let raw = Entry::new(format!("clue for {answer}"), answer);
        let entry = NormalizedEntry::new(&raw).unwrap();
        PlacedWord::new(&entry, anchor, orientation)
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, 0).is_err());
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert!(grid.rows().all(|row| row.iter().all(|&cell| cell == EMPTY)));
    }

    #[test]
    fn test_out_of_bounds_reads_are_empty_and_writes_ignored() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(-1, 0, b'A');
        grid.set(0, 3, b'A');
        grid.set(3, 0, b'A');
        assert_eq!(grid.get(-1, 0), EMPTY);
        assert_eq!(grid.get(0, 3), EMPTY);
        assert!(grid.rows().flatten().all(|&cell| cell == EMPTY));
        assert_eq!(grid.cell(10, 10), None);
    }

    #[test]
    fn test_add_word_paints_cells() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.add_word(word("CAT", (1, 1), Orientation::Across));
        assert_eq!(grid.cell(1, 1), Some('C'));
        assert_eq!(grid.cell(1, 3), Some('T'));
        assert_eq!(grid.words().len(), 1);
        for placed in grid.words() {
            for ((row, col), letter) in placed.letters() {
                assert_eq!(grid.get(row, col), letter);
            }
        }
    }

    #[test]
    fn test_remove_last_word_keeps_shared_cells() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.add_word(word("CAT", (1, 0), Orientation::Across));
        grid.add_word(word("BAD", (0, 1), Orientation::Down));

        let removed = grid.remove_last_word().unwrap();
        assert_eq!(removed.answer, "BAD");
        // the shared 'A' stays, the rest of BAD goes
        assert_eq!(grid.cell(1, 1), Some('A'));
        assert_eq!(grid.cell(0, 1), None);
        assert_eq!(grid.cell(2, 1), None);
        assert_eq!(grid.cell(1, 2), Some('T'));

        grid.remove_last_word();
        assert!(grid.rows().flatten().all(|&cell| cell == EMPTY));
        assert!(grid.remove_last_word().is_none());
    }

    #[test]
    fn test_crop_shifts_anchors() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.add_word(word("CAT", (3, 2), Orientation::Across));
        grid.add_word(word("BAD", (2, 3), Orientation::Down));

        let cropped = grid.crop(1, 1, 5, 5).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (5, 5));
        assert_eq!(cropped.words()[0].anchor(), (2, 1));
        assert_eq!(cropped.words()[1].anchor(), (1, 2));
        for placed in cropped.words() {
            for ((row, col), letter) in placed.letters() {
                assert_eq!(cropped.get(row, col), letter);
            }
        }
        assert!(grid.crop(3, 3, 2, 5).is_err());
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.add_word(word("CAT", (0, 0), Orientation::Across));
        let mut copy = grid.duplicate();
        copy.add_word(word("AX", (0, 1), Orientation::Down));
        assert_eq!(grid.words().len(), 1);
        assert_eq!(grid.cell(1, 1), None);
        assert_eq!(copy.cell(1, 1), Some('X'));
    }

    #[test]
    fn test_bounding_box() {
        let mut grid = Grid::new(10, 10).unwrap();
        assert_eq!(grid.bounding_box(), None);
        grid.add_word(word("HOUSE", (4, 2), Orientation::Across));
        grid.add_word(word("HORSE", (4, 2), Orientation::Down));
        assert_eq!(grid.bounding_box(), Some(((4, 2), (8, 6))));
    }

    #[test]
    fn test_covers() {
        let placed = word("CAT", (2, 2), Orientation::Down);
        assert!(placed.covers((2, 2)));
        assert!(placed.covers((4, 2)));
        assert!(!placed.covers((5, 2)));
        assert!(!placed.covers((3, 3)));
    }
}

//! End-to-end properties of generated puzzles.
//!
//! Every search here is seeded and step-limited so results do not depend on
//! machine speed.

use std::collections::BTreeMap;

use crossword_layout::geometry::Coord;
use crossword_layout::postprocess::MARGIN;
use crossword_layout::{
    generate, normalize_answer, CrosswordError, Entry, Grid, Puzzle, SearchConfig,
};

const PROFESSIONS: [&str; 12] = [
    "Bäcker",
    "Lehrer",
    "Arzt",
    "Maler",
    "Friseur",
    "Koch",
    "Gärtner",
    "Polizist",
    "Pilot",
    "Schreiner",
    "Elektriker",
    "Mechaniker",
];

fn entries(answers: &[&str]) -> Vec<Entry> {
    answers
        .iter()
        .map(|answer| Entry::new(format!("clue for {answer}"), *answer))
        .collect()
}

fn config(seed: u64) -> SearchConfig {
    SearchConfig {
        beam_width: 50,
        ..SearchConfig::deterministic(seed, 300, 20_000)
    }
}

fn word_lists() -> Vec<Vec<&'static str>> {
    vec![
        vec!["house", "horse", "store"],
        vec!["house", "horse", "store", "shore", "those", "otter"],
        vec!["crane", "nectar", "trance", "canter", "recant", "ant", "tan"],
        PROFESSIONS.to_vec(),
    ]
}

fn assert_words_match_cells(grid: &Grid) {
    for word in grid.words() {
        for ((row, col), letter) in word.letters() {
            assert_eq!(grid.get(row, col), letter, "{} at ({row}, {col})", word.answer);
        }
    }
}

fn assert_no_isolated_words(grid: &Grid) {
    let words = grid.words();
    for (index, word) in words.iter().enumerate() {
        let crosses = words.iter().enumerate().any(|(other_index, other)| {
            other_index != index
                && other.orientation != word.orientation
                && word.cells().any(|cell| other.covers(cell))
        });
        assert!(crosses, "{} crosses nothing", word.answer);
    }
}

fn assert_shared_cells_agree(grid: &Grid) {
    let mut letters: BTreeMap<Coord, u8> = BTreeMap::new();
    for word in grid.words() {
        for (cell, letter) in word.letters() {
            let existing = *letters.entry(cell).or_insert(letter);
            assert_eq!(existing, letter, "conflict at {cell:?}");
        }
    }
}

fn assert_numbering(grid: &Grid) {
    let mut by_anchor: BTreeMap<Coord, u32> = BTreeMap::new();
    for word in grid.words() {
        let number = *by_anchor.entry(word.anchor()).or_insert(word.number);
        assert_eq!(number, word.number, "words at {:?} differ", word.anchor());
    }

    // reading order of anchors gives 1, 2, 3, ...
    let numbers: Vec<u32> = by_anchor.values().copied().collect();
    let expected: Vec<u32> = (1..=by_anchor.len() as u32).collect();
    assert_eq!(numbers, expected);
}

fn assert_cropped(grid: &Grid) {
    let ((top, left), (bottom, right)) = grid.bounding_box().expect("puzzle has words");
    let last_row = grid.height() as i32 - 1;
    let last_col = grid.width() as i32 - 1;
    assert!(top <= MARGIN && left <= MARGIN);
    assert!(last_row - bottom <= MARGIN && last_col - right <= MARGIN);
}

fn assert_well_formed(puzzle: &Puzzle) {
    let grid = puzzle.grid();
    assert!(grid.width() > 0 && grid.height() > 0);
    assert_words_match_cells(grid);
    assert_no_isolated_words(grid);
    assert_shared_cells_agree(grid);
    assert_numbering(grid);
    assert_cropped(grid);
}

#[test]
fn test_generated_puzzles_are_well_formed() {
    for answers in word_lists() {
        for seed in [1, 2, 3] {
            let puzzle = generate(&entries(&answers), &config(seed)).unwrap();
            assert!(puzzle.placed_count() >= 3, "{answers:?}");
            assert_well_formed(&puzzle);
        }
    }
}

#[test]
fn test_shared_letters_give_a_layout() {
    let puzzle = generate(&entries(&["HOUSE", "HORSE", "STORE"]), &config(7)).unwrap();
    assert!(puzzle.placed_count() >= 2);
    assert!(puzzle.grid().width() > 0 && puzzle.grid().height() > 0);
    assert_eq!(puzzle.across().len() + puzzle.down().len(), puzzle.placed_count());
}

#[test]
fn test_disjoint_letters_are_a_shortfall() {
    let error = generate(&entries(&["ABC", "XYZ"]), &config(7)).unwrap_err();
    assert!(matches!(
        error,
        CrosswordError::Shortfall { required: 3, .. }
    ));
    assert!(error.needs_more_entries());
}

#[test]
fn test_empty_answers_fail_before_searching() {
    let error = generate(&entries(&["123", "?!", ""]), &config(7)).unwrap_err();
    assert!(matches!(error, CrosswordError::NoEntries));
}

#[test]
fn test_professions_place_at_least_eleven() {
    let puzzle = generate(&entries(&PROFESSIONS), &config(42)).unwrap();
    assert!(
        puzzle.placed_count() >= 11,
        "placed only {}",
        puzzle.placed_count()
    );
    assert_well_formed(&puzzle);
}

#[test]
fn test_search_is_reproducible() {
    let first = generate(&entries(&PROFESSIONS), &config(9)).unwrap();
    let second = generate(&entries(&PROFESSIONS), &config(9)).unwrap();
    assert_eq!(first.grid(), second.grid());
}

#[test]
fn test_normalization_is_idempotent() {
    for answer in PROFESSIONS
        .iter()
        .chain(["Œuvre", "São Paulo", "straße", "Ærø", "x-ray 2"].iter())
    {
        let once = normalize_answer(answer);
        assert_eq!(normalize_answer(&once), once);
        assert!(once.bytes().all(|byte| byte.is_ascii_uppercase()));
    }
}

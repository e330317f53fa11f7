//! File I/O for entry lists and finished puzzles.
//!
//! Entry files are plain text, one entry per line:
//!
//! ```text
//! # comment
//! HOUSE|A building for people to live in
//! horse|Animal you can ride
//! ```
//!
//! The answer comes before the first `|`, the clue after it. Blank lines and
//! lines starting with `#` are skipped. Answers are kept as written; they are
//! normalized when the puzzle is generated.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CrosswordError;
use crate::render::format_puzzle;
use crate::solver::Puzzle;
use crate::words::Entry;

const SEPARATOR: char = '|';

/// Parses entry lines. Line numbers in errors are 1-based.
pub fn parse_entries(text: &str) -> Result<Vec<Entry>, CrosswordError> {
    let mut entries = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let malformed = || CrosswordError::MalformedEntry {
            line: index + 1,
            content: trimmed.to_string(),
        };
        let (answer, clue) = trimmed.split_once(SEPARATOR).ok_or_else(malformed)?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(malformed());
        }

        entries.push(Entry::new(clue.trim(), answer));
    }

    Ok(entries)
}

/// Reads and parses an entry file.
pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<Entry>, CrosswordError> {
    let text = fs::read_to_string(path)?;
    parse_entries(&text)
}

/// Writes the rendered grid and clue lists.
pub fn save_puzzle(path: impl AsRef<Path>, puzzle: &Puzzle) -> Result<(), CrosswordError> {
    let mut file = BufWriter::new(File::create(path)?);
    write!(file, "{}", format_puzzle(puzzle.grid()))?;
    file.flush()?;
    Ok(())
}

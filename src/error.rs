//! Error types for building a crossword layout.
//!
//! Each variant has a stable code for documentation lookup:
//!
//! - E001: `NoEntries` (nothing placeable in the input)
//! - E002: `Shortfall` (too few words could be placed)
//! - E003: `InvalidDimensions` (grid or crop box with no area)
//! - E004: `MalformedEntry` (entry file line could not be parsed)
//! - E005: `Io` (reading or writing files)

use std::io;

/// Everything that can go wrong when laying out a puzzle.
#[derive(Debug, thiserror::Error)]
pub enum CrosswordError {
    #[error("no usable entries: every answer is empty after normalization")]
    NoEntries,

    #[error("only {placed} word(s) could be placed, at least {required} are needed")]
    Shortfall { placed: usize, required: usize },

    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("line {line}: expected `answer|clue`, got \"{content}\"")]
    MalformedEntry { line: usize, content: String },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl CrosswordError {
    /// Returns the error code for this error variant.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CrosswordError::NoEntries => "E001",
            CrosswordError::Shortfall { .. } => "E002",
            CrosswordError::InvalidDimensions { .. } => "E003",
            CrosswordError::MalformedEntry { .. } => "E004",
            CrosswordError::Io(_) => "E005",
        }
    }

    /// Whether the caller should ask for different or additional entries.
    #[must_use]
    pub fn needs_more_entries(&self) -> bool {
        matches!(
            self,
            CrosswordError::NoEntries | CrosswordError::Shortfall { .. }
        )
    }
}

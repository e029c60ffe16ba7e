//! Parse puzzles from text

use crate::collections::{Coord, Grid};
use crate::error::ParsePuzzleError;

/// Parses the grid structure: `_` marks an open cell, any other character
/// is blocked. Lines shorter than the longest line are padded with
/// blocked cells.
pub(crate) fn parse_structure(s: &str) -> Result<Grid<bool>, ParsePuzzleError> {
    let lines: Vec<&str> = s.lines().collect();
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    if width == 0 {
        return Err(ParsePuzzleError::EmptyStructure);
    }
    let mut grid = Grid::with_value(width, lines.len(), false);
    for (row, line) in lines.iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            if c == '_' {
                grid[Coord::new(col, row)] = true;
            }
        }
    }
    Ok(grid)
}

/// Parses the word list: one word per line, uppercased, blank lines
/// ignored. Overlap constraints compare single letters by byte index,
/// so words must be ASCII.
pub(crate) fn parse_words(s: &str) -> Result<Vec<String>, ParsePuzzleError> {
    let mut words = Vec::new();
    for line in s.lines() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if !word.is_ascii() {
            return Err(ParsePuzzleError::NonAsciiWord(word.to_string()));
        }
        words.push(word.to_ascii_uppercase());
    }
    Ok(words)
}

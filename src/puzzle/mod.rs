//! Crossword puzzles

pub use self::crossword::{Crossword, Direction, Overlap, SolutionDisplay, Variable, VariableRef};

mod crossword;
mod parse;

pub type VarId = usize;
pub type WordId = usize;

/// A complete assignment, one word per variable, indexed by `VarId`
pub type Solution = Vec<WordId>;

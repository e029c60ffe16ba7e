use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParsePuzzleError {
    #[error("structure is empty")]
    EmptyStructure,
    #[error("word \"{0}\" is not ASCII")]
    NonAsciiWord(String),
}

#[derive(Debug, Error)]
pub enum PuzzleFromFileError {
    #[error("error reading puzzle file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParsePuzzleError),
}

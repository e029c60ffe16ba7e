//! Generate images of unsolved or solved puzzles

use std::fmt;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

use once_cell::sync::Lazy;

use crate::collections::Coord;
use crate::puzzle::{Crossword, Solution};

// colors
const COLOR_CANVAS: &str = "black";
const COLOR_CELL: &str = "white";
const COLOR_LETTER: &str = "black";

// dimensions
const CELL_WIDTH: i32 = 100;
const CELL_BORDER: i32 = 2;
const FONT_SIZE_LETTER: i32 = 64;

static STYLE: Lazy<String> = Lazy::new(|| {
    format!(
        "\
        text{{\
          font-family:sans-serif;\
          font-size:{font_size}px;\
          text-anchor:middle;\
          fill:{color_letter}\
        }}",
        font_size = FONT_SIZE_LETTER,
        color_letter = COLOR_LETTER,
    )
});

/// Creates an image of a puzzle with an optional solution
pub struct PuzzleImageBuilder<'a> {
    crossword: &'a Crossword,
    solution: Option<&'a Solution>,
}

impl<'a> PuzzleImageBuilder<'a> {
    pub fn new(crossword: &'a Crossword) -> Self {
        Self {
            crossword,
            solution: None,
        }
    }

    pub fn solution(&mut self, solution: &'a Solution) -> &mut Self {
        self.solution = Some(solution);
        self
    }

    pub fn build(&self) -> PuzzleImage<'a> {
        PuzzleImage {
            crossword: self.crossword,
            solution: self.solution,
        }
    }
}

/// An SVG image of the puzzle grid. `Display` produces the SVG text.
pub struct PuzzleImage<'a> {
    crossword: &'a Crossword,
    solution: Option<&'a Solution>,
}

impl PuzzleImage<'_> {
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write!(writer, "{}", self)
    }
}

impl fmt::Display for PuzzleImage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.crossword.width() as i32 * CELL_WIDTH;
        let height = self.crossword.height() as i32 * CELL_WIDTH;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            width, height
        )?;
        writeln!(f, "<style>{}</style>", *STYLE)?;
        writeln!(
            f,
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            width, height, COLOR_CANVAS
        )?;
        let letters = self.solution.map(|solution| self.crossword.letter_grid(solution));
        for row in 0..self.crossword.height() {
            for col in 0..self.crossword.width() {
                let coord = Coord::new(col, row);
                if !self.crossword.is_open(coord) {
                    continue;
                }
                writeln!(
                    f,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                    col as i32 * CELL_WIDTH + CELL_BORDER,
                    row as i32 * CELL_WIDTH + CELL_BORDER,
                    CELL_WIDTH - 2 * CELL_BORDER,
                    CELL_WIDTH - 2 * CELL_BORDER,
                    COLOR_CELL
                )?;
                let letter = match letters.as_ref().and_then(|letters| letters[coord]) {
                    Some(letter) => letter,
                    None => continue,
                };
                writeln!(
                    f,
                    r#"<text x="{}" y="{}">{}</text>"#,
                    col as i32 * CELL_WIDTH + CELL_WIDTH / 2,
                    // baseline sits below the visual center of the cell
                    row as i32 * CELL_WIDTH + (CELL_WIDTH + FONT_SIZE_LETTER * 3 / 4) / 2,
                    letter
                )?;
            }
        }
        writeln!(f, "</svg>")
    }
}

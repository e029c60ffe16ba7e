use std::fmt;
use std::fs;
use std::ops::Deref;
use std::path::Path;

use itertools::Itertools;

use crate::collections::{Coord, Grid};
use crate::error::{ParsePuzzleError, PuzzleFromFileError};
use crate::puzzle::parse::{parse_structure, parse_words};
use crate::puzzle::{Solution, VarId, WordId};
use crate::{HashMap, HashSet};

/// The direction a variable's word reads in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

/// One slot of the grid requiring a word
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    /// the cell holding the word's first letter
    pub start: Coord,
    pub direction: Direction,
    /// the number of cells the word spans
    pub length: usize,
}

impl Variable {
    /// the coordinates of this variable's cells, in letter order
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let var = *self;
        (0..var.length).map(move |i| var.cell(i))
    }

    fn cell(&self, i: usize) -> Coord {
        match self.direction {
            Direction::Across => Coord::new(self.start.col() + i, self.start.row()),
            Direction::Down => Coord::new(self.start.col(), self.start.row() + i),
        }
    }
}

/// The single shared cell of two crossing variables, as a pair of letter indices:
/// letter `a` of the first variable must equal letter `b` of the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlap {
    pub a: usize,
    pub b: usize,
}

/// An unsolved crossword puzzle: the grid geometry and the candidate word pool
pub struct Crossword {
    grid: Grid<bool>,
    words: Vec<String>,
    variables: Vec<Variable>,
    overlaps: HashMap<(VarId, VarId), Overlap>,
    neighbors: Vec<Vec<VarId>>,
}

impl Crossword {
    /// Creates a puzzle from the grid of open cells and the word pool.
    /// Words are deduplicated and kept sorted so that domain enumeration
    /// is deterministic.
    pub fn new(grid: Grid<bool>, mut words: Vec<String>) -> Self {
        words.sort_unstable();
        words.dedup();
        let variables = find_variables(&grid);
        let overlaps = find_overlaps(&variables);
        let neighbors = neighbor_lists(variables.len(), &overlaps);
        Self {
            grid,
            words,
            variables,
            overlaps,
            neighbors,
        }
    }

    pub fn parse(structure: &str, words: &str) -> Result<Self, ParsePuzzleError> {
        let grid = parse_structure(structure)?;
        let words = parse_words(words)?;
        Ok(Self::new(grid, words))
    }

    pub fn from_files(
        structure: impl AsRef<Path>,
        words: impl AsRef<Path>,
    ) -> Result<Self, PuzzleFromFileError> {
        let structure = fs::read_to_string(structure)?;
        let words = fs::read_to_string(words)?;
        let crossword = Self::parse(&structure, &words)?;
        Ok(crossword)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn is_open(&self, coord: Coord) -> bool {
        self.grid[coord]
    }

    pub fn variable(&self, id: VarId) -> VariableRef<'_> {
        VariableRef {
            crossword: self,
            id,
        }
    }

    pub fn variables(&self) -> impl Iterator<Item = VariableRef<'_>> {
        (0..self.variables.len()).map(move |id| self.variable(id))
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn word(&self, id: WordId) -> &str {
        &self.words[id]
    }

    /// the candidate word pool, sorted and deduplicated
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// the overlap between two variables, or `None` if they do not cross
    pub fn overlap(&self, a: VarId, b: VarId) -> Option<Overlap> {
        self.overlaps.get(&(a, b)).copied()
    }

    /// ids of the variables sharing a cell with `id`, in ascending order
    pub fn neighbors(&self, id: VarId) -> &[VarId] {
        &self.neighbors[id]
    }

    /// Checks that a solution is complete and satisfies every constraint:
    /// one word per variable, all words distinct, lengths matching and
    /// overlap letters agreeing.
    pub fn verify_solution(&self, solution: &Solution) -> bool {
        if solution.len() != self.variables.len() {
            return false;
        }
        let distinct = solution.iter().collect::<HashSet<_>>().len() == solution.len();
        if !distinct {
            return false;
        }
        let lengths_match = solution
            .iter()
            .enumerate()
            .all(|(id, &word)| self.word(word).len() == self.variables[id].length);
        if !lengths_match {
            return false;
        }
        self.overlaps.iter().all(|(&(x, y), overlap)| {
            self.word(solution[x]).as_bytes()[overlap.a]
                == self.word(solution[y]).as_bytes()[overlap.b]
        })
    }

    /// the letter each cell receives from a solution
    pub fn letter_grid(&self, solution: &Solution) -> Grid<Option<char>> {
        let mut letters = Grid::with_value(self.width(), self.height(), None);
        for (id, &word) in solution.iter().enumerate() {
            for (cell, letter) in self.variables[id].cells().zip(self.word(word).chars()) {
                letters[cell] = Some(letter);
            }
        }
        letters
    }

    /// Renders the filled grid for the terminal: a letter per filled cell,
    /// `█` for blocked cells.
    pub fn display_solution<'a>(&'a self, solution: &'a Solution) -> SolutionDisplay<'a> {
        SolutionDisplay {
            crossword: self,
            solution,
        }
    }
}

#[derive(Clone, Copy)]
pub struct VariableRef<'a> {
    crossword: &'a Crossword,
    id: VarId,
}

impl<'a> VariableRef<'a> {
    pub fn id(self) -> VarId {
        self.id
    }

    pub fn variable(self) -> &'a Variable {
        &self.crossword.variables[self.id]
    }

    pub fn neighbors(self) -> impl Iterator<Item = VariableRef<'a>> {
        let crossword = self.crossword;
        crossword
            .neighbors(self.id)
            .iter()
            .map(move |&id| crossword.variable(id))
    }

    /// the number of variables crossing this one
    pub fn degree(self) -> usize {
        self.crossword.neighbors(self.id).len()
    }

    pub fn overlap(self, other: VarId) -> Option<Overlap> {
        self.crossword.overlap(self.id, other)
    }
}

impl Deref for VariableRef<'_> {
    type Target = Variable;

    fn deref(&self) -> &Self::Target {
        self.variable()
    }
}

pub struct SolutionDisplay<'a> {
    crossword: &'a Crossword,
    solution: &'a Solution,
}

impl fmt::Display for SolutionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = self.crossword.letter_grid(self.solution);
        for row in 0..self.crossword.height() {
            for col in 0..self.crossword.width() {
                let coord = Coord::new(col, row);
                if self.crossword.is_open(coord) {
                    write!(f, "{}", letters[coord].unwrap_or(' '))?;
                } else {
                    write!(f, "█")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Derives the variable set from the grid: every maximal horizontal or
/// vertical run of at least two open cells.
fn find_variables(grid: &Grid<bool>) -> Vec<Variable> {
    let mut variables = Vec::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let coord = Coord::new(col, row);
            if !grid[coord] {
                continue;
            }
            if col == 0 || !grid[Coord::new(col - 1, row)] {
                let length = (col..grid.width())
                    .take_while(|&c| grid[Coord::new(c, row)])
                    .count();
                if length > 1 {
                    variables.push(Variable {
                        start: coord,
                        direction: Direction::Across,
                        length,
                    });
                }
            }
            if row == 0 || !grid[Coord::new(col, row - 1)] {
                let length = (row..grid.height())
                    .take_while(|&r| grid[Coord::new(col, r)])
                    .count();
                if length > 1 {
                    variables.push(Variable {
                        start: coord,
                        direction: Direction::Down,
                        length,
                    });
                }
            }
        }
    }
    variables
}

/// Finds the crossing cell of every variable pair. Both key orders are
/// stored since the constraint is bidirectional.
fn find_overlaps(variables: &[Variable]) -> HashMap<(VarId, VarId), Overlap> {
    let mut overlaps = HashMap::default();
    for ((x, var_x), (y, var_y)) in variables.iter().enumerate().tuple_combinations() {
        if var_x.direction == var_y.direction {
            // maximal runs in the same direction never share a cell
            continue;
        }
        let crossing = var_x.cells().enumerate().find_map(|(i, cell)| {
            var_y.cells().position(|other| other == cell).map(|j| (i, j))
        });
        if let Some((i, j)) = crossing {
            overlaps.insert((x, y), Overlap { a: i, b: j });
            overlaps.insert((y, x), Overlap { a: j, b: i });
        }
    }
    overlaps
}

fn neighbor_lists(
    variable_count: usize,
    overlaps: &HashMap<(VarId, VarId), Overlap>,
) -> Vec<Vec<VarId>> {
    let mut neighbors = vec![Vec::new(); variable_count];
    for &(x, y) in overlaps.keys() {
        neighbors[x].push(y);
    }
    for list in &mut neighbors {
        list.sort_unstable();
    }
    neighbors
}

#[cfg(test)]
mod test {
    use super::*;

    fn crossword(structure: &str, words: &str) -> Crossword {
        Crossword::parse(structure, words).unwrap()
    }

    #[test]
    fn variables_from_grid() {
        let crossword = crossword("___\n#_#\n#_#", "tea\near");
        let mut variables: Vec<Variable> = crossword.variables().map(|v| *v).collect();
        variables.sort_by_key(|v| v.direction == Direction::Down);
        assert_eq!(
            variables,
            vec![
                Variable {
                    start: Coord::new(0, 0),
                    direction: Direction::Across,
                    length: 3,
                },
                Variable {
                    start: Coord::new(1, 0),
                    direction: Direction::Down,
                    length: 3,
                },
            ]
        );
    }

    #[test]
    fn single_cells_are_not_variables() {
        let crossword = crossword("_#_\n###\n_#_", "ab");
        assert_eq!(0, crossword.variable_count());
    }

    #[test]
    fn overlaps_are_symmetric() {
        let crossword = crossword("___\n#_#\n#_#", "tea\near");
        let (across, down) = (0, 1);
        assert_eq!(Some(Overlap { a: 1, b: 0 }), crossword.overlap(across, down));
        assert_eq!(Some(Overlap { a: 0, b: 1 }), crossword.overlap(down, across));
        assert_eq!(&[down][..], crossword.neighbors(across));
        assert_eq!(&[across][..], crossword.neighbors(down));
        let across_ref = crossword.variable(across);
        assert_eq!(1, across_ref.degree());
        assert_eq!(Some(Overlap { a: 1, b: 0 }), across_ref.overlap(down));
        let neighbor_ids: Vec<_> = across_ref.neighbors().map(|v| v.id()).collect();
        assert_eq!(vec![down], neighbor_ids);
    }

    #[test]
    fn verify_solution_rejects_duplicates() {
        // two disconnected slots, one candidate word
        let crossword = crossword("___\n###\n___", "cat");
        let cat = 0;
        assert!(!crossword.verify_solution(&vec![cat, cat]));
    }
}

//! Solve crossword puzzles

use crate::puzzle::{Crossword, Solution};

use self::domains::Domains;
use self::propagate::{ac3, enforce_node_consistency};
use self::search::search_solution;

mod domains;
mod propagate;
mod search;

pub enum SolveResult {
    /// No assignment satisfies the puzzle constraints. A normal outcome,
    /// not an error.
    Unsolvable,
    /// A complete, consistent assignment was found.
    Solved(Solution),
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&Solution> {
        match self {
            SolveResult::Solved(solution) => Some(solution),
            _ => None,
        }
    }
}

pub struct Solver<'a> {
    crossword: &'a Crossword,
}

impl<'a> Solver<'a> {
    pub fn new(crossword: &'a Crossword) -> Self {
        Self { crossword }
    }

    /// Prunes domains with node and arc consistency, then searches for a
    /// complete assignment.
    pub fn solve(&self) -> SolveResult {
        let mut domains = Domains::new(self.crossword);
        enforce_node_consistency(self.crossword, &mut domains);
        if !ac3(self.crossword, &mut domains) {
            return SolveResult::Unsolvable;
        }
        info!("Begin backtracking");
        match search_solution(self.crossword, &domains) {
            Some(solution) => {
                debug_assert!(self.crossword.verify_solution(&solution));
                SolveResult::Solved(solution)
            }
            None => SolveResult::Unsolvable,
        }
    }
}

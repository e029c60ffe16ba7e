//! Backtracking search over partial assignments

use std::cmp::Reverse;

use itertools::Itertools;

use crate::puzzle::{Crossword, Overlap, Solution, VarId, WordId};
use crate::solve::domains::Domains;

/// Depth-first search for a complete, consistent assignment. Domains are
/// read-only here; all trial state lives in the assignment.
pub(crate) fn search_solution(crossword: &Crossword, domains: &Domains) -> Option<Solution> {
    let mut context = SearchContext {
        crossword,
        domains,
        assignment: Assignment::new(crossword.variable_count()),
    };
    if context.backtrack() {
        Some(context.assignment.into_solution())
    } else {
        None
    }
}

struct SearchContext<'a> {
    crossword: &'a Crossword,
    domains: &'a Domains,
    assignment: Assignment,
}

impl SearchContext<'_> {
    fn backtrack(&mut self) -> bool {
        if self.assignment.is_complete() {
            return true;
        }
        debug!("backtracking (depth={})", self.assignment.len() + 1);
        let var = self.select_unassigned_variable();
        for word in self.order_domain_values(var) {
            debug!(
                "guessing \"{}\" for {:?}",
                self.crossword.word(word),
                *self.crossword.variable(var)
            );
            self.assignment.insert(var, word);
            if self.is_consistent() && self.backtrack() {
                return true;
            }
            self.assignment.remove(var);
        }
        false
    }

    /// The whole assignment must hold: pairwise distinct words, lengths
    /// matching the slots, overlap letters agreeing.
    fn is_consistent(&self) -> bool {
        let distinct = self
            .assignment
            .iter()
            .tuple_combinations()
            .all(|((_, a), (_, b))| a != b);
        if !distinct {
            return false;
        }
        for (var, word) in self.assignment.iter() {
            let word = self.crossword.word(word);
            if word.len() != self.crossword.variable(var).length {
                return false;
            }
            for &neighbor in self.crossword.neighbors(var) {
                let other = match self.assignment.get(neighbor) {
                    Some(other) => self.crossword.word(other),
                    None => continue,
                };
                let Overlap { a, b } = self.crossword.overlap(var, neighbor).unwrap();
                if word.as_bytes()[a] != other.as_bytes()[b] {
                    return false;
                }
            }
        }
        true
    }

    /// Picks the unassigned variable with the fewest remaining candidates,
    /// breaking ties by highest degree, then by lowest id.
    fn select_unassigned_variable(&self) -> VarId {
        (0..self.crossword.variable_count())
            .filter(|&var| !self.assignment.contains(var))
            .min_by_key(|&var| {
                (
                    self.domains.len(var),
                    Reverse(self.crossword.variable(var).degree()),
                )
            })
            .expect("no unassigned variables")
    }

    /// Orders a variable's candidates by how many words each would
    /// eliminate from unassigned neighbors' domains, fewest first. The
    /// sort is stable, so equal counts keep sorted word order.
    fn order_domain_values(&self, var: VarId) -> Vec<WordId> {
        let mut values = self.domains.words(var).to_vec();
        let neighbors: Vec<(Overlap, &[WordId])> = self
            .crossword
            .neighbors(var)
            .iter()
            .filter(|&&neighbor| !self.assignment.contains(neighbor))
            .map(|&neighbor| {
                let overlap = self.crossword.overlap(var, neighbor).unwrap();
                (overlap, self.domains.words(neighbor))
            })
            .collect();
        if neighbors.is_empty() {
            return values;
        }
        values.sort_by_cached_key(|&word| {
            let letters = self.crossword.word(word).as_bytes();
            neighbors
                .iter()
                .map(|&(overlap, words)| {
                    words
                        .iter()
                        .filter(|&&other| {
                            self.crossword.word(other).as_bytes()[overlap.b] != letters[overlap.a]
                        })
                        .count()
                })
                .sum::<usize>()
        });
        values
    }
}

/// A partial assignment of words to variables, mutated with scoped
/// rollback as the search explores and abandons branches.
struct Assignment {
    words: Vec<Option<WordId>>,
    assigned: usize,
}

impl Assignment {
    fn new(variable_count: usize) -> Self {
        Self {
            words: vec![None; variable_count],
            assigned: 0,
        }
    }

    fn insert(&mut self, var: VarId, word: WordId) {
        debug_assert!(self.words[var].is_none());
        self.words[var] = Some(word);
        self.assigned += 1;
    }

    fn remove(&mut self, var: VarId) {
        debug_assert!(self.words[var].is_some());
        self.words[var] = None;
        self.assigned -= 1;
    }

    fn contains(&self, var: VarId) -> bool {
        self.words[var].is_some()
    }

    fn get(&self, var: VarId) -> Option<WordId> {
        self.words[var]
    }

    fn len(&self) -> usize {
        self.assigned
    }

    fn is_complete(&self) -> bool {
        self.assigned == self.words.len()
    }

    fn iter(&self) -> impl Iterator<Item = (VarId, WordId)> + Clone + '_ {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(var, word)| word.map(|word| (var, word)))
    }

    fn into_solution(self) -> Solution {
        self.words
            .into_iter()
            .map(|word| word.expect("incomplete assignment"))
            .collect()
    }
}

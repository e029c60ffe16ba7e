use crate::puzzle::{Crossword, VarId, WordId};

/// The current candidate word set of every variable.
///
/// Word ids are assigned in sorted word order, so iterating a domain
/// enumerates candidates deterministically.
#[derive(Clone)]
pub(crate) struct Domains {
    words: Vec<Vec<WordId>>,
}

impl Domains {
    /// Starts every variable with its own copy of the full word pool.
    pub fn new(crossword: &Crossword) -> Self {
        let all: Vec<WordId> = (0..crossword.words().len()).collect();
        Self {
            words: vec![all; crossword.variable_count()],
        }
    }

    pub fn words(&self, var: VarId) -> &[WordId] {
        &self.words[var]
    }

    pub fn len(&self, var: VarId) -> usize {
        self.words[var].len()
    }

    pub fn is_empty(&self, var: VarId) -> bool {
        self.words[var].is_empty()
    }

    /// Keeps only the words satisfying `keep`. Returns true if the domain
    /// changed.
    pub fn retain(&mut self, var: VarId, keep: impl FnMut(&WordId) -> bool) -> bool {
        let before = self.words[var].len();
        self.words[var].retain(keep);
        self.words[var].len() != before
    }
}

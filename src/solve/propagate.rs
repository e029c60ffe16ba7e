//! Node and arc consistency over the overlap constraint graph

use crate::puzzle::{Crossword, VarId};
use crate::solve::domains::Domains;
use crate::LinkedHashSet;

/// Removes every word that cannot fit a variable's slot. Length is the
/// only unary constraint.
pub(crate) fn enforce_node_consistency(crossword: &Crossword, domains: &mut Domains) {
    for var in 0..crossword.variable_count() {
        let length = crossword.variable(var).length;
        let before = domains.len(var);
        domains.retain(var, |&word| crossword.word(word).len() == length);
        let removed = before - domains.len(var);
        if removed > 0 {
            debug!(
                "removed {} words of the wrong length from {:?}",
                removed,
                *crossword.variable(var)
            );
        }
    }
}

/// Enforces arc consistency with AC-3. Returns false if a domain was
/// emptied, which means the puzzle has no solution. Propagation only
/// prunes; it never assigns.
///
/// Requires node consistency: every domain word must have its
/// variable's length, or overlap indexing is out of bounds.
pub(crate) fn ac3(crossword: &Crossword, domains: &mut Domains) -> bool {
    // worklist of ordered arcs, seeded with every crossing pair
    let mut arcs: LinkedHashSet<(VarId, VarId)> = LinkedHashSet::default();
    for x in 0..crossword.variable_count() {
        for &y in crossword.neighbors(x) {
            arcs.insert((x, y));
        }
    }
    while let Some((x, y)) = arcs.pop_front() {
        if !revise(crossword, domains, x, y) {
            continue;
        }
        if domains.is_empty(x) {
            debug!("domain of {:?} is empty", *crossword.variable(x));
            return false;
        }
        // x shrank, so every other neighbor must be rechecked against it
        for &z in crossword.neighbors(x) {
            if z != y {
                arcs.insert((z, x));
            }
        }
    }
    true
}

/// Removes from `x`'s domain every word with no partner in `y`'s domain
/// agreeing at the crossing cell. Returns true if the domain changed.
/// A no-op if the variables do not cross.
fn revise(crossword: &Crossword, domains: &mut Domains, x: VarId, y: VarId) -> bool {
    let overlap = match crossword.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };
    // the letters y can put in the shared cell
    let mut supported = [false; 256];
    for &word in domains.words(y) {
        supported[crossword.word(word).as_bytes()[overlap.b] as usize] = true;
    }
    let changed = domains.retain(x, |&word| {
        supported[crossword.word(word).as_bytes()[overlap.a] as usize]
    });
    if changed {
        debug!(
            "revised {:?} against {:?}, {} words remain",
            *crossword.variable(x),
            *crossword.variable(y),
            domains.len(x)
        );
    }
    changed
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::puzzle::Crossword;

    fn crossword(structure: &str, words: &str) -> Crossword {
        Crossword::parse(structure, words).unwrap()
    }

    fn domain_words<'a>(crossword: &'a Crossword, domains: &Domains, var: VarId) -> Vec<&'a str> {
        domains
            .words(var)
            .iter()
            .map(|&word| crossword.word(word))
            .collect()
    }

    #[test]
    fn node_consistency_keeps_matching_lengths() {
        let crossword = crossword("___", "cat\ndog\nax");
        let mut domains = Domains::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);
        assert_eq!(vec!["CAT", "DOG"], domain_words(&crossword, &domains, 0));
    }

    #[test]
    fn ac3_prunes_unsupported_words() {
        // the across slot's third letter crosses the down slot's first
        let crossword = crossword("___\n##_\n##_", "cat\ntar\ndog");
        let (across, down) = (0, 1);
        let mut domains = Domains::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);
        assert!(ac3(&crossword, &mut domains));
        assert_eq!(vec!["CAT"], domain_words(&crossword, &domains, across));
        assert_eq!(vec!["TAR"], domain_words(&crossword, &domains, down));
    }

    #[test]
    fn ac3_is_sound() {
        let crossword = crossword(
            "_____\n#_#_#\n_____",
            "house\ngreat\noar\nsea\nmouse\ntar\nbee\nplant",
        );
        let mut domains = Domains::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);
        assert!(ac3(&crossword, &mut domains));
        for x in 0..crossword.variable_count() {
            for &word in domains.words(x) {
                for &y in crossword.neighbors(x) {
                    let overlap = crossword.overlap(x, y).unwrap();
                    let supported = domains.words(y).iter().any(|&other| {
                        crossword.word(word).as_bytes()[overlap.a]
                            == crossword.word(other).as_bytes()[overlap.b]
                    });
                    assert!(supported);
                }
            }
        }
    }

    #[test]
    fn ac3_is_idempotent() {
        let crossword = crossword("___\n##_\n##_", "cat\ntar\ndog\nrat");
        let mut domains = Domains::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);
        assert!(ac3(&crossword, &mut domains));
        let first: Vec<Vec<&str>> = (0..crossword.variable_count())
            .map(|var| domain_words(&crossword, &domains, var))
            .collect();
        assert!(ac3(&crossword, &mut domains));
        let second: Vec<Vec<&str>> = (0..crossword.variable_count())
            .map(|var| domain_words(&crossword, &domains, var))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn ac3_reports_empty_domain() {
        // no word pair agrees at the crossing cell
        let crossword = crossword("___\n#_#\n#_#", "abc\nxyz");
        let mut domains = Domains::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);
        assert!(!ac3(&crossword, &mut domains));
    }

    #[test]
    fn ac3_without_neighbors_changes_nothing() {
        let crossword = crossword("___", "cat\ndog\nax");
        let mut domains = Domains::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);
        assert!(ac3(&crossword, &mut domains));
        assert_eq!(vec!["CAT", "DOG"], domain_words(&crossword, &domains, 0));
    }
}

//! Unsatisfiability of arbitrary CNF clause sets by resolution saturation.

use crate::{Clause, ClauseSet};
use std::collections::BTreeSet;

/// One resolution round: `Res(K) = K ∪ { non-tautological resolvents }` over
/// all unordered clause pairs in `K`.
///
/// ```rust
/// use hornsat::{clause, resolve, ClauseSet};
///
/// let k = ClauseSet::from_clauses([clause!["X", "Y"], clause!["-X"]]);
/// assert!(resolve(&k).contains(&clause!["Y"]));
/// ```
pub fn resolve(k: &ClauseSet) -> ClauseSet {
    let clauses: Vec<&Clause> = k.iter().collect();
    let mut result: BTreeSet<Clause> = k.iter().cloned().collect();
    for (i, &first) in clauses.iter().enumerate() {
        for &second in &clauses[i + 1..] {
            for resolvent in first.resolvents(second) {
                if !resolvent.is_tautology() {
                    result.insert(resolvent);
                }
            }
        }
    }
    ClauseSet::new(result)
}

/// Decide whether a clause set is unsatisfiable.
///
/// Iterates [resolve] until the set stops growing. The input is unsatisfiable
/// iff the empty clause shows up along the way (refutation completeness of
/// propositional resolution); a fixpoint without it means satisfiable.
///
/// Always terminates: over the finitely many variables of `k` there are
/// finitely many non-tautological clauses, and the saturation sequence only
/// grows.
///
/// ```rust
/// use hornsat::{clause, decide_unsat, ClauseSet};
///
/// // X ∧ ¬X
/// let k = ClauseSet::from_clauses([clause!["X"], clause!["-X"]]);
/// assert!(decide_unsat(&k));
///
/// // (X ∨ Y) ∧ ¬X is satisfied by Y
/// let k = ClauseSet::from_clauses([clause!["X", "Y"], clause!["-X"]]);
/// assert!(!decide_unsat(&k));
///
/// // The empty clause set is vacuously satisfiable
/// assert!(!decide_unsat(&ClauseSet::from_clauses([])));
/// ```
pub fn decide_unsat(k: &ClauseSet) -> bool {
    let empty = Clause::empty();
    let mut current = k.clone();
    loop {
        let next = resolve(&current);
        log::debug!(
            "Saturation round: {} -> {} clauses",
            current.len(),
            next.len()
        );
        if next.contains(&empty) {
            return true;
        }
        if next == current {
            return false;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{brute_force, clause};
    use proptest::prelude::*;

    #[test]
    fn test_direct_contradiction() {
        let k = ClauseSet::from_clauses([clause!["X"], clause!["-X"]]);
        assert!(decide_unsat(&k));
    }

    #[test]
    fn test_covered_disjunction() {
        // (X ∨ Y) ∧ ¬X ∧ ¬Y refutes via {Y} and then ⊥
        let k = ClauseSet::from_clauses([clause!["X", "Y"], clause!["-X"], clause!["-Y"]]);
        assert!(decide_unsat(&k));
    }

    #[test]
    fn test_implication_chain() {
        let k = ClauseSet::from_clauses([clause!["A"], clause!["-A", "B"], clause!["-B"]]);
        assert!(decide_unsat(&k));
    }

    #[test]
    fn test_empty_clause_set_is_satisfiable() {
        assert!(!decide_unsat(&ClauseSet::from_clauses([])));
    }

    #[test]
    fn test_empty_clause_member_is_unsatisfiable() {
        assert!(decide_unsat(&ClauseSet::from_clauses([clause![]])));
    }

    #[test]
    fn test_tautologies_alone_are_satisfiable() {
        let k = ClauseSet::from_clauses([clause!["X", "-X"], clause!["Y", "-Y", "Z"]]);
        assert!(!decide_unsat(&k));
    }

    #[test]
    fn test_resolve_keeps_input_clauses() {
        let k = ClauseSet::from_clauses([clause!["X", "Y"], clause!["-X"]]);
        let res = resolve(&k);
        assert!(k.iter().all(|c| res.contains(c)));
        assert_eq!(res.len(), 3);
    }

    #[test]
    fn test_resolve_discards_tautological_resolvents() {
        // The only resolvents of this pair are tautologies
        let k = ClauseSet::from_clauses([clause!["X", "Y"], clause!["-X", "-Y"]]);
        assert_eq!(resolve(&k), k);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_agrees_with_brute_force(k: ClauseSet) {
            prop_assert_eq!(decide_unsat(&k), !brute_force::satisfiable(&k));
        }

        #[test]
        fn test_pure(k: ClauseSet) {
            prop_assert_eq!(decide_unsat(&k), decide_unsat(&k));
        }
    }
}

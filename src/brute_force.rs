//! Exhaustive truth-table enumeration over a clause set's variables.
//!
//! This is the oracle the decision procedures are cross-checked against, and
//! the tool the shipped test vectors were derived with. It is exponential in
//! the variable count by construction, so keep inputs small.

use crate::{Clause, ClauseSet, Model, Variable};

/// Evaluate a single clause under the assignment `trues` (variables in the
/// set are true, all others false).
fn clause_satisfied(clause: &Clause, trues: &Model) -> bool {
    clause
        .literals()
        .any(|lit| lit.positive == trues.contains(&lit.variable))
}

/// Evaluate the whole conjunction under the assignment `trues`.
///
/// ```rust
/// use hornsat::{clause, is_satisfied, ClauseSet, Variable};
/// use std::collections::BTreeSet;
///
/// let k = ClauseSet::from_clauses([clause!["X", "Y"], clause!["-Y"]]);
/// let trues = BTreeSet::from([Variable::new("X")]);
/// assert!(is_satisfied(&k, &trues));
/// assert!(!is_satisfied(&k, &BTreeSet::new()));
/// ```
pub fn is_satisfied(k: &ClauseSet, trues: &Model) -> bool {
    k.iter().all(|clause| clause_satisfied(clause, trues))
}

fn assignment(variables: &[Variable], mask: usize) -> Model {
    variables
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, variable)| variable.clone())
        .collect()
}

/// Check satisfiability by trying every assignment.
pub fn satisfiable(k: &ClauseSet) -> bool {
    let variables: Vec<Variable> = k.variables().into_iter().collect();
    assert!(
        variables.len() < usize::BITS as usize,
        "Too many variables for truth-table enumeration"
    );
    (0..(1usize << variables.len())).any(|mask| is_satisfied(k, &assignment(&variables, mask)))
}

/// All satisfying assignments, each as its set of true variables.
pub fn models(k: &ClauseSet) -> Vec<Model> {
    let variables: Vec<Variable> = k.variables().into_iter().collect();
    assert!(
        variables.len() < usize::BITS as usize,
        "Too many variables for truth-table enumeration"
    );
    (0..(1usize << variables.len()))
        .map(|mask| assignment(&variables, mask))
        .filter(|trues| is_satisfied(k, trues))
        .collect()
}

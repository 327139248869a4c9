//! The marker algorithm: linear-time satisfiability and minimal models for
//! Horn formulas.

use crate::{HornFormula, Model};

/// Decide satisfiability of a Horn formula and compute its minimal model.
///
/// Starts from the fact heads and keeps firing rules whose whole body is
/// already marked until nothing new gets marked; the marking only ever grows,
/// so the fixpoint arrives within `|variables|` rounds. A goal clause whose
/// body ended up fully marked refutes the formula (`None`). Otherwise the
/// marking is the minimal model: every variable in it was forced by a fact or
/// a satisfied rule body, never guessed, so it is contained in every
/// satisfying assignment.
///
/// Goals are checked after the fixpoint, so a formula without facts is still
/// refuted by a goal with an empty body (the bare empty clause).
///
/// ```rust
/// use hornsat::{clause, marker_algorithm, ClauseSet, HornFormula, Variable};
///
/// // X, X → Y, no goal: the minimal model is {X, Y}
/// let k = ClauseSet::from_clauses([clause!["X"], clause!["-X", "Y"]]);
/// let psi = HornFormula::try_from(k).unwrap();
/// let model = marker_algorithm(&psi).unwrap();
/// assert!(model.contains(&Variable::new("X")));
/// assert!(model.contains(&Variable::new("Y")));
/// assert_eq!(model.len(), 2);
///
/// // Adding the goal (X ∧ Y) → 0 makes it unsatisfiable
/// let k = ClauseSet::from_clauses([clause!["X"], clause!["-X", "Y"], clause!["-Y", "-X"]]);
/// let psi = HornFormula::try_from(k).unwrap();
/// assert_eq!(marker_algorithm(&psi), None);
/// ```
pub fn marker_algorithm(psi: &HornFormula) -> Option<Model> {
    let mut model: Model = psi.facts().filter_map(|fact| fact.head().cloned()).collect();
    log::debug!("Marked {} fact variables", model.len());
    loop {
        let mut grew = false;
        for rule in psi.rules() {
            let Some(head) = rule.head() else { continue };
            if model.contains(head) {
                continue;
            }
            if rule.body().all(|variable| model.contains(variable)) {
                log::trace!("Rule {} fires, marking {}", rule, head);
                model.insert(head.clone());
                grew = true;
            }
        }
        if !grew {
            break;
        }
    }
    for goal in psi.goals() {
        if goal.body().all(|variable| model.contains(variable)) {
            log::debug!("Goal {} has a fully marked body", goal);
            return None;
        }
    }
    Some(model)
}

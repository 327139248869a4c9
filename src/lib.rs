//! Toy satisfiability checkers for propositional logic: resolution refutation
//! over CNF clause sets, and the marker algorithm for the Horn fragment.

pub mod brute_force;
mod formula;
mod marker;
mod resolution;
mod vectors;

pub use brute_force::*;
pub use formula::*;
pub use marker::*;
pub use resolution::*;
pub use vectors::*;

use std::collections::BTreeSet;

/// A truth assignment as the set of variables set to true; every other
/// variable is false.
pub type Model = BTreeSet<Variable>;

mod clause;
mod clause_set;
mod horn;
mod literal;

pub use clause::Clause;
pub use clause_set::ClauseSet;
pub use horn::{HornClause, HornError, HornFormula, HornShape};
pub use literal::{Literal, Variable};

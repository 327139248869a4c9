use std::{collections::BTreeSet, fmt};
use thiserror::Error;

use super::{Clause, ClauseSet, Variable};

/// Construction failures of the Horn subtypes.
///
/// Both variants carry the offending clause. Validation happens eagerly at
/// construction, so the decision procedures themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HornError {
    #[error("invalid Horn clause: {0} has more than one positive literal")]
    Clause(Clause),
    #[error("invalid Horn formula: member clause {0} is not a Horn clause")]
    Formula(Clause),
}

/// The three mutually exclusive shapes of a Horn clause, fixed at
/// construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HornShape {
    /// A single positive literal, read as `1 → X`
    Fact,
    /// One positive literal among several, read as `(X₁ ∧ … ∧ Xₖ) → X`
    Rule,
    /// Only negative literals (possibly none), read as `(X₁ ∧ … ∧ Xₖ) → 0`
    Goal,
}

/// A [Clause] with at most one positive literal.
///
/// The only way in is the fallible constructor, which also classifies the
/// clause once into its [HornShape]. Displayed in implication form:
///
/// ```rust
/// use hornsat::{clause, HornClause, HornShape};
///
/// let fact = HornClause::try_from(clause!["X"]).unwrap();
/// assert_eq!(fact.shape(), HornShape::Fact);
/// assert_eq!(fact.to_string(), "(1 → X)");
///
/// let rule = HornClause::try_from(clause!["-X", "-Y", "Z"]).unwrap();
/// assert_eq!(rule.shape(), HornShape::Rule);
/// assert_eq!(rule.to_string(), "((X ∧ Y) → Z)");
///
/// let goal = HornClause::try_from(clause!["-X", "-Y"]).unwrap();
/// assert_eq!(goal.shape(), HornShape::Goal);
/// assert_eq!(goal.to_string(), "((X ∧ Y) → 0)");
///
/// // Two positive literals are not Horn
/// assert!(HornClause::try_from(clause!["X", "Y"]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HornClause {
    clause: Clause,
    shape: HornShape,
}

impl HornClause {
    pub fn new(clause: Clause) -> Result<Self, HornError> {
        let shape = match clause.positive_literals().count() {
            0 => HornShape::Goal,
            1 if clause.len() == 1 => HornShape::Fact,
            1 => HornShape::Rule,
            _ => return Err(HornError::Clause(clause)),
        };
        Ok(Self { clause, shape })
    }

    pub fn shape(&self) -> HornShape {
        self.shape
    }

    /// The implied variable, i.e. the positive literal. `None` for goals.
    pub fn head(&self) -> Option<&Variable> {
        self.clause
            .positive_literals()
            .next()
            .map(|lit| &lit.variable)
    }

    /// The premise variables, i.e. the negated literals read back positively.
    pub fn body(&self) -> impl Iterator<Item = &Variable> {
        self.clause.negative_literals().map(|lit| &lit.variable)
    }

    pub fn as_clause(&self) -> &Clause {
        &self.clause
    }

    pub fn into_clause(self) -> Clause {
        self.clause
    }

    fn fmt_body(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.body().next().is_none() {
            return write!(f, "1");
        }
        write!(f, "(")?;
        for (i, variable) in self.body().enumerate() {
            if i > 0 {
                write!(f, " ∧ ")?;
            }
            write!(f, "{}", variable)?;
        }
        write!(f, ")")
    }
}

impl TryFrom<Clause> for HornClause {
    type Error = HornError;

    fn try_from(clause: Clause) -> Result<Self, Self::Error> {
        Self::new(clause)
    }
}

impl fmt::Display for HornClause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.shape {
            HornShape::Fact => {
                let head = self.head().expect("facts have a positive literal");
                write!(f, "(1 → {})", head)
            }
            HornShape::Rule => {
                write!(f, "(")?;
                self.fmt_body(f)?;
                let head = self.head().expect("rules have a positive literal");
                write!(f, " → {})", head)
            }
            HornShape::Goal => {
                write!(f, "(")?;
                self.fmt_body(f)?;
                write!(f, " → 0)")
            }
        }
    }
}

impl fmt::Debug for HornClause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A [ClauseSet] whose every member is a [HornClause].
///
/// The invariant is checked atomically over the whole set: a single offending
/// clause fails the entire construction.
///
/// ```rust
/// use hornsat::{clause, ClauseSet, HornFormula};
///
/// let k = ClauseSet::from_clauses([clause!["X"], clause!["-X", "Y"]]);
/// let psi = HornFormula::try_from(k).unwrap();
/// assert_eq!(psi.to_string(), "(1 → X) ∧ ((X) → Y)");
///
/// let k = ClauseSet::from_clauses([clause!["X"], clause!["X", "Y"]]);
/// assert!(HornFormula::try_from(k).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HornFormula {
    clauses: BTreeSet<HornClause>,
}

impl HornFormula {
    pub fn from_clauses(clauses: impl IntoIterator<Item = HornClause>) -> Self {
        Self {
            clauses: clauses.into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &HornClause> {
        self.clauses.iter()
    }

    /// Number of clauses in the formula
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Clauses of the form `1 → X`
    pub fn facts(&self) -> impl Iterator<Item = &HornClause> {
        self.clauses
            .iter()
            .filter(|clause| clause.shape() == HornShape::Fact)
    }

    /// Clauses of the form `(X₁ ∧ … ∧ Xₖ) → X`
    pub fn rules(&self) -> impl Iterator<Item = &HornClause> {
        self.clauses
            .iter()
            .filter(|clause| clause.shape() == HornShape::Rule)
    }

    /// Clauses of the form `(X₁ ∧ … ∧ Xₖ) → 0`
    pub fn goals(&self) -> impl Iterator<Item = &HornClause> {
        self.clauses
            .iter()
            .filter(|clause| clause.shape() == HornShape::Goal)
    }

    /// Forget the Horn structure and view the formula as a plain clause set.
    pub fn clause_set(&self) -> ClauseSet {
        self.clauses
            .iter()
            .map(|clause| clause.as_clause().clone())
            .collect()
    }
}

impl TryFrom<ClauseSet> for HornFormula {
    type Error = HornError;

    fn try_from(set: ClauseSet) -> Result<Self, Self::Error> {
        let mut clauses = BTreeSet::new();
        for clause in set {
            let horn = HornClause::new(clause).map_err(|err| match err {
                HornError::Clause(clause) => HornError::Formula(clause),
                other => other,
            })?;
            clauses.insert(horn);
        }
        Ok(Self { clauses })
    }
}

impl fmt::Display for HornFormula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.clauses.is_empty() {
            return write!(f, "⊤");
        }
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " ∧ ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HornFormula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

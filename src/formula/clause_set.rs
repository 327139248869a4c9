use proptest::prelude::*;
use std::{
    collections::BTreeSet,
    fmt,
    ops::BitAnd,
};

use super::{Clause, Literal, Variable};

/// A set of [Clause]s read as their conjunction, i.e. a CNF formula.
///
/// Membership is the only structure: there is no clause ordering semantics,
/// and duplicate clauses collapse. The empty set is vacuously true and prints
/// as `⊤`.
///
/// ```rust
/// use hornsat::{clause, ClauseSet};
///
/// let k = ClauseSet::from_clauses([clause!["X", "-Y"], clause!["Y"]]);
/// assert_eq!(k.to_string(), "(Y) ∧ (X ∨ ¬Y)");
///
/// assert_eq!(ClauseSet::from_clauses([]).to_string(), "⊤");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseSet {
    clauses: BTreeSet<Clause>,
}

impl ClauseSet {
    pub fn new(clauses: BTreeSet<Clause>) -> Self {
        Self { clauses }
    }

    pub fn from_clauses(clauses: impl IntoIterator<Item = Clause>) -> Self {
        Self::new(clauses.into_iter().collect())
    }

    /// Build a clause set from nested literal tokens, e.g. parsed JSON input
    /// `[["X", "-Y"], ["Y"]]`.
    ///
    /// ```rust
    /// use hornsat::{clause, ClauseSet};
    ///
    /// let k = ClauseSet::from_tokens([vec!["X", "-Y"], vec!["Y"]]);
    /// assert_eq!(k, ClauseSet::from_clauses([clause!["X", "-Y"], clause!["Y"]]));
    /// ```
    pub fn from_tokens<I, C, S>(clauses: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        clauses
            .into_iter()
            .map(|tokens| {
                Clause::new(
                    tokens
                        .into_iter()
                        .map(|token| Literal::new(token.as_ref()))
                        .collect(),
                )
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// Number of clauses in the set
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    /// Variables occurring anywhere in the set.
    pub fn variables(&self) -> BTreeSet<Variable> {
        self.clauses
            .iter()
            .flat_map(Clause::variables)
            .collect()
    }
}

impl FromIterator<Clause> for ClauseSet {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self::from_clauses(iter)
    }
}

impl IntoIterator for ClauseSet {
    type Item = Clause;
    type IntoIter = std::collections::btree_set::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClauseSet {
    type Item = &'a Clause;
    type IntoIter = std::collections::btree_set::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl From<Clause> for ClauseSet {
    fn from(clause: Clause) -> Self {
        Self::from_clauses([clause])
    }
}

impl fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.clauses.is_empty() {
            return write!(f, "⊤");
        }
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " ∧ ")?;
            }
            write!(f, "({})", clause)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl BitAnd for ClauseSet {
    type Output = Self;
    fn bitand(mut self, rhs: Self) -> Self {
        self.clauses.extend(rhs.clauses);
        self
    }
}

impl BitAnd<Clause> for ClauseSet {
    type Output = Self;
    fn bitand(mut self, rhs: Clause) -> Self {
        self.clauses.insert(rhs);
        self
    }
}

impl Arbitrary for ClauseSet {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::collection::btree_set(any::<Clause>(), 0..5)
            .prop_map(ClauseSet::new)
            .boxed()
    }
}

use proptest::prelude::*;
use std::{
    collections::BTreeSet,
    fmt,
    ops::{BitAnd, BitOr, Sub},
};

use super::{ClauseSet, Literal, Variable};

/// A clause in [Conjunctive Normal Form](https://en.wikipedia.org/wiki/Conjunctive_normal_form):
/// a set of literals read as their disjunction.
///
/// The empty clause contains no literal to satisfy, so it stands for the
/// contradiction and is printed as `⊥`. A clause holding some variable in both
/// polarities is a tautology; such clauses are representable and detected by
/// [Clause::is_tautology].
///
/// # Order
///
/// Clauses are in graded lexical order, i.e. the number of literals is the
/// primary key.
///
/// ```rust
/// use hornsat::clause;
///
/// let a = clause!["X", "Y"];
/// let b = clause!["X"];
/// let c = clause!["Y"];
/// let d = clause![];
///
/// assert!(d < b);
/// assert!(b < c); // since X < Y
/// assert!(c < a);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

#[macro_export]
macro_rules! clause {
    ($($lit:expr),*) => {
        $crate::Clause::from_literals(&[$($crate::lit!($lit)),*])
    };
}

impl PartialOrd for Clause {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Clause {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.literals.len().cmp(&other.literals.len()) {
            std::cmp::Ordering::Equal => self.literals.cmp(&other.literals),
            ordering => ordering,
        }
    }
}

impl Clause {
    pub fn new(literals: BTreeSet<Literal>) -> Self {
        Self { literals }
    }

    pub fn from_literals(literals: &[Literal]) -> Self {
        Self::new(literals.iter().cloned().collect())
    }

    /// The empty clause, i.e. the contradiction.
    pub fn empty() -> Self {
        Self::new(BTreeSet::new())
    }

    pub fn literals(&self) -> impl DoubleEndedIterator<Item = &Literal> {
        self.literals.iter()
    }

    /// Number of literals in the clause
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, lit: &Literal) -> bool {
        self.literals.contains(lit)
    }

    /// Check whether some variable occurs in both polarities.
    ///
    /// ```rust
    /// use hornsat::clause;
    ///
    /// assert!(clause!["X", "-X", "Y"].is_tautology());
    /// assert!(!clause!["X", "Y"].is_tautology());
    /// assert!(!clause![].is_tautology());
    /// ```
    pub fn is_tautology(&self) -> bool {
        let mut iter = self.literals.iter();
        let Some(mut prev) = iter.next() else {
            return false;
        };
        for lit in iter {
            // Complementary literals are adjacent since sorted by variable.
            if prev.variable == lit.variable && prev.positive != lit.positive {
                return true;
            }
            prev = lit;
        }
        false
    }

    /// Set union over literals; inputs are untouched.
    ///
    /// ```rust
    /// use hornsat::clause;
    ///
    /// let a = clause!["X", "Y"];
    /// let b = clause!["Y", "Z"];
    /// assert_eq!(a.union(&b).to_string(), "X ∨ Y ∨ Z");
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        Self {
            literals: self.literals.union(&other.literals).cloned().collect(),
        }
    }

    /// Set difference over literals; inputs are untouched.
    ///
    /// ```rust
    /// use hornsat::clause;
    ///
    /// let a = clause!["X", "Y"];
    /// let b = clause!["Y", "Z"];
    /// assert_eq!(a.difference(&b).to_string(), "X");
    /// ```
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            literals: self.literals.difference(&other.literals).cloned().collect(),
        }
    }

    pub fn positive_literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter().filter(|lit| lit.positive)
    }

    pub fn negative_literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter().filter(|lit| !lit.positive)
    }

    /// Variables occurring in the clause, in either polarity.
    pub fn variables(&self) -> BTreeSet<Variable> {
        self.literals.iter().map(|lit| lit.variable.clone()).collect()
    }

    /// All resolvents of two clauses, one per complementary literal pair:
    /// for each `ℓ ∈ self` with `¬ℓ ∈ other`, the clause
    /// `(self ∪ other) ∖ {ℓ, ¬ℓ}`.
    ///
    /// Tautological resolvents are returned as-is; the saturation loop
    /// discards them.
    ///
    /// ```rust
    /// use hornsat::clause;
    ///
    /// let a = clause!["X", "Y"];
    /// let b = clause!["-X", "Z"];
    /// let resolvents = a.resolvents(&b);
    /// assert_eq!(resolvents.len(), 1);
    /// assert_eq!(resolvents[0].to_string(), "Y ∨ Z");
    ///
    /// // No complementary pair
    /// assert!(clause!["X"].resolvents(&clause!["Y"]).is_empty());
    ///
    /// // Unit clauses resolve to the empty clause
    /// assert_eq!(clause!["X"].resolvents(&clause!["-X"]), [clause![]]);
    /// ```
    ///
    /// <https://en.wikipedia.org/wiki/Resolution_(logic)>
    pub fn resolvents(&self, other: &Self) -> Vec<Self> {
        let mut out = Vec::new();
        for lit in &self.literals {
            let negated = !lit;
            if other.literals.contains(&negated) {
                let mut resolvent = self.union(other);
                resolvent.literals.remove(lit);
                resolvent.literals.remove(&negated);
                out.push(resolvent);
            }
        }
        out
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Self::from_literals(&[literal])
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "⊥");
        }
        for (i, literal) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl BitOr for Clause {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(&rhs)
    }
}

impl BitOr<Literal> for Clause {
    type Output = Self;
    fn bitor(mut self, rhs: Literal) -> Self {
        self.literals.insert(rhs);
        self
    }
}

impl Sub for Clause {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.difference(&rhs)
    }
}

impl BitAnd for Clause {
    type Output = ClauseSet;
    fn bitand(self, rhs: Self) -> Self::Output {
        ClauseSet::from_clauses([self, rhs])
    }
}

impl Arbitrary for Clause {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec(any::<Literal>(), 0..4)
            .prop_map(|literals| Clause::from_literals(&literals))
            .boxed()
    }
}

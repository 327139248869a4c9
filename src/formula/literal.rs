use maplit::btreeset;
use proptest::prelude::*;
use std::{
    fmt,
    ops::{BitOr, Not},
};

use super::Clause;

/// A propositional variable, identified by its name.
///
/// Variables are pure values: two variables with the same name are the same
/// variable, and equality, ordering, and hashing all follow the name.
///
/// ```rust
/// use hornsat::Variable;
///
/// assert_eq!(Variable::new("X"), Variable::new("X"));
/// assert_ne!(Variable::new("X"), Variable::new("Y"));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Empty variable name is not allowed");
        Self(name)
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A literal in [Conjunctive Normal Form](https://en.wikipedia.org/wiki/Conjunctive_normal_form):
/// a variable together with its polarity.
///
/// # Order
///
/// - Literals are ordered by their variable name
/// - On the same variable, the positive literal is less than the negative one
///
/// ```rust
/// use hornsat::lit;
///
/// let a = lit!("X");
/// let b = lit!("-X");
/// let c = lit!("Y");
/// let d = lit!("-Y");
///
/// assert!(a < b); // X < ¬X
/// assert!(b < c); // ¬X < Y
/// assert!(c < d); // Y < ¬Y
/// ```
///
/// # Operations
///
/// `!` negates a literal and `|` joins two literals into a [Clause]
///
/// ```rust
/// use hornsat::lit;
///
/// let a = lit!("X");
/// let b = lit!("Y");
///
/// assert_eq!(!a.clone(), lit!("-X"));
/// assert_eq!((a | b).to_string(), "X ∨ Y");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub variable: Variable,
    pub positive: bool,
}

#[macro_export]
macro_rules! lit {
    ($lit:expr) => {
        $crate::Literal::new($lit)
    };
}

impl Literal {
    /// Parse a literal token: a variable name with an optional `-` or `¬`
    /// negation prefix.
    pub fn new(token: &str) -> Self {
        match token
            .strip_prefix('-')
            .or_else(|| token.strip_prefix('¬'))
        {
            Some(name) => Self {
                variable: Variable::new(name),
                positive: false,
            },
            None => Self {
                variable: Variable::new(token),
                positive: true,
            },
        }
    }
}

impl From<&str> for Literal {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl Not for Literal {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Output {
            positive: !self.positive,
            ..self
        }
    }
}

impl Not for &Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.variable.cmp(&other.variable) {
            std::cmp::Ordering::Equal => self.positive.cmp(&other.positive).reverse(),
            ordering => ordering,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.positive {
            write!(f, "{}", self.variable)
        } else {
            write!(f, "¬{}", self.variable)
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl BitOr for Literal {
    type Output = Clause;
    fn bitor(self, rhs: Self) -> Self::Output {
        Clause::new(btreeset! {self, rhs})
    }
}

// Variables are drawn from a six-name alphabet so that randomly generated
// clause sets stay within reach of exhaustive truth-table checking.
impl Arbitrary for Variable {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(&["P", "Q", "R", "S", "T", "U"][..])
            .prop_map(Variable::new)
            .boxed()
    }
}

impl Arbitrary for Literal {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<Variable>(), any::<bool>())
            .prop_map(|(variable, positive)| Self { variable, positive })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negation_prefixes() {
        assert_eq!(lit!("-X"), lit!("¬X"));
        assert!(!lit!("-X").positive);
        assert!(lit!("X").positive);
    }

    proptest! {
        #[test]
        fn test_double_negation(lit: Literal) {
            assert_eq!(!(!lit.clone()), lit);
        }

        #[test]
        fn test_order_of_negation(lit: Literal) {
            let negated = !lit.clone();
            if lit.positive {
                assert!(negated > lit);
            } else {
                assert!(lit > negated);
            }
        }

        #[test]
        fn test_negation_keeps_variable(lit: Literal) {
            assert_eq!((!lit.clone()).variable, lit.variable);
        }

        #[test]
        fn test_dedup(lit: Literal) {
            assert_eq!(lit.clone() | lit.clone(), Clause::from_literals(&[lit]));
        }

        #[test]
        fn test_commutative(a: Literal, b: Literal) {
            assert_eq!(a.clone() | b.clone(), b | a);
        }
    }
}

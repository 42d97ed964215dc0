//! Literals are variables paired with a (boolean) polarity.
//!
//! A literal is either positive or negative, and the two literals of a variable are complementary --- they are mutually exclusive, and exhaust the values of the variable.
//!
//! ```rust
//! # use bayes_net::structures::literal::Literal;
//! let literal = Literal::positive("Alarm");
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.variable(), "Alarm");
//! assert_eq!(literal.negate(), Literal::negative("Alarm"));
//!
//! assert_eq!(literal.to_string(), "+Alarm");
//! assert_eq!("-Alarm".parse::<Literal>(), Ok(literal.negate()));
//! ```
//!
//! Literals are ordered by variable and then polarity, with the positive literal of a variable ordered before the negative literal.

use std::str::FromStr;

use serde::Serialize;

use crate::{structures::variable::Variable, types::err::ParseError};

/// A variable with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    /// The variable has the positive value.
    Positive(Variable),

    /// The variable has the negative value.
    Negative(Variable),
}

impl Literal {
    /// A fresh literal, specified by pairing a variable with a boolean.
    pub fn new(variable: impl Into<Variable>, polarity: bool) -> Self {
        match polarity {
            true => Self::Positive(variable.into()),
            false => Self::Negative(variable.into()),
        }
    }

    /// The positive literal of `variable`.
    pub fn positive(variable: impl Into<Variable>) -> Self {
        Self::Positive(variable.into())
    }

    /// The negative literal of `variable`.
    pub fn negative(variable: impl Into<Variable>) -> Self {
        Self::Negative(variable.into())
    }

    /// The variable of the literal.
    pub fn variable(&self) -> &Variable {
        match self {
            Self::Positive(variable) | Self::Negative(variable) => variable,
        }
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        matches!(self, Self::Positive(_))
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        match self {
            Self::Positive(variable) => Self::Negative(variable.clone()),
            Self::Negative(variable) => Self::Positive(variable.clone()),
        }
    }

    /// Whether `other` is the negation of the literal.
    pub fn complements(&self, other: &Literal) -> bool {
        self.variable() == other.variable() && self.polarity() != other.polarity()
    }
}

// Traits

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.variable().cmp(other.variable()) {
            std::cmp::Ordering::Equal => other.polarity().cmp(&self.polarity()),
            ordering => ordering,
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Positive(variable) => write!(f, "+{variable}"),
            Self::Negative(variable) => write!(f, "-{variable}"),
        }
    }
}

impl FromStr for Literal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let polarity = match chars.next() {
            None => return Err(ParseError::Empty),
            Some('+') => true,
            Some('-') => false,
            Some(_) => return Err(ParseError::MissingSign(s.to_owned())),
        };

        match chars.as_str() {
            "" => Err(ParseError::MissingVariable),
            variable => Ok(Literal::new(variable, polarity)),
        }
    }
}

impl Serialize for Literal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("+p".parse(), Ok(Literal::positive("p")));
        assert_eq!(" -q ".parse(), Ok(Literal::negative("q")));
        assert_eq!("".parse::<Literal>(), Err(ParseError::Empty));
        assert_eq!("-".parse::<Literal>(), Err(ParseError::MissingVariable));
        assert_eq!(
            "p".parse::<Literal>(),
            Err(ParseError::MissingSign("p".to_string()))
        );
    }

    #[test]
    fn order() {
        let mut literals = vec![
            Literal::negative("b"),
            Literal::positive("b"),
            Literal::negative("a"),
        ];
        literals.sort();

        assert_eq!(
            literals,
            vec![
                Literal::negative("a"),
                Literal::positive("b"),
                Literal::negative("b")
            ]
        );
    }

    #[test]
    fn complements() {
        let p = Literal::positive("p");

        assert!(p.complements(&p.negate()));
        assert!(!p.complements(&p));
        assert!(!p.complements(&Literal::negative("q")));
    }
}

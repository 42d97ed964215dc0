/*!
A (partial) function from variables to values, represented as a collection of literals.

An assignment contains at most one literal for each variable, and so never contains a literal together with its negation.
Literals are kept in the order they were added, which for the rows of a [factor](crate::structures::factor) is the order of the scope.

```rust
# use bayes_net::structures::{assignment::Assignment, literal::Literal};
let mut assignment = Assignment::default();
assert!(assignment.push(Literal::positive("Burglary")).is_ok());
assert!(assignment.push(Literal::negative("Earthquake")).is_ok());
assert!(assignment.push(Literal::negative("Burglary")).is_err());

assert_eq!(assignment.value_of("Earthquake"), Some(false));
assert_eq!(assignment.to_string(), "+Burglary -Earthquake");
```
*/

use serde::Serialize;

use crate::{
    structures::{literal::Literal, variable::Variable},
    types::err::FactorError,
};

/// An ordered collection of literals, with at most one literal for each variable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    literals: Vec<Literal>,
}

impl Assignment {
    /// An assignment of each literal from `literals`, in order.
    ///
    /// Repeated literals are ignored, while complementary literals are an error.
    pub fn from_literals(
        literals: impl IntoIterator<Item = Literal>,
    ) -> Result<Self, FactorError> {
        let mut assignment = Assignment::default();
        for literal in literals {
            assignment.push(literal)?;
        }
        Ok(assignment)
    }

    /// Adds `literal` to the assignment, unless already present.
    pub fn push(&mut self, literal: Literal) -> Result<(), FactorError> {
        match self.value_of(literal.variable()) {
            None => {
                self.literals.push(literal);
                Ok(())
            }
            Some(value) if value == literal.polarity() => Ok(()),
            Some(_) => Err(FactorError::ContradictoryAssignment(
                literal.variable().clone(),
            )),
        }
    }

    /// The value of `variable`, if assigned.
    pub fn value_of(&self, variable: &str) -> Option<bool> {
        self.literals
            .iter()
            .find(|literal| literal.variable() == variable)
            .map(|literal| literal.polarity())
    }

    /// Whether `literal` is part of the assignment.
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// The literals of the assignment, in order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The variables of the assignment, in order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.literals.iter().map(|literal| literal.variable())
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut literals = self.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{first}")?;
        }
        for literal in literals {
            write!(f, " {literal}")?;
        }
        Ok(())
    }
}

impl Serialize for Assignment {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Literal> for Assignment {
    fn from(literal: Literal) -> Self {
        Assignment {
            literals: vec![literal],
        }
    }
}

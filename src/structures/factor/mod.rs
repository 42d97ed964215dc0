/*!
Factors --- tables of weights over every assignment to some scope of variables.

# Representation

A factor is a scope (an ordered list of distinct variables) together with a weight for each of the 2<sup>*n*</sup> assignments to the *n* variables of the scope.

Weights are stored in a vector whose indicies are the rows of the table, in the *canonical* order:
- Row *r* assigns the variable at position *i* of the scope the negative value if and only if bit *n - 1 - i* of *r* is set.
- So, the first variable of the scope varies slowest, the last variable varies fastest, and row 0 is the all-positive assignment.

For example, the rows of a factor over `[B, A]` are:

| row | assignment |
|-----|------------|
| 0   | +B +A      |
| 1   | +B -A      |
| 2   | -B +A      |
| 3   | -B -A      |

The conditional probability table of a node with parents *p₁ … pₖ* is a factor over `[p₁, …, pₖ, node]`, and so each consecutive pair of rows holds the distribution of the node given some assignment to its parents.

# Operations

Join, projection (and with it marginalization), clamping, and normalization are in [algebra].
Each builds a fresh table by index arithmetic over the canonical order, with no search for compatible rows.

```rust
# use bayes_net::structures::{assignment::Assignment, factor::Factor, literal::Literal};
let burglary = Factor::from_weights(vec!["B".to_string()], vec![0.001, 0.999]).unwrap();

assert_eq!(burglary.row_count(), 2);
assert_eq!(burglary.weight_of(&Literal::positive("B").into()), Ok(0.001));
```
*/

pub mod algebra;

use serde::Serialize;

use crate::{
    misc::log::targets::{self},
    structures::{assignment::Assignment, literal::Literal, variable::Variable},
    types::err::FactorError,
};

/// The maximum size of the scope of any factor.
pub const SCOPE_MAX: usize = 24;

/// A table of weights, indexed by the assignments to a scope.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Factor {
    /// The variables of the factor, in order.
    scope: Vec<Variable>,

    /// The weight of each row, in canonical order.
    weights: Vec<f64>,
}

impl Factor {
    /// A factor over `scope` with each weight zero.
    pub fn blank(scope: Vec<Variable>) -> Result<Self, FactorError> {
        validate_scope(&scope)?;
        let weights = vec![0.0; 1 << scope.len()];
        Ok(Factor { scope, weights })
    }

    /// A factor over `scope` with the given weights, in canonical order.
    pub fn from_weights(scope: Vec<Variable>, weights: Vec<f64>) -> Result<Self, FactorError> {
        validate_scope(&scope)?;

        let expected = 1 << scope.len();
        if weights.len() != expected {
            return Err(FactorError::MalformedTable {
                expected,
                found: weights.len(),
            });
        }

        if let Some(row) = weights.iter().position(|w| !w.is_finite() || *w < 0.0) {
            log::error!(target: targets::FACTOR, "Invalid weight at row {row}: {}", weights[row]);
            return Err(FactorError::InvalidWeight { row });
        }

        Ok(Factor { scope, weights })
    }

    /// The variables of the factor, in order.
    pub fn scope(&self) -> &[Variable] {
        &self.scope
    }

    /// The weights of the factor, in canonical order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// A count of rows, always 2<sup>|scope|</sup>.
    pub fn row_count(&self) -> usize {
        self.weights.len()
    }

    /// The sum of all weights.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// The position of `variable` in the scope, if present.
    pub fn position_of(&self, variable: &str) -> Option<usize> {
        self.scope.iter().position(|v| v == variable)
    }

    /// Whether `variable` is part of the scope.
    pub fn contains(&self, variable: &str) -> bool {
        self.position_of(variable).is_some()
    }

    /// The value of the variable at `position` of the scope on `row`.
    pub fn polarity_at(&self, row: usize, position: usize) -> bool {
        !is_negative(row, position, self.scope.len())
    }

    /// The assignment of `row`, with literals in scope order.
    pub fn assignment_at(&self, row: usize) -> Assignment {
        let mut assignment = Assignment::default();
        for (position, variable) in self.scope.iter().enumerate() {
            // Safe, as each variable of a scope is distinct.
            let _ = assignment.push(Literal::new(
                variable.clone(),
                self.polarity_at(row, position),
            ));
        }
        assignment
    }

    /// The row of `assignment`.
    ///
    /// The assignment may value variables outside of the scope, and these are ignored.
    pub fn index_of(&self, assignment: &Assignment) -> Result<usize, FactorError> {
        let mut index = 0;
        for variable in &self.scope {
            match assignment.value_of(variable) {
                Some(polarity) => index = (index << 1) | usize::from(!polarity),
                None => return Err(FactorError::IncompleteAssignment(variable.clone())),
            }
        }
        Ok(index)
    }

    /// The weight of the row of `assignment`.
    pub fn weight_of(&self, assignment: &Assignment) -> Result<f64, FactorError> {
        Ok(self.weights[self.index_of(assignment)?])
    }

    /// The rows of the factor, in canonical order.
    pub fn rows(&self) -> impl Iterator<Item = (Assignment, f64)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .map(|(row, weight)| (self.assignment_at(row), *weight))
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (assignment, weight) in self.rows() {
            writeln!(f, "{assignment} {weight}")?;
        }
        Ok(())
    }
}

/// Whether the variable at `position` of a scope of `width` variables is negative on `row`.
fn is_negative(row: usize, position: usize, width: usize) -> bool {
    (row >> (width - 1 - position)) & 1 == 1
}

fn validate_scope(scope: &[Variable]) -> Result<(), FactorError> {
    if scope.len() > SCOPE_MAX {
        return Err(FactorError::ScopeTooLarge {
            size: scope.len(),
            max: SCOPE_MAX,
        });
    }

    for (index, variable) in scope.iter().enumerate() {
        if scope[..index].contains(variable) {
            return Err(FactorError::DuplicateVariable(variable.clone()));
        }
    }

    Ok(())
}

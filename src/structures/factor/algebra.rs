/*!
The factor algebra: join, projection, marginalization, clamping, and normalization.

# Alignment

Each operation relates the rows of one factor to the rows of another, where the scope of one is a subset of the scope of the other.
As rows are in canonical order, the row of the smaller factor compatible with some row of the larger factor is found by reading the bits of the larger row at the positions of the smaller scope, most significant first.
So, after a single pass to find the positions of the smaller scope within the larger scope, each compatible row is found by a handful of shifts.

# Methods

## [join](Factor::join) / [join_over](Factor::join_over)

The pointwise product of two factors, over the union of their scopes or some given scope containing both.
A variable of either operand which is missing from the scope of the result is a [ScopeMismatch](FactorError::ScopeMismatch), as no row of that operand is compatible with a row of the result.

## [project](Factor::project) / [marginalize](Factor::marginalize)

Projection sums out every variable not in the target scope, and lays out the result in the order of the target scope.
Marginalization is projection onto the scope without a single variable.

## [clamp](Factor::clamp) / [assign](Factor::assign)

Evidence is applied by setting each row disagreeing with some literal to zero.
The scope is unchanged.

## [normalize](Factor::normalize)

Each consecutive pair of rows --- the positive and negative row of the last variable of the scope for a fixed assignment to the remaining variables --- is divided by its sum.

# Example

```rust
# use bayes_net::structures::{factor::Factor, literal::Literal};
let burglary = Factor::from_weights(vec!["B".to_string()], vec![0.2, 0.8]).unwrap();
let alarm = Factor::from_weights(
    vec!["B".to_string(), "A".to_string()],
    vec![0.9, 0.1, 0.1, 0.9],
)
.unwrap();

let joint = burglary.join(&alarm).unwrap();
let mut posterior = joint.assign(&Literal::positive("A")).unwrap().marginalize("A").unwrap();
posterior.normalize().unwrap();

assert!((posterior.weights()[0] - 0.18 / 0.26).abs() < 1e-12);
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{factor::Factor, literal::Literal, variable::Variable},
    types::err::FactorError,
};

/// The row of the smaller scope compatible with `row` of a scope of `width` variables, given the positions of each variable of the smaller scope.
fn compatible_row(row: usize, width: usize, positions: &[usize]) -> usize {
    positions.iter().fold(0, |index, &position| {
        (index << 1) | ((row >> (width - 1 - position)) & 1)
    })
}

impl Factor {
    /// The position in `scope` of each variable of the factor.
    fn positions_in(&self, scope: &[Variable]) -> Result<Vec<usize>, FactorError> {
        self.scope
            .iter()
            .map(|variable| {
                scope
                    .iter()
                    .position(|v| v == variable)
                    .ok_or_else(|| FactorError::ScopeMismatch(variable.clone()))
            })
            .collect()
    }

    /// The product of the factor and `other` over the union of their scopes.
    ///
    /// The scope of the result is the scope of the factor followed by any variables of `other` not already present.
    pub fn join(&self, other: &Factor) -> Result<Factor, FactorError> {
        let mut scope = self.scope.clone();
        for variable in &other.scope {
            if !scope.contains(variable) {
                scope.push(variable.clone());
            }
        }
        self.join_over(other, scope)
    }

    /// The product of the factor and `other` over `scope`, which must contain the scope of each.
    pub fn join_over(&self, other: &Factor, scope: Vec<Variable>) -> Result<Factor, FactorError> {
        let mut joined = Factor::blank(scope)?;
        let width = joined.scope.len();

        let lhs = self.positions_in(&joined.scope).inspect_err(|e| {
            log::error!(target: targets::FACTOR, "Join of {:?} over {:?}: {e}", self.scope, joined.scope)
        })?;
        let rhs = other.positions_in(&joined.scope).inspect_err(|e| {
            log::error!(target: targets::FACTOR, "Join of {:?} over {:?}: {e}", other.scope, joined.scope)
        })?;

        for (row, weight) in joined.weights.iter_mut().enumerate() {
            *weight = self.weights[compatible_row(row, width, &lhs)]
                * other.weights[compatible_row(row, width, &rhs)];
        }

        log::trace!(target: targets::FACTOR, "Joined {:?} and {:?} over {:?}", self.scope, other.scope, joined.scope);
        Ok(joined)
    }

    /// The factor over `scope`, a subset of the scope of the factor, summing out every other variable.
    pub fn project(&self, scope: Vec<Variable>) -> Result<Factor, FactorError> {
        let mut projected = Factor::blank(scope)?;
        let width = self.scope.len();

        let positions = projected.positions_in(&self.scope)?;

        for (row, weight) in self.weights.iter().enumerate() {
            projected.weights[compatible_row(row, width, &positions)] += weight;
        }

        Ok(projected)
    }

    /// The factor with `variable` summed out.
    pub fn marginalize(&self, variable: &str) -> Result<Factor, FactorError> {
        if !self.contains(variable) {
            return Err(FactorError::VariableNotInScope(variable.to_owned()));
        }

        let scope = self
            .scope
            .iter()
            .filter(|v| *v != variable)
            .cloned()
            .collect();
        self.project(scope)
    }

    /// Sets the weight of each row disagreeing with `literal` to zero.
    pub fn clamp(&mut self, literal: &Literal) -> Result<(), FactorError> {
        let Some(position) = self.position_of(literal.variable()) else {
            return Err(FactorError::VariableNotInScope(literal.variable().clone()));
        };

        for row in 0..self.weights.len() {
            if self.polarity_at(row, position) != literal.polarity() {
                self.weights[row] = 0.0;
            }
        }

        Ok(())
    }

    /// A copy of the factor, clamped to `literal`.
    pub fn assign(&self, literal: &Literal) -> Result<Factor, FactorError> {
        let mut assigned = self.clone();
        assigned.clamp(literal)?;
        Ok(assigned)
    }

    /// Normalizes each pair of rows over the last variable of the scope.
    ///
    /// If any pair sums to zero the factor is unchanged and an error is returned.
    pub fn normalize(&mut self) -> Result<(), FactorError> {
        if self.scope.is_empty() {
            return Err(FactorError::EmptyScope);
        }

        if self.weights.chunks_exact(2).any(|pair| pair[0] + pair[1] == 0.0) {
            log::error!(target: targets::FACTOR, "Degenerate distribution over {:?}", self.scope);
            return Err(FactorError::DegenerateDistribution);
        }

        for pair in self.weights.chunks_exact_mut(2) {
            let total = pair[0] + pair[1];
            pair[0] /= total;
            pair[1] /= total;
        }

        Ok(())
    }

    /// A normalized copy of the factor.
    pub fn normalized(&self) -> Result<Factor, FactorError> {
        let mut normalized = self.clone();
        normalized.normalize()?;
        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(variables: &[&str], weights: Vec<f64>) -> Factor {
        Factor::from_weights(variables.iter().map(|v| v.to_string()).collect(), weights).unwrap()
    }

    fn close(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-12)
    }

    #[test]
    fn join_shared_variable() {
        let b = factor(&["B"], vec![0.001, 0.999]);
        let a = factor(&["B", "A"], vec![0.94, 0.06, 0.001, 0.999]);

        let joined = b.join(&a).unwrap();

        assert_eq!(joined.scope(), &["B", "A"]);
        assert!(close(
            joined.weights(),
            &[0.001 * 0.94, 0.001 * 0.06, 0.999 * 0.001, 0.999 * 0.999]
        ));
    }

    #[test]
    fn join_over_reorders() {
        let p = factor(&["p"], vec![0.25, 0.75]);
        let q = factor(&["q"], vec![0.5, 0.5]);

        let joined = p
            .join_over(&q, vec!["q".to_string(), "p".to_string()])
            .unwrap();

        assert!(close(joined.weights(), &[0.125, 0.375, 0.125, 0.375]));
    }

    #[test]
    fn join_mismatch() {
        let p = factor(&["p"], vec![0.25, 0.75]);
        let q = factor(&["q"], vec![0.5, 0.5]);

        assert_eq!(
            p.join_over(&q, vec!["p".to_string()]),
            Err(FactorError::ScopeMismatch("q".to_string()))
        );
    }

    #[test]
    fn marginalize_middle() {
        let f = factor(&["p", "q", "r"], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);

        let m = f.marginalize("q").unwrap();

        assert_eq!(m.scope(), &["p", "r"]);
        assert!(close(m.weights(), &[4.0, 6.0, 12.0, 14.0]));
        assert_eq!(
            f.marginalize("s"),
            Err(FactorError::VariableNotInScope("s".to_string()))
        );
    }

    #[test]
    fn project_reorders() {
        let f = factor(&["p", "q"], vec![1.0, 2.0, 3.0, 4.0]);

        let swapped = f.project(vec!["q".to_string(), "p".to_string()]).unwrap();
        assert!(close(swapped.weights(), &[1.0, 3.0, 2.0, 4.0]));

        assert_eq!(
            f.project(vec!["r".to_string()]),
            Err(FactorError::ScopeMismatch("r".to_string()))
        );
    }

    #[test]
    fn clamp_keeps_scope() {
        let f = factor(&["p", "q"], vec![1.0, 2.0, 3.0, 4.0]);

        let positive_q = f.assign(&Literal::positive("q")).unwrap();
        assert_eq!(positive_q.scope(), f.scope());
        assert!(close(positive_q.weights(), &[1.0, 0.0, 3.0, 0.0]));

        let negative_p = f.assign(&Literal::negative("p")).unwrap();
        assert!(close(negative_p.weights(), &[0.0, 0.0, 3.0, 4.0]));
    }

    #[test]
    fn normalize_pairs() {
        let mut f = factor(&["p", "q"], vec![1.0, 3.0, 2.0, 2.0]);

        assert!(f.normalize().is_ok());
        assert!(close(f.weights(), &[0.25, 0.75, 0.5, 0.5]));
    }

    #[test]
    fn normalize_degenerate() {
        let mut f = factor(&["p", "q"], vec![1.0, 3.0, 0.0, 0.0]);

        assert_eq!(f.normalize(), Err(FactorError::DegenerateDistribution));
        assert!(close(f.weights(), &[1.0, 3.0, 0.0, 0.0]));

        let mut empty = factor(&[], vec![1.0]);
        assert_eq!(empty.normalize(), Err(FactorError::EmptyScope));
    }
}

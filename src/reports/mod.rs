/*!
Reports of queries.

A [Posterior] is the table returned by a query: each assignment to the scope of the factor of the query variable, in canonical order, together with its probability.
Typically the scope is the query variable alone, and so the rows are `+variable` followed by `-variable`.

```rust
# use bayes_net::samples;
# use bayes_net::structures::literal::Literal;
let network = samples::alarm().unwrap();
let posterior = network.query("Earthquake", &[Literal::positive("JohnCalls")]).unwrap();

let labels = posterior.labelled().into_iter().map(|(label, _)| label).collect::<Vec<_>>();
assert_eq!(labels, vec!["+Earthquake", "-Earthquake"]);
assert!((posterior.total() - 1.0).abs() < 1e-9);
```
*/

use serde::Serialize;

use crate::structures::{assignment::Assignment, factor::Factor, literal::Literal};

/// The result of a query, as rows of assignments and probabilities.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Posterior {
    rows: Vec<(Assignment, f64)>,
}

impl Posterior {
    /// The rows of the posterior, in canonical order.
    pub fn rows(&self) -> &[(Assignment, f64)] {
        &self.rows
    }

    /// The rows of the posterior, with each assignment written as space separated literals.
    pub fn labelled(&self) -> Vec<(String, f64)> {
        self.rows
            .iter()
            .map(|(assignment, probability)| (assignment.to_string(), *probability))
            .collect()
    }

    /// The probability of the row which assigns exactly `literal`, if there is such a row.
    pub fn probability_of(&self, literal: &Literal) -> Option<f64> {
        self.rows
            .iter()
            .find(|(assignment, _)| assignment.len() == 1 && assignment.contains(literal))
            .map(|(_, probability)| *probability)
    }

    /// The sum of all probabilities.
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|(_, probability)| probability).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Factor> for Posterior {
    fn from(factor: Factor) -> Self {
        Posterior {
            rows: factor.rows().collect(),
        }
    }
}

impl std::fmt::Display for Posterior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (assignment, probability) in &self.rows {
            writeln!(f, "{assignment} {probability}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs() {
        let factor = Factor::from_weights(
            vec!["p".to_string(), "q".to_string()],
            vec![0.1, 0.2, 0.3, 0.4],
        )
        .unwrap();
        let posterior = Posterior::from(factor);

        assert_eq!(posterior.len(), 4);
        assert_eq!(posterior.labelled()[2], ("-p +q".to_string(), 0.3));
        assert_eq!(posterior.probability_of(&Literal::positive("p")), None);
        assert_eq!(posterior.to_string(), "+p +q 0.1\n+p -q 0.2\n-p +q 0.3\n-p -q 0.4\n");
    }

    #[test]
    fn json() {
        let factor = Factor::from_weights(vec!["p".to_string()], vec![0.25, 0.75]).unwrap();
        let posterior = Posterior::from(factor);

        assert_eq!(
            serde_json::to_string(&posterior).unwrap(),
            r#"{"rows":[["+p",0.25],["-p",0.75]]}"#
        );
    }
}

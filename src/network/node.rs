/*!
Nodes of a network.

A node is a variable together with its parents, its children, and a [factor](crate::structures::factor) over the parents and the variable.

Initially the factor is the conditional probability table of the node.
The probability of each assignment to the parents followed by the variable is given in canonical order, and so the table of a node with one parent `A` lists, in order, the probability of:

`+A +node`, `+A -node`, `-A +node`, `-A -node`

Both rows of each pair are given explicitly, and neither is derived from the other.

```rust
# use bayes_net::network::Node;
let john_calls = Node::new("JohnCalls", &["Alarm"], &[], vec![0.9, 0.1, 0.05, 0.95]);
assert!(john_calls.is_ok());

let malformed = Node::new("JohnCalls", &["Alarm"], &[], vec![0.9, 0.1]);
assert!(malformed.is_err());
```
*/

use serde::Serialize;

use crate::{
    structures::{factor::Factor, variable::Variable},
    types::err::{BuildError, ErrorKind, FactorError},
};

/// A variable of a network, with its parents, children, and factor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    /// The variable of the node.
    pub(crate) name: Variable,

    /// The parents of the node, in order.
    pub(crate) parents: Vec<Variable>,

    /// The children of the node, in order.
    pub(crate) children: Vec<Variable>,

    /// A factor over the parents of the node followed by the node.
    pub(crate) factor: Factor,
}

impl Node {
    /// A node whose conditional probability table is given by `probabilities`, in canonical order over the parents followed by the node.
    pub fn new(
        name: &str,
        parents: &[&str],
        children: &[&str],
        probabilities: Vec<f64>,
    ) -> Result<Self, ErrorKind> {
        Self::from_parts(
            name.to_owned(),
            parents.iter().map(|p| p.to_string()).collect(),
            children.iter().map(|c| c.to_string()).collect(),
            probabilities,
        )
    }

    /// As [new](Node::new), though taking ownership of each variable.
    pub fn from_parts(
        name: Variable,
        parents: Vec<Variable>,
        children: Vec<Variable>,
        probabilities: Vec<f64>,
    ) -> Result<Self, ErrorKind> {
        let expected = 1_usize
            .checked_shl(parents.len() as u32 + 1)
            .unwrap_or(usize::MAX);
        if probabilities.len() != expected {
            return Err(BuildError::MalformedCPT {
                variable: name,
                expected,
                found: probabilities.len(),
            }
            .into());
        }

        for (index, child) in children.iter().enumerate() {
            if *child == name || children[..index].contains(child) {
                return Err(BuildError::DuplicateVariable(child.clone()).into());
            }
        }

        let mut scope = parents.clone();
        scope.push(name.clone());

        let factor = match Factor::from_weights(scope, probabilities) {
            Ok(factor) => factor,
            Err(FactorError::InvalidWeight { row }) => {
                return Err(BuildError::InvalidProbability {
                    variable: name,
                    row,
                }
                .into())
            }
            Err(FactorError::DuplicateVariable(variable)) => {
                return Err(BuildError::DuplicateVariable(variable).into())
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Node {
            name,
            parents,
            children,
            factor,
        })
    }

    /// The variable of the node.
    pub fn name(&self) -> &Variable {
        &self.name
    }

    /// The parents of the node, in order.
    pub fn parents(&self) -> &[Variable] {
        &self.parents
    }

    /// The children of the node, in order.
    pub fn children(&self) -> &[Variable] {
        &self.children
    }

    /// The factor of the node.
    pub fn factor(&self) -> &Factor {
        &self.factor
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

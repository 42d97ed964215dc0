/*!
Elimination plans --- the sequence of network operations which answers a query.

# Overview

Evidence is applied by clamping the factor of each evidence variable.
Then, factors are folded toward the query variable by two sweeps:

- The *ancestor* sweep of a variable *v* folds each parent *p* of *v* into *v* via [join_down](crate::network::Network::join_down), after the ancestor sweep of *p*.
  Parents on a given avoid list are skipped, though the avoid list is not passed on to the ancestor sweeps of parents.
- The *descendant* sweep of a variable *v* makes the ancestor sweep of *v*, avoiding each variable on a path shared by the whole sweep.
  Then *v* is added to the path, and for each child *c* of *v*, the descendant sweep of *c* is made and *c* is folded into *v* via [join_up](crate::network::Network::join_up).

Without evidence, the query variable is given its ancestor sweep, and the factor of the query variable is the marginal distribution of the variable.
With evidence, the query variable is given its descendant sweep from an empty path, and the factor of the query variable is normalized.

The parents of each node change as factors are folded together.
So, to fix the sequence of operations ahead of execution, the planner tracks the parent list each node would have after each step, and each sweep reads the parents of a variable as they are when the variable is visited.
The children of a node never change.

Evidence variables are clamped and never normalized.

# Scope

The sweeps are exact on networks whose undirected skeleton is a tree.
On other networks the sweeps still complete, though some ancestor may be folded into more than one node.

# Example

```rust
# use bayes_net::procedures::plan::Step;
# use bayes_net::samples;
# use bayes_net::structures::literal::Literal;
let network = samples::alarm().unwrap();

let plan = network
    .plan(
        "Burglary",
        &[Literal::positive("JohnCalls"), Literal::positive("MaryCalls")],
    )
    .unwrap();

assert_eq!(plan.steps().last(), Some(&Step::Normalize("Burglary".to_string())));
```
*/

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    config::SweepOrder,
    misc::log::targets::{self},
    network::Network,
    structures::{assignment::Assignment, literal::Literal, variable::Variable},
    types::err::{ErrorKind, FactorError, NetworkError, QueryError},
};

/// A single operation on a network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    /// Clamp the factor of the variable of the literal to the literal.
    Assign(Literal),

    /// Fold `parent` into `child`.
    JoinDown { parent: Variable, child: Variable },

    /// Fold `child` into `parent`.
    JoinUp { parent: Variable, child: Variable },

    /// Normalize the factor of the variable.
    Normalize(Variable),
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assign(literal) => write!(f, "assign {literal}"),
            Self::JoinDown { parent, child } => write!(f, "join_down {parent} {child}"),
            Self::JoinUp { parent, child } => write!(f, "join_up {parent} {child}"),
            Self::Normalize(variable) => write!(f, "normalize {variable}"),
        }
    }
}

/// The steps which answer a query of some variable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Plan {
    variable: Variable,
    steps: Vec<Step>,
}

impl Plan {
    /// The query variable.
    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    /// The steps of the plan, in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f, "{index} {step}")?;
        }
        Ok(())
    }
}

/// Simulates the parent lists of a network through the sweeps of a query.
struct Planner<'network> {
    network: &'network Network,

    order: SweepOrder,

    /// The parents each node would have after the steps made so far.
    parents: HashMap<Variable, Vec<Variable>>,

    /// The variables visited by the descendant sweep.
    path: Vec<Variable>,

    steps: Vec<Step>,
}

impl<'network> Planner<'network> {
    fn new(network: &'network Network) -> Self {
        let parents = network
            .nodes()
            .iter()
            .map(|node| (node.name().clone(), node.parents().to_vec()))
            .collect();

        Planner {
            network,
            order: network.config.sweep_order.value,
            parents,
            path: Vec::default(),
            steps: Vec::default(),
        }
    }

    fn parents_of(&self, variable: &str) -> Vec<Variable> {
        let parents = self.parents.get(variable).cloned().unwrap_or_default();
        self.order.arrange(parents)
    }

    fn children_of(&self, variable: &str) -> Vec<Variable> {
        let children = match self.network.node(variable) {
            Some(node) => node.children().to_vec(),
            None => Vec::default(),
        };
        self.order.arrange(children)
    }

    fn join(&mut self, parent: &str, child: &str, target: &str) {
        let mut union = self.parents.get(parent).cloned().unwrap_or_default();
        for variable in self.parents.get(child).into_iter().flatten() {
            if !union.contains(variable) {
                union.push(variable.clone());
            }
        }
        self.parents.insert(target.to_owned(), union);
    }

    fn marginalize(&mut self, name: &str, variable: &str) {
        if let Some(parents) = self.parents.get_mut(name) {
            parents.retain(|p| p != variable && p != name);
        }
    }

    fn join_down(&mut self, parent: &str, child: &str) {
        self.join(parent, child, child);
        self.marginalize(child, parent);
        log::debug!(target: targets::PLAN, "join_down {parent} {child}");
        self.steps.push(Step::JoinDown {
            parent: parent.to_owned(),
            child: child.to_owned(),
        });
    }

    fn join_up(&mut self, parent: &str, child: &str) {
        self.join(parent, child, parent);
        self.marginalize(parent, child);
        log::debug!(target: targets::PLAN, "join_up {parent} {child}");
        self.steps.push(Step::JoinUp {
            parent: parent.to_owned(),
            child: child.to_owned(),
        });
    }

    fn sweep_ancestors(&mut self, variable: &str, avoid: &[Variable]) {
        for parent in self.parents_of(variable) {
            if avoid.contains(&parent) {
                continue;
            }
            self.sweep_ancestors(&parent, &[]);
            self.join_down(&parent, variable);
        }
    }

    fn sweep_descendants(&mut self, variable: &str) {
        let avoid = self.path.clone();
        self.sweep_ancestors(variable, &avoid);

        self.path.push(variable.to_owned());
        for child in self.children_of(variable) {
            self.sweep_descendants(&child);
            self.join_up(variable, &child);
        }
    }
}

impl Network {
    /// The plan which answers a query of `variable` given `evidence`.
    ///
    /// Repeated evidence is ignored, while evidence of both values of some variable is an error.
    pub fn plan(&self, variable: &str, evidence: &[Literal]) -> Result<Plan, ErrorKind> {
        if !self.contains(variable) {
            return Err(NetworkError::UnknownVariable(variable.to_owned()).into());
        }

        let mut assignment = Assignment::default();
        for literal in evidence {
            if !self.contains(literal.variable()) {
                return Err(NetworkError::UnknownVariable(literal.variable().clone()).into());
            }

            match assignment.push(literal.clone()) {
                Ok(()) => {}
                Err(FactorError::ContradictoryAssignment(v)) => {
                    return Err(QueryError::ContradictoryEvidence(v).into())
                }
                Err(e) => return Err(e.into()),
            }
        }

        let mut planner = Planner::new(self);
        planner
            .steps
            .extend(assignment.literals().iter().cloned().map(Step::Assign));

        if assignment.is_empty() {
            planner.sweep_ancestors(variable, &[]);
        } else {
            planner.sweep_descendants(variable);
            planner.steps.push(Step::Normalize(variable.to_owned()));
        }

        log::debug!(target: targets::PLAN, "Plan of {} steps for {variable}", planner.steps.len());
        Ok(Plan {
            variable: variable.to_owned(),
            steps: planner.steps,
        })
    }

    /// Applies `step` to the network.
    pub fn apply(&mut self, step: &Step) -> Result<(), ErrorKind> {
        log::trace!(target: targets::QUERY, "{step}");
        match step {
            Step::Assign(literal) => self.assign(literal),
            Step::JoinDown { parent, child } => self.join_down(parent, child),
            Step::JoinUp { parent, child } => self.join_up(parent, child),
            Step::Normalize(variable) => self.normalize(variable),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::samples;

    use super::*;

    fn join_down(parent: &str, child: &str) -> Step {
        Step::JoinDown {
            parent: parent.to_string(),
            child: child.to_string(),
        }
    }

    fn join_up(parent: &str, child: &str) -> Step {
        Step::JoinUp {
            parent: parent.to_string(),
            child: child.to_string(),
        }
    }

    #[test]
    fn marginal_plan() {
        let network = samples::alarm().unwrap();

        let plan = network.plan("Alarm", &[]).unwrap();
        assert_eq!(
            plan.steps(),
            &[join_down("Burglary", "Alarm"), join_down("Earthquake", "Alarm")]
        );

        let plan = network.plan("Burglary", &[]).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn evidence_plan() {
        let network = samples::alarm().unwrap();

        let plan = network
            .plan(
                "Burglary",
                &[Literal::positive("JohnCalls"), Literal::positive("MaryCalls")],
            )
            .unwrap();

        assert_eq!(
            plan.steps(),
            &[
                Step::Assign(Literal::positive("JohnCalls")),
                Step::Assign(Literal::positive("MaryCalls")),
                join_down("Earthquake", "Alarm"),
                join_up("Alarm", "JohnCalls"),
                join_up("Alarm", "MaryCalls"),
                join_up("Burglary", "Alarm"),
                Step::Normalize("Burglary".to_string()),
            ]
        );
    }

    #[test]
    fn reversed_plan() {
        let mut network = samples::alarm().unwrap();
        network.config.sweep_order.value = SweepOrder::Reversed;

        let plan = network
            .plan("Burglary", &[Literal::positive("JohnCalls")])
            .unwrap();

        assert_eq!(
            plan.steps(),
            &[
                Step::Assign(Literal::positive("JohnCalls")),
                join_down("Earthquake", "Alarm"),
                join_up("Alarm", "MaryCalls"),
                join_up("Alarm", "JohnCalls"),
                join_up("Burglary", "Alarm"),
                Step::Normalize("Burglary".to_string()),
            ]
        );
    }

    #[test]
    fn repeated_evidence() {
        let network = samples::alarm().unwrap();

        let once = network.plan("Earthquake", &[Literal::positive("JohnCalls")]);
        let twice = network.plan(
            "Earthquake",
            &[Literal::positive("JohnCalls"), Literal::positive("JohnCalls")],
        );

        assert_eq!(once, twice);
    }

    #[test]
    fn bad_evidence() {
        let network = samples::alarm().unwrap();

        assert_eq!(
            network.plan(
                "Burglary",
                &[Literal::positive("JohnCalls"), Literal::negative("JohnCalls")]
            ),
            Err(ErrorKind::Query(QueryError::ContradictoryEvidence(
                "JohnCalls".to_string()
            )))
        );

        assert_eq!(
            network.plan("Burglary", &[Literal::positive("Storm")]),
            Err(ErrorKind::Network(NetworkError::UnknownVariable(
                "Storm".to_string()
            )))
        );
    }

    #[test]
    fn display() {
        let network = samples::alarm().unwrap();
        let plan = network.plan("Alarm", &[]).unwrap();

        assert_eq!(
            plan.to_string(),
            "0 join_down Burglary Alarm\n1 join_down Earthquake Alarm\n"
        );
    }
}

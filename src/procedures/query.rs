/*!
Answers a query of a network.

# Overview

A query of some variable given some (possibly empty) evidence is answered by:
- Deriving a [plan](crate::procedures::plan) for the query.
- Cloning the network, and applying each step of the plan to the clone.
- Reading off the factor of the query variable from the clone as a [Posterior], and dropping the clone.

```none
             +------+       +-------+           +-----------+
  query ---->| plan |------>| clone |---------->| posterior |
             +------+       +-------+           +-----------+
                                |   ⌃
                                |   | each step
                                +---+
```

As each step is applied to a clone, queries take the network by reference and never change the network.
In particular, a query which fails partway leaves the network as it was.

# Example

```rust
# use bayes_net::samples;
# use bayes_net::structures::literal::Literal;
let network = samples::alarm().unwrap();

let posterior = network
    .query(
        "Burglary",
        &[Literal::positive("JohnCalls"), Literal::positive("MaryCalls")],
    )
    .unwrap();

let burglary = posterior.probability_of(&Literal::positive("Burglary")).unwrap();
assert!((burglary - 0.284).abs() < 1e-3);

// The network is unchanged, and so the same query gives the same result.
let again = network
    .query(
        "Burglary",
        &[Literal::positive("JohnCalls"), Literal::positive("MaryCalls")],
    )
    .unwrap();
assert_eq!(posterior, again);
```
*/

use crate::{
    misc::log::targets::{self},
    network::Network,
    procedures::plan::Plan,
    reports::Posterior,
    structures::literal::Literal,
    types::err::ErrorKind,
};

impl Network {
    /// The distribution of `variable` given `evidence`.
    ///
    /// Without evidence the distribution is the marginal distribution of `variable`, and is not normalized.
    pub fn query(&self, variable: &str, evidence: &[Literal]) -> Result<Posterior, ErrorKind> {
        let plan = self.plan(variable, evidence)?;
        let posterior = self.execute(&plan)?;

        log::info!(target: targets::QUERY, "{variable} given {evidence:?}: {:?}", posterior.labelled());
        Ok(posterior)
    }

    /// Applies each step of `plan` to a copy of the network, and returns the factor of the query variable.
    pub fn execute(&self, plan: &Plan) -> Result<Posterior, ErrorKind> {
        let mut working = self.clone();

        for step in plan.steps() {
            if let Err(e) = working.apply(step) {
                log::error!(target: targets::QUERY, "Failed to apply {step}: {e}");
                return Err(e);
            }
        }

        let factor = working.factor(plan.variable())?;
        Ok(Posterior::from(factor.clone()))
    }
}

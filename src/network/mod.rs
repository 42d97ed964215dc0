/*!
Networks --- directed acyclic graphs of [nodes](Node), each with a conditional probability table.

A network is a registry of nodes by name, together with a [configuration](Config).
On construction a network is checked to ensure:
- Each variable is the name of exactly one node.
- Each parent or child named by some node is part of the network.
- Edges are consistent: *p* is a parent of *c* if and only if *c* is a child of *p*.
- The graph is acyclic.
- Optionally, each conditional probability table sums to one for each assignment to the parents of the node (see [check_cpt](Config::check_cpt)).

# Operations

The factor algebra is lifted to nodes by a handful of in-place [operations](Network::join).
These are destructive, and so are applied by a [query](crate::procedures::query) to a private copy of the network.

# Example

```rust
# use bayes_net::network::{Network, Node};
# use bayes_net::structures::literal::Literal;
let cloudy = Node::new("Cloudy", &[], &["Rain"], vec![0.5, 0.5]).unwrap();
let rain = Node::new("Rain", &["Cloudy"], &[], vec![0.8, 0.2, 0.2, 0.8]).unwrap();

let network = Network::from_nodes(vec![cloudy, rain]).unwrap();

let posterior = network.query("Cloudy", &[Literal::positive("Rain")]).unwrap();
assert!((posterior.probability_of(&Literal::positive("Cloudy")).unwrap() - 0.8).abs() < 1e-12);
```
*/

mod node;
pub use node::Node;

mod operations;
mod validate;

use std::collections::HashMap;

use crate::{
    config::Config,
    misc::log::targets::{self},
    structures::{factor::Factor, variable::Variable},
    types::err::{BuildError, ErrorKind, NetworkError},
};

/// A Bayesian network over boolean variables.
#[derive(Clone, Debug)]
pub struct Network {
    /// The nodes of the network, in the order given.
    nodes: Vec<Node>,

    /// The index of each node in `nodes`, by name.
    index: HashMap<Variable, usize>,

    /// The configuration of the network.
    pub config: Config,
}

impl Network {
    /// An empty network with the given configuration.
    pub fn from_config(config: Config) -> Self {
        Network {
            nodes: Vec::default(),
            index: HashMap::default(),
            config,
        }
    }

    /// A network of `nodes`, with the default configuration.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self, ErrorKind> {
        Self::with_nodes(Config::default(), nodes)
    }

    /// A network of `nodes`, with the given configuration.
    pub fn with_nodes(config: Config, nodes: Vec<Node>) -> Result<Self, ErrorKind> {
        let mut network = Self::from_config(config);
        network.nodes.reserve(nodes.len());

        for node in nodes {
            if network.index.contains_key(&node.name) {
                return Err(BuildError::DuplicateVariable(node.name).into());
            }
            network.index.insert(node.name.clone(), network.nodes.len());
            network.nodes.push(node);
        }

        network.validate()?;
        log::info!(target: targets::BUILD, "Built a network of {} nodes", network.nodes.len());
        Ok(network)
    }

    /// Adds `node` to the network as a child of each of its parents.
    ///
    /// The parents of the node must be part of the network, and the node must not have children.
    /// In other words, the network is extended with a fresh leaf.
    pub fn add(&mut self, node: Node) -> Result<(), ErrorKind> {
        if self.index.contains_key(&node.name) {
            return Err(BuildError::DuplicateVariable(node.name).into());
        }

        if let Some(child) = node.children.first() {
            return Err(BuildError::InconsistentEdge {
                parent: node.name.clone(),
                child: child.clone(),
            }
            .into());
        }

        for parent in &node.parents {
            if !self.index.contains_key(parent) {
                return Err(BuildError::UnknownVariable {
                    node: node.name.clone(),
                    reference: parent.clone(),
                }
                .into());
            }
        }

        self.check_cpt(&node)?;

        for parent in &node.parents {
            let position = self.index[parent];
            self.nodes[position].children.push(node.name.clone());
        }

        log::trace!(target: targets::BUILD, "Added {} below {:?}", node.name, node.parents);
        self.index.insert(node.name.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// The position of `variable` in the node list.
    fn position(&self, variable: &str) -> Result<usize, NetworkError> {
        self.index
            .get(variable)
            .copied()
            .ok_or_else(|| NetworkError::UnknownVariable(variable.to_owned()))
    }

    /// The node of `variable`, if part of the network.
    pub fn node(&self, variable: &str) -> Option<&Node> {
        self.index.get(variable).map(|&position| &self.nodes[position])
    }

    /// The factor of the node of `variable`.
    pub fn factor(&self, variable: &str) -> Result<&Factor, ErrorKind> {
        Ok(&self.nodes[self.position(variable)?].factor)
    }

    /// The nodes of the network, in the order given.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The variables of the network, in the order given.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.nodes.iter().map(|node| &node.name)
    }

    /// Whether `variable` is part of the network.
    pub fn contains(&self, variable: &str) -> bool {
        self.index.contains_key(variable)
    }

    /// A count of nodes in the network.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

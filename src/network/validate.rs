//! Checks on the structure of a network, made on construction.

use petgraph::{algo::toposort, graph::DiGraph, prelude::NodeIndex};

use crate::{
    misc::log::targets::{self},
    network::{Network, Node},
    structures::variable::Variable,
    types::err::BuildError,
};

impl Network {
    /// Checks each reference, edge, and (optionally) table of the network, and that the network is acyclic.
    pub(super) fn validate(&self) -> Result<(), BuildError> {
        for node in &self.nodes {
            for reference in node.parents.iter().chain(&node.children) {
                if !self.index.contains_key(reference) {
                    log::error!(target: targets::BUILD, "{} refers to {reference}, which is not part of the network", node.name);
                    return Err(BuildError::UnknownVariable {
                        node: node.name.clone(),
                        reference: reference.clone(),
                    });
                }
            }
        }

        for node in &self.nodes {
            for parent in &node.parents {
                if !self.nodes[self.index[parent]].children.contains(&node.name) {
                    return Err(BuildError::InconsistentEdge {
                        parent: parent.clone(),
                        child: node.name.clone(),
                    });
                }
            }

            for child in &node.children {
                if !self.nodes[self.index[child]].parents.contains(&node.name) {
                    return Err(BuildError::InconsistentEdge {
                        parent: node.name.clone(),
                        child: child.clone(),
                    });
                }
            }

            self.check_cpt(node)?;
        }

        self.topological_order()?;
        Ok(())
    }

    /// If [check_cpt](crate::config::Config::check_cpt) is set, checks each row pair of the table of `node` sums to one, within [cpt_tolerance](crate::config::Config::cpt_tolerance).
    pub(super) fn check_cpt(&self, node: &Node) -> Result<(), BuildError> {
        if !self.config.check_cpt.value {
            return Ok(());
        }

        let tolerance = self.config.cpt_tolerance.value;
        for (pair, weights) in node.factor.weights().chunks_exact(2).enumerate() {
            let sum = weights[0] + weights[1];
            if (sum - 1.0).abs() > tolerance {
                log::error!(target: targets::BUILD, "Rows {} and {} of {} sum to {sum}", 2 * pair, 2 * pair + 1, node.name);
                return Err(BuildError::UnnormalizedCPT {
                    variable: node.name.clone(),
                    row: 2 * pair,
                });
            }
        }

        Ok(())
    }

    /// The variables of the network, ordered so each parent appears before each of its children.
    ///
    /// If the network contains a cycle, the error names some variable on the cycle.
    pub fn topological_order(&self) -> Result<Vec<&Variable>, BuildError> {
        let mut graph = DiGraph::<usize, ()>::with_capacity(self.nodes.len(), self.nodes.len());
        let indicies: Vec<NodeIndex> = (0..self.nodes.len()).map(|position| graph.add_node(position)).collect();

        for (position, node) in self.nodes.iter().enumerate() {
            for parent in &node.parents {
                let Some(&parent_position) = self.index.get(parent) else {
                    return Err(BuildError::UnknownVariable {
                        node: node.name.clone(),
                        reference: parent.clone(),
                    });
                };
                graph.add_edge(indicies[parent_position], indicies[position], ());
            }
        }

        match toposort(&graph, None) {
            Ok(order) => Ok(order
                .into_iter()
                .map(|index| &self.nodes[graph[index]].name)
                .collect()),

            Err(cycle) => {
                let name = self.nodes[graph[cycle.node_id()]].name.clone();
                log::error!(target: targets::BUILD, "Cycle through {name}");
                Err(BuildError::CyclicGraph(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, types::err::ErrorKind};

    use super::*;

    #[test]
    fn unknown_reference() {
        let nodes = vec![Node::new("p", &[], &["q"], vec![0.5, 0.5]).unwrap()];

        assert_eq!(
            Network::from_nodes(nodes).map(|n| n.len()),
            Err(ErrorKind::Build(BuildError::UnknownVariable {
                node: "p".to_string(),
                reference: "q".to_string()
            }))
        );
    }

    #[test]
    fn one_sided_edge() {
        let nodes = vec![
            Node::new("p", &[], &[], vec![0.5, 0.5]).unwrap(),
            Node::new("q", &["p"], &[], vec![0.5; 4]).unwrap(),
        ];

        assert_eq!(
            Network::from_nodes(nodes).map(|n| n.len()),
            Err(ErrorKind::Build(BuildError::InconsistentEdge {
                parent: "p".to_string(),
                child: "q".to_string()
            }))
        );
    }

    #[test]
    fn cycle() {
        let nodes = vec![
            Node::new("p", &["r"], &["q"], vec![0.5; 4]).unwrap(),
            Node::new("q", &["p"], &["r"], vec![0.5; 4]).unwrap(),
            Node::new("r", &["q"], &["p"], vec![0.5; 4]).unwrap(),
        ];

        let result = Network::from_nodes(nodes).map(|n| n.len());
        assert!(matches!(
            result,
            Err(ErrorKind::Build(BuildError::CyclicGraph(_)))
        ));
    }

    #[test]
    fn parents_before_children() {
        let nodes = vec![
            Node::new("c", &["a", "b"], &[], vec![0.5; 8]).unwrap(),
            Node::new("b", &["a"], &["c"], vec![0.5; 4]).unwrap(),
            Node::new("a", &[], &["b", "c"], vec![0.5; 2]).unwrap(),
        ];
        let network = Network::from_nodes(nodes).unwrap();

        let order = network.topological_order().unwrap();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn unnormalized_table() {
        let nodes = vec![Node::new("p", &[], &[], vec![0.5, 0.6]).unwrap()];
        assert!(Network::from_nodes(nodes.clone()).is_ok());

        let mut config = Config::default();
        config.check_cpt.value = true;
        assert_eq!(
            Network::with_nodes(config.clone(), nodes).map(|n| n.len()),
            Err(ErrorKind::Build(BuildError::UnnormalizedCPT {
                variable: "p".to_string(),
                row: 0
            }))
        );

        let within = vec![Node::new("p", &[], &[], vec![0.5, 0.5 + 1e-12]).unwrap()];
        assert!(Network::with_nodes(config, within).is_ok());
    }
}

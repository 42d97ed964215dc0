/*!
In-place operations on the nodes of a network.

Each operation lifts some part of the [factor algebra](crate::structures::factor::algebra) to nodes, keeping the parent list of each node in line with the scope of its factor.
That is, after each of [join_up](Network::join_up) and [join_down](Network::join_down) the factor of each node is over the parents of the node followed by the node.

A [join](Network::join) alone breaks this alignment: the factor of the target is left over the joined parents followed by the *child*, until the marginalization which follows.

No operation restores a node on error, and so a network should be considered spent after any operation fails.
*/

use crate::{
    misc::log::targets::{self},
    network::Network,
    structures::{literal::Literal, variable::Variable},
    types::err::{ErrorKind, FactorError, NetworkError},
};

impl Network {
    /// Joins the factors of `parent` and `child` over the union of their parents followed by `child`.
    ///
    /// The joined factor and the union of parents are given to `target`, which must be one of `parent` or `child`.
    /// The other node is unchanged.
    pub fn join(&mut self, parent: &str, child: &str, target: &str) -> Result<(), ErrorKind> {
        let parent_position = self.position(parent)?;
        let child_position = self.position(child)?;

        let target_position = if target == parent {
            parent_position
        } else if target == child {
            child_position
        } else {
            return Err(NetworkError::InvalidTarget(target.to_owned()).into());
        };

        let mut union = self.nodes[parent_position].parents.clone();
        for variable in &self.nodes[child_position].parents {
            if !union.contains(variable) {
                union.push(variable.clone());
            }
        }

        let mut scope = union.clone();
        scope.push(self.nodes[child_position].name.clone());

        let max = self.config.max_scope.value;
        if scope.len() > max {
            log::error!(target: targets::NETWORK, "Join of {parent} and {child} over {scope:?}");
            return Err(NetworkError::ScopeTooLarge {
                size: scope.len(),
                max,
            }
            .into());
        }

        let factor = self.nodes[parent_position]
            .factor
            .join_over(&self.nodes[child_position].factor, scope)?;

        log::trace!(target: targets::NETWORK, "Joined {parent} and {child} into {target}");
        let target_node = &mut self.nodes[target_position];
        target_node.parents = union;
        target_node.factor = factor;
        Ok(())
    }

    /// Sums `variable` out of the factor of `name`, and removes both `variable` and `name` from the parents of `name`.
    pub fn marginalize(&mut self, name: &str, variable: &str) -> Result<(), ErrorKind> {
        let position = self.position(name)?;
        let node = &self.nodes[position];

        if !node.factor.contains(variable) {
            return Err(FactorError::VariableNotInScope(variable.to_owned()).into());
        }

        let parents: Vec<Variable> = node
            .parents
            .iter()
            .filter(|p| *p != variable && *p != name)
            .cloned()
            .collect();

        let mut scope = parents.clone();
        scope.push(node.name.clone());
        let factor = node.factor.project(scope)?;

        log::trace!(target: targets::NETWORK, "Marginalized {variable} from {name}");
        let node = &mut self.nodes[position];
        node.parents = parents;
        node.factor = factor;
        Ok(())
    }

    /// Clamps the factor of the variable of `literal` to `literal`.
    pub fn assign(&mut self, literal: &Literal) -> Result<(), ErrorKind> {
        let position = self.position(literal.variable())?;
        self.nodes[position].factor.clamp(literal)?;

        log::trace!(target: targets::NETWORK, "Assigned {literal}");
        Ok(())
    }

    /// Normalizes the factor of `name`.
    pub fn normalize(&mut self, name: &str) -> Result<(), ErrorKind> {
        let position = self.position(name)?;
        self.nodes[position].factor.normalize()?;

        log::trace!(target: targets::NETWORK, "Normalized {name}");
        Ok(())
    }

    /// Folds `child` into `parent`: a join targeting `parent`, followed by marginalizing `child` from `parent`.
    pub fn join_up(&mut self, parent: &str, child: &str) -> Result<(), ErrorKind> {
        self.join(parent, child, parent)?;
        self.marginalize(parent, child)
    }

    /// Folds `parent` into `child`: a join targeting `child`, followed by marginalizing `parent` from `child`.
    pub fn join_down(&mut self, parent: &str, child: &str) -> Result<(), ErrorKind> {
        self.join(parent, child, child)?;
        self.marginalize(child, parent)
    }
}

#[cfg(test)]
mod tests {
    use crate::network::Node;

    use super::*;

    fn close(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-12)
    }

    fn chain() -> Network {
        Network::from_nodes(vec![
            Node::new("p", &[], &["q"], vec![0.3, 0.7]).unwrap(),
            Node::new("q", &["p"], &[], vec![0.9, 0.1, 0.4, 0.6]).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn join_targets() {
        let mut network = chain();

        assert!(network.join("p", "q", "q").is_ok());
        let q = network.node("q").unwrap();
        assert_eq!(q.parents(), &["p"]);
        assert_eq!(q.factor().scope(), &["p", "q"]);
        assert!(close(q.factor().weights(), &[0.27, 0.03, 0.28, 0.42]));

        let p = network.node("p").unwrap();
        assert_eq!(p.factor().scope(), &["p"]);

        assert_eq!(
            network.join("p", "q", "r"),
            Err(ErrorKind::Network(NetworkError::InvalidTarget(
                "r".to_string()
            )))
        );
    }

    #[test]
    fn fold_down() {
        let mut network = chain();

        assert!(network.join_down("p", "q").is_ok());
        let q = network.node("q").unwrap();
        assert!(q.parents().is_empty());
        assert_eq!(q.factor().scope(), &["q"]);
        assert!(close(q.factor().weights(), &[0.55, 0.45]));
    }

    #[test]
    fn fold_up() {
        let mut network = chain();

        assert!(network.assign(&Literal::positive("q")).is_ok());
        assert!(network.join_up("p", "q").is_ok());

        let p = network.node("p").unwrap();
        assert!(p.parents().is_empty());
        assert_eq!(p.factor().scope(), &["p"]);
        assert!(close(p.factor().weights(), &[0.27, 0.28]));

        assert!(network.normalize("p").is_ok());
        let p = network.node("p").unwrap();
        assert!(close(p.factor().weights(), &[0.27 / 0.55, 0.28 / 0.55]));
    }

    #[test]
    fn marginalize_out_of_scope() {
        let mut network = chain();

        assert_eq!(
            network.marginalize("p", "q"),
            Err(ErrorKind::Factor(FactorError::VariableNotInScope(
                "q".to_string()
            )))
        );
    }

    #[test]
    fn unknown_variable() {
        let mut network = chain();

        assert_eq!(
            network.assign(&Literal::negative("r")),
            Err(ErrorKind::Network(NetworkError::UnknownVariable(
                "r".to_string()
            )))
        );
        assert!(network.join_up("r", "q").is_err());
    }

    #[test]
    fn scope_limit() {
        let mut network = chain();
        network.config.max_scope.value = 1;

        assert_eq!(
            network.join("p", "q", "q"),
            Err(ErrorKind::Network(NetworkError::ScopeTooLarge {
                size: 2,
                max: 1
            }))
        );
    }
}

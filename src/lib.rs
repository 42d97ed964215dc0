//! A library for exact inference over Bayesian networks of boolean variables.
//!
//! A network is a directed acyclic graph of variables, where each variable is annotated with a conditional probability table over itself and its parents.
//! Given a query variable and some (possibly empty) evidence, the library computes the distribution of the query variable by folding the tables of the network into the table of the query variable.
//!
//! # Orientation
//!
//! The library is designed around a [network](crate::network::Network), built once from a collection of [nodes](crate::network::Node) and queried any number of times.
//!
//! Useful starting points, then, may be:
//! - The [factor](crate::structures::factor) module, for the representation of tables and the [algebra](crate::structures::factor::algebra) over them.
//! - The [plan](crate::procedures::plan) module, for the sweeps made to answer a query.
//! - The [query](crate::procedures::query) module, for how a plan is applied without change to the network.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + The probability of a burglary, given both neighbours call.
//!
//! ```rust
//! # use bayes_net::network::{Network, Node};
//! # use bayes_net::structures::literal::Literal;
//! let nodes = vec![
//!     Node::new("Burglary", &[], &["Alarm"], vec![0.001, 0.999]).unwrap(),
//!     Node::new("Earthquake", &[], &["Alarm"], vec![0.002, 0.998]).unwrap(),
//!     Node::new(
//!         "Alarm",
//!         &["Burglary", "Earthquake"],
//!         &["JohnCalls", "MaryCalls"],
//!         vec![0.95, 0.05, 0.94, 0.06, 0.29, 0.71, 0.001, 0.999],
//!     )
//!     .unwrap(),
//!     Node::new("JohnCalls", &["Alarm"], &[], vec![0.9, 0.1, 0.05, 0.95]).unwrap(),
//!     Node::new("MaryCalls", &["Alarm"], &[], vec![0.7, 0.3, 0.01, 0.99]).unwrap(),
//! ];
//!
//! let network = Network::from_nodes(nodes).unwrap();
//!
//! let evidence = ["+JohnCalls", "+MaryCalls"]
//!     .iter()
//!     .map(|literal| literal.parse::<Literal>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let posterior = network.query("Burglary", &evidence).unwrap();
//!
//! for (label, probability) in posterior.labelled() {
//!     println!("{label} {probability}");
//! }
//! ```
//!
//! + The elimination plan of a query.
//!
//! ```rust
//! # use bayes_net::samples;
//! # use bayes_net::structures::literal::Literal;
//! let network = samples::alarm().unwrap();
//!
//! let plan = network.plan("Earthquake", &[Literal::positive("JohnCalls")]).unwrap();
//! print!("{plan}");
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Each step applied during a query can be found with `RUST_LOG=query=trace …` or,
//! - The joins made during a query can be found with `RUST_LOG=factor=trace …`
//!

#![allow(clippy::derivable_impls)]

pub mod config;
pub mod network;
pub mod procedures;
pub mod reports;
pub mod samples;
pub mod structures;
pub mod types;

pub mod misc;

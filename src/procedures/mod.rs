//! Procedures for answering queries of a network.
//!
//! A query is answered in two stages:
//! - A [plan](crate::procedures::plan) of the operations to apply is derived from the structure of the network and the evidence of the query.
//! - The plan is [executed](crate::procedures::query) against a private copy of the network, and the factor of the query variable is read off as a [posterior](crate::reports::Posterior).

pub mod plan;
pub mod query;

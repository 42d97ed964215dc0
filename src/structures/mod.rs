//! Key structures, such as literals and factors.
//!
//! # Variables and values
//!
//! Each [variable] is a boolean random variable, and so has one of two values.
//! The first is identified as positive (or true, `+`) and the second as negative (or false, `-`).
//!
//! A [literal] pairs a variable with one of these values, and an [assignment] is a collection of literals with at most one literal for each variable.
//!
//! # Factors
//!
//! A [factor] is a table of weights, with one row for each assignment to the variables of its scope.
//! The conditional probability table of a node is a factor, as is every intermediate table built during a query.

pub mod assignment;
pub mod factor;
pub mod literal;
pub mod variable;

//! Error types used in the library.
//!
//! - Every error is fatal to the operation which returned it, and nothing is retried.
//!   Inference is a deterministic computation over fully specified inputs, so an error always indicates a problem with some input or an internal invariant.
//! - Some errors are external --- e.g. an `UnknownVariable` error from a query naming a variable absent from the network.
//!   In this case the network is untouched and may be used for further queries.
//! - Some are internal --- e.g. a `ScopeMismatch` during a join indicates a malformed table, and is never defaulted to some weight.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::variable::Variable;

/// The error type returned by public methods of the library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Build(BuildError),
    Factor(FactorError),
    Network(NetworkError),
    Parse(ParseError),
    Query(QueryError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "Build error: {e}"),
            Self::Factor(e) => write!(f, "Factor error: {e}"),
            Self::Network(e) => write!(f, "Network error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Query(e) => write!(f, "Query error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors when building a node or a network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The probabilities supplied for a node do not cover each assignment to the node and its parents.
    MalformedCPT {
        variable: Variable,
        expected: usize,
        found: usize,
    },

    /// Some probability is negative or not finite.
    InvalidProbability { variable: Variable, row: usize },

    /// A variable was named twice, either as two nodes of a network or twice in the scope of a node.
    DuplicateVariable(Variable),

    /// A node refers to a variable which is not part of the network.
    UnknownVariable { node: Variable, reference: Variable },

    /// The parent lists and child lists of two nodes disagree.
    InconsistentEdge { parent: Variable, child: Variable },

    /// The edges of the network form a cycle through the given variable.
    CyclicGraph(Variable),

    /// A complementary pair of rows of a table does not sum to one.
    /// Only checked when [check_cpt](crate::config::Config::check_cpt) is set.
    UnnormalizedCPT { variable: Variable, row: usize },
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedCPT {
                variable,
                expected,
                found,
            } => write!(
                f,
                "{variable} requires {expected} probabilities, but {found} were given"
            ),
            Self::InvalidProbability { variable, row } => {
                write!(f, "Row {row} of {variable} is not a valid probability")
            }
            Self::DuplicateVariable(variable) => write!(f, "{variable} is named more than once"),
            Self::UnknownVariable { node, reference } => {
                write!(f, "{node} refers to the unknown variable {reference}")
            }
            Self::InconsistentEdge { parent, child } => write!(
                f,
                "The edge from {parent} to {child} is missing from one of the nodes"
            ),
            Self::CyclicGraph(variable) => write!(f, "A cycle passes through {variable}"),
            Self::UnnormalizedCPT { variable, row } => {
                write!(f, "Rows {row} and {} of {variable} do not sum to one", row + 1)
            }
        }
    }
}

/// Noted errors from the factor algebra.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FactorError {
    /// No row of some operand is compatible with a row of the result.
    /// Equivalently, the variable of the operand is missing from the scope of the result.
    ScopeMismatch(Variable),

    /// A variable to marginalize, clamp, or look up is not in the scope of the factor.
    VariableNotInScope(Variable),

    /// A scope names some variable twice.
    DuplicateVariable(Variable),

    /// A scope is too large to tabulate.
    ScopeTooLarge { size: usize, max: usize },

    /// The number of weights given does not match the size of the scope.
    MalformedTable { expected: usize, found: usize },

    /// Some weight is negative or not finite.
    InvalidWeight { row: usize },

    /// Some pair of complementary rows sums to zero, and so cannot be normalized.
    /// Typically, the result of evidence which is impossible.
    DegenerateDistribution,

    /// An operation requiring some variable was applied to a factor with an empty scope.
    EmptyScope,

    /// An assignment would contain both literals of a variable.
    ContradictoryAssignment(Variable),

    /// An assignment does not value some variable of the scope.
    IncompleteAssignment(Variable),
}

impl From<FactorError> for ErrorKind {
    fn from(e: FactorError) -> Self {
        ErrorKind::Factor(e)
    }
}

impl std::fmt::Display for FactorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScopeMismatch(variable) => {
                write!(f, "No compatible row for {variable} in the joined scope")
            }
            Self::VariableNotInScope(variable) => write!(f, "{variable} is not in scope"),
            Self::DuplicateVariable(variable) => write!(f, "{variable} appears twice in a scope"),
            Self::ScopeTooLarge { size, max } => {
                write!(f, "A scope of {size} variables exceeds the limit of {max}")
            }
            Self::MalformedTable { expected, found } => {
                write!(f, "Expected {expected} weights, found {found}")
            }
            Self::InvalidWeight { row } => write!(f, "The weight of row {row} is invalid"),
            Self::DegenerateDistribution => write!(f, "Normalization of a zero distribution"),
            Self::EmptyScope => write!(f, "The scope is empty"),
            Self::ContradictoryAssignment(variable) => {
                write!(f, "Both values of {variable} are assigned")
            }
            Self::IncompleteAssignment(variable) => write!(f, "{variable} has no value"),
        }
    }
}

/// Noted errors from operations on a network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetworkError {
    /// Some variable is not part of the network.
    UnknownVariable(Variable),

    /// The target of a join is neither of the joined variables.
    InvalidTarget(Variable),

    /// A join would exceed the [configured](crate::config::Config::max_scope) maximum scope.
    ScopeTooLarge { size: usize, max: usize },
}

impl From<NetworkError> for ErrorKind {
    fn from(e: NetworkError) -> Self {
        ErrorKind::Network(e)
    }
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable(variable) => write!(f, "{variable} is not part of the network"),
            Self::InvalidTarget(variable) => {
                write!(f, "{variable} is not one of the joined variables")
            }
            Self::ScopeTooLarge { size, max } => {
                write!(f, "A join over {size} variables exceeds the limit of {max}")
            }
        }
    }
}

/// Noted errors when preparing a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The evidence of a query assigns both values to a variable.
    ContradictoryEvidence(Variable),
}

impl From<QueryError> for ErrorKind {
    fn from(e: QueryError) -> Self {
        ErrorKind::Query(e)
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContradictoryEvidence(variable) => {
                write!(f, "The evidence assigns both values to {variable}")
            }
        }
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// A literal without a leading `+` or `-`.
    MissingSign(String),

    /// A sign, without a variable to sign.
    MissingVariable,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty input"),
            Self::MissingSign(input) => write!(f, "{input} requires a leading + or -"),
            Self::MissingVariable => write!(f, "A sign requires a variable"),
        }
    }
}

impl std::error::Error for ParseError {}

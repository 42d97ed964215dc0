use std::str::FromStr;

use serde::Serialize;

/// The order in which the parents, or children, of a variable are folded into the variable during a sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SweepOrder {
    #[default]
    /// The order in which parents and children are listed on a node.
    Declared = 0,

    /// The reverse of the order in which parents and children are listed on a node.
    Reversed,
}

impl SweepOrder {
    /// The minimum SweepOrder type.
    pub const MIN: SweepOrder = SweepOrder::Declared;

    /// The maximum SweepOrder type.
    pub const MAX: SweepOrder = SweepOrder::Reversed;

    /// The variables of `list`, arranged by the order.
    pub fn arrange<T>(&self, mut list: Vec<T>) -> Vec<T> {
        if *self == Self::Reversed {
            list.reverse();
        }
        list
    }
}

impl std::fmt::Display for SweepOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Declared => write!(f, "declared"),
            Self::Reversed => write!(f, "reversed"),
        }
    }
}

impl FromStr for SweepOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "declared" => Ok(Self::Declared),

            "reversed" => Ok(Self::Reversed),

            _unkown_string => Err(()),
        }
    }
}

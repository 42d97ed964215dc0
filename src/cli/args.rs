use bayes_net::{
    config::{Config, SweepOrder},
    structures::literal::Literal,
};
use clap::Parser;

/// Queries the alarm network of Russell and Norvig
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The variable to query
    #[arg(short, long)]
    pub query: String,

    /// Evidence, as a signed variable such as +JohnCalls or -MaryCalls (may be repeated)
    #[arg(short, long, allow_hyphen_values = true)]
    pub evidence: Vec<Literal>,

    /// Display the elimination plan of the query
    #[arg(short, long, default_value_t = false)]
    pub plan: bool,

    /// Write the plan (if requested) and the posterior as JSON
    #[arg(short, long, default_value_t = false)]
    pub json: bool,

    /// The order in which parents and children are folded
    #[arg(long, default_value_t, value_enum)]
    pub sweep_order: SweepOrder,

    /// Require each pair of rows in a conditional probability table to sum to one
    #[arg(long, default_value_t = false)]
    pub check_cpt: bool,

    /// The largest scope permitted when joining two factors
    #[arg(long)]
    pub max_scope: Option<usize>,
}

/// A value outside of the bounds of some option.
#[derive(Debug)]
pub struct ConfigError {
    pub option: &'static str,
    pub value: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is not a valid value for {}", self.value, self.option)
    }
}

impl Args {
    /// The configuration requested by the arguments.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        config.sweep_order.value = self.sweep_order;
        config.check_cpt.value = self.check_cpt;

        if let Some(max_scope) = self.max_scope {
            if !config.max_scope.admits(&max_scope) {
                return Err(ConfigError {
                    option: config.max_scope.name,
                    value: max_scope.to_string(),
                });
            }
            config.max_scope.value = max_scope;
        }

        Ok(config)
    }
}

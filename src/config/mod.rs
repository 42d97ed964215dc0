/*!
Configuration of a network.

All configuration for a network is contained within a [Config], and each query made of a network uses the configuration of the network.

# Example

```rust
# use bayes_net::config::{Config, SweepOrder};
let mut config = Config::default();

assert!(config.sweep_order.admits(&SweepOrder::Reversed));
config.sweep_order.value = SweepOrder::Reversed;
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod sweep_order;
pub use sweep_order::SweepOrder;

use crate::structures::factor::SCOPE_MAX;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The order in which parents and children are folded during the sweeps of a query.
    pub sweep_order: ConfigOption<SweepOrder>,

    /// Require each complementary pair of rows in a conditional probability table to sum to one.
    pub check_cpt: ConfigOption<bool>,

    /// The tolerance used when checking a conditional probability table sums to one.
    pub cpt_tolerance: ConfigOption<f64>,

    /// The largest scope permitted when joining the factors of two nodes.
    pub max_scope: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sweep_order: ConfigOption {
                name: "sweep_order",
                min: SweepOrder::MIN,
                max: SweepOrder::MAX,
                value: SweepOrder::Declared,
            },

            check_cpt: ConfigOption {
                name: "check_cpt",
                min: false,
                max: true,
                value: false,
            },

            cpt_tolerance: ConfigOption {
                name: "cpt_tolerance",
                min: 0.0,
                max: 1.0,
                value: 1e-9,
            },

            max_scope: ConfigOption {
                name: "max_scope",
                min: 1,
                max: SCOPE_MAX,
                value: 20,
            },
        }
    }
}

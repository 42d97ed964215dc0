/*!
Sample networks.

# Alarm

The burglar alarm network of Russell and Norvig, *Artificial Intelligence: A Modern Approach*, figure 14.2.

```none
  Burglary     Earthquake
         \     /
          Alarm
         /     \
  JohnCalls   MaryCalls
```
*/

use crate::{
    config::Config,
    network::{Network, Node},
    types::err::ErrorKind,
};

/// The alarm network, with the default configuration.
pub fn alarm() -> Result<Network, ErrorKind> {
    alarm_with_config(Config::default())
}

/// The alarm network, with the given configuration.
pub fn alarm_with_config(config: Config) -> Result<Network, ErrorKind> {
    let nodes = vec![
        Node::new(
            "Alarm",
            &["Burglary", "Earthquake"],
            &["JohnCalls", "MaryCalls"],
            vec![0.95, 0.05, 0.94, 0.06, 0.29, 0.71, 0.001, 0.999],
        )?,
        Node::new("Burglary", &[], &["Alarm"], vec![0.001, 0.999])?,
        Node::new("Earthquake", &[], &["Alarm"], vec![0.002, 0.998])?,
        Node::new("JohnCalls", &["Alarm"], &[], vec![0.9, 0.1, 0.05, 0.95])?,
        Node::new("MaryCalls", &["Alarm"], &[], vec![0.7, 0.3, 0.01, 0.99])?,
    ];

    Network::with_nodes(config, nodes)
}

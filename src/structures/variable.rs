/*!
(The representation of) a variable.

Variables are boolean random variables, identified by name.
A name is any non-empty string, though names beginning with `+` or `-` cannot be read as [literals](crate::structures::literal).

```rust
# use bayes_net::structures::variable::Variable;
let variable: Variable = "Burglary".to_string();
```

# Notes
- Within a [network](crate::network) a variable is the name of exactly one node.
- Factors store variables by name, and so a factor may be inspected without reference to any network.
*/

/// A variable, identified by name.
pub type Variable = String;

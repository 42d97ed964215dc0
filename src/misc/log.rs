/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, most densely around the elimination steps of a query.
No log implementation is provided, and so any logger compatible with [log] may be used.

For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
- The steps of each elimination plan can be filtered with `RUST_LOG=plan …` or,
- Posteriors without the intermediate factors can be found with `RUST_LOG=query=info …`
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [factors](crate::structures::factor)
    pub const FACTOR: &str = "factor";

    /// Logs related to building a [network](crate::network)
    pub const BUILD: &str = "build";

    /// Logs related to in-place [network operations](crate::network::Network::join)
    pub const NETWORK: &str = "network";

    /// Logs related to [elimination plans](crate::procedures::plan)
    pub const PLAN: &str = "plan";

    /// Logs related to [queries](crate::procedures::query)
    pub const QUERY: &str = "query";
}

// ABOUTME: Loader for the builtin strategy registry from embedded JSON data.
// ABOUTME: Provides load_builtin_registry() to initialize the default StrategyRegistry.

//! Builtin strategy registry loader.
//!
//! The per-source strategies ship as embedded JSON so selectors and exclusion
//! phrases stay configuration data, replaceable without touching executor
//! code.

use crate::strategy::{SourceStrategy, StrategyRegistry};

/// Embedded JSON containing the builtin per-source strategies.
const BUILTIN_STRATEGIES_JSON: &str = include_str!("../data/strategies.json");

/// Loads the builtin strategy registry from embedded JSON.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed or cannot be deserialized.
pub fn load_builtin_registry() -> StrategyRegistry {
    let strategies: Vec<SourceStrategy> =
        serde_json::from_str(BUILTIN_STRATEGIES_JSON).expect("failed to parse builtin strategies");

    let mut registry = StrategyRegistry::new();
    for strategy in strategies {
        registry.register(strategy);
    }
    registry
}

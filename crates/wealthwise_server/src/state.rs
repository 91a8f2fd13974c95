use std::sync::Arc;

use wealthwise_core::{AllocationTable, AssetUniverse, RiskProfileTable};

/// Immutable engine configuration: risk-profile parameters, asset-class
/// statistics and the model-portfolio table. Built once at startup and
/// shared read-only across requests; nothing in it mutates.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub risk_profiles: RiskProfileTable,
    pub universe: AssetUniverse,
    pub allocations: AllocationTable,
}

impl EngineConfig {
    #[must_use]
    pub fn baseline() -> Self {
        Self {
            risk_profiles: RiskProfileTable::baseline(),
            universe: AssetUniverse::baseline(),
            allocations: AllocationTable::model_portfolios(),
        }
    }
}

/// Shared application state handed to every handler.
pub type Engine = Arc<EngineConfig>;

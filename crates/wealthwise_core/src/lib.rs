//! Goal projection and portfolio allocation library
//!
//! This crate provides the computational core of the WealthWise advisory
//! service:
//! - Monte Carlo goal projection (success probability + balance percentiles)
//! - Risk-score driven allocation rollup with Sharpe ratio
//! - Rebalancing drift analysis and trade planning
//! - Efficient frontier sweep over the model portfolios
//!
//! All lookup tables (risk-profile parameters, model portfolios, instrument
//! recommendations) are immutable configuration built once at process start
//! and passed explicitly to the calculators.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod allocation;
pub mod error;
pub mod percentiles;
pub mod projection;
pub mod rebalance;
pub mod recommend;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use allocation::{AllocationPlan, AllocationTable, recommend_allocation};
pub use error::ProjectionError;
pub use model::{
    AssetClass, AssetUniverse, ReturnAssumptions, RiskProfile, RiskProfileTable,
    SimulationOutcome,
};
pub use projection::{DEFAULT_SAMPLE_COUNT, GoalProjection, project, project_seeded};
pub use recommend::{GoalRecommendation, GoalStatus, recommend};

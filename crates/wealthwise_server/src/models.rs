use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use wealthwise_core::allocation::RecommendedHolding;
use wealthwise_core::model::{AssetClass, ReturnAssumptions, RiskProfile, SimulationOutcome};
use wealthwise_core::recommend::GoalRecommendation;

// ============================================================================
// Response Envelope
// ============================================================================

/// Success envelope; error responses are produced by `ApiError`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============================================================================
// Goal Simulation Types
// ============================================================================

/// Body of `POST /goals/{id}/simulate`. Required fields are optional here
/// so a missing field surfaces as a 400 validation error rather than a
/// body-rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateGoalRequest {
    pub current_amount: Option<f64>,
    pub target_amount: Option<f64>,
    /// Defaults to zero when omitted.
    #[serde(alias = "monthlyContribution")]
    pub monthly_contrib: Option<f64>,
    /// ISO calendar date, e.g. "2055-06-01".
    pub target_date: Option<String>,
    pub risk_level: Option<String>,
    /// Trials per run; defaults to 10,000.
    pub sample_count: Option<usize>,
}

/// Risk profile echoed back with the simulation.
#[derive(Debug, Serialize)]
pub struct RiskProfileInfo {
    pub name: RiskProfile,
    #[serde(flatten)]
    pub assumptions: ReturnAssumptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateGoalData {
    pub goal_id: String,
    pub simulation: SimulationOutcome,
    pub recommendations: GoalRecommendation,
    pub risk_profile: RiskProfileInfo,
    pub years_until_target: f64,
}

// ============================================================================
// Portfolio Optimization Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    pub risk_score: Option<f64>,
    pub investment_amount: Option<f64>,
    #[serde(default)]
    pub exclude_assets: Vec<AssetClass>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeData {
    pub risk_score: u8,
    pub allocation: FxHashMap<AssetClass, u32>,
    /// Percent, two decimals.
    pub expected_return: f64,
    /// Percent, two decimals.
    pub expected_volatility: f64,
    pub sharpe_ratio: f64,
    pub recommended_holdings: Vec<RecommendedHolding>,
    pub methodology: &'static str,
    pub rebalancing_frequency: &'static str,
}

// ============================================================================
// Rebalance Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceRequest {
    /// Asset class -> current market value.
    pub current_holdings: Option<FxHashMap<AssetClass, f64>>,
    /// Asset class -> target percentage weight.
    pub target_allocation: Option<FxHashMap<AssetClass, f64>>,
    /// Drift threshold in percentage points, 1-20; defaults to 5.
    pub threshold: Option<f64>,
}

// ============================================================================
// Frontier Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FrontierQuery {
    /// Number of sweep points; defaults to 100.
    pub points: Option<usize>,
}

// ============================================================================
// Health Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
}

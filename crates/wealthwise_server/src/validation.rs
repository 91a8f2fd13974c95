use jiff::civil::Date;

use crate::error::{ApiError, ApiResult};
use crate::models::{OptimizeRequest, RebalanceRequest, SimulateGoalRequest};
use rustc_hash::FxHashMap;
use wealthwise_core::model::{AssetClass, RiskProfile};

/// Default and bounds for the per-run trial count.
pub const DEFAULT_SAMPLE_COUNT: usize = wealthwise_core::DEFAULT_SAMPLE_COUNT;
pub const MIN_SAMPLE_COUNT: usize = 1_000;
pub const MAX_SAMPLE_COUNT: usize = 100_000;

/// Bounds for the rebalance drift threshold, percentage points.
pub const MIN_DRIFT_THRESHOLD: f64 = 1.0;
pub const MAX_DRIFT_THRESHOLD: f64 = 20.0;

/// Default and bounds for the frontier sweep resolution.
pub const DEFAULT_FRONTIER_POINTS: usize = 100;
pub const MIN_FRONTIER_POINTS: usize = 2;
pub const MAX_FRONTIER_POINTS: usize = 1_000;

/// Validated inputs for one goal simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalSimulationInputs {
    pub current_amount: f64,
    pub target_amount: f64,
    pub monthly_contribution: f64,
    pub target_date: Date,
    pub risk_profile: RiskProfile,
    pub sample_count: usize,
}

/// Validated inputs for one optimization request.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeInputs {
    pub risk_score: f64,
    pub investment_amount: f64,
    pub exclude_assets: Vec<AssetClass>,
}

/// Validated inputs for one rebalance request.
#[derive(Debug, Clone, PartialEq)]
pub struct RebalanceInputs {
    pub current_holdings: FxHashMap<AssetClass, f64>,
    pub target_allocation: FxHashMap<AssetClass, f64>,
    pub threshold: f64,
}

fn required<T>(value: Option<T>, field: &'static str) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::validation(field, "field is required"))
}

fn non_negative(value: f64, field: &'static str) -> ApiResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ApiError::validation(field, "must be a non-negative number"))
    }
}

fn positive(value: f64, field: &'static str) -> ApiResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ApiError::validation(field, "must be a positive number"))
    }
}

/// Validate a goal simulation body and resolve defaults.
pub fn validate_goal_simulation(req: &SimulateGoalRequest) -> ApiResult<GoalSimulationInputs> {
    let current_amount = non_negative(
        required(req.current_amount, "currentAmount")?,
        "currentAmount",
    )?;
    let target_amount = positive(required(req.target_amount, "targetAmount")?, "targetAmount")?;
    let monthly_contribution =
        non_negative(req.monthly_contrib.unwrap_or(0.0), "monthlyContrib")?;

    let target_date = required(req.target_date.as_deref(), "targetDate")?;
    let target_date: Date = target_date.parse().map_err(|_| {
        ApiError::validation("targetDate", "must be an ISO calendar date (YYYY-MM-DD)")
    })?;

    let risk_level = required(req.risk_level.as_deref(), "riskLevel")?;
    let risk_profile: RiskProfile = risk_level.parse().map_err(|()| {
        ApiError::validation(
            "riskLevel",
            "must be one of: conservative, moderate, aggressive",
        )
    })?;

    let sample_count = req.sample_count.unwrap_or(DEFAULT_SAMPLE_COUNT);
    if !(MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT).contains(&sample_count) {
        return Err(ApiError::validation(
            "sampleCount",
            format!("must be between {MIN_SAMPLE_COUNT} and {MAX_SAMPLE_COUNT}"),
        ));
    }

    Ok(GoalSimulationInputs {
        current_amount,
        target_amount,
        monthly_contribution,
        target_date,
        risk_profile,
        sample_count,
    })
}

/// Validate an optimization body. Out-of-range risk scores are clamped by
/// the allocation table, not rejected here.
pub fn validate_optimize(req: &OptimizeRequest) -> ApiResult<OptimizeInputs> {
    let risk_score = required(req.risk_score, "riskScore")?;
    if !risk_score.is_finite() {
        return Err(ApiError::validation("riskScore", "must be a finite number"));
    }
    let investment_amount = positive(
        required(req.investment_amount, "investmentAmount")?,
        "investmentAmount",
    )?;

    Ok(OptimizeInputs {
        risk_score,
        investment_amount,
        exclude_assets: req.exclude_assets.clone(),
    })
}

/// Validate a rebalance body and resolve the threshold default.
pub fn validate_rebalance(req: &RebalanceRequest) -> ApiResult<RebalanceInputs> {
    let current_holdings = required(req.current_holdings.clone(), "currentHoldings")?;
    for value in current_holdings.values() {
        non_negative(*value, "currentHoldings")?;
    }

    let target_allocation = required(req.target_allocation.clone(), "targetAllocation")?;
    for weight in target_allocation.values() {
        non_negative(*weight, "targetAllocation")?;
    }

    let threshold = req
        .threshold
        .unwrap_or(wealthwise_core::rebalance::DEFAULT_DRIFT_THRESHOLD);
    if !(MIN_DRIFT_THRESHOLD..=MAX_DRIFT_THRESHOLD).contains(&threshold) {
        return Err(ApiError::validation(
            "threshold",
            format!("must be between {MIN_DRIFT_THRESHOLD} and {MAX_DRIFT_THRESHOLD}"),
        ));
    }

    Ok(RebalanceInputs {
        current_holdings,
        target_allocation,
        threshold,
    })
}

/// Validate the frontier sweep resolution and resolve its default.
pub fn validate_frontier_points(points: Option<usize>) -> ApiResult<usize> {
    let points = points.unwrap_or(DEFAULT_FRONTIER_POINTS);
    if !(MIN_FRONTIER_POINTS..=MAX_FRONTIER_POINTS).contains(&points) {
        return Err(ApiError::validation(
            "points",
            format!("must be between {MIN_FRONTIER_POINTS} and {MAX_FRONTIER_POINTS}"),
        ));
    }
    Ok(points)
}

use axum::{
    Json,
    extract::{Query, State},
};

use crate::error::ApiResult;
use crate::models::{ApiResponse, FrontierQuery, OptimizeData, OptimizeRequest, RebalanceRequest};
use crate::state::Engine;
use crate::validation;
use wealthwise_core::allocation::{self, FrontierPoint};
use wealthwise_core::rebalance::{self, RebalancePlan};

fn as_percent(fraction: f64) -> f64 {
    (fraction * 100.0 * 100.0).round() / 100.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Portfolio Optimization Handler
// ============================================================================

pub async fn optimize_portfolio(
    State(engine): State<Engine>,
    Json(req): Json<OptimizeRequest>,
) -> ApiResult<Json<ApiResponse<OptimizeData>>> {
    let inputs = validation::validate_optimize(&req)?;

    let plan = allocation::recommend_allocation(
        &engine.allocations,
        &engine.universe,
        inputs.risk_score,
        inputs.investment_amount,
        &inputs.exclude_assets,
    )?;

    Ok(Json(ApiResponse::ok(OptimizeData {
        risk_score: plan.risk_score,
        allocation: plan.allocation,
        expected_return: as_percent(plan.expected_return),
        expected_volatility: as_percent(plan.expected_volatility),
        sharpe_ratio: round2(plan.sharpe_ratio),
        recommended_holdings: plan.holdings,
        methodology: "Modern Portfolio Theory (Mean-Variance Optimization)",
        rebalancing_frequency: "quarterly",
    })))
}

// ============================================================================
// Rebalance Handler
// ============================================================================

pub async fn rebalance_portfolio(
    Json(req): Json<RebalanceRequest>,
) -> ApiResult<Json<ApiResponse<RebalancePlan>>> {
    let inputs = validation::validate_rebalance(&req)?;

    let plan = rebalance::plan_rebalance(
        &inputs.current_holdings,
        &inputs.target_allocation,
        inputs.threshold,
    );

    Ok(Json(ApiResponse::ok(plan)))
}

// ============================================================================
// Efficient Frontier Handler
// ============================================================================

pub async fn efficient_frontier(
    State(engine): State<Engine>,
    Query(query): Query<FrontierQuery>,
) -> ApiResult<Json<ApiResponse<Vec<FrontierPoint>>>> {
    let points = validation::validate_frontier_points(query.points)?;
    let frontier = allocation::efficient_frontier(&engine.allocations, &engine.universe, points);
    Ok(Json(ApiResponse::ok(frontier)))
}

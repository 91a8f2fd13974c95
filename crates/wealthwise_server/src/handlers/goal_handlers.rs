use axum::{
    Json,
    extract::{Path, State},
};
use jiff::{Zoned, civil::Date};

use crate::error::{ApiError, ApiResult};
use crate::models::{ApiResponse, RiskProfileInfo, SimulateGoalData, SimulateGoalRequest};
use crate::state::Engine;
use crate::validation;
use wealthwise_core::projection::{self, GoalProjection};
use wealthwise_core::recommend;

/// Years from today until `target_date`, floored at roughly one month so
/// a goal dated today or in the past still simulates something.
fn years_until(target_date: Date) -> f64 {
    let today = Zoned::now().date();
    let days = (target_date - today).get_days() as f64;
    (days / 365.25).max(0.1)
}

// ============================================================================
// Goal Simulation Handler
// ============================================================================

pub async fn simulate_goal(
    State(engine): State<Engine>,
    Path(goal_id): Path<String>,
    Json(req): Json<SimulateGoalRequest>,
) -> ApiResult<Json<ApiResponse<SimulateGoalData>>> {
    let inputs = validation::validate_goal_simulation(&req)?;

    let assumptions = engine.risk_profiles.assumptions(inputs.risk_profile);
    let years_until_target = years_until(inputs.target_date);

    let request = GoalProjection {
        current_amount: inputs.current_amount,
        target_amount: inputs.target_amount,
        monthly_contribution: inputs.monthly_contribution,
        years_until_target,
        assumptions,
    };

    let sample_count = inputs.sample_count;
    let simulation = tokio::task::spawn_blocking(move || projection::project(&request, sample_count))
        .await
        .map_err(|_| ApiError::Internal)??;

    let recommendations = recommend::recommend(&request, &simulation);

    Ok(Json(ApiResponse::ok(SimulateGoalData {
        goal_id,
        simulation,
        recommendations,
        risk_profile: RiskProfileInfo {
            name: inputs.risk_profile,
            assumptions,
        },
        years_until_target: (years_until_target * 100.0).round() / 100.0,
    })))
}

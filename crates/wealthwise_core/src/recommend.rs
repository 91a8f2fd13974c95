//! Advisory text derived from a projection outcome.

use serde::{Deserialize, Serialize};

use crate::model::SimulationOutcome;
use crate::projection::GoalProjection;

/// How a goal is tracking against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Success probability below 50%.
    AtRisk,
    /// Success probability in [50, 80).
    NeedsAdjustment,
    /// Success probability of 80% or better.
    OnTrack,
}

/// Advisory output attached to a simulation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecommendation {
    pub status: GoalStatus,
    pub message: String,
    /// Suggested contribution increase per month, whole units. Present
    /// when the median projection falls short of the target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_additional_monthly: Option<f64>,
}

/// Derive the three-tier recommendation from a projection outcome.
///
/// The shortfall arithmetic spreads `target - median` evenly over the
/// remaining months. This is presentation guidance, not a contract.
#[must_use]
pub fn recommend(request: &GoalProjection, outcome: &SimulationOutcome) -> GoalRecommendation {
    let shortfall = request.target_amount - outcome.projected_amounts.median;
    let months = request.years_until_target * 12.0;
    let additional_monthly = if shortfall > 0.0 && months > 0.0 {
        Some((shortfall / months).round())
    } else {
        None
    };

    match outcome.success_probability_percent {
        p if p < 50 => GoalRecommendation {
            status: GoalStatus::AtRisk,
            message: match additional_monthly {
                Some(extra) => format!(
                    "This goal is at risk: only {p}% of simulated paths reach the target. \
                     Increasing contributions by about {extra:.0} per month would close the \
                     median shortfall."
                ),
                None => format!(
                    "This goal is at risk: only {p}% of simulated paths reach the target."
                ),
            },
            suggested_additional_monthly: additional_monthly,
        },
        p if p < 80 => GoalRecommendation {
            status: GoalStatus::NeedsAdjustment,
            message: format!(
                "{p}% of simulated paths reach the target. A modest contribution increase \
                 would improve the odds."
            ),
            suggested_additional_monthly: additional_monthly,
        },
        p => GoalRecommendation {
            status: GoalStatus::OnTrack,
            message: format!("On track: {p}% of simulated paths reach the target."),
            suggested_additional_monthly: None,
        },
    }
}

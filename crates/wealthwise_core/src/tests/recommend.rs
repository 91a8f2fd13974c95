//! Tests for advisory tier selection and shortfall arithmetic

use crate::model::{ProjectedAmounts, ReturnAssumptions, SimulationOutcome};
use crate::projection::GoalProjection;
use crate::recommend::{GoalStatus, recommend};

fn outcome(probability: u8, median: f64) -> SimulationOutcome {
    SimulationOutcome {
        success_probability_percent: probability,
        projected_amounts: ProjectedAmounts {
            p10: median * 0.6,
            p25: median * 0.8,
            median,
            mean: median * 1.1,
            p75: median * 1.3,
            p90: median * 1.6,
        },
        sample_count: 10_000,
    }
}

fn request(target: f64, years: f64) -> GoalProjection {
    GoalProjection {
        current_amount: 50_000.0,
        target_amount: target,
        monthly_contribution: 500.0,
        years_until_target: years,
        assumptions: ReturnAssumptions::new(0.07, 0.12),
    }
}

#[test]
fn test_at_risk_suggests_shortfall_contribution() {
    let req = request(200_000.0, 10.0);
    let rec = recommend(&req, &outcome(35, 177_909.0));

    assert_eq!(rec.status, GoalStatus::AtRisk);
    // (200,000 - 177,909) / 120 months, rounded to a whole unit.
    assert_eq!(rec.suggested_additional_monthly, Some(184.0));
    assert!(rec.message.contains("35%"));
}

#[test]
fn test_middle_tier_suggests_modest_increase() {
    let req = request(200_000.0, 10.0);
    let rec = recommend(&req, &outcome(65, 190_000.0));

    assert_eq!(rec.status, GoalStatus::NeedsAdjustment);
    assert_eq!(rec.suggested_additional_monthly, Some(83.0));
}

#[test]
fn test_on_track_has_no_suggestion() {
    let req = request(200_000.0, 10.0);
    let rec = recommend(&req, &outcome(84, 250_000.0));

    assert_eq!(rec.status, GoalStatus::OnTrack);
    assert_eq!(rec.suggested_additional_monthly, None);
}

#[test]
fn test_tier_boundaries() {
    let req = request(200_000.0, 10.0);

    assert_eq!(
        recommend(&req, &outcome(49, 150_000.0)).status,
        GoalStatus::AtRisk
    );
    assert_eq!(
        recommend(&req, &outcome(50, 150_000.0)).status,
        GoalStatus::NeedsAdjustment
    );
    assert_eq!(
        recommend(&req, &outcome(79, 150_000.0)).status,
        GoalStatus::NeedsAdjustment
    );
    assert_eq!(
        recommend(&req, &outcome(80, 150_000.0)).status,
        GoalStatus::OnTrack
    );
}

/// The wire format uses camelCase keys, snake_case status values, and
/// omits the suggestion field entirely when there is none.
#[test]
fn test_recommendation_wire_format() {
    let req = request(200_000.0, 10.0);

    let value = serde_json::to_value(recommend(&req, &outcome(35, 177_909.0))).unwrap();
    assert_eq!(value["status"], "at_risk");
    assert_eq!(value["suggestedAdditionalMonthly"], 184.0);

    let value = serde_json::to_value(recommend(&req, &outcome(84, 250_000.0))).unwrap();
    assert_eq!(value["status"], "on_track");
    assert!(value.get("suggestedAdditionalMonthly").is_none());
}

/// A median above the target yields no shortfall suggestion even in the
/// middle tier.
#[test]
fn test_no_suggestion_when_median_exceeds_target() {
    let req = request(200_000.0, 10.0);
    let rec = recommend(&req, &outcome(65, 210_000.0));

    assert_eq!(rec.status, GoalStatus::NeedsAdjustment);
    assert_eq!(rec.suggested_additional_monthly, None);
}

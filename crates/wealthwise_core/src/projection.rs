//! Monte Carlo goal projection.
//!
//! Estimates the probability of reaching a savings target by simulating
//! many independent monthly-return trajectories. Trials are independent
//! and run in parallel batches; months within a trial are strictly
//! sequential since each month's balance depends on the prior month's.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, Normal};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::{ProjectionError, Result};
use crate::model::{ReturnAssumptions, SimulationOutcome};

/// Default number of independent trials per projection.
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;

/// Trials per batch. Each batch owns one RNG seeded as a pure function of
/// (master seed, batch index), so seeded runs are reproducible regardless
/// of how batches are scheduled across threads.
const TRIAL_BATCH_SIZE: usize = 256;

/// Inputs for one goal projection. Constructed per invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProjection {
    pub current_amount: f64,
    pub target_amount: f64,
    pub monthly_contribution: f64,
    pub years_until_target: f64,
    pub assumptions: ReturnAssumptions,
}

impl GoalProjection {
    /// Simulation horizon in whole months.
    #[must_use]
    pub fn months(&self) -> usize {
        (self.years_until_target * 12.0).round() as usize
    }

    fn validate(&self) -> Result<()> {
        let non_negative = |value: f64, field: &'static str| -> Result<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ProjectionError::InvalidArgument {
                    field,
                    reason: "must be a non-negative finite number",
                })
            }
        };
        let positive = |value: f64, field: &'static str| -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ProjectionError::InvalidArgument {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        };

        non_negative(self.current_amount, "current_amount")?;
        positive(self.target_amount, "target_amount")?;
        non_negative(self.monthly_contribution, "monthly_contribution")?;
        positive(self.years_until_target, "years_until_target")?;
        if !self.assumptions.expected_annual_return.is_finite() {
            return Err(ProjectionError::InvalidArgument {
                field: "expected_annual_return",
                reason: "must be a finite number",
            });
        }
        non_negative(self.assumptions.annual_volatility, "annual_volatility")?;
        Ok(())
    }
}

/// Run a projection with a fresh random seed.
///
/// Repeated calls yield statistically similar but not identical results.
/// Use [`project_seeded`] when reproducibility is needed.
pub fn project(request: &GoalProjection, sample_count: usize) -> Result<SimulationOutcome> {
    project_seeded(request, sample_count, rand::rng().next_u64())
}

/// Run a projection with a fixed seed. Deterministic for a given seed
/// and sample count, independent of thread scheduling.
pub fn project_seeded(
    request: &GoalProjection,
    sample_count: usize,
    seed: u64,
) -> Result<SimulationOutcome> {
    request.validate()?;
    if sample_count == 0 {
        return Err(ProjectionError::InvalidArgument {
            field: "sample_count",
            reason: "must be positive",
        });
    }

    let months = request.months();
    let monthly_mean = request.assumptions.expected_annual_return / 12.0;
    let monthly_std = request.assumptions.annual_volatility / 12.0_f64.sqrt();
    let monthly_return = Normal::new(monthly_mean, monthly_std).map_err(|_| {
        ProjectionError::InvalidDistribution {
            mean: monthly_mean,
            std_dev: monthly_std,
        }
    })?;

    let num_batches = sample_count.div_ceil(TRIAL_BATCH_SIZE);
    let run_batch = |batch: usize| -> Vec<f64> {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(batch as u64));
        let batch_size = if batch == num_batches - 1 {
            sample_count - batch * TRIAL_BATCH_SIZE
        } else {
            TRIAL_BATCH_SIZE
        };

        (0..batch_size)
            .map(|_| run_trial(request, months, &monthly_return, &mut rng))
            .collect()
    };

    #[cfg(feature = "parallel")]
    let mut finals: Vec<f64> = (0..num_batches).into_par_iter().flat_map(run_batch).collect();
    #[cfg(not(feature = "parallel"))]
    let mut finals: Vec<f64> = (0..num_batches).flat_map(run_batch).collect();

    let successes = finals
        .iter()
        .filter(|balance| **balance >= request.target_amount)
        .count();
    finals.sort_unstable_by(f64::total_cmp);

    Ok(SimulationOutcome::from_sorted_finals(&finals, successes))
}

/// Simulate one balance trajectory month by month.
fn run_trial<R: Rng + ?Sized>(
    request: &GoalProjection,
    months: usize,
    monthly_return: &Normal<f64>,
    rng: &mut R,
) -> f64 {
    let mut balance = request.current_amount;
    for _ in 0..months {
        balance = balance * (1.0 + monthly_return.sample(rng)) + request.monthly_contribution;
    }
    balance
}

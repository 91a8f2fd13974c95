use serde::{Deserialize, Serialize};

/// Projected final balances at the standard report percentiles.
///
/// Monotonic by construction: p10 <= p25 <= median <= p75 <= p90.
/// The mean is the arithmetic average and can fall anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedAmounts {
    pub p10: f64,
    pub p25: f64,
    pub median: f64,
    pub mean: f64,
    pub p75: f64,
    pub p90: f64,
}

/// Summary of one Monte Carlo goal projection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutcome {
    /// Fraction of trials whose final balance reached the target,
    /// rounded to the nearest integer percent.
    pub success_probability_percent: u8,
    /// Final-balance percentiles and mean, rounded to whole units.
    pub projected_amounts: ProjectedAmounts,
    /// Number of independent trials aggregated.
    pub sample_count: usize,
}

impl SimulationOutcome {
    /// Build an outcome from sorted final balances and the success count.
    ///
    /// `finals` must be sorted ascending and non-empty. Percentile
    /// selection uses floor indexing; monetary figures are rounded to the
    /// nearest whole unit.
    #[must_use]
    pub(crate) fn from_sorted_finals(finals: &[f64], successes: usize) -> Self {
        let n = finals.len();
        let mean = finals.iter().sum::<f64>() / n as f64;
        let pct = |fraction: f64| crate::percentiles::percentile(finals, fraction).round();

        use crate::percentiles::standard;
        Self {
            success_probability_percent: (100.0 * successes as f64 / n as f64).round() as u8,
            projected_amounts: ProjectedAmounts {
                p10: pct(standard::P10),
                p25: pct(standard::P25),
                median: pct(standard::P50),
                mean: mean.round(),
                p75: pct(standard::P75),
                p90: pct(standard::P90),
            },
            sample_count: n,
        }
    }
}

//! Risk-score driven allocation rollup.
//!
//! Maps a 1-10 risk score to a fixed target allocation and computes
//! portfolio-level expected return, volatility and Sharpe ratio from the
//! per-class statistics. Volatility treats asset classes as uncorrelated
//! (sums variances, no covariance matrix).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::model::{AssetClass, AssetUniverse, Instrument};

/// Fixed risk-free rate used in the Sharpe ratio.
pub const RISK_FREE_RATE: f64 = 0.03;

/// Zero-weight classes are left out of the recommended holdings.
const MIN_HOLDING_WEIGHT: u32 = 1;

/// Immutable risk score -> asset-class weight table.
///
/// Weights for every score sum to exactly 100. Built once at process
/// start; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AllocationTable {
    // Index 0 holds score 1.
    weights: Vec<FxHashMap<AssetClass, u32>>,
}

impl AllocationTable {
    /// Build the table by linear interpolation between the conservative
    /// and aggressive anchor portfolios, rounding each class weight and
    /// folding the rounding remainder into Bonds so every row sums to
    /// exactly 100.
    #[must_use]
    pub fn model_portfolios() -> Self {
        let conservative: &[(AssetClass, f64)] = &[
            (AssetClass::UsStocks, 10.0),
            (AssetClass::IntlStocks, 5.0),
            (AssetClass::Bonds, 75.0),
            (AssetClass::RealEstate, 5.0),
            (AssetClass::Cash, 5.0),
        ];
        let aggressive: &[(AssetClass, f64)] = &[
            (AssetClass::UsStocks, 55.0),
            (AssetClass::IntlStocks, 25.0),
            (AssetClass::Bonds, 5.0),
            (AssetClass::RealEstate, 15.0),
        ];

        let anchor = |anchors: &[(AssetClass, f64)], class: AssetClass| -> f64 {
            anchors
                .iter()
                .find(|(c, _)| *c == class)
                .map(|(_, w)| *w)
                .unwrap_or(0.0)
        };

        let mut weights = Vec::with_capacity(10);
        for score in 1..=10u32 {
            let factor = f64::from(score - 1) / 9.0;
            let mut row: FxHashMap<AssetClass, u32> = FxHashMap::default();
            let mut total: i64 = 0;

            for class in AssetClass::ALL {
                let blended = anchor(conservative, class) * (1.0 - factor)
                    + anchor(aggressive, class) * factor;
                let weight = blended.round() as i64;
                total += weight;
                row.insert(class, weight as u32);
            }

            // Rounding can leave the row a point or two off 100.
            let remainder = 100 - total;
            let bonds = row.entry(AssetClass::Bonds).or_insert(0);
            *bonds = (i64::from(*bonds) + remainder) as u32;

            weights.push(row);
        }

        Self { weights }
    }

    /// Round `risk_score` to the nearest integer and clamp it to [1, 10].
    #[must_use]
    pub fn clamp_score(risk_score: f64) -> u8 {
        let rounded = risk_score.round();
        if rounded.is_nan() {
            return 1;
        }
        rounded.clamp(1.0, 10.0) as u8
    }

    /// Target weights for a (clamped) risk score.
    #[must_use]
    pub fn weights(&self, risk_score: f64) -> (u8, &FxHashMap<AssetClass, u32>) {
        let score = Self::clamp_score(risk_score);
        (score, &self.weights[usize::from(score) - 1])
    }
}

impl Default for AllocationTable {
    fn default() -> Self {
        Self::model_portfolios()
    }
}

/// One position in the recommended portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedHolding {
    pub asset_class: AssetClass,
    /// Percentage weight in the portfolio.
    pub allocation: u32,
    /// Currency amount to invest, rounded to cents.
    pub amount: f64,
    pub instruments: Vec<Instrument>,
}

/// Full allocation recommendation for one risk score.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationPlan {
    pub risk_score: u8,
    pub allocation: FxHashMap<AssetClass, u32>,
    /// Annualized, as fractions (0.07 = 7%).
    pub expected_return: f64,
    pub expected_volatility: f64,
    pub sharpe_ratio: f64,
    pub holdings: Vec<RecommendedHolding>,
}

/// One sample on the risk-score sweep of the efficient frontier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontierPoint {
    pub expected_return: f64,
    pub expected_volatility: f64,
    pub allocation: FxHashMap<AssetClass, u32>,
}

/// Map a risk score to a concrete allocation of `investment_amount`.
///
/// `risk_score` is rounded and clamped to [1, 10]. Classes named in
/// `exclude` have their weight redistributed proportionally across the
/// remaining classes.
pub fn recommend_allocation(
    table: &AllocationTable,
    universe: &AssetUniverse,
    risk_score: f64,
    investment_amount: f64,
    exclude: &[AssetClass],
) -> Result<AllocationPlan> {
    if !(investment_amount.is_finite() && investment_amount > 0.0) {
        return Err(ProjectionError::InvalidArgument {
            field: "investment_amount",
            reason: "must be a positive finite number",
        });
    }

    let (score, target) = table.weights(risk_score);
    let mut weights = target.clone();

    for class in exclude {
        redistribute_excluded(&mut weights, *class)?;
    }

    let (expected_return, expected_volatility) = rollup_metrics(&weights, universe);
    let sharpe_ratio = if expected_volatility > 0.0 {
        (expected_return - RISK_FREE_RATE) / expected_volatility
    } else {
        0.0
    };

    let mut holdings = Vec::new();
    for class in AssetClass::ALL {
        let weight = weights.get(&class).copied().unwrap_or(0);
        if weight >= MIN_HOLDING_WEIGHT {
            let amount = f64::from(weight) / 100.0 * investment_amount;
            holdings.push(RecommendedHolding {
                asset_class: class,
                allocation: weight,
                amount: (amount * 100.0).round() / 100.0,
                instruments: universe.instruments(class).to_vec(),
            });
        }
    }

    Ok(AllocationPlan {
        risk_score: score,
        allocation: weights,
        expected_return,
        expected_volatility,
        sharpe_ratio,
        holdings,
    })
}

/// Sweep risk scores 1..10 and report the rollup metrics at each point.
#[must_use]
pub fn efficient_frontier(
    table: &AllocationTable,
    universe: &AssetUniverse,
    num_points: usize,
) -> Vec<FrontierPoint> {
    let num_points = num_points.max(2);
    (0..num_points)
        .map(|i| {
            let risk_score = 1.0 + (i as f64 / (num_points - 1) as f64) * 9.0;
            let (_, weights) = table.weights(risk_score);
            let (expected_return, expected_volatility) = rollup_metrics(weights, universe);
            FrontierPoint {
                expected_return,
                expected_volatility,
                allocation: weights.clone(),
            }
        })
        .collect()
}

/// Weighted expected return and uncorrelated volatility for a weight map.
fn rollup_metrics(weights: &FxHashMap<AssetClass, u32>, universe: &AssetUniverse) -> (f64, f64) {
    let mut expected_return = 0.0;
    let mut variance = 0.0;
    for class in AssetClass::ALL {
        let weight = f64::from(weights.get(&class).copied().unwrap_or(0)) / 100.0;
        let stats = universe.statistics(class);
        expected_return += weight * stats.expected_return;
        variance += (weight * stats.volatility).powi(2);
    }
    (expected_return, variance.sqrt())
}

/// Zero out `excluded` and spread its weight proportionally over the
/// remaining allocated classes, keeping the total at exactly 100.
fn redistribute_excluded(
    weights: &mut FxHashMap<AssetClass, u32>,
    excluded: AssetClass,
) -> Result<()> {
    let freed = weights.insert(excluded, 0).unwrap_or(0);
    if freed == 0 {
        return Ok(());
    }

    let remaining_total: u32 = AssetClass::ALL
        .iter()
        .filter(|c| **c != excluded)
        .map(|c| weights.get(c).copied().unwrap_or(0))
        .sum();
    if remaining_total == 0 {
        return Err(ProjectionError::InvalidArgument {
            field: "exclude_assets",
            reason: "cannot exclude every allocated asset class",
        });
    }

    for class in AssetClass::ALL {
        if class == excluded {
            continue;
        }
        if let Some(weight) = weights.get_mut(&class) {
            let share =
                (f64::from(freed) * f64::from(*weight) / f64::from(remaining_total)).round();
            *weight += share as u32;
        }
    }

    // Proportional rounding can drift off 100; settle the difference on
    // the largest remaining class.
    let total: i64 = AssetClass::ALL
        .iter()
        .map(|c| i64::from(weights.get(c).copied().unwrap_or(0)))
        .sum();
    let drift = 100 - total;
    if drift != 0 {
        if let Some(largest) = AssetClass::ALL
            .iter()
            .filter(|c| **c != excluded)
            .max_by_key(|c| weights.get(c).copied().unwrap_or(0))
        {
            if let Some(weight) = weights.get_mut(largest) {
                *weight = (i64::from(*weight) + drift) as u32;
            }
        }
    }

    Ok(())
}

//! Rebalancing drift analysis and trade planning.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::AssetClass;

/// Default drift threshold in percentage points.
pub const DEFAULT_DRIFT_THRESHOLD: f64 = 5.0;

/// Differences smaller than this are not worth trading.
const MIN_TRADE_AMOUNT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// A single trade needed to move a class back to its target weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeAction {
    pub asset_class: AssetClass,
    pub action: TradeSide,
    /// Absolute currency amount to trade, rounded to cents.
    pub amount: f64,
    /// Current percentage weight, one decimal.
    pub current_allocation: f64,
    /// Target percentage weight.
    pub target_allocation: f64,
}

/// Drift report plus the trades needed to restore the target allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalancePlan {
    pub needs_rebalancing: bool,
    /// Largest absolute drift across classes, percentage points.
    pub max_drift: f64,
    /// Signed drift per class: current percent minus target percent.
    pub drifts: FxHashMap<AssetClass, f64>,
    pub trades: Vec<TradeAction>,
    pub total_portfolio_value: f64,
}

/// Compare current holdings against a target allocation.
///
/// `current_holdings` maps asset class to market value; `target_allocation`
/// maps asset class to percentage weight. Rebalancing is flagged when any
/// class drifts more than `threshold` percentage points from its target;
/// trades below 100 currency units are suppressed. An empty portfolio
/// needs no rebalancing.
#[must_use]
pub fn plan_rebalance(
    current_holdings: &FxHashMap<AssetClass, f64>,
    target_allocation: &FxHashMap<AssetClass, f64>,
    threshold: f64,
) -> RebalancePlan {
    let total_value: f64 = current_holdings.values().sum();
    if total_value <= 0.0 {
        return RebalancePlan {
            needs_rebalancing: false,
            max_drift: 0.0,
            drifts: FxHashMap::default(),
            trades: Vec::new(),
            total_portfolio_value: 0.0,
        };
    }

    let current_percent = |class: AssetClass| -> f64 {
        current_holdings.get(&class).copied().unwrap_or(0.0) / total_value * 100.0
    };

    let mut max_drift = 0.0_f64;
    let mut drifts = FxHashMap::default();
    for (class, target) in target_allocation {
        let drift = current_percent(*class) - target;
        drifts.insert(*class, round2(drift));
        max_drift = max_drift.max(drift.abs());
    }

    let needs_rebalancing = max_drift > threshold;

    let mut trades = Vec::new();
    if needs_rebalancing {
        for class in AssetClass::ALL {
            let Some(target) = target_allocation.get(&class) else {
                continue;
            };
            let target_value = target / 100.0 * total_value;
            let current_value = current_holdings.get(&class).copied().unwrap_or(0.0);
            let diff = target_value - current_value;

            if diff.abs() > MIN_TRADE_AMOUNT {
                trades.push(TradeAction {
                    asset_class: class,
                    action: if diff > 0.0 {
                        TradeSide::Buy
                    } else {
                        TradeSide::Sell
                    },
                    amount: round2(diff.abs()),
                    current_allocation: round1(current_percent(class)),
                    target_allocation: *target,
                });
            }
        }
    }

    RebalancePlan {
        needs_rebalancing,
        max_drift: round2(max_drift),
        drifts,
        trades,
        total_portfolio_value: round2(total_value),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Asset classes covered by the model portfolios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    UsStocks,
    IntlStocks,
    Bonds,
    RealEstate,
    Commodities,
    Cash,
}

impl AssetClass {
    /// Canonical ordering for output and deterministic iteration.
    pub const ALL: [AssetClass; 6] = [
        AssetClass::UsStocks,
        AssetClass::IntlStocks,
        AssetClass::Bonds,
        AssetClass::RealEstate,
        AssetClass::Commodities,
        AssetClass::Cash,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::UsStocks => "US_STOCKS",
            AssetClass::IntlStocks => "INTL_STOCKS",
            AssetClass::Bonds => "BONDS",
            AssetClass::RealEstate => "REAL_ESTATE",
            AssetClass::Commodities => "COMMODITIES",
            AssetClass::Cash => "CASH",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Annualized statistics for one asset class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStatistics {
    pub expected_return: f64,
    pub volatility: f64,
}

/// A concrete instrument suggested for an asset class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instrument {
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Statistics plus instrument suggestions for one asset class.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetProfile {
    pub statistics: AssetStatistics,
    pub instruments: Vec<Instrument>,
}

/// Immutable per-class statistics and instrument recommendations.
///
/// Constructed once at process start; `AssetClass::ALL` fixes the
/// iteration order wherever deterministic output is needed.
#[derive(Debug, Clone)]
pub struct AssetUniverse {
    profiles: FxHashMap<AssetClass, AssetProfile>,
}

impl AssetUniverse {
    // Long-run annualized estimates.
    #[must_use]
    pub fn baseline() -> Self {
        let mut profiles = FxHashMap::default();
        let mut add = |class: AssetClass, ret: f64, vol: f64, symbol: &'static str, name: &'static str| {
            profiles.insert(
                class,
                AssetProfile {
                    statistics: AssetStatistics {
                        expected_return: ret,
                        volatility: vol,
                    },
                    instruments: vec![Instrument { symbol, name }],
                },
            );
        };

        add(
            AssetClass::UsStocks,
            0.10,
            0.15,
            "VTI",
            "Vanguard Total Stock Market ETF",
        );
        add(
            AssetClass::IntlStocks,
            0.08,
            0.18,
            "VXUS",
            "Vanguard Total International Stock ETF",
        );
        add(
            AssetClass::Bonds,
            0.04,
            0.05,
            "BND",
            "Vanguard Total Bond Market ETF",
        );
        add(
            AssetClass::RealEstate,
            0.07,
            0.14,
            "VNQ",
            "Vanguard Real Estate ETF",
        );
        add(
            AssetClass::Commodities,
            0.05,
            0.20,
            "GSG",
            "iShares S&P GSCI Commodity-Indexed Trust",
        );
        add(
            AssetClass::Cash,
            0.03,
            0.01,
            "SGOV",
            "iShares 0-3 Month Treasury Bond ETF",
        );

        Self { profiles }
    }

    #[must_use]
    pub fn statistics(&self, class: AssetClass) -> AssetStatistics {
        self.profiles[&class].statistics
    }

    #[must_use]
    pub fn instruments(&self, class: AssetClass) -> &[Instrument] {
        &self.profiles[&class].instruments
    }
}

impl Default for AssetUniverse {
    fn default() -> Self {
        Self::baseline()
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Risk tolerance category for goal projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Moderate,
        RiskProfile::Aggressive,
    ];

    /// Lowercase label matching the wire format.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "conservative",
            RiskProfile::Moderate => "moderate",
            RiskProfile::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskProfile {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conservative" => Ok(RiskProfile::Conservative),
            "moderate" => Ok(RiskProfile::Moderate),
            "aggressive" => Ok(RiskProfile::Aggressive),
            _ => Err(()),
        }
    }
}

/// Annualized return model parameters for one risk category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnAssumptions {
    pub expected_annual_return: f64,
    pub annual_volatility: f64,
}

impl ReturnAssumptions {
    #[must_use]
    pub fn new(expected_annual_return: f64, annual_volatility: f64) -> Self {
        Self {
            expected_annual_return,
            annual_volatility,
        }
    }
}

/// Immutable mapping from risk category to return assumptions.
///
/// Built once at process start and passed explicitly to the calculators;
/// never mutated at runtime.
#[derive(Debug, Clone)]
pub struct RiskProfileTable {
    conservative: ReturnAssumptions,
    moderate: ReturnAssumptions,
    aggressive: ReturnAssumptions,
}

impl RiskProfileTable {
    /// Baseline parameters used by the advisory service.
    #[must_use]
    pub fn baseline() -> Self {
        Self {
            conservative: ReturnAssumptions::new(0.05, 0.08),
            moderate: ReturnAssumptions::new(0.07, 0.12),
            aggressive: ReturnAssumptions::new(0.09, 0.18),
        }
    }

    #[must_use]
    pub fn assumptions(&self, profile: RiskProfile) -> ReturnAssumptions {
        match profile {
            RiskProfile::Conservative => self.conservative,
            RiskProfile::Moderate => self.moderate,
            RiskProfile::Aggressive => self.aggressive,
        }
    }
}

impl Default for RiskProfileTable {
    fn default() -> Self {
        Self::baseline()
    }
}

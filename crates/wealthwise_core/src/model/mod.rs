mod assets;
mod results;
mod risk;

pub use assets::{AssetClass, AssetProfile, AssetStatistics, AssetUniverse, Instrument};
pub use results::{ProjectedAmounts, SimulationOutcome};
pub use risk::{ReturnAssumptions, RiskProfile, RiskProfileTable};

//! Integration tests for the advisory calculators
//!
//! Tests are organized by topic:
//! - `projection` - Monte Carlo goal projection and its input validation
//! - `allocation` - Risk-score allocation rollup and frontier sweep
//! - `rebalance` - Drift analysis and trade planning
//! - `recommend` - Advisory tier selection and shortfall arithmetic
//!
//! The projection samples randomness, so statistical assertions use
//! tolerance bands around seeded runs rather than exact values.

mod projection;
mod recommend;

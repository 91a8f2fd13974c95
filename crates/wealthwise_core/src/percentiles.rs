//! Percentile extraction for Monte Carlo final balances.

/// Report percentiles used by the goal projection.
pub mod standard {
    pub const P10: f64 = 0.10;
    pub const P25: f64 = 0.25;
    pub const P50: f64 = 0.50;
    pub const P75: f64 = 0.75;
    pub const P90: f64 = 0.90;
}

/// Read the value at a fractional position off an ascending-sorted slice.
///
/// Uses floor-index selection (`index = floor(fraction * len)`), clamped
/// to the valid range. No interpolation between adjacent samples.
///
/// # Panics
/// Panics if `sorted` is empty.
#[must_use]
#[inline]
pub fn percentile(sorted: &[f64], fraction: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let index = ((fraction * sorted.len() as f64).floor() as usize).min(sorted.len() - 1);
    sorted[index]
}

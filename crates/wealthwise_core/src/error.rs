use std::fmt;

/// Errors raised by the projection and allocation calculators.
///
/// Every failure aborts the whole computation; there is no partial-result
/// or degraded-mode behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// A numeric input was missing, negative where disallowed, non-finite,
    /// or otherwise out of range.
    InvalidArgument {
        field: &'static str,
        reason: &'static str,
    },
    /// The requested return distribution could not be constructed.
    InvalidDistribution { mean: f64, std_dev: f64 },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::InvalidArgument { field, reason } => {
                write!(f, "invalid argument `{field}`: {reason}")
            }
            ProjectionError::InvalidDistribution { mean, std_dev } => {
                write!(
                    f,
                    "invalid return distribution (mean={mean}, std_dev={std_dev})"
                )
            }
        }
    }
}

impl std::error::Error for ProjectionError {}

pub type Result<T> = std::result::Result<T, ProjectionError>;

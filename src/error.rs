use core::fmt;

/// Errors reported by the spline engine.
/// Numerical degeneracies are not errors: they propagate as NaN/Inf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineError {
    /// A TCB curve needs at least `required` control points.
    InsufficientControlPoints { required: usize, found: usize },
    /// The parameter step must be finite and strictly positive.
    InvalidStep,
}

impl fmt::Display for SplineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplineError::InsufficientControlPoints { required, found } => write!(
                f,
                "insufficient control points: need at least {}, got {}",
                required, found
            ),
            SplineError::InvalidStep => write!(f, "parameter step must be finite and positive"),
        }
    }
}

impl core::error::Error for SplineError {}

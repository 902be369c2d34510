//! Crate error type.
//!
//! Every failure is fatal to the `fit` call that raised it: there are no
//! partial results, no retries, and no fallback solve strategies (in
//! particular, no pseudo-inverse when the normal equations are singular).

/// Reasons a fit (or sample generation) can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    /// X or Y contains a NaN or infinite entry.
    ///
    /// `name` identifies the offending input (`"X"` or `"Y"`).
    NonFinite { name: &'static str },

    /// The number of rows of X does not match the length of Y, or the
    /// dataset is empty.
    ShapeMismatch { x_rows: usize, y_rows: usize },

    /// Fewer observations than estimated coefficients (N ≤ K), so residual
    /// degrees of freedom would be non-positive.
    InsufficientObservations { n: usize, k: usize },

    /// XᵗX is not invertible (collinear or rank-deficient design matrix).
    SingularNormalEquations { dim: usize },

    /// A synthetic-sample specification is unusable.
    InvalidSampleSpec { reason: &'static str },
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::NonFinite { name } => {
                write!(f, "{name} contains non-finite entries")
            }
            FitError::ShapeMismatch { x_rows, y_rows } => {
                write!(
                    f,
                    "X has {x_rows} rows but Y has {y_rows}; row counts must match and be non-zero"
                )
            }
            FitError::InsufficientObservations { n, k } => {
                write!(
                    f,
                    "{n} observations cannot support {k} coefficients; need N > K"
                )
            }
            FitError::SingularNormalEquations { dim } => {
                write!(
                    f,
                    "normal equations are singular ({dim}x{dim} XᵗX is not invertible)"
                )
            }
            FitError::InvalidSampleSpec { reason } => {
                write!(f, "invalid sample specification: {reason}")
            }
        }
    }
}

impl std::error::Error for FitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_input() {
        let err = FitError::NonFinite { name: "Y" };
        assert!(err.to_string().contains('Y'));

        let err = FitError::ShapeMismatch { x_rows: 10, y_rows: 7 };
        let msg = err.to_string();
        assert!(msg.contains("10") && msg.contains('7'));
    }
}

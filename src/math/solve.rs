//! Normal-equations solver.
//!
//! We solve the closed-form OLS system
//!
//! ```text
//! beta = (XᵗX)⁻¹ · XᵗY
//! ```
//!
//! by explicitly inverting XᵗX. The inverse is part of the contract, not an
//! implementation detail: the caller needs `(XᵗX)⁻¹` again to form the
//! variance-covariance matrix of `beta`, so we return it alongside the
//! solution rather than discarding it.
//!
//! Direct inversion is the only strategy. A singular or numerically
//! degenerate XᵗX fails the solve; there is no pseudo-inverse fallback.

use nalgebra::{DMatrix, DVector};

use crate::error::FitError;

/// Solution of the normal equations, with the retained XᵗX inverse.
#[derive(Debug, Clone)]
pub struct NormalSolution {
    pub beta: DVector<f64>,
    pub xtx_inv: DMatrix<f64>,
}

/// Solve `XᵗX · beta = XᵗY` by explicit inversion.
///
/// Returns `SingularNormalEquations` when XᵗX cannot be inverted (collinear
/// columns, rank-deficient design) or when inversion produces non-finite
/// entries.
pub fn solve_normal_equations(
    x: &DMatrix<f64>,
    y: &DVector<f64>,
) -> Result<NormalSolution, FitError> {
    let xtx = x.transpose() * x;
    let dim = xtx.nrows();

    let xtx_inv = xtx
        .try_inverse()
        .ok_or(FitError::SingularNormalEquations { dim })?;
    if xtx_inv.iter().any(|v| !v.is_finite()) {
        return Err(FitError::SingularNormalEquations { dim });
    }

    let xty = x.transpose() * y;
    let beta = &xtx_inv * xty;

    Ok(NormalSolution { beta, xtx_inv })
}

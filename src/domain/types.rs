//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory right after fitting
//! - exported to JSON for later comparison across runs

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// Fit quality diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    /// Sum of squared residuals.
    pub sse: f64,
    /// Root mean squared residual, `sqrt(sse / n)`.
    pub rmse: f64,
    /// Coefficient of determination.
    ///
    /// Centered total sum of squares when the model carries an intercept,
    /// uncentered otherwise (the usual regression-through-origin convention).
    pub r_squared: f64,
    /// Number of observations the fit was computed on.
    pub n: usize,
}

/// Output bundle of a single OLS fit.
///
/// All fields are derived in one pass over one dataset; nothing here is
/// shared with or reused by later fits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OlsFit {
    /// Estimated coefficients (k+1 entries when an intercept was requested,
    /// with the intercept first; k entries otherwise).
    pub beta: DVector<f64>,

    /// Variance-covariance matrix of `beta`: `sigma2 * (XᵗX)⁻¹`.
    pub vcv: DMatrix<f64>,

    /// Per-observation residuals, `Y - y_hat`.
    pub residuals: DVector<f64>,

    /// Fitted values, `X·beta` (on the augmented design matrix when an
    /// intercept was requested).
    pub y_hat: DVector<f64>,

    /// Residual variance estimate, `residualsᵗ·residuals / (N - K)`.
    pub sigma2: f64,

    /// Residual degrees of freedom, `N - K`.
    pub dof: usize,

    /// Whether the leading coefficient is an intercept.
    pub intercept: bool,

    pub quality: FitQuality,
}

impl OlsFit {
    /// Number of estimated coefficients (K).
    pub fn n_coefficients(&self) -> usize {
        self.beta.len()
    }

    /// Number of observations (N).
    pub fn n_observations(&self) -> usize {
        self.y_hat.len()
    }

    /// Coefficient standard errors: square roots of the VCV diagonal.
    pub fn std_errors(&self) -> DVector<f64> {
        DVector::from_fn(self.beta.len(), |i, _| self.vcv[(i, i)].sqrt())
    }
}

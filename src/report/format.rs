//! Human-readable summaries of a fit.

use crate::domain::OlsFit;

/// Format the full fit summary (coefficient table + residual diagnostics).
pub fn format_fit_summary(fit: &OlsFit) -> String {
    let mut out = String::new();

    out.push_str("=== OLS fit ===\n");
    out.push_str(&format!(
        "Observations: n={} | coefficients: k={} | dof={}\n",
        fit.n_observations(),
        fit.n_coefficients(),
        fit.dof,
    ));

    out.push_str("\nCoefficients:\n");
    out.push_str(&format!(
        "{:<12} {:>14} {:>14}\n",
        "term", "estimate", "std error"
    ));
    let se = fit.std_errors();
    for (i, label) in coefficient_labels(fit).iter().enumerate() {
        out.push_str(&format!(
            "{:<12} {:>14.6} {:>14.6}\n",
            label, fit.beta[i], se[i]
        ));
    }

    out.push_str("\nResidual diagnostics:\n");
    out.push_str(&format!("- sigma^2: {:.6}\n", fit.sigma2));
    out.push_str(&format!("- SSE: {:.6}\n", fit.quality.sse));
    out.push_str(&format!("- RMSE: {:.6}\n", fit.quality.rmse));
    out.push_str(&format!("- R^2: {:.6}\n", fit.quality.r_squared));

    out
}

/// Label each coefficient: `const` for the intercept, `x1..xk` for slopes.
fn coefficient_labels(fit: &OlsFit) -> Vec<String> {
    let mut labels = Vec::with_capacity(fit.n_coefficients());
    let mut slope_idx = 0usize;
    for i in 0..fit.n_coefficients() {
        if fit.intercept && i == 0 {
            labels.push("const".to_string());
        } else {
            slope_idx += 1;
            labels.push(format!("x{slope_idx}"));
        }
    }
    labels
}

//! Free-surface gravity wave dispersion.
//!
//! Solves `k tanh(k H) = α`, `α = ω²/g`, in the dimensionless unknown
//! `x = kH`:
//!
//! ```text
//! f(x)  = x tanh x - αH
//! f'(x) = tanh x + x (1 - tanh² x)
//! ```
//!
//! Once `tanh(αH)` rounds to one the root is `x = αH`.

use super::Root;
use super::newton::newton;
use crate::config::SolverConfig;
use crate::diagnostics::{Diagnostic, Surface};

/// Smallest argument at which tanh saturates to one in double precision.
fn saturation() -> f64 {
    (1.0 - f64::EPSILON / 2.0).atanh()
}

/// Wavenumber of a free-surface wave with `alpha = ω²/g` over water of
/// depth `depth` (possibly infinite).
pub(crate) fn solve(alpha: f64, depth: f64, frequency: f64, config: &SolverConfig) -> Root {
    if depth.is_infinite() {
        return Root::exact(alpha);
    }

    let target = alpha * depth;
    if target >= saturation() {
        return Root::exact(alpha);
    }

    let outcome = newton(
        |x| {
            let t = x.tanh();
            (x * t - target, t + x * (1.0 - t * t))
        },
        target,
        config,
    );

    let wavenumber = outcome.root / depth;
    if outcome.converged {
        return Root::exact(wavenumber);
    }

    let diagnostic = Diagnostic::NonConvergence {
        surface: Surface::FreeSurface,
        frequency,
        iterations: outcome.iterations,
        residual: outcome.residual / target,
    }
    .emit();
    Root::with_diagnostic(wavenumber, diagnostic)
}

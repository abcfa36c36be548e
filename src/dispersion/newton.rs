//! Scalar Newton refinement.

use crate::config::SolverConfig;

/// Result of a Newton refinement. The last iterate is kept even when the
/// iteration did not converge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct NewtonOutcome {
    pub root: f64,
    pub iterations: usize,
    /// |f(root)| at the last iterate
    pub residual: f64,
    pub converged: bool,
}

/// Newton's method for `f`, given as a closure returning `(f(x), f'(x))`.
///
/// Converged when the step falls below `tolerance * max(|x|, 1)` or the
/// residual vanishes exactly.
pub(crate) fn newton<F>(f: F, x0: f64, config: &SolverConfig) -> NewtonOutcome
where
    F: Fn(f64) -> (f64, f64),
{
    let mut x = x0;
    let (mut value, mut slope) = f(x);

    for iteration in 1..=config.max_iterations {
        if value == 0.0 {
            return NewtonOutcome {
                root: x,
                iterations: iteration - 1,
                residual: 0.0,
                converged: true,
            };
        }
        if slope == 0.0 || !slope.is_finite() {
            break;
        }

        let step = value / slope;
        x -= step;
        (value, slope) = f(x);

        if step.abs() <= config.tolerance * x.abs().max(1.0) {
            return NewtonOutcome {
                root: x,
                iterations: iteration,
                residual: value.abs(),
                converged: value.is_finite(),
            };
        }
    }

    NewtonOutcome {
        root: x,
        iterations: config.max_iterations,
        residual: value.abs(),
        converged: false,
    }
}

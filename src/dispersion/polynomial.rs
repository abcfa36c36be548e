//! Roots of real polynomials.
//!
//! All roots are found simultaneously with the Aberth-Ehrlich iteration
//!
//! ```text
//! w_k = (p/p')(z_k) / (1 - (p/p')(z_k) Σ_{j≠k} 1/(z_k - z_j))
//! z_k ← z_k - w_k
//! ```
//!
//! then polished one by one with Newton's method on the undeflated
//! polynomial. Coefficients are given in ascending order of degree.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::error::{DispersionError, SeedLimit};

const MAX_SWEEPS: usize = 500;
const POLISH_STEPS: usize = 3;

/// Relative bound on the imaginary part of a root treated as real.
pub(crate) const REAL_TOLERANCE: f64 = 1e-9;

/// p(z) and p'(z) by Horner's scheme.
fn horner(coefficients: &[f64], z: Complex64) -> (Complex64, Complex64) {
    let mut p = Complex64::new(0.0, 0.0);
    let mut dp = Complex64::new(0.0, 0.0);
    for &c in coefficients.iter().rev() {
        dp = dp * z + p;
        p = p * z + c;
    }
    (p, dp)
}

/// All complex roots of a polynomial, with multiplicity.
pub(crate) fn roots(coefficients: &[f64]) -> Vec<Complex64> {
    let Some(top) = coefficients.iter().rposition(|&c| c != 0.0) else {
        return Vec::new();
    };
    let lead = coefficients[top];
    let monic: Vec<f64> = coefficients[..=top].iter().map(|c| c / lead).collect();
    let degree = top;
    if degree == 0 {
        return Vec::new();
    }

    // Starting points on a circle bounding every root
    let radius = (0..degree)
        .map(|i| monic[i].abs().powf(1.0 / (degree - i) as f64))
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);
    let mut z: Vec<Complex64> = (0..degree)
        .map(|k| Complex64::from_polar(radius, 2.0 * PI * k as f64 / degree as f64 + 0.4))
        .collect();

    for _ in 0..MAX_SWEEPS {
        let mut largest = 0.0_f64;
        for k in 0..degree {
            let (p, dp) = horner(&monic, z[k]);
            if p.norm() == 0.0 {
                continue;
            }
            let ratio = p / dp;
            let repulsion: Complex64 = (0..degree)
                .filter(|&j| j != k)
                .map(|j| (z[k] - z[j]).inv())
                .sum();
            let step = ratio / (1.0 - ratio * repulsion);
            if step.is_finite() {
                z[k] -= step;
                largest = largest.max(step.norm() / z[k].norm().max(1.0));
            }
        }
        if largest < 1e-15 {
            break;
        }
    }

    for root in &mut z {
        for _ in 0..POLISH_STEPS {
            let (p, dp) = horner(&monic, *root);
            let step = p / dp;
            if !step.is_finite() || p.norm() == 0.0 {
                break;
            }
            *root -= step;
        }
    }

    z
}

/// True if `z` is real within [`REAL_TOLERANCE`].
pub(crate) fn is_real(z: Complex64) -> bool {
    z.im.abs() <= REAL_TOLERANCE * z.norm().max(1.0)
}

/// The unique positive real root of a seeding polynomial.
///
/// Any other count of positive real roots means the dispersion parameters
/// are inconsistent.
pub(crate) fn positive_real_root(
    coefficients: &[f64],
    limit: SeedLimit,
    frequency: f64,
) -> Result<f64, DispersionError> {
    let candidates: Vec<f64> = roots(coefficients)
        .into_iter()
        .filter(|&z| is_real(z) && z.re > 0.0)
        .map(|z| z.re)
        .collect();

    match candidates.as_slice() {
        [root] => Ok(*root),
        _ => Err(DispersionError::AmbiguousSeed {
            limit,
            frequency,
            found: candidates.len(),
        }),
    }
}

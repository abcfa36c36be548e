//! Free-edge boundary conditions of a floating floe.
//!
//! Away from the forcing, the deflection obeys `L_e⁴ W'''' + W = 0`, whose
//! solutions on the centred coordinate `ξ = x - L/2` are spanned by
//!
//! ```text
//! cosh(μ₊ξ), cosh(μ₋ξ), sinh(μ₊ξ), sinh(μ₋ξ)
//! μ± = (1 ± i) σ,   σ = 1 / (√2 L_e)
//! ```
//!
//! Zero bending moment and shear at both edges fix the four coefficients.
//! Even (cosh) and odd (sinh) pairs decouple into two 2x2 systems with
//! determinants
//!
//! ```text
//! Δe = -4iσ⁵ (sinh θ + sin θ),   Δo = -4iσ⁵ (sinh θ - sin θ),   θ = σL
//! ```
//!
//! so the inverse is written out in closed form. Coefficients are stored
//! multiplied by `exp(σL/2)`, which keeps every entry bounded for long
//! floes; [`sinh_minus_sin`] keeps `Δo` accurate for short ones.

use num_complex::Complex64;

use super::integrals::{Anchor, cexpm1, sinh_minus_sin, sinh_plus_sin};

/// A floe-edge mode `coefficient · exp(rate (x - anchor))`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct EdgeMode {
    pub coefficient: Complex64,
    pub rate: Complex64,
    pub anchor: Anchor,
}

impl EdgeMode {
    /// n-th derivative at floe-relative `x`.
    pub fn derivative(&self, x: f64, n: i32, length: f64) -> Complex64 {
        self.coefficient
            * self.rate.powi(n)
            * (self.rate * (x - self.anchor.position(length))).exp()
    }
}

/// Closed-form inverse of the free-edge boundary system.
///
/// Maps the particular solution's edge curvature and its slope,
/// `(W_p''(0), W_p''(L), W_p'''(0), W_p'''(L))`, to the scaled
/// homogeneous coefficients that cancel them.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BoundaryMatrix {
    sigma: f64,
    length: f64,
    rows: [[Complex64; 4]; 4],
}

impl BoundaryMatrix {
    pub fn new(sigma: f64, length: f64) -> Self {
        let theta = sigma * length;
        let phi = 0.5 * theta;
        let rotation = Complex64::from_polar(1.0, phi);

        let mu = Complex64::new(sigma, sigma);
        let mu2 = Complex64::new(0.0, 2.0 * sigma * sigma);
        let mu3 = Complex64::new(-2.0, 2.0) * sigma.powi(3);

        // cosh(μ₊ℓ) e^{-φ}, sinh(μ₊ℓ) e^{-φ}
        let decay = -mu * length;
        let c_plus = rotation * (1.0 + decay.exp()) * 0.5;
        let s_plus = -rotation * cexpm1(decay) * 0.5;
        let (c_minus, s_minus) = (c_plus.conj(), s_plus.conj());
        let (mu2m, mu3m) = (mu2.conj(), mu3.conj());

        let scale = Complex64::new(0.0, -4.0 * sigma.powi(5));
        let det_even = scale * sinh_plus_sin(theta);
        let det_odd = scale * sinh_minus_sin(theta);

        let even = |row: [Complex64; 4]| row.map(|v| v * 0.5 / det_even);
        let odd = |row: [Complex64; 4]| row.map(|v| v * 0.5 / det_odd);

        let rows = [
            even([-mu3m * s_minus, -mu3m * s_minus, -mu2m * c_minus, mu2m * c_minus]),
            even([mu3 * s_plus, mu3 * s_plus, mu2 * c_plus, -mu2 * c_plus]),
            odd([mu3m * c_minus, -mu3m * c_minus, mu2m * s_minus, mu2m * s_minus]),
            odd([-mu3 * c_plus, mu3 * c_plus, -mu2 * s_plus, -mu2 * s_plus]),
        ];

        Self {
            sigma,
            length,
            rows,
        }
    }

    /// Scaled coefficients of `cosh(μ₊ξ), cosh(μ₋ξ), sinh(μ₊ξ), sinh(μ₋ξ)`.
    pub fn solve(&self, edge_values: &[Complex64; 4]) -> [Complex64; 4] {
        self.rows.map(|row| {
            row.iter()
                .zip(edge_values)
                .map(|(&m, &v)| m * v)
                .sum::<Complex64>()
        })
    }

    /// The homogeneous solution as four edge-anchored exponentials.
    pub fn edge_modes(&self, coefficients: &[Complex64; 4]) -> [EdgeMode; 4] {
        let [c1, c2, c3, c4] = *coefficients;
        let rotation = Complex64::from_polar(0.5, 0.5 * self.sigma * self.length);
        let mu = Complex64::new(self.sigma, self.sigma);
        let mode = |coefficient, rate, anchor| EdgeMode {
            coefficient,
            rate,
            anchor,
        };
        [
            mode(rotation * (c1 + c3), mu, Anchor::Right),
            mode(rotation * (c1 - c3), -mu, Anchor::Left),
            mode(rotation.conj() * (c2 + c4), mu.conj(), Anchor::Right),
            mode(rotation.conj() * (c2 - c4), -mu.conj(), Anchor::Left),
        ]
    }
}

//! Curvature of short floes as a power series.
//!
//! With free edges, the curvature `u = W''` of a floe solves the clamped
//! problem
//!
//! ```text
//! L_e⁴ u'''' + u = F''(x),   u(0) = u'(0) = u(L) = u'(L) = 0
//! ```
//!
//! On a floe much shorter than the elastic length the floe moves almost
//! rigidly, and `u` is smaller than the forced curvature by about
//! `(L / L_e)⁴ / 384`. Summing the closed-form modes then cancels away the
//! leading digits of `u`, and squaring the sum for the energy loses twice
//! as many. Here `u` is expanded in `t = x / L` instead,
//!
//! ```text
//! u = Σ bₙ tⁿ,   b₀ = b₁ = 0,
//! bₙ₊₄ = (γₙ - bₙ) θ⁴ n! / (n + 4)!,   θ = L / L_e,
//! γₙ = Σⱼ Fⱼ sⱼ² (sⱼ L)ⁿ / n!
//! ```
//!
//! with `b₂`, `b₃` fixed by the right edge. No step of the recurrence
//! subtracts quantities much larger than `u`.

use std::f64::consts::PI;

use num_complex::Complex64;

/// Terms kept in the expansion.
const TERMS: usize = 48;

/// Largest `|s| L` the truncated expansion resolves to rounding.
pub(crate) const MAX_PHASE: f64 = 4.0;

/// Largest `L / L_e` the expansion is used for.
pub(crate) const MAX_THETA: f64 = 1.0;

/// Curvature `u(t) = Σ bₙ tⁿ` of a floe on `t = x / L ∈ [0, 1]`.
#[derive(Clone, Debug)]
pub(crate) struct CurvatureSeries {
    coefficients: [Complex64; TERMS],
}

impl CurvatureSeries {
    /// Expansion for forcing amplitudes `Fⱼ` with rates `sⱼ` on a floe of
    /// `length`, given `theta = L / L_e`.
    pub fn new(forcing: &[Complex64], rates: &[Complex64], length: f64, theta: f64) -> Self {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let theta4 = theta.powi(4);

        let mut load = [zero; TERMS];
        for (&f, &s) in forcing.iter().zip(rates) {
            let step = s * length;
            let mut term = f * s * s;
            for (n, gamma) in load.iter_mut().enumerate() {
                *gamma += term;
                term *= step / (n + 1) as f64;
            }
        }

        let forced = recurrence(zero, zero, &load, theta4);
        let even = recurrence(one, zero, &[zero; TERMS], theta4);
        let odd = recurrence(zero, one, &[zero; TERMS], theta4);

        // u(1) = u'(1) = 0
        let (p, dp) = right_edge(&even);
        let (r, dr) = right_edge(&odd);
        let (q, dq) = right_edge(&forced);
        let det = p * dr - r * dp;
        let b2 = (r * dq - q * dr) / det;
        let b3 = (q * dp - p * dq) / det;

        let mut coefficients = forced;
        for (n, b) in coefficients.iter_mut().enumerate() {
            *b += b2 * even[n] + b3 * odd[n];
        }
        Self { coefficients }
    }

    /// Curvature at `t = x / L`.
    pub fn value(&self, t: f64) -> Complex64 {
        self.coefficients
            .iter()
            .rev()
            .fold(Complex64::new(0.0, 0.0), |acc, &b| acc * t + b)
    }

    /// `∫₀¹ |u(t)|² dt`, exact for the truncated expansion and never
    /// negative.
    pub fn squared_norm(&self) -> f64 {
        gauss_legendre(TERMS)
            .into_iter()
            .map(|(x, w)| 0.5 * w * self.value(0.5 * (1.0 + x)).norm_sqr())
            .sum()
    }
}

fn recurrence(
    b2: Complex64,
    b3: Complex64,
    load: &[Complex64; TERMS],
    theta4: f64,
) -> [Complex64; TERMS] {
    let mut b = [Complex64::new(0.0, 0.0); TERMS];
    b[2] = b2;
    b[3] = b3;
    for n in 0..TERMS - 4 {
        let rising = ((n + 1) * (n + 2) * (n + 3) * (n + 4)) as f64;
        b[n + 4] = (load[n] - b[n]) * (theta4 / rising);
    }
    b
}

/// Value and slope of `Σ bₙ tⁿ` at `t = 1`.
fn right_edge(b: &[Complex64; TERMS]) -> (Complex64, Complex64) {
    b.iter()
        .enumerate()
        .fold((Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)), |(v, d), (n, &c)| {
            (v + c, d + c * n as f64)
        })
}

/// Legendre polynomial `P_n(x)` and its derivative.
fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    let (mut p0, mut p1) = (1.0, x);
    for k in 2..=n {
        let k = k as f64;
        let p2 = ((2.0 * k - 1.0) * x * p1 - (k - 1.0) * p0) / k;
        p0 = p1;
        p1 = p2;
    }
    (p1, n as f64 * (x * p1 - p0) / (x * x - 1.0))
}

/// Gauss-Legendre nodes and weights on [-1, 1].
///
/// Newton iteration on `P_n` from the asymptotic node positions.
fn gauss_legendre(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let mut x = (PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
            for _ in 0..100 {
                let (p, dp) = legendre_and_derivative(n, x);
                let update = p / dp;
                x -= update;
                if update.abs() < 1e-15 {
                    break;
                }
            }
            let (_, dp) = legendre_and_derivative(n, x);
            (x, 2.0 / ((1.0 - x * x) * dp * dp))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauss_legendre_is_exact_to_full_degree() {
        let rule = gauss_legendre(TERMS);
        let total: f64 = rule.iter().map(|(_, w)| w).sum();
        assert!((total - 2.0).abs() < 1e-13);

        for k in [1, 2, 10, 41, 2 * TERMS - 2] {
            // ∫₀¹ tᵏ dt on the mapped rule
            let integral: f64 = rule
                .iter()
                .map(|&(x, w)| 0.5 * w * (0.5 * (1.0 + x)).powi(k as i32))
                .sum();
            let exact = 1.0 / (k + 1) as f64;
            assert!((integral - exact).abs() < 1e-13 * exact, "degree {k}");
        }
    }

    #[test]
    fn test_clamped_edges() {
        let forcing = [Complex64::new(0.3, -0.4), Complex64::new(0.1, 0.2)];
        let rates = [Complex64::new(-1e-3, 0.08), Complex64::new(-4e-3, 0.2)];
        let series = CurvatureSeries::new(&forcing, &rates, 6.0, 0.4);
        let (value, slope) = right_edge(&series.coefficients);
        let scale = series.coefficients[2].norm();
        assert_eq!(series.value(0.0), Complex64::new(0.0, 0.0));
        assert_eq!(series.coefficients[1], Complex64::new(0.0, 0.0));
        assert!(value.norm() < 1e-12 * scale);
        assert!(slope.norm() < 1e-12 * scale);
    }

    #[test]
    fn test_uniform_load_on_a_short_floe() {
        // Rigid-limit curvature t²(1 - t)² L⁴ F s² / (24 L_e⁴)
        let length = 0.1;
        let elastic_length = 20.0;
        let theta = length / elastic_length;
        let forcing = [Complex64::new(1.0, 0.0)];
        let rates = [Complex64::new(0.0, 1e-12)];
        let series = CurvatureSeries::new(&forcing, &rates, length, theta);
        let load = (forcing[0] * rates[0] * rates[0]).re;
        for t in [0.2_f64, 0.5, 0.9] {
            let expected = load * theta.powi(4) * (t * (1.0 - t)).powi(2) / 24.0;
            let got = series.value(t).re;
            assert!((got - expected).abs() < 1e-9 * expected.abs(), "t = {t}");
        }
        let expected = (load * theta.powi(4) / 24.0).powi(2) / 630.0;
        assert!((series.squared_norm() - expected).abs() < 1e-9 * expected);
    }
}

//! Overflow-free complex exponential kernels.
//!
//! Every field on a floe is a sum of modes `c exp(p (x - a))` where the
//! anchor `a` is the edge at which the mode is largest. Products of two
//! such modes integrate in closed form:
//!
//! ```text
//! ∫₀ᴸ exp(p (x - a)) · conj(exp(q (x - b))) dx,   z = p + q̄
//! ```
//!
//! written with `φ₁(w) = (eʷ - 1) / w` so that no intermediate exceeds the
//! magnitude of the result and the `z → 0` limit is removable.

use num_complex::Complex64;

/// Edge a mode is anchored at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Anchor {
    /// x = 0
    Left,
    /// x = L
    Right,
}

impl Anchor {
    pub fn position(self, length: f64) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Right => length,
        }
    }
}

/// `exp(z) - 1` without cancellation for small `z`.
pub(crate) fn cexpm1(z: Complex64) -> Complex64 {
    let half = (0.5 * z.im).sin();
    Complex64::new(
        z.re.exp_m1() * z.im.cos() - 2.0 * half * half,
        z.re.exp() * z.im.sin(),
    )
}

/// `(exp(w) - 1) / w`, equal to 1 at `w = 0`.
pub(crate) fn phi1(w: Complex64) -> Complex64 {
    if w.norm_sqr() == 0.0 {
        Complex64::new(1.0, 0.0)
    } else {
        cexpm1(w) / w
    }
}

/// `(sinh θ + sin θ) e^{-θ}` for `θ ≥ 0`.
pub(crate) fn sinh_plus_sin(theta: f64) -> f64 {
    -0.5 * (-2.0 * theta).exp_m1() + theta.sin() * (-theta).exp()
}

/// `(sinh θ - sin θ) e^{-θ}` for `θ ≥ 0`.
///
/// The difference vanishes like θ³/3 at the origin; below θ = 1 it is
/// summed from its odd-power series `2 Σ θ^(4n+3) / (4n+3)!`.
pub(crate) fn sinh_minus_sin(theta: f64) -> f64 {
    if theta >= 1.0 {
        return -0.5 * (-2.0 * theta).exp_m1() - theta.sin() * (-theta).exp();
    }

    let theta4 = theta.powi(4);
    let mut term = theta.powi(3) / 6.0;
    let mut sum = 0.0;
    let mut n = 3.0;
    while term > f64::EPSILON * sum || sum == 0.0 {
        sum += term;
        if term == 0.0 {
            break;
        }
        term *= theta4 / ((n + 1.0) * (n + 2.0) * (n + 3.0) * (n + 4.0));
        n += 4.0;
    }
    2.0 * sum * (-theta).exp()
}

/// `∫₀ᴸ exp(p (x - a)) conj(exp(q (x - b))) dx` for anchors `a`, `b`.
pub(crate) fn overlap(p: Complex64, a: Anchor, q: Complex64, b: Anchor, length: f64) -> Complex64 {
    let qc = q.conj();
    let z = p + qc;
    let growing = z.re > 0.0;
    // ∫₀ᴸ e^{zx} dx = L φ₁(zL) = e^{zL} L φ₁(-zL)
    let forward = || phi1(z * length) * length;
    let backward = || phi1(-z * length) * length;

    match (a, b) {
        (Anchor::Left, Anchor::Left) => forward(),
        (Anchor::Right, Anchor::Right) => backward(),
        (Anchor::Right, Anchor::Left) => {
            if growing {
                (qc * length).exp() * backward()
            } else {
                (-p * length).exp() * forward()
            }
        }
        (Anchor::Left, Anchor::Right) => {
            if growing {
                (p * length).exp() * backward()
            } else {
                (-qc * length).exp() * forward()
            }
        }
    }
}

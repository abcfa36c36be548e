//! Elastic bending energy of a floe.
//!
//! For the complex deflection `W = W_h + W_p` the stored energy per unit
//! width is
//!
//! ```text
//! E = D/2 ∫₀ᴸ |W''|² dx = E_h + E_p + 2 E_x
//! ```
//!
//! with `E_h`, `E_p` the homogeneous and particular self energies and `E_x`
//! their interaction. Both curvature fields are sums of edge-anchored
//! exponentials, so every term is a combination of [`overlap`] integrals.
//! Taking the modulus makes `E` independent of a global phase rotation of
//! the forcing.

use num_complex::Complex64;

use super::boundary::EdgeMode;
use super::integrals::{Anchor, overlap, phi1};

/// The three additive parts of a floe's elastic energy (J/m).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyTerms {
    /// Free flexural modes alone
    pub homogeneous: f64,
    /// Forced response alone
    pub particular: f64,
    /// Interaction between the two, counted twice in the total
    pub cross: f64,
}

impl EnergyTerms {
    /// `homogeneous + particular + 2 cross`.
    pub fn total(&self) -> f64 {
        self.homogeneous + self.particular + 2.0 * self.cross
    }
}

/// Energy terms for curvature modes on a floe of given length and flexural
/// rigidity. Particular modes are all anchored at the left edge.
pub(crate) fn energy_terms(
    homogeneous: &[EdgeMode],
    particular: &[EdgeMode],
    length: f64,
    rigidity: f64,
) -> EnergyTerms {
    let half = 0.5 * rigidity;
    let pair = |m: &EdgeMode, n: &EdgeMode| {
        m.coefficient * n.coefficient.conj() * overlap(m.rate, m.anchor, n.rate, n.anchor, length)
    };

    let homogeneous_energy: Complex64 = homogeneous
        .iter()
        .flat_map(|m| homogeneous.iter().map(move |n| pair(m, n)))
        .sum();

    // Self pairs decay as exp(-2αx); the α → 0 limit is removable in φ₁
    let squared: f64 = particular
        .iter()
        .map(|m| {
            debug_assert_eq!(m.anchor, Anchor::Left);
            let decay = Complex64::new(2.0 * m.rate.re * length, 0.0);
            m.coefficient.norm_sqr() * length * phi1(decay).re
        })
        .sum();
    let interaction: f64 = particular
        .iter()
        .enumerate()
        .flat_map(|(j, m)| particular[j + 1..].iter().map(move |n| pair(m, n).re))
        .sum();

    let cross: Complex64 = homogeneous
        .iter()
        .map(|m| particular.iter().map(|n| pair(m, n)).sum::<Complex64>())
        .sum();

    EnergyTerms {
        homogeneous: half * homogeneous_energy.re,
        particular: half * (squared + 2.0 * interaction),
        cross: half * cross.re,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(coefficient: Complex64, rate: Complex64, anchor: Anchor) -> EdgeMode {
        EdgeMode {
            coefficient,
            rate,
            anchor,
        }
    }

    fn trapezoid_energy(modes: &[EdgeMode], length: f64, rigidity: f64) -> f64 {
        let n = 20_000;
        let h = length / n as f64;
        let density = |x: f64| -> f64 {
            modes
                .iter()
                .map(|m| m.derivative(x, 0, length))
                .sum::<Complex64>()
                .norm_sqr()
        };
        let interior: f64 = (1..n).map(|i| density(i as f64 * h)).sum();
        0.5 * rigidity * h * (0.5 * density(0.0) + interior + 0.5 * density(length))
    }

    #[test]
    fn test_terms_add_up_to_direct_integral() {
        let length = 30.0;
        let homogeneous = [
            mode(Complex64::new(0.2, -0.1), Complex64::new(0.05, 0.05), Anchor::Right),
            mode(Complex64::new(-0.3, 0.2), Complex64::new(-0.05, -0.05), Anchor::Left),
        ];
        let particular = [
            mode(Complex64::new(0.5, 0.1), Complex64::new(-0.01, 0.2), Anchor::Left),
            mode(Complex64::new(-0.2, 0.4), Complex64::new(-0.002, 0.35), Anchor::Left),
        ];
        let terms = energy_terms(&homogeneous, &particular, length, 2.0);

        let all: Vec<EdgeMode> = homogeneous.iter().chain(&particular).copied().collect();
        let direct = trapezoid_energy(&all, length, 2.0);
        assert!((terms.total() - direct).abs() < 1e-6 * direct);
        assert!((terms.homogeneous - trapezoid_energy(&homogeneous, length, 2.0)).abs() < 1e-6);
        assert!((terms.particular - trapezoid_energy(&particular, length, 2.0)).abs() < 1e-6);
    }

    #[test]
    fn test_undamped_self_energy() {
        // |K|² ∫₀ᴸ dx when α = 0
        let particular = [mode(Complex64::new(0.0, 2.0), Complex64::new(0.0, 0.3), Anchor::Left)];
        let terms = energy_terms(&[], &particular, 10.0, 1.0);
        assert!((terms.particular - 0.5 * 4.0 * 10.0).abs() < 1e-12);
        assert_eq!(terms.homogeneous, 0.0);
        assert_eq!(terms.cross, 0.0);
    }

    #[test]
    fn test_identical_components_interfere_fully() {
        let rate = Complex64::new(-0.01, 0.2);
        let single = [mode(Complex64::new(1.0, 0.0), rate, Anchor::Left)];
        let halves = [
            mode(Complex64::new(0.5, 0.0), rate, Anchor::Left),
            mode(Complex64::new(0.5, 0.0), rate, Anchor::Left),
        ];
        let a = energy_terms(&[], &single, 25.0, 1.0).total();
        let b = energy_terms(&[], &halves, 25.0, 1.0).total();
        assert!((a - b).abs() < 1e-12 * a);
    }
}

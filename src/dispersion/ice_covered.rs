//! Flexural-gravity wave dispersion under a floating elastic sheet.
//!
//! With the elastic length `L_e` as unit, `K = k L_e`, the relation reads
//!
//! ```text
//! f(K)  = (K⁵ + d1 K) tanh(r K) + d0 = 0
//! f'(K) = (5K⁴ + d1) tanh(r K) + r (K⁵ + d1 K) sech²(r K)
//! ```
//!
//! with `d0 = -α L_e`, `d1 = 1 - α·draft` when the sheet inertia is
//! retained (1 otherwise) and `r = (H - draft) / L_e`.
//!
//! Newton's method needs a good start. Two limiting polynomials give one:
//!
//! - deep water, tanh → 1: `K⁵ + d1 K + d0`
//! - shallow water, tanh(x) → x: `K⁶ + d1 K² + d0 / r`
//!
//! The deep seed is used when `r K_deep > 1.47` (tanh within 10 % of one),
//! the shallow seed when `r K_shallow < 0.11`, their average otherwise.

use super::Root;
use super::newton::newton;
use super::polynomial::positive_real_root;
use crate::config::SolverConfig;
use crate::diagnostics::{Diagnostic, Surface};
use crate::error::{DispersionError, SeedLimit};

/// Which limit seeded the Newton refinement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedRegime {
    /// Deep-water seed alone
    Deep,
    /// Shallow-water seed alone
    Shallow,
    /// Average of both seeds
    Intermediate,
}

impl SeedRegime {
    /// Lower bound on `r K_deep` for the deep regime.
    pub const DEEP_LIMIT: f64 = 1.47;
    /// Upper bound on `r K_shallow` for the shallow regime.
    pub const SHALLOW_LIMIT: f64 = 0.11;

    /// Regime for the dimensionless ratios `r K_deep` and `r K_shallow`.
    ///
    /// The shallow ratio is only computed when the deep one is not
    /// conclusive.
    pub fn select<E>(
        deep_ratio: f64,
        shallow_ratio: impl FnOnce() -> Result<f64, E>,
    ) -> Result<Self, E> {
        if deep_ratio > Self::DEEP_LIMIT {
            return Ok(Self::Deep);
        }
        if shallow_ratio()? < Self::SHALLOW_LIMIT {
            Ok(Self::Shallow)
        } else {
            Ok(Self::Intermediate)
        }
    }
}

/// Dimensionless ice-covered dispersion relation for one ice sheet.
#[derive(Clone, Copy, Debug)]
pub(crate) struct IceCoveredRelation {
    pub elastic_length: f64,
    pub draft: f64,
    /// Water depth below the sheet, possibly infinite
    pub depth_under_ice: f64,
    pub mass_loading: bool,
}

impl IceCoveredRelation {
    /// `(d0, d1)` for `alpha = ω²/g`.
    fn coefficients(&self, alpha: f64) -> (f64, f64) {
        let d0 = -alpha * self.elastic_length;
        let d1 = if self.mass_loading {
            1.0 - alpha * self.draft
        } else {
            1.0
        };
        (d0, d1)
    }

    fn depth_ratio(&self) -> f64 {
        self.depth_under_ice / self.elastic_length
    }

    /// Newton starting point, in units of `1 / L_e`.
    fn seed(&self, d0: f64, d1: f64, frequency: f64) -> Result<(SeedRegime, f64), DispersionError> {
        let r = self.depth_ratio();
        let deep = positive_real_root(
            &[d0, d1, 0.0, 0.0, 0.0, 1.0],
            SeedLimit::DeepWater,
            frequency,
        )?;

        let mut shallow = deep;
        let regime = SeedRegime::select::<DispersionError>(r * deep, || {
            shallow = positive_real_root(
                &[d0 / r, 0.0, d1, 0.0, 0.0, 0.0, 1.0],
                SeedLimit::ShallowWater,
                frequency,
            )?;
            Ok(r * shallow)
        })?;

        let start = match regime {
            SeedRegime::Deep => deep,
            SeedRegime::Shallow => shallow,
            SeedRegime::Intermediate => 0.5 * (deep + shallow),
        };
        tracing::debug!(?regime, frequency, start, "ice-covered dispersion seeded");
        Ok((regime, start))
    }

    /// Wavenumber (1/m) for `alpha = ω²/g`.
    pub fn solve(
        &self,
        alpha: f64,
        frequency: f64,
        config: &SolverConfig,
    ) -> Result<Root, DispersionError> {
        let (d0, d1) = self.coefficients(alpha);

        if self.depth_under_ice.is_infinite() {
            let root = positive_real_root(
                &[d0, d1, 0.0, 0.0, 0.0, 1.0],
                SeedLimit::DeepWater,
                frequency,
            )?;
            return Ok(Root::exact(root / self.elastic_length));
        }

        let r = self.depth_ratio();
        let (_, start) = self.seed(d0, d1, frequency)?;
        let outcome = newton(
            |k| {
                let t = (r * k).tanh();
                let k5 = k.powi(5) + d1 * k;
                (
                    k5 * t + d0,
                    (5.0 * k.powi(4) + d1) * t + r * k5 * (1.0 - t * t),
                )
            },
            start,
            config,
        );

        let wavenumber = outcome.root / self.elastic_length;
        if outcome.converged {
            return Ok(Root::exact(wavenumber));
        }

        let diagnostic = Diagnostic::NonConvergence {
            surface: Surface::IceCovered,
            frequency,
            iterations: outcome.iterations,
            residual: outcome.residual / d0.abs(),
        }
        .emit();
        Ok(Root::with_diagnostic(wavenumber, diagnostic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GRAVITY;
    use std::f64::consts::PI;

    fn relation(depth_under_ice: f64) -> IceCoveredRelation {
        IceCoveredRelation {
            elastic_length: 15.0,
            draft: 0.9,
            depth_under_ice,
            mass_loading: true,
        }
    }

    fn residual(rel: &IceCoveredRelation, alpha: f64, k: f64) -> f64 {
        let (d0, d1) = rel.coefficients(alpha);
        let kk = k * rel.elastic_length;
        ((kk.powi(5) + d1 * kk) * (rel.depth_ratio() * kk).tanh() + d0).abs() / d0.abs()
    }

    #[test]
    fn test_regime_selection() {
        let never = || -> Result<f64, ()> { panic!("shallow seed not needed") };
        assert_eq!(SeedRegime::select(2.0, never), Ok(SeedRegime::Deep));
        assert_eq!(SeedRegime::select(1.0, || Ok::<_, ()>(0.05)), Ok(SeedRegime::Shallow));
        assert_eq!(SeedRegime::select(1.0, || Ok::<_, ()>(0.5)), Ok(SeedRegime::Intermediate));
        assert_eq!(SeedRegime::select(1.0, || Err(())), Err(()));
    }

    #[test]
    fn test_residual_in_every_regime() {
        let config = SolverConfig::default();
        for &depth in &[1.5, 5.0, 30.0, 1000.0] {
            let rel = relation(depth);
            for &f in &[0.01, 0.05, 0.1, 0.2] {
                let alpha = (2.0 * PI * f).powi(2) / GRAVITY;
                let root = rel.solve(alpha, f, &config).unwrap();
                assert!(root.diagnostic.is_none(), "depth {depth}, f {f}");
                assert!(root.wavenumber > 0.0);
                let r = residual(&rel, alpha, root.wavenumber);
                assert!(r < 1e-9, "depth {depth}, f {f}: residual {r}");
            }
        }
    }

    #[test]
    fn test_regimes_are_all_reached() {
        let mut seen = Vec::new();
        for &depth in &[0.95, 5.0, 1000.0] {
            let rel = relation(depth);
            let alpha = (2.0 * PI * 0.1_f64).powi(2) / GRAVITY;
            let (d0, d1) = rel.coefficients(alpha);
            let (regime, _) = rel.seed(d0, d1, 0.1).unwrap();
            seen.push(regime);
        }
        assert_eq!(
            seen,
            vec![SeedRegime::Shallow, SeedRegime::Intermediate, SeedRegime::Deep]
        );
    }

    #[test]
    fn test_infinite_depth_is_deep_seed() {
        let rel = relation(f64::INFINITY);
        let alpha = (2.0 * PI * 0.1_f64).powi(2) / GRAVITY;
        let k = rel.solve(alpha, 0.1, &SolverConfig::default()).unwrap().wavenumber;
        let kk = k * rel.elastic_length;
        let (d0, d1) = rel.coefficients(alpha);
        assert!((kk.powi(5) + d1 * kk + d0).abs() < 1e-12);

        // Matches a very deep finite column
        let finite = relation(1e4).solve(alpha, 0.1, &SolverConfig::default()).unwrap();
        assert!((finite.wavenumber - k).abs() / k < 1e-10);
    }

    #[test]
    fn test_mass_loading_shortens_wave() {
        // Sheet inertia lowers d1 and raises K
        let alpha = (2.0 * PI * 0.15_f64).powi(2) / GRAVITY;
        let with = relation(100.0).solve(alpha, 0.15, &SolverConfig::default()).unwrap();
        let without = IceCoveredRelation {
            mass_loading: false,
            ..relation(100.0)
        }
        .solve(alpha, 0.15, &SolverConfig::default())
        .unwrap();
        assert!(with.wavenumber > without.wavenumber);
    }
}

//! Solved response of a floe to a wave spectrum.

use std::sync::Arc;

use num_complex::Complex64;

use super::Floe;
use super::boundary::{BoundaryMatrix, EdgeMode};
use super::energy::{EnergyTerms, energy_terms};
use super::integrals::{Anchor, phi1};
use super::series::{CurvatureSeries, MAX_PHASE, MAX_THETA};
use crate::error::{FlexError, ParameterError, Result, finite};
use crate::ice::IceCoupled;
use crate::ocean::WaveCoupled;

/// Relative tolerance on positions at the floe edges.
const EDGE_SLACK: f64 = 1e-9;

/// A floe whose flexural response has been solved.
///
/// The deflection is the complex field
///
/// ```text
/// W(x) = Σⱼ Aⱼ exp(sⱼ x) + W_h(x),   sⱼ = -αⱼ + i kⱼ
/// ```
///
/// on floe-relative `x ∈ [0, L]`, where each forced amplitude is
/// `Aⱼ = Fⱼ / (1 + (L_e sⱼ)⁴)` and `W_h` cancels the forced bending moment
/// and shear at both edges. The forcing `Fⱼ` carries the wave amplitude,
/// its phase and the phase and decay accumulated from the ice edge up to
/// the floe.
///
/// Instantaneous physical quantities are the imaginary parts of the complex
/// fields. A `FloeCoupled` is immutable: a change of geometry, ice or
/// spectrum means solving a new one.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use flexfrac_rs::{
///     DiscreteSpectrum, DispersionKind, Floe, GRAVITY, Ice, IceCoupled, Ocean, OceanCoupled,
/// };
///
/// let spectrum = Arc::new(DiscreteSpectrum::new(1.0, 0.1, 0.0, 0.0).unwrap());
/// let ocean = Arc::new(OceanCoupled::new(Ocean::default(), spectrum, GRAVITY).unwrap());
/// let ice = Arc::new(IceCoupled::new(Ice::default(), ocean, DispersionKind::default()).unwrap());
/// let floe = Floe::new(50.0, 100.0).unwrap().couple(ice).unwrap();
///
/// assert!(floe.energy() > 0.0);
/// // Free edges carry no bending moment
/// assert!(floe.complex_curvature(0.0).norm() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct FloeCoupled {
    floe: Floe,
    ice: Arc<IceCoupled>,
    ice_edge: f64,
    rates: Vec<Complex64>,
    forcing: Vec<Complex64>,
    particular: Vec<Complex64>,
    coefficients: [Complex64; 4],
    homogeneous_modes: [EdgeMode; 4],
}

impl FloeCoupled {
    /// Solve with the ice cover starting at the floe's left edge.
    pub fn new(floe: Floe, ice: Arc<IceCoupled>) -> Result<Self> {
        let ice_edge = floe.left_edge();
        Self::with_ice_edge(floe, ice, ice_edge)
    }

    /// Solve with the ice cover starting at `ice_edge`, upstream of the
    /// floe. Between the ice edge and the floe the waves travel, and decay,
    /// with the ice-covered wavenumbers.
    pub fn with_ice_edge(floe: Floe, ice: Arc<IceCoupled>, ice_edge: f64) -> Result<Self> {
        let ice_edge = finite("ice_edge", ice_edge)?;
        if ice_edge > floe.left_edge() {
            return Err(ParameterError::OutOfRange {
                name: "ice_edge",
                value: ice_edge,
                requirement: "not downstream of the floe left edge",
            }
            .into());
        }

        let length = floe.length();
        let elastic_length = ice.elastic_length();
        let under_ice = floe.left_edge() - ice_edge;
        let spectrum = ice.spectrum();
        let open_water = ice.ocean().wavenumbers();
        let wavenumbers = ice.wavenumbers();
        let attenuations = ice.attenuations().unwrap_or_default();

        let mut rates = Vec::with_capacity(spectrum.len());
        let mut forcing = Vec::with_capacity(spectrum.len());
        let mut particular = Vec::with_capacity(spectrum.len());
        for (j, wave) in spectrum.waves().iter().enumerate() {
            let (k, alpha) = (wavenumbers[j], attenuations.get(j).copied().unwrap_or(0.0));
            let rate = Complex64::new(-alpha, k);
            let travel = open_water[j] * ice_edge + k * under_ice;
            let f = Complex64::from_polar(
                wave.amplitude() * (-alpha * under_ice).exp(),
                wave.phase() + travel,
            );

            let response = 1.0 + (rate * elastic_length).powi(4);
            if response.norm() <= f64::EPSILON {
                return Err(FlexError::ResonantForcing {
                    frequency: wave.frequency(),
                });
            }

            rates.push(rate);
            forcing.push(f);
            particular.push(f / response);
        }

        let mut edge_values = [Complex64::new(0.0, 0.0); 4];
        for (&a, &s) in particular.iter().zip(&rates) {
            let curvature = a * s * s;
            let at_right = (s * length).exp();
            edge_values[0] += curvature;
            edge_values[1] += curvature * at_right;
            edge_values[2] += curvature * s;
            edge_values[3] += curvature * s * at_right;
        }

        let matrix = BoundaryMatrix::new(ice.reduced_elastic_number(), length);
        let coefficients = matrix.solve(&edge_values);
        let homogeneous_modes = matrix.edge_modes(&coefficients);

        tracing::debug!(
            left_edge = floe.left_edge(),
            length,
            components = rates.len(),
            adimensional_length = ice.reduced_elastic_number() * length,
            "floe solved"
        );

        Ok(Self {
            floe,
            ice,
            ice_edge,
            rates,
            forcing,
            particular,
            coefficients,
            homogeneous_modes,
        })
    }

    pub fn floe(&self) -> &Floe {
        &self.floe
    }

    pub fn ice(&self) -> &Arc<IceCoupled> {
        &self.ice
    }

    pub fn ice_edge(&self) -> f64 {
        self.ice_edge
    }

    pub fn left_edge(&self) -> f64 {
        self.floe.left_edge()
    }

    pub fn length(&self) -> f64 {
        self.floe.length()
    }

    /// Complex forced amplitudes `Aⱼ`, one per spectral component.
    pub fn particular_amplitudes(&self) -> &[Complex64] {
        &self.particular
    }

    /// Coefficients of `cosh(μ₊ξ), cosh(μ₋ξ), sinh(μ₊ξ), sinh(μ₋ξ)` on the
    /// centred coordinate `ξ = x - L/2`, multiplied by `exp(σL/2)`.
    pub fn homogeneous_coefficients(&self) -> [Complex64; 4] {
        self.coefficients
    }

    /// n-th derivative of the complex deflection at floe-relative
    /// `x ∈ [0, L]`. The fields are not meant to be extrapolated past the
    /// edges.
    pub fn complex_derivative(&self, x: f64, n: i32) -> Complex64 {
        let length = self.length();
        debug_assert!(
            (-EDGE_SLACK * length..=(1.0 + EDGE_SLACK) * length).contains(&x),
            "x = {x} outside the floe [0, {length}]"
        );
        let homogeneous: Complex64 = self
            .homogeneous_modes
            .iter()
            .map(|m| m.derivative(x, n, length))
            .sum();
        let forced: Complex64 = self
            .particular
            .iter()
            .zip(&self.rates)
            .map(|(&a, &s)| a * s.powi(n) * (s * x).exp())
            .sum();
        homogeneous + forced
    }

    pub fn complex_displacement(&self, x: f64) -> Complex64 {
        self.complex_derivative(x, 0)
    }

    pub fn complex_curvature(&self, x: f64) -> Complex64 {
        self.complex_derivative(x, 2)
    }

    /// Vertical deflection (m) at floe-relative `x`.
    pub fn displacement(&self, x: f64) -> f64 {
        self.complex_displacement(x).im
    }

    /// Curvature (1/m) at floe-relative `x`.
    pub fn curvature(&self, x: f64) -> f64 {
        self.complex_curvature(x).im
    }

    /// Surface strain, curvature times half the thickness.
    pub fn strain(&self, x: f64) -> f64 {
        0.5 * self.ice.ice().thickness() * self.curvature(x)
    }

    /// [`displacement`](Self::displacement) at each of `positions`.
    pub fn displacements(&self, positions: &[f64]) -> Vec<f64> {
        positions.iter().map(|&x| self.displacement(x)).collect()
    }

    /// [`curvature`](Self::curvature) at each of `positions`.
    pub fn curvatures(&self, positions: &[f64]) -> Vec<f64> {
        positions.iter().map(|&x| self.curvature(x)).collect()
    }

    /// [`strain`](Self::strain) at each of `positions`.
    pub fn strains(&self, positions: &[f64]) -> Vec<f64> {
        positions.iter().map(|&x| self.strain(x)).collect()
    }

    /// Bending moment per unit width (N).
    pub fn bending_moment(&self, x: f64) -> f64 {
        self.ice.ice().flex_rigidity() * self.curvature(x)
    }

    /// Shear force per unit width (N/m).
    pub fn shear_force(&self, x: f64) -> f64 {
        self.ice.ice().flex_rigidity() * self.complex_derivative(x, 3).im
    }

    /// Mean elevation of the forcing wave field over the floe (m).
    pub fn mean_surface(&self) -> f64 {
        let length = self.length();
        self.forcing
            .iter()
            .zip(&self.rates)
            .map(|(&f, &s)| f * phi1(s * length))
            .sum::<Complex64>()
            .im
    }

    /// Homogeneous, particular and cross parts of the elastic energy.
    ///
    /// The three parts are each of the size of the forced self energy. On
    /// floes much shorter than the elastic length they nearly cancel, and
    /// their sum keeps only an absolute accuracy of about `1e-16` times
    /// that size; [`energy`](Self::energy) does not go through it there.
    pub fn energy_terms(&self) -> EnergyTerms {
        let homogeneous: Vec<EdgeMode> = self
            .homogeneous_modes
            .iter()
            .map(|m| EdgeMode {
                coefficient: m.coefficient * m.rate * m.rate,
                ..*m
            })
            .collect();
        let particular: Vec<EdgeMode> = self
            .particular
            .iter()
            .zip(&self.rates)
            .map(|(&a, &s)| EdgeMode {
                coefficient: a * s * s,
                rate: s,
                anchor: Anchor::Left,
            })
            .collect();
        energy_terms(
            &homogeneous,
            &particular,
            self.length(),
            self.ice.ice().flex_rigidity(),
        )
    }

    /// Elastic bending energy per unit width (J/m).
    ///
    /// Floes no longer than the elastic length, over which no component
    /// turns by more than a few radians, integrate the power-series
    /// curvature; the result is then accurate relative to itself and never
    /// negative. Longer floes sum the closed-form
    /// [`energy_terms`](Self::energy_terms).
    pub fn energy(&self) -> f64 {
        match self.short_floe_curvature() {
            Some(series) => {
                0.5 * self.ice.ice().flex_rigidity() * self.length() * series.squared_norm()
            }
            None => self.energy_terms().total(),
        }
    }

    fn short_floe_curvature(&self) -> Option<CurvatureSeries> {
        let length = self.length();
        let theta = length / self.ice.elastic_length();
        let widest = self
            .rates
            .iter()
            .map(|s| s.norm() * length)
            .fold(0.0, f64::max);
        (theta <= MAX_THETA && widest <= MAX_PHASE)
            .then(|| CurvatureSeries::new(&self.forcing, &self.rates, length, theta))
    }

    /// Re-solve the segment `[offset, offset + length]` of this floe as a
    /// floe of its own, with the same ice and ice edge.
    pub fn sub_floe(&self, offset: f64, length: f64) -> Result<Self> {
        let offset = finite("offset", offset)?;
        if offset < 0.0 || offset + length > self.length() * (1.0 + f64::EPSILON) {
            return Err(ParameterError::OutOfRange {
                name: "offset",
                value: offset,
                requirement: "such that the segment lies within the floe",
            }
            .into());
        }
        let floe = Floe::new(self.left_edge() + offset, length)?;
        Self::with_ice_edge(floe, Arc::clone(&self.ice), self.ice_edge)
    }

    /// Energies of the two floes obtained by breaking this one at
    /// floe-relative `x`.
    pub fn split_energies(&self, x: f64) -> Result<(f64, f64)> {
        let left = self.sub_floe(0.0, x)?;
        let right = self.sub_floe(x, self.length() - x)?;
        Ok((left.energy(), right.energy()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GRAVITY;
    use crate::ice::{DispersionKind, Ice};
    use crate::ocean::{Ocean, OceanCoupled};
    use crate::wave::DiscreteSpectrum;

    fn ice(spectrum: DiscreteSpectrum, depth: f64) -> Arc<IceCoupled> {
        let ocean = Arc::new(
            OceanCoupled::new(Ocean::new(depth, 1025.0).unwrap(), Arc::new(spectrum), GRAVITY)
                .unwrap(),
        );
        Arc::new(IceCoupled::new(Ice::default(), ocean, DispersionKind::default()).unwrap())
    }

    fn spectrum() -> DiscreteSpectrum {
        DiscreteSpectrum::new(
            vec![0.4, 0.8, 0.3],
            vec![0.07, 0.1, 0.16],
            vec![0.3, 2.0, 4.5],
            0.0,
        )
        .unwrap()
    }

    #[test]
    fn test_ice_edge_must_be_upstream() {
        let floe = Floe::new(10.0, 40.0).unwrap();
        assert!(FloeCoupled::with_ice_edge(floe, ice(spectrum(), 200.0), 20.0).is_err());
        assert!(FloeCoupled::with_ice_edge(floe, ice(spectrum(), 200.0), -5.0).is_ok());
    }

    #[test]
    fn test_free_edges() {
        let ice = ice(spectrum(), 200.0);
        for &length in &[2.0, 60.0, 900.0] {
            let floe = Floe::new(30.0, length).unwrap().couple(ice.clone()).unwrap();
            let scale = floe.complex_derivative(0.5 * length, 2).norm().max(1e-12);
            for x in [0.0, length] {
                assert!(floe.complex_derivative(x, 2).norm() < 1e-8 * scale.max(1.0));
                assert!(floe.complex_derivative(x, 3).norm() < 1e-8 * scale.max(1.0));
            }
        }
    }

    #[test]
    fn test_particular_amplitudes() {
        let ice = ice(spectrum(), 200.0);
        let floe = Floe::new(0.0, 50.0).unwrap().couple(ice.clone()).unwrap();
        let le = ice.elastic_length();
        for (j, a) in floe.particular_amplitudes().iter().enumerate() {
            let wave = &ice.spectrum().waves()[j];
            let s = Complex64::new(-ice.attenuations().unwrap()[j], ice.wavenumbers()[j]);
            let expected = Complex64::from_polar(wave.amplitude(), wave.phase())
                / (1.0 + (s * le).powi(4));
            assert!((a - expected).norm() < 1e-14);
        }
    }

    #[test]
    fn test_sub_floe_bounds() {
        let floe = Floe::new(0.0, 80.0)
            .unwrap()
            .couple(ice(spectrum(), 200.0))
            .unwrap();
        assert!(floe.sub_floe(-1.0, 10.0).is_err());
        assert!(floe.sub_floe(75.0, 10.0).is_err());
        let sub = floe.sub_floe(20.0, 60.0).unwrap();
        assert_eq!(sub.left_edge(), 20.0);
        assert_eq!(sub.ice_edge(), 0.0);
        assert!(floe.split_energies(0.0).is_err());

        let (left, right) = floe.split_energies(30.0).unwrap();
        assert!(left >= 0.0 && right >= 0.0);
    }

    #[test]
    fn test_whole_floe_is_its_own_sub_floe() {
        let floe = Floe::new(5.0, 70.0)
            .unwrap()
            .couple(ice(spectrum(), 200.0))
            .unwrap();
        let same = floe.sub_floe(0.0, 70.0).unwrap();
        assert_eq!(same.energy(), floe.energy());
    }

    #[test]
    fn test_short_floe_curvature_matches_closed_form() {
        let ice = ice(spectrum(), 200.0);
        let length = 0.7 * ice.elastic_length();
        let floe = Floe::new(0.0, length).unwrap().couple(ice).unwrap();
        let series = floe.short_floe_curvature().unwrap();
        let scale = floe.complex_curvature(0.5 * length).norm();
        for i in 0..=8 {
            let t = i as f64 / 8.0;
            let closed = floe.complex_curvature(t * length);
            assert!((series.value(t) - closed).norm() < 1e-8 * scale, "t = {t}");
        }
        assert!(
            (floe.energy() - floe.energy_terms().total()).abs() < 1e-8 * floe.energy(),
            "{} vs {}",
            floe.energy(),
            floe.energy_terms().total()
        );
    }

    #[test]
    fn test_long_floe_skips_series() {
        let ice = ice(spectrum(), 200.0);
        let floe = Floe::new(0.0, 1.5 * ice.elastic_length())
            .unwrap()
            .couple(ice)
            .unwrap();
        assert!(floe.short_floe_curvature().is_none());
        assert_eq!(floe.energy(), floe.energy_terms().total());
    }

    #[test]
    fn test_fields_at_many_positions() {
        let floe = Floe::new(0.0, 40.0)
            .unwrap()
            .couple(ice(spectrum(), 200.0))
            .unwrap();
        let positions = [0.0, 7.5, 20.0, 40.0];
        let displacements = floe.displacements(&positions);
        let strains = floe.strains(&positions);
        let curvatures = floe.curvatures(&positions);
        for (i, &x) in positions.iter().enumerate() {
            assert_eq!(displacements[i], floe.displacement(x));
            assert_eq!(curvatures[i], floe.curvature(x));
            assert_eq!(strains[i], floe.strain(x));
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the floe")]
    fn test_positions_past_the_edge_are_rejected() {
        let floe = Floe::new(0.0, 40.0)
            .unwrap()
            .couple(ice(spectrum(), 200.0))
            .unwrap();
        floe.displacement(41.0);
    }

    #[test]
    fn test_mean_surface_of_undamped_wave() {
        // One wavelength of open water averages to zero
        let spectrum = DiscreteSpectrum::new(1.0, 0.1, 0.0, 0.0).unwrap();
        let ocean =
            Arc::new(OceanCoupled::new(Ocean::default(), Arc::new(spectrum), GRAVITY).unwrap());
        let ice = IceCoupled::new(Ice::default(), ocean, DispersionKind::OpenWater).unwrap();
        let ice = Arc::new(ice);
        let wavelength = ice.wavelengths()[0];
        let k = ice.wavenumbers()[0];
        let attenuated = (-k * k / 4.0 * wavelength).exp();
        let floe = Floe::new(0.0, wavelength).unwrap().couple(ice).unwrap();
        // The residual mean comes from the k²h/4 decay only
        assert!(floe.mean_surface().abs() < 1.0 - attenuated + 1e-12);
    }
}

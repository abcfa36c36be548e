//! Ocean medium and its coupling to a wave spectrum.

use std::convert::Infallible;
use std::f64::consts::PI;
use std::sync::Arc;

use num_complex::Complex64;

use crate::config::SolverConfig;
use crate::diagnostics::Diagnostic;
use crate::dispersion::{self, free_surface};
use crate::error::{ParameterError, positive};
use crate::wave::DiscreteSpectrum;

/// Anything carrying per-frequency wavenumbers aligned with a spectrum.
pub trait WaveCoupled {
    /// Spectrum the wavenumbers were solved for.
    fn spectrum(&self) -> &DiscreteSpectrum;

    /// Real wavenumbers (1/m), one per spectral component.
    fn wavenumbers(&self) -> &[f64];

    /// Spatial attenuation rates (1/m), if the medium dissipates.
    fn attenuations(&self) -> Option<&[f64]> {
        None
    }

    /// Wavelengths (m).
    fn wavelengths(&self) -> Vec<f64> {
        self.wavenumbers().iter().map(|k| 2.0 * PI / k).collect()
    }

    /// `k + iα`, so that a component propagates as `exp(i (k + iα) x)`.
    fn complex_wavenumbers(&self) -> Vec<Complex64> {
        match self.attenuations() {
            Some(alpha) => self
                .wavenumbers()
                .iter()
                .zip(alpha)
                .map(|(&k, &a)| Complex64::new(k, a))
                .collect(),
            None => self
                .wavenumbers()
                .iter()
                .map(|&k| Complex64::new(k, 0.0))
                .collect(),
        }
    }
}

/// Fluid layer below the waves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ocean {
    depth: f64,
    density: f64,
}

impl Default for Ocean {
    fn default() -> Self {
        Self {
            depth: 1000.0,
            density: 1025.0,
        }
    }
}

impl Ocean {
    /// Ocean of finite depth (m) and density (kg/m³).
    pub fn new(depth: f64, density: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            depth: positive("depth", depth)?,
            density: positive("density", density)?,
        })
    }

    /// Ocean of infinite depth.
    pub fn deep(density: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            depth: f64::INFINITY,
            density: positive("density", density)?,
        })
    }

    /// Depth in m, infinite for deep water.
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Density in kg/m³.
    pub fn density(&self) -> f64 {
        self.density
    }
}

/// An ocean with the open-water wavenumber of every spectral component.
#[derive(Clone, Debug)]
pub struct OceanCoupled {
    ocean: Ocean,
    spectrum: Arc<DiscreteSpectrum>,
    gravity: f64,
    config: SolverConfig,
    wavenumbers: Vec<f64>,
    diagnostics: Vec<Diagnostic>,
}

impl OceanCoupled {
    /// Solve the free-surface dispersion relation for every component.
    pub fn new(
        ocean: Ocean,
        spectrum: Arc<DiscreteSpectrum>,
        gravity: f64,
    ) -> Result<Self, ParameterError> {
        Self::with_config(ocean, spectrum, gravity, SolverConfig::default())
    }

    /// As [`OceanCoupled::new`], with explicit Newton limits.
    pub fn with_config(
        ocean: Ocean,
        spectrum: Arc<DiscreteSpectrum>,
        gravity: f64,
        config: SolverConfig,
    ) -> Result<Self, ParameterError> {
        let gravity = positive("gravity", gravity)?;
        let waves = spectrum.waves();

        let Ok((wavenumbers, diagnostics)) =
            dispersion::map_frequencies::<_, Infallible>(waves.len(), |i| {
                let wave = &waves[i];
                Ok(free_surface::solve(
                    wave.angular_frequency2() / gravity,
                    ocean.depth,
                    wave.frequency(),
                    &config,
                ))
            });

        tracing::debug!(
            components = wavenumbers.len(),
            depth = ocean.depth,
            "ocean coupled"
        );

        Ok(Self {
            ocean,
            spectrum,
            gravity,
            config,
            wavenumbers,
            diagnostics,
        })
    }

    pub fn ocean(&self) -> &Ocean {
        &self.ocean
    }

    /// Shared handle on the spectrum.
    pub fn spectrum_arc(&self) -> &Arc<DiscreteSpectrum> {
        &self.spectrum
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Non-convergence diagnostics raised while solving.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl WaveCoupled for OceanCoupled {
    fn spectrum(&self) -> &DiscreteSpectrum {
        &self.spectrum
    }

    fn wavenumbers(&self) -> &[f64] {
        &self.wavenumbers
    }
}

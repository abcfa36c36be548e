//! Composition of a sea state, an ocean and the floes it drives.

use std::sync::Arc;

use crate::error::Result;
use crate::floe::{Floe, FloeCoupled};
use crate::ice::{DispersionKind, Ice, IceCoupled};
use crate::ocean::{Ocean, OceanCoupled};
use crate::wave::{DiscreteSpectrum, FrequencyGrid, SpectralInput, Spectrum};

/// A discretised sea state over a coupled ocean.
///
/// # Example
///
/// ```
/// use flexfrac_rs::{Domain, DispersionKind, FrequencyGrid, GRAVITY, Ice, Ocean, PiersonMoskowitz};
///
/// let pm = PiersonMoskowitz::from_wind_speed(8.0, GRAVITY).unwrap();
/// let grid = FrequencyGrid::geometric(0.05, 0.3, 16);
/// let domain = Domain::new(&pm, Ocean::default(), &grid, 0.0, 0.0, GRAVITY).unwrap();
/// let ice = domain.couple_ice(Ice::default(), DispersionKind::default()).unwrap();
/// let floe = domain.floe(0.0, 150.0, &ice).unwrap();
/// assert!(floe.energy().is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct Domain {
    ocean: Arc<OceanCoupled>,
}

impl Domain {
    /// Sample `spectrum` on `grid` and couple the resulting waves to `ocean`.
    pub fn new(
        spectrum: &impl Spectrum,
        ocean: Ocean,
        grid: &FrequencyGrid,
        phases: impl Into<SpectralInput>,
        betas: impl Into<SpectralInput>,
        gravity: f64,
    ) -> Result<Self> {
        let frequencies = grid.frequencies()?;
        let amplitudes = spectrum.amplitudes(&frequencies);
        let waves = DiscreteSpectrum::new(amplitudes, frequencies, phases, betas)?;
        Self::from_discrete(waves, ocean, gravity)
    }

    /// Couple an already discrete sea state to `ocean`.
    pub fn from_discrete(spectrum: DiscreteSpectrum, ocean: Ocean, gravity: f64) -> Result<Self> {
        let ocean = OceanCoupled::new(ocean, Arc::new(spectrum), gravity)?;
        Ok(Self {
            ocean: Arc::new(ocean),
        })
    }

    /// The sampled waves.
    pub fn spectrum(&self) -> &Arc<DiscreteSpectrum> {
        self.ocean.spectrum_arc()
    }

    pub fn ocean(&self) -> &Arc<OceanCoupled> {
        &self.ocean
    }

    /// Lay an ice sheet over the domain.
    pub fn couple_ice(&self, ice: Ice, kind: DispersionKind) -> Result<Arc<IceCoupled>> {
        Ok(Arc::new(IceCoupled::new(ice, Arc::clone(&self.ocean), kind)?))
    }

    /// Solve a floe of `ice` spanning `[left_edge, left_edge + length]`.
    pub fn floe(&self, left_edge: f64, length: f64, ice: &Arc<IceCoupled>) -> Result<FloeCoupled> {
        Floe::new(left_edge, length)?.couple(Arc::clone(ice))
    }
}

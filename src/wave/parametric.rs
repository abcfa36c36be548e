//! Parametric wave spectra.
//!
//! A [`Spectrum`] is a continuous variance density S(f) (m²/Hz). Sampling it
//! on a frequency grid gives the amplitudes of a [`super::DiscreteSpectrum`]:
//!
//! ```text
//! aᵢ = √(2 S(fᵢ) Δfᵢ)
//! ```
//!
//! with centred-difference bin widths Δfᵢ.

use std::f64::consts::PI;

use crate::diagnostics::{Diagnosed, Diagnostic};
use crate::error::{ParameterError, positive};

/// Continuous wave variance density.
pub trait Spectrum {
    /// Variance density S(f) in m²/Hz at frequency `frequency` (Hz).
    fn density(&self, frequency: f64) -> f64;

    /// Significant wave height Hs (m).
    fn significant_wave_height(&self) -> f64;

    /// Component amplitudes for the given sorted frequencies.
    ///
    /// A single frequency carries the whole variance Hs²/16.
    fn amplitudes(&self, frequencies: &[f64]) -> Vec<f64> {
        let n = frequencies.len();
        if n == 1 {
            let variance = self.significant_wave_height().powi(2) / 16.0;
            return vec![(2.0 * variance).sqrt()];
        }

        (0..n)
            .map(|i| {
                let df = match i {
                    0 => frequencies[1] - frequencies[0],
                    i if i == n - 1 => frequencies[n - 1] - frequencies[n - 2],
                    i => 0.5 * (frequencies[i + 1] - frequencies[i - 1]),
                };
                (2.0 * self.density(frequencies[i]) * df.abs()).sqrt()
            })
            .collect()
    }
}

const SWH_COEFFICIENT: f64 = 0.0246;
const PEAK_COEFFICIENT: f64 = 0.877;
const ALPHA_S: f64 = 0.2044;
const BETA_S: f64 = 1.25;

/// Pierson-Moskowitz spectrum of a fully developed sea.
///
/// All descriptors are tied to the wind speed U:
/// Hs = 0.0246 U², fp = 0.877 g / (2π U).
///
/// # Example
///
/// ```
/// use flexfrac_rs::{GRAVITY, PiersonMoskowitz, Spectrum};
///
/// let pm = PiersonMoskowitz::builder().wind_speed(10.0).build(GRAVITY).unwrap().into_inner();
/// assert!((pm.significant_wave_height() - 2.46).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiersonMoskowitz {
    wind_speed: f64,
    swh: f64,
    peak_frequency: f64,
    peak_period: f64,
    peak_wavelength: f64,
}

impl PiersonMoskowitz {
    /// Spectrum for a wind speed (m/s).
    pub fn from_wind_speed(wind_speed: f64, gravity: f64) -> Result<Self, ParameterError> {
        let wind_speed = positive("wind_speed", wind_speed)?;
        let gravity = positive("gravity", gravity)?;
        let peak_frequency = PEAK_COEFFICIENT * gravity / (2.0 * PI * wind_speed);
        Ok(Self {
            wind_speed,
            swh: SWH_COEFFICIENT * wind_speed * wind_speed,
            peak_frequency,
            peak_period: 1.0 / peak_frequency,
            peak_wavelength: gravity / (2.0 * PI * peak_frequency * peak_frequency),
        })
    }

    /// Start describing a spectrum from any of its descriptors.
    pub fn builder() -> PiersonMoskowitzBuilder {
        PiersonMoskowitzBuilder::default()
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    pub fn peak_frequency(&self) -> f64 {
        self.peak_frequency
    }

    pub fn peak_period(&self) -> f64 {
        self.peak_period
    }

    pub fn peak_wavelength(&self) -> f64 {
        self.peak_wavelength
    }
}

impl Spectrum for PiersonMoskowitz {
    fn density(&self, frequency: f64) -> f64 {
        if frequency <= 0.0 {
            return 0.0;
        }
        let ratio = self.peak_frequency / frequency;
        ALPHA_S * self.swh * self.swh * self.peak_frequency.powi(4) / frequency.powi(5)
            * (-BETA_S * ratio.powi(4)).exp()
    }

    fn significant_wave_height(&self) -> f64 {
        self.swh
    }
}

/// Builder for [`PiersonMoskowitz`].
///
/// Descriptors are used in the precedence order wind speed, significant
/// wave height, peak frequency, peak period, peak wavelength. Every ignored
/// descriptor is reported.
#[derive(Clone, Copy, Debug, Default)]
pub struct PiersonMoskowitzBuilder {
    wind_speed: Option<f64>,
    swh: Option<f64>,
    peak_frequency: Option<f64>,
    peak_period: Option<f64>,
    peak_wavelength: Option<f64>,
}

impl PiersonMoskowitzBuilder {
    pub fn wind_speed(mut self, wind_speed: f64) -> Self {
        self.wind_speed = Some(wind_speed);
        self
    }

    pub fn swh(mut self, swh: f64) -> Self {
        self.swh = Some(swh);
        self
    }

    pub fn peak_frequency(mut self, peak_frequency: f64) -> Self {
        self.peak_frequency = Some(peak_frequency);
        self
    }

    pub fn peak_period(mut self, peak_period: f64) -> Self {
        self.peak_period = Some(peak_period);
        self
    }

    pub fn peak_wavelength(mut self, peak_wavelength: f64) -> Self {
        self.peak_wavelength = Some(peak_wavelength);
        self
    }

    /// Resolve the descriptors into a spectrum.
    pub fn build(self, gravity: f64) -> Result<Diagnosed<PiersonMoskowitz>, ParameterError> {
        let gravity = positive("gravity", gravity)?;
        let descriptors = [
            ("wind_speed", self.wind_speed),
            ("swh", self.swh),
            ("peak_frequency", self.peak_frequency),
            ("peak_period", self.peak_period),
            ("peak_wavelength", self.peak_wavelength),
        ];

        let (rank, retained, value) = descriptors
            .iter()
            .enumerate()
            .find_map(|(rank, (name, value))| value.map(|v| (rank, *name, v)))
            .ok_or(ParameterError::MissingSpectralParameter)?;

        let diagnostics = descriptors[rank + 1..]
            .iter()
            .filter(|(_, value)| value.is_some())
            .map(|(ignored, _)| {
                Diagnostic::IgnoredParameter {
                    ignored: *ignored,
                    retained,
                }
                .emit()
            })
            .collect();

        let from_peak = |fp: f64| PEAK_COEFFICIENT * gravity / (2.0 * PI * fp);
        let wind_speed = match retained {
            "wind_speed" => value,
            "swh" => (positive("swh", value)? / SWH_COEFFICIENT).sqrt(),
            "peak_frequency" => from_peak(positive("peak_frequency", value)?),
            "peak_period" => from_peak(1.0 / positive("peak_period", value)?),
            _ => {
                let wavenumber = 2.0 * PI / positive("peak_wavelength", value)?;
                from_peak((gravity * wavenumber).sqrt() / (2.0 * PI))
            }
        };

        let spectrum = PiersonMoskowitz::from_wind_speed(wind_speed, gravity)?;
        Ok(Diagnosed::new(spectrum, diagnostics))
    }
}

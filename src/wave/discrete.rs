//! Discrete superposition of monochromatic waves.

use super::Wave;
use crate::error::ParameterError;

/// Scalar or per-component input to [`DiscreteSpectrum::new`].
///
/// Scalars (and arrays of length one) are repeated to the common length.
#[derive(Clone, Debug, PartialEq)]
pub enum SpectralInput {
    Scalar(f64),
    Array(Vec<f64>),
}

impl SpectralInput {
    fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Array(values) => values.len(),
        }
    }

    fn get(&self, i: usize) -> f64 {
        match self {
            Self::Scalar(value) => *value,
            Self::Array(values) if values.len() == 1 => values[0],
            Self::Array(values) => values[i],
        }
    }
}

impl From<f64> for SpectralInput {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for SpectralInput {
    fn from(values: Vec<f64>) -> Self {
        Self::Array(values)
    }
}

impl From<&[f64]> for SpectralInput {
    fn from(values: &[f64]) -> Self {
        Self::Array(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for SpectralInput {
    fn from(values: [f64; N]) -> Self {
        Self::Array(values.to_vec())
    }
}

/// An ordered collection of waves.
///
/// The order is only meaningful as an index alignment with the
/// per-frequency arrays of coupled media.
///
/// # Example
///
/// ```
/// use flexfrac_rs::DiscreteSpectrum;
///
/// // One amplitude broadcast over three frequencies
/// let spectrum = DiscreteSpectrum::new(0.5, vec![0.08, 0.1, 0.12], 0.0, 0.0).unwrap();
/// assert_eq!(spectrum.len(), 3);
/// assert_eq!(spectrum.amplitudes(), vec![0.5; 3]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DiscreteSpectrum {
    waves: Vec<Wave>,
}

impl DiscreteSpectrum {
    /// Broadcast amplitudes (m), frequencies (Hz), phases (rad) and spreading
    /// coefficients to a common length.
    pub fn new(
        amplitudes: impl Into<SpectralInput>,
        frequencies: impl Into<SpectralInput>,
        phases: impl Into<SpectralInput>,
        betas: impl Into<SpectralInput>,
    ) -> Result<Self, ParameterError> {
        let inputs = [
            ("amplitudes", amplitudes.into()),
            ("frequencies", frequencies.into()),
            ("phases", phases.into()),
            ("betas", betas.into()),
        ];

        let size = inputs.iter().map(|(_, input)| input.len()).max().unwrap_or(0);
        for (name, input) in &inputs {
            let len = input.len();
            if len == 0 {
                return Err(ParameterError::EmptySpectrum);
            }
            if len != 1 && len != size {
                return Err(ParameterError::ShapeMismatch {
                    name: *name,
                    len,
                    expected: size,
                });
            }
        }

        let [(_, amps), (_, freqs), (_, phases), (_, betas)] = &inputs;
        let waves = (0..size)
            .map(|i| Wave::from_parts(amps.get(i), freqs.get(i), phases.get(i), betas.get(i)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { waves })
    }

    /// Spectrum made of the given waves, in order.
    pub fn from_waves(waves: Vec<Wave>) -> Result<Self, ParameterError> {
        if waves.is_empty() {
            return Err(ParameterError::EmptySpectrum);
        }
        Ok(Self { waves })
    }

    /// Same spectrum with every phase rotated by `delta` radians.
    pub fn with_phase_shift(&self, delta: f64) -> Self {
        Self {
            waves: self.waves.iter().map(|w| w.shifted(delta)).collect(),
        }
    }

    /// Wave components.
    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.waves.len()
    }

    /// Always false: a spectrum has at least one component.
    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn amplitudes(&self) -> Vec<f64> {
        self.waves.iter().map(Wave::amplitude).collect()
    }

    pub fn frequencies(&self) -> Vec<f64> {
        self.waves.iter().map(Wave::frequency).collect()
    }

    pub fn phases(&self) -> Vec<f64> {
        self.waves.iter().map(Wave::phase).collect()
    }

    pub fn angular_frequencies2(&self) -> Vec<f64> {
        self.waves.iter().map(Wave::angular_frequency2).collect()
    }
}

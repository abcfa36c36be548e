//! Monochromatic wave component.

use std::f64::consts::PI;

use crate::diagnostics::{Diagnosed, Diagnostic};
use crate::error::{ParameterError, finite, non_negative, positive};

/// A single monochromatic wave.
///
/// All derived quantities are computed once at construction; a `Wave` is
/// never modified afterwards.
///
/// # Example
///
/// ```
/// use flexfrac_rs::Wave;
///
/// let wave = Wave::from_period(1.0, 10.0).unwrap();
/// assert!((wave.frequency() - 0.1).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    amplitude: f64,
    frequency: f64,
    period: f64,
    phase: f64,
    beta: f64,
    angular_frequency: f64,
    angular_frequency2: f64,
}

impl Wave {
    /// Wave of given amplitude (m) and frequency (Hz), zero phase.
    pub fn new(amplitude: f64, frequency: f64) -> Result<Self, ParameterError> {
        Self::from_parts(amplitude, frequency, 0.0, 0.0)
    }

    /// Wave of given amplitude (m) and period (s), zero phase.
    pub fn from_period(amplitude: f64, period: f64) -> Result<Self, ParameterError> {
        let period = positive("period", period)?;
        Self::from_parts(amplitude, 1.0 / period, 0.0, 0.0)
    }

    /// Start describing a wave with optional period, frequency, phase and
    /// spreading.
    pub fn builder(amplitude: f64) -> WaveBuilder {
        WaveBuilder {
            amplitude,
            period: None,
            frequency: None,
            phase: 0.0,
            beta: 0.0,
        }
    }

    pub(crate) fn from_parts(
        amplitude: f64,
        frequency: f64,
        phase: f64,
        beta: f64,
    ) -> Result<Self, ParameterError> {
        let amplitude = non_negative("amplitude", amplitude)?;
        let frequency = positive("frequency", frequency)?;
        let phase = finite("phase", phase)?.rem_euclid(2.0 * PI);
        let beta = finite("beta", beta)?;
        let angular_frequency = 2.0 * PI * frequency;

        Ok(Self {
            amplitude,
            frequency,
            period: 1.0 / frequency,
            phase,
            beta,
            angular_frequency,
            angular_frequency2: angular_frequency * angular_frequency,
        })
    }

    /// Same wave with its phase rotated by `delta` radians.
    pub fn shifted(&self, delta: f64) -> Self {
        Self {
            phase: (self.phase + delta).rem_euclid(2.0 * PI),
            ..*self
        }
    }

    /// Amplitude in m.
    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Frequency in Hz.
    #[inline]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Period in s.
    #[inline]
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Phase in [0, 2π).
    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Directional spreading coefficient.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Angular frequency ω in rad/s.
    #[inline]
    pub fn angular_frequency(&self) -> f64 {
        self.angular_frequency
    }

    /// ω², for convenience.
    #[inline]
    pub fn angular_frequency2(&self) -> f64 {
        self.angular_frequency2
    }
}

/// Builder for [`Wave`] accepting redundant descriptions.
///
/// A period takes precedence over a frequency; the overridden frequency is
/// reported as a [`Diagnostic::IgnoredParameter`].
#[derive(Clone, Copy, Debug)]
pub struct WaveBuilder {
    amplitude: f64,
    period: Option<f64>,
    frequency: Option<f64>,
    phase: f64,
    beta: f64,
}

impl WaveBuilder {
    /// Set the period (s).
    pub fn period(mut self, period: f64) -> Self {
        self.period = Some(period);
        self
    }

    /// Set the frequency (Hz).
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Set the phase (rad).
    pub fn phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Set the directional spreading coefficient.
    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Build the wave.
    pub fn build(self) -> Result<Diagnosed<Wave>, ParameterError> {
        let mut diagnostics = Vec::new();
        let frequency = match (self.period, self.frequency) {
            (None, None) => return Err(ParameterError::MissingFrequency),
            (Some(period), frequency) => {
                if frequency.is_some() {
                    diagnostics.push(
                        Diagnostic::IgnoredParameter {
                            ignored: "frequency",
                            retained: "period",
                        }
                        .emit(),
                    );
                }
                1.0 / positive("period", period)?
            }
            (None, Some(frequency)) => frequency,
        };
        let wave = Wave::from_parts(self.amplitude, frequency, self.phase, self.beta)?;
        Ok(Diagnosed::new(wave, diagnostics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_and_frequency_agree() {
        let a = Wave::from_period(0.5, 8.0).unwrap();
        let b = Wave::new(0.5, 0.125).unwrap();
        assert_eq!(a, b);
        assert!((a.angular_frequency() - 2.0 * PI / 8.0).abs() < 1e-15);
        assert!((a.angular_frequency2() - a.angular_frequency().powi(2)).abs() < 1e-15);
    }

    #[test]
    fn test_builder_requires_period_or_frequency() {
        let err = Wave::builder(1.0).phase(1.0).build().unwrap_err();
        assert!(matches!(err, ParameterError::MissingFrequency));
    }

    #[test]
    fn test_builder_period_overrides_frequency() {
        let built = Wave::builder(1.0).frequency(0.5).period(4.0).build().unwrap();
        assert_eq!(built.diagnostics().len(), 1);
        assert_eq!(built.value().frequency(), 0.25);
    }

    #[test]
    fn test_builder_frequency_only_is_clean() {
        let built = Wave::builder(1.0).frequency(0.5).beta(2.0).build().unwrap();
        assert!(built.is_clean());
        assert_eq!(built.value().beta(), 2.0);
    }

    #[test]
    fn test_phase_is_wrapped() {
        let wave = Wave::builder(1.0)
            .frequency(0.1)
            .phase(-PI / 2.0)
            .build()
            .unwrap()
            .into_inner();
        assert!((wave.phase() - 1.5 * PI).abs() < 1e-14);

        let shifted = wave.shifted(PI);
        assert!((shifted.phase() - 0.5 * PI).abs() < 1e-14);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Wave::new(-1.0, 0.1).is_err());
        assert!(Wave::new(1.0, 0.0).is_err());
        assert!(Wave::from_period(1.0, -3.0).is_err());
        assert!(Wave::new(1.0, f64::NAN).is_err());
    }
}

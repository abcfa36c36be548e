//! Frequency grids for sampling continuous spectra.

use crate::error::{ParameterError, positive};

/// Ordered set of positive frequencies (Hz).
#[derive(Clone, Debug, PartialEq)]
pub enum FrequencyGrid {
    /// Frequencies used as given.
    Explicit(Vec<f64>),
    /// `count` evenly spaced frequencies from `min` to `max` inclusive.
    Linear { min: f64, max: f64, count: usize },
    /// `count` geometrically spaced frequencies from `min` to `max` inclusive.
    Geometric { min: f64, max: f64, count: usize },
}

impl FrequencyGrid {
    pub fn explicit(frequencies: Vec<f64>) -> Self {
        Self::Explicit(frequencies)
    }

    pub fn linear(min: f64, max: f64, count: usize) -> Self {
        Self::Linear { min, max, count }
    }

    pub fn geometric(min: f64, max: f64, count: usize) -> Self {
        Self::Geometric { min, max, count }
    }

    /// Materialise the grid, checking every frequency is finite and positive.
    pub fn frequencies(&self) -> Result<Vec<f64>, ParameterError> {
        let frequencies = match *self {
            Self::Explicit(ref frequencies) => frequencies.clone(),
            Self::Linear { min, max, count } => {
                Self::check_bounds(min, max, count)?;
                Self::spaced(count, |t| min + t * (max - min))
            }
            Self::Geometric { min, max, count } => {
                Self::check_bounds(min, max, count)?;
                let ratio = max / min;
                Self::spaced(count, |t| min * ratio.powf(t))
            }
        };

        if frequencies.is_empty() {
            return Err(ParameterError::EmptySpectrum);
        }
        frequencies
            .into_iter()
            .map(|f| positive("frequency", f))
            .collect()
    }

    fn check_bounds(min: f64, max: f64, count: usize) -> Result<(), ParameterError> {
        positive("min", min)?;
        positive("max", max)?;
        if count == 0 {
            return Err(ParameterError::EmptySpectrum);
        }
        if max < min {
            return Err(ParameterError::OutOfRange {
                name: "max",
                value: max,
                requirement: "not below min",
            });
        }
        Ok(())
    }

    fn spaced(count: usize, at: impl Fn(f64) -> f64) -> Vec<f64> {
        if count == 1 {
            return vec![at(0.0)];
        }
        let last = (count - 1) as f64;
        (0..count).map(|i| at(i as f64 / last)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_grid() {
        let f = FrequencyGrid::linear(0.05, 0.25, 5).frequencies().unwrap();
        assert_eq!(f.len(), 5);
        assert_relative_eq!(f[0], 0.05);
        assert_relative_eq!(f[2], 0.15, max_relative = 1e-14);
        assert_relative_eq!(f[4], 0.25, max_relative = 1e-14);
    }

    #[test]
    fn test_geometric_grid_has_constant_ratio() {
        let f = FrequencyGrid::geometric(0.04, 0.64, 5).frequencies().unwrap();
        for pair in f.windows(2) {
            assert_relative_eq!(pair[1] / pair[0], 2.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_invalid_grids() {
        assert!(FrequencyGrid::linear(0.2, 0.1, 3).frequencies().is_err());
        assert!(FrequencyGrid::geometric(0.0, 0.1, 3).frequencies().is_err());
        assert!(FrequencyGrid::linear(0.1, 0.2, 0).frequencies().is_err());
        assert!(FrequencyGrid::explicit(vec![0.1, -0.1]).frequencies().is_err());
        assert!(FrequencyGrid::explicit(vec![]).frequencies().is_err());
    }

    #[test]
    fn test_single_point_grid() {
        let f = FrequencyGrid::linear(0.1, 0.3, 1).frequencies().unwrap();
        assert_eq!(f, vec![0.1]);
    }
}

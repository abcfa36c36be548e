//! Error types.
//!
//! Invalid configuration and physically inconsistent dispersion parameters
//! are fatal and reported through these types. Recoverable conditions are
//! not errors; see [`crate::diagnostics`].

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FlexError>;

/// Invalid physical or spectral parameters, detected at construction.
#[derive(Debug, Error)]
pub enum ParameterError {
    /// A wave was described without a period or a frequency
    #[error("either a period or a frequency must be specified")]
    MissingFrequency,

    /// A scalar parameter is outside its admissible range
    #[error("{name} must be {requirement}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    /// A non-scalar spectral input does not broadcast to the common length
    #[error("spectral input `{name}` has length {len}, expected 1 or {expected}")]
    ShapeMismatch {
        name: &'static str,
        len: usize,
        expected: usize,
    },

    /// A spectrum with no component
    #[error("a spectrum needs at least one component")]
    EmptySpectrum,

    /// None of the alternative parametric spectrum descriptors was given
    #[error("at least one spectral parameter has to be provided")]
    MissingSpectralParameter,

    /// Ice denser than the ocean cannot float
    #[error("ice density {ice} kg/m³ is not below ocean density {ocean} kg/m³")]
    IceDenserThanWater { ice: f64, ocean: f64 },

    /// The ice draft reaches the sea floor
    #[error("ice draft {draft} m is not above the ocean depth {depth} m")]
    IceThickerThanDepth { draft: f64, depth: f64 },
}

/// Which limiting polynomial produced a seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedLimit {
    /// tanh → 1
    DeepWater,
    /// tanh(x) → x
    ShallowWater,
}

impl fmt::Display for SeedLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeepWater => write!(f, "deep-water"),
            Self::ShallowWater => write!(f, "shallow-water"),
        }
    }
}

/// Fatal failures of the dispersion relation solvers.
#[derive(Debug, Error)]
pub enum DispersionError {
    /// The seeding polynomial does not have exactly one positive real root
    #[error(
        "{limit} seed polynomial at f={frequency:.4} Hz has {found} positive real roots, \
         expected exactly one"
    )]
    AmbiguousSeed {
        limit: SeedLimit,
        frequency: f64,
        found: usize,
    },

    /// Ice inertia exceeds the hydrostatic restoring force
    #[error("mass loading exceeds the hydrostatic restoring force at f={frequency:.4} Hz")]
    NoRestoringForce { frequency: f64 },
}

/// Top-level error.
#[derive(Debug, Error)]
pub enum FlexError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Dispersion(#[from] DispersionError),

    /// A forcing component coincides with a free flexural mode of the ice
    #[error("forcing at f={frequency:.4} Hz resonates with the free flexural mode")]
    ResonantForcing { frequency: f64 },
}

/// Require a finite, strictly positive value.
pub(crate) fn positive(name: &'static str, value: f64) -> std::result::Result<f64, ParameterError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::OutOfRange {
            name,
            value,
            requirement: "finite and strictly positive",
        })
    }
}

/// Require a finite, non-negative value.
pub(crate) fn non_negative(
    name: &'static str,
    value: f64,
) -> std::result::Result<f64, ParameterError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::OutOfRange {
            name,
            value,
            requirement: "finite and non-negative",
        })
    }
}

/// Require a finite value.
pub(crate) fn finite(name: &'static str, value: f64) -> std::result::Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::OutOfRange {
            name,
            value,
            requirement: "finite",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_checks() {
        assert!(positive("depth", 10.0).is_ok());
        assert!(positive("depth", 0.0).is_err());
        assert!(positive("depth", f64::NAN).is_err());
        assert!(positive("depth", f64::INFINITY).is_err());

        assert!(non_negative("amplitude", 0.0).is_ok());
        assert!(non_negative("amplitude", -1e-12).is_err());

        assert!(finite("beta", -3.0).is_ok());
        assert!(finite("beta", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ParameterError::ShapeMismatch {
            name: "phases",
            len: 3,
            expected: 5,
        };
        assert_eq!(
            err.to_string(),
            "spectral input `phases` has length 3, expected 1 or 5"
        );

        let err: FlexError = DispersionError::AmbiguousSeed {
            limit: SeedLimit::ShallowWater,
            frequency: 0.1,
            found: 0,
        }
        .into();
        assert!(err.to_string().starts_with("shallow-water seed polynomial"));
    }
}

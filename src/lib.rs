//! # flexfrac-rs
//!
//! Flexural response and fracture energetics of sea-ice floes in waves.
//!
//! This crate provides the core building blocks:
//! - Monochromatic waves, discrete spectra and parametric spectra
//! - Free-surface and ice-covered dispersion relations
//! - Thin-plate flexure of a free-floating floe forced by a spectrum
//! - Elastic bending energy, and its split at a candidate fracture point
//!
//! Media are coupled in a fixed order: a [`DiscreteSpectrum`] over an
//! [`Ocean`] gives an [`OceanCoupled`], an [`Ice`] sheet on top of it gives
//! an [`IceCoupled`], and a [`Floe`] of that ice gives a [`FloeCoupled`].
//! Coupled objects are immutable and shared through `Arc`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use flexfrac_rs::{
//!     DiscreteSpectrum, DispersionKind, Floe, GRAVITY, Ice, IceCoupled, Ocean, OceanCoupled,
//!     Wave,
//! };
//!
//! let wave = Wave::from_period(1.0, 10.0).unwrap();
//! let spectrum = Arc::new(DiscreteSpectrum::from_waves(vec![wave]).unwrap());
//! let ocean = Arc::new(OceanCoupled::new(Ocean::default(), spectrum, GRAVITY).unwrap());
//! let ice = Arc::new(IceCoupled::new(Ice::default(), ocean, DispersionKind::default()).unwrap());
//! let floe = Floe::new(50.0, 100.0).unwrap().couple(ice).unwrap();
//!
//! let (left, right) = floe.split_energies(50.0).unwrap();
//! assert!(floe.energy() > 0.0 && left.is_finite() && right.is_finite());
//! ```

pub mod config;
pub mod diagnostics;
pub mod dispersion;
pub mod domain;
pub mod error;
pub mod floe;
pub mod ice;
pub mod ocean;
pub mod wave;

pub use config::{GRAVITY, SolverConfig};
pub use diagnostics::{Diagnosed, Diagnostic, Surface};
pub use dispersion::SeedRegime;
pub use domain::Domain;
pub use error::{DispersionError, FlexError, ParameterError, Result, SeedLimit};
pub use floe::{EnergyTerms, Floe, FloeCoupled};
pub use ice::{DispersionKind, Ice, IceCoupled};
pub use ocean::{Ocean, OceanCoupled, WaveCoupled};
pub use wave::{
    DiscreteSpectrum, FrequencyGrid, PiersonMoskowitz, PiersonMoskowitzBuilder, SpectralInput,
    Spectrum, Wave, WaveBuilder,
};

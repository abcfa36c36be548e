//! Floes and their flexural response to waves.
//!
//! A [`Floe`] is plain geometry. Coupling it with an [`IceCoupled`] sheet
//! solves the free-edge boundary-value problem
//!
//! ```text
//! L_e⁴ W'''' + W = F(x),   W''(0) = W'''(0) = W''(L) = W'''(L) = 0
//! ```
//!
//! and yields a [`FloeCoupled`], from which deflection, curvature, strain
//! and elastic energy are evaluated.

pub(crate) mod boundary;
mod coupled;
mod energy;
mod series;
pub(crate) mod integrals;

use std::sync::Arc;

pub use coupled::FloeCoupled;
pub use energy::EnergyTerms;

use crate::error::{ParameterError, Result, finite, positive};
use crate::ice::IceCoupled;

/// A 1-D ice floe: left edge (m) and length (m).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Floe {
    left_edge: f64,
    length: f64,
}

impl Floe {
    pub fn new(left_edge: f64, length: f64) -> std::result::Result<Self, ParameterError> {
        Ok(Self {
            left_edge: finite("left_edge", left_edge)?,
            length: positive("length", length)?,
        })
    }

    pub fn left_edge(&self) -> f64 {
        self.left_edge
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn right_edge(&self) -> f64 {
        self.left_edge + self.length
    }

    /// Solve the floe's response to the waves under `ice`, with the ice
    /// cover starting at the floe's own left edge.
    pub fn couple(&self, ice: Arc<IceCoupled>) -> Result<FloeCoupled> {
        FloeCoupled::new(*self, ice)
    }
}

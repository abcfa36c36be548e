//! Dispersion relation solvers.
//!
//! Every solver maps `α = ω²/g` to one real positive wavenumber per
//! frequency. Frequencies are independent; with the `parallel` feature
//! they are solved concurrently.

pub(crate) mod free_surface;
pub(crate) mod ice_covered;
pub(crate) mod newton;
pub(crate) mod polynomial;

pub use ice_covered::SeedRegime;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::diagnostics::Diagnostic;

/// A solved wavenumber and the diagnostic raised while solving it, if any.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Root {
    pub wavenumber: f64,
    pub diagnostic: Option<Diagnostic>,
}

impl Root {
    pub fn exact(wavenumber: f64) -> Self {
        Self {
            wavenumber,
            diagnostic: None,
        }
    }

    pub fn with_diagnostic(wavenumber: f64, diagnostic: Diagnostic) -> Self {
        Self {
            wavenumber,
            diagnostic: Some(diagnostic),
        }
    }
}

/// Wavenumbers and collected diagnostics for a spectrum.
pub(crate) type Solved = (Vec<f64>, Vec<Diagnostic>);

fn collect(roots: Vec<Root>) -> Solved {
    let mut diagnostics = Vec::new();
    let wavenumbers = roots
        .into_iter()
        .map(|root| {
            diagnostics.extend(root.diagnostic);
            root.wavenumber
        })
        .collect();
    (wavenumbers, diagnostics)
}

/// Solve every frequency index in `0..count`.
#[cfg(not(feature = "parallel"))]
pub(crate) fn map_frequencies<F, E>(count: usize, solve: F) -> Result<Solved, E>
where
    F: Fn(usize) -> Result<Root, E> + Sync + Send,
    E: Send,
{
    let roots = (0..count).map(solve).collect::<Result<Vec<_>, _>>()?;
    Ok(collect(roots))
}

/// Solve every frequency index in `0..count` in parallel.
#[cfg(feature = "parallel")]
pub(crate) fn map_frequencies<F, E>(count: usize, solve: F) -> Result<Solved, E>
where
    F: Fn(usize) -> Result<Root, E> + Sync + Send,
    E: Send,
{
    let roots = (0..count)
        .into_par_iter()
        .map(solve)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(collect(roots))
}

//! Recoverable conditions raised while building or solving.
//!
//! A [`Diagnostic`] never aborts a computation: the best available result is
//! kept and the condition is both logged through `tracing` and handed back to
//! the caller, who decides whether to continue.
//!
//! # Example
//!
//! ```
//! use flexfrac_rs::{Diagnostic, Wave};
//!
//! let built = Wave::builder(1.0).period(10.0).frequency(0.2).build().unwrap();
//! assert!(matches!(
//!     built.diagnostics()[0],
//!     Diagnostic::IgnoredParameter { ignored: "frequency", .. }
//! ));
//! let wave = built.into_inner();
//! assert_eq!(wave.period(), 10.0);
//! ```

use std::fmt;

/// Dispersion regime in which a root search ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    /// Free (open water) surface
    FreeSurface,
    /// Surface covered by an ice sheet
    IceCovered,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FreeSurface => write!(f, "free surface"),
            Self::IceCovered => write!(f, "ice-covered surface"),
        }
    }
}

/// A recoverable condition.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// Newton refinement stopped before meeting its tolerance.
    NonConvergence {
        surface: Surface,
        /// Wave frequency (Hz)
        frequency: f64,
        iterations: usize,
        /// Last residual of the dispersion relation
        residual: f64,
    },
    /// An input was overridden by a higher-precedence alternative.
    IgnoredParameter {
        ignored: &'static str,
        retained: &'static str,
    },
}

impl Diagnostic {
    /// Log the diagnostic once, at warn level.
    pub(crate) fn emit(self) -> Self {
        match &self {
            Self::NonConvergence {
                surface,
                frequency,
                iterations,
                residual,
            } => tracing::warn!(
                %surface,
                frequency,
                iterations,
                residual,
                "root finding did not converge"
            ),
            Self::IgnoredParameter { ignored, retained } => {
                tracing::warn!(ignored, retained, "redundant parameter ignored")
            }
        }
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonConvergence {
                surface,
                frequency,
                iterations,
                residual,
            } => write!(
                f,
                "root finding did not converge: {}, f={:.2e} Hz ({} iterations, residual {:.2e})",
                surface, frequency, iterations, residual
            ),
            Self::IgnoredParameter { ignored, retained } => {
                write!(f, "{} was specified, {} will be ignored", retained, ignored)
            }
        }
    }
}

/// A value together with the diagnostics raised while producing it.
#[derive(Clone, Debug)]
pub struct Diagnosed<T> {
    value: T,
    diagnostics: Vec<Diagnostic>,
}

impl<T> Diagnosed<T> {
    pub(crate) fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// The produced value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Diagnostics, in the order they were raised.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True if nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Discard the diagnostics.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Split into value and diagnostics.
    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }
}

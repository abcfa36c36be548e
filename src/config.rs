//! Numerical configuration.

/// Standard gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Limits for the scalar Newton refinement of dispersion roots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum Newton iterations before giving up with a diagnostic.
    pub max_iterations: usize,
    /// Relative step size below which the iteration has converged.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance: 1e-13,
        }
    }
}

impl SolverConfig {
    /// Set the iteration limit.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the relative step tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

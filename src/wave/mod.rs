//! Wave descriptions: monochromatic components, discrete superpositions and
//! the parametric spectra they are sampled from.

mod discrete;
mod grid;
mod monochromatic;
mod parametric;

pub use discrete::{DiscreteSpectrum, SpectralInput};
pub use grid::FrequencyGrid;
pub use monochromatic::{Wave, WaveBuilder};
pub use parametric::{PiersonMoskowitz, PiersonMoskowitzBuilder, Spectrum};

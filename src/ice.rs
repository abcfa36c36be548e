//! Ice sheet material and its coupling to an ocean and a wave spectrum.
//!
//! The sheet is a thin elastic plate of flexural rigidity
//!
//! ```text
//! D = E h³ / (12 (1 - ν²))
//! ```
//!
//! floating at hydrostatic equilibrium. Its elastic length
//! `L_e = (D / (ρ_w g))^¼` sets the scale of every coupled quantity.

use std::f64::consts::SQRT_2;
use std::sync::Arc;

use crate::diagnostics::Diagnostic;
use crate::dispersion::ice_covered::IceCoveredRelation;
use crate::dispersion::{self, free_surface};
use crate::error::{DispersionError, ParameterError, Result, positive};
use crate::ocean::{OceanCoupled, WaveCoupled};
use crate::wave::DiscreteSpectrum;

/// Material properties of an ice sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ice {
    density: f64,
    fracture_energy: f64,
    poissons_ratio: f64,
    thickness: f64,
    youngs_modulus: f64,
    quad_moment: f64,
    flex_rigidity: f64,
    frac_toughness: f64,
}

impl Default for Ice {
    fn default() -> Self {
        Self::derive(922.5, 1e5, 0.3, 1.0, 6e9)
    }
}

impl Ice {
    /// Ice of given density (kg/m³), fracture energy, Poisson's ratio,
    /// thickness (m) and Young's modulus (Pa).
    pub fn new(
        density: f64,
        fracture_energy: f64,
        poissons_ratio: f64,
        thickness: f64,
        youngs_modulus: f64,
    ) -> std::result::Result<Self, ParameterError> {
        let poissons_ratio = positive("poissons_ratio", poissons_ratio)?;
        if poissons_ratio > 0.5 {
            return Err(ParameterError::OutOfRange {
                name: "poissons_ratio",
                value: poissons_ratio,
                requirement: "at most 0.5",
            });
        }
        Ok(Self::derive(
            positive("density", density)?,
            positive("fracture_energy", fracture_energy)?,
            poissons_ratio,
            positive("thickness", thickness)?,
            positive("youngs_modulus", youngs_modulus)?,
        ))
    }

    fn derive(
        density: f64,
        fracture_energy: f64,
        poissons_ratio: f64,
        thickness: f64,
        youngs_modulus: f64,
    ) -> Self {
        let lateral = 1.0 - poissons_ratio * poissons_ratio;
        let quad_moment = thickness.powi(3) / (12.0 * lateral);
        Self {
            density,
            fracture_energy,
            poissons_ratio,
            thickness,
            youngs_modulus,
            quad_moment,
            flex_rigidity: quad_moment * youngs_modulus,
            frac_toughness: lateral * fracture_energy * fracture_energy / youngs_modulus,
        }
    }

    /// Same material with another thickness.
    pub fn with_thickness(&self, thickness: f64) -> std::result::Result<Self, ParameterError> {
        Self::new(
            self.density,
            self.fracture_energy,
            self.poissons_ratio,
            thickness,
            self.youngs_modulus,
        )
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn fracture_energy(&self) -> f64 {
        self.fracture_energy
    }

    pub fn poissons_ratio(&self) -> f64 {
        self.poissons_ratio
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn youngs_modulus(&self) -> f64 {
        self.youngs_modulus
    }

    /// h³ / (12 (1 - ν²)), in m³.
    pub fn quad_moment(&self) -> f64 {
        self.quad_moment
    }

    /// Flexural rigidity D in N·m.
    pub fn flex_rigidity(&self) -> f64 {
        self.flex_rigidity
    }

    /// (1 - ν²) G² / E.
    pub fn frac_toughness(&self) -> f64 {
        self.frac_toughness
    }
}

/// How the ice cover modifies the dispersion relation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispersionKind {
    /// Ice moves with the open-water waves.
    OpenWater,
    /// Free-surface waves loaded by the ice inertia only.
    MassLoading,
    /// Flexural-gravity waves, ice inertia neglected.
    Elastic,
    /// Flexural-gravity waves with ice inertia.
    #[default]
    ElasticMassLoading,
}

/// An ice sheet floating on a coupled ocean.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use flexfrac_rs::{
///     DiscreteSpectrum, DispersionKind, GRAVITY, Ice, IceCoupled, Ocean, OceanCoupled,
///     WaveCoupled,
/// };
///
/// let spectrum = Arc::new(DiscreteSpectrum::new(1.0, 0.1, 0.0, 0.0).unwrap());
/// let ocean = Arc::new(OceanCoupled::new(Ocean::default(), spectrum, GRAVITY).unwrap());
/// let ice = IceCoupled::new(Ice::default(), ocean.clone(), DispersionKind::default()).unwrap();
/// assert!(ice.wavenumbers()[0] < ocean.wavenumbers()[0]);
/// ```
#[derive(Clone, Debug)]
pub struct IceCoupled {
    ice: Ice,
    ocean: Arc<OceanCoupled>,
    kind: DispersionKind,
    draft: f64,
    depth_under_ice: f64,
    elastic_length: f64,
    wavenumbers: Vec<f64>,
    attenuations: Vec<f64>,
    diagnostics: Vec<Diagnostic>,
}

impl IceCoupled {
    /// Solve the dispersion relation selected by `kind` for every component
    /// of the ocean's spectrum.
    pub fn new(ice: Ice, ocean: Arc<OceanCoupled>, kind: DispersionKind) -> Result<Self> {
        let water = ocean.ocean();
        if ice.density >= water.density() {
            return Err(ParameterError::IceDenserThanWater {
                ice: ice.density,
                ocean: water.density(),
            }
            .into());
        }

        let draft = ice.thickness * ice.density / water.density();
        if draft >= water.depth() {
            return Err(ParameterError::IceThickerThanDepth {
                draft,
                depth: water.depth(),
            }
            .into());
        }

        let gravity = ocean.gravity();
        let depth_under_ice = water.depth() - draft;
        let elastic_length = (ice.flex_rigidity / (water.density() * gravity)).powf(0.25);
        let config = *ocean.config();
        let waves = ocean.spectrum().waves();

        let (wavenumbers, diagnostics) = match kind {
            DispersionKind::OpenWater => (ocean.wavenumbers().to_vec(), Vec::new()),
            DispersionKind::MassLoading => dispersion::map_frequencies(waves.len(), |i| {
                let wave = &waves[i];
                let alpha = wave.angular_frequency2() / gravity;
                let restoring = 1.0 - alpha * draft;
                if restoring <= 0.0 {
                    return Err(DispersionError::NoRestoringForce {
                        frequency: wave.frequency(),
                    });
                }
                Ok(free_surface::solve(
                    alpha / restoring,
                    depth_under_ice,
                    wave.frequency(),
                    &config,
                ))
            })?,
            DispersionKind::Elastic | DispersionKind::ElasticMassLoading => {
                let relation = IceCoveredRelation {
                    elastic_length,
                    draft,
                    depth_under_ice,
                    mass_loading: kind == DispersionKind::ElasticMassLoading,
                };
                dispersion::map_frequencies(waves.len(), |i| {
                    let wave = &waves[i];
                    relation.solve(
                        wave.angular_frequency2() / gravity,
                        wave.frequency(),
                        &config,
                    )
                })?
            }
        };

        let attenuations = wavenumbers
            .iter()
            .map(|k| k * k * ice.thickness / 4.0)
            .collect();

        tracing::debug!(?kind, elastic_length, draft, "ice coupled");

        Ok(Self {
            ice,
            ocean,
            kind,
            draft,
            depth_under_ice,
            elastic_length,
            wavenumbers,
            attenuations,
            diagnostics,
        })
    }

    /// Material properties.
    pub fn ice(&self) -> &Ice {
        &self.ice
    }

    /// The ocean (and spectrum) the sheet was coupled against.
    pub fn ocean(&self) -> &Arc<OceanCoupled> {
        &self.ocean
    }

    pub fn kind(&self) -> DispersionKind {
        self.kind
    }

    /// Submerged thickness in m.
    pub fn draft(&self) -> f64 {
        self.draft
    }

    /// Emerged thickness in m.
    pub fn freeboard(&self) -> f64 {
        self.ice.thickness - self.draft
    }

    /// Water depth below the sheet in m.
    pub fn depth_under_ice(&self) -> f64 {
        self.depth_under_ice
    }

    /// Elastic length L_e in m.
    pub fn elastic_length(&self) -> f64 {
        self.elastic_length
    }

    /// 1 / (√2 L_e), the spatial rate of the free flexural modes.
    pub fn reduced_elastic_number(&self) -> f64 {
        1.0 / (SQRT_2 * self.elastic_length)
    }

    /// Non-convergence diagnostics raised while solving.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl WaveCoupled for IceCoupled {
    fn spectrum(&self) -> &DiscreteSpectrum {
        self.ocean.spectrum()
    }

    fn wavenumbers(&self) -> &[f64] {
        &self.wavenumbers
    }

    fn attenuations(&self) -> Option<&[f64]> {
        Some(&self.attenuations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GRAVITY;
    use crate::error::FlexError;
    use crate::ocean::Ocean;
    use approx::assert_relative_eq;

    fn ocean(depth: f64, frequencies: Vec<f64>) -> Arc<OceanCoupled> {
        let spectrum = Arc::new(DiscreteSpectrum::new(1.0, frequencies, 0.0, 0.0).unwrap());
        Arc::new(OceanCoupled::new(Ocean::new(depth, 1025.0).unwrap(), spectrum, GRAVITY).unwrap())
    }

    #[test]
    fn test_derived_material_constants() {
        let ice = Ice::default();
        assert_relative_eq!(ice.quad_moment(), 1.0 / (12.0 * 0.91), max_relative = 1e-15);
        assert_relative_eq!(ice.flex_rigidity(), 6e9 / (12.0 * 0.91), max_relative = 1e-15);
        assert_relative_eq!(ice.frac_toughness(), 0.91 * 1e10 / 6e9, max_relative = 1e-15);

        let thin = ice.with_thickness(0.5).unwrap();
        assert_relative_eq!(thin.flex_rigidity(), ice.flex_rigidity() / 8.0, max_relative = 1e-15);
    }

    #[test]
    fn test_invalid_ice() {
        assert!(Ice::new(0.0, 1e5, 0.3, 1.0, 6e9).is_err());
        assert!(Ice::new(922.5, 1e5, 0.7, 1.0, 6e9).is_err());
        assert!(Ice::new(922.5, 1e5, 0.3, -1.0, 6e9).is_err());
    }

    #[test]
    fn test_geometry() {
        let ocean = ocean(100.0, vec![0.1]);
        let ice = IceCoupled::new(Ice::default(), ocean, DispersionKind::default()).unwrap();
        assert_relative_eq!(ice.draft(), 0.9, max_relative = 1e-14);
        assert_relative_eq!(ice.freeboard(), 0.1, max_relative = 1e-12);
        assert_relative_eq!(ice.depth_under_ice(), 99.1, max_relative = 1e-14);
        let expected = (Ice::default().flex_rigidity() / (1025.0 * GRAVITY)).powf(0.25);
        assert_relative_eq!(ice.elastic_length(), expected, max_relative = 1e-14);
    }

    #[test]
    fn test_physical_inconsistencies() {
        let heavy = Ice::new(1100.0, 1e5, 0.3, 1.0, 6e9).unwrap();
        let err = IceCoupled::new(heavy, ocean(100.0, vec![0.1]), DispersionKind::default())
            .unwrap_err();
        assert!(matches!(
            err,
            FlexError::Parameter(ParameterError::IceDenserThanWater { .. })
        ));

        let thick = Ice::default().with_thickness(3.0).unwrap();
        let err =
            IceCoupled::new(thick, ocean(2.0, vec![0.1]), DispersionKind::default()).unwrap_err();
        assert!(matches!(
            err,
            FlexError::Parameter(ParameterError::IceThickerThanDepth { .. })
        ));
    }

    #[test]
    fn test_attenuation_law() {
        let ice = IceCoupled::new(
            Ice::default(),
            ocean(300.0, vec![0.05, 0.1, 0.15]),
            DispersionKind::Elastic,
        )
        .unwrap();
        let alpha = ice.attenuations().unwrap();
        for (k, a) in ice.wavenumbers().iter().zip(alpha) {
            assert!(*a >= 0.0);
            assert_relative_eq!(*a, k * k / 4.0, max_relative = 1e-15);
        }
    }

    #[test]
    fn test_open_water_kind_reuses_ocean() {
        let ocean = ocean(50.0, vec![0.08, 0.12]);
        let ice =
            IceCoupled::new(Ice::default(), ocean.clone(), DispersionKind::OpenWater).unwrap();
        assert_eq!(ice.wavenumbers(), ocean.wavenumbers());
    }

    #[test]
    fn test_mass_loading_shortens_waves() {
        let ocean = ocean(50.0, vec![0.08, 0.12]);
        let loaded = IceCoupled::new(Ice::default(), ocean.clone(), DispersionKind::MassLoading)
            .unwrap();
        for (kl, ko) in loaded.wavenumbers().iter().zip(ocean.wavenumbers()) {
            assert!(kl > ko);
        }
    }

    #[test]
    fn test_mass_loading_without_restoring_force() {
        // ω²·draft/g > 1 for f = 1 Hz under 0.9 m of draft
        let ocean = ocean(50.0, vec![0.1, 1.0]);
        let err = IceCoupled::new(Ice::default(), ocean, DispersionKind::MassLoading).unwrap_err();
        assert!(matches!(
            err,
            FlexError::Dispersion(DispersionError::NoRestoringForce { .. })
        ));
    }

    #[test]
    fn test_flexure_lengthens_waves() {
        let ocean = ocean(1000.0, vec![0.1, 0.2]);
        let ice = IceCoupled::new(Ice::default(), ocean.clone(), DispersionKind::ElasticMassLoading)
            .unwrap();
        for (ki, ko) in ice.wavenumbers().iter().zip(ocean.wavenumbers()) {
            assert!(ki < ko);
        }
        assert!(ice.diagnostics().is_empty());
    }
}

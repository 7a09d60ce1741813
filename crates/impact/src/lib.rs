//! Closed-form impact estimates for near-Earth asteroids.
//!
//! The model treats the impactor as a uniform sphere and converts its
//! kinetic energy to megatons of TNT equivalent. Crater dimensions use a
//! fixed empirical multiplier rather than a full scaling law; see
//! [`CRATER_DIAMETER_MULTIPLIER`].

use std::f64::consts::PI;
use std::fmt;

use neo_core::constants::{JOULES_PER_MEGATON_TNT, ROCKY_ASTEROID_DENSITY_KG_M3};
use neo_core::units::kms_to_ms;
use thiserror::Error;

/// Crater diameter as a multiple of impactor diameter.
///
/// Empirical stand-in for the Melosh/Holsapple crater-scaling laws, which
/// also depend on impact velocity, surface gravity, and target material.
/// A factor of 20 is a reasonable middle ground for rocky impactors on land.
pub const CRATER_DIAMETER_MULTIPLIER: f64 = 20.0;

/// Simple bowl craters are roughly a quarter as deep as they are wide.
pub const CRATER_DEPTH_DIVISOR: f64 = 4.0;

/// Physical description of an incoming body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impactor {
    pub diameter_m: f64,
    pub velocity_km_s: f64,
    pub density_kg_m3: f64,
}

impl Impactor {
    /// Impactor with the default bulk density of a rocky (stony) asteroid.
    pub fn rocky(diameter_m: f64, velocity_km_s: f64) -> Self {
        Self {
            diameter_m,
            velocity_km_s,
            density_kg_m3: ROCKY_ASTEROID_DENSITY_KG_M3,
        }
    }

    /// Check that every field is finite and strictly positive.
    pub fn validate(&self) -> Result<(), ImpactError> {
        if !self.diameter_m.is_finite() || self.diameter_m <= 0.0 {
            return Err(ImpactError::InvalidDiameter(self.diameter_m));
        }
        if !self.velocity_km_s.is_finite() || self.velocity_km_s <= 0.0 {
            return Err(ImpactError::InvalidVelocity(self.velocity_km_s));
        }
        if !self.density_kg_m3.is_finite() || self.density_kg_m3 <= 0.0 {
            return Err(ImpactError::InvalidDensity(self.density_kg_m3));
        }
        Ok(())
    }

    /// Mass of the body modelled as a uniform sphere (kg).
    pub fn mass_kg(&self) -> f64 {
        let radius_m = self.diameter_m / 2.0;
        let volume_m3 = (4.0 / 3.0) * PI * radius_m * radius_m * radius_m;
        volume_m3 * self.density_kg_m3
    }
}

/// Qualitative severity class, banded by energy in megatons of TNT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Minimal,
    Small,
    Significant,
    Major,
    Catastrophic,
}

impl Severity {
    /// Band an impact energy into a severity class.
    ///
    /// Bands are half-open with the lower bound inclusive, so exactly
    /// 1 MT is `Significant` and exactly 10 000 MT is `Catastrophic`.
    pub fn from_megatons(energy_megatons: f64) -> Self {
        if energy_megatons < 0.001 {
            Severity::Minimal
        } else if energy_megatons < 1.0 {
            Severity::Small
        } else if energy_megatons < 100.0 {
            Severity::Significant
        } else if energy_megatons < 10_000.0 {
            Severity::Major
        } else {
            Severity::Catastrophic
        }
    }

    /// Short machine-friendly label, used in CSV exports.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Minimal => "minimal",
            Severity::Small => "small",
            Severity::Significant => "significant",
            Severity::Major => "major",
            Severity::Catastrophic => "catastrophic",
        }
    }

    /// Fixed human-readable assessment rendered verbatim by front-ends.
    pub fn description(&self) -> &'static str {
        match self {
            Severity::Minimal => "Minimal impact — would likely burn up in atmosphere",
            Severity::Small => "Small impact — local damage within several kilometers",
            Severity::Significant => "Significant impact — regional destruction",
            Severity::Major => "Major impact — continental-scale devastation",
            Severity::Catastrophic => "Catastrophic impact — potential mass extinction event",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Output of a single impact evaluation. All quantities are derived; no
/// state is retained between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactResult {
    pub kinetic_energy_j: f64,
    pub energy_megatons: f64,
    pub crater_diameter_m: f64,
    pub crater_depth_m: f64,
    pub severity: Severity,
}

impl ImpactResult {
    /// Fixed severity string for this result.
    pub fn description(&self) -> &'static str {
        self.severity.description()
    }
}

/// Invalid numeric input. The calculator rejects non-finite or
/// non-positive parameters instead of letting impossible energies flow
/// downstream.
#[derive(Debug, Error, PartialEq)]
pub enum ImpactError {
    #[error("impactor diameter must be positive and finite, got {0} m")]
    InvalidDiameter(f64),
    #[error("impact velocity must be positive and finite, got {0} km/s")]
    InvalidVelocity(f64),
    #[error("impactor density must be positive and finite, got {0} kg/m³")]
    InvalidDensity(f64),
}

/// Evaluate the impact of a body hitting the surface at its approach speed.
///
/// Deterministic and side-effect free: kinetic energy from the spherical
/// mass, TNT conversion, then the empirical crater dimensions. Crater depth
/// is exactly a quarter of crater diameter and crater diameter exactly
/// twenty times the impactor diameter.
pub fn compute_impact(impactor: &Impactor) -> Result<ImpactResult, ImpactError> {
    impactor.validate()?;

    let mass_kg = impactor.mass_kg();
    let velocity_m_s = kms_to_ms(impactor.velocity_km_s);
    let kinetic_energy_j = 0.5 * mass_kg * velocity_m_s * velocity_m_s;
    let energy_megatons = kinetic_energy_j / JOULES_PER_MEGATON_TNT;

    let crater_diameter_m = impactor.diameter_m * CRATER_DIAMETER_MULTIPLIER;
    let crater_depth_m = crater_diameter_m / CRATER_DEPTH_DIVISOR;

    Ok(ImpactResult {
        kinetic_energy_j,
        energy_megatons,
        crater_diameter_m,
        crater_depth_m,
        severity: Severity::from_megatons(energy_megatons),
    })
}

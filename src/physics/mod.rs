//! Impact physics for a spherical stony impactor.
//!
//! Closed-form estimates only: the projectile is a sphere of uniform density
//! and all of its kinetic energy is released at the surface. Radii derived
//! from the energy follow cube-root yield scaling and are capped so that
//! absurd inputs still produce displayable numbers.

pub mod surface_effects;

#[cfg(test)]
mod proptest_physics;

use serde::{Deserialize, Serialize};

use crate::types::{IMPACTOR_DENSITY, joules_to_megatons, km_s_to_m_s};

pub use surface_effects::{CraterEffect, Severity, TsunamiEffect};

/// Upper bound for the devastation radius (km).
pub const MAX_DEVASTATION_RADIUS_KM: f64 = 500.0;

/// Upper bound for the recommended evacuation radius (km).
pub const MAX_EVACUATION_RADIUS_KM: f64 = 200.0;

/// Devastation radius per cube root of megaton (km).
const DEVASTATION_KM_PER_CBRT_MT: f64 = 2.0;

/// Air blast (1 psi overpressure) radius per cube root of megaton (km).
const AIR_BLAST_KM_PER_CBRT_MT: f64 = 2.2;

/// Errors for impactor parameters that cannot describe a physical body.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("diameter must be positive and finite, got {0}")]
    InvalidDiameter(f64),

    #[error("velocity must be positive and finite, got {0}")]
    InvalidVelocity(f64),
}

/// Validated impactor parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Impactor {
    /// Diameter in meters.
    pub diameter_m: f64,
    /// Entry velocity in km/s.
    pub velocity_km_s: f64,
}

impl Impactor {
    pub fn new(diameter_m: f64, velocity_km_s: f64) -> Result<Self, PhysicsError> {
        if !(diameter_m.is_finite() && diameter_m > 0.0) {
            return Err(PhysicsError::InvalidDiameter(diameter_m));
        }
        if !(velocity_km_s.is_finite() && velocity_km_s > 0.0) {
            return Err(PhysicsError::InvalidVelocity(velocity_km_s));
        }
        Ok(Self {
            diameter_m,
            velocity_km_s,
        })
    }

    /// Mass in kilograms.
    pub fn mass_kg(&self) -> f64 {
        mass_kg(self.diameter_m)
    }

    /// Kinetic energy in joules.
    pub fn energy_joules(&self) -> f64 {
        kinetic_energy_joules(self.diameter_m, self.velocity_km_s)
    }

    /// Kinetic energy in megatons of TNT.
    pub fn energy_megatons(&self) -> f64 {
        joules_to_megatons(self.energy_joules())
    }
}

/// Mass of a sphere of impactor density.
///
/// m = ρ · (4/3)π r³, r = diameter / 2
pub fn mass_kg(diameter_m: f64) -> f64 {
    let radius = diameter_m / 2.0;
    IMPACTOR_DENSITY * (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3)
}

/// Kinetic energy E = ½mv² with the velocity given in km/s.
pub fn kinetic_energy_joules(diameter_m: f64, velocity_km_s: f64) -> f64 {
    let v = km_s_to_m_s(velocity_km_s);
    0.5 * mass_kg(diameter_m) * v * v
}

/// Kinetic energy in megatons of TNT.
pub fn kinetic_energy_megatons(diameter_m: f64, velocity_km_s: f64) -> f64 {
    joules_to_megatons(kinetic_energy_joules(diameter_m, velocity_km_s))
}

/// Seismic moment magnitude of the ground shaking caused by the impact.
///
/// M = 0.67 · log10(E) − 5.87 with E in joules, floored at zero.
pub fn seismic_magnitude(energy_joules: f64) -> f64 {
    if energy_joules <= 0.0 {
        return 0.0;
    }
    (0.67 * energy_joules.log10() - 5.87).max(0.0)
}

/// Radius of the 1 psi overpressure ring (km).
pub fn air_blast_radius_km(energy_mt: f64) -> f64 {
    AIR_BLAST_KM_PER_CBRT_MT * energy_mt.max(0.0).cbrt()
}

/// Radius of near-total destruction (km), capped at 500 km.
pub fn devastation_radius_km(energy_mt: f64) -> f64 {
    (DEVASTATION_KM_PER_CBRT_MT * energy_mt.max(0.0).cbrt()).min(MAX_DEVASTATION_RADIUS_KM)
}

/// Recommended evacuation radius (km), twice the devastation radius and capped at 200 km.
pub fn evacuation_radius_km(energy_mt: f64) -> f64 {
    (2.0 * devastation_radius_km(energy_mt)).min(MAX_EVACUATION_RADIUS_KM)
}

/// Overall threat classification derived from the released energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThreatLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl ThreatLevel {
    pub fn from_energy(energy_mt: f64) -> Self {
        if energy_mt < 1.0 {
            ThreatLevel::Low
        } else if energy_mt < 100.0 {
            ThreatLevel::Moderate
        } else if energy_mt < 10_000.0 {
            ThreatLevel::High
        } else {
            ThreatLevel::Extreme
        }
    }
}

/// Surface-independent consequences of an impact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseConsequences {
    pub energy_joules: f64,
    pub energy_mt: f64,
    pub seismic_magnitude: f64,
    pub air_blast_radius_km: f64,
    pub devastation_radius_km: f64,
    pub evacuation_radius_km: f64,
    pub threat_level: ThreatLevel,
}

impl BaseConsequences {
    pub fn for_impactor(impactor: &Impactor) -> Self {
        let energy_joules = impactor.energy_joules();
        let energy_mt = joules_to_megatons(energy_joules);
        Self {
            energy_joules,
            energy_mt,
            seismic_magnitude: seismic_magnitude(energy_joules),
            air_blast_radius_km: air_blast_radius_km(energy_mt),
            devastation_radius_km: devastation_radius_km(energy_mt),
            evacuation_radius_km: evacuation_radius_km(energy_mt),
            threat_level: ThreatLevel::from_energy(energy_mt),
        }
    }
}

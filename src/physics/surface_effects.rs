//! Surface-specific effects: tsunamis for ocean impacts, craters and
//! fireballs for land impacts.
//!
//! Every quantity scales with the released energy and is clamped to a fixed
//! ceiling.

use serde::{Deserialize, Serialize};

/// Maximum tsunami wave height (m).
pub const MAX_TSUNAMI_HEIGHT_M: f64 = 100.0;

/// Maximum tsunami propagation range (km).
pub const MAX_TSUNAMI_RANGE_KM: f64 = 2000.0;

/// Maximum range of felt seismic shaking for land impacts (km).
pub const MAX_SEISMIC_RANGE_KM: f64 = 5000.0;

const TSUNAMI_HEIGHT_M_PER_MT: f64 = 0.01;
const TSUNAMI_RANGE_KM_PER_MT: f64 = 0.2;
const FIREBALL_KM_PER_SQRT_MT: f64 = 0.1;
const SEISMIC_RANGE_KM_PER_MT: f64 = 0.05;
const CRATER_KM_PER_CBRT_MT: f64 = 0.2;
const CRATER_DEPTH_RATIO: f64 = 0.2;

/// Discrete severity tier by released energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Local,
    Regional,
    Continental,
    Global,
}

impl Severity {
    pub fn from_energy(energy_mt: f64) -> Self {
        if energy_mt < 1.0 {
            Severity::Local
        } else if energy_mt < 100.0 {
            Severity::Regional
        } else if energy_mt < 10_000.0 {
            Severity::Continental
        } else {
            Severity::Global
        }
    }
}

/// Effects of an ocean impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TsunamiEffect {
    /// Initial wave height (m), at most 100.
    pub wave_height_m: f64,
    /// Distance over which the wave stays dangerous (km), at most 2000.
    pub range_km: f64,
    /// Severity of coastal flooding.
    pub coastal_severity: Severity,
}

impl TsunamiEffect {
    pub fn from_energy(energy_mt: f64) -> Self {
        let energy_mt = energy_mt.max(0.0);
        Self {
            wave_height_m: (TSUNAMI_HEIGHT_M_PER_MT * energy_mt).min(MAX_TSUNAMI_HEIGHT_M),
            range_km: (TSUNAMI_RANGE_KM_PER_MT * energy_mt).min(MAX_TSUNAMI_RANGE_KM),
            coastal_severity: Severity::from_energy(energy_mt),
        }
    }
}

/// Effects of a land impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CraterEffect {
    /// Final crater diameter (km).
    pub diameter_km: f64,
    /// Crater depth (km).
    pub depth_km: f64,
    /// Fireball radius (km).
    pub fireball_radius_km: f64,
    /// Range of felt ground shaking (km), at most 5000.
    pub seismic_range_km: f64,
    pub severity: Severity,
}

impl CraterEffect {
    pub fn from_energy(energy_mt: f64) -> Self {
        let energy_mt = energy_mt.max(0.0);
        let diameter_km = CRATER_KM_PER_CBRT_MT * energy_mt.cbrt();
        Self {
            diameter_km,
            depth_km: diameter_km * CRATER_DEPTH_RATIO,
            fireball_radius_km: FIREBALL_KM_PER_SQRT_MT * energy_mt.sqrt(),
            seismic_range_km: (SEISMIC_RANGE_KM_PER_MT * energy_mt).min(MAX_SEISMIC_RANGE_KM),
            severity: Severity::from_energy(energy_mt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tsunami_scales_linearly_below_caps() {
        let t = TsunamiEffect::from_energy(1000.0);
        assert_relative_eq!(t.wave_height_m, 10.0);
        assert_relative_eq!(t.range_km, 200.0);
        assert_eq!(t.coastal_severity, Severity::Continental);
    }

    #[test]
    fn test_tsunami_clamped() {
        let t = TsunamiEffect::from_energy(1e9);
        assert_relative_eq!(t.wave_height_m, MAX_TSUNAMI_HEIGHT_M);
        assert_relative_eq!(t.range_km, MAX_TSUNAMI_RANGE_KM);
        assert_eq!(t.coastal_severity, Severity::Global);
    }

    #[test]
    fn test_crater_scaling() {
        let c = CraterEffect::from_energy(1000.0);
        assert_relative_eq!(c.diameter_km, 2.0, max_relative = 1e-12);
        assert_relative_eq!(c.depth_km, 0.4, max_relative = 1e-12);
        assert_relative_eq!(c.fireball_radius_km, 0.1 * 1000.0_f64.sqrt());
        assert_relative_eq!(c.seismic_range_km, 50.0);
    }

    #[test]
    fn test_negative_energy_is_harmless() {
        let c = CraterEffect::from_energy(-5.0);
        assert_eq!(c.diameter_km, 0.0);
        assert_eq!(c.severity, Severity::Local);
        let t = TsunamiEffect::from_energy(-5.0);
        assert_eq!(t.wave_height_m, 0.0);
    }
}

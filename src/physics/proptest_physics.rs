//! Property-based tests for impact physics using proptest.
//!
//! These tests verify monotonicity and the hard output ceilings across the
//! whole range of impactor sizes and speeds.

use proptest::prelude::*;

use super::surface_effects::{
    CraterEffect, MAX_SEISMIC_RANGE_KM, MAX_TSUNAMI_HEIGHT_M, MAX_TSUNAMI_RANGE_KM, TsunamiEffect,
};
use super::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Energy grows with diameter at fixed velocity.
    #[test]
    fn prop_energy_increases_with_diameter(
        diameter in 1.0f64..50_000.0,
        factor in 1.001f64..10.0,
        velocity in 0.1f64..100.0,
    ) {
        let smaller = kinetic_energy_megatons(diameter, velocity);
        let larger = kinetic_energy_megatons(diameter * factor, velocity);
        prop_assert!(
            larger > smaller,
            "energy not increasing in diameter: {} -> {} at d={}, factor={}",
            smaller, larger, diameter, factor
        );
    }

    /// Energy grows with velocity at fixed diameter.
    #[test]
    fn prop_energy_increases_with_velocity(
        diameter in 1.0f64..50_000.0,
        velocity in 0.1f64..100.0,
        factor in 1.001f64..10.0,
    ) {
        let slower = kinetic_energy_megatons(diameter, velocity);
        let faster = kinetic_energy_megatons(diameter, velocity * factor);
        prop_assert!(faster > slower);
    }

    /// Energy in megatons matches the closed-form expression.
    #[test]
    fn prop_energy_matches_formula(
        diameter in 1.0f64..50_000.0,
        velocity in 0.1f64..100.0,
    ) {
        let r = diameter / 2.0;
        let v = velocity * 1000.0;
        let expected = 0.5 * 3000.0 * (4.0 / 3.0) * std::f64::consts::PI * r.powi(3) * v * v
            / 4.184e15;
        let actual = kinetic_energy_megatons(diameter, velocity);
        let relative_error = ((actual - expected) / expected).abs();
        prop_assert!(relative_error < 1e-12, "relative error {}", relative_error);
    }

    /// Radii and surface effects never exceed their ceilings.
    #[test]
    fn prop_outputs_respect_caps(
        diameter in 1.0f64..100_000.0,
        velocity in 0.1f64..100.0,
    ) {
        let impactor = Impactor::new(diameter, velocity).expect("valid impactor");
        let base = BaseConsequences::for_impactor(&impactor);
        prop_assert!(base.devastation_radius_km <= MAX_DEVASTATION_RADIUS_KM);
        prop_assert!(base.evacuation_radius_km <= MAX_EVACUATION_RADIUS_KM);

        let tsunami = TsunamiEffect::from_energy(base.energy_mt);
        prop_assert!(tsunami.wave_height_m <= MAX_TSUNAMI_HEIGHT_M);
        prop_assert!(tsunami.range_km <= MAX_TSUNAMI_RANGE_KM);

        let crater = CraterEffect::from_energy(base.energy_mt);
        prop_assert!(crater.seismic_range_km <= MAX_SEISMIC_RANGE_KM);
    }

    /// Seismic magnitude never decreases as energy grows.
    #[test]
    fn prop_seismic_magnitude_monotonic(
        energy in 1.0f64..1e30,
        factor in 1.0f64..1000.0,
    ) {
        prop_assert!(seismic_magnitude(energy * factor) >= seismic_magnitude(energy));
    }

    /// Severity and threat tiers never go down as energy grows.
    #[test]
    fn prop_tiers_monotonic(
        energy in 0.0f64..1e8,
        factor in 1.0f64..100.0,
    ) {
        prop_assert!(Severity::from_energy(energy * factor) >= Severity::from_energy(energy));
        prop_assert!(ThreatLevel::from_energy(energy * factor) >= ThreatLevel::from_energy(energy));
    }
}

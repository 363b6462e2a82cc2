//! UI logic tests for labels and number formatting.
//!
//! Tests pure functions the panels are built from.

use std::collections::HashSet;

use impact_lab::i18n::{Locale, TextKey, action_key, severity_key, threat_key, tr};
use impact_lab::impact::RecommendedAction;
use impact_lab::physics::{Severity, ThreatLevel};
use impact_lab::ui::format;

// ============================================================================
// Translated labels
// ============================================================================

#[test]
fn test_threat_labels_distinct_per_locale() {
    let levels = [
        ThreatLevel::Low,
        ThreatLevel::Moderate,
        ThreatLevel::High,
        ThreatLevel::Extreme,
    ];
    for locale in Locale::ALL {
        let labels: HashSet<_> = levels.iter().map(|&l| tr(locale, threat_key(l))).collect();
        assert_eq!(labels.len(), levels.len(), "{locale:?}");
    }
}

#[test]
fn test_action_and_severity_labels_present() {
    let actions = [
        RecommendedAction::ShelterInPlace,
        RecommendedAction::LocalEvacuation,
        RecommendedAction::RegionalEvacuation,
        RecommendedAction::Deflection,
    ];
    let severities = [
        Severity::Local,
        Severity::Regional,
        Severity::Continental,
        Severity::Global,
    ];
    for locale in Locale::ALL {
        for action in actions {
            assert!(!tr(locale, action_key(action)).is_empty());
        }
        for severity in severities {
            assert!(!tr(locale, severity_key(severity)).is_empty());
        }
    }
}

#[test]
fn test_spanish_hint_translated() {
    assert_ne!(
        tr(Locale::Es, TextKey::ClickToImpact),
        tr(Locale::En, TextKey::ClickToImpact)
    );
}

// ============================================================================
// Number formatting
// ============================================================================

#[test]
fn test_energy_scales() {
    assert_eq!(format::energy(Locale::En, 0.0005), "500.0 t TNT");
    assert_eq!(format::energy(Locale::En, 0.5), "500.0 kt TNT");
    assert_eq!(format::energy(Locale::En, 15.0), "15.00 Mt TNT");
    assert_eq!(format::energy(Locale::En, 75_000_000.0), "75,000.00 Gt TNT");
}

#[test]
fn test_energy_uses_locale_separators() {
    assert_eq!(format::energy(Locale::Es, 2_500.0), "2,50 Gt TNT");
}

#[test]
fn test_distance_and_velocity() {
    assert_eq!(format::distance_km(Locale::En, 0.25), "250 m");
    assert_eq!(format::distance_km(Locale::En, 1_234.0), "1,234.0 km");
    assert_eq!(format::velocity(Locale::Es, 19.0), "19,0 km/s");
}

#[test]
fn test_population_estimates_rounded() {
    assert_eq!(format::population(Locale::En, 42), "42");
    assert_eq!(format::population(Locale::En, 12_349), "12,300");
    assert_eq!(format::population(Locale::En, 3_456_789), "3,460,000");
}

//! Impact events: everything the sidebar shows for one map click.
//!
//! An [`ImpactEvent`] is assembled from a click position, the projectile
//! ([`ImpactSource`]) and the surface classification. It is replaced
//! wholesale on every click and cleared on reset.

pub mod pipeline;

use serde::{Deserialize, Serialize};

use crate::physics::{
    BaseConsequences, CraterEffect, Impactor, PhysicsError, ThreatLevel, TsunamiEffect,
};
use crate::population;
use crate::surface::SurfaceInfo;
use crate::types::{LatLng, METERS_PER_KM};

pub use pipeline::{ImpactPipelinePlugin, ImpactRequest, SurfaceLookup};

/// Name given to slider-configured projectiles.
pub const CUSTOM_SOURCE_NAME: &str = "Custom";

/// The projectile that hits the ground.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSource {
    pub name: String,
    /// Diameter in meters.
    pub diameter: f64,
    /// Velocity in km/s.
    pub velocity: f64,
    #[serde(default)]
    pub hazardous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_approach_date: Option<String>,
    /// Miss distance in km.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miss_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_magnitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jpl_url: Option<String>,
}

impl ImpactSource {
    /// A slider-configured projectile with no catalogue data.
    pub fn custom(diameter: f64, velocity: f64) -> Self {
        Self {
            name: CUSTOM_SOURCE_NAME.to_string(),
            diameter,
            velocity,
            hazardous: false,
            close_approach_date: None,
            miss_distance: None,
            absolute_magnitude: None,
            jpl_url: None,
        }
    }

    pub fn impactor(&self) -> Result<Impactor, PhysicsError> {
        Impactor::new(self.diameter, self.velocity)
    }
}

/// Physical consequences of the impact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consequences {
    /// Released energy in megatons of TNT.
    pub impact_energy: f64,
    /// Seismic moment magnitude.
    pub seismic_effect: f64,
    /// Air blast (1 psi) radius in km.
    pub air_blast: f64,
    /// Devastation radius in km.
    pub devastation_radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsunami: Option<TsunamiEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crater: Option<CraterEffect>,
}

/// Recommended response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mitigation {
    pub threat_level: ThreatLevel,
    pub recommended_action: RecommendedAction,
    /// Evacuation radius in km.
    pub evacuation_radius: f64,
}

/// What authorities should do, ordered by escalation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendedAction {
    /// Monitor and shelter away from windows.
    ShelterInPlace,
    /// Evacuate the evacuation radius.
    LocalEvacuation,
    /// Evacuate the region and prepare for a deflection mission.
    RegionalEvacuation,
    /// A deflection mission is the only adequate response.
    Deflection,
}

impl RecommendedAction {
    pub fn for_threat(threat: ThreatLevel) -> Self {
        match threat {
            ThreatLevel::Low => RecommendedAction::ShelterInPlace,
            ThreatLevel::Moderate => RecommendedAction::LocalEvacuation,
            ThreatLevel::High => RecommendedAction::RegionalEvacuation,
            ThreatLevel::Extreme => RecommendedAction::Deflection,
        }
    }
}

/// Everything known about the impact beyond its position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactDetails {
    pub source: ImpactSource,
    pub consequences: Consequences,
    pub mitigation: Mitigation,
    pub surface: SurfaceInfo,
    /// Estimated people inside the devastation radius.
    pub affected_population: u64,
}

/// A computed impact at a point on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactEvent {
    pub position: LatLng,
    /// Devastation radius in meters, drawn around the impact point.
    pub radius: f64,
    pub details: ImpactDetails,
}

impl ImpactEvent {
    /// Compute the event for a projectile hitting `position`.
    pub fn compute(
        position: LatLng,
        source: ImpactSource,
        surface: SurfaceInfo,
    ) -> Result<Self, PhysicsError> {
        let impactor = source.impactor()?;
        let base = BaseConsequences::for_impactor(&impactor);

        // Fallback classifications are water, so unknown surfaces get tsunami effects.
        let (tsunami, crater) = if surface.is_water() {
            (Some(TsunamiEffect::from_energy(base.energy_mt)), None)
        } else {
            (None, Some(CraterEffect::from_energy(base.energy_mt)))
        };

        let country = surface.country.as_ref().and_then(|info| {
            population::lookup(info.code.as_deref(), Some(info.name.as_str()))
        });
        let affected_population =
            population::estimate_for_impact(country, base.devastation_radius_km);

        Ok(Self {
            position,
            radius: base.devastation_radius_km * METERS_PER_KM,
            details: ImpactDetails {
                source,
                consequences: Consequences {
                    impact_energy: base.energy_mt,
                    seismic_effect: base.seismic_magnitude,
                    air_blast: base.air_blast_radius_km,
                    devastation_radius: base.devastation_radius_km,
                    tsunami,
                    crater,
                },
                mitigation: Mitigation {
                    threat_level: base.threat_level,
                    recommended_action: RecommendedAction::for_threat(base.threat_level),
                    evacuation_radius: base.evacuation_radius_km,
                },
                surface,
                affected_population,
            },
        })
    }

    pub fn radius_km(&self) -> f64 {
        self.radius / METERS_PER_KM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Confidence, CountryInfo, SurfaceType};
    use approx::assert_relative_eq;

    fn land_in(code: &str, name: &str) -> SurfaceInfo {
        SurfaceInfo {
            surface: SurfaceType::Land,
            description: format!("Land in {name}"),
            location: name.to_string(),
            confidence: Confidence::High,
            source: "test".to_string(),
            country: Some(CountryInfo {
                name: name.to_string(),
                code: Some(code.to_string()),
            }),
        }
    }

    #[test]
    fn test_water_impact_has_tsunami_only() {
        let position = LatLng::new(30.0, -40.0);
        let event = ImpactEvent::compute(
            position,
            ImpactSource::custom(550.0, 20.0),
            SurfaceInfo::fallback(position),
        )
        .expect("valid source");

        let consequences = &event.details.consequences;
        assert!(consequences.tsunami.is_some());
        assert!(consequences.crater.is_none());
        assert_eq!(event.details.affected_population, 0);
        assert_eq!(event.details.mitigation.threat_level, ThreatLevel::Extreme);
        assert_eq!(
            event.details.mitigation.recommended_action,
            RecommendedAction::Deflection
        );
    }

    #[test]
    fn test_land_impact_has_crater_and_population() {
        let position = LatLng::new(48.85, 2.35);
        let event = ImpactEvent::compute(
            position,
            ImpactSource::custom(60.0, 27.0),
            land_in("FR", "France"),
        )
        .expect("valid source");

        let consequences = &event.details.consequences;
        assert!(consequences.crater.is_some());
        assert!(consequences.tsunami.is_none());

        let density = population::find_by_code("FR").expect("France").density();
        let expected = population::affected_population(density, consequences.devastation_radius);
        assert_eq!(event.details.affected_population, expected);
        assert!(expected > 0);
    }

    #[test]
    fn test_radius_is_devastation_radius_in_meters() {
        let position = LatLng::new(0.0, 0.0);
        let event = ImpactEvent::compute(
            position,
            ImpactSource::custom(100.0, 17.0),
            SurfaceInfo::fallback(position),
        )
        .expect("valid source");
        assert_relative_eq!(
            event.radius_km(),
            event.details.consequences.devastation_radius
        );
    }

    #[test]
    fn test_invalid_source_rejected() {
        let position = LatLng::new(0.0, 0.0);
        let result = ImpactEvent::compute(
            position,
            ImpactSource::custom(-1.0, 17.0),
            SurfaceInfo::fallback(position),
        );
        assert!(matches!(result, Err(PhysicsError::InvalidDiameter(_))));
    }

    #[test]
    fn test_unknown_country_code_falls_back_to_name() {
        let position = LatLng::new(35.7, 139.7);
        let mut surface = land_in("ZZ", "Japan");
        surface.confidence = Confidence::Medium;
        let event = ImpactEvent::compute(position, ImpactSource::custom(60.0, 27.0), surface)
            .expect("valid source");
        assert!(event.details.affected_population > 0);
    }
}

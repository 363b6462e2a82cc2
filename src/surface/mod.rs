//! Land/water classification of an impact point.
//!
//! Classification goes through a reverse-geocoding service (see
//! [`geocoder`]). The lookup is best effort: any failure produces
//! [`SurfaceInfo::fallback`], a low-confidence "assumed water" answer, and is
//! never reported to the user as an error.

pub mod geocoder;

use serde::{Deserialize, Serialize};

use crate::types::LatLng;

pub use geocoder::{GeocoderConfig, SurfaceError, classify, fetch_surface};

/// Source label used for fallback classifications.
pub const FALLBACK_SOURCE: &str = "fallback";

/// What lies under the impact point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceType {
    Land,
    Water,
}

/// How much the classification can be trusted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Map a geocoder confidence score (0-10) to a tier.
    pub fn from_score(score: u8) -> Self {
        match score {
            7.. => Confidence::High,
            4..=6 => Confidence::Medium,
            _ => Confidence::Low,
        }
    }
}

/// Country under the impact point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub name: String,
    /// ISO 3166-1 alpha-2 code, upper case.
    pub code: Option<String>,
}

/// Result of classifying one impact point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceInfo {
    pub surface: SurfaceType,
    /// Human-readable summary, e.g. "Land near Lyon, France".
    pub description: String,
    /// Formatted place name or coordinates.
    pub location: String,
    pub confidence: Confidence,
    /// Name of the service that produced the answer.
    pub source: String,
    pub country: Option<CountryInfo>,
}

impl SurfaceInfo {
    /// Low-confidence default used whenever classification fails.
    pub fn fallback(position: LatLng) -> Self {
        Self {
            surface: SurfaceType::Water,
            description: "Unknown location (assumed water)".to_string(),
            location: position.to_string(),
            confidence: Confidence::Low,
            source: FALLBACK_SOURCE.to_string(),
            country: None,
        }
    }

    pub fn is_water(&self) -> bool {
        self.surface == SurfaceType::Water
    }

    /// Whether this answer came from the fallback path.
    pub fn is_fallback(&self) -> bool {
        self.source == FALLBACK_SOURCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(Confidence::from_score(10), Confidence::High);
        assert_eq!(Confidence::from_score(7), Confidence::High);
        assert_eq!(Confidence::from_score(6), Confidence::Medium);
        assert_eq!(Confidence::from_score(4), Confidence::Medium);
        assert_eq!(Confidence::from_score(3), Confidence::Low);
        assert_eq!(Confidence::from_score(0), Confidence::Low);
    }

    #[test]
    fn test_fallback_is_low_confidence_water() {
        let info = SurfaceInfo::fallback(LatLng::new(12.5, -40.0));
        assert!(info.is_water());
        assert!(info.is_fallback());
        assert_eq!(info.confidence, Confidence::Low);
        assert!(info.country.is_none());
        assert!(info.location.contains("12.500"));
    }
}

//! Reverse-geocoding client (OpenCage JSON API).
//!
//! One GET per classification, bounded by a 3 second timeout covering
//! connect, headers and body.

use std::time::Duration;

use bevy::log::{debug, warn};
use serde::Deserialize;

use super::{Confidence, CountryInfo, SurfaceInfo, SurfaceType};
use crate::types::LatLng;

/// Default reverse-geocoding endpoint.
pub const OPENCAGE_ENDPOINT: &str = "https://api.opencagedata.com/geocode/v1/json";

/// Hard limit for one classification request.
pub const CLASSIFY_TIMEOUT: Duration = Duration::from_millis(3000);

/// Source label for answers produced by the geocoder.
pub const OPENCAGE_SOURCE: &str = "opencage";

/// Reasons a classification request can fail. All of them end in the fallback.
#[derive(thiserror::Error, Debug)]
pub enum SurfaceError {
    #[error("no reverse-geocoding API key configured")]
    MissingApiKey,

    #[error("reverse-geocoding request timed out after {0:?}")]
    Timeout(Duration),

    #[error("reverse-geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("reverse-geocoding service returned HTTP {0}")]
    Status(u16),

    #[error("invalid reverse-geocoding response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for the reverse-geocoding client.
#[derive(Clone, Debug)]
pub struct GeocoderConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    /// Language for place names (e.g. "en").
    pub language: String,
    pub timeout: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: OPENCAGE_ENDPOINT.to_string(),
            api_key: None,
            language: "en".to_string(),
            timeout: CLASSIFY_TIMEOUT,
        }
    }
}

impl GeocoderConfig {
    /// Build the request URL for a position.
    pub fn request_url(&self, position: LatLng, api_key: &str) -> String {
        let query = format!("{}+{}", position.lat, position.lng);
        format!(
            "{}?q={}&key={}&language={}&no_annotations=1&limit=1",
            self.endpoint,
            query,
            urlencoding::encode(api_key),
            urlencoding::encode(&self.language),
        )
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodePlace>,
}

#[derive(Debug, Deserialize)]
struct GeocodePlace {
    #[serde(default)]
    components: Components,
    confidence: Option<u8>,
    formatted: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Components {
    #[serde(rename = "_type")]
    kind: Option<String>,
    #[serde(rename = "_category")]
    category: Option<String>,
    country: Option<String>,
    #[serde(rename = "ISO_3166-1_alpha-2")]
    iso_code: Option<String>,
    country_code: Option<String>,
    body_of_water: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
}

impl Components {
    fn is_water(&self) -> bool {
        const WATER_KINDS: [&str; 4] = ["body_of_water", "ocean", "sea", "water"];
        self.body_of_water.is_some()
            || self
                .kind
                .as_deref()
                .is_some_and(|kind| WATER_KINDS.contains(&kind))
            || self
                .category
                .as_deref()
                .is_some_and(|category| category.contains("water"))
    }

    fn settlement(&self) -> Option<&str> {
        self.city
            .as_deref()
            .or(self.town.as_deref())
            .or(self.village.as_deref())
            .or(self.state.as_deref())
    }

    fn country_info(&self) -> Option<CountryInfo> {
        let name = self.country.clone()?;
        let code = self
            .iso_code
            .as_deref()
            .or(self.country_code.as_deref())
            .map(str::to_ascii_uppercase);
        Some(CountryInfo { name, code })
    }
}

/// Turn a raw geocoder response body into a classification.
pub fn interpret_response(position: LatLng, body: &str) -> Result<SurfaceInfo, SurfaceError> {
    let response: GeocodeResponse = serde_json::from_str(body)?;

    let Some(place) = response.results.into_iter().next() else {
        // Nothing within reach of the point: open ocean.
        return Ok(SurfaceInfo {
            surface: SurfaceType::Water,
            description: "Open water".to_string(),
            location: position.to_string(),
            confidence: Confidence::Medium,
            source: OPENCAGE_SOURCE.to_string(),
            country: None,
        });
    };

    let confidence = Confidence::from_score(place.confidence.unwrap_or(0));
    let location = place.formatted.clone().unwrap_or_else(|| position.to_string());
    let country = place.components.country_info();

    let info = if place.components.is_water() || country.is_none() {
        let description = match &place.components.body_of_water {
            Some(water) => format!("Water: {water}"),
            None => "Open water".to_string(),
        };
        SurfaceInfo {
            surface: SurfaceType::Water,
            description,
            location,
            confidence,
            source: OPENCAGE_SOURCE.to_string(),
            country,
        }
    } else {
        let country_name = country.as_ref().map(|c| c.name.as_str()).unwrap_or_default();
        let description = match place.components.settlement() {
            Some(place_name) => format!("Land near {place_name}, {country_name}"),
            None => format!("Land in {country_name}"),
        };
        SurfaceInfo {
            surface: SurfaceType::Land,
            description,
            location,
            confidence,
            source: OPENCAGE_SOURCE.to_string(),
            country,
        }
    };

    Ok(info)
}

/// Query the geocoder for one position.
pub async fn fetch_surface(
    client: &reqwest::Client,
    config: &GeocoderConfig,
    position: LatLng,
) -> Result<SurfaceInfo, SurfaceError> {
    let api_key = config
        .api_key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .ok_or(SurfaceError::MissingApiKey)?;

    let url = config.request_url(position, api_key);
    debug!("Classifying surface at {position}");

    let response = client
        .get(&url)
        .timeout(config.timeout)
        .send()
        .await
        .map_err(|e| timeout_or_http(e, config.timeout))?;

    if !response.status().is_success() {
        return Err(SurfaceError::Status(response.status().as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| timeout_or_http(e, config.timeout))?;
    interpret_response(position, &body)
}

fn timeout_or_http(error: reqwest::Error, timeout: Duration) -> SurfaceError {
    if error.is_timeout() {
        SurfaceError::Timeout(timeout)
    } else {
        SurfaceError::Http(error)
    }
}

/// Classify a position, substituting the fallback on any failure.
pub async fn classify(
    client: &reqwest::Client,
    config: &GeocoderConfig,
    position: LatLng,
) -> SurfaceInfo {
    match fetch_surface(client, config, position).await {
        Ok(info) => info,
        Err(e) => {
            warn!("Surface classification failed, assuming water: {e}");
            SurfaceInfo::fallback(position)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAND_RESPONSE: &str = r#"{
        "results": [{
            "components": {
                "_category": "place",
                "_type": "city",
                "city": "Lyon",
                "country": "France",
                "country_code": "fr",
                "ISO_3166-1_alpha-2": "FR"
            },
            "confidence": 8,
            "formatted": "Lyon, France"
        }],
        "status": {"code": 200, "message": "OK"}
    }"#;

    const WATER_RESPONSE: &str = r#"{
        "results": [{
            "components": {
                "_category": "natural/water",
                "_type": "body_of_water",
                "body_of_water": "Atlantic Ocean"
            },
            "confidence": 1,
            "formatted": "Atlantic Ocean"
        }]
    }"#;

    #[test]
    fn test_land_response() {
        let position = LatLng::new(45.76, 4.83);
        let info = interpret_response(position, LAND_RESPONSE).expect("valid response");
        assert_eq!(info.surface, SurfaceType::Land);
        assert_eq!(info.confidence, Confidence::High);
        assert_eq!(info.description, "Land near Lyon, France");
        assert_eq!(info.location, "Lyon, France");
        let country = info.country.expect("country present");
        assert_eq!(country.name, "France");
        assert_eq!(country.code.as_deref(), Some("FR"));
    }

    #[test]
    fn test_water_response() {
        let info = interpret_response(LatLng::new(30.0, -40.0), WATER_RESPONSE)
            .expect("valid response");
        assert_eq!(info.surface, SurfaceType::Water);
        assert_eq!(info.confidence, Confidence::Low);
        assert_eq!(info.description, "Water: Atlantic Ocean");
        assert!(info.country.is_none());
        assert!(!info.is_fallback());
    }

    #[test]
    fn test_empty_results_mean_open_water() {
        let info = interpret_response(LatLng::new(-50.0, -120.0), r#"{"results": []}"#)
            .expect("valid response");
        assert_eq!(info.surface, SurfaceType::Water);
        assert_eq!(info.confidence, Confidence::Medium);
    }

    #[test]
    fn test_malformed_response_is_error() {
        let result = interpret_response(LatLng::new(0.0, 0.0), "<html>rate limited</html>");
        assert!(matches!(result, Err(SurfaceError::Parse(_))));
    }

    #[test]
    fn test_request_url_contains_query() {
        let config = GeocoderConfig {
            language: "es".to_string(),
            ..Default::default()
        };
        let url = config.request_url(LatLng::new(10.5, -20.25), "a b");
        assert!(url.starts_with(OPENCAGE_ENDPOINT));
        assert!(url.contains("q=10.5+-20.25"));
        assert!(url.contains("key=a%20b"));
        assert!(url.contains("language=es"));
    }

    #[test]
    fn test_default_timeout_is_three_seconds() {
        assert_eq!(GeocoderConfig::default().timeout, Duration::from_secs(3));
    }
}

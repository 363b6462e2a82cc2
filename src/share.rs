//! Shareable links: application state encoded as URL query parameters.
//!
//! Parameters: `lat`, `lng`, `type` (`custom` | `asteroid`), `diameter`,
//! `velocity`, `asteroid`, `asteroidData` (base64 JSON of the
//! [`ImpactSource`]) and `map3d`. Decoding never fails: anything malformed or
//! missing is dropped and the corresponding field stays empty.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::impact::ImpactSource;
use crate::types::LatLng;

/// Base URL used when printing complete links.
pub const SHARE_BASE_URL: &str = "https://impact-lab.app/";

/// The projectile part of a shared state.
#[derive(Clone, Debug, PartialEq)]
pub enum SharedProjectile {
    /// Slider-configured projectile.
    Custom { diameter: f64, velocity: f64 },
    /// Catalogued asteroid, optionally with its full record.
    Asteroid {
        id: String,
        data: Option<ImpactSource>,
    },
}

/// Everything a share link can carry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SharedState {
    pub position: Option<LatLng>,
    pub projectile: Option<SharedProjectile>,
    pub map_3d: bool,
}

/// Encode a state as a query string (without the leading `?`).
pub fn encode(state: &SharedState) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();

    if let Some(position) = state.position {
        params.push(("lat", position.lat.to_string()));
        params.push(("lng", position.lng.to_string()));
    }

    match &state.projectile {
        Some(SharedProjectile::Custom { diameter, velocity }) => {
            params.push(("type", "custom".to_string()));
            params.push(("diameter", diameter.to_string()));
            params.push(("velocity", velocity.to_string()));
        }
        Some(SharedProjectile::Asteroid { id, data }) => {
            params.push(("type", "asteroid".to_string()));
            params.push(("asteroid", id.clone()));
            if let Some(data) = data
                && let Ok(json) = serde_json::to_vec(data)
            {
                params.push(("asteroidData", URL_SAFE_NO_PAD.encode(json)));
            }
        }
        None => {}
    }

    params.push(("map3d", state.map_3d.to_string()));

    params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Encode a state as a complete link.
pub fn encode_url(state: &SharedState) -> String {
    format!("{SHARE_BASE_URL}?{}", encode(state))
}

/// Decode a query string, `?query` or full URL.
pub fn decode(input: &str) -> SharedState {
    let query = match input.split_once('?') {
        Some((_, query)) => query,
        None => input,
    };
    let query = query.split('#').next().unwrap_or_default();

    let params = QueryParams::parse(query);

    let position = match (params.number("lat"), params.number("lng")) {
        (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)).filter(LatLng::is_valid),
        _ => None,
    };

    let projectile = match params.get("type") {
        Some("custom") => match (
            params.positive_number("diameter"),
            params.positive_number("velocity"),
        ) {
            (Some(diameter), Some(velocity)) => {
                Some(SharedProjectile::Custom { diameter, velocity })
            }
            _ => None,
        },
        Some("asteroid") => params
            .get("asteroid")
            .filter(|id| !id.is_empty())
            .map(|id| SharedProjectile::Asteroid {
                id: id.to_string(),
                data: params.get("asteroidData").and_then(decode_asteroid_data),
            }),
        _ => None,
    };

    SharedState {
        position,
        projectile,
        map_3d: params.get("map3d") == Some("true"),
    }
}

/// The projectile must be one the physics accepts, like `type=custom`.
fn decode_asteroid_data(encoded: &str) -> Option<ImpactSource> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded.trim_end_matches('='))
        .ok()?;
    let source: ImpactSource = serde_json::from_slice(&bytes).ok()?;
    source.impactor().ok()?;
    Some(source)
}

/// Decoded `key=value` pairs; the first occurrence of a key wins.
struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    fn parse(query: &str) -> Self {
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let key = urlencoding::decode(key).ok()?.into_owned();
                let value = urlencoding::decode(&value.replace('+', " "))
                    .ok()?
                    .into_owned();
                Some((key, value))
            })
            .collect();
        Self { pairs }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.get(key)?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
    }

    fn positive_number(&self, key: &str) -> Option<f64> {
        self.number(key).filter(|n| *n > 0.0)
    }
}

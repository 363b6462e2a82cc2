//! NASA NeoWs feed: near-Earth objects approaching in the coming week.
//!
//! The feed is read-only. Records are turned into [`ImpactSource`]s when the
//! user picks one from the asteroid list.

use std::collections::BTreeMap;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Deserializer};

use crate::async_runtime::TaskSpawner;
use crate::impact::ImpactSource;
use crate::net::HttpClient;
use crate::types::Date;

/// NeoWs feed endpoint.
pub const NEO_FEED_ENDPOINT: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// Shared demo key, heavily rate limited.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Days covered by one feed request (the API maximum).
pub const FEED_WINDOW_DAYS: i64 = 7;

const FEED_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(thiserror::Error, Debug)]
pub enum NeoError {
    #[error("asteroid feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("asteroid feed returned HTTP {0}")]
    Status(u16),

    #[error("invalid asteroid feed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no async runtime available")]
    Offline,
}

/// One close approach to Earth.
#[derive(Clone, Debug, PartialEq)]
pub struct CloseApproach {
    /// YYYY-MM-DD.
    pub date: String,
    pub relative_velocity_km_s: f64,
    pub miss_distance_km: f64,
}

/// A near-Earth object as reported by NeoWs.
#[derive(Clone, Debug, PartialEq)]
pub struct Asteroid {
    pub id: String,
    pub name: String,
    pub jpl_url: Option<String>,
    pub absolute_magnitude: Option<f64>,
    pub diameter_min_m: f64,
    pub diameter_max_m: f64,
    pub hazardous: bool,
    pub close_approaches: Vec<CloseApproach>,
}

impl Asteroid {
    /// Mean of the estimated diameter bounds (m).
    pub fn mean_diameter_m(&self) -> f64 {
        (self.diameter_min_m + self.diameter_max_m) / 2.0
    }

    pub fn next_approach(&self) -> Option<&CloseApproach> {
        self.close_approaches.first()
    }

    /// The asteroid as a projectile: mean diameter, first approach velocity.
    pub fn to_source(&self) -> ImpactSource {
        let approach = self.next_approach();
        ImpactSource {
            name: self.name.clone(),
            diameter: self.mean_diameter_m(),
            velocity: approach.map_or(0.0, |a| a.relative_velocity_km_s),
            hazardous: self.hazardous,
            close_approach_date: approach.map(|a| a.date.clone()),
            miss_distance: approach.map(|a| a.miss_distance_km),
            absolute_magnitude: self.absolute_magnitude,
            jpl_url: self.jpl_url.clone(),
        }
    }
}

// Raw feed layout. NeoWs sends most numbers inside approach data as strings.

#[derive(Debug, Deserialize)]
struct FeedResponse {
    near_earth_objects: BTreeMap<String, Vec<RawNeo>>,
}

#[derive(Debug, Deserialize)]
struct RawNeo {
    id: String,
    name: String,
    nasa_jpl_url: Option<String>,
    absolute_magnitude_h: Option<f64>,
    estimated_diameter: RawDiameters,
    #[serde(default)]
    is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    close_approach_data: Vec<RawApproach>,
}

#[derive(Debug, Deserialize)]
struct RawDiameters {
    meters: RawRange,
}

#[derive(Debug, Deserialize)]
struct RawRange {
    estimated_diameter_min: f64,
    estimated_diameter_max: f64,
}

#[derive(Debug, Deserialize)]
struct RawApproach {
    close_approach_date: String,
    relative_velocity: RawVelocity,
    miss_distance: RawMissDistance,
}

#[derive(Debug, Deserialize)]
struct RawVelocity {
    #[serde(deserialize_with = "number_or_string")]
    kilometers_per_second: f64,
}

#[derive(Debug, Deserialize)]
struct RawMissDistance {
    #[serde(deserialize_with = "number_or_string")]
    kilometers: f64,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl From<RawNeo> for Asteroid {
    fn from(raw: RawNeo) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            jpl_url: raw.nasa_jpl_url,
            absolute_magnitude: raw.absolute_magnitude_h,
            diameter_min_m: raw.estimated_diameter.meters.estimated_diameter_min,
            diameter_max_m: raw.estimated_diameter.meters.estimated_diameter_max,
            hazardous: raw.is_potentially_hazardous_asteroid,
            close_approaches: raw
                .close_approach_data
                .into_iter()
                .map(|a| CloseApproach {
                    date: a.close_approach_date,
                    relative_velocity_km_s: a.relative_velocity.kilometers_per_second,
                    miss_distance_km: a.miss_distance.kilometers,
                })
                .collect(),
        }
    }
}

/// Parse a feed body into asteroids sorted by approach date, then name.
pub fn parse_feed(body: &str) -> Result<Vec<Asteroid>, NeoError> {
    let response: FeedResponse = serde_json::from_str(body)?;

    let mut asteroids: Vec<(String, Asteroid)> = response
        .near_earth_objects
        .into_iter()
        .flat_map(|(date, neos)| {
            neos.into_iter().map(move |raw| {
                let asteroid = Asteroid::from(raw);
                let sort_date = asteroid
                    .next_approach()
                    .map_or_else(|| date.clone(), |a| a.date.clone());
                (sort_date, asteroid)
            })
        })
        .collect();

    asteroids.sort_by(|(date_a, a), (date_b, b)| date_a.cmp(date_b).then(a.name.cmp(&b.name)));
    Ok(asteroids.into_iter().map(|(_, asteroid)| asteroid).collect())
}

/// Settings for the feed client.
#[derive(Resource, Clone, Debug)]
pub struct NeoConfig {
    pub endpoint: String,
    pub api_key: String,
    pub window_days: i64,
}

impl Default for NeoConfig {
    fn default() -> Self {
        Self {
            endpoint: NEO_FEED_ENDPOINT.to_string(),
            api_key: DEMO_API_KEY.to_string(),
            window_days: FEED_WINDOW_DAYS,
        }
    }
}

impl NeoConfig {
    pub fn request_url(&self, start: Date) -> String {
        let end = start.plus_days(self.window_days);
        format!(
            "{}?start_date={start}&end_date={end}&api_key={}",
            self.endpoint,
            urlencoding::encode(&self.api_key),
        )
    }
}

/// Fetch the feed window starting at `start`.
pub async fn fetch_feed(
    client: &reqwest::Client,
    config: &NeoConfig,
    start: Date,
) -> Result<Vec<Asteroid>, NeoError> {
    let response = client
        .get(config.request_url(start))
        .timeout(FEED_TIMEOUT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(NeoError::Status(response.status().as_u16()));
    }

    let body = response.text().await?;
    parse_feed(&body)
}

/// Ask for a fresh copy of the feed.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct RefreshNeoFeed;

/// The asteroid list shown in the side panel.
#[derive(Resource)]
pub struct NeoFeedState {
    pub asteroids: Vec<Asteroid>,
    pub loading: bool,
    /// Last failure, shown as a generic message.
    pub error: Option<String>,
    result_rx: async_channel::Receiver<Result<Vec<Asteroid>, NeoError>>,
    result_tx: async_channel::Sender<Result<Vec<Asteroid>, NeoError>>,
}

impl Default for NeoFeedState {
    fn default() -> Self {
        let (result_tx, result_rx) = async_channel::bounded(1);
        Self {
            asteroids: Vec::new(),
            loading: false,
            error: None,
            result_rx,
            result_tx,
        }
    }
}

impl NeoFeedState {
    pub fn find(&self, id: &str) -> Option<&Asteroid> {
        self.asteroids.iter().find(|a| a.id == id)
    }

    fn apply(&mut self, result: Result<Vec<Asteroid>, NeoError>) {
        self.loading = false;
        match result {
            Ok(asteroids) => {
                info!("Loaded {} near-Earth objects", asteroids.len());
                self.asteroids = asteroids;
                self.error = None;
            }
            Err(e) => {
                warn!("Asteroid feed unavailable: {e}");
                self.error = Some(e.to_string());
            }
        }
    }
}

fn request_neo_feed(
    mut refreshes: MessageReader<RefreshNeoFeed>,
    mut feed: ResMut<NeoFeedState>,
    config: Res<NeoConfig>,
    client: Res<HttpClient>,
    spawner: TaskSpawner,
) {
    if refreshes.read().count() == 0 || feed.loading {
        return;
    }

    feed.loading = true;
    let tx = feed.result_tx.clone();

    if !spawner.is_available() {
        let _ = tx.try_send(Err(NeoError::Offline));
        return;
    }

    let client = client.0.clone();
    let config = config.clone();
    let start = Date::today();
    spawner.spawn(async move {
        let result = fetch_feed(&client, &config, start).await;
        let _ = tx.send(result).await;
    });
}

fn poll_neo_feed(mut feed: ResMut<NeoFeedState>) {
    if let Ok(result) = feed.result_rx.try_recv() {
        feed.apply(result);
    }
}

/// Requests the feed once at startup and on every [`RefreshNeoFeed`].
pub struct NeoFeedPlugin;

impl Plugin for NeoFeedPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RefreshNeoFeed>()
            .init_resource::<NeoFeedState>()
            .init_resource::<NeoConfig>()
            .init_resource::<HttpClient>()
            .add_systems(Startup, |mut refreshes: MessageWriter<RefreshNeoFeed>| {
                refreshes.write(RefreshNeoFeed);
            })
            .add_systems(Update, (request_neo_feed, poll_neo_feed).chain());
    }
}

//! Headless impact report.
//!
//! `--report` runs the same pipeline as a map click (classification, physics,
//! population) without opening a window and prints the result as JSON.

use bevy::log::{info, warn};
use serde::Serialize;

use crate::config::LaunchParams;
use crate::impact::{ImpactEvent, ImpactSource};
use crate::net::HttpClient;
use crate::physics::PhysicsError;
use crate::share::{self, SharedProjectile, SharedState};
use crate::state::{DEFAULT_DIAMETER_M, DEFAULT_VELOCITY_KM_S};
use crate::surface::{self, GeocoderConfig};
use crate::types::LatLng;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("an impact position is required (--lat/--lng or a share link)")]
    MissingPosition,

    #[error(transparent)]
    Physics(#[from] PhysicsError),

    #[error("could not start the async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("could not create the HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not serialize the report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything needed to compute one report.
#[derive(Clone, Debug)]
pub struct ReportRequest {
    pub position: LatLng,
    pub source: ImpactSource,
    /// Catalogue id when the projectile is an asteroid.
    pub asteroid_id: Option<String>,
    pub geocoder: GeocoderConfig,
    pub map_3d: bool,
}

impl ReportRequest {
    /// Projectile values are taken as given, without the slider ranges;
    /// invalid ones are rejected by [`build_report`].
    pub fn from_launch(params: &LaunchParams) -> Result<Self, ReportError> {
        let initial = params.initial_state();
        let position = initial.position.ok_or(ReportError::MissingPosition)?;

        let default_source = || ImpactSource::custom(DEFAULT_DIAMETER_M, DEFAULT_VELOCITY_KM_S);
        let (source, asteroid_id) = match initial.projectile {
            Some(SharedProjectile::Custom { diameter, velocity }) => {
                (ImpactSource::custom(diameter, velocity), None)
            }
            Some(SharedProjectile::Asteroid {
                id,
                data: Some(source),
            }) => (source, Some(id)),
            Some(SharedProjectile::Asteroid { id, data: None }) => {
                warn!("Shared link names asteroid {id} without its data, using defaults");
                (default_source(), None)
            }
            None => (default_source(), None),
        };

        Ok(Self {
            position,
            source,
            asteroid_id,
            geocoder: GeocoderConfig {
                api_key: params.opencage_key.clone(),
                language: params.locale.unwrap_or_default().code().to_string(),
                ..Default::default()
            },
            map_3d: initial.map_3d,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
    pub event: ImpactEvent,
    pub share_link: String,
}

impl ImpactReport {
    pub fn new(event: ImpactEvent, asteroid_id: Option<String>, map_3d: bool) -> Self {
        let source = &event.details.source;
        let projectile = match asteroid_id {
            Some(id) => SharedProjectile::Asteroid {
                id,
                data: Some(source.clone()),
            },
            None => SharedProjectile::Custom {
                diameter: source.diameter,
                velocity: source.velocity,
            },
        };
        let shared = SharedState {
            position: Some(event.position),
            projectile: Some(projectile),
            map_3d,
        };

        Self {
            share_link: share::encode_url(&shared),
            event,
        }
    }
}

/// Classify the surface and compute the event.
pub async fn build_report(
    client: &reqwest::Client,
    request: ReportRequest,
) -> Result<ImpactReport, ReportError> {
    // Validate before spending a request on it.
    request.source.impactor()?;

    let surface = surface::classify(client, &request.geocoder, request.position).await;
    let event = ImpactEvent::compute(request.position, request.source, surface)?;
    info!(
        "Report for {}: {:.2} MT, threat {:?}",
        event.position,
        event.details.consequences.impact_energy,
        event.details.mitigation.threat_level
    );
    Ok(ImpactReport::new(event, request.asteroid_id, request.map_3d))
}

/// Run the report on a private Tokio runtime and return pretty JSON.
pub fn run(params: &LaunchParams) -> Result<String, ReportError> {
    let request = ReportRequest::from_launch(params)?;
    let client = HttpClient::new()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(ReportError::Runtime)?;

    let report = runtime.block_on(build_report(&client.0, request))?;
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Log to stderr so stdout stays pure JSON.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::surface::SurfaceInfo;

    #[test]
    fn test_request_needs_position() {
        let params = LaunchParams::default();
        assert!(matches!(
            ReportRequest::from_launch(&params),
            Err(ReportError::MissingPosition)
        ));
    }

    #[test]
    fn test_request_uses_flags() {
        let params = LaunchParams {
            position: Some(LatLng::new(10.0, 20.0)),
            diameter: Some(100.0),
            locale: Some(Locale::Es),
            ..Default::default()
        };
        let request = ReportRequest::from_launch(&params).expect("position given");
        assert_eq!(request.source, ImpactSource::custom(100.0, 20.0));
        assert_eq!(request.geocoder.language, "es");
        assert!(request.geocoder.api_key.is_none());
    }

    #[test]
    fn test_flags_outside_slider_range_kept() {
        let params = LaunchParams {
            position: Some(LatLng::new(10.0, 20.0)),
            diameter: Some(50_000.0),
            velocity: Some(5.0),
            ..Default::default()
        };
        let request = ReportRequest::from_launch(&params).expect("position given");
        assert_eq!(request.source, ImpactSource::custom(50_000.0, 5.0));
        assert!(request.asteroid_id.is_none());
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let params = LaunchParams {
            position: Some(LatLng::new(10.0, 20.0)),
            diameter: Some(-5.0),
            ..Default::default()
        };
        assert!(matches!(run(&params), Err(ReportError::Physics(_))));
    }

    #[test]
    fn test_report_share_link_keeps_asteroid_id() {
        let position = LatLng::new(5.0, 5.0);
        let source = ImpactSource {
            name: "99942 Apophis (2004 MN4)".to_string(),
            ..ImpactSource::custom(370.0, 12.6)
        };
        let shared = SharedState {
            position: Some(position),
            projectile: Some(SharedProjectile::Asteroid {
                id: "2099942".to_string(),
                data: Some(source.clone()),
            }),
            map_3d: true,
        };
        let params = LaunchParams {
            share: Some(shared.clone()),
            ..Default::default()
        };

        let request = ReportRequest::from_launch(&params).expect("position in link");
        assert_eq!(request.asteroid_id.as_deref(), Some("2099942"));

        let event = ImpactEvent::compute(position, request.source, SurfaceInfo::fallback(position))
            .expect("valid impactor");
        let report = ImpactReport::new(event, request.asteroid_id, request.map_3d);
        assert_eq!(share::decode(&report.share_link), shared);
    }

    #[test]
    fn test_report_share_link_restores_projectile() {
        let event = ImpactEvent::compute(
            LatLng::new(-10.0, 30.0),
            ImpactSource::custom(200.0, 25.0),
            SurfaceInfo::fallback(LatLng::new(-10.0, 30.0)),
        )
        .expect("valid impactor");
        let report = ImpactReport::new(event, None, false);

        let decoded = share::decode(&report.share_link);
        assert_eq!(decoded.position, Some(LatLng::new(-10.0, 30.0)));
        assert_eq!(
            decoded.projectile,
            Some(SharedProjectile::Custom {
                diameter: 200.0,
                velocity: 25.0,
            })
        );
    }

    #[test]
    fn test_offline_report_is_json() {
        let params = LaunchParams {
            position: Some(LatLng::new(0.0, -30.0)),
            ..Default::default()
        };
        let json = run(&params).expect("offline report succeeds");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["event"]["details"]["surface"]["source"], "fallback");
        assert!(value["shareLink"].as_str().is_some_and(|s| s.contains("lat=0")));
    }
}

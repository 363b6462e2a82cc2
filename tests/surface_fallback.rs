//! Surface classification never fails: every error becomes the fallback.

use std::time::Duration;

use impact_lab::surface::{self, GeocoderConfig, SurfaceError, SurfaceType};
use impact_lab::types::LatLng;

fn unreachable_config(api_key: Option<&str>) -> GeocoderConfig {
    GeocoderConfig {
        // Nothing listens on port 1.
        endpoint: "http://127.0.0.1:1/geocode/v1/json".to_string(),
        api_key: api_key.map(str::to_string),
        timeout: Duration::from_millis(500),
        ..GeocoderConfig::default()
    }
}

#[tokio::test]
async fn test_missing_key_is_an_error() {
    let client = reqwest::Client::new();
    let config = unreachable_config(None);

    let result = surface::fetch_surface(&client, &config, LatLng::new(0.0, 0.0)).await;
    assert!(matches!(result, Err(SurfaceError::MissingApiKey)));
}

#[tokio::test]
async fn test_missing_key_falls_back_to_water() {
    let client = reqwest::Client::new();
    let config = unreachable_config(Some("   "));
    let position = LatLng::new(12.0, 34.0);

    let info = surface::classify(&client, &config, position).await;
    assert!(info.is_fallback());
    assert_eq!(info.surface, SurfaceType::Water);
    assert_eq!(info.location, position.to_string());
}

#[tokio::test]
async fn test_unreachable_service_falls_back() {
    let client = reqwest::Client::new();
    let config = unreachable_config(Some("test-key"));
    let position = LatLng::new(-45.0, 170.0);

    let info = surface::classify(&client, &config, position).await;
    assert!(info.is_fallback());
    assert_eq!(info.surface, SurfaceType::Water);
}

/// Accepts connections and never answers. Returns the endpoint URL.
async fn silent_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local port");
    let addr = listener.local_addr().expect("bound address");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{addr}/geocode/v1/json")
}

#[tokio::test]
async fn test_silent_service_times_out() {
    let client = reqwest::Client::new();
    let config = GeocoderConfig {
        endpoint: silent_server().await,
        api_key: Some("test-key".to_string()),
        timeout: Duration::from_millis(200),
        ..GeocoderConfig::default()
    };
    let position = LatLng::new(30.0, -40.0);

    let result = surface::fetch_surface(&client, &config, position).await;
    assert!(
        matches!(result, Err(SurfaceError::Timeout(t)) if t == Duration::from_millis(200)),
        "expected timeout, got {result:?}"
    );

    let info = surface::classify(&client, &config, position).await;
    assert!(info.is_fallback());
    assert_eq!(info.surface, SurfaceType::Water);
}

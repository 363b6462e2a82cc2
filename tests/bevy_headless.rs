//! Headless Bevy integration tests.
//!
//! These tests drive the core plugins without a window, GPU or async
//! runtime, so every surface lookup takes the offline fallback path.

use bevy::prelude::*;
use impact_lab::CorePlugin;
use impact_lab::impact::{ImpactRequest, SurfaceLookup};
use impact_lab::map::MapView;
use impact_lab::meteor::MeteorAnimation;
use impact_lab::neo::NeoFeedState;
use impact_lab::presets::LoadPresetMessage;
use impact_lab::state::{ImpactState, ResetMessage};
use impact_lab::surface::{SurfaceInfo, SurfaceType};
use impact_lab::types::LatLng;

fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, CorePlugin));
    app.update();
    app
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

#[test]
fn test_click_produces_fallback_impact() {
    let mut app = create_minimal_app();
    let position = LatLng::new(10.0, -30.0);

    app.world_mut().write_message(ImpactRequest { position });
    run_frames(&mut app, 3);

    let state = app.world().resource::<ImpactState>();
    let event = state.impact_event.as_ref().expect("impact computed");
    assert_eq!(event.position, position);
    assert!(event.details.surface.is_fallback());
    assert_eq!(event.details.surface.surface, SurfaceType::Water);
    assert!(event.details.consequences.tsunami.is_some());
    assert!(event.details.consequences.crater.is_none());

    assert!(!app.world().resource::<SurfaceLookup>().is_loading());
}

#[test]
fn test_impact_starts_meteor_and_focuses_map() {
    let mut app = create_minimal_app();
    let position = LatLng::new(-20.0, 140.0);

    app.world_mut().write_message(ImpactRequest { position });
    run_frames(&mut app, 3);

    let animation = app.world().resource::<MeteorAnimation>();
    assert_eq!(animation.target(), Some(position));

    let view = app.world().resource::<MapView>();
    assert!(view.focus.is_some() || view.globe_center == position);
}

#[test]
fn test_request_wraps_longitude() {
    let mut app = create_minimal_app();

    app.world_mut().write_message(ImpactRequest {
        position: LatLng::new(5.0, 190.0),
    });
    run_frames(&mut app, 3);

    let state = app.world().resource::<ImpactState>();
    let event = state.impact_event.as_ref().expect("impact computed");
    assert!((event.position.lng - -170.0).abs() < 1e-9);
}

#[test]
fn test_reset_clears_impact() {
    let mut app = create_minimal_app();

    app.world_mut().write_message(ImpactRequest {
        position: LatLng::new(0.0, 0.0),
    });
    run_frames(&mut app, 3);
    assert!(app.world().resource::<ImpactState>().impact_event.is_some());

    app.world_mut().write_message(ResetMessage);
    run_frames(&mut app, 2);

    let state = app.world().resource::<ImpactState>();
    assert!(state.impact_event.is_none());
    assert!(state.selected_asteroid().is_none());
}

#[test]
fn test_stale_classification_is_dropped() {
    let mut app = create_minimal_app();
    let first_position = LatLng::new(1.0, 1.0);
    let second_position = LatLng::new(2.0, 2.0);

    let (first, second, tx) = {
        let state = app.world().resource::<ImpactState>().clone();
        let mut lookup = app.world_mut().resource_mut::<SurfaceLookup>();
        let first = lookup.begin(first_position, state.current_source());
        let second = lookup.begin(second_position, state.current_source());
        (first, second, lookup.sender())
    };

    tx.try_send((first, SurfaceInfo::fallback(first_position)))
        .expect("channel open");
    run_frames(&mut app, 2);
    assert!(app.world().resource::<ImpactState>().impact_event.is_none());
    assert!(app.world().resource::<SurfaceLookup>().is_loading());

    tx.try_send((second, SurfaceInfo::fallback(second_position)))
        .expect("channel open");
    run_frames(&mut app, 2);

    let state = app.world().resource::<ImpactState>();
    let event = state.impact_event.as_ref().expect("newest applied");
    assert_eq!(event.position, second_position);
}

#[test]
fn test_preset_strikes_its_site() {
    let mut app = create_minimal_app();

    app.world_mut().write_message(LoadPresetMessage {
        preset_id: "tunguska",
        strike_site: true,
    });
    run_frames(&mut app, 4);

    let state = app.world().resource::<ImpactState>();
    assert_eq!(state.diameter_m(), 60.0);
    assert_eq!(state.velocity_km_s(), 27.0);

    let event = state.impact_event.as_ref().expect("preset site struck");
    assert_eq!(event.position, LatLng::new(60.886, 101.894));
    assert_eq!(event.details.source.diameter, 60.0);
}

#[test]
fn test_neo_feed_offline_reports_error() {
    let mut app = create_minimal_app();
    run_frames(&mut app, 2);

    let feed = app.world().resource::<NeoFeedState>();
    assert!(!feed.loading);
    assert!(feed.error.is_some());
    assert!(feed.asteroids.is_empty());
}

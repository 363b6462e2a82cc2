//! Impact Lab - Asteroid Impact Estimator
//!
//! A desktop application for estimating what happens when an asteroid hits
//! a chosen spot on Earth. With `--report` it prints a JSON report instead.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use impact_lab::CorePlugin;
use impact_lab::async_runtime::AsyncRuntimePlugin;
use impact_lab::config::{self, LaunchParams, Preferences, PreferencesPlugin};
use impact_lab::impact::ImpactRequest;
use impact_lab::impact::pipeline::GeocoderSettings;
use impact_lab::neo::NeoConfig;
use impact_lab::report;
use impact_lab::state::ImpactState;
use impact_lab::surface::GeocoderConfig;
use impact_lab::ui::UiPlugin;

fn main() {
    let params = config::parse();

    if params.report {
        report::init_logging();
        match report::run(&params) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let geocoder = GeocoderSettings(GeocoderConfig {
        api_key: params.opencage_key.clone(),
        ..default()
    });
    let neo = NeoConfig {
        api_key: params.nasa_key.clone(),
        ..default()
    };
    let preferences = PreferencesPlugin {
        path: params.prefs_path.clone(),
        locale: params.locale,
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Impact Lab".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(geocoder)
        .insert_resource(neo)
        .insert_resource(params)
        .add_plugins((AsyncRuntimePlugin, preferences, CorePlugin, UiPlugin))
        .add_systems(Startup, (spawn_camera, apply_launch_state))
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Restore the share link and command-line overrides.
fn apply_launch_state(
    params: Res<LaunchParams>,
    mut state: ResMut<ImpactState>,
    mut prefs: ResMut<Preferences>,
    mut requests: MessageWriter<ImpactRequest>,
) {
    let initial = params.initial_state();
    state.apply_shared_state(&initial);

    if initial.map_3d && !prefs.map_3d {
        prefs.map_3d = true;
    }
    if let Some(position) = initial.position {
        info!("Launching with impact at {position}");
        requests.write(ImpactRequest { position });
    }
}

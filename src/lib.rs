//! Impact Lab - Asteroid Impact Estimator
//!
//! A library crate providing the impact model, data sources and Bevy plugins
//! for testing and integration purposes.

pub mod async_runtime;
pub mod config;
pub mod i18n;
pub mod impact;
pub mod map;
pub mod meteor;
pub mod neo;
pub mod net;
pub mod physics;
pub mod population;
pub mod presets;
pub mod report;
pub mod share;
pub mod state;
pub mod surface;
pub mod types;
pub mod ui;

use bevy::prelude::*;

/// Everything except windowing, preferences and the UI.
///
/// Runs under `MinimalPlugins`; without [`async_runtime::AsyncRuntimePlugin`]
/// network lookups take their offline path.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            state::StatePlugin,
            meteor::MeteorPlugin,
            impact::ImpactPipelinePlugin,
            neo::NeoFeedPlugin,
            presets::PresetPlugin,
            map::MapPlugin,
        ));
    }
}

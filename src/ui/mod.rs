//! UI module providing the egui-based interface.
//!
//! Layout: toolbar on top, impact details on the right, the optional
//! sliders/asteroid panel on the left and the map filling the rest.

mod controls;
pub mod format;
pub mod icons;
mod map_view;
mod sidebar;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::config::{Preferences, Theme};

pub use sidebar::threat_color;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, (icons::setup_fonts, apply_theme))
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Panels first, the map takes the remaining space
                    toolbar::toolbar_system,
                    sidebar::sidebar_system,
                    controls::controls_system,
                    map_view::map_view_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .after(apply_theme)
                    .run_if(|init: Res<icons::FontsInitialized>| init.ready()),
            );
    }
}

/// Transient UI state.
#[derive(Resource, Default)]
pub struct UiState {
    /// When the share link was last copied (seconds since startup).
    pub link_copied_at: Option<f64>,
    theme_applied: Option<Theme>,
}

/// Switch egui visuals when the theme preference changes.
fn apply_theme(
    mut contexts: EguiContexts,
    prefs: Res<Preferences>,
    mut ui_state: ResMut<UiState>,
) {
    if ui_state.theme_applied == Some(prefs.theme) {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    ctx.set_visuals(match prefs.theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    });
    ui_state.theme_applied = Some(prefs.theme);
}

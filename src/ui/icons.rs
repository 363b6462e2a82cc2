//! Phosphor icon definitions for the UI.
//!
//! Provides icon constants using the Phosphor icon font.
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Frames since the fonts were handed to egui. New fonts apply on the frame
/// after `set_fonts`, so icon rendering waits for 2.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub u8);

impl FontsInitialized {
    pub fn ready(&self) -> bool {
        self.0 >= 2
    }
}

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.ready() {
        return;
    }
    if initialized.0 == 1 {
        initialized.0 = 2;
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = 1;

    info!("Phosphor icon fonts initialized");
}

/// Icon text at a size and color.
pub fn icon_colored(icon: &str, size: f32, color: egui::Color32) -> egui::RichText {
    egui::RichText::new(icon).size(size).color(color)
}

// Browse all icons at https://phosphoricons.com/

/// Meteor (app mark)
pub const METEOR: &str = egui_phosphor::regular::SHOOTING_STAR;
/// Parameter sliders
pub const SLIDERS: &str = egui_phosphor::regular::SLIDERS_HORIZONTAL;
/// Asteroid list
pub const LIST: &str = egui_phosphor::regular::LIST_BULLETS;
/// Reset/reload icon (circular arrow)
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
/// Refresh feed
pub const REFRESH: &str = egui_phosphor::regular::ARROWS_CLOCKWISE;
/// Share link
pub const LINK: &str = egui_phosphor::regular::LINK;
/// Close/X icon
pub const CLOSE: &str = egui_phosphor::regular::X;

// View
pub const GLOBE: &str = egui_phosphor::regular::GLOBE_HEMISPHERE_WEST;
pub const MAP: &str = egui_phosphor::regular::MAP_TRIFOLD;
pub const LAYERS: &str = egui_phosphor::regular::STACK;
pub const SUN: &str = egui_phosphor::regular::SUN;
pub const MOON: &str = egui_phosphor::regular::MOON;
pub const LANGUAGE: &str = egui_phosphor::regular::TRANSLATE;

// Consequences
/// Released energy
pub const ENERGY: &str = egui_phosphor::regular::LIGHTNING;
/// Seismic magnitude
pub const SEISMIC: &str = egui_phosphor::regular::WAVEFORM;
/// Air blast ring
pub const BLAST: &str = egui_phosphor::regular::WIND;
/// Devastation radius
pub const TARGET: &str = egui_phosphor::regular::CROSSHAIR;
/// Tsunami
pub const WAVES: &str = egui_phosphor::regular::WAVES;
/// Crater / fireball
pub const FIRE: &str = egui_phosphor::regular::FIRE;
/// Affected population
pub const PEOPLE: &str = egui_phosphor::regular::USERS_THREE;
/// Surface classification
pub const PIN: &str = egui_phosphor::regular::MAP_PIN;

// Status icons
/// Warning/alert icon
pub const WARNING: &str = egui_phosphor::regular::WARNING;
/// Success/check icon
pub const SUCCESS: &str = egui_phosphor::regular::CHECK_CIRCLE;
/// Info icon
pub const INFO: &str = egui_phosphor::regular::INFO;
/// Close approach date
pub const CALENDAR: &str = egui_phosphor::regular::CALENDAR_BLANK;

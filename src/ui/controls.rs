//! Left-hand panel: projectile sliders with presets, or the asteroid list.
//!
//! Only one of the two is ever visible; [`Panel`] decides which.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::Preferences;
use crate::i18n::{Locale, TextKey, tr};
use crate::neo::{Asteroid, NeoFeedState, RefreshNeoFeed};
use crate::presets::{LoadPresetMessage, PRESETS};
use crate::state::{DIAMETER_RANGE_M, ImpactState, Panel, VELOCITY_RANGE_KM_S};

use super::{format, icons};

const PANEL_WIDTH: f32 = 300.0;

mod colors {
    use bevy_egui::egui::Color32;

    pub const HAZARD: Color32 = Color32::from_rgb(224, 85, 85);
    pub const SELECTED: Color32 = Color32::from_rgb(255, 140, 60);
    pub const MUTED: Color32 = Color32::from_rgb(140, 140, 150);
}

pub fn controls_system(
    mut contexts: EguiContexts,
    mut state: ResMut<ImpactState>,
    feed: Res<NeoFeedState>,
    prefs: Res<Preferences>,
    mut refreshes: MessageWriter<RefreshNeoFeed>,
    mut presets: MessageWriter<LoadPresetMessage>,
) {
    if state.panel() == Panel::Hidden {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let locale = prefs.locale;

    egui::SidePanel::left("controls")
        .exact_width(PANEL_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            match state.panel() {
                Panel::Sliders => render_sliders(ui, locale, &mut state, &mut presets),
                Panel::AsteroidList => {
                    render_asteroid_list(ui, locale, &mut state, &feed, &mut refreshes)
                }
                Panel::Hidden => {}
            }
        });
}

fn panel_header(ui: &mut egui::Ui, title: &str) -> bool {
    let mut close = false;
    ui.horizontal(|ui| {
        ui.heading(title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            close = ui.small_button(icons::CLOSE).clicked();
        });
    });
    ui.separator();
    close
}

fn render_sliders(
    ui: &mut egui::Ui,
    locale: Locale,
    state: &mut ImpactState,
    presets: &mut MessageWriter<LoadPresetMessage>,
) {
    if panel_header(ui, tr(locale, TextKey::Sliders)) {
        state.hide_panels();
        return;
    }

    if let Some(selected) = state.selected_asteroid() {
        ui.label(
            egui::RichText::new(format!("{} {}", icons::METEOR, selected.source.name))
                .color(colors::SELECTED),
        );
    }

    let mut diameter = state.diameter_m();
    ui.label(tr(locale, TextKey::Diameter));
    let response = ui.add(
        egui::Slider::new(&mut diameter, DIAMETER_RANGE_M)
            .logarithmic(true)
            .suffix(" m")
            .max_decimals(0),
    );
    if response.changed() {
        state.set_diameter(diameter);
    }

    let mut velocity = state.velocity_km_s();
    ui.label(tr(locale, TextKey::Velocity));
    let response = ui.add(
        egui::Slider::new(&mut velocity, VELOCITY_RANGE_KM_S)
            .suffix(" km/s")
            .max_decimals(1),
    );
    if response.changed() {
        state.set_velocity(velocity);
    }

    let energy = crate::physics::kinetic_energy_megatons(state.diameter_m(), state.velocity_km_s());
    ui.label(
        egui::RichText::new(format!("{} {}", icons::ENERGY, format::energy(locale, energy)))
            .color(colors::MUTED),
    );

    ui.add_space(12.0);
    ui.label(egui::RichText::new(tr(locale, TextKey::Presets)).strong());
    for preset in PRESETS {
        ui.horizontal(|ui| {
            let label = format!(
                "{}  ({}, {})",
                preset.name,
                format::meters(locale, preset.diameter_m),
                format::velocity(locale, preset.velocity_km_s)
            );
            if ui.button(label).on_hover_text(preset.description).clicked() {
                presets.write(LoadPresetMessage {
                    preset_id: preset.id,
                    strike_site: false,
                });
            }
            if preset.site.is_some()
                && ui
                    .small_button(icons::TARGET)
                    .on_hover_text(preset.description)
                    .clicked()
            {
                presets.write(LoadPresetMessage {
                    preset_id: preset.id,
                    strike_site: true,
                });
            }
        });
    }
}

fn render_asteroid_list(
    ui: &mut egui::Ui,
    locale: Locale,
    state: &mut ImpactState,
    feed: &NeoFeedState,
    refreshes: &mut MessageWriter<RefreshNeoFeed>,
) {
    if panel_header(ui, tr(locale, TextKey::AsteroidList)) {
        state.hide_panels();
        return;
    }

    ui.horizontal(|ui| {
        let refresh = ui.add_enabled(
            !feed.loading,
            egui::Button::new(format!("{} {}", icons::REFRESH, tr(locale, TextKey::Refresh))),
        );
        if refresh.clicked() {
            refreshes.write(RefreshNeoFeed);
        }
        if feed.loading {
            ui.spinner();
            ui.label(tr(locale, TextKey::Loading));
        }
    });

    if feed.error.is_some() {
        ui.label(
            egui::RichText::new(format!("{} {}", icons::WARNING, tr(locale, TextKey::FeedError)))
                .color(colors::HAZARD),
        );
    }

    if feed.asteroids.is_empty() {
        if !feed.loading && feed.error.is_none() {
            ui.label(tr(locale, TextKey::NoAsteroids));
        }
        return;
    }

    let selected_id = state.selected_asteroid().map(|s| s.id.clone());
    let mut picked: Option<&Asteroid> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        for asteroid in &feed.asteroids {
            let is_selected = selected_id.as_deref() == Some(asteroid.id.as_str());
            if render_asteroid_row(ui, locale, asteroid, is_selected) {
                picked = Some(asteroid);
            }
        }
    });

    if let Some(asteroid) = picked {
        let source = asteroid.to_source();
        match source.impactor() {
            Ok(_) => state.select_asteroid(asteroid.id.clone(), source),
            Err(e) => warn!("Cannot use {} as projectile: {e}", asteroid.name),
        }
    }
}

fn render_asteroid_row(
    ui: &mut egui::Ui,
    locale: Locale,
    asteroid: &Asteroid,
    selected: bool,
) -> bool {
    let frame = egui::Frame::group(ui.style()).stroke(if selected {
        egui::Stroke::new(1.5, colors::SELECTED)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    });

    let response = frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&asteroid.name).strong());
                if asteroid.hazardous {
                    ui.label(icons::icon_colored(icons::WARNING, 14.0, colors::HAZARD))
                        .on_hover_text(tr(locale, TextKey::Hazardous));
                }
            });
            ui.label(
                egui::RichText::new(format!(
                    "{}: {}",
                    tr(locale, TextKey::Diameter),
                    format::meters(locale, asteroid.mean_diameter_m())
                ))
                .color(colors::MUTED),
            );
            if let Some(approach) = asteroid.next_approach() {
                ui.label(
                    egui::RichText::new(format!(
                        "{} {}  {}",
                        icons::CALENDAR,
                        approach.date,
                        format::velocity(locale, approach.relative_velocity_km_s)
                    ))
                    .color(colors::MUTED),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "{}: {}",
                        tr(locale, TextKey::MissDistance),
                        format::distance_km(locale, approach.miss_distance_km)
                    ))
                    .color(colors::MUTED),
                );
            }
        })
        .response;

    ui.interact(response.rect, response.id.with("pick"), egui::Sense::click())
        .clicked()
}

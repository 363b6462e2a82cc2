//! Top bar: panel toggles, view settings, share link and reset.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::{MapLayer, Preferences, Theme};
use crate::i18n::{Locale, TextKey, layer_key, theme_key, tr};
use crate::share;
use crate::state::{ImpactState, ResetMessage};

use super::{UiState, icons};

/// Seconds the "link copied" confirmation stays up.
const COPIED_NOTICE_SECS: f64 = 2.0;

mod colors {
    use bevy_egui::egui::Color32;

    pub const ACTIVE: Color32 = Color32::from_rgb(255, 140, 60);
    pub const CONFIRM: Color32 = Color32::from_rgb(85, 221, 136);
}

pub fn toolbar_system(
    mut contexts: EguiContexts,
    mut state: ResMut<ImpactState>,
    mut prefs: ResMut<Preferences>,
    mut ui_state: ResMut<UiState>,
    mut resets: MessageWriter<ResetMessage>,
    time: Res<Time>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let locale = prefs.locale;
    let now = time.elapsed_secs_f64();

    egui::TopBottomPanel::top("toolbar")
        .frame(
            egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(12, 6)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 8.0;

                ui.label(icons::icon_colored(icons::METEOR, 20.0, colors::ACTIVE));
                ui.label(egui::RichText::new(tr(locale, TextKey::AppTitle)).strong().size(16.0));
                ui.separator();

                if panel_toggle(ui, icons::SLIDERS, tr(locale, TextKey::Sliders), state.show_sliders())
                {
                    state.toggle_sliders();
                }
                if panel_toggle(
                    ui,
                    icons::LIST,
                    tr(locale, TextKey::AsteroidList),
                    state.show_asteroid_list(),
                ) {
                    state.toggle_asteroid_list();
                }

                ui.separator();
                // Preferences are saved on change; only write back real edits.
                let mut edited = prefs.clone();
                render_view_controls(ui, &mut edited);
                if edited != *prefs {
                    *prefs = edited;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(format!("{} {}", icons::RESET, tr(locale, TextKey::Reset)))
                        .clicked()
                    {
                        resets.write(ResetMessage);
                    }

                    let copied = ui_state
                        .link_copied_at
                        .is_some_and(|t| now - t < COPIED_NOTICE_SECS);
                    if copied {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}",
                                icons::SUCCESS,
                                tr(locale, TextKey::LinkCopied)
                            ))
                            .color(colors::CONFIRM),
                        );
                    }
                    if ui
                        .button(format!("{} {}", icons::LINK, tr(locale, TextKey::CopyShareLink)))
                        .clicked()
                    {
                        let url = share::encode_url(&state.to_shared_state(prefs.map_3d));
                        info!("Share link: {url}");
                        ui.ctx().copy_text(url);
                        ui_state.link_copied_at = Some(now);
                    }
                });
            });
        });
}

/// Icon button that stays highlighted while its panel is open.
fn panel_toggle(ui: &mut egui::Ui, icon: &str, tooltip: &str, active: bool) -> bool {
    let color = if active {
        colors::ACTIVE
    } else {
        ui.visuals().text_color()
    };
    ui.add(egui::Button::new(icons::icon_colored(icon, 18.0, color)).selected(active))
        .on_hover_text(tooltip)
        .clicked()
}

fn render_view_controls(ui: &mut egui::Ui, prefs: &mut Preferences) {
    let locale = prefs.locale;

    // 2D / 3D
    let (icon, key) = if prefs.map_3d {
        (icons::MAP, TextKey::View2d)
    } else {
        (icons::GLOBE, TextKey::View3d)
    };
    if ui
        .button(egui::RichText::new(icon).size(18.0))
        .on_hover_text(tr(locale, key))
        .clicked()
    {
        prefs.map_3d = !prefs.map_3d;
    }

    // Map layer
    ui.label(egui::RichText::new(icons::LAYERS).size(16.0))
        .on_hover_text(tr(locale, TextKey::MapLayer));
    egui::ComboBox::from_id_salt("map_layer")
        .selected_text(tr(locale, layer_key(prefs.map_layer)))
        .show_ui(ui, |ui| {
            for option in MapLayer::ALL {
                ui.selectable_value(&mut prefs.map_layer, option, tr(locale, layer_key(option)));
            }
        });

    // Theme
    let (icon, next) = match prefs.theme {
        Theme::Dark => (icons::SUN, Theme::Light),
        Theme::Light => (icons::MOON, Theme::Dark),
    };
    if ui
        .button(egui::RichText::new(icon).size(18.0))
        .on_hover_text(format!(
            "{}: {}",
            tr(locale, TextKey::Theme),
            tr(locale, theme_key(next))
        ))
        .clicked()
    {
        prefs.theme = next;
    }

    // Language
    ui.label(egui::RichText::new(icons::LANGUAGE).size(16.0))
        .on_hover_text(tr(locale, TextKey::Language));
    egui::ComboBox::from_id_salt("locale")
        .selected_text(prefs.locale.native_name())
        .show_ui(ui, |ui| {
            for option in Locale::ALL {
                ui.selectable_value(&mut prefs.locale, option, option.native_name());
            }
        });
}

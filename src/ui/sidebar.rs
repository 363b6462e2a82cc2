//! Right-hand panel with the consequences of the current impact.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::Preferences;
use crate::i18n::{
    Locale, TextKey, action_key, confidence_key, severity_key, surface_key, threat_key, tr,
};
use crate::impact::{CUSTOM_SOURCE_NAME, ImpactEvent, SurfaceLookup};
use crate::physics::ThreatLevel;

use super::{format, icons};

const SIDEBAR_WIDTH: f32 = 320.0;

mod colors {
    use bevy_egui::egui::Color32;

    pub const THREAT_LOW: Color32 = Color32::from_rgb(85, 176, 85);
    pub const THREAT_MODERATE: Color32 = Color32::from_rgb(221, 187, 68);
    pub const THREAT_HIGH: Color32 = Color32::from_rgb(230, 120, 50);
    pub const THREAT_EXTREME: Color32 = Color32::from_rgb(224, 60, 60);
    pub const HAZARD: Color32 = Color32::from_rgb(224, 85, 85);
    pub const MUTED: Color32 = Color32::from_rgb(140, 140, 150);
}

pub fn threat_color(level: ThreatLevel) -> egui::Color32 {
    match level {
        ThreatLevel::Low => colors::THREAT_LOW,
        ThreatLevel::Moderate => colors::THREAT_MODERATE,
        ThreatLevel::High => colors::THREAT_HIGH,
        ThreatLevel::Extreme => colors::THREAT_EXTREME,
    }
}

pub fn sidebar_system(
    mut contexts: EguiContexts,
    state: Res<crate::state::ImpactState>,
    lookup: Res<SurfaceLookup>,
    prefs: Res<Preferences>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let locale = prefs.locale;

    egui::SidePanel::right("impact_details")
        .exact_width(SIDEBAR_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(tr(locale, TextKey::ImpactDetails));
            ui.separator();

            if lookup.is_loading() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(tr(locale, TextKey::Computing));
                });
                ui.add_space(8.0);
            }

            match &state.impact_event {
                Some(event) => {
                    egui::ScrollArea::vertical().show(ui, |ui| render_event(ui, locale, event));
                }
                None if !lookup.is_loading() => {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {}",
                            icons::INFO,
                            tr(locale, TextKey::ClickToImpact)
                        ))
                        .color(colors::MUTED),
                    );
                }
                None => {}
            }
        });
}

fn render_event(ui: &mut egui::Ui, locale: Locale, event: &ImpactEvent) {
    let details = &event.details;
    let c = &details.consequences;
    let m = &details.mitigation;

    // Threat banner
    let threat = threat_color(m.threat_level);
    egui::Frame::NONE
        .fill(threat.gamma_multiply(0.2))
        .stroke(egui::Stroke::new(1.0, threat))
        .corner_radius(6)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(format!(
                    "{} {}: {}",
                    icons::WARNING,
                    tr(locale, TextKey::ThreatLevel),
                    tr(locale, threat_key(m.threat_level))
                ))
                .strong()
                .color(threat),
            );
            ui.label(tr(locale, action_key(m.recommended_action)));
        });
    ui.add_space(8.0);

    section(ui, tr(locale, TextKey::Projectile), |ui| {
        let name = if details.source.name == CUSTOM_SOURCE_NAME {
            tr(locale, TextKey::Custom)
        } else {
            details.source.name.as_str()
        };
        row(ui, tr(locale, TextKey::Projectile), name);
        row(ui, tr(locale, TextKey::Diameter), &format::meters(locale, details.source.diameter));
        row(ui, tr(locale, TextKey::Velocity), &format::velocity(locale, details.source.velocity));
        if details.source.hazardous {
            ui.label(
                egui::RichText::new(format!("{} {}", icons::WARNING, tr(locale, TextKey::Hazardous)))
                    .color(colors::HAZARD),
            );
        }
        if let Some(url) = &details.source.jpl_url {
            ui.hyperlink_to("JPL Small-Body Database", url);
        }
    });

    section(ui, tr(locale, TextKey::Surface), |ui| {
        let surface = &details.surface;
        let description = if surface.is_fallback() {
            tr(locale, TextKey::AssumedWater)
        } else {
            surface.description.as_str()
        };
        row_icon(ui, icons::PIN, tr(locale, TextKey::Surface), tr(locale, surface_key(surface.surface)));
        ui.label(egui::RichText::new(description).color(colors::MUTED));
        row(ui, tr(locale, TextKey::Location), &surface.location);
        row(ui, tr(locale, TextKey::Confidence), tr(locale, confidence_key(surface.confidence)));
    });

    section(ui, tr(locale, TextKey::ImpactDetails), |ui| {
        row_icon(ui, icons::ENERGY, tr(locale, TextKey::Energy), &format::energy(locale, c.impact_energy));
        row_icon(
            ui,
            icons::SEISMIC,
            tr(locale, TextKey::SeismicMagnitude),
            &format::magnitude(locale, c.seismic_effect),
        );
        row_icon(
            ui,
            icons::BLAST,
            tr(locale, TextKey::AirBlastRadius),
            &format::distance_km(locale, c.air_blast),
        );
        row_icon(
            ui,
            icons::TARGET,
            tr(locale, TextKey::DevastationRadius),
            &format::distance_km(locale, c.devastation_radius),
        );
        row_icon(
            ui,
            icons::TARGET,
            tr(locale, TextKey::EvacuationRadius),
            &format::distance_km(locale, m.evacuation_radius),
        );
        row_icon(
            ui,
            icons::PEOPLE,
            tr(locale, TextKey::AffectedPopulation),
            &format::population(locale, details.affected_population),
        );
    });

    if let Some(tsunami) = &c.tsunami {
        section(ui, tr(locale, TextKey::Tsunami), |ui| {
            row_icon(
                ui,
                icons::WAVES,
                tr(locale, TextKey::WaveHeight),
                &format::meters(locale, tsunami.wave_height_m),
            );
            row(ui, tr(locale, TextKey::TsunamiRange), &format::distance_km(locale, tsunami.range_km));
            row(ui, tr(locale, TextKey::Severity), tr(locale, severity_key(tsunami.coastal_severity)));
        });
    }

    if let Some(crater) = &c.crater {
        section(ui, tr(locale, TextKey::Crater), |ui| {
            row_icon(
                ui,
                icons::FIRE,
                tr(locale, TextKey::FireballRadius),
                &format::distance_km(locale, crater.fireball_radius_km),
            );
            row(ui, tr(locale, TextKey::CraterDiameter), &format::distance_km(locale, crater.diameter_km));
            row(ui, tr(locale, TextKey::CraterDepth), &format::distance_km(locale, crater.depth_km));
            row(ui, tr(locale, TextKey::SeismicRange), &format::distance_km(locale, crater.seismic_range_km));
            row(ui, tr(locale, TextKey::Severity), tr(locale, severity_key(crater.severity)));
        });
    }
}

fn section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.add_space(4.0);
    ui.label(egui::RichText::new(title).strong());
    ui.indent(title, add_contents);
    ui.add_space(4.0);
}

fn row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(colors::MUTED));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}

fn row_icon(ui: &mut egui::Ui, icon: &str, label: &str, value: &str) {
    row(ui, &format!("{icon} {label}"), value);
}

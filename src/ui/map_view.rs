//! The map canvas: flat map or globe, impact rings and the meteor.
//!
//! Clicking the canvas writes an [`ImpactRequest`]. On the globe, dragging
//! rotates and scrolling zooms.

use bevy::math::Vec2;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::{MapLayer, Preferences, Theme};
use crate::impact::{ImpactEvent, ImpactRequest};
use crate::map::outlines::LANDMASSES;
use crate::map::{Globe, MapView, Viewport, equirect_project, equirect_unproject, ground_circle};
use crate::meteor::{MeteorAnimation, MeteorPhase};
use crate::state::ImpactState;
use crate::types::LatLng;

/// Vertices per impact ring.
const RING_SEGMENTS: usize = 120;

/// Graticule spacing in degrees.
const GRATICULE_STEP: i32 = 30;

/// Screen offset the meteor streak starts from, relative to the target.
const STREAK_OFFSET: egui::Vec2 = egui::vec2(-160.0, -200.0);

struct Palette {
    background: egui::Color32,
    ocean: egui::Color32,
    land: egui::Color32,
    graticule: egui::Color32,
}

impl Palette {
    fn new(layer: MapLayer, theme: Theme) -> Self {
        use egui::Color32;
        match (layer, theme) {
            (MapLayer::Night, _) => Self {
                background: Color32::from_rgb(5, 5, 12),
                ocean: Color32::from_rgb(10, 14, 30),
                land: Color32::from_rgb(230, 190, 90),
                graticule: Color32::from_rgba_unmultiplied(120, 120, 160, 40),
            },
            (MapLayer::Terrain, _) => Self {
                background: Color32::from_rgb(20, 26, 30),
                ocean: Color32::from_rgb(36, 78, 110),
                land: Color32::from_rgb(120, 170, 90),
                graticule: Color32::from_rgba_unmultiplied(200, 220, 200, 40),
            },
            (MapLayer::Political, Theme::Dark) => Self {
                background: Color32::from_rgb(18, 18, 26),
                ocean: Color32::from_rgb(28, 40, 64),
                land: Color32::from_rgb(190, 190, 200),
                graticule: Color32::from_rgba_unmultiplied(200, 200, 220, 35),
            },
            (MapLayer::Political, Theme::Light) => Self {
                background: Color32::from_rgb(235, 235, 240),
                ocean: Color32::from_rgb(170, 205, 235),
                land: Color32::from_rgb(90, 90, 100),
                graticule: Color32::from_rgba_unmultiplied(60, 60, 90, 40),
            },
        }
    }
}

mod colors {
    use bevy_egui::egui::Color32;

    pub const DEVASTATION: Color32 = Color32::from_rgb(224, 60, 60);
    pub const AIR_BLAST: Color32 = Color32::from_rgb(240, 140, 50);
    pub const EVACUATION: Color32 = Color32::from_rgb(230, 200, 70);
    pub const TSUNAMI: Color32 = Color32::from_rgb(80, 160, 240);
    pub const METEOR: Color32 = Color32::from_rgb(255, 200, 120);
}

/// Either projection, in egui screen space.
enum Projector {
    Flat(Viewport),
    Globe(Globe),
}

impl Projector {
    fn project(&self, position: LatLng) -> Option<egui::Pos2> {
        let point = match self {
            Projector::Flat(viewport) => Some(equirect_project(position, *viewport)),
            Projector::Globe(globe) => globe.project(position),
        };
        point.map(|p| egui::pos2(p.x, p.y))
    }

    fn unproject(&self, point: egui::Pos2) -> Option<LatLng> {
        let point = Vec2::new(point.x, point.y);
        match self {
            Projector::Flat(viewport) => equirect_unproject(point, *viewport),
            Projector::Globe(globe) => globe.unproject(point),
        }
    }

    /// Whether the segment between two consecutive path vertices must not be
    /// drawn (crossing the antimeridian on the flat map).
    fn breaks(&self, a: LatLng, b: LatLng) -> bool {
        matches!(self, Projector::Flat(_)) && (a.lng - b.lng).abs() > 180.0
    }
}

pub fn map_view_system(
    mut contexts: EguiContexts,
    state: Res<ImpactState>,
    prefs: Res<Preferences>,
    mut view: ResMut<MapView>,
    animation: Res<MeteorAnimation>,
    mut requests: MessageWriter<ImpactRequest>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let palette = Palette::new(prefs.map_layer, prefs.theme);

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(palette.background))
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;

            let projector = if prefs.map_3d {
                let radius = 0.45 * rect.width().min(rect.height()) * view.zoom;
                Projector::Globe(Globe {
                    center: view.globe_center,
                    origin: Vec2::new(rect.center().x, rect.center().y),
                    radius,
                })
            } else {
                // Largest 2:1 rectangle that fits.
                let width = rect.width().min(rect.height() * 2.0);
                let size = Vec2::new(width, width / 2.0);
                let min = Vec2::new(rect.center().x, rect.center().y) - size / 2.0;
                Projector::Flat(Viewport::new(min, size))
            };

            draw_base(&painter, &projector, &palette);
            draw_graticule(&painter, &projector, palette.graticule);
            for landmass in LANDMASSES {
                let outline = landmass.outline.iter().map(|&(lat, lng)| LatLng::new(lat, lng));
                draw_path(&painter, &projector, outline, egui::Stroke::new(1.2, palette.land));
            }

            if let Some(event) = &state.impact_event {
                draw_impact(&painter, &projector, event);
            }
            if let Some(phase) = animation.phase()
                && let Some(target) = animation.target().and_then(|t| projector.project(t))
            {
                draw_meteor(&painter, target, phase);
            }

            // Input
            if response.clicked()
                && let Some(pointer) = response.interact_pointer_pos()
                && let Some(position) = projector.unproject(pointer)
            {
                requests.write(ImpactRequest { position });
            }

            if let Projector::Globe(globe) = &projector {
                if response.dragged() {
                    let delta = response.drag_delta();
                    view.rotate_by(Vec2::new(delta.x, delta.y), globe.radius);
                }
                if response.hovered() {
                    let scroll = ui.input(|i| i.smooth_scroll_delta.y);
                    if scroll != 0.0 {
                        view.zoom_by(scroll / 50.0);
                    }
                }
            }

            if let Some(hover) = response.hover_pos().and_then(|p| projector.unproject(p)) {
                painter.text(
                    rect.left_bottom() + egui::vec2(8.0, -8.0),
                    egui::Align2::LEFT_BOTTOM,
                    hover.to_string(),
                    egui::FontId::monospace(12.0),
                    palette.land,
                );
            }

            if animation.is_active() || view.focus.is_some() {
                ui.ctx().request_repaint();
            }
        });
}

fn draw_base(painter: &egui::Painter, projector: &Projector, palette: &Palette) {
    match projector {
        Projector::Flat(viewport) => {
            let rect = egui::Rect::from_min_size(
                egui::pos2(viewport.min.x, viewport.min.y),
                egui::vec2(viewport.size.x, viewport.size.y),
            );
            painter.rect_filled(rect, 0.0, palette.ocean);
        }
        Projector::Globe(globe) => {
            let center = egui::pos2(globe.origin.x, globe.origin.y);
            painter.circle_filled(center, globe.radius, palette.ocean);
            painter.circle_stroke(center, globe.radius, egui::Stroke::new(1.0, palette.graticule));
        }
    }
}

fn draw_graticule(painter: &egui::Painter, projector: &Projector, color: egui::Color32) {
    let stroke = egui::Stroke::new(1.0, color);
    for lat in (-90 + GRATICULE_STEP..90).step_by(GRATICULE_STEP as usize) {
        let line = (-180..=180).step_by(5).map(|lng| LatLng::new(lat.into(), lng.into()));
        draw_path(painter, projector, line, stroke);
    }
    for lng in (-180..180).step_by(GRATICULE_STEP as usize) {
        let line = (-90..=90).step_by(5).map(|lat| LatLng::new(lat.into(), lng.into()));
        draw_path(painter, projector, line, stroke);
    }
}

/// Draw a polyline, splitting it where it leaves the visible hemisphere or
/// wraps around the flat map. Returns the screen points if nothing was split.
fn draw_path(
    painter: &egui::Painter,
    projector: &Projector,
    points: impl IntoIterator<Item = LatLng>,
    stroke: egui::Stroke,
) -> Option<Vec<egui::Pos2>> {
    let mut segment: Vec<egui::Pos2> = Vec::new();
    let mut previous: Option<LatLng> = None;
    let mut split = false;

    let flush = |segment: &mut Vec<egui::Pos2>| {
        if segment.len() >= 2 {
            painter.add(egui::Shape::line(std::mem::take(segment), stroke));
        } else {
            segment.clear();
        }
    };

    for position in points {
        if previous.is_some_and(|p| projector.breaks(p, position)) {
            flush(&mut segment);
            split = true;
        }
        match projector.project(position) {
            Some(point) => segment.push(point),
            None => {
                flush(&mut segment);
                split = true;
            }
        }
        previous = Some(position);
    }

    if split {
        flush(&mut segment);
        None
    } else {
        let whole = segment.clone();
        flush(&mut segment);
        Some(whole)
    }
}

fn draw_ring(
    painter: &egui::Painter,
    projector: &Projector,
    center: LatLng,
    radius_km: f64,
    color: egui::Color32,
) {
    if radius_km <= 0.0 {
        return;
    }
    let mut points = ground_circle(center, radius_km, RING_SEGMENTS);
    if let Some(first) = points.first().copied() {
        points.push(first);
    }

    let stroke = egui::Stroke::new(2.0, color);
    if let Some(outline) = draw_path(painter, projector, points, stroke) {
        painter.add(egui::Shape::convex_polygon(
            outline,
            color.gamma_multiply(0.12),
            egui::Stroke::NONE,
        ));
    }
}

fn draw_impact(painter: &egui::Painter, projector: &Projector, event: &ImpactEvent) {
    let c = &event.details.consequences;
    let m = &event.details.mitigation;

    if let Some(tsunami) = &c.tsunami {
        draw_ring(painter, projector, event.position, tsunami.range_km, colors::TSUNAMI);
    }
    draw_ring(painter, projector, event.position, m.evacuation_radius, colors::EVACUATION);
    draw_ring(painter, projector, event.position, c.air_blast, colors::AIR_BLAST);
    draw_ring(painter, projector, event.position, event.radius_km(), colors::DEVASTATION);

    if let Some(center) = projector.project(event.position) {
        painter.circle_filled(center, 4.0, colors::DEVASTATION);
        painter.circle_stroke(center, 6.0, egui::Stroke::new(1.5, egui::Color32::WHITE));
    }
}

fn draw_meteor(painter: &egui::Painter, target: egui::Pos2, phase: MeteorPhase) {
    match phase {
        MeteorPhase::Incoming { progress } => {
            let start = target + STREAK_OFFSET;
            let head = start + (target - start) * progress;
            let tail = start + (target - start) * (progress - 0.35).max(0.0);
            painter.line_segment(
                [tail, head],
                egui::Stroke::new(3.0, colors::METEOR.gamma_multiply(0.6)),
            );
            painter.circle_filled(head, 5.0, colors::METEOR);
        }
        MeteorPhase::Flash { progress } => {
            let radius = 8.0 + 40.0 * progress;
            let fade = 1.0 - progress;
            painter.circle_filled(target, radius, colors::METEOR.gamma_multiply(0.5 * fade));
            painter.circle_stroke(
                target,
                radius,
                egui::Stroke::new(2.0, egui::Color32::WHITE.gamma_multiply(fade)),
            );
        }
    }
}

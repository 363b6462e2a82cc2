//! Map state: globe orientation and zoom.
//!
//! Whether the flat map or the globe is shown lives in
//! [`Preferences::map_3d`](crate::config::Preferences); this module keeps
//! the per-session view parameters and the projection math.

pub mod outlines;
pub mod projection;

use bevy::prelude::*;

pub use projection::{Globe, Viewport, equirect_project, equirect_unproject, ground_circle};

use crate::meteor::MeteorStrike;
use crate::types::LatLng;

/// Closest zoom (globe radius as a multiple of the fitted radius).
pub const MIN_ZOOM: f32 = 0.5;

/// Furthest zoom.
pub const MAX_ZOOM: f32 = 8.0;

/// Zoom factor per scroll line.
pub const ZOOM_SPEED: f32 = 0.1;

/// Degrees of rotation per pixel of drag at zoom 1 and a 100 px globe.
pub const ROTATE_SPEED: f64 = 0.6;

/// How fast the globe swings to a new impact (fraction per second).
pub const FOCUS_SPEED: f64 = 4.0;

#[derive(Resource, Debug, Clone)]
pub struct MapView {
    /// Point facing the viewer on the globe.
    pub globe_center: LatLng,
    pub zoom: f32,
    /// Where the globe is turning to, if anywhere.
    pub focus: Option<LatLng>,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            globe_center: LatLng::new(20.0, 0.0),
            zoom: 1.0,
            focus: None,
        }
    }
}

impl MapView {
    /// Rotate the globe by a screen drag of `delta` pixels.
    pub fn rotate_by(&mut self, delta: Vec2, globe_radius: f32) {
        if globe_radius <= 0.0 {
            return;
        }
        let scale = ROTATE_SPEED * 100.0 / f64::from(globe_radius);
        self.globe_center = LatLng::new(
            (self.globe_center.lat + f64::from(delta.y) * scale).clamp(-89.0, 89.0),
            self.globe_center.lng - f64::from(delta.x) * scale,
        )
        .wrapped();
        self.focus = None;
    }

    pub fn zoom_by(&mut self, scroll_lines: f32) {
        self.zoom = (self.zoom * (1.0 + scroll_lines * ZOOM_SPEED)).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Move the globe center towards the focus point.
    pub fn advance_focus(&mut self, dt: f64) {
        let Some(target) = self.focus else {
            return;
        };

        let t = (FOCUS_SPEED * dt).clamp(0.0, 1.0);
        // Shortest way round in longitude.
        let d_lng = (target.lng - self.globe_center.lng + 540.0).rem_euclid(360.0) - 180.0;
        let d_lat = target.lat - self.globe_center.lat;

        if d_lng.abs() < 0.05 && d_lat.abs() < 0.05 {
            self.globe_center = target;
            self.focus = None;
            return;
        }

        self.globe_center = LatLng::new(
            self.globe_center.lat + d_lat * t,
            self.globe_center.lng + d_lng * t,
        )
        .wrapped();
    }
}

fn focus_on_strike(mut strikes: MessageReader<MeteorStrike>, mut view: ResMut<MapView>) {
    if let Some(strike) = strikes.read().last() {
        view.focus = Some(strike.target);
    }
}

fn animate_focus(time: Res<Time>, mut view: ResMut<MapView>) {
    if view.focus.is_some() {
        view.advance_focus(f64::from(time.delta_secs()));
    }
}

pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapView>()
            .add_systems(Update, (focus_on_strike, animate_focus).chain());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamped() {
        let mut view = MapView::default();
        for _ in 0..200 {
            view.zoom_by(1.0);
        }
        assert_eq!(view.zoom, MAX_ZOOM);
        for _ in 0..200 {
            view.zoom_by(-1.0);
        }
        assert_eq!(view.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_rotate_keeps_latitude_in_range() {
        let mut view = MapView::default();
        view.rotate_by(Vec2::new(0.0, 10_000.0), 100.0);
        assert!(view.globe_center.lat <= 89.0);
        assert!(view.globe_center.is_valid());
    }

    #[test]
    fn test_focus_takes_short_way_across_dateline() {
        let mut view = MapView {
            globe_center: LatLng::new(0.0, 170.0),
            focus: Some(LatLng::new(0.0, -170.0)),
            ..Default::default()
        };
        view.advance_focus(0.1);
        // Heading east across 180, not west across Africa.
        assert!(view.globe_center.lng > 170.0 || view.globe_center.lng < -170.0);
    }

    #[test]
    fn test_focus_converges() {
        let target = LatLng::new(35.0, 139.0);
        let mut view = MapView {
            focus: Some(target),
            ..Default::default()
        };
        for _ in 0..200 {
            view.advance_focus(1.0 / 60.0);
        }
        assert!(view.focus.is_none());
        assert_eq!(view.globe_center, target);
    }
}

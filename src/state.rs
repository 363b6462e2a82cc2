//! The application store: current impact, panel visibility and projectile.
//!
//! All mutation goes through the methods below so the invariants hold:
//! at most one side panel is open (enforced by [`Panel`]) and slider values
//! stay inside their ranges.

use std::ops::RangeInclusive;

use bevy::prelude::*;

use crate::impact::{ImpactEvent, ImpactSource};
use crate::share::{SharedProjectile, SharedState};

/// Allowed diameters (m).
pub const DIAMETER_RANGE_M: RangeInclusive<f64> = 1.0..=20_000.0;

/// Allowed velocities (km/s). Earth impacts fall between escape velocity and
/// the fastest retrograde encounters.
pub const VELOCITY_RANGE_KM_S: RangeInclusive<f64> = 11.0..=72.0;

pub const DEFAULT_DIAMETER_M: f64 = 550.0;
pub const DEFAULT_VELOCITY_KM_S: f64 = 20.0;

/// Which side panel is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Hidden,
    Sliders,
    AsteroidList,
}

/// A catalogued asteroid chosen as the projectile.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedAsteroid {
    /// NASA NeoWs id.
    pub id: String,
    pub source: ImpactSource,
}

/// Message to clear the current impact and selection.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ResetMessage;

#[derive(Resource, Clone, Debug)]
pub struct ImpactState {
    /// Most recent impact, replaced on every click.
    pub impact_event: Option<ImpactEvent>,
    panel: Panel,
    diameter_m: f64,
    velocity_km_s: f64,
    selected_asteroid: Option<SelectedAsteroid>,
}

impl Default for ImpactState {
    fn default() -> Self {
        Self {
            impact_event: None,
            panel: Panel::Hidden,
            diameter_m: DEFAULT_DIAMETER_M,
            velocity_km_s: DEFAULT_VELOCITY_KM_S,
            selected_asteroid: None,
        }
    }
}

impl ImpactState {
    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn show_sliders(&self) -> bool {
        self.panel == Panel::Sliders
    }

    pub fn show_asteroid_list(&self) -> bool {
        self.panel == Panel::AsteroidList
    }

    pub fn diameter_m(&self) -> f64 {
        self.diameter_m
    }

    pub fn velocity_km_s(&self) -> f64 {
        self.velocity_km_s
    }

    pub fn selected_asteroid(&self) -> Option<&SelectedAsteroid> {
        self.selected_asteroid.as_ref()
    }

    pub fn set_impact_event(&mut self, event: ImpactEvent) {
        self.impact_event = Some(event);
    }

    /// Clear the impact and selection and restore default sliders.
    pub fn reset(&mut self) {
        let panel = self.panel;
        *self = Self::default();
        self.panel = panel;
    }

    pub fn toggle_sliders(&mut self) {
        self.panel = match self.panel {
            Panel::Sliders => Panel::Hidden,
            _ => Panel::Sliders,
        };
    }

    pub fn toggle_asteroid_list(&mut self) {
        self.panel = match self.panel {
            Panel::AsteroidList => Panel::Hidden,
            _ => Panel::AsteroidList,
        };
    }

    pub fn hide_panels(&mut self) {
        self.panel = Panel::Hidden;
    }

    /// Set the diameter; an explicit slider value turns the projectile custom.
    pub fn set_diameter(&mut self, diameter_m: f64) {
        if diameter_m.is_nan() {
            return;
        }
        self.diameter_m = diameter_m.clamp(*DIAMETER_RANGE_M.start(), *DIAMETER_RANGE_M.end());
        self.selected_asteroid = None;
    }

    /// Set the velocity; an explicit slider value turns the projectile custom.
    pub fn set_velocity(&mut self, velocity_km_s: f64) {
        if velocity_km_s.is_nan() {
            return;
        }
        self.velocity_km_s =
            velocity_km_s.clamp(*VELOCITY_RANGE_KM_S.start(), *VELOCITY_RANGE_KM_S.end());
        self.selected_asteroid = None;
    }

    /// Use a catalogued asteroid as the projectile and close the list.
    ///
    /// Slider values mirror the asteroid (clamped for display), while the
    /// source keeps the catalogue values untouched.
    pub fn select_asteroid(&mut self, id: impl Into<String>, source: ImpactSource) {
        self.diameter_m = source
            .diameter
            .clamp(*DIAMETER_RANGE_M.start(), *DIAMETER_RANGE_M.end());
        self.velocity_km_s = source
            .velocity
            .clamp(*VELOCITY_RANGE_KM_S.start(), *VELOCITY_RANGE_KM_S.end());
        self.selected_asteroid = Some(SelectedAsteroid {
            id: id.into(),
            source,
        });
        if self.panel == Panel::AsteroidList {
            self.panel = Panel::Hidden;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_asteroid = None;
    }

    /// The projectile the next click will use.
    pub fn current_source(&self) -> ImpactSource {
        match &self.selected_asteroid {
            Some(selected) => selected.source.clone(),
            None => ImpactSource::custom(self.diameter_m, self.velocity_km_s),
        }
    }

    /// Snapshot for a share link.
    pub fn to_shared_state(&self, map_3d: bool) -> SharedState {
        let projectile = match &self.selected_asteroid {
            Some(selected) => SharedProjectile::Asteroid {
                id: selected.id.clone(),
                data: Some(selected.source.clone()),
            },
            None => SharedProjectile::Custom {
                diameter: self.diameter_m,
                velocity: self.velocity_km_s,
            },
        };
        SharedState {
            position: self.impact_event.as_ref().map(|event| event.position),
            projectile: Some(projectile),
            map_3d,
        }
    }

    /// Restore the projectile from a share link.
    ///
    /// An asteroid without its data cannot be restored offline and is ignored.
    pub fn apply_shared_state(&mut self, shared: &SharedState) {
        match &shared.projectile {
            Some(SharedProjectile::Custom { diameter, velocity }) => {
                self.set_diameter(*diameter);
                self.set_velocity(*velocity);
            }
            Some(SharedProjectile::Asteroid {
                id,
                data: Some(source),
            }) => {
                self.select_asteroid(id.clone(), source.clone());
            }
            Some(SharedProjectile::Asteroid { id, data: None }) => {
                warn!("Shared link names asteroid {id} without its data, ignoring");
            }
            None => {}
        }
    }
}

/// Apply reset messages to the store.
pub fn handle_reset(mut resets: MessageReader<ResetMessage>, mut state: ResMut<ImpactState>) {
    if resets.read().next().is_none() {
        return;
    }
    resets.clear();
    state.reset();
    info!("Impact state reset");
}

/// Plugin owning the store.
pub struct StatePlugin;

impl Plugin for StatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImpactState>()
            .add_message::<ResetMessage>()
            .add_systems(Update, handle_reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LatLng;

    fn bennu() -> ImpactSource {
        ImpactSource {
            name: "101955 Bennu (1999 RQ36)".to_string(),
            diameter: 490.0,
            velocity: 12.7,
            hazardous: true,
            close_approach_date: Some("2135-09-25".to_string()),
            miss_distance: None,
            absolute_magnitude: Some(20.19),
            jpl_url: None,
        }
    }

    #[test]
    fn test_panels_mutually_exclusive() {
        let mut state = ImpactState::default();
        state.toggle_sliders();
        assert!(state.show_sliders() && !state.show_asteroid_list());

        state.toggle_asteroid_list();
        assert!(state.show_asteroid_list() && !state.show_sliders());

        state.toggle_asteroid_list();
        assert_eq!(state.panel(), Panel::Hidden);
    }

    #[test]
    fn test_sliders_clamp() {
        let mut state = ImpactState::default();
        state.set_diameter(1e9);
        assert_eq!(state.diameter_m(), *DIAMETER_RANGE_M.end());
        state.set_velocity(1.0);
        assert_eq!(state.velocity_km_s(), *VELOCITY_RANGE_KM_S.start());
        state.set_velocity(f64::NAN);
        assert_eq!(state.velocity_km_s(), *VELOCITY_RANGE_KM_S.start());
    }

    #[test]
    fn test_select_asteroid_closes_list_and_sets_sliders() {
        let mut state = ImpactState::default();
        state.toggle_asteroid_list();
        state.select_asteroid("2101955", bennu());

        assert_eq!(state.panel(), Panel::Hidden);
        assert_eq!(state.diameter_m(), 490.0);
        assert_eq!(state.velocity_km_s(), 12.7);
        assert_eq!(state.current_source(), bennu());
    }

    #[test]
    fn test_slider_change_clears_selection() {
        let mut state = ImpactState::default();
        state.select_asteroid("2101955", bennu());
        state.set_diameter(100.0);
        assert!(state.selected_asteroid().is_none());
        assert_eq!(state.current_source(), ImpactSource::custom(100.0, 12.7));
    }

    #[test]
    fn test_reset_restores_defaults_but_keeps_panel() {
        let mut state = ImpactState::default();
        state.toggle_sliders();
        state.set_diameter(42.0);
        state.select_asteroid("2101955", bennu());
        state.reset();

        assert!(state.impact_event.is_none());
        assert!(state.selected_asteroid().is_none());
        assert_eq!(state.diameter_m(), DEFAULT_DIAMETER_M);
        assert!(state.show_sliders());
    }

    #[test]
    fn test_shared_state_round_trip_through_store() {
        let mut state = ImpactState::default();
        state.select_asteroid("2101955", bennu());
        let shared = state.to_shared_state(true);
        assert!(shared.map_3d);
        assert!(shared.position.is_none());

        let mut restored = ImpactState::default();
        restored.apply_shared_state(&shared);
        assert_eq!(restored.current_source(), bennu());
        assert_eq!(restored.selected_asteroid().map(|s| s.id.as_str()), Some("2101955"));
    }

    #[test]
    fn test_asteroid_without_data_ignored() {
        let mut state = ImpactState::default();
        state.apply_shared_state(&SharedState {
            position: Some(LatLng::new(1.0, 2.0)),
            projectile: Some(SharedProjectile::Asteroid {
                id: "123".to_string(),
                data: None,
            }),
            map_3d: false,
        });
        assert!(state.selected_asteroid().is_none());
    }
}

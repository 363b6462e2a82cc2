//! Meteor strike animation.
//!
//! Producing an impact writes a [`MeteorStrike`] message; the
//! [`MeteorAnimation`] resource picks it up and the map view reads the
//! animation progress when drawing. Nothing outside the ECS can fire it.

use bevy::prelude::*;

use crate::types::LatLng;

/// Seconds the incoming streak is visible.
pub const STREAK_DURATION: f32 = 0.8;

/// Seconds the flash lasts after touchdown.
pub const FLASH_DURATION: f32 = 0.6;

/// Request to play the strike animation at a position.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct MeteorStrike {
    pub target: LatLng,
}

/// Current phase of the animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeteorPhase {
    /// Streak in flight, progress 0..1.
    Incoming { progress: f32 },
    /// Flash at the impact point, progress 0..1.
    Flash { progress: f32 },
}

#[derive(Resource, Default, Debug)]
pub struct MeteorAnimation {
    target: Option<LatLng>,
    elapsed: f32,
}

impl MeteorAnimation {
    /// Start (or restart) the animation towards `target`.
    pub fn start(&mut self, target: LatLng) {
        self.target = Some(target);
        self.elapsed = 0.0;
    }

    /// Advance by `dt` seconds; the animation ends after the flash.
    pub fn advance(&mut self, dt: f32) {
        if self.target.is_none() {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= STREAK_DURATION + FLASH_DURATION {
            self.target = None;
            self.elapsed = 0.0;
        }
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<LatLng> {
        self.target
    }

    pub fn phase(&self) -> Option<MeteorPhase> {
        self.target?;
        if self.elapsed < STREAK_DURATION {
            Some(MeteorPhase::Incoming {
                progress: self.elapsed / STREAK_DURATION,
            })
        } else {
            Some(MeteorPhase::Flash {
                progress: ((self.elapsed - STREAK_DURATION) / FLASH_DURATION).min(1.0),
            })
        }
    }
}

/// Start animations for new strikes. The latest strike in a frame wins.
pub fn start_meteor_animation(
    mut strikes: MessageReader<MeteorStrike>,
    mut animation: ResMut<MeteorAnimation>,
) {
    if let Some(strike) = strikes.read().last() {
        animation.start(strike.target);
    }
}

pub fn advance_meteor_animation(time: Res<Time>, mut animation: ResMut<MeteorAnimation>) {
    animation.advance(time.delta_secs());
}

pub struct MeteorPlugin;

impl Plugin for MeteorPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MeteorStrike>()
            .init_resource::<MeteorAnimation>()
            .add_systems(
                Update,
                (start_meteor_animation, advance_meteor_animation).chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_phases() {
        let mut animation = MeteorAnimation::default();
        assert!(animation.phase().is_none());

        animation.start(LatLng::new(10.0, 20.0));
        assert_eq!(
            animation.phase(),
            Some(MeteorPhase::Incoming { progress: 0.0 })
        );

        animation.advance(STREAK_DURATION + FLASH_DURATION / 2.0);
        match animation.phase() {
            Some(MeteorPhase::Flash { progress }) => assert!((progress - 0.5).abs() < 1e-4),
            other => panic!("expected flash, got {other:?}"),
        }

        animation.advance(FLASH_DURATION);
        assert!(!animation.is_active());
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut animation = MeteorAnimation::default();
        animation.start(LatLng::new(0.0, 0.0));
        animation.advance(0.5);
        animation.start(LatLng::new(5.0, 5.0));
        assert_eq!(animation.target(), Some(LatLng::new(5.0, 5.0)));
        assert_eq!(
            animation.phase(),
            Some(MeteorPhase::Incoming { progress: 0.0 })
        );
    }
}

//! Famous impactors, historical and hypothetical.
//!
//! Selecting a preset sets the sliders. Presets with a known site can also
//! replay the impact there.

use bevy::prelude::*;

use crate::impact::ImpactRequest;
use crate::state::ImpactState;
use crate::types::LatLng;

/// A named projectile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub diameter_m: f64,
    pub velocity_km_s: f64,
    /// Where it fell, if it did.
    pub site: Option<LatLng>,
}

/// All presets, smallest first.
pub static PRESETS: &[Preset] = &[
    CHELYABINSK,
    BARRINGER,
    TUNGUSKA,
    APOPHIS,
    IMPACTOR_2025,
    CHICXULUB,
];

/// 2013 airburst over the southern Urals.
pub static CHELYABINSK: Preset = Preset {
    id: "chelyabinsk",
    name: "Chelyabinsk",
    description: "2013 airburst, about 1,500 injured by the shock wave.",
    diameter_m: 20.0,
    velocity_km_s: 19.0,
    site: Some(LatLng::new(54.8, 61.1)),
};

/// Iron impactor that dug Meteor Crater, ~50,000 years ago.
pub static BARRINGER: Preset = Preset {
    id: "barringer",
    name: "Barringer",
    description: "Meteor Crater, Arizona. 1.2 km wide, about 50,000 years old.",
    diameter_m: 50.0,
    velocity_km_s: 12.8,
    site: Some(LatLng::new(35.027, -111.022)),
};

/// 1908 airburst that flattened 2,000 km² of Siberian forest.
pub static TUNGUSKA: Preset = Preset {
    id: "tunguska",
    name: "Tunguska",
    description: "1908 airburst, 80 million trees flattened.",
    diameter_m: 60.0,
    velocity_km_s: 27.0,
    site: Some(LatLng::new(60.886, 101.894)),
};

pub static APOPHIS: Preset = Preset {
    id: "apophis",
    name: "Apophis",
    description: "Passes within 32,000 km of Earth in April 2029.",
    diameter_m: 370.0,
    velocity_km_s: 12.6,
    site: None,
};

/// The default projectile.
pub static IMPACTOR_2025: Preset = Preset {
    id: "impactor_2025",
    name: "Impactor-2025",
    description: "Hypothetical planetary defense exercise object.",
    diameter_m: 550.0,
    velocity_km_s: 20.0,
    site: None,
};

/// The dinosaur killer.
pub static CHICXULUB: Preset = Preset {
    id: "chicxulub",
    name: "Chicxulub",
    description: "66 million years ago, ended the Cretaceous.",
    diameter_m: 10_000.0,
    velocity_km_s: 20.0,
    site: Some(LatLng::new(21.4, -89.5)),
};

pub fn get_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Load a preset into the sliders, optionally striking its site.
#[derive(Message, Clone, Copy, Debug)]
pub struct LoadPresetMessage {
    pub preset_id: &'static str,
    pub strike_site: bool,
}

fn handle_load_preset(
    mut loads: MessageReader<LoadPresetMessage>,
    mut state: ResMut<ImpactState>,
    mut requests: MessageWriter<ImpactRequest>,
) {
    for load in loads.read() {
        let Some(preset) = get_preset(load.preset_id) else {
            warn!("Unknown preset: {}", load.preset_id);
            continue;
        };

        state.set_diameter(preset.diameter_m);
        state.set_velocity(preset.velocity_km_s);
        info!("Loaded preset: {}", preset.name);

        if load.strike_site
            && let Some(site) = preset.site
        {
            requests.write(ImpactRequest { position: site });
        }
    }
}

pub struct PresetPlugin;

impl Plugin for PresetPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LoadPresetMessage>()
            .add_systems(Update, handle_load_preset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::kinetic_energy_megatons;
    use crate::state::{DIAMETER_RANGE_M, VELOCITY_RANGE_KM_S};

    #[test]
    fn test_preset_ids_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_presets_fit_slider_ranges() {
        for preset in PRESETS {
            assert!(DIAMETER_RANGE_M.contains(&preset.diameter_m), "{}", preset.id);
            assert!(VELOCITY_RANGE_KM_S.contains(&preset.velocity_km_s), "{}", preset.id);
            if let Some(site) = preset.site {
                assert!(site.is_valid(), "{}", preset.id);
            }
        }
    }

    #[test]
    fn test_chicxulub_dwarfs_chelyabinsk() {
        let small = kinetic_energy_megatons(CHELYABINSK.diameter_m, CHELYABINSK.velocity_km_s);
        let large = kinetic_energy_megatons(CHICXULUB.diameter_m, CHICXULUB.velocity_km_s);
        assert!(small < 1.0);
        assert!(large > 1e7);
    }

    #[test]
    fn test_get_preset() {
        assert_eq!(get_preset("tunguska").map(|p| p.diameter_m), Some(60.0));
        assert!(get_preset("nope").is_none());
    }
}

//! Share links survive encode/decode, and hostile input never panics.

use impact_lab::impact::ImpactSource;
use impact_lab::share::{self, SharedProjectile, SharedState};
use impact_lab::state::ImpactState;
use impact_lab::types::LatLng;
use proptest::prelude::*;

fn position() -> impl Strategy<Value = Option<LatLng>> {
    prop::option::of((-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(lat, lng)| LatLng::new(lat, lng)))
}

fn projectile() -> impl Strategy<Value = Option<SharedProjectile>> {
    let custom = (1.0..20_000.0f64, 11.0..72.0f64)
        .prop_map(|(diameter, velocity)| SharedProjectile::Custom { diameter, velocity });
    let asteroid = ("[0-9]{4,8}", "[A-Za-z0-9 ()]{1,24}", 1.0..5_000.0f64, 1.0..40.0f64, any::<bool>())
        .prop_map(|(id, name, diameter, velocity, hazardous)| SharedProjectile::Asteroid {
            id,
            data: Some(ImpactSource {
                name,
                hazardous,
                ..ImpactSource::custom(diameter, velocity)
            }),
        });
    prop::option::of(prop_oneof![custom, asteroid])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_state_round_trips(position in position(), projectile in projectile(), map_3d in any::<bool>()) {
        let state = SharedState { position, projectile, map_3d };
        prop_assert_eq!(share::decode(&share::encode_url(&state)), state);
    }

    #[test]
    fn prop_decode_never_panics(input in ".{0,200}") {
        let decoded = share::decode(&input);
        if let Some(position) = decoded.position {
            prop_assert!(position.is_valid());
        }
    }
}

#[test]
fn test_store_snapshot_restores_projectile() {
    let mut original = ImpactState::default();
    original.set_diameter(1234.0);
    original.set_velocity(33.5);

    let link = share::encode_url(&original.to_shared_state(true));
    let decoded = share::decode(&link);
    assert!(decoded.map_3d);

    let mut restored = ImpactState::default();
    restored.apply_shared_state(&decoded);
    assert_eq!(restored.diameter_m(), 1234.0);
    assert_eq!(restored.velocity_km_s(), 33.5);
}

#[test]
fn test_asteroid_without_data_is_ignored() {
    let decoded = share::decode("?type=asteroid&asteroid=3542519");
    assert_eq!(
        decoded.projectile,
        Some(SharedProjectile::Asteroid {
            id: "3542519".to_string(),
            data: None
        })
    );

    let mut state = ImpactState::default();
    state.apply_shared_state(&decoded);
    assert!(state.selected_asteroid().is_none());
}

#[test]
fn test_impossible_asteroid_data_keeps_sliders_usable() {
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    let data = URL_SAFE_NO_PAD.encode(r#"{"name":"x","diameter":-5,"velocity":0}"#);
    let decoded = share::decode(&format!("?type=asteroid&asteroid=1&asteroidData={data}"));

    let mut state = ImpactState::default();
    state.apply_shared_state(&decoded);
    assert!(state.selected_asteroid().is_none());
    assert!(state.current_source().impactor().is_ok());
}

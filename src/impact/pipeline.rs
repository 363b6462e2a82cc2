//! From click to impact event.
//!
//! An [`ImpactRequest`] starts one surface classification on the async
//! runtime. The answer comes back over a channel tagged with the request id;
//! only the newest request is applied, older answers are dropped. Without an
//! API key or a runtime the fallback classification is used immediately.

use bevy::prelude::*;

use super::{ImpactEvent, ImpactSource};
use crate::async_runtime::TaskSpawner;
use crate::config::Preferences;
use crate::meteor::MeteorStrike;
use crate::net::HttpClient;
use crate::state::ImpactState;
use crate::surface::{self, GeocoderConfig, SurfaceInfo};
use crate::types::LatLng;

/// The user clicked the map.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct ImpactRequest {
    pub position: LatLng,
}

/// Reverse-geocoder settings as a resource.
#[derive(Resource, Clone, Debug, Default)]
pub struct GeocoderSettings(pub GeocoderConfig);

/// An impact waiting for its surface classification.
#[derive(Clone, Debug)]
struct PendingImpact {
    id: u64,
    position: LatLng,
    source: ImpactSource,
}

/// Tracks the in-flight classification.
#[derive(Resource)]
pub struct SurfaceLookup {
    next_id: u64,
    pending: Option<PendingImpact>,
    result_rx: async_channel::Receiver<(u64, SurfaceInfo)>,
    result_tx: async_channel::Sender<(u64, SurfaceInfo)>,
}

impl Default for SurfaceLookup {
    fn default() -> Self {
        let (result_tx, result_rx) = async_channel::unbounded();
        Self {
            next_id: 0,
            pending: None,
            result_rx,
            result_tx,
        }
    }
}

impl SurfaceLookup {
    /// Register a new impact, superseding any in-flight one. Returns its id.
    pub fn begin(&mut self, position: LatLng, source: ImpactSource) -> u64 {
        self.next_id += 1;
        self.pending = Some(PendingImpact {
            id: self.next_id,
            position,
            source,
        });
        self.next_id
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Channel end for delivering `(request id, classification)` pairs.
    pub fn sender(&self) -> async_channel::Sender<(u64, SurfaceInfo)> {
        self.result_tx.clone()
    }

    /// Take the pending impact if `id` answers it.
    fn resolve(&mut self, id: u64) -> Option<PendingImpact> {
        match &self.pending {
            Some(pending) if pending.id == id => self.pending.take(),
            _ => None,
        }
    }
}

/// Start classifying the newest clicked position.
pub fn start_surface_lookup(
    mut requests: MessageReader<ImpactRequest>,
    state: Res<ImpactState>,
    mut lookup: ResMut<SurfaceLookup>,
    client: Res<HttpClient>,
    settings: Res<GeocoderSettings>,
    spawner: TaskSpawner,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };

    let position = request.position.wrapped();
    let source = state.current_source();
    if let Err(e) = source.impactor() {
        warn!("Ignoring impact at {position}: {e}");
        return;
    }

    info!(
        "Impact requested at {position}: {} ({:.0} m, {:.1} km/s)",
        source.name, source.diameter, source.velocity
    );

    let id = lookup.begin(position, source);
    let tx = lookup.sender();

    let has_key = settings
        .0
        .api_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());

    if has_key && spawner.is_available() {
        let client = client.0.clone();
        let config = settings.0.clone();
        spawner.spawn(async move {
            let info = surface::classify(&client, &config, position).await;
            let _ = tx.send((id, info)).await;
        });
    } else {
        debug!("Surface classification offline, using fallback");
        let _ = tx.try_send((id, SurfaceInfo::fallback(position)));
    }
}

/// Turn classifications into impact events.
pub fn apply_surface_results(
    mut lookup: ResMut<SurfaceLookup>,
    mut state: ResMut<ImpactState>,
    mut strikes: MessageWriter<MeteorStrike>,
) {
    while let Ok((id, surface)) = lookup.result_rx.try_recv() {
        let Some(pending) = lookup.resolve(id) else {
            debug!("Dropping stale surface classification {id}");
            continue;
        };

        match ImpactEvent::compute(pending.position, pending.source, surface) {
            Ok(event) => {
                info!(
                    "Impact at {}: {:.2} MT, magnitude {:.1}, {} people affected",
                    event.position,
                    event.details.consequences.impact_energy,
                    event.details.consequences.seismic_effect,
                    event.details.affected_population,
                );
                strikes.write(MeteorStrike {
                    target: event.position,
                });
                state.set_impact_event(event);
            }
            Err(e) => warn!("Could not compute impact: {e}"),
        }
    }
}

/// Drop any in-flight classification when the store is reset.
fn cancel_on_reset(
    mut resets: MessageReader<crate::state::ResetMessage>,
    mut lookup: ResMut<SurfaceLookup>,
) {
    if resets.read().next().is_some() {
        lookup.pending = None;
    }
}

/// Keep place names in the interface language.
fn sync_geocoder_language(prefs: Option<Res<Preferences>>, mut settings: ResMut<GeocoderSettings>) {
    let Some(prefs) = prefs else {
        return;
    };
    let code = prefs.locale.code();
    if settings.0.language != code {
        settings.0.language = code.to_string();
    }
}

pub struct ImpactPipelinePlugin;

impl Plugin for ImpactPipelinePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ImpactRequest>()
            .init_resource::<SurfaceLookup>()
            .init_resource::<GeocoderSettings>()
            .init_resource::<HttpClient>()
            .add_systems(
                Update,
                (
                    sync_geocoder_language,
                    cancel_on_reset,
                    start_surface_lookup,
                    apply_surface_results,
                )
                    .chain(),
            );
    }
}

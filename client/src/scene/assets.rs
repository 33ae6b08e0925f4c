use bevy::asset::{LoadState, UntypedHandle};
use bevy::prelude::*;
use flight::AssetStatus;
use tracing::{error, info};

/// A GLTF (or other) asset whose arrival gates or reveals an entity.
#[derive(Component, Debug, Clone)]
pub struct WatchedAsset {
    pub label: String,
    pub handle: UntypedHandle,
    pub status: AssetStatus,
}

impl WatchedAsset {
    pub fn new(label: impl Into<String>, handle: UntypedHandle) -> Self {
        Self {
            label: label.into(),
            handle,
            status: AssetStatus::Pending,
        }
    }
}

/// Models stay hidden until loaded so a failed load leaves no placeholder.
pub fn poll_watched_assets(
    asset_server: Res<AssetServer>,
    mut q: Query<(&mut WatchedAsset, Option<&mut Visibility>)>,
) {
    for (mut watched, visibility) in &mut q {
        if !watched.status.is_pending() {
            continue;
        }
        let outcome = match asset_server.get_load_state(watched.handle.id()) {
            Some(LoadState::Loaded) => Ok(()),
            Some(LoadState::Failed(err)) => Err(err.to_string()),
            _ => continue,
        };
        let ok = outcome.is_ok();
        if !watched.status.resolve(outcome) {
            continue;
        }
        match &watched.status {
            AssetStatus::Failed(reason) => error!(asset = %watched.label, %reason, "Asset failed to load"),
            _ => info!(asset = %watched.label, "Asset loaded"),
        }
        if let Some(mut v) = visibility {
            *v = if ok { Visibility::Inherited } else { Visibility::Hidden };
        }
    }
}

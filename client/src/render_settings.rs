use bevy::core_pipeline::bloom::{Bloom, BloomPrefilter};
use bevy::prelude::*;
#[cfg(feature = "windowing")]
use bevy_inspector_egui::quick::ResourceInspectorPlugin;
#[cfg(feature = "windowing")]
use bevy_inspector_egui::InspectorOptions;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Reflect, Serialize, Deserialize)]
#[cfg_attr(feature = "windowing", derive(InspectorOptions))]
#[reflect(Resource)]
#[serde(default)]
pub struct RenderSettings {
    pub bloom: bool,
    #[cfg_attr(feature = "windowing", inspector(min = 0.0, max = 1.0))]
    pub bloom_strength: f32,
    #[cfg_attr(feature = "windowing", inspector(min = 0.0, max = 2.0))]
    pub bloom_threshold: f32,
    #[cfg_attr(feature = "windowing", inspector(min = 0.0, max = 1.0))]
    pub bloom_threshold_softness: f32,
    /// Vertical field of view in degrees.
    #[cfg_attr(feature = "windowing", inspector(min = 30.0, max = 120.0))]
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub orbit_paths: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            bloom: true,
            bloom_strength: 0.3,
            bloom_threshold: 0.1,
            bloom_threshold_softness: 0.1,
            fov_deg: 75.0,
            near: 0.1,
            far: 50_000.0,
            orbit_paths: true,
        }
    }
}

impl RenderSettings {
    pub fn bloom_component(&self) -> Bloom {
        Bloom {
            intensity: if self.bloom { self.bloom_strength } else { 0.0 },
            prefilter: BloomPrefilter {
                threshold: self.bloom_threshold,
                threshold_softness: self.bloom_threshold_softness,
            },
            ..Bloom::NATURAL
        }
    }

    pub fn projection(&self) -> Projection {
        Projection::Perspective(PerspectiveProjection {
            fov: self.fov_deg.to_radians(),
            near: self.near,
            far: self.far,
            ..default()
        })
    }
}

pub struct RenderSettingsPlugin;

impl Plugin for RenderSettingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RenderSettings>()
            .register_type::<RenderSettings>()
            .add_systems(Update, apply_render_settings);
        #[cfg(feature = "windowing")]
        app.add_plugins(ResourceInspectorPlugin::<RenderSettings>::default());
    }
}

fn apply_render_settings(
    settings: Res<RenderSettings>,
    mut q: Query<(&mut Bloom, &mut Projection), With<Camera3d>>,
) {
    if !settings.is_changed() {
        return;
    }
    for (mut bloom, mut projection) in &mut q {
        *bloom = settings.bloom_component();
        *projection = settings.projection();
    }
}

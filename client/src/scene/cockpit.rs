use bevy::gltf::{Gltf, GltfAssetLabel};
use bevy::prelude::*;
use flight::{FlightSim, FlightStepDebug};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

use super::assets::WatchedAsset;
use super::SimSet;
use crate::config::CockpitModelSpec;
use crate::input::{FlightControls, PointerState};

#[derive(Component)]
pub struct Cockpit;

/// Child of the cockpit carrying the mouse-look rotation.
#[derive(Component)]
pub struct CameraPivot;

#[derive(Component)]
pub struct CockpitCamera;

#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct FlightSimRes(pub FlightSim);

#[derive(Resource, Debug, Clone, Default)]
pub struct FlightTelemetry(pub FlightStepDebug);

/// RNG behind camera shake.
#[derive(Resource, Deref, DerefMut)]
pub struct ShakeRng(pub StdRng);

impl ShakeRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct CockpitRig(pub CockpitModelSpec);

#[derive(Resource, Debug, Clone, Copy)]
pub struct ClientPhysicsTiming {
    pub acc: f32,
    pub dt: f32,
    /// Upper bound on ticks per frame so a long stall doesn't spiral.
    pub max_steps: u32,
}

impl Default for ClientPhysicsTiming {
    fn default() -> Self {
        Self {
            acc: 0.0,
            dt: 1.0 / 60.0,
            max_steps: 8,
        }
    }
}

/// Fixed-step flight simulation, the pose sync and the camera rig. Runs
/// headless too; the cockpit model and camera are spawned by the scene.
pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FlightTelemetry>()
            .init_resource::<ClientPhysicsTiming>()
            .init_resource::<FlightControls>()
            .init_resource::<PointerState>()
            .add_systems(
                Update,
                (
                    gate_on_cockpit_asset,
                    simulate_flight,
                    (sync_cockpit_pose, apply_camera_feel),
                )
                    .chain()
                    .in_set(SimSet),
            );
    }
}

pub fn spawn_cockpit(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    rig: Res<CockpitRig>,
    sim: Res<FlightSimRes>,
) {
    let spec = &rig.0;
    let gltf: Handle<Gltf> = asset_server.load(spec.model_path.clone());
    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(spec.model_path.clone()));
    let pose = sim.state.pose;

    commands
        .spawn((
            Transform::from_translation(pose.position).with_rotation(pose.orientation),
            Visibility::Visible,
            Cockpit,
            Name::new("Cockpit"),
        ))
        .with_children(|parent| {
            parent.spawn((
                SceneRoot(scene),
                Transform::from_scale(Vec3::splat(spec.model_scale)),
                Visibility::Hidden,
                WatchedAsset::new(spec.model_path.clone(), gltf.untyped()),
                Name::new("Cockpit Model"),
            ));
            parent
                .spawn((
                    Transform::default(),
                    Visibility::Inherited,
                    CameraPivot,
                    Name::new("Camera Pivot"),
                ))
                .with_children(|pivot| {
                    pivot.spawn((
                        PointLight {
                            color: Color::srgb(0.0, 1.0, 0.0),
                            intensity: 2_000_000.0,
                            range: 200.0,
                            shadows_enabled: false,
                            ..default()
                        },
                        Transform::from_xyz(0.0, spec.model_scale, 0.0),
                        Name::new("Cockpit Light"),
                    ));
                });
        });
}

/// Copies the cockpit model's load outcome into the sim's gate.
pub fn gate_on_cockpit_asset(
    mut sim: ResMut<FlightSimRes>,
    rig: Option<Res<CockpitRig>>,
    q: Query<&WatchedAsset>,
) {
    if !sim.cockpit.is_pending() {
        return;
    }
    let Some(rig) = rig else {
        return;
    };
    let Some(watched) = q.iter().find(|w| w.label == rig.0.model_path) else {
        return;
    };
    if watched.status.is_pending() {
        return;
    }
    let outcome = match &watched.status {
        flight::AssetStatus::Failed(reason) => Err(reason.clone()),
        _ => Ok(()),
    };
    if sim.cockpit.resolve(outcome) {
        if sim.cockpit.is_ready() {
            info!("Cockpit ready; flight controls live");
        } else {
            error!("Cockpit model missing; the craft will not move");
        }
    }
}

pub fn simulate_flight(
    time: Res<Time>,
    mut timing: ResMut<ClientPhysicsTiming>,
    mut sim: ResMut<FlightSimRes>,
    mut controls: ResMut<FlightControls>,
    pointer: Res<PointerState>,
    mut rng: ResMut<ShakeRng>,
    mut telemetry: ResMut<FlightTelemetry>,
) {
    let frame_dt = time.delta_secs();
    if frame_dt <= 0.0 {
        return;
    }
    if !sim.is_active() {
        timing.acc = 0.0; // no catch-up once the gate opens
        return;
    }
    timing.dt = sim.spec.tick_dt;
    timing.acc += frame_dt;
    let step_dt = timing.dt.max(1e-4);
    let mut steps: u32 = 0;
    while timing.acc >= step_dt {
        timing.acc -= step_dt;
        steps += 1;
    }
    if steps > timing.max_steps {
        steps = timing.max_steps;
        timing.acc = 0.0;
    }

    for _ in 0..steps {
        sim.tick(&mut controls.0, pointer.normalized, &mut rng.0);
    }
    if steps > 0 {
        telemetry.0 = sim.last_step;
    }
}

pub fn sync_cockpit_pose(sim: Res<FlightSimRes>, mut q: Query<&mut Transform, With<Cockpit>>) {
    if !sim.is_changed() {
        return;
    }
    let pose = sim.state.pose;
    for mut t in &mut q {
        t.translation = pose.position;
        t.rotation = pose.orientation;
    }
}

#[allow(clippy::type_complexity)]
pub fn apply_camera_feel(
    sim: Res<FlightSimRes>,
    rig: Option<Res<CockpitRig>>,
    mut q_pivot: Query<&mut Transform, (With<CameraPivot>, Without<CockpitCamera>)>,
    mut q_cam: Query<&mut Transform, (With<CockpitCamera>, Without<CameraPivot>)>,
) {
    if !sim.is_active() {
        return;
    }
    let scale = rig.map(|r| r.0.model_scale).unwrap_or(1.0);
    for mut pivot in &mut q_pivot {
        pivot.rotation = sim.feel.look_rotation();
    }
    for mut cam in &mut q_cam {
        cam.translation = sim.feel.camera_offset() * scale;
    }
}

use bevy::prelude::*;
#[cfg(feature = "windowing")]
use bevy_inspector_egui::quick::ResourceInspectorPlugin;
#[cfg(feature = "windowing")]
use bevy_inspector_egui::InspectorOptions;

use crate::scene::cockpit::{Cockpit, FlightSimRes, FlightTelemetry};
use crate::scene::SimSet;

#[derive(Resource, Debug, Clone, Reflect)]
#[cfg_attr(feature = "windowing", derive(InspectorOptions))]
#[reflect(Resource)]
pub struct DebugVis {
    pub labels: bool,
    pub overlay: bool,
    pub telemetry: bool,
    pub velocity_arrow: bool,
}

impl Default for DebugVis {
    fn default() -> Self {
        Self { labels: true, overlay: false, telemetry: false, velocity_arrow: false }
    }
}

#[derive(Component)]
pub struct LabelNode;

pub struct DebugVisPlugin;

impl Plugin for DebugVisPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugVis>()
            .register_type::<DebugVis>()
            .add_systems(Startup, spawn_debug_overlay)
            .add_systems(Update, (toggle_overlay_key, apply_label_visibility, apply_overlay_visibility, update_debug_overlay).chain())
            .add_systems(Update, draw_velocity_arrow.after(SimSet));
        #[cfg(feature = "windowing")]
        app.add_plugins(ResourceInspectorPlugin::<DebugVis>::default());
    }
}

/// F3 cycles: hidden, overlay, overlay with telemetry.
fn toggle_overlay_key(keys: Res<ButtonInput<KeyCode>>, mut vis: ResMut<DebugVis>) {
    if !keys.just_pressed(KeyCode::F3) {
        return;
    }
    let (overlay, telemetry) = match (vis.overlay, vis.telemetry) {
        (false, _) => (true, false),
        (true, false) => (true, true),
        (true, true) => (false, false),
    };
    vis.overlay = overlay;
    vis.telemetry = telemetry;
    vis.velocity_arrow = telemetry;
}

fn apply_label_visibility(vis: Res<DebugVis>, mut q: Query<&mut Visibility, With<LabelNode>>) {
    if !vis.is_changed() { return; }
    let visible = vis.labels;
    for mut v in &mut q {
        *v = if visible { Visibility::Visible } else { Visibility::Hidden };
    }
}

#[derive(Component)]
struct DebugOverlayNode;

fn spawn_debug_overlay(mut commands: Commands) {
    // Top-right anchored; content is filled by the updater
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(10.0),
            top: Val::Px(10.0),
            ..Default::default()
        },
        Text::new(String::new()),
        TextFont { font_size: 16.0, ..Default::default() },
        TextColor(Color::WHITE),
        Visibility::Hidden,
        DebugOverlayNode,
        Name::new("Debug Overlay"),
    ));
}

fn apply_overlay_visibility(vis: Res<DebugVis>, mut q: Query<&mut Visibility, With<DebugOverlayNode>>) {
    if !vis.is_changed() { return; }
    let visible = vis.overlay;
    for mut v in &mut q {
        *v = if visible { Visibility::Visible } else { Visibility::Hidden };
    }
}

fn update_debug_overlay(
    mut q_text: Query<&mut Text, With<DebugOverlayNode>>,
    sim: Res<FlightSimRes>,
    telemetry: Res<FlightTelemetry>,
    vis: Res<DebugVis>,
) {
    if !vis.overlay { return; }
    let Ok(mut text) = q_text.single_mut() else { return; };

    let pose = sim.state.pose;
    let p = pose.position;
    let (pitch, yaw, roll) = pose.orientation.to_euler(EulerRot::XYZ);
    let gate = if !sim.is_running() {
        "STOPPED\n"
    } else if sim.cockpit.is_pending() {
        "WAITING FOR COCKPIT\n"
    } else if !sim.cockpit.is_ready() {
        "COCKPIT FAILED\n"
    } else {
        ""
    };

    let mut out = format!(
        "{}POS  {:9.1} {:9.1} {:9.1}\nATT  P{:6.1}  Y{:6.1}  R{:6.1} deg\nTHR  {:5.1}%  SPD {:7.1}\nTICK {}",
        gate,
        p.x, p.y, p.z,
        pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees(),
        sim.state.throttle.throttle, sim.state.throttle.speed,
        sim.ticks(),
    );
    if vis.telemetry {
        let d = &telemetry.0;
        out.push_str(&format!(
            "\n-- TELEMETRY --\nRATE p:{:>+7.4} r:{:>+7.4} y:{:>+7.4}\nSPD  raw:{:>7.1} pen:{:>5.3} out:{:>7.1}{}\nACC  {:>8.3} {:>8.3} {:>8.3}\nVEL  {:>8.3} {:>8.3} {:>8.3}\nFWD  {:>6.3} {:>6.3} {:>6.3}",
            d.pitch_velocity, d.roll_velocity, d.yaw_velocity,
            d.speed_before_penalty, d.turn_penalty, d.speed,
            if d.braking { "  BRAKE" } else { "" },
            d.acceleration.x, d.acceleration.y, d.acceleration.z,
            d.velocity.x, d.velocity.y, d.velocity.z,
            d.forward.x, d.forward.y, d.forward.z,
        ));
    }
    text.0 = out;
}

fn draw_velocity_arrow(
    vis: Res<DebugVis>,
    sim: Res<FlightSimRes>,
    mut gizmos: Gizmos,
    q_cockpit: Query<&Transform, With<Cockpit>>,
) {
    if !vis.velocity_arrow { return; }
    let Ok(t) = q_cockpit.single() else { return; };
    let v = sim.state.motion.velocity;
    if v.length_squared() < 1e-8 { return; }
    // Velocity is per tick; scale to a visible length ahead of the camera.
    let start = t.translation + t.rotation * Vec3::new(0.0, -5.0, -40.0);
    let end = start + v.normalize() * 20.0;
    gizmos.arrow(start, end, Color::srgb(0.2, 1.0, 0.2));
}

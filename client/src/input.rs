use bevy::app::AppExit;
use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow, WindowFocused};
use flight::{ControlAction, ControlState};
use tracing::{debug, info};

use crate::scene::cockpit::FlightSimRes;

/// Latched flight controls, fed by window events and consumed by the sim tick.
#[derive(Resource, Debug, Clone, Default, Deref, DerefMut)]
pub struct FlightControls(pub ControlState);

/// Pointer position normalized to [-1, 1] on both axes (+y up).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub normalized: Vec2,
}

/// Pixels per wheel notch for touchpads reporting pixel deltas.
const PIXELS_PER_NOTCH: f32 = 100.0;

pub struct FlightInputPlugin;

impl Plugin for FlightInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FlightControls>()
            .init_resource::<PointerState>()
            .add_systems(
                PreUpdate,
                (latch_keyboard, latch_wheel, track_pointer, release_on_focus_loss)
                    .after(bevy::input::InputSystem),
            )
            .add_systems(Update, stop_on_escape);
    }
}

/// Stick-style mapping: forward keys push the nose down.
pub fn key_action(key: KeyCode) -> Option<ControlAction> {
    Some(match key {
        KeyCode::KeyW | KeyCode::ArrowUp => ControlAction::PitchDown,
        KeyCode::KeyS | KeyCode::ArrowDown => ControlAction::PitchUp,
        KeyCode::KeyA | KeyCode::ArrowLeft => ControlAction::RollLeft,
        KeyCode::KeyD | KeyCode::ArrowRight => ControlAction::RollRight,
        KeyCode::KeyQ => ControlAction::YawLeft,
        KeyCode::KeyE => ControlAction::YawRight,
        KeyCode::ShiftLeft => ControlAction::ThrottleUp,
        KeyCode::ControlLeft => ControlAction::ThrottleDown,
        KeyCode::Space => ControlAction::Brake,
        _ => return None,
    })
}

pub fn latch_keyboard(mut events: EventReader<KeyboardInput>, mut controls: ResMut<FlightControls>) {
    for ev in events.read() {
        let Some(action) = key_action(ev.key_code) else {
            continue;
        };
        let pressed = ev.state == ButtonState::Pressed;
        if controls.is_set(action) != pressed {
            debug!(?action, pressed, "control latched");
        }
        controls.set(action, pressed);
    }
}

pub fn latch_wheel(mut events: EventReader<MouseWheel>, mut controls: ResMut<FlightControls>) {
    for ev in events.read() {
        let notches = match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / PIXELS_PER_NOTCH,
        };
        controls.add_wheel(notches);
    }
}

pub fn track_pointer(
    mut events: EventReader<CursorMoved>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerState>,
) {
    let Some(last) = events.read().last() else {
        return;
    };
    let Ok(window) = q_window.single() else {
        return;
    };
    pointer.normalized = normalize_cursor(last.position, Vec2::new(window.width(), window.height()));
}

/// Window pixel coordinates (origin top-left) to [-1, 1]² with +y up.
pub fn normalize_cursor(position: Vec2, size: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let x = position.x / size.x * 2.0 - 1.0;
    let y = -(position.y / size.y * 2.0 - 1.0);
    Vec2::new(x, y).clamp(Vec2::NEG_ONE, Vec2::ONE)
}

/// Key-up events are lost while unfocused, so drop every held flag.
pub fn release_on_focus_loss(mut events: EventReader<WindowFocused>, mut controls: ResMut<FlightControls>) {
    if events.read().any(|ev| !ev.focused) {
        controls.release_all();
    }
}

pub fn stop_on_escape(
    keys: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<FlightSimRes>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) && sim.is_running() {
        sim.stop();
        info!(ticks = sim.ticks(), "Flight stopped");
        exit.write(AppExit::Success);
    }
}

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use flight::solar::{follow_camera_position, orbit_camera_position, FocusMode};
use tracing::{info, warn};

use super::cockpit::{CameraPivot, CockpitCamera};
use super::solar_system::{Planet, SolarSystemLayout};
use crate::render_settings::RenderSettings;

/// Which camera is live.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum CamMode {
    #[default]
    Cockpit,
    PlanetFocus {
        planet: Entity,
        /// Camera offset from the planet, kept in follow mode.
        offset: Vec3,
    },
}

#[derive(Resource, Debug, Clone, Copy, Default, Deref, DerefMut)]
pub struct FocusSettings(pub FocusMode);

/// Ask the focus camera to look at a planet by name.
#[derive(Event, Debug, Clone)]
pub struct FocusRequest(pub String);

#[derive(Event, Debug, Clone, Copy)]
pub struct ReturnToCockpit;

/// Last focus outcome, shown by the HUD.
#[derive(Resource, Debug, Clone, Default)]
pub struct FocusMessage(pub Option<String>);

#[derive(Component)]
pub struct FocusCamera;

pub fn spawn_cameras(
    mut commands: Commands,
    settings: Res<RenderSettings>,
    q_pivot: Query<Entity, With<CameraPivot>>,
) {
    let camera = |active: bool, order: isize| {
        (
            Camera3d::default(),
            Camera {
                hdr: true,
                is_active: active,
                order,
                ..default()
            },
            settings.projection(),
            settings.bloom_component(),
            Tonemapping::TonyMcMapface,
        )
    };

    let cockpit_cam = commands
        .spawn((
            camera(true, 0),
            Transform::default(),
            CockpitCamera,
            Name::new("Cockpit Camera"),
        ))
        .id();
    match q_pivot.single() {
        Ok(pivot) => {
            commands.entity(pivot).add_child(cockpit_cam);
        }
        Err(_) => warn!("No camera pivot; cockpit camera left at the origin"),
    }

    commands.spawn((
        camera(false, 1),
        Transform::from_xyz(0.0, 2_000.0, 4_000.0).looking_at(Vec3::ZERO, Vec3::Y),
        FocusCamera,
        Name::new("Focus Camera"),
    ));
}

pub fn handle_focus_requests(
    mut requests: EventReader<FocusRequest>,
    mut returns: EventReader<ReturnToCockpit>,
    layout: Res<SolarSystemLayout>,
    q_planets: Query<(Entity, &Planet, &Transform)>,
    time: Res<Time>,
    mut mode: ResMut<CamMode>,
    mut message: ResMut<FocusMessage>,
) {
    for FocusRequest(name) in requests.read() {
        let index = match layout.find(name) {
            Ok((index, _)) => index,
            Err(err) => {
                warn!(%err, "Focus request ignored");
                message.0 = Some(format!("Planet not found: {}", name.trim()));
                continue;
            }
        };
        let Some((entity, planet, t)) = q_planets.iter().find(|(_, p, _)| p.index == index) else {
            continue;
        };
        let eye = orbit_camera_position(t.translation, planet.radius, time.elapsed_secs());
        *mode = CamMode::PlanetFocus {
            planet: entity,
            offset: eye - t.translation,
        };
        let name = &layout.planets[index].name;
        info!(planet = %name, "Focusing planet");
        message.0 = Some(format!("Orbiting {name}. Press C to return to the cockpit."));
    }

    if returns.read().last().is_some() && *mode != CamMode::Cockpit {
        *mode = CamMode::Cockpit;
        message.0 = Some("Back in the cockpit.".to_string());
    }
}

pub fn apply_camera_mode(
    mode: Res<CamMode>,
    mut q_cockpit: Query<&mut Camera, (With<CockpitCamera>, Without<FocusCamera>)>,
    mut q_focus: Query<&mut Camera, (With<FocusCamera>, Without<CockpitCamera>)>,
) {
    if !mode.is_changed() {
        return;
    }
    let focused = matches!(*mode, CamMode::PlanetFocus { .. });
    for mut cam in &mut q_cockpit {
        cam.is_active = !focused;
    }
    for mut cam in &mut q_focus {
        cam.is_active = focused;
    }
}

pub fn update_focus_camera(
    time: Res<Time>,
    focus: Res<FocusSettings>,
    mut mode: ResMut<CamMode>,
    q_planets: Query<(&Planet, &Transform), Without<FocusCamera>>,
    mut q_cam: Query<&mut Transform, With<FocusCamera>>,
) {
    let CamMode::PlanetFocus { planet, offset } = *mode else {
        return;
    };
    let Ok((p, planet_t)) = q_planets.get(planet) else {
        *mode = CamMode::Cockpit;
        return;
    };
    let Ok(mut cam_t) = q_cam.single_mut() else {
        return;
    };
    let target = planet_t.translation;
    let eye = match focus.0 {
        FocusMode::Orbit => orbit_camera_position(target, p.radius, time.elapsed_secs()),
        FocusMode::Follow => follow_camera_position(target, offset),
    };
    cam_t.translation = eye;
    cam_t.look_at(target, Vec3::Y);

    // Orbit mode keeps the offset current so switching to follow holds the view.
    if focus.0 == FocusMode::Orbit {
        if let CamMode::PlanetFocus { offset, .. } = mode.bypass_change_detection() {
            *offset = eye - target;
        }
    }
}

const PLANET_KEYS: [KeyCode; 8] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
];

/// 1-8 focus planets in table order, O toggles orbit/follow, C returns.
pub fn focus_hotkeys(
    keys: Res<ButtonInput<KeyCode>>,
    layout: Res<SolarSystemLayout>,
    mut focus: ResMut<FocusSettings>,
    mut requests: EventWriter<FocusRequest>,
    mut returns: EventWriter<ReturnToCockpit>,
) {
    for (key, planet) in PLANET_KEYS.iter().zip(&layout.planets) {
        if keys.just_pressed(*key) {
            requests.write(FocusRequest(planet.name.clone()));
        }
    }
    if keys.just_pressed(KeyCode::KeyO) {
        focus.0 = focus.0.toggled();
        info!(mode = ?focus.0, "Focus mode");
    }
    if keys.just_pressed(KeyCode::KeyC) {
        returns.write(ReturnToCockpit);
    }
}

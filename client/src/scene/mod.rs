use bevy::prelude::*;

pub mod assets;
pub mod camera;
pub mod cockpit;
pub mod setup;
pub mod solar_system;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimSet;

/// Everything that needs a renderer: the solar system, the cockpit model and
/// the two cameras.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<solar_system::SolarSystemLayout>()
            .init_resource::<camera::CamMode>()
            .init_resource::<camera::FocusSettings>()
            .init_resource::<camera::FocusMessage>()
            .add_event::<camera::FocusRequest>()
            .add_event::<camera::ReturnToCockpit>()
            .add_systems(
                Startup,
                (
                    setup::setup_scene,
                    solar_system::spawn_solar_system,
                    cockpit::spawn_cockpit,
                    camera::spawn_cameras,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    assets::poll_watched_assets.before(SimSet),
                    solar_system::advance_orbits.before(SimSet),
                    solar_system::draw_orbit_paths,
                    (
                        camera::focus_hotkeys,
                        camera::handle_focus_requests,
                        camera::apply_camera_mode,
                        camera::update_focus_camera,
                    )
                        .chain()
                        .after(SimSet),
                ),
            );
    }
}

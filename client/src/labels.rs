use bevy::prelude::*;

use crate::debug_vis::{DebugVis, LabelNode};
use crate::scene::solar_system::{Planet, SolarSystemLayout};

#[derive(Component, Copy, Clone)]
pub struct TracksEntity(pub Entity);

pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (attach_planet_labels, update_label_positions));
    }
}

// One label per planet, spawned once the planets exist.
fn attach_planet_labels(
    mut commands: Commands,
    layout: Res<SolarSystemLayout>,
    vis: Option<Res<DebugVis>>,
    q_planets: Query<(Entity, &Planet), Added<Planet>>,
) {
    let visible = vis.map(|v| v.labels).unwrap_or(true);
    for (entity, planet) in &q_planets {
        let Some(spec) = layout.planets.get(planet.index) else { continue; };
        commands.spawn((
            // Absolute positioning; updated every frame
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..Default::default()
            },
            Text::new(spec.name.clone()),
            TextFont { font_size: 14.0, ..Default::default() },
            TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
            if visible { Visibility::Visible } else { Visibility::Hidden },
            TracksEntity(entity),
            LabelNode,
            Name::new(format!("Label: {}", spec.name)),
        ));
    }
}

fn update_label_positions(
    mut q_text: Query<(&mut Node, &TracksEntity), With<LabelNode>>,
    q_target: Query<(&GlobalTransform, &Planet)>,
    q_camera: Query<(&Camera, &GlobalTransform)>,
) {
    let Some((camera, cam_transform)) = q_camera.iter().find(|(c, _)| c.is_active) else { return; };
    let Some(viewport) = camera.logical_viewport_size() else { return; };

    for (mut node, tracks) in q_text.iter_mut() {
        let Ok((target_xform, planet)) = q_target.get(tracks.0) else { continue; };
        let world_pos = target_xform.translation() + Vec3::Y * (planet.radius * 1.2);
        let Some(ndc) = camera.world_to_ndc(cam_transform, world_pos) else { continue; };
        // Behind the camera or past the far plane: park it off-screen
        if !(0.0..=1.0).contains(&ndc.z) || !ndc.is_finite() {
            node.left = Val::Px(-1000.0);
            continue;
        }
        // NDC (-1..1) -> screen space
        let screen_pos = (ndc.truncate() + Vec2::ONE) / 2.0 * viewport;
        node.left = Val::Px(screen_pos.x);
        node.top = Val::Px(viewport.y - screen_pos.y); // UI origin is top-left
    }
}

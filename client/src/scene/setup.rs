use bevy::math::primitives::Cuboid;
use bevy::pbr::{MeshMaterial3d, StandardMaterial};
use bevy::prelude::*;

/// Edge length of the inward-facing sky cube.
pub const SKYBOX_SIZE: f32 = 50_000.0;
const SKYBOX_TEXTURE: &str = "img/a.jpg";

pub fn setup_scene(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ClearColor(Color::BLACK));
    // Stands in for the sky/ground hemisphere fill.
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.75, 0.75, 0.85),
        brightness: 150.0,
        affects_lightmapped_meshes: true,
    });

    let sky_texture: Handle<Image> = asset_server.load(SKYBOX_TEXTURE);
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Cuboid::new(SKYBOX_SIZE, SKYBOX_SIZE, SKYBOX_SIZE)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(sky_texture),
            unlit: true,
            cull_mode: None,
            double_sided: true,
            ..Default::default()
        })),
        Transform::default(),
        Name::new("Skybox"),
    ));
}

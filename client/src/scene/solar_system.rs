use std::f32::consts::FRAC_PI_2;

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::gltf::{Gltf, GltfAssetLabel};
use bevy::math::Isometry3d;
use bevy::prelude::*;
use flight::solar::{hex_to_srgb, ring_particles, Orbit, RingSpec};
use flight::SolarSystem;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::assets::WatchedAsset;
use crate::render_settings::RenderSettings;

#[derive(Resource, Debug, Clone, Default, Deref)]
pub struct SolarSystemLayout(pub SolarSystem);

/// RNG behind planet start angles and ring scatter.
#[derive(Resource, Deref, DerefMut)]
pub struct SceneRng(pub StdRng);

impl SceneRng {
    /// Seeded apart from the shake stream so both stay reproducible on their own.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed ^ 0x5eed_5ca7)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Planet {
    pub index: usize,
    pub orbit: Orbit,
    pub radius: f32,
}

#[derive(Component)]
pub struct Sun;

#[derive(Component)]
pub struct PlanetRing;

/// Nominal frame rate the orbital speeds were tuned for.
const ORBIT_TICK_HZ: f32 = 60.0;

fn hex_color(hex: u32) -> Color {
    let [r, g, b] = hex_to_srgb(hex);
    Color::srgb(r, g, b)
}

fn spawn_model(
    parent: &mut ChildSpawnerCommands,
    asset_server: &AssetServer,
    path: &str,
    scale: f32,
) {
    let gltf: Handle<Gltf> = asset_server.load(path.to_string());
    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path.to_string()));
    parent.spawn((
        SceneRoot(scene),
        Transform::from_scale(Vec3::splat(scale)),
        Visibility::Hidden,
        WatchedAsset::new(path, gltf.untyped()),
        Name::new(format!("Model: {path}")),
    ));
}

pub fn spawn_solar_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    layout: Res<SolarSystemLayout>,
    mut rng: ResMut<SceneRng>,
) {
    let sun = &layout.sun;
    let sun_color = hex_color(sun.color);
    commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(sun.radius).mesh().uv(64, 32))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: sun_color,
                emissive: LinearRgba::from(sun_color) * 4.0,
                unlit: true,
                ..default()
            })),
            Transform::default(),
            Visibility::Visible,
            Sun,
            Name::new("Sun"),
        ))
        .with_children(|parent| {
            parent.spawn((
                PointLight {
                    color: Color::WHITE,
                    intensity: 5.0e10,
                    range: 20_000.0,
                    radius: sun.radius,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::default(),
                Name::new("Sun Light"),
            ));
            if let Some(path) = &sun.model_path {
                spawn_model(parent, &asset_server, path, sun.model_scale);
            }
        });

    let ring_spec = RingSpec::default();
    for (index, spec) in layout.planets.iter().enumerate() {
        let radius = spec.render_radius();
        let orbit = Orbit::random(spec, &mut rng.0);
        let mut planet = commands.spawn((
            Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(32, 18))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: hex_color(spec.color),
                perceptual_roughness: 0.8,
                ..default()
            })),
            Transform::from_translation(orbit.position()),
            Visibility::Visible,
            Planet {
                index,
                orbit,
                radius,
            },
            Name::new(spec.name.clone()),
        ));

        planet.with_children(|parent| {
            if let Some(path) = &spec.model_path {
                spawn_model(parent, &asset_server, path, spec.model_scale);
            }
        });

        if spec.has_rings {
            let particles = ring_particles(&ring_spec, radius, &mut rng.0);
            let rock_mesh = meshes.add(Sphere::new(1.0).mesh().uv(5, 3));
            let rock_material = materials.add(StandardMaterial {
                base_color: Color::srgb(0.53, 0.53, 0.53),
                perceptual_roughness: 1.0,
                ..default()
            });
            let disc_mesh = meshes.add(
                Annulus::new(
                    ring_spec.inner_radius(radius),
                    ring_spec.outer_radius(radius),
                )
                .mesh()
                .resolution(64),
            );
            let disc_material = materials.add(StandardMaterial {
                base_color: Color::srgba(0.8, 0.7, 0.5, 0.4),
                alpha_mode: AlphaMode::Blend,
                double_sided: true,
                cull_mode: None,
                unlit: true,
                ..default()
            });

            planet.with_children(|parent| {
                parent
                    .spawn((
                        Transform::from_rotation(Quat::from_rotation_x(ring_spec.tilt)),
                        Visibility::Inherited,
                        PlanetRing,
                        Name::new(format!("{} ring", spec.name)),
                    ))
                    .with_children(|ring| {
                        // Annulus meshes lie in XY; lay it flat in the ring plane.
                        ring.spawn((
                            Mesh3d(disc_mesh),
                            MeshMaterial3d(disc_material),
                            Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
                        ));
                        for p in &particles {
                            ring.spawn((
                                Mesh3d(rock_mesh.clone()),
                                MeshMaterial3d(rock_material.clone()),
                                Transform {
                                    translation: p.position,
                                    rotation: p.rotation,
                                    scale: Vec3::splat(p.size),
                                },
                            ));
                        }
                    });
            });
        }
    }
}

pub fn advance_orbits(time: Res<Time>, mut q: Query<(&mut Planet, &mut Transform)>) {
    let ticks = time.delta_secs() * ORBIT_TICK_HZ;
    if ticks <= 0.0 {
        return;
    }
    for (mut planet, mut t) in &mut q {
        planet.orbit.advance(ticks);
        t.translation = planet.orbit.position();
    }
}

pub fn draw_orbit_paths(
    settings: Res<RenderSettings>,
    layout: Res<SolarSystemLayout>,
    mut gizmos: Gizmos,
) {
    if !settings.orbit_paths {
        return;
    }
    let flat = Isometry3d::from_rotation(Quat::from_rotation_x(FRAC_PI_2));
    for spec in &layout.planets {
        gizmos
            .circle(flat, spec.orbital_radius(), Color::srgba(1.0, 1.0, 1.0, 0.3))
            .resolution(128);
    }
}

//! Solar system layout and orbit math.
//!
//! Hand-tuned table: sizes and distances are in scene
//! units, not astronomical ones. The client turns this into meshes.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Quatf, Vec3f};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("planet not found: {0}")]
    PlanetNotFound(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunSpec {
    pub radius: f32,
    /// 0xRRGGBB
    pub color: u32,
    pub model_path: Option<String>,
    pub model_scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetSpec {
    pub name: String,
    /// 0xRRGGBB
    pub color: u32,
    pub size: f32,
    pub distance: f32,
    /// Radians per frame at a nominal 60 Hz, before the global slow-down.
    pub orbital_speed: f32,
    pub model_path: Option<String>,
    pub model_scale: f32,
    pub has_rings: bool,
}

impl PlanetSpec {
    pub fn render_radius(&self) -> f32 {
        self.size * 1.5
    }

    pub fn orbital_radius(&self) -> f32 {
        self.distance * 7.0
    }

    /// Angle advanced per tick.
    pub fn angular_step(&self) -> f32 {
        self.orbital_speed / 3.0
    }
}

/// Split 0xRRGGBB into sRGB components in [0, 1].
pub fn hex_to_srgb(color: u32) -> [f32; 3] {
    let r = ((color >> 16) & 0xff) as f32 / 255.0;
    let g = ((color >> 8) & 0xff) as f32 / 255.0;
    let b = (color & 0xff) as f32 / 255.0;
    [r, g, b]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarSystem {
    pub sun: SunSpec,
    pub planets: Vec<PlanetSpec>,
}

impl SolarSystem {
    /// Case-insensitive lookup by name, ignoring surrounding whitespace.
    pub fn find(&self, name: &str) -> Result<(usize, &PlanetSpec), LookupError> {
        let wanted = name.trim();
        self.planets
            .iter()
            .enumerate()
            .find(|(_, p)| p.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LookupError::PlanetNotFound(wanted.to_string()))
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        builtin_solar_system()
    }
}

pub fn builtin_solar_system() -> SolarSystem {
    let planet = |name: &str, color: u32, size: f32, distance: f32, orbital_speed: f32, model: &str, model_scale: f32| PlanetSpec {
        name: name.to_string(),
        color,
        size: size * 5.0,
        distance,
        orbital_speed,
        model_path: Some(format!("models/{model}.glb")),
        model_scale,
        has_rings: false,
    };

    let mut planets = vec![
        planet("Mercury", 0x909090, 2.9, 35.0 * 6.0, 0.004, "mercury", 2.2),
        planet("Venus", 0xD3754A, 3.0, 42.0 * 6.0, 0.003, "venus", 25.0),
        planet("Earth", 0x137ADB, 4.0, 54.0 * 6.0, 0.0025, "earth2", 55.0),
        planet("Mars", 0xCB4100, 2.8, 63.0 * 6.0, 0.002, "mars2", 50.0),
        planet("Jupiter", 0xD37131, 11.0, 75.0 * 6.0, 0.001, "jupiter", 1.3),
        planet("Saturn", 0xCA8E3B, 10.0, 85.0 * 6.5, 0.0009, "saturn", 1.0),
        planet("Uranus", 0x0D98BA, 5.0, 95.0 * 7.3, 0.0008, "uranus", 0.07),
        planet("Neptune", 0x1E90FF, 5.0, 110.0 * 7.5, 0.0007, "neptune", 0.15),
    ];
    if let Some(saturn) = planets.iter_mut().find(|p| p.name == "Saturn") {
        saturn.has_rings = true;
    }

    SolarSystem {
        sun: SunSpec {
            radius: 500.0,
            color: 0xFFA500,
            model_path: Some("models/sun.glb".to_string()),
            model_scale: 50.0,
        },
        planets,
    }
}

/// Circular orbit in the XZ plane around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub angle: f32,
    pub radius: f32,
    pub step: f32,
}

impl Orbit {
    pub fn new(planet: &PlanetSpec, initial_angle: f32) -> Self {
        Self {
            angle: initial_angle.rem_euclid(std::f32::consts::TAU),
            radius: planet.orbital_radius(),
            step: planet.angular_step(),
        }
    }

    /// Start at a uniformly random angle.
    pub fn random<R: Rng + ?Sized>(planet: &PlanetSpec, rng: &mut R) -> Self {
        Self::new(planet, rng.gen::<f32>() * std::f32::consts::TAU)
    }

    /// Advance by a (possibly fractional) number of nominal ticks.
    pub fn advance(&mut self, ticks: f32) {
        self.angle = (self.angle + self.step * ticks).rem_euclid(std::f32::consts::TAU);
    }

    pub fn position(&self) -> Vec3f {
        position_on_orbit(self.angle, self.radius)
    }
}

pub fn position_on_orbit(angle: f32, radius: f32) -> Vec3f {
    Vec3f::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// How the focus camera tracks a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusMode {
    /// Circle the planet over time.
    #[default]
    Orbit,
    /// Keep the current offset from the planet as it moves.
    Follow,
}

impl FocusMode {
    pub fn toggled(self) -> Self {
        match self {
            FocusMode::Orbit => FocusMode::Follow,
            FocusMode::Follow => FocusMode::Orbit,
        }
    }
}

pub const ORBIT_DISTANCE: f32 = 10.0;
pub const ORBIT_HEIGHT: f32 = 7.0;

/// Orbit-mode camera position at `time_s`. Distances grow with the planet
/// radius so the camera stays outside the sphere.
pub fn orbit_camera_position(planet_pos: Vec3f, planet_radius: f32, time_s: f32) -> Vec3f {
    let distance = ORBIT_DISTANCE + planet_radius * 2.5;
    let height = ORBIT_HEIGHT + planet_radius;
    planet_pos + Vec3f::new(distance * time_s.sin(), height, distance * time_s.cos())
}

/// Follow-mode camera position: same offset, carried along the orbit.
pub fn follow_camera_position(planet_pos: Vec3f, offset: Vec3f) -> Vec3f {
    planet_pos + offset
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    pub count: usize,
    pub inner_factor: f32,
    pub outer_factor: f32,
    /// Tilt of the ring plane about X (radians).
    pub tilt: f32,
}

impl Default for RingSpec {
    fn default() -> Self {
        Self {
            count: 1000,
            inner_factor: 1.2,
            outer_factor: 2.0,
            tilt: 0.5,
        }
    }
}

impl RingSpec {
    pub fn inner_radius(&self, planet_radius: f32) -> f32 {
        planet_radius * self.inner_factor
    }

    pub fn outer_radius(&self, planet_radius: f32) -> f32 {
        planet_radius * self.outer_factor
    }
}

/// One asteroid in a planetary ring, in the ring's untilted local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingParticle {
    pub position: Vec3f,
    pub size: f32,
    pub rotation: Quatf,
}

pub fn ring_particles<R: Rng + ?Sized>(spec: &RingSpec, planet_radius: f32, rng: &mut R) -> Vec<RingParticle> {
    let inner = spec.inner_radius(planet_radius);
    let width = spec.outer_radius(planet_radius) - inner;
    (0..spec.count)
        .map(|_| {
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            let r = inner + rng.gen::<f32>() * width;
            let size = (rng.gen::<f32>() * 0.2 + 0.1) * 5.0;
            let y = (rng.gen::<f32>() - 0.5) * size * 2.0;
            let rotation = Quatf::from_euler(
                bevy_math::EulerRot::XYZ,
                rng.gen::<f32>() * std::f32::consts::TAU,
                rng.gen::<f32>() * std::f32::consts::TAU,
                rng.gen::<f32>() * std::f32::consts::TAU,
            );
            RingParticle {
                position: Vec3f::new(theta.cos() * r, y, theta.sin() * r),
                size,
                rotation,
            }
        })
        .collect()
}

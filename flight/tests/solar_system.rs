use flight::solar::{
    builtin_solar_system, hex_to_srgb, orbit_camera_position, ring_particles, FocusMode, Orbit, RingSpec,
};
use flight::{LookupError, Vec3f};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn lookup_is_case_insensitive_and_reports_missing_planets() {
    let system = builtin_solar_system();
    let (idx, saturn) = system.find("  saturn ").expect("saturn exists");
    assert_eq!(saturn.name, "Saturn");
    assert!(saturn.has_rings);
    assert_eq!(idx, 5);

    let err = system.find("Pluto").unwrap_err();
    assert_eq!(err, LookupError::PlanetNotFound("Pluto".into()));
    assert_eq!(err.to_string(), "planet not found: Pluto");
}

#[test]
fn planets_are_ordered_outward_and_outside_the_sun() {
    let system = builtin_solar_system();
    assert_eq!(system.planets.len(), 8);
    let mut last = system.sun.radius;
    for p in &system.planets {
        assert!(p.orbital_radius() > last, "{} orbit overlaps its inner neighbour", p.name);
        last = p.orbital_radius();
        assert!(p.model_path.as_deref().is_some_and(|m| m.ends_with(".glb")));
    }
}

#[test]
fn orbit_stays_on_its_circle() {
    let system = builtin_solar_system();
    let earth = &system.planets[2];
    let mut orbit = Orbit::new(earth, 1.0);
    for _ in 0..1_000 {
        orbit.advance(1.0);
        let p = orbit.position();
        assert!((p.length() - earth.orbital_radius()).abs() < 1e-2);
        assert_eq!(p.y, 0.0);
        assert!((0.0..std::f32::consts::TAU).contains(&orbit.angle));
    }
}

#[test]
fn ring_particles_fill_the_annulus() {
    let spec = RingSpec::default();
    let radius = 75.0;
    let mut rng = StdRng::seed_from_u64(17);
    let particles = ring_particles(&spec, radius, &mut rng);
    assert_eq!(particles.len(), spec.count);
    for p in &particles {
        let planar = Vec3f::new(p.position.x, 0.0, p.position.z).length();
        assert!(planar >= spec.inner_radius(radius) - 1e-3 && planar <= spec.outer_radius(radius) + 1e-3);
        assert!(p.size >= 0.5 && p.size <= 1.5);
        assert!(p.position.y.abs() <= p.size);
    }
}

#[test]
fn orbit_camera_stays_outside_the_planet() {
    let planet = Vec3f::new(100.0, 0.0, -40.0);
    for i in 0..50 {
        let cam = orbit_camera_position(planet, 30.0, i as f32 * 0.3);
        assert!(cam.distance(planet) > 30.0);
    }
    assert_eq!(FocusMode::Orbit.toggled(), FocusMode::Follow);
}

#[test]
fn hex_colors_split_into_channels() {
    assert_eq!(hex_to_srgb(0xFF8000), [1.0, 128.0 / 255.0, 0.0]);
}

use flight::{craftspecs, AssetStatus, CameraFeelSpec, ControlAction, ControlState, FlightSim, FlightState, Vec2f};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sim() -> FlightSim {
    FlightSim::new(craftspecs::spaceship_spec(), CameraFeelSpec::default(), FlightState::default())
}

#[test]
fn movement_waits_for_the_cockpit() {
    let mut sim = sim();
    let mut rng = StdRng::seed_from_u64(0);
    let mut controls = ControlState::default();
    controls.set(ControlAction::ThrottleUp, true);
    controls.set(ControlAction::PitchUp, true);

    for _ in 0..60 {
        assert!(!sim.tick(&mut controls, Vec2f::new(1.0, 1.0), &mut rng));
    }
    assert_eq!(sim.state, FlightState::default());
    assert_eq!(sim.feel.look_yaw, 0.0);
    assert_eq!(sim.ticks(), 0);

    assert!(sim.cockpit.resolve(Ok(())));
    for _ in 0..60 {
        assert!(sim.tick(&mut controls, Vec2f::ZERO, &mut rng));
    }
    assert_eq!(sim.ticks(), 60);
    assert!(sim.state.throttle.throttle > 0.0);
    assert!(sim.state.attitude.pitch_velocity > 0.0);
    assert!(sim.last_step.controls.throttle_up);
}

#[test]
fn failed_cockpit_keeps_the_craft_parked() {
    let mut sim = sim();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(sim.cockpit.resolve(Err("file not found".into())));
    // A started load resolves once; a late success does not revive it.
    assert!(!sim.cockpit.resolve(Ok(())));
    assert_eq!(sim.cockpit, AssetStatus::Failed("file not found".into()));
    let mut controls = ControlState::default();
    controls.set(ControlAction::ThrottleUp, true);
    assert!(!sim.tick(&mut controls, Vec2f::ZERO, &mut rng));
    assert!(!sim.is_active());
}

#[test]
fn stop_ends_ticking() {
    let mut sim = sim();
    let mut rng = StdRng::seed_from_u64(0);
    sim.cockpit.resolve(Ok(()));
    let mut controls = ControlState::default();
    assert!(sim.tick(&mut controls, Vec2f::ZERO, &mut rng));
    sim.stop();
    assert!(!sim.is_running());
    assert!(!sim.tick(&mut controls, Vec2f::ZERO, &mut rng));
    assert_eq!(sim.ticks(), 1);
}

#[test]
fn wheel_notches_are_consumed_once() {
    let mut sim = sim();
    let mut rng = StdRng::seed_from_u64(0);
    sim.cockpit.resolve(Ok(()));
    let mut controls = ControlState::default();
    controls.add_wheel(2.0);
    sim.tick(&mut controls, Vec2f::ZERO, &mut rng);
    sim.tick(&mut controls, Vec2f::ZERO, &mut rng);
    assert_eq!(controls.wheel_notches, 0.0);
    let step = sim.spec.throttle.wheel_step;
    assert!((sim.state.throttle.throttle - 2.0 * step).abs() < 1e-4);
}

#[test]
fn latch_tracks_last_event_per_flag() {
    let mut controls = ControlState::default();
    controls.set(ControlAction::RollLeft, true);
    controls.set(ControlAction::PitchDown, true);
    controls.set(ControlAction::RollLeft, false);
    assert!(!controls.is_set(ControlAction::RollLeft));
    assert!(controls.is_set(ControlAction::PitchDown));
    controls.add_wheel(f32::INFINITY);
    assert_eq!(controls.wheel_notches, 0.0);
    controls.release_all();
    assert_eq!(controls, ControlState::default());
}

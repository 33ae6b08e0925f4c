use flight::camera_feel::{forward_lean_target, sample_shake};
use flight::{update_camera_feel, CameraFeelSpec, CameraFeelState, ControlAction, ControlState, FlightState, Vec2f};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn cruising(throttle: f32, speed: f32) -> FlightState {
    let mut s = FlightState::default();
    s.throttle.throttle = throttle;
    s.throttle.speed = speed;
    s
}

#[test]
fn shake_never_leaves_the_clamp_radius() {
    let spec = CameraFeelSpec {
        shake_intensity: 10.0,
        shake_limit: 0.05,
        ..CameraFeelSpec::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    let flight = cruising(100.0, 500.0);
    let mut feel = CameraFeelState::default();
    let mut max_seen = 0.0_f32;
    for _ in 0..10_000 {
        update_camera_feel(&spec, &flight, &ControlState::default(), true, Vec2f::ZERO, &mut feel, &mut rng);
        let len = feel.shake_offset.length();
        assert!(len <= spec.shake_limit + 1e-6, "shake {len} exceeded limit");
        max_seen = max_seen.max(len);
    }
    assert!(max_seen > spec.shake_limit * 0.9, "clamp radius should actually be reached");
}

#[test]
fn no_throttle_means_no_shake() {
    let spec = CameraFeelSpec::default();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        assert_eq!(sample_shake(&spec, 0.0, &mut rng), Vec2f::ZERO);
    }
}

#[test]
fn forward_lean_targets_follow_throttle_and_brake() {
    let spec = CameraFeelSpec::default();
    let mut controls = ControlState::default();

    assert_eq!(forward_lean_target(&spec, &controls, &cruising(80.0, 300.0)), 0.0);

    controls.set(ControlAction::ThrottleUp, true);
    let full = forward_lean_target(&spec, &controls, &cruising(100.0, 300.0));
    let expected = spec.inertia_intensity * ((spec.inertia_exponent * 100.0).exp() - 1.0) / 3.0;
    assert!((full - expected).abs() < 1e-6);
    let half = forward_lean_target(&spec, &controls, &cruising(50.0, 300.0));
    assert!(half > 0.0 && half < full);

    controls.set(ControlAction::Brake, true);
    assert_eq!(forward_lean_target(&spec, &controls, &cruising(100.0, 300.0)), -spec.inertia_intensity);
    assert_eq!(forward_lean_target(&spec, &controls, &cruising(100.0, 0.0)), 0.0);
}

#[test]
fn leans_approach_their_targets_smoothly() {
    let spec = CameraFeelSpec::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut flight = cruising(100.0, 800.0);
    flight.attitude.pitch_velocity = 0.03;
    flight.attitude.yaw_velocity = -0.01;
    let mut controls = ControlState::default();
    controls.set(ControlAction::Brake, true);

    let mut feel = CameraFeelState::default();
    update_camera_feel(&spec, &flight, &controls, true, Vec2f::ZERO, &mut feel, &mut rng);
    // First tick covers exactly `smoothing` of the distance.
    assert!((feel.inertial_z_offset - (-spec.inertia_intensity * spec.smoothing)).abs() < 1e-6);

    for _ in 0..200 {
        update_camera_feel(&spec, &flight, &controls, true, Vec2f::ZERO, &mut feel, &mut rng);
    }
    let pitch_target = -0.03 * 800.0 * spec.pitch_lean_gain;
    let yaw_target = 0.01 * 800.0 * spec.yaw_lean_gain;
    assert!((feel.inertial_z_offset + spec.inertia_intensity).abs() < 1e-4);
    assert!((feel.pitch_lean_offset - pitch_target).abs() < 1e-4);
    assert!((feel.yaw_lean_offset - yaw_target).abs() < 1e-4);
}

#[test]
fn yaw_lean_is_omitted_without_a_yaw_axis() {
    let spec = CameraFeelSpec::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut flight = cruising(50.0, 500.0);
    flight.attitude.yaw_velocity = 0.02;
    let mut feel = CameraFeelState::default();
    for _ in 0..50 {
        update_camera_feel(&spec, &flight, &ControlState::default(), false, Vec2f::ZERO, &mut feel, &mut rng);
    }
    assert_eq!(feel.yaw_lean_offset, 0.0);
}

#[test]
fn mouse_look_tracks_a_bounded_cone() {
    let spec = CameraFeelSpec::default();
    let mut rng = StdRng::seed_from_u64(9);
    let flight = FlightState::default();
    let mut feel = CameraFeelState::default();
    for _ in 0..400 {
        update_camera_feel(&spec, &flight, &ControlState::default(), true, Vec2f::new(5.0, -5.0), &mut feel, &mut rng);
        assert!(feel.look_yaw.abs() <= spec.max_look_yaw + 1e-6);
        assert!(feel.look_pitch.abs() <= spec.max_look_pitch + 1e-6);
    }
    assert!((feel.look_yaw + spec.max_look_yaw).abs() < 1e-3);
    assert!((feel.look_pitch + spec.max_look_pitch).abs() < 1e-3);

    update_camera_feel(&spec, &flight, &ControlState::default(), true, Vec2f::new(f32::NAN, 0.0), &mut feel, &mut rng);
    assert!(feel.look_yaw.is_finite());
}

#[test]
fn camera_feel_leaves_flight_state_untouched() {
    let spec = CameraFeelSpec::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut flight = cruising(70.0, 640.0);
    flight.attitude.pitch_velocity = 0.02;
    let before = flight;
    let mut feel = CameraFeelState::default();
    for _ in 0..100 {
        update_camera_feel(&spec, &flight, &ControlState::default(), true, Vec2f::new(0.3, 0.2), &mut feel, &mut rng);
    }
    assert_eq!(flight, before);
}

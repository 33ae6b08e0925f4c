use flight::flight_model::{apply_local_rotations, integrate_axis};
use flight::{craftspecs, step_flight, ControlAction, ControlState, FlightState, Quatf};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ACTIONS: [ControlAction; 9] = [
    ControlAction::PitchUp,
    ControlAction::PitchDown,
    ControlAction::RollLeft,
    ControlAction::RollRight,
    ControlAction::YawLeft,
    ControlAction::YawRight,
    ControlAction::ThrottleUp,
    ControlAction::ThrottleDown,
    ControlAction::Brake,
];

#[test]
fn rates_throttle_and_speed_stay_bounded_under_random_input() {
    let spec = craftspecs::spaceship_spec();
    let yaw = spec.attitude.yaw.expect("spaceship has a yaw axis");
    let mut state = FlightState::default();
    let mut controls = ControlState::default();
    let mut rng = StdRng::seed_from_u64(7);

    for tick in 0..5_000 {
        // Flip a random control every few ticks; several may be held at once.
        if tick % 3 == 0 {
            let action = ACTIONS[rng.gen_range(0..ACTIONS.len())];
            controls.set(action, rng.gen_bool(0.6));
        }
        step_flight(&spec, &controls, &mut state, spec.tick_dt);

        let a = state.attitude;
        assert!(a.pitch_velocity.abs() <= spec.attitude.pitch.max_velocity, "pitch rate {} at tick {tick}", a.pitch_velocity);
        assert!(a.roll_velocity.abs() <= spec.attitude.roll.max_velocity, "roll rate {} at tick {tick}", a.roll_velocity);
        assert!(a.yaw_velocity.abs() <= yaw.max_velocity, "yaw rate {} at tick {tick}", a.yaw_velocity);
        assert!((0.0..=100.0).contains(&state.throttle.throttle), "throttle {}", state.throttle.throttle);
        assert!((0.0..=spec.throttle.max_speed).contains(&state.throttle.speed), "speed {}", state.throttle.speed);
    }
}

#[test]
fn released_rate_decays_geometrically_without_reaching_zero() {
    let spec = craftspecs::spaceship_spec();
    let damping = spec.attitude.pitch.damping;
    let v0 = 0.02_f32;
    let mut v = v0;
    for n in 1..=200 {
        v = integrate_axis(&spec.attitude.pitch, v, false, false, spec.tick_dt);
        let expected = v0 * damping.powi(n);
        assert!(
            (v - expected).abs() <= expected * 1e-4,
            "after {n} ticks: v={v}, expected={expected}"
        );
    }
    assert!(v > 0.0, "damped rate must not snap to zero (v={v})");
}

#[test]
fn positive_flag_wins_when_both_directions_are_held() {
    let spec = craftspecs::spaceship_spec();
    let v = integrate_axis(&spec.attitude.roll, 0.0, true, true, spec.tick_dt);
    assert!(v > 0.0);
}

#[test]
fn pitch_then_roll_is_the_committed_rotation_order() {
    let spec = craftspecs::spaceship_spec();
    let mut state = FlightState::default();
    state.attitude.pitch_velocity = 0.01;
    state.attitude.roll_velocity = 0.01;

    step_flight(&spec, &ControlState::default(), &mut state, spec.tick_dt);

    // No input held, so both rates were damped once before being applied.
    let p = 0.01 * spec.attitude.pitch.damping;
    let r = 0.01 * spec.attitude.roll.damping;
    let pitch_then_roll = apply_local_rotations(apply_local_rotations(Quatf::IDENTITY, p, 0.0, 0.0), 0.0, r, 0.0);
    let roll_then_pitch = apply_local_rotations(apply_local_rotations(Quatf::IDENTITY, 0.0, r, 0.0), p, 0.0, 0.0);

    assert!(
        state.pose.orientation.abs_diff_eq(pitch_then_roll, 1e-6),
        "expected pitch→roll composition; got {:?} vs {:?}",
        state.pose.orientation,
        pitch_then_roll
    );
    assert!(
        !state.pose.orientation.abs_diff_eq(roll_then_pitch, 1e-6),
        "rotations must not commute at this magnitude"
    );
}

#[test]
fn cockpit_variant_never_yaws() {
    let spec = craftspecs::cockpit_spec();
    let mut state = FlightState::default();
    let mut controls = ControlState::default();
    controls.set(ControlAction::YawLeft, true);
    for _ in 0..120 {
        step_flight(&spec, &controls, &mut state, spec.tick_dt);
    }
    assert_eq!(state.attitude.yaw_velocity, 0.0);
    assert!(state.pose.orientation.abs_diff_eq(Quatf::IDENTITY, 1e-6));
}

#[test]
fn pitch_up_raises_the_nose() {
    let spec = craftspecs::spaceship_spec();
    let mut state = FlightState::default();
    let mut controls = ControlState::default();
    controls.set(ControlAction::PitchUp, true);
    for _ in 0..30 {
        step_flight(&spec, &controls, &mut state, spec.tick_dt);
    }
    let fwd = state.pose.orientation * flight::Vec3f::NEG_Z;
    assert!(fwd.y > 0.05, "expected nose-up pitch; forward.y = {}", fwd.y);
}

use super::attitude::{apply_local_rotations, step_attitude};
use super::throttle::step_throttle;
use super::translation::step_translation;
use super::types::{FlightState, FlightStepDebug};
use super::util::BODY_FWD;
use crate::{ControlState, FlightSpec};

/// Advance the craft by one tick of `dt` seconds.
/// See `step_flight_dbg` for the stage order and telemetry.
pub fn step_flight(spec: &FlightSpec, controls: &ControlState, state: &mut FlightState, dt: f32) {
    step_flight_dbg(spec, controls, state, dt, None);
}

/// Variant of `step_flight` that fills out an optional debug telemetry struct.
///
/// Stages run in a fixed order every tick: attitude rates, local rotation,
/// throttle and speed (using the fresh rates for the turn penalty), then
/// translation. Pending wheel notches in `controls` are applied once; the
/// caller is responsible for draining them.
pub fn step_flight_dbg(
    spec: &FlightSpec,
    controls: &ControlState,
    state: &mut FlightState,
    dt: f32,
    mut dbg: Option<&mut FlightStepDebug>,
) {
    if dt <= 0.0 || !dt.is_finite() {
        return;
    }

    step_attitude(&spec.attitude, controls, &mut state.attitude, dt);
    let a = state.attitude;
    state.pose.orientation = apply_local_rotations(
        state.pose.orientation,
        a.pitch_velocity,
        a.roll_velocity,
        a.yaw_velocity,
    );

    let (speed_raw, penalty) = step_throttle(
        &spec.throttle,
        controls,
        controls.wheel_notches,
        &state.attitude,
        &mut state.throttle,
        dt,
    );

    step_translation(
        spec,
        state.throttle.speed,
        &mut state.pose,
        &mut state.motion,
        dt,
    );

    if let Some(d) = dbg.as_mut() {
        d.dt = dt;
        d.controls = *controls;
        d.pitch_velocity = a.pitch_velocity;
        d.roll_velocity = a.roll_velocity;
        d.yaw_velocity = a.yaw_velocity;
        d.throttle = state.throttle.throttle;
        d.speed_before_penalty = speed_raw;
        d.turn_penalty = penalty;
        d.speed = state.throttle.speed;
        d.braking = controls.braking;
        d.forward = state.pose.orientation * BODY_FWD;
        d.acceleration = state.motion.acceleration;
        d.velocity = state.motion.velocity;
        d.position = state.pose.position;
    }
}

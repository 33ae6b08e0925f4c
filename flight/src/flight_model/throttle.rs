use crate::{AttitudeState, ControlState, SpeedModel, ThrottleSpec, ThrottleState};

use super::util::finite_or_zero;

/// Multiplier applied to speed every tick; aggressive maneuvering always costs speed.
/// `1 - k·(|pitch| + w·(|roll| + |yaw|))`, clamped to [0, 1].
pub fn turn_penalty_factor(spec: &ThrottleSpec, attitude: &AttitudeState) -> f32 {
    let turn = attitude.pitch_velocity.abs()
        + spec.turn_penalty_w * (attitude.roll_velocity.abs() + attitude.yaw_velocity.abs());
    (1.0 - spec.turn_penalty_k * turn).clamp(0.0, 1.0)
}

pub(super) fn step_throttle_lever(spec: &ThrottleSpec, controls: &ControlState, wheel: f32, throttle: f32, dt: f32) -> f32 {
    let mut t = finite_or_zero(throttle).clamp(0.0, 100.0);
    if controls.throttle_up {
        t = (t + spec.rate_per_s * dt).min(100.0);
    }
    if controls.throttle_down {
        t = (t - spec.rate_per_s * dt).max(0.0);
    }
    if wheel != 0.0 {
        t = (t + wheel * spec.wheel_step).clamp(0.0, 100.0);
    }
    t
}

/// Speed before the turn penalty. Braking overrides throttle acceleration for the tick.
pub(super) fn step_speed(spec: &ThrottleSpec, braking: bool, state: &ThrottleState, dt: f32) -> f32 {
    let max_speed = spec.max_speed.max(0.0);
    let speed = finite_or_zero(state.speed);
    if braking {
        return (speed - spec.brake_deceleration * dt).max(0.0);
    }
    let next = match spec.speed_model {
        SpeedModel::Direct => state.throttle / 100.0 * max_speed,
        SpeedModel::Accumulated => {
            speed + (state.throttle / 100.0) * spec.acceleration_gain * max_speed * dt
        }
    };
    next.clamp(0.0, max_speed)
}

/// Returns `(speed_before_penalty, penalty_factor)`.
pub(super) fn step_throttle(
    spec: &ThrottleSpec,
    controls: &ControlState,
    wheel: f32,
    attitude: &AttitudeState,
    state: &mut ThrottleState,
    dt: f32,
) -> (f32, f32) {
    // Throttle keeps moving even while braking; the brake only acts on speed.
    state.throttle = step_throttle_lever(spec, controls, wheel, state.throttle, dt);
    let raw = step_speed(spec, controls.braking, state, dt);
    let penalty = turn_penalty_factor(spec, attitude);
    state.speed = (raw * penalty).clamp(0.0, spec.max_speed.max(0.0));
    (raw, penalty)
}

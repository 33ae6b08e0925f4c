use crate::{AttitudeSpec, AttitudeState, AxisSpec, ControlState, Quatf};

use super::util::finite_or_zero;

/// One axis of the attitude integrator. `positive` wins over `negative` when
/// both are held; with neither held the rate decays by `spec.damping`.
pub fn integrate_axis(spec: &AxisSpec, velocity: f32, positive: bool, negative: bool, dt: f32) -> f32 {
    let max = spec.max_velocity.abs();
    let v = finite_or_zero(velocity);
    let next = if positive {
        (v + spec.acceleration * dt).min(max)
    } else if negative {
        (v - spec.acceleration * dt).max(-max)
    } else {
        v * spec.damping
    };
    next.clamp(-max, max)
}

/// Compose the per-tick local rotations onto `orientation`.
/// Committed order: pitch about local X, then roll about local Z, then yaw about local Y.
pub fn apply_local_rotations(orientation: Quatf, pitch: f32, roll: f32, yaw: f32) -> Quatf {
    let delta_pitch = Quatf::from_rotation_x(pitch);
    let delta_roll = Quatf::from_rotation_z(roll);
    let delta_yaw = Quatf::from_rotation_y(yaw);
    (orientation * delta_pitch * delta_roll * delta_yaw).normalize()
}

pub(super) fn step_attitude(
    spec: &AttitudeSpec,
    controls: &ControlState,
    attitude: &mut AttitudeState,
    dt: f32,
) {
    attitude.pitch_velocity = integrate_axis(
        &spec.pitch,
        attitude.pitch_velocity,
        controls.pitch_up,
        controls.pitch_down,
        dt,
    );
    attitude.roll_velocity = integrate_axis(
        &spec.roll,
        attitude.roll_velocity,
        controls.roll_left,
        controls.roll_right,
        dt,
    );
    attitude.yaw_velocity = match &spec.yaw {
        Some(yaw) => integrate_axis(
            yaw,
            attitude.yaw_velocity,
            controls.yaw_left,
            controls.yaw_right,
            dt,
        ),
        None => 0.0,
    };
}

use crate::{CraftPose, FlightSpec, VelocityState, Vec3f};

use super::util::BODY_FWD;

/// Thrust along body forward, integrated with multiplicative damping so the
/// craft settles at a terminal velocity for a sustained speed.
pub(super) fn step_translation(
    spec: &FlightSpec,
    speed: f32,
    pose: &mut CraftPose,
    motion: &mut VelocityState,
    dt: f32,
) {
    let local = BODY_FWD * (speed * spec.accel_scale);
    motion.acceleration = pose.orientation * local;
    motion.velocity += motion.acceleration * dt;
    motion.velocity *= spec.velocity_damping;
    if !motion.velocity.is_finite() {
        motion.velocity = Vec3f::ZERO;
    }
    // Velocity is in units per tick.
    pose.position += motion.velocity;
}

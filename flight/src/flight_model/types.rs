use crate::{ControlState, Quatf, Vec3f};

#[derive(Debug, Clone, Copy, Default)]
pub struct FlightStepDebug {
    pub dt: f32,
    pub controls: ControlState,
    // Attitude (rad/tick) after integration
    pub pitch_velocity: f32,
    pub roll_velocity: f32,
    pub yaw_velocity: f32,
    // Throttle & speed
    pub throttle: f32,
    pub speed_before_penalty: f32,
    pub turn_penalty: f32,
    pub speed: f32,
    pub braking: bool,
    // Translation
    pub forward: Vec3f,
    pub acceleration: Vec3f,
    pub velocity: Vec3f,
    pub position: Vec3f,
}

/// Angular rates in radians per tick, each bounded by its axis maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttitudeState {
    pub pitch_velocity: f32,
    pub roll_velocity: f32,
    pub yaw_velocity: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThrottleState {
    /// Percentage in [0, 100].
    pub throttle: f32,
    /// Scalar forward speed in [0, max_speed].
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraftPose {
    pub position: Vec3f,
    /// Orientation as quaternion (body→world), built by composing per-tick
    /// local rotations. Body axes: -Z forward, +Y up, +X right.
    pub orientation: Quatf,
}

impl Default for CraftPose {
    fn default() -> Self {
        Self {
            position: Vec3f::ZERO,
            orientation: Quatf::IDENTITY,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocityState {
    /// World-space velocity, in units per tick.
    pub velocity: Vec3f,
    /// World-space acceleration recomputed every tick.
    pub acceleration: Vec3f,
}

/// Everything the per-tick integrators own. Passed by `&mut` into each step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlightState {
    pub attitude: AttitudeState,
    pub throttle: ThrottleState,
    pub pose: CraftPose,
    pub motion: VelocityState,
}

impl FlightState {
    pub fn at(position: Vec3f, orientation: Quatf) -> Self {
        Self {
            pose: CraftPose {
                position,
                orientation,
            },
            ..Default::default()
        }
    }
}

//! Secondary camera motion derived from the flight state.
//!
//! Nothing here is authoritative: the update reads the flight state through a
//! shared borrow and only writes [`CameraFeelState`], so camera offsets can
//! never feed back into the craft pose or throttle.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::math::non_negative;
use crate::{lerp, ControlState, FlightState, Quatf, Vec2f, Vec3f};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraFeelSpec {
    /// Peak random shake per axis at full throttle (camera-local units).
    pub shake_intensity: f32,
    /// Hard radius for the shake offset.
    pub shake_limit: f32,
    /// Forward-lean amplitude. Zero disables the lean.
    pub inertia_intensity: f32,
    /// Exponent rate for the throttle-driven forward lean.
    pub inertia_exponent: f32,
    pub pitch_lean_gain: f32,
    pub yaw_lean_gain: f32,
    /// Fraction of the remaining distance covered per tick by the leans.
    pub smoothing: f32,
    /// Half-angle of the mouse-look cone (radians).
    pub max_look_yaw: f32,
    pub max_look_pitch: f32,
    pub look_smoothing: f32,
}

impl Default for CameraFeelSpec {
    fn default() -> Self {
        Self {
            shake_intensity: 0.1,
            shake_limit: 0.05,
            inertia_intensity: 0.05,
            inertia_exponent: 0.01,
            pitch_lean_gain: 0.002,
            yaw_lean_gain: 0.002,
            smoothing: 0.1,
            max_look_yaw: 0.6,
            max_look_pitch: 0.4,
            look_smoothing: 0.08,
        }
    }
}

impl CameraFeelSpec {
    /// Amplitudes, gains and look limits floored at zero; smoothing in [0, 1].
    pub fn sanitized(self) -> Self {
        let unit = |v: f32| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            shake_intensity: non_negative(self.shake_intensity),
            shake_limit: non_negative(self.shake_limit),
            inertia_intensity: non_negative(self.inertia_intensity),
            inertia_exponent: non_negative(self.inertia_exponent),
            pitch_lean_gain: non_negative(self.pitch_lean_gain),
            yaw_lean_gain: non_negative(self.yaw_lean_gain),
            smoothing: unit(self.smoothing),
            max_look_yaw: non_negative(self.max_look_yaw),
            max_look_pitch: non_negative(self.max_look_pitch),
            look_smoothing: unit(self.look_smoothing),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraFeelState {
    /// Camera-local X/Y shake; length never exceeds `CameraFeelSpec::shake_limit`.
    pub shake_offset: Vec2f,
    pub inertial_z_offset: f32,
    pub pitch_lean_offset: f32,
    pub yaw_lean_offset: f32,
    pub look_yaw: f32,
    pub look_pitch: f32,
}

impl CameraFeelState {
    /// Camera-local translation to apply under the pivot.
    pub fn camera_offset(&self) -> Vec3f {
        Vec3f::new(
            self.shake_offset.x + self.yaw_lean_offset,
            self.shake_offset.y + self.pitch_lean_offset,
            self.inertial_z_offset,
        )
    }

    /// Pivot rotation relative to the craft.
    pub fn look_rotation(&self) -> Quatf {
        Quatf::from_rotation_y(self.look_yaw) * Quatf::from_rotation_x(self.look_pitch)
    }
}

/// Forward-lean target as a function of throttle and brake.
pub fn forward_lean_target(spec: &CameraFeelSpec, controls: &ControlState, flight: &FlightState) -> f32 {
    let throttle = flight.throttle.throttle;
    if controls.throttle_up && !controls.braking {
        spec.inertia_intensity * ((spec.inertia_exponent * throttle).exp() - 1.0) / 3.0
    } else if controls.braking && flight.throttle.speed > 0.0 {
        -spec.inertia_intensity
    } else {
        0.0
    }
}

/// Random shake for this tick, scaled by throttle and hard-clamped to `shake_limit`.
pub fn sample_shake<R: Rng + ?Sized>(spec: &CameraFeelSpec, throttle: f32, rng: &mut R) -> Vec2f {
    let scale = spec.shake_intensity * (throttle.clamp(0.0, 100.0) / 100.0);
    let raw = Vec2f::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * scale;
    raw.clamp_length_max(spec.shake_limit.max(0.0))
}

/// Recompute every camera-feel channel for one tick.
///
/// `mouse` is the pointer position normalized to [-1, 1] on both axes
/// (+x right, +y up); values outside are clamped.
pub fn update_camera_feel<R: Rng + ?Sized>(
    spec: &CameraFeelSpec,
    flight: &FlightState,
    controls: &ControlState,
    yaw_enabled: bool,
    mouse: Vec2f,
    feel: &mut CameraFeelState,
    rng: &mut R,
) {
    let k = spec.smoothing.clamp(0.0, 1.0);
    let speed = flight.throttle.speed;

    feel.shake_offset = sample_shake(spec, flight.throttle.throttle, rng);

    let z_target = forward_lean_target(spec, controls, flight);
    feel.inertial_z_offset = lerp(feel.inertial_z_offset, z_target, k);

    let pitch_target = -flight.attitude.pitch_velocity * speed * spec.pitch_lean_gain;
    feel.pitch_lean_offset = lerp(feel.pitch_lean_offset, pitch_target, k);

    feel.yaw_lean_offset = if yaw_enabled {
        let yaw_target = -flight.attitude.yaw_velocity * speed * spec.yaw_lean_gain;
        lerp(feel.yaw_lean_offset, yaw_target, k)
    } else {
        0.0
    };

    let mouse = if mouse.is_finite() {
        mouse.clamp(Vec2f::splat(-1.0), Vec2f::splat(1.0))
    } else {
        Vec2f::ZERO
    };
    let look_k = spec.look_smoothing.clamp(0.0, 1.0);
    feel.look_yaw = lerp(feel.look_yaw, -mouse.x * spec.max_look_yaw, look_k);
    feel.look_pitch = lerp(feel.look_pitch, mouse.y * spec.max_look_pitch, look_k);
}

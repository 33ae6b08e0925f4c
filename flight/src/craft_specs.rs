use serde::{Deserialize, Serialize};

use crate::camera_feel::CameraFeelSpec;
use crate::math::{damping_factor, non_negative};

/// Tuning for one rotation axis. Velocities are radians per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    /// Velocity gained per second while the axis input is held.
    pub acceleration: f32,
    pub max_velocity: f32,
    /// Per-tick multiplicative decay with no input, in (0, 1).
    pub damping: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttitudeSpec {
    pub pitch: AxisSpec,
    pub roll: AxisSpec,
    /// Variants without a yaw axis keep yaw velocity at zero.
    pub yaw: Option<AxisSpec>,
}

/// How forward speed is derived from the throttle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedModel {
    /// Speed tracks `throttle/100 · max_speed` every tick.
    Direct,
    /// Speed accumulates toward max at a throttle-proportional rate.
    Accumulated,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrottleSpec {
    /// Throttle percentage points per second while held.
    pub rate_per_s: f32,
    /// Throttle percentage points per wheel notch.
    pub wheel_step: f32,
    pub max_speed: f32,
    pub acceleration_gain: f32,
    /// Speed units per second removed while braking.
    pub brake_deceleration: f32,
    /// Turn penalty `k`: fraction of speed lost per radian/tick of pitch rate.
    pub turn_penalty_k: f32,
    /// Turn penalty `w`: weight of roll and yaw rates relative to pitch.
    pub turn_penalty_w: f32,
    pub speed_model: SpeedModel,
}

/// Complete tuning for the flight model of one craft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightSpec {
    /// Fixed tick duration in seconds.
    pub tick_dt: f32,
    pub attitude: AttitudeSpec,
    pub throttle: ThrottleSpec,
    /// Forward acceleration per unit of speed.
    pub accel_scale: f32,
    /// Per-tick multiplicative velocity damping.
    pub velocity_damping: f32,
}

impl AxisSpec {
    pub fn sanitized(self) -> Self {
        Self {
            acceleration: non_negative(self.acceleration),
            max_velocity: non_negative(self.max_velocity),
            damping: damping_factor(self.damping),
        }
    }
}

impl ThrottleSpec {
    pub fn sanitized(self) -> Self {
        Self {
            rate_per_s: non_negative(self.rate_per_s),
            wheel_step: non_negative(self.wheel_step),
            max_speed: non_negative(self.max_speed),
            acceleration_gain: non_negative(self.acceleration_gain),
            brake_deceleration: non_negative(self.brake_deceleration),
            turn_penalty_k: non_negative(self.turn_penalty_k),
            turn_penalty_w: non_negative(self.turn_penalty_w),
            speed_model: self.speed_model,
        }
    }
}

impl FlightSpec {
    /// Out-of-range tuning is clamped, never rejected: magnitudes are floored
    /// at zero, damping factors kept in [0, `MAX_DAMPING`], and a non-positive
    /// tick falls back to 1/60 s.
    pub fn sanitized(self) -> Self {
        let tick_dt = if self.tick_dt.is_finite() && self.tick_dt > 0.0 {
            self.tick_dt
        } else {
            1.0 / 60.0
        };
        Self {
            tick_dt,
            attitude: AttitudeSpec {
                pitch: self.attitude.pitch.sanitized(),
                roll: self.attitude.roll.sanitized(),
                yaw: self.attitude.yaw.map(AxisSpec::sanitized),
            },
            throttle: self.throttle.sanitized(),
            accel_scale: non_negative(self.accel_scale),
            velocity_damping: damping_factor(self.velocity_damping),
        }
    }
}

impl Default for FlightSpec {
    fn default() -> Self {
        craftspecs::spaceship_spec()
    }
}

/// Craft presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CraftVariant {
    /// Pitch and roll only; throttle drives speed directly.
    Cockpit,
    /// Full three-axis craft with brake, turn penalty and inertial lean.
    #[default]
    Spaceship,
}

impl CraftVariant {
    pub fn flight_spec(self) -> FlightSpec {
        match self {
            CraftVariant::Cockpit => craftspecs::cockpit_spec(),
            CraftVariant::Spaceship => craftspecs::spaceship_spec(),
        }
    }

    pub fn camera_feel_spec(self) -> CameraFeelSpec {
        match self {
            CraftVariant::Cockpit => craftspecs::cockpit_camera_feel(),
            CraftVariant::Spaceship => craftspecs::spaceship_camera_feel(),
        }
    }
}

pub mod craftspecs {
    use super::*;

    // Cockpit: 60 Hz, slow pitch/roll, acceleration = throttle · 0.01.
    pub fn cockpit_spec() -> FlightSpec {
        let axis = AxisSpec {
            acceleration: 0.1,
            max_velocity: 0.03,
            damping: 0.9,
        };
        FlightSpec {
            tick_dt: 1.0 / 60.0,
            attitude: AttitudeSpec {
                pitch: axis,
                roll: axis,
                yaw: None,
            },
            throttle: ThrottleSpec {
                rate_per_s: 20.0,
                wheel_step: 5.0,
                max_speed: 100.0,
                acceleration_gain: 1.0,
                brake_deceleration: 100.0,
                turn_penalty_k: 0.0,
                turn_penalty_w: 0.0,
                speed_model: SpeedModel::Direct,
            },
            accel_scale: 0.01,
            velocity_damping: 0.99,
        }
    }

    pub fn spaceship_spec() -> FlightSpec {
        FlightSpec {
            tick_dt: 1.0 / 60.0,
            attitude: AttitudeSpec {
                pitch: AxisSpec {
                    acceleration: 0.1,
                    max_velocity: 0.03,
                    damping: 0.95,
                },
                roll: AxisSpec {
                    acceleration: 0.15,
                    max_velocity: 0.04,
                    damping: 0.95,
                },
                yaw: Some(AxisSpec {
                    acceleration: 0.05,
                    max_velocity: 0.015,
                    damping: 0.95,
                }),
            },
            throttle: ThrottleSpec {
                rate_per_s: 20.0,
                wheel_step: 5.0,
                max_speed: 1000.0,
                acceleration_gain: 0.5,
                brake_deceleration: 400.0,
                turn_penalty_k: 0.05,
                turn_penalty_w: 0.5,
                speed_model: SpeedModel::Accumulated,
            },
            accel_scale: 0.001,
            velocity_damping: 0.99,
        }
    }

    pub fn cockpit_camera_feel() -> CameraFeelSpec {
        CameraFeelSpec {
            inertia_intensity: 0.0,
            pitch_lean_gain: 0.0,
            yaw_lean_gain: 0.0,
            ..CameraFeelSpec::default()
        }
    }

    pub fn spaceship_camera_feel() -> CameraFeelSpec {
        CameraFeelSpec::default()
    }
}

//! Flight model shared by the client and its tests.
//!
//! This crate intentionally avoids any Bevy engine types beyond `bevy_math`.
//! It owns the per-tick cockpit dynamics (input latch, attitude, throttle,
//! translation), the derived camera feel, and the solar system data the
//! client turns into meshes.

mod math;
pub use math::{lerp, Quatf, Vec2f, Vec3f, MAX_DAMPING};

pub mod assets;
pub use assets::AssetStatus;

pub mod controls;
pub use controls::{ControlAction, ControlState};

pub mod flight_model;
pub use flight_model::{
    step_flight, step_flight_dbg, AttitudeState, CraftPose, FlightState, FlightStepDebug,
    ThrottleState, VelocityState,
};

pub mod camera_feel;
pub use camera_feel::{update_camera_feel, CameraFeelSpec, CameraFeelState};

mod craft_specs;
pub use craft_specs::{craftspecs, AttitudeSpec, AxisSpec, CraftVariant, FlightSpec, SpeedModel, ThrottleSpec};

pub mod sim;
pub use sim::FlightSim;

pub mod solar;
pub use solar::{LookupError, SolarSystem};

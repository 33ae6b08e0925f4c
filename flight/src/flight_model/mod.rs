mod util;
mod types;
mod attitude;
mod throttle;
mod translation;
mod dynamics;

pub use types::{AttitudeState, CraftPose, FlightState, FlightStepDebug, ThrottleState, VelocityState};
pub use attitude::{apply_local_rotations, integrate_axis};
pub use throttle::turn_penalty_factor;
pub use dynamics::{step_flight, step_flight_dbg};

use rand::Rng;

use crate::camera_feel::update_camera_feel;
use crate::flight_model::step_flight_dbg;
use crate::{AssetStatus, CameraFeelSpec, CameraFeelState, ControlState, FlightSpec, FlightState, FlightStepDebug, Vec2f};

/// Tick driver for one craft.
///
/// Holds the explicit `running` flag and the cockpit asset gate: ticks are
/// no-ops until the cockpit asset is ready and after [`FlightSim::stop`].
#[derive(Debug, Clone)]
pub struct FlightSim {
    pub spec: FlightSpec,
    pub feel_spec: CameraFeelSpec,
    pub state: FlightState,
    pub feel: CameraFeelState,
    pub cockpit: AssetStatus,
    pub last_step: FlightStepDebug,
    ticks: u64,
    running: bool,
}

impl FlightSim {
    /// Tuning is sanitized on the way in; see [`FlightSpec::sanitized`].
    pub fn new(spec: FlightSpec, feel_spec: CameraFeelSpec, state: FlightState) -> Self {
        Self {
            spec: spec.sanitized(),
            feel_spec: feel_spec.sanitized(),
            state,
            feel: CameraFeelState::default(),
            cockpit: AssetStatus::Pending,
            last_step: FlightStepDebug::default(),
            ticks: 0,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop ticking. There is no restart; build a new sim instead.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Movement and camera-look only run once the cockpit has arrived.
    pub fn is_active(&self) -> bool {
        self.running && self.cockpit.is_ready()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one fixed tick: flight integrators first, then the camera feel.
    /// Clears pending wheel notches from `controls`. Returns `false` when gated.
    pub fn tick<R: Rng + ?Sized>(&mut self, controls: &mut ControlState, mouse: Vec2f, rng: &mut R) -> bool {
        if !self.is_active() {
            return false;
        }
        let dt = self.spec.tick_dt;
        let mut dbg = FlightStepDebug::default();
        step_flight_dbg(&self.spec, controls, &mut self.state, dt, Some(&mut dbg));
        controls.clear_wheel();
        update_camera_feel(
            &self.feel_spec,
            &self.state,
            controls,
            self.spec.attitude.yaw.is_some(),
            mouse,
            &mut self.feel,
            rng,
        );
        self.last_step = dbg;
        self.ticks += 1;
        true
    }
}

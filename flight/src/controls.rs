use serde::{Deserialize, Serialize};

/// A discrete control the input layer can latch on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlAction {
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
    YawLeft,
    YawRight,
    ThrottleUp,
    ThrottleDown,
    Brake,
}

/// Latched control flags, mutated by input events and read once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlState {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub throttle_up: bool,
    pub throttle_down: bool,
    pub braking: bool,
    /// Signed scroll notches accumulated since the last tick (+ = throttle up).
    pub wheel_notches: f32,
}

impl ControlState {
    /// Latch `action` to `pressed`. The last event for a flag wins.
    pub fn set(&mut self, action: ControlAction, pressed: bool) {
        let flag = match action {
            ControlAction::PitchUp => &mut self.pitch_up,
            ControlAction::PitchDown => &mut self.pitch_down,
            ControlAction::RollLeft => &mut self.roll_left,
            ControlAction::RollRight => &mut self.roll_right,
            ControlAction::YawLeft => &mut self.yaw_left,
            ControlAction::YawRight => &mut self.yaw_right,
            ControlAction::ThrottleUp => &mut self.throttle_up,
            ControlAction::ThrottleDown => &mut self.throttle_down,
            ControlAction::Brake => &mut self.braking,
        };
        *flag = pressed;
    }

    pub fn is_set(&self, action: ControlAction) -> bool {
        match action {
            ControlAction::PitchUp => self.pitch_up,
            ControlAction::PitchDown => self.pitch_down,
            ControlAction::RollLeft => self.roll_left,
            ControlAction::RollRight => self.roll_right,
            ControlAction::YawLeft => self.yaw_left,
            ControlAction::YawRight => self.yaw_right,
            ControlAction::ThrottleUp => self.throttle_up,
            ControlAction::ThrottleDown => self.throttle_down,
            ControlAction::Brake => self.braking,
        }
    }

    /// Accumulate a mouse-wheel delta. Non-finite deltas are dropped.
    pub fn add_wheel(&mut self, delta: f32) {
        if delta.is_finite() {
            self.wheel_notches += delta;
        }
    }

    /// Drop pending wheel notches once the throttle model has applied them.
    pub fn clear_wheel(&mut self) {
        self.wheel_notches = 0.0;
    }

    /// Release every latched flag, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

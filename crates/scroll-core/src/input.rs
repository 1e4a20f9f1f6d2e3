//! Input sampling: wheel and touch deltas into the shared velocity accumulator.

use crate::physics::{clamp_velocity, BoundaryPolicy, PhysicsState};
use crate::profile::DeviceProfile;
use crate::tuning::Tuning;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Wheel,
    Touch,
}

/// One accepted input event, already converted to a progress delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputSample {
    pub delta_y: f64,
    pub source: SourceKind,
    pub timestamp_ms: f64,
}

#[derive(Clone, Debug)]
pub struct InputSampler {
    wheel_sensitivity: f64,
    touch_sensitivity: f64,
    touch_start_carry: f64,
    resistance_slope: f64,
    max_velocity: f64,
    boundary: BoundaryPolicy,
    accepts_wheel: bool,
    last_touch_y: Option<f64>,
    touching: bool,
    last_sample_velocity: f64,
    last_input_ms: f64,
}

impl InputSampler {
    pub fn new(tuning: &Tuning, profile: DeviceProfile) -> Self {
        let mut sampler = Self {
            wheel_sensitivity: 0.0,
            touch_sensitivity: 0.0,
            touch_start_carry: 0.0,
            resistance_slope: 0.0,
            max_velocity: 0.0,
            boundary: tuning.boundary,
            accepts_wheel: true,
            last_touch_y: None,
            touching: false,
            last_sample_velocity: 0.0,
            last_input_ms: 0.0,
        };
        sampler.reconfigure(tuning, profile);
        sampler
    }

    /// Swap constants after a device class change; drag state is kept.
    pub fn reconfigure(&mut self, tuning: &Tuning, profile: DeviceProfile) {
        self.wheel_sensitivity = tuning.wheel_sensitivity;
        self.touch_sensitivity = tuning.touch_sensitivity;
        self.touch_start_carry = tuning.touch_start_carry;
        self.resistance_slope = tuning.resistance_slope;
        self.max_velocity = tuning.max_velocity;
        self.boundary = tuning.boundary;
        self.accepts_wheel = profile.accepts_wheel();
    }

    pub fn on_wheel(&mut self, delta_y: f64, now_ms: f64, state: &mut PhysicsState) -> Option<InputSample> {
        if !self.accepts_wheel || !delta_y.is_finite() {
            return None;
        }
        let increment = delta_y * self.wheel_sensitivity;
        state.velocity = clamp_velocity(state.velocity + increment, self.max_velocity);
        self.last_input_ms = now_ms;
        Some(InputSample {
            delta_y: increment,
            source: SourceKind::Wheel,
            timestamp_ms: now_ms,
        })
    }

    pub fn on_touch_start(&mut self, y: f64, now_ms: f64, state: &mut PhysicsState) -> bool {
        if !y.is_finite() {
            return false;
        }
        self.last_touch_y = Some(y);
        self.touching = true;
        self.last_sample_velocity = 0.0;
        state.velocity = clamp_velocity(state.velocity * self.touch_start_carry, self.max_velocity);
        self.last_input_ms = now_ms;
        true
    }

    pub fn on_touch_move(&mut self, y: f64, now_ms: f64, state: &mut PhysicsState) -> Option<InputSample> {
        let last_y = self.last_touch_y?;
        if !y.is_finite() {
            return None;
        }
        let delta = last_y - y;
        self.last_touch_y = Some(y);

        let mut increment = delta * self.touch_sensitivity;
        increment *= self.boundary.resistance(state.position, increment, self.resistance_slope);
        if !increment.is_finite() {
            return None;
        }

        state.velocity = clamp_velocity(state.velocity + increment, self.max_velocity);
        self.last_sample_velocity = increment;
        self.last_input_ms = now_ms;
        Some(InputSample {
            delta_y: increment,
            source: SourceKind::Touch,
            timestamp_ms: now_ms,
        })
    }

    /// Ends the drag and returns the flick velocity, or `None` when no drag
    /// was in progress.
    pub fn on_touch_end(&mut self, now_ms: f64) -> Option<f64> {
        if !self.touching {
            return None;
        }
        self.last_touch_y = None;
        self.touching = false;
        self.last_input_ms = now_ms;
        Some(std::mem::take(&mut self.last_sample_velocity))
    }

    #[inline]
    pub fn is_touching(&self) -> bool {
        self.touching
    }

    #[inline]
    pub fn idle_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.last_input_ms).max(0.0)
    }
}

//! Per-frame integration of the progress value.
//!
//! The integrator is a discrete-time linear filter: velocity decays by a
//! constant factor each frame and `smoothed` low-passes `position`. Boundary
//! behavior is delegated to a [`BoundaryPolicy`] chosen from the device class.

use crate::constants::{HERO_PROGRESS, WORK_PROGRESS};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhysicsState {
    pub position: f64,
    pub velocity: f64,
    /// Low-passed `position`; the only value renderers read.
    pub smoothed: f64,
}

impl PhysicsState {
    pub fn at(progress: f64) -> Self {
        Self {
            position: progress,
            velocity: 0.0,
            smoothed: progress,
        }
    }

    /// `smoothed` clamped into the renderable range.
    #[inline]
    pub fn render(&self) -> f64 {
        clamp_unit(self.smoothed)
    }

    /// Reset anything non-finite so a single bad sample cannot diverge.
    pub fn sanitize(&mut self) {
        if !self.smoothed.is_finite() {
            self.smoothed = HERO_PROGRESS;
        }
        if !self.position.is_finite() {
            self.position = clamp_unit(self.smoothed);
        }
        if !self.velocity.is_finite() {
            self.velocity = 0.0;
        }
    }
}

/// How the integrator treats the [0, 1] boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryPolicy {
    /// Position never leaves [0, 1].
    HardClamp,
    /// Position may overshoot by up to `overscroll_limit` and is pulled back
    /// by a spring proportional to the overshoot.
    RubberBand {
        stiffness: f64,
        damping: f64,
        overscroll_limit: f64,
    },
}

impl BoundaryPolicy {
    /// Allowed position window.
    pub fn window(&self) -> (f64, f64) {
        match *self {
            BoundaryPolicy::HardClamp => (HERO_PROGRESS, WORK_PROGRESS),
            BoundaryPolicy::RubberBand {
                overscroll_limit, ..
            } => (HERO_PROGRESS - overscroll_limit, WORK_PROGRESS + overscroll_limit),
        }
    }

    #[inline]
    pub fn confine(&self, position: f64) -> f64 {
        let (lo, hi) = self.window();
        position.clamp(lo, hi)
    }

    /// Boundary force applied before damping (steps 1 and 2 of a frame).
    pub fn pre_step(&self, state: &mut PhysicsState) {
        match *self {
            BoundaryPolicy::HardClamp => {
                state.position = clamp_unit(state.position);
            }
            BoundaryPolicy::RubberBand {
                stiffness, damping, ..
            } => {
                let over = overshoot(state.position);
                if over != 0.0 {
                    state.velocity += -over * stiffness;
                    state.velocity *= damping;
                }
            }
        }
    }

    /// Scale factor for a touch increment. Pushing further out of bounds gets
    /// progressively harder but never reaches zero.
    pub fn resistance(&self, position: f64, increment: f64, slope: f64) -> f64 {
        match self {
            BoundaryPolicy::HardClamp => 1.0,
            BoundaryPolicy::RubberBand { .. } => {
                let over = overshoot(position);
                let same_direction = (over < 0.0 && increment < 0.0) || (over > 0.0 && increment > 0.0);
                if same_direction {
                    1.0 / (1.0 + slope * over.abs())
                } else {
                    1.0
                }
            }
        }
    }

    #[inline]
    pub fn allows_overshoot(&self) -> bool {
        matches!(self, BoundaryPolicy::RubberBand { .. })
    }
}

/// Corrective spring toward a snap target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub target: f64,
    pub stiffness: f64,
    /// Replaces the free-motion damping while the spring is active.
    pub damping: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Integrator {
    pub damping: f64,
    pub smooth_factor: f64,
    pub max_velocity: f64,
    pub boundary: BoundaryPolicy,
}

impl Integrator {
    /// Advance one frame.
    pub fn step(&self, state: &mut PhysicsState, spring: Option<Spring>) {
        state.sanitize();
        self.boundary.pre_step(state);

        let damping = match spring {
            Some(s) => {
                state.velocity += (s.target - state.position) * s.stiffness;
                s.damping
            }
            None => self.damping,
        };
        state.velocity = clamp_velocity(state.velocity * damping, self.max_velocity);

        state.position = self.boundary.confine(state.position + state.velocity);
        self.smooth(state);
    }

    #[inline]
    pub fn smooth(&self, state: &mut PhysicsState) {
        state.smoothed += (state.position - state.smoothed) * self.smooth_factor;
    }
}

/// Signed distance past the nearest boundary; zero inside [0, 1].
#[inline]
pub fn overshoot(position: f64) -> f64 {
    if position < HERO_PROGRESS {
        position - HERO_PROGRESS
    } else if position > WORK_PROGRESS {
        position - WORK_PROGRESS
    } else {
        0.0
    }
}

#[inline]
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        HERO_PROGRESS
    } else {
        v.clamp(HERO_PROGRESS, WORK_PROGRESS)
    }
}

#[inline]
pub fn clamp_velocity(v: f64, max_velocity: f64) -> f64 {
    if v.is_finite() {
        v.clamp(-max_velocity, max_velocity)
    } else {
        0.0
    }
}


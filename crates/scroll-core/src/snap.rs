//! Snap decision state machine.
//!
//! `Free` follows raw physics. `Committed(target)` adds a critically damped
//! spring toward the target until position and velocity both settle, at which
//! point position is placed exactly on the target and the engine returns to
//! `Free`.

use crate::constants::{HERO_PROGRESS, MIDPOINT, WORK_PROGRESS};
use crate::input::SourceKind;
use crate::physics::{clamp_velocity, PhysicsState, Spring};
use crate::tuning::{Rebound, SnapPolicy, Tuning};

/// The two stable resting points of the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Hero,
    Work,
}

impl Endpoint {
    #[inline]
    pub fn progress(self) -> f64 {
        match self {
            Endpoint::Hero => HERO_PROGRESS,
            Endpoint::Work => WORK_PROGRESS,
        }
    }

    /// Strict midpoint rule, no hysteresis.
    #[inline]
    pub fn by_midpoint(progress: f64) -> Self {
        if progress < MIDPOINT {
            Endpoint::Hero
        } else {
            Endpoint::Work
        }
    }

    /// A flick at or above `threshold` wins regardless of position.
    pub fn by_flick(flick: f64, position: f64, threshold: f64) -> Self {
        if flick.abs() >= threshold {
            if flick > 0.0 {
                Endpoint::Work
            } else {
                Endpoint::Hero
            }
        } else {
            Self::by_midpoint(position)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapState {
    Free,
    Committed(Endpoint),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapEvent {
    Committed(Endpoint),
    Settled(Endpoint),
    Cancelled(Endpoint),
}

/// What the idle rule needs to know about recent input.
#[derive(Clone, Copy, Debug)]
pub struct Activity {
    pub touching: bool,
    pub idle_ms: f64,
    pub last_source: Option<SourceKind>,
}

/// Stiffness that gives the spring-plus-damping step a double real root, so
/// a commit from rest approaches its target without overshoot.
#[inline]
pub fn critical_stiffness(damping: f64) -> f64 {
    let root = damping.sqrt();
    (1.0 - root) * (1.0 - root) / damping
}

#[derive(Clone, Debug)]
pub struct SnapEngine {
    policy: SnapPolicy,
    idle_ms: f64,
    velocity_threshold: f64,
    settle_epsilon: f64,
    flick_threshold: f64,
    stiffness: f64,
    damping: f64,
    max_velocity: f64,
    rebound: Option<Rebound>,
    state: SnapState,
}

impl SnapEngine {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            policy: tuning.snap_policy,
            idle_ms: tuning.snap_idle_ms,
            velocity_threshold: tuning.snap_velocity_threshold,
            settle_epsilon: tuning.settle_epsilon,
            flick_threshold: tuning.flick_threshold,
            stiffness: critical_stiffness(tuning.snap_damping),
            damping: tuning.snap_damping,
            max_velocity: tuning.max_velocity,
            rebound: tuning.rebound,
            state: SnapState::Free,
        }
    }

    /// Adopt a new rule set, keeping any active commitment.
    pub fn reconfigure(&mut self, tuning: &Tuning) {
        let state = self.state;
        *self = Self::new(tuning);
        self.state = state;
    }

    #[inline]
    pub fn state(&self) -> SnapState {
        self.state
    }

    #[inline]
    pub fn target(&self) -> Option<Endpoint> {
        match self.state {
            SnapState::Free => None,
            SnapState::Committed(t) => Some(t),
        }
    }

    #[inline]
    pub fn policy(&self) -> SnapPolicy {
        self.policy
    }

    pub fn cancel(&mut self) -> Option<SnapEvent> {
        match std::mem::replace(&mut self.state, SnapState::Free) {
            SnapState::Free => None,
            SnapState::Committed(t) => Some(SnapEvent::Cancelled(t)),
        }
    }

    /// Idle-threshold rule, evaluated once per frame before integration.
    /// Under the release-velocity policy it only covers wheel-driven motion,
    /// which has no release gesture.
    pub fn decide(&mut self, phys: &mut PhysicsState, activity: Activity) -> Option<SnapEvent> {
        if self.state != SnapState::Free || activity.touching {
            return None;
        }
        if self.policy == SnapPolicy::ReleaseVelocity && activity.last_source == Some(SourceKind::Touch) {
            return None;
        }
        if activity.idle_ms <= self.idle_ms || phys.velocity.abs() >= self.velocity_threshold {
            return None;
        }
        let target = Endpoint::by_midpoint(phys.render());
        self.commit(target, phys)
    }

    /// Release-velocity rule, evaluated when a drag ends.
    pub fn on_release(&mut self, flick: f64, phys: &mut PhysicsState) -> Option<SnapEvent> {
        if self.policy != SnapPolicy::ReleaseVelocity {
            return None;
        }
        let flick = if flick.is_finite() { flick } else { 0.0 };
        let target = Endpoint::by_flick(flick, phys.position, self.flick_threshold);
        self.commit(target, phys)
    }

    fn commit(&mut self, target: Endpoint, phys: &mut PhysicsState) -> Option<SnapEvent> {
        if self.is_resting_at(target, phys) {
            return None;
        }
        self.state = SnapState::Committed(target);
        if let (Endpoint::Hero, Some(r)) = (target, self.rebound) {
            if phys.position < HERO_PROGRESS + r.zone {
                phys.velocity = clamp_velocity(phys.velocity - r.impulse, self.max_velocity);
            }
        }
        Some(SnapEvent::Committed(target))
    }

    pub fn spring(&self) -> Option<Spring> {
        self.target().map(|t| Spring {
            target: t.progress(),
            stiffness: self.stiffness,
            damping: self.damping,
        })
    }

    /// Run after integration: finish the commit once it has converged.
    pub fn settle(&mut self, phys: &mut PhysicsState) -> Option<SnapEvent> {
        let target = self.target()?;
        if !self.is_resting_at(target, phys) {
            return None;
        }
        phys.position = target.progress();
        phys.velocity = 0.0;
        self.state = SnapState::Free;
        Some(SnapEvent::Settled(target))
    }

    fn is_resting_at(&self, target: Endpoint, phys: &PhysicsState) -> bool {
        (target.progress() - phys.position).abs() < self.settle_epsilon
            && phys.velocity.abs() < self.settle_epsilon
    }
}

//! Typed rule sets built from the constants table.
//!
//! One [`Tuning`] describes everything that differs between device classes:
//! sensitivities, damping, boundary policy and snap behavior.

use crate::constants::*;
use crate::physics::{BoundaryPolicy, Integrator};
use crate::profile::DeviceClass;
use std::str::FromStr;
use thiserror::Error;

/// How the snap engine decides to commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapPolicy {
    /// Commit once input is idle and velocity has settled; strict midpoint.
    IdleThreshold,
    /// Commit on touch release using the flick direction.
    ReleaseVelocity,
}

/// Bounce-back applied when committing to the hero near the lower boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rebound {
    pub zone: f64,
    pub impulse: f64,
}

/// Desktop feel selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Feel {
    #[default]
    Standard,
    /// Lower damping and faster smoothing for easier travel.
    Loose,
}

impl FromStr for Feel {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "standard" => Ok(Feel::Standard),
            "loose" => Ok(Feel::Loose),
            other => Err(TuningError::UnknownFeel(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("{name} must lie in (0, 1), got {value}")]
    OutOfUnitInterval { name: &'static str, value: f64 },
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("unknown scroll feel {0:?}")]
    UnknownFeel(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub wheel_sensitivity: f64,
    pub touch_sensitivity: f64,
    pub touch_start_carry: f64,
    pub resistance_slope: f64,
    pub max_velocity: f64,
    pub damping: f64,
    pub smooth_factor: f64,
    pub boundary: BoundaryPolicy,
    pub snap_policy: SnapPolicy,
    pub snap_idle_ms: f64,
    pub snap_velocity_threshold: f64,
    pub snap_damping: f64,
    pub settle_epsilon: f64,
    pub flick_threshold: f64,
    pub rebound: Option<Rebound>,
}

impl Tuning {
    pub fn desktop() -> Self {
        Self {
            wheel_sensitivity: WHEEL_SENSITIVITY,
            touch_sensitivity: TOUCH_SENSITIVITY_DESKTOP,
            touch_start_carry: TOUCH_START_VELOCITY_CARRY,
            resistance_slope: RESISTANCE_SLOPE,
            max_velocity: MAX_VELOCITY,
            damping: DAMPING,
            smooth_factor: SMOOTH_FACTOR,
            boundary: BoundaryPolicy::HardClamp,
            snap_policy: SnapPolicy::IdleThreshold,
            snap_idle_ms: SNAP_IDLE_MS,
            snap_velocity_threshold: SNAP_VELOCITY_THRESHOLD,
            snap_damping: SNAP_DAMPING,
            settle_epsilon: SNAP_SETTLE_EPSILON,
            flick_threshold: FLICK_THRESHOLD,
            rebound: None,
        }
    }

    pub fn loose_desktop() -> Self {
        Self {
            damping: DAMPING_LOOSE,
            smooth_factor: SMOOTH_FACTOR_LOOSE,
            ..Self::desktop()
        }
    }

    pub fn mobile() -> Self {
        Self {
            touch_sensitivity: TOUCH_SENSITIVITY_MOBILE,
            boundary: BoundaryPolicy::RubberBand {
                stiffness: RUBBER_STIFFNESS,
                damping: RUBBER_DAMPING,
                overscroll_limit: OVERSCROLL_LIMIT,
            },
            rebound: Some(Rebound {
                zone: REBOUND_ZONE,
                impulse: REBOUND_IMPULSE,
            }),
            ..Self::desktop()
        }
    }

    /// The feel only affects the desktop class; touch devices keep one rule set.
    pub fn for_class(class: DeviceClass, feel: Feel) -> Self {
        match (class, feel) {
            (DeviceClass::Mobile, _) => Self::mobile(),
            (DeviceClass::Desktop, Feel::Standard) => Self::desktop(),
            (DeviceClass::Desktop, Feel::Loose) => Self::loose_desktop(),
        }
    }

    pub fn integrator(&self) -> Integrator {
        Integrator {
            damping: self.damping,
            smooth_factor: self.smooth_factor,
            max_velocity: self.max_velocity,
            boundary: self.boundary,
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        unit("damping", self.damping)?;
        unit("smooth_factor", self.smooth_factor)?;
        unit("snap_damping", self.snap_damping)?;
        unit("touch_start_carry", self.touch_start_carry)?;
        positive("wheel_sensitivity", self.wheel_sensitivity)?;
        positive("touch_sensitivity", self.touch_sensitivity)?;
        positive("max_velocity", self.max_velocity)?;
        positive("snap_velocity_threshold", self.snap_velocity_threshold)?;
        positive("settle_epsilon", self.settle_epsilon)?;
        positive("flick_threshold", self.flick_threshold)?;
        if self.resistance_slope < 0.0 || !self.resistance_slope.is_finite() {
            return Err(TuningError::NotPositive {
                name: "resistance_slope",
                value: self.resistance_slope,
            });
        }
        if !(self.snap_idle_ms >= 0.0 && self.snap_idle_ms.is_finite()) {
            return Err(TuningError::NotPositive {
                name: "snap_idle_ms",
                value: self.snap_idle_ms,
            });
        }
        if let BoundaryPolicy::RubberBand {
            stiffness,
            damping,
            overscroll_limit,
        } = self.boundary
        {
            positive("rubber stiffness", stiffness)?;
            unit("rubber damping", damping)?;
            positive("overscroll_limit", overscroll_limit)?;
        }
        if let Some(r) = self.rebound {
            positive("rebound zone", r.zone)?;
            positive("rebound impulse", r.impulse)?;
        }
        Ok(())
    }
}

fn unit(name: &'static str, value: f64) -> Result<(), TuningError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(TuningError::OutOfUnitInterval { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NotPositive { name, value })
    }
}

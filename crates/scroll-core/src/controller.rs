//! The single owned scroll controller.
//!
//! Input entry points only touch the velocity accumulator, drag anchors and
//! pending flags. [`ScrollController::update`] is the only writer of
//! position and the smoothed value, and applies any pending device class
//! switch at the frame boundary.

use crate::constants::SMOOTH_SETTLE_EPSILON;
use crate::input::{InputSample, InputSampler, SourceKind};
use crate::pause::{PauseCoordinator, PauseInputs, PauseSignal, PauseSink, PauseState};
use crate::physics::{Integrator, PhysicsState};
use crate::profile::DeviceProfile;
use crate::projector::{project, Projection};
use crate::snap::{Activity, Endpoint, SnapEngine, SnapEvent, SnapState};
use crate::tuning::{Feel, Tuning, TuningError};
use std::time::Duration;

/// Everything a frontend needs after one frame.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub render: f64,
    pub projection: Projection,
    pub signal: Option<PauseSignal>,
    pub snap: Option<SnapEvent>,
}

pub struct ScrollController {
    profile: DeviceProfile,
    pending_profile: Option<DeviceProfile>,
    feel: Feel,
    tuning: Tuning,
    integrator: Integrator,
    sampler: InputSampler,
    snap: SnapEngine,
    pause: PauseCoordinator,
    physics: PhysicsState,
    clock_ms: f64,
    last_source: Option<SourceKind>,
    item_count: usize,
    disposed: bool,
}

impl ScrollController {
    pub fn init(profile: DeviceProfile, feel: Feel, item_count: usize) -> Result<Self, TuningError> {
        let tuning = Tuning::for_class(profile.class(), feel);
        let mut controller = Self::with_tuning(profile, tuning, item_count)?;
        controller.feel = feel;
        Ok(controller)
    }

    /// Build with an explicit rule set. A later device class switch falls
    /// back to the preset for the new class.
    pub fn with_tuning(profile: DeviceProfile, tuning: Tuning, item_count: usize) -> Result<Self, TuningError> {
        tuning.validate()?;
        log::info!(
            "[scroll] init class={:?} boundary={:?} snap={:?}",
            profile.class(),
            tuning.boundary,
            tuning.snap_policy
        );
        Ok(Self {
            profile,
            pending_profile: None,
            feel: Feel::Standard,
            tuning,
            integrator: tuning.integrator(),
            sampler: InputSampler::new(&tuning, profile),
            snap: SnapEngine::new(&tuning),
            pause: PauseCoordinator::new(),
            physics: PhysicsState::default(),
            clock_ms: 0.0,
            last_source: None,
            item_count,
            disposed: false,
        })
    }

    pub fn subscribe(&mut self, sink: impl PauseSink + 'static) {
        self.pause.subscribe(sink);
    }

    pub fn on_wheel(&mut self, delta_y: f64) -> Option<InputSample> {
        if self.disposed {
            return None;
        }
        let sample = self.sampler.on_wheel(delta_y, self.clock_ms, &mut self.physics)?;
        self.user_input(SourceKind::Wheel);
        Some(sample)
    }

    pub fn on_touch_start(&mut self, y: f64) {
        if self.disposed {
            return;
        }
        if self.sampler.on_touch_start(y, self.clock_ms, &mut self.physics) {
            self.user_input(SourceKind::Touch);
        }
    }

    pub fn on_touch_move(&mut self, y: f64) -> Option<InputSample> {
        if self.disposed {
            return None;
        }
        let sample = self.sampler.on_touch_move(y, self.clock_ms, &mut self.physics)?;
        self.user_input(SourceKind::Touch);
        Some(sample)
    }

    /// Also used for `touchcancel`.
    pub fn on_touch_end(&mut self) -> Option<SnapEvent> {
        if self.disposed {
            return None;
        }
        let flick = self.sampler.on_touch_end(self.clock_ms)?;
        let event = self.snap.on_release(flick, &mut self.physics);
        self.after_snap_event(event);
        event
    }

    pub fn on_visibility_change(&mut self, visible: bool) -> Option<PauseSignal> {
        if self.disposed {
            return None;
        }
        self.pause.set_page_visible(visible, self.physics.render())
    }

    /// Records the new viewport; the class switch happens on the next frame.
    pub fn on_resize(&mut self, viewport_width: f64) {
        if self.disposed {
            return;
        }
        let next = self.profile.with_viewport_width(viewport_width);
        self.pending_profile = (next != self.profile).then_some(next);
    }

    pub fn update(&mut self, dt: Duration) -> FrameOutput {
        if self.disposed {
            return self.output(None, None);
        }
        self.clock_ms += dt.as_secs_f64() * 1000.0;
        self.apply_pending_profile();

        let activity = Activity {
            touching: self.sampler.is_touching(),
            idle_ms: self.sampler.idle_ms(self.clock_ms),
            last_source: self.last_source,
        };
        let committed = self.snap.decide(&mut self.physics, activity);
        self.after_snap_event(committed);

        self.integrator.step(&mut self.physics, self.snap.spring());
        let settled = self.snap.settle(&mut self.physics);
        if let Some(SnapEvent::Settled(t)) = settled {
            log::debug!("[snap] settled on {:?}", t);
        }
        self.settle_smoothed();

        let signal = self.pause.evaluate(&PauseInputs {
            render: self.physics.render(),
            touching: self.sampler.is_touching(),
            committed_to_work: self.snap.target() == Some(Endpoint::Work),
            moving: self.physics.velocity.abs() >= self.tuning.snap_velocity_threshold,
        });
        self.output(signal, committed.or(settled))
    }

    /// Stops reacting to input and detaches subscribers. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.pause.clear_subscribers();
        log::info!("[scroll] disposed at progress {:.3}", self.physics.render());
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    #[inline]
    pub fn physics(&self) -> PhysicsState {
        self.physics
    }

    #[inline]
    pub fn render(&self) -> f64 {
        self.physics.render()
    }

    #[inline]
    pub fn snap_state(&self) -> SnapState {
        self.snap.state()
    }

    #[inline]
    pub fn pause_state(&self) -> PauseState {
        self.pause.state()
    }

    #[inline]
    pub fn profile(&self) -> DeviceProfile {
        self.profile
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    #[inline]
    pub fn is_touching(&self) -> bool {
        self.sampler.is_touching()
    }

    fn user_input(&mut self, source: SourceKind) {
        self.last_source = Some(source);
        if let Some(SnapEvent::Cancelled(t)) = self.snap.cancel() {
            log::debug!("[snap] cancelled commit to {:?}", t);
        }
        self.pause.force_pause(self.physics.render());
    }

    fn after_snap_event(&mut self, event: Option<SnapEvent>) {
        if let Some(SnapEvent::Committed(t)) = event {
            log::debug!("[snap] commit to {:?} from position {:.3}", t, self.physics.position);
            if t == Endpoint::Work {
                self.pause.force_pause(self.physics.render());
            }
        }
    }

    fn apply_pending_profile(&mut self) {
        let Some(next) = self.pending_profile.take() else {
            return;
        };
        let class_changed = next.class() != self.profile.class();
        self.profile = next;
        if !class_changed {
            self.sampler.reconfigure(&self.tuning, next);
            return;
        }
        self.tuning = Tuning::for_class(next.class(), self.feel);
        self.integrator = self.tuning.integrator();
        self.sampler.reconfigure(&self.tuning, next);
        self.snap.reconfigure(&self.tuning);
        self.physics.position = self.tuning.boundary.confine(self.physics.position);
        log::info!(
            "[scroll] device class -> {:?} boundary={:?}",
            next.class(),
            self.tuning.boundary
        );
    }

    /// Once physics is at rest, let the smoothed value land exactly on
    /// position instead of approaching it forever.
    fn settle_smoothed(&mut self) {
        let resting = self.snap.state() == SnapState::Free && self.physics.velocity == 0.0;
        if resting && (self.physics.position - self.physics.smoothed).abs() < SMOOTH_SETTLE_EPSILON {
            self.physics.smoothed = self.physics.position;
        }
    }

    fn output(&self, signal: Option<PauseSignal>, snap: Option<SnapEvent>) -> FrameOutput {
        let render = self.physics.render();
        FrameOutput {
            render,
            projection: project(render, self.item_count),
            signal,
            snap,
        }
    }
}

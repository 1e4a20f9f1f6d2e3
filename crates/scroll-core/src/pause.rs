//! Background animation pause coordination.
//!
//! The coordinator owns the "hero visible" flag and publishes edge-triggered
//! [`PauseSignal`]s to its subscribers. Subscribers never re-derive state.

use crate::constants::HERO_VISIBLE_EPSILON;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseState {
    Paused,
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseSignal {
    Pause,
    Resume,
}

impl PauseSignal {
    /// Name of the document-level event carrying this signal.
    pub fn event_name(self) -> &'static str {
        match self {
            PauseSignal::Pause => "hero:pause",
            PauseSignal::Resume => "hero:resume",
        }
    }
}

/// Receives pause/resume edges. Closures taking a signal implement it.
pub trait PauseSink {
    fn on_signal(&mut self, signal: PauseSignal, progress: f64);
}

impl<F: FnMut(PauseSignal, f64)> PauseSink for F {
    fn on_signal(&mut self, signal: PauseSignal, progress: f64) {
        self(signal, progress)
    }
}

/// Snapshot the resume rule is evaluated against.
#[derive(Clone, Copy, Debug)]
pub struct PauseInputs {
    pub render: f64,
    pub touching: bool,
    pub committed_to_work: bool,
    pub moving: bool,
}

pub struct PauseCoordinator {
    state: PauseState,
    page_visible: bool,
    sinks: Vec<Box<dyn PauseSink>>,
}

impl Default for PauseCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl PauseCoordinator {
    /// Starts playing: the page loads on the hero.
    pub fn new() -> Self {
        Self {
            state: PauseState::Playing,
            page_visible: true,
            sinks: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, sink: impl PauseSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn clear_subscribers(&mut self) {
        self.sinks.clear();
    }

    #[inline]
    pub fn state(&self) -> PauseState {
        self.state
    }

    #[inline]
    pub fn is_hero_visible(&self) -> bool {
        self.state == PauseState::Playing
    }

    #[inline]
    pub fn page_visible(&self) -> bool {
        self.page_visible
    }

    /// User input or a commit toward work.
    pub fn force_pause(&mut self, progress: f64) -> Option<PauseSignal> {
        self.transition(PauseState::Paused, progress)
    }

    /// Hiding the page pauses immediately; showing it only re-enables the
    /// resume rule for the next evaluation.
    pub fn set_page_visible(&mut self, visible: bool, progress: f64) -> Option<PauseSignal> {
        self.page_visible = visible;
        if visible {
            None
        } else {
            self.force_pause(progress)
        }
    }

    pub fn evaluate(&mut self, inputs: &PauseInputs) -> Option<PauseSignal> {
        let next = if self.page_visible && resume_allowed(inputs) {
            PauseState::Playing
        } else {
            PauseState::Paused
        };
        self.transition(next, inputs.render)
    }

    fn transition(&mut self, next: PauseState, progress: f64) -> Option<PauseSignal> {
        if next == self.state {
            return None;
        }
        self.state = next;
        let signal = match next {
            PauseState::Paused => PauseSignal::Pause,
            PauseState::Playing => PauseSignal::Resume,
        };
        log::debug!("[pause] {} at progress {:.3}", signal.event_name(), progress);
        for sink in &mut self.sinks {
            sink.on_signal(signal, progress);
        }
        Some(signal)
    }
}

/// Resume rule, page visibility aside: hero fully in view, no drag, no
/// pending move toward work and no residual motion.
#[inline]
pub fn resume_allowed(inputs: &PauseInputs) -> bool {
    inputs.render <= HERO_VISIBLE_EPSILON && !inputs.touching && !inputs.committed_to_work && !inputs.moving
}

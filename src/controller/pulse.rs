use std::time::{Duration, Instant};

use super::deferred::{Deferred, PULSE_FADE_OUT};

/// Whether a node should pulse right now. Hover arrives from the node itself
/// or from its sidebar entry; other-focused nodes never pulse.
pub fn wants_pulse(hovered: bool, is_selected: bool, any_selected: bool) -> bool {
    hovered && (!any_selected || is_selected)
}

/// Display-side pulse flag with a delayed switch-off so the exit animation can
/// finish. Does not touch selection or hover data.
#[derive(Debug, Default)]
pub struct PulseState {
    animating: bool,
    fade_out: Option<Deferred<()>>,
}

impl PulseState {
    pub fn update(&mut self, pulsing: bool, now: Instant) {
        if pulsing {
            self.animating = true;
            self.fade_out = None;
            return;
        }
        if self.animating && self.fade_out.is_none() {
            self.fade_out = Some(Deferred::new(now, PULSE_FADE_OUT, ()));
        }
        if let Some(timer) = self.fade_out.as_mut() {
            if timer.poll(now).is_some() {
                self.animating = false;
                self.fade_out = None;
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.fade_out.as_ref().and_then(|t| t.remaining(now))
    }
}

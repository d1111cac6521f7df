use std::time::{Duration, Instant};

use super::deferred::{Deferred, LOGIN_TRANSITION};

/// Themed entry screen. There is no authentication; the form just starts a
/// short black-screen transition into the diagram.
#[derive(Debug, Default)]
pub enum Gate {
    #[default]
    Login,
    Transitioning(Deferred<()>),
    Main,
}

impl Gate {
    pub fn submit(&mut self, now: Instant) {
        if matches!(self, Gate::Login) {
            log::debug!("login submitted");
            *self = Gate::Transitioning(Deferred::new(now, LOGIN_TRANSITION, ()));
        }
    }

    /// Returns true exactly once, on the frame the transition completes.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Gate::Transitioning(timer) = self {
            if timer.poll(now).is_some() {
                *self = Gate::Main;
                return true;
            }
        }
        false
    }

    pub fn logout(&mut self) {
        log::debug!("logout");
        *self = Gate::Login;
    }

    pub fn is_main(&self) -> bool {
        matches!(self, Gate::Main)
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self, Gate::Transitioning(_))
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self {
            Gate::Transitioning(timer) => timer.remaining(now),
            _ => None,
        }
    }
}

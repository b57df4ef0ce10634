//! Open/close state machine for the hinged device.
//!
//! `open()` / `close()` are declarative: they record the desired lid state
//! and nothing else. A per-frame reconciliation step starts the skinned
//! clip when desire and reality disagree, and clip completion, never a
//! request, is what flips the actual state. Rapid repeated requests during
//! an in-flight play therefore coalesce: once the current play completes,
//! the next reconciliation honors only the last requested state.

use crate::animation::action::ClipAction;

/// Observable phase of the hinge, derived state only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HingePhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Desired vs. actual hinge state plus the playback direction of the next
/// (or current) clip play.
#[derive(Debug, Clone)]
pub struct HingeState {
    is_open: bool,
    should_be_open: bool,
    /// `+1` while the next play opens the lid, `-1` while it closes it.
    time_scale_sign: f32,
}

impl HingeState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_open: false,
            should_be_open: false,
            time_scale_sign: 1.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[inline]
    #[must_use]
    pub fn should_be_open(&self) -> bool {
        self.should_be_open
    }

    #[inline]
    #[must_use]
    pub fn time_scale_sign(&self) -> f32 {
        self.time_scale_sign
    }

    /// Request the lid open. Takes effect at the next reconciliation.
    pub fn open(&mut self) {
        self.should_be_open = true;
    }

    /// Request the lid closed. Takes effect at the next reconciliation.
    pub fn close(&mut self) {
        self.should_be_open = false;
    }

    /// Request the opposite of the current desired state.
    pub fn toggle(&mut self) {
        self.should_be_open = !self.should_be_open;
    }

    #[must_use]
    pub fn phase(&self, action: Option<&ClipAction>) -> HingePhase {
        let running = action.is_some_and(ClipAction::is_running);
        match (running, self.time_scale_sign > 0.0, self.is_open) {
            (true, true, _) => HingePhase::Opening,
            (true, false, _) => HingePhase::Closing,
            (false, _, true) => HingePhase::Open,
            (false, _, false) => HingePhase::Closed,
        }
    }

    /// Per-frame reconciliation: start a play iff desire and reality
    /// disagree and nothing is in flight.
    ///
    /// With no clip on the asset (`action == None`) toggling has no visible
    /// effect, but the flag bookkeeping still proceeds so the widget's
    /// reported state stays truthful.
    pub fn reconcile(&mut self, action: Option<&mut ClipAction>, toggle_speed: f32) {
        if self.should_be_open == self.is_open {
            return;
        }
        match action {
            Some(action) => {
                if !action.is_running() {
                    action.time_scale = self.time_scale_sign * toggle_speed.abs();
                    action.play();
                }
            }
            None => {
                log::debug!("no open/close clip on asset; toggling flags only");
                self.on_clip_finished();
            }
        }
    }

    /// Clip completion handler: flip the actual state and reverse the
    /// direction of the next play.
    ///
    /// Deliberately does not re-read `should_be_open`; the next frame's
    /// reconciliation decides whether another play is needed.
    pub fn on_clip_finished(&mut self) {
        self.is_open = !self.is_open;
        self.time_scale_sign = -self.time_scale_sign;
    }
}

impl Default for HingeState {
    fn default() -> Self {
        Self::new()
    }
}

//! Skinned clip playback.
//!
//! The device asset carries a single authored open/close clip. It is played
//! once per toggle, forward to open and reversed (negative timescale) to
//! close, clamped at both ends; there is no looping.

/// An authored animation clip on the loaded asset.
///
/// Sampling the skinned pose is the render backend's business; the widget
/// only drives the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct HingeClip {
    pub name: String,
    /// Clip length in seconds.
    pub duration: f32,
}

impl HingeClip {
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration: duration.max(0.0),
        }
    }
}

/// Play-once action over a [`HingeClip`].
///
/// The action starts parked (`paused`). [`ClipAction::play`] unparks it;
/// each update accumulates `dt × time_scale` and clamps at the end the
/// playback is heading toward, auto-pausing there and reporting completion
/// exactly once.
#[derive(Debug, Clone)]
pub struct ClipAction {
    clip: HingeClip,

    pub time: f32,
    pub time_scale: f32,
    pub paused: bool,
    pub enabled: bool,
}

impl ClipAction {
    #[must_use]
    pub fn new(clip: HingeClip) -> Self {
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            paused: true,
            enabled: true,
        }
    }

    #[must_use]
    pub fn clip(&self) -> &HingeClip {
        &self.clip
    }

    /// Whether the clock is currently advancing.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.enabled && !self.paused
    }

    /// Unpark the action; playback direction comes from `time_scale`.
    pub fn play(&mut self) {
        self.paused = false;
    }

    /// Advance the clock by `dt` seconds.
    ///
    /// Returns `true` on the update that reaches (and clamps at) the end of
    /// the current playback direction.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.paused || !self.enabled {
            return false;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            // Degenerate clip: a play completes immediately.
            self.paused = true;
            return true;
        }

        self.time += dt * self.time_scale;

        if self.time_scale >= 0.0 && self.time >= duration {
            self.time = duration;
            self.paused = true;
            return true;
        }
        if self.time_scale < 0.0 && self.time <= 0.0 {
            self.time = 0.0;
            self.paused = true;
            return true;
        }
        false
    }
}
